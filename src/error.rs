use thiserror::Error;

/// Everything that can go wrong while handling a slot. None of these are fatal,
/// they are shown to the user and the registry stays untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("Slot number must be a positive integer")]
    InvalidNumber,
    #[error("Slot {0} already exists")]
    DuplicateNumber(u32),
    #[error("No slots exist in the parking lot")]
    EmptyRegistry,
    #[error("No slot available with your requirements")]
    NoMatch,
    #[error("Slot {0} does not exist")]
    NotFound(u32),
    #[error("Slot {0} is already empty")]
    AlreadyFree(u32),
}

impl SlotError {
    /// Stable tag used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            SlotError::InvalidNumber => "invalid_number",
            SlotError::DuplicateNumber(_) => "duplicate_number",
            SlotError::EmptyRegistry => "empty_registry",
            SlotError::NoMatch => "no_match",
            SlotError::NotFound(_) => "not_found",
            SlotError::AlreadyFree(_) => "already_free",
        }
    }
}
