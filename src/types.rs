use crate::error::SlotError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub number: u32,
    pub covered: bool,
    pub ev_charging: bool,
    pub occupied: bool,
}

impl Slot {
    pub fn status_label(&self) -> &'static str {
        if self.occupied {
            "OCCUPIED"
        } else {
            "AVAILABLE"
        }
    }

    pub fn features_label(&self) -> String {
        let mut features = vec![];
        if self.covered {
            features.push("Covered");
        }
        if self.ev_charging {
            features.push("EV Charging");
        }
        if features.is_empty() {
            return "Standard".into();
        }
        features.join(" | ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
    /// Percentage rounded to one decimal, 0 for an empty lot.
    pub occupancy_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotSnapshot {
    pub slots: Vec<Slot>,
    pub stats: Stats,
}

/// A slot number as typed by a user. Forms send whatever is in the input
/// field, so anything that is not an integer is accepted here and rejected
/// by [`RawSlotNumber::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSlotNumber {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl RawSlotNumber {
    pub fn parse(&self) -> Result<i64, SlotError> {
        match self {
            RawSlotNumber::Number(number) => Ok(*number),
            RawSlotNumber::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| SlotError::InvalidNumber),
            RawSlotNumber::Other(_) => Err(SlotError::InvalidNumber),
        }
    }
}

impl From<i64> for RawSlotNumber {
    fn from(number: i64) -> Self {
        RawSlotNumber::Number(number)
    }
}

impl From<&str> for RawSlotNumber {
    fn from(text: &str) -> Self {
        RawSlotNumber::Text(text.into())
    }
}
