use crate::{
    error::SlotError,
    types::{Slot, Stats},
};

/// All parking slots of one session, kept in insertion order.
///
/// The registry itself is not synchronised. Callers sharing it between
/// threads wrap the whole value in one lock, see [`crate::local_slots`].
#[derive(Debug, Clone, Default)]
pub struct SlotRegistry {
    slots: Vec<Slot>,
}

fn validate_number(number: i64) -> Result<u32, SlotError> {
    match u32::try_from(number) {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(SlotError::InvalidNumber),
    }
}

impl SlotRegistry {
    pub fn add_slot(
        &mut self,
        number: i64,
        covered: bool,
        ev_charging: bool,
    ) -> Result<Slot, SlotError> {
        let number = validate_number(number)?;
        if self.slots.iter().any(|slot| slot.number == number) {
            return Err(SlotError::DuplicateNumber(number));
        }

        let slot = Slot {
            number,
            covered,
            ev_charging,
            occupied: false,
        };
        self.slots.push(slot.clone());
        Ok(slot)
    }

    /// Occupies the lowest numbered free slot that has every requested feature.
    pub fn allocate(&mut self, require_ev: bool, require_covered: bool) -> Result<Slot, SlotError> {
        if self.is_empty() {
            return Err(SlotError::EmptyRegistry);
        }

        let nearest = self
            .slots
            .iter_mut()
            .filter(|slot| !slot.occupied)
            .filter(|slot| !require_ev || slot.ev_charging)
            .filter(|slot| !require_covered || slot.covered)
            .min_by_key(|slot| slot.number)
            .ok_or(SlotError::NoMatch)?;

        nearest.occupied = true;
        Ok(nearest.clone())
    }

    pub fn release(&mut self, number: i64) -> Result<Slot, SlotError> {
        let number = validate_number(number)?;
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.number == number)
            .ok_or(SlotError::NotFound(number))?;

        if !slot.occupied {
            return Err(SlotError::AlreadyFree(number));
        }
        slot.occupied = false;
        Ok(slot.clone())
    }

    pub fn stats(&self) -> Stats {
        let total = self.slots.len();
        let occupied = self.slots.iter().filter(|slot| slot.occupied).count();
        let occupancy_rate = if total > 0 {
            (occupied as f64 / total as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        Stats {
            total,
            occupied,
            available: total - occupied,
            occupancy_rate,
        }
    }

    /// Slots sorted by number.
    pub fn list(&self) -> Vec<Slot> {
        let mut slots = self.slots.clone();
        slots.sort_unstable_by_key(|slot| slot.number);
        slots
    }

    pub fn slots_in_insertion_order(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
