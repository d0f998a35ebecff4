use crate::{error::SlotError, types::Slot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddSlot,
    ParkVehicle,
    RemoveVehicle,
}

impl Operation {
    pub fn success_message(&self, slot: &Slot) -> String {
        match self {
            Operation::AddSlot => format!("Slot {} added successfully", slot.number),
            Operation::ParkVehicle => format!("Vehicle parked at slot {}", slot.number),
            Operation::RemoveVehicle => format!("Vehicle removed from slot {}", slot.number),
        }
    }
}

/// Append-only, human readable history of everything done to the lot.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl Default for ActivityLog {
    fn default() -> Self {
        let mut log = Self { entries: vec![] };
        log.push("Smart Parking Lot System started".into());
        log.push("---".into());
        log
    }
}

impl ActivityLog {
    fn push(&mut self, message: String) {
        self.entries.push(ActivityEntry {
            at: Utc::now(),
            message,
        });
    }

    /// Appends one line describing the outcome and returns it.
    pub fn record(&mut self, operation: Operation, outcome: &Result<Slot, SlotError>) -> String {
        let message = match outcome {
            Ok(slot) => operation.success_message(slot),
            Err(err) => format!("Error: {err}"),
        };
        self.push(message.clone());
        message
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }
}
