use crate::{
    activity::{ActivityEntry, ActivityLog, Operation},
    backend::SlotBackend,
    error::SlotError,
    slot_registry::SlotRegistry,
    types::{LotSnapshot, RawSlotNumber, Slot, Stats},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch::{self, Sender};
use tokio_stream::wrappers::WatchStream;
use tracing::{error, info};

#[derive(Debug, Default)]
struct Lot {
    registry: SlotRegistry,
    activity: ActivityLog,
}

impl Lot {
    fn snapshot(&self) -> LotSnapshot {
        LotSnapshot {
            slots: self.registry.list(),
            stats: self.registry.stats(),
        }
    }
}

/// In-memory slots of the running process. Registry and activity log share
/// one lock, so every operation and its log line happen as a single step.
#[derive(Debug, Clone)]
pub struct LocalSlots {
    lot: Arc<Mutex<Lot>>,
    sender: Sender<LotSnapshot>,
}

impl Default for LocalSlots {
    fn default() -> Self {
        let lot = Lot::default();
        let (sender, _) = watch::channel(lot.snapshot());
        Self {
            lot: Arc::new(Mutex::new(lot)),
            sender,
        }
    }
}

impl LocalSlots {
    pub fn insert_example_slots(&self) {
        const EXAMPLE_SLOTS: [(i64, bool, bool); 4] = [
            (1, false, false),
            (2, true, false),
            (3, false, true),
            (4, true, true),
        ];
        for (number, covered, ev_charging) in EXAMPLE_SLOTS {
            if let Err(err) = self.add_slot(number.into(), covered, ev_charging) {
                error!(%err, "Failed to insert example slot");
            }
        }
    }

    // Operations never leave the registry half updated, poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Lot> {
        self.lot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn run(
        &self,
        operation: Operation,
        apply: impl FnOnce(&mut SlotRegistry) -> Result<Slot, SlotError>,
    ) -> Result<Slot, SlotError> {
        let mut lot = self.lock();
        let outcome = apply(&mut lot.registry);
        let message = lot.activity.record(operation, &outcome);

        match &outcome {
            Ok(_) => {
                info!(?operation, "{message}");
                self.sender.send_replace(lot.snapshot());
            }
            Err(err) => error!(?operation, %err, "{message}"),
        }
        outcome
    }
}

impl SlotBackend for LocalSlots {
    fn slot_stream(&self) -> WatchStream<LotSnapshot> {
        WatchStream::new(self.sender.subscribe())
    }

    fn slots(&self) -> Vec<Slot> {
        self.lock().registry.list()
    }

    fn stats(&self) -> Stats {
        self.lock().registry.stats()
    }

    fn activity(&self) -> Vec<ActivityEntry> {
        self.lock().activity.entries().to_vec()
    }

    fn add_slot(
        &self,
        number: RawSlotNumber,
        covered: bool,
        ev_charging: bool,
    ) -> Result<Slot, SlotError> {
        self.run(Operation::AddSlot, |registry| {
            registry.add_slot(number.parse()?, covered, ev_charging)
        })
    }

    fn park_vehicle(&self, needs_ev: bool, needs_cover: bool) -> Result<Slot, SlotError> {
        self.run(Operation::ParkVehicle, |registry| {
            registry.allocate(needs_ev, needs_cover)
        })
    }

    fn remove_vehicle(&self, number: RawSlotNumber) -> Result<Slot, SlotError> {
        self.run(Operation::RemoveVehicle, |registry| {
            registry.release(number.parse()?)
        })
    }
}
