use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use futures::StreamExt;
use tokio::sync::watch::{self, Sender};
use tokio_stream::wrappers::WatchStream;

use crate::{
    activity::ActivityEntry,
    backend::SlotBackend,
    configuration::Configuration,
    error::SlotError,
    types::{LotSnapshot, RawSlotNumber, Slot, Stats},
};

pub struct MockSlotBackendInner {
    pub success: AtomicBool,
    pub calls_to_slot_stream: AtomicU64,
    pub calls_to_slots: AtomicU64,
    pub calls_to_stats: AtomicU64,
    pub calls_to_activity: AtomicU64,
    pub calls_to_add_slot: AtomicU64,
    pub calls_to_park_vehicle: AtomicU64,
    pub calls_to_remove_vehicle: AtomicU64,
    pub slots: Mutex<Vec<Slot>>,
    pub sender: Sender<LotSnapshot>,
}

#[derive(Clone)]
pub struct MockSlotBackend(pub Arc<MockSlotBackendInner>);

impl MockSlotBackendInner {
    fn new() -> Self {
        let (sender, _) = watch::channel(LotSnapshot {
            slots: vec![],
            stats: mock_stats(),
        });
        Self {
            success: AtomicBool::new(true),
            calls_to_slot_stream: AtomicU64::default(),
            calls_to_slots: AtomicU64::default(),
            calls_to_stats: AtomicU64::default(),
            calls_to_activity: AtomicU64::default(),
            calls_to_add_slot: AtomicU64::default(),
            calls_to_park_vehicle: AtomicU64::default(),
            calls_to_remove_vehicle: AtomicU64::default(),
            slots: Mutex::default(),
            sender,
        }
    }
}

fn mock_stats() -> Stats {
    Stats {
        total: 0,
        occupied: 0,
        available: 0,
        occupancy_rate: 0.0,
    }
}

fn mock_slot(number: u32, occupied: bool) -> Slot {
    Slot {
        number,
        covered: false,
        ev_charging: false,
        occupied,
    }
}

impl MockSlotBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockSlotBackendInner::new()))
    }

    fn result(&self, slot: Slot, err: SlotError) -> Result<Slot, SlotError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(slot),
            false => Err(err),
        }
    }
}

impl SlotBackend for MockSlotBackend {
    fn slot_stream(&self) -> WatchStream<LotSnapshot> {
        self.0.calls_to_slot_stream.fetch_add(1, Ordering::SeqCst);
        WatchStream::new(self.0.sender.subscribe())
    }

    fn slots(&self) -> Vec<Slot> {
        self.0.calls_to_slots.fetch_add(1, Ordering::SeqCst);
        self.0.slots.lock().unwrap().clone()
    }

    fn stats(&self) -> Stats {
        self.0.calls_to_stats.fetch_add(1, Ordering::SeqCst);
        mock_stats()
    }

    fn activity(&self) -> Vec<ActivityEntry> {
        self.0.calls_to_activity.fetch_add(1, Ordering::SeqCst);
        vec![]
    }

    fn add_slot(
        &self,
        _number: RawSlotNumber,
        _covered: bool,
        _ev_charging: bool,
    ) -> Result<Slot, SlotError> {
        self.0.calls_to_add_slot.fetch_add(1, Ordering::SeqCst);
        self.result(mock_slot(1, false), SlotError::DuplicateNumber(1))
    }

    fn park_vehicle(&self, _needs_ev: bool, _needs_cover: bool) -> Result<Slot, SlotError> {
        self.0.calls_to_park_vehicle.fetch_add(1, Ordering::SeqCst);
        self.result(mock_slot(1, true), SlotError::NoMatch)
    }

    fn remove_vehicle(&self, _number: RawSlotNumber) -> Result<Slot, SlotError> {
        self.0
            .calls_to_remove_vehicle
            .fetch_add(1, Ordering::SeqCst);
        self.result(mock_slot(1, false), SlotError::NotFound(1))
    }
}

#[derive(Clone)]
pub struct TestConfiguration;

impl Configuration for TestConfiguration {
    fn website_title(&self) -> String {
        "Test Parking Lot".into()
    }

    fn frontend_path(&self) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("frontend/index.html")
    }

    fn port(&self) -> String {
        "0".into()
    }

    fn example_slots(&self) -> bool {
        false
    }
}

pub async fn read_from_slot_stream(slot_stream: &mut WatchStream<LotSnapshot>) -> LotSnapshot {
    tokio::time::timeout(Duration::from_secs(1), slot_stream.next())
        .await
        .expect("no snapshot published")
        .expect("slot stream closed")
}
