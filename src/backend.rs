use crate::{
    activity::ActivityEntry,
    error::SlotError,
    types::{LotSnapshot, RawSlotNumber, Slot, Stats},
};
use tokio_stream::wrappers::WatchStream;

pub trait SlotBackend: Clone + Send + Sync + 'static {
    fn slot_stream(&self) -> WatchStream<LotSnapshot>;
    fn slots(&self) -> Vec<Slot>;
    fn stats(&self) -> Stats;
    fn activity(&self) -> Vec<ActivityEntry>;
    fn add_slot(
        &self,
        number: RawSlotNumber,
        covered: bool,
        ev_charging: bool,
    ) -> Result<Slot, SlotError>;
    fn park_vehicle(&self, needs_ev: bool, needs_cover: bool) -> Result<Slot, SlotError>;
    fn remove_vehicle(&self, number: RawSlotNumber) -> Result<Slot, SlotError>;
}
