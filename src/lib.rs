//! Parking slot manager: register slots, park vehicles in the nearest
//! matching slot and free them again.
//!
//! [`slot_registry::SlotRegistry`] holds the allocation rules and knows
//! nothing about threads or HTTP. [`local_slots::LocalSlots`] shares one
//! registry between request handlers and [`http`] exposes it to the browser.

pub mod activity;
pub mod backend;
pub mod configuration;
pub mod configuration_handler;
pub mod error;
pub mod http;
pub mod local_slots;
pub mod slot_registry;
#[cfg(test)]
mod testutils;
pub mod types;
