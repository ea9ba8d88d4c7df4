//! Battle-session summon tracking for CHATWARBAND.
//!
//! Owns the per-mission summon/retinue state machine, runs the formation
//! and auto-summon systems on every mission tick, and talks to the host
//! engine and campaign layer purely through the traits in [`campaign`]
//! and [`mission`], enabling headless deterministic testing.

pub mod campaign;
pub mod commands;
pub mod guard;
pub mod mission;
pub mod summon_state;
pub mod systems;
pub mod tracker;

pub use tracker::SummonTracker;
