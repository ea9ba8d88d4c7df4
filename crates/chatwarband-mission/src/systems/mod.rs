//! Per-tick systems run by the summon tracker.

pub mod auto_summon;
pub mod formations;
pub mod retinue;
pub mod snapshot;
