//! Events emitted by the tracker for the host's chat feed / overlay.

use serde::{Deserialize, Serialize};

use crate::types::{HeroId, TroopId};

/// Feed events buffered during a tick and drained by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedEvent {
    /// A hero's agent materialized in the mission.
    HeroSummoned { hero: HeroId, times_summoned: u32 },
    /// A retinue member died permanently; `message` is shown to the owner.
    RetinueLost {
        hero: HeroId,
        troop: TroopId,
        message: String,
    },
}
