//! Snapshot system: builds a read-only summon board for the host overlay.

use serde::{Deserialize, Serialize};

use chatwarband_core::config::CommonConfig;
use chatwarband_core::enums::AgentLifeState;
use chatwarband_core::types::HeroId;

use crate::summon_state::SummonStateStore;

/// Per-hero summon status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSummonView {
    pub hero: HeroId,
    pub state: AgentLifeState,
    pub was_player_side: bool,
    pub times_summoned: u32,
    /// Cooldown progress in [0, 1]; 1 means ready (or cooldowns disabled).
    pub cooldown_fraction: f32,
    pub cooldown_remaining_secs: f32,
    pub active_retinue: usize,
    pub dead_retinue: usize,
}

/// The complete summon board broadcast to the overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummonBoardSnapshot {
    pub mission_time: f32,
    pub heroes: Vec<HeroSummonView>,
}

/// Build a snapshot from the current store. Never modifies state.
pub fn build_snapshot(
    store: &SummonStateStore,
    cfg: &CommonConfig,
    now: f32,
) -> SummonBoardSnapshot {
    SummonBoardSnapshot {
        mission_time: now,
        heroes: store
            .iter()
            .map(|h| HeroSummonView {
                hero: h.hero,
                state: h.state,
                was_player_side: h.was_player_side,
                times_summoned: h.times_summoned,
                cooldown_fraction: h.cooldown_fraction(cfg, now),
                cooldown_remaining_secs: h.cooldown_remaining(cfg, now),
                active_retinue: h.active_retinue(),
                dead_retinue: h.dead_retinue(),
            })
            .collect(),
    }
}
