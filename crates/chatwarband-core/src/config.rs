//! Global configuration snapshot.
//!
//! The host owns a mutable, process-wide settings object; this crate only
//! ever sees it as an immutable snapshot passed into each event handler and
//! tick, which keeps every component testable without a live singleton.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Shared tuning knobs read by the summon tracker each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    /// Whether summon cooldowns apply at all.
    pub cooldown_enabled: bool,
    /// Base cooldown after a hero's first summon (seconds).
    pub summon_cooldown_secs: f32,
    /// Escalation factor applied per additional summon.
    pub cooldown_use_multiplier: f32,

    /// Chance in [0, 1] that a killed retinue member dies permanently.
    pub retinue_death_chance: f64,
    /// Starting/maximum health multiplier for spawned retinue (floor 1.0).
    pub retinue_health_multiplier: f32,
    /// Whether retinue members adopt their owner's formation preference.
    pub retinue_use_heroes_formation: bool,

    /// Gold granted to the owning hero per retinue kill.
    pub retinue_gold_per_kill: i32,
    /// Healing granted to the owning hero per retinue kill.
    pub retinue_heal_per_kill: f32,
    /// Relative-level scaling applied to kill rewards.
    pub relative_level_scaling: f32,
    /// Cap on the level-scaling factor.
    pub level_scaling_cap: f32,

    /// Auto-summon every adopted hero.
    pub auto_summon_all: bool,
    /// Auto-summon only the heroes named in `auto_summon_heroes_list`.
    pub auto_summon_specific: bool,
    /// Comma-separated hero names (without the name tag) for specific mode.
    pub auto_summon_heroes_list: String,
    /// Per-hero battle-side override keyed by full hero name.
    /// Absent entries default to the player's side.
    pub auto_summon_side: HashMap<String, bool>,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            cooldown_enabled: true,
            summon_cooldown_secs: 20.0,
            cooldown_use_multiplier: 1.1,
            retinue_death_chance: 0.1,
            retinue_health_multiplier: 1.0,
            retinue_use_heroes_formation: true,
            retinue_gold_per_kill: 50,
            retinue_heal_per_kill: 25.0,
            relative_level_scaling: 0.5,
            level_scaling_cap: 5.0,
            auto_summon_all: false,
            auto_summon_specific: false,
            auto_summon_heroes_list: String::new(),
            auto_summon_side: HashMap::new(),
        }
    }
}

impl CommonConfig {
    /// Cooldown duration for a hero who has been summoned `times_summoned`
    /// times: escalates geometrically with each use. Zero while cooldowns
    /// are disabled.
    pub fn cooldown_secs(&self, times_summoned: u32) -> f32 {
        if !self.cooldown_enabled {
            return 0.0;
        }
        let uses = times_summoned.saturating_sub(1);
        self.summon_cooldown_secs * self.cooldown_use_multiplier.powi(uses as i32)
    }
}
