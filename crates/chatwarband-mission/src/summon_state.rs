//! Per-mission summon state: one entry per participating hero, with its
//! retinue, lifecycle snapshot, and cooldown accounting.

use chatwarband_core::config::CommonConfig;
use chatwarband_core::enums::AgentLifeState;
use chatwarband_core::types::{AgentId, HeroId, PartyId, TroopId};

/// Lifecycle record for one spawned retinue member.
#[derive(Debug, Clone)]
pub struct RetinueState {
    pub troop: TroopId,
    pub agent: AgentId,
    /// Recorded separately from the live agent: the engine recycles agent
    /// handles after removal, so this snapshot is the only reliable
    /// post-mortem source of truth.
    pub state: AgentLifeState,
    /// Permanent death flag, set once by a successful death roll.
    pub died: bool,
}

/// Summon lifecycle record for one hero, living for the duration of one
/// mission.
#[derive(Debug, Clone)]
pub struct HeroSummonState {
    pub hero: HeroId,
    pub was_player_side: bool,
    pub spawn_with_retinue: bool,
    pub party: PartyId,
    /// Shadow copy of the current agent's life state.
    pub state: AgentLifeState,
    /// Identity of the most recent live agent. After that agent's removal
    /// event this is only valid for equality comparison.
    pub current_agent: Option<AgentId>,
    /// Mission-clock stamp of the most recent spawn; cooldowns key off this.
    pub summon_time: f32,
    /// Successful spawns this mission. Never reset within a session.
    pub times_summoned: u32,
    pub retinue: Vec<RetinueState>,
}

impl HeroSummonState {
    fn new(hero: HeroId, player_side: bool, party: PartyId, with_retinue: bool, now: f32) -> Self {
        Self {
            hero,
            was_player_side: player_side,
            spawn_with_retinue: with_retinue,
            party,
            state: AgentLifeState::Active,
            current_agent: None,
            summon_time: now,
            times_summoned: 0,
            retinue: Vec::new(),
        }
    }

    /// Retinue members still alive and in the mission.
    pub fn active_retinue(&self) -> usize {
        self.retinue.iter().filter(|r| r.state.is_active()).count()
    }

    /// Retinue members permanently lost this mission.
    pub fn dead_retinue(&self) -> usize {
        self.retinue.iter().filter(|r| r.died).count()
    }

    /// Whether the hero is still waiting out the summon cooldown.
    pub fn in_cooldown(&self, cfg: &CommonConfig, now: f32) -> bool {
        cfg.cooldown_enabled && self.summon_time + cfg.cooldown_secs(self.times_summoned) > now
    }

    /// Seconds until the hero can be summoned again.
    pub fn cooldown_remaining(&self, cfg: &CommonConfig, now: f32) -> f32 {
        if !cfg.cooldown_enabled {
            return 0.0;
        }
        (self.summon_time + cfg.cooldown_secs(self.times_summoned) - now).max(0.0)
    }

    /// Normalized cooldown progress in [0, 1] for UI display; exactly 1 when
    /// cooldowns are disabled.
    pub fn cooldown_fraction(&self, cfg: &CommonConfig, now: f32) -> f32 {
        if !cfg.cooldown_enabled {
            return 1.0;
        }
        let total = cfg.cooldown_secs(self.times_summoned);
        if total <= 0.0 {
            return 1.0;
        }
        (1.0 - self.cooldown_remaining(cfg, now) / total).clamp(0.0, 1.0)
    }
}

/// In-memory table of per-hero summon state for the current mission.
///
/// Entries are never removed before mission end; repeated summons of the
/// same hero reuse the existing entry.
#[derive(Debug, Default)]
pub struct SummonStateStore {
    entries: Vec<HeroSummonState>,
}

impl SummonStateStore {
    pub fn get(&self, hero: HeroId) -> Option<&HeroSummonState> {
        self.entries.iter().find(|h| h.hero == hero)
    }

    pub fn get_mut(&mut self, hero: HeroId) -> Option<&mut HeroSummonState> {
        self.entries.iter_mut().find(|h| h.hero == hero)
    }

    /// Reverse lookup from a live agent to its owning hero's retinue entry.
    pub fn retinue_owner(&self, agent: AgentId) -> Option<(&HeroSummonState, &RetinueState)> {
        self.entries.iter().find_map(|h| {
            h.retinue
                .iter()
                .find(|r| r.agent == agent)
                .map(|r| (h, r))
        })
    }

    /// Mutable variant of [`retinue_owner`](Self::retinue_owner); returns the
    /// owning hero's id rather than a second live borrow of the entry.
    pub fn retinue_owner_mut(&mut self, agent: AgentId) -> Option<(HeroId, &mut RetinueState)> {
        self.entries.iter_mut().find_map(|h| {
            let hero = h.hero;
            h.retinue
                .iter_mut()
                .find(|r| r.agent == agent)
                .map(move |r| (hero, r))
        })
    }

    /// The hero tracked as owning `agent` directly (not via retinue).
    pub fn owner_of_agent_mut(&mut self, agent: AgentId) -> Option<&mut HeroSummonState> {
        self.entries
            .iter_mut()
            .find(|h| h.current_agent == Some(agent))
    }

    /// Create and register a fresh entry. Callers must ensure no entry for
    /// `hero` exists yet; participation-counter side effects live with the
    /// tracker, not here.
    pub fn add(
        &mut self,
        hero: HeroId,
        player_side: bool,
        party: PartyId,
        with_retinue: bool,
        now: f32,
    ) -> &mut HeroSummonState {
        let idx = self.entries.len();
        self.entries
            .push(HeroSummonState::new(hero, player_side, party, with_retinue, now));
        &mut self.entries[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeroSummonState> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut HeroSummonState> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all session state at mission teardown.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
