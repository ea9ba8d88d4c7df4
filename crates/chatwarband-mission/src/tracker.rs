//! The per-mission summon tracker.
//!
//! `SummonTracker` owns the summon state store, the deferred-action queue,
//! the auto-summon throttle and the RNG, and translates the engine's
//! agent-build / agent-removed / tick / mission-end callbacks into state
//! transitions. Every handler runs behind the [`guard`](crate::guard)
//! safety boundary so a fault in one hero's tracking cannot destabilize
//! the host mission.

use std::mem;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use chatwarband_core::config::CommonConfig;
use chatwarband_core::constants::AUTO_SUMMON_INTERVAL_SECS;
use chatwarband_core::enums::{AgentLifeState, MissionKind, MissionMode};
use chatwarband_core::events::FeedEvent;
use chatwarband_core::types::{AgentId, HeroId, PartyId};

use crate::campaign::{Campaign, KillEffects, SummonExecutor};
use crate::guard;
use crate::mission::MissionControl;
use crate::summon_state::{HeroSummonState, SummonStateStore};
use crate::systems;

/// One-shot action executed at the next tick boundary.
pub type DeferredAction = Box<dyn FnOnce(&mut DeferredQueue)>;

/// Queue of run-next-tick actions.
///
/// The batch is taken atomically before execution, so an action that
/// schedules further work always pushes it to a subsequent tick, never the
/// current one. Cancellation is not supported; whatever is still queued at
/// session teardown is discarded.
#[derive(Default)]
pub struct DeferredQueue {
    actions: Vec<DeferredAction>,
}

impl DeferredQueue {
    /// Register `action` to run on the next tick.
    pub fn defer(&mut self, action: impl FnOnce(&mut DeferredQueue) + 'static) {
        self.actions.push(Box::new(action));
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    fn drain_and_run(&mut self) {
        let batch = mem::take(&mut self.actions);
        for action in batch {
            action(self);
        }
    }
}

/// Configuration for a fresh tracker.
pub struct TrackerConfig {
    /// Seed for the retinue death-roll RNG.
    pub seed: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Per-mission summon/retinue lifecycle tracker.
pub struct SummonTracker {
    store: SummonStateStore,
    deferred: DeferredQueue,
    auto_summon_timer: f32,
    rng: ChaCha8Rng,
    feed_events: Vec<FeedEvent>,
}

impl SummonTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            store: SummonStateStore::default(),
            deferred: DeferredQueue::default(),
            auto_summon_timer: 0.0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            feed_events: Vec::new(),
        }
    }

    /// Read-only view of the session store.
    pub fn store(&self) -> &SummonStateStore {
        &self.store
    }

    /// Register a one-shot action to run on the next mission tick.
    pub fn defer(&mut self, action: impl FnOnce(&mut DeferredQueue) + 'static) {
        self.deferred.defer(action);
    }

    /// Drain feed events buffered since the last call.
    pub fn take_feed_events(&mut self) -> Vec<FeedEvent> {
        mem::take(&mut self.feed_events)
    }

    /// Look up a hero's summon state.
    pub fn get_state(&self, hero: HeroId) -> Option<&HeroSummonState> {
        self.store.get(hero)
    }

    /// Create and register summon state for a hero, bumping the campaign's
    /// participation counter. `forced` marks a player-initiated summon so
    /// incidental battle participation cannot corrupt streak statistics.
    pub fn add_state(
        &mut self,
        hero: HeroId,
        player_side: bool,
        party: PartyId,
        forced: bool,
        with_retinue: bool,
        now: f32,
        campaign: &mut dyn Campaign,
    ) -> &mut HeroSummonState {
        campaign.increase_participation(hero, player_side, forced);
        self.store.add(hero, player_side, party, with_retinue, now)
    }

    /// Engine callback: a new agent materialized in the mission.
    pub fn on_agent_build(
        &mut self,
        agent: AgentId,
        cfg: &CommonConfig,
        campaign: &mut dyn Campaign,
        mission: &mut dyn MissionControl,
    ) {
        guard::guarded("on_agent_build", || {
            self.handle_agent_build(agent, cfg, campaign, mission)
        });
    }

    fn handle_agent_build(
        &mut self,
        agent: AgentId,
        cfg: &CommonConfig,
        campaign: &mut dyn Campaign,
        mission: &mut dyn MissionControl,
    ) {
        // Summon tracking only applies to battles, not settlement scenes.
        if mission.kind() == MissionKind::Settlement {
            return;
        }
        let Some(hero) = campaign.adopted_hero(agent) else {
            return;
        };

        if self.store.get(hero).is_none() {
            // A hero we never summoned was built by the engine: it must be
            // part of one of the involved parties already.
            let player_side = mission.agent_on_player_side(agent);
            let party = campaign.map_event_party(hero);
            self.add_state(
                hero,
                player_side,
                party,
                true,
                true,
                mission.mission_time(),
                campaign,
            );
        }

        // First spawn this battle: bring the retinue along if requested and
        // the mission type permits it.
        let (first_summon, with_retinue, player_side) = {
            let state = match self.store.get(hero) {
                Some(s) => s,
                None => return,
            };
            (
                state.times_summoned == 0,
                state.spawn_with_retinue,
                state.was_player_side,
            )
        };
        if first_summon && with_retinue && systems::retinue::retinue_allowed(mission.kind()) {
            let owner_formation = mission.agent_formation_class(agent);
            let owner_mounted = systems::retinue::should_be_mounted(
                mission.kind(),
                mission.mode(),
                owner_formation,
            );
            if let Some(state) = self.store.get_mut(hero) {
                systems::retinue::spawn(
                    hero,
                    owner_mounted,
                    owner_formation,
                    player_side,
                    state,
                    cfg,
                    campaign,
                    mission,
                );
            }
        }

        if let Some(state) = self.store.get_mut(hero) {
            state.current_agent = Some(agent);
            state.state = AgentLifeState::Active;
            state.times_summoned += 1;
            state.summon_time = mission.mission_time();
            self.feed_events.push(FeedEvent::HeroSummoned {
                hero,
                times_summoned: state.times_summoned,
            });
        }
    }

    /// Engine callback: an agent left the mission with a final state.
    pub fn on_agent_removed(
        &mut self,
        agent: AgentId,
        _affector: Option<AgentId>,
        final_state: AgentLifeState,
        cfg: &CommonConfig,
        campaign: &mut dyn Campaign,
    ) {
        guard::guarded("on_agent_removed", || {
            self.handle_agent_removed(agent, final_state, cfg, campaign)
        });
    }

    fn handle_agent_removed(
        &mut self,
        agent: AgentId,
        final_state: AgentLifeState,
        cfg: &CommonConfig,
        campaign: &mut dyn Campaign,
    ) {
        if let Some(state) = self.store.owner_of_agent_mut(agent) {
            state.state = final_state;
        }

        // Resolve retinue membership independently of the hero lookup.
        if self.store.retinue_owner(agent).is_none() {
            return;
        }
        // Retinue losses are softened: an observed kill still needs a
        // successful death roll before it becomes permanent.
        let death_roll = final_state == AgentLifeState::Killed
            && self.rng.gen_bool(cfg.retinue_death_chance.clamp(0.0, 1.0));
        if let Some((owner, retinue)) = self.store.retinue_owner_mut(agent) {
            if death_roll {
                retinue.died = true;
                let troop = retinue.troop;
                campaign.kill_retinue(owner, troop);
                // Only heroes with a first name get a feed notification.
                if let Some(first_name) = campaign.hero_first_name(owner) {
                    let message = format!(
                        "{first_name}'s {} was killed in battle!",
                        campaign.troop_name(troop)
                    );
                    self.feed_events.push(FeedEvent::RetinueLost {
                        hero: owner,
                        troop,
                        message,
                    });
                }
                log::debug!("retinue member of hero {owner:?} died permanently");
            }
            // The snapshot is always updated regardless of the roll outcome.
            retinue.state = final_state;
        }
    }

    /// Engine callback: a tracked mission agent scored a kill. Routes the
    /// reward to the owning hero when the killer is a retinue member.
    pub fn on_agent_kill(
        &mut self,
        killer: AgentId,
        killed: Option<AgentId>,
        final_state: AgentLifeState,
        cfg: &CommonConfig,
        rewards: &mut dyn KillEffects,
    ) {
        guard::guarded("on_agent_kill", || {
            if let Some((owner, _)) = self.store.retinue_owner(killer) {
                rewards.apply_kill_effects(
                    owner.hero,
                    killer,
                    killed,
                    final_state,
                    cfg.retinue_gold_per_kill,
                    cfg.retinue_heal_per_kill,
                    0,
                    1.0,
                    cfg.relative_level_scaling,
                    cfg.level_scaling_cap,
                );
            }
        });
    }

    /// Engine callback: one simulation tick.
    pub fn on_mission_tick(
        &mut self,
        dt: f32,
        cfg: &CommonConfig,
        campaign: &mut dyn Campaign,
        mission: &mut dyn MissionControl,
        summoner: &mut dyn SummonExecutor,
    ) {
        guard::guarded("on_mission_tick", || {
            self.deferred.drain_and_run();

            if mission.mode() != MissionMode::Deployment {
                let reassigned = systems::formations::run(mission);
                if reassigned > 0 {
                    log::debug!("formation enforcement reassigned {reassigned} agents");
                }
            }

            self.auto_summon(dt, cfg, campaign, mission, summoner);
        });
    }

    fn auto_summon(
        &mut self,
        dt: f32,
        cfg: &CommonConfig,
        campaign: &mut dyn Campaign,
        mission: &dyn MissionControl,
        summoner: &mut dyn SummonExecutor,
    ) {
        // Throttle: accumulate dt and reset to zero once the threshold is
        // reached (reset, not subtract-and-carry).
        self.auto_summon_timer += dt;
        if self.auto_summon_timer < AUTO_SUMMON_INTERVAL_SECS {
            return;
        }
        self.auto_summon_timer = 0.0;

        systems::auto_summon::run(&self.store, cfg, campaign, mission, summoner);
    }

    /// Engine callback: the mission is ending. Surviving retinue members go
    /// back out of their party rosters, then all session state is dropped.
    pub fn on_mission_end(&mut self, campaign: &mut dyn Campaign) {
        guard::guarded("on_mission_end", || {
            for hero_state in self.store.iter() {
                for retinue in &hero_state.retinue {
                    if retinue.state != AgentLifeState::Killed {
                        campaign.adjust_roster(hero_state.party, retinue.troop, -1);
                    }
                }
            }
        });
        self.store.clear();
        self.deferred = DeferredQueue::default();
        self.feed_events.clear();
    }
}
