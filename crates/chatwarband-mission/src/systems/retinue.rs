//! Retinue spawning.
//!
//! Spawns a hero's configured follower units at first summon, applying
//! stat multipliers and roster bookkeeping. The agent spawn is the atomic
//! unit: per troop, the roster increment and formation-preference override
//! wrap around the spawn and are rolled back if it fails, so a spawn
//! failure never leaves partial state.

use chatwarband_core::config::CommonConfig;
use chatwarband_core::enums::{AgentLifeState, FormationClass, MissionKind, MissionMode};
use chatwarband_core::types::HeroId;

use crate::campaign::Campaign;
use crate::mission::{MissionControl, SpawnRequest};
use crate::summon_state::{HeroSummonState, RetinueState};

/// Whether retinue spawning is permitted at all for this mission kind.
pub fn retinue_allowed(kind: MissionKind) -> bool {
    kind.is_battle()
}

/// Whether a hero of the given formation class should spawn mounted here.
pub fn should_be_mounted(kind: MissionKind, mode: MissionMode, class: FormationClass) -> bool {
    mode != MissionMode::Stealth && kind != MissionKind::Siege && class.is_mounted()
}

/// Spawn the hero's retinue and record a [`RetinueState`] per unit.
pub fn spawn(
    hero: HeroId,
    owner_mounted: bool,
    owner_formation: FormationClass,
    on_player_side: bool,
    state: &mut HeroSummonState,
    cfg: &CommonConfig,
    campaign: &mut dyn Campaign,
    mission: &mut dyn MissionControl,
) {
    let troops = campaign.retinue_troops(hero);
    if troops.is_empty() {
        return;
    }

    let kind = mission.kind();
    let mode = mission.mode();
    let retinue_mounted = mode != MissionMode::Stealth
        && kind != MissionKind::Siege
        && (owner_mounted || !cfg.retinue_use_heroes_formation);

    let match_formation = on_player_side && cfg.retinue_use_heroes_formation;
    let health_multiplier = cfg.retinue_health_multiplier.max(1.0);
    let owner_first_name = campaign.hero_first_name(hero);

    for troop in troops {
        // Formation preference only matters on the player's side.
        let prev_preference = if match_formation {
            campaign.formation_preference(troop)
        } else {
            None
        };
        if match_formation {
            campaign.set_formation_preference(troop, owner_formation);
        }

        campaign.adjust_roster(state.party, troop, 1);

        let request = SpawnRequest {
            troop,
            party: state.party,
            on_player_side,
            with_horse: campaign.troop_is_mounted(troop) && retinue_mounted,
            is_reinforcement: false,
            alarmed: mode != MissionMode::Deployment,
        };
        let spawned = match mission.spawn_troop(&request) {
            Ok(spawned) => spawned,
            Err(err) => {
                // Roll back so the roster never counts a unit that was
                // never spawned.
                campaign.adjust_roster(state.party, troop, -1);
                if let Some(prev) = prev_preference {
                    campaign.set_formation_preference(troop, prev);
                }
                log::warn!(
                    "retinue spawn failed for {}: {err}",
                    campaign.troop_name(troop)
                );
                continue;
            }
        };

        state.retinue.push(RetinueState {
            troop,
            agent: spawned.agent,
            state: AgentLifeState::Active,
            died: false,
        });

        if let Some(first_name) = &owner_first_name {
            mission.set_agent_name(spawned.agent, format!("{} ({first_name})", spawned.name));
        }
        mission.scale_agent_health(spawned.agent, health_multiplier);

        if let Some(prev) = prev_preference {
            campaign.set_formation_preference(troop, prev);
        }
    }
}
