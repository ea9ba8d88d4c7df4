//! Auto-summon policy.
//!
//! Re-summons eligible adopted heroes whenever they are absent from the
//! battle and off cooldown. Outcomes are swallowed into diagnostic logging;
//! auto-summon never surfaces errors to any user.

use std::collections::HashSet;

use chatwarband_core::config::CommonConfig;
use chatwarband_core::constants::{
    AUTO_SUMMON_GOLD_COST, AUTO_SUMMON_HEAL_PER_SECOND, NAME_TAG,
};
use chatwarband_core::enums::{AgentLifeState, FormationClass};

use crate::campaign::{Campaign, SummonExecutor, SummonSettings};
use crate::mission::MissionControl;
use crate::summon_state::SummonStateStore;

/// Build the case-insensitive eligibility set for "specific list" mode:
/// each comma-separated name is trimmed and suffixed with the mod tag
/// before matching against stored hero names.
fn eligible_names(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| format!("{n}{NAME_TAG}").to_lowercase())
        .collect()
}

/// Run one auto-summon pass.
pub fn run(
    store: &SummonStateStore,
    cfg: &CommonConfig,
    campaign: &dyn Campaign,
    mission: &dyn MissionControl,
    summoner: &mut dyn SummonExecutor,
) {
    if !mission.kind().is_battle() {
        return;
    }
    if !cfg.auto_summon_all && !cfg.auto_summon_specific {
        return;
    }

    let names = if cfg.auto_summon_specific {
        eligible_names(&cfg.auto_summon_heroes_list)
    } else {
        HashSet::new()
    };

    let now = mission.mission_time();
    for hero in campaign.adopted_heroes() {
        let hero_name = campaign.hero_name(hero);
        if !cfg.auto_summon_all && !names.contains(&hero_name.to_lowercase()) {
            continue;
        }

        if let Some(state) = store.get(hero) {
            if state.state == AgentLifeState::Active {
                continue;
            }
            if state.in_cooldown(cfg, now) {
                continue;
            }
        }

        let on_player_side = cfg.auto_summon_side.get(&hero_name).copied().unwrap_or(true);
        let settings = SummonSettings {
            on_player_side,
            with_retinue: true,
            heal_per_second: AUTO_SUMMON_HEAL_PER_SECOND,
            gold_cost: AUTO_SUMMON_GOLD_COST,
            preferred_formation: FormationClass::Infantry,
        };

        match summoner.execute(hero, &settings, &hero_name) {
            Ok(msg) => log::trace!("auto-summon succeeded for {hero_name}: {msg}"),
            Err(err) => log::trace!("auto-summon failed for {hero_name}: {err}"),
        }
    }
}
