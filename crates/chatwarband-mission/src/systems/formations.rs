//! Formation enforcement system.
//!
//! Every pass, mod-managed hero agents on the player's side are classified
//! from their live loadout (mount + ranged weapon + ammo) and herded into
//! the matching extra formation slot. Reassignment only happens when the
//! target differs from the current formation, so repeated passes with an
//! unchanged classification are no-ops.

use chatwarband_core::constants::{
    FIELD_EXTRA_FORMATIONS, FIELD_FORMATION_BASE, NAME_TAG, SIEGE_EXTRA_FORMATIONS,
    SIEGE_MELEE_FORMATION, SIEGE_RANGED_FORMATION,
};
use chatwarband_core::enums::{FormationClass, MissionKind};

use crate::mission::{AgentSnapshot, MissionControl};

/// Classify an agent from mount and ranged-weapon/ammo availability.
pub fn classify(agent: &AgentSnapshot) -> FormationClass {
    let shoots = agent.has_ranged_weapon() && agent.has_ammo();
    match (agent.has_mount, shoots) {
        (true, true) => FormationClass::HorseArcher,
        (false, true) => FormationClass::Ranged,
        (true, false) => FormationClass::Cavalry,
        (false, false) => FormationClass::Infantry,
    }
}

/// Map a classification to the extra formation slot it belongs in.
///
/// Sieges only have two extra slots: ranged-capable classes share one, the
/// rest share the other. Field battles get one slot per classification.
pub fn target_index(kind: MissionKind, class: FormationClass) -> u8 {
    if kind == MissionKind::Siege {
        if class.is_ranged() {
            SIEGE_RANGED_FORMATION
        } else {
            SIEGE_MELEE_FORMATION
        }
    } else {
        FIELD_FORMATION_BASE + class.value()
    }
}

/// Run one enforcement pass. Returns the number of reassignments made.
pub fn run(mission: &mut dyn MissionControl) -> usize {
    let kind = mission.kind();

    // Lazily create the extra formation slots on the player's team.
    let slots: &[u8] = if kind == MissionKind::Siege {
        &SIEGE_EXTRA_FORMATIONS
    } else {
        &FIELD_EXTRA_FORMATIONS
    };
    for &index in slots {
        if !mission.has_formation(index) {
            mission.add_formation(index);
        }
    }

    let mut reassigned = 0;
    for agent in mission.agents() {
        if !agent.is_active || !agent.is_human || !agent.is_ai_controlled {
            continue;
        }
        if !agent.is_hero || !agent.on_player_team {
            continue;
        }
        if !agent.name.contains(NAME_TAG) {
            continue;
        }

        let target = target_index(kind, classify(&agent));
        if agent.formation_index != Some(target) {
            mission.assign_formation(agent.id, target);
            reassigned += 1;
        }
    }
    reassigned
}
