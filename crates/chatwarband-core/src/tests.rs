#[cfg(test)]
mod tests {
    use crate::config::CommonConfig;
    use crate::enums::*;
    use crate::types::AgentId;

    #[test]
    fn test_cooldown_curve_escalates() {
        let cfg = CommonConfig {
            cooldown_enabled: true,
            summon_cooldown_secs: 20.0,
            cooldown_use_multiplier: 2.0,
            ..Default::default()
        };
        assert_eq!(cfg.cooldown_secs(1), 20.0);
        assert_eq!(cfg.cooldown_secs(2), 40.0);
        assert_eq!(cfg.cooldown_secs(3), 80.0);
        // First summon and the degenerate zero case share the base value.
        assert_eq!(cfg.cooldown_secs(0), 20.0);
    }

    #[test]
    fn test_cooldown_disabled_is_zero() {
        let cfg = CommonConfig {
            cooldown_enabled: false,
            ..Default::default()
        };
        assert_eq!(cfg.cooldown_secs(5), 0.0);
    }

    #[test]
    fn test_ammo_classification() {
        assert!(WeaponClass::Arrow.is_ammo());
        assert!(WeaponClass::Bolt.is_ammo());
        assert!(!WeaponClass::Bow.is_ammo());
        assert!(WeaponClass::Bow.is_ranged_weapon());
        assert!(WeaponClass::Crossbow.is_ranged_weapon());
        assert!(!WeaponClass::Thrown.is_ranged_weapon());
    }

    #[test]
    fn test_formation_class_values() {
        assert_eq!(FormationClass::Infantry.value(), 0);
        assert_eq!(FormationClass::Ranged.value(), 1);
        assert_eq!(FormationClass::Cavalry.value(), 2);
        assert_eq!(FormationClass::HorseArcher.value(), 3);
        assert!(FormationClass::HorseArcher.is_mounted());
        assert!(FormationClass::HorseArcher.is_ranged());
        assert!(!FormationClass::Infantry.is_mounted());
    }

    #[test]
    fn test_agent_id_generation_distinguishes_recycled_slots() {
        let first = AgentId::new(7, 0);
        let recycled = AgentId::new(7, 1);
        assert_ne!(first, recycled);
        assert_eq!(first, AgentId::new(7, 0));
    }

    /// Verify the life-state enum round-trips through serde_json.
    #[test]
    fn test_agent_life_state_serde() {
        let variants = vec![
            AgentLifeState::Active,
            AgentLifeState::Killed,
            AgentLifeState::Unconscious,
            AgentLifeState::Routed,
            AgentLifeState::Deleted,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: AgentLifeState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        assert!(AgentLifeState::Active.is_active());
        assert!(!AgentLifeState::Routed.is_active());
    }

    #[test]
    fn test_config_default_round_trip() {
        let cfg = CommonConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: CommonConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.summon_cooldown_secs, cfg.summon_cooldown_secs);
        assert_eq!(back.retinue_death_chance, cfg.retinue_death_chance);
        // Missing fields fall back to defaults so old settings files load.
        let partial: CommonConfig = serde_json::from_str(r#"{"auto_summon_all":true}"#).unwrap();
        assert!(partial.auto_summon_all);
        assert!(partial.cooldown_enabled);
    }
}
