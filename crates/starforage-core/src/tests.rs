#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Bounds, Position, SimTime, Velocity};

    // ---- Geometry ----

    #[test]
    fn test_distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_within_is_strict() {
        let a = Position::new(0.0, 0.0);
        assert!(a.is_within(&Position::new(29.9, 0.0), COLLECTION_RANGE));
        assert!(
            !a.is_within(&Position::new(30.0, 0.0), COLLECTION_RANGE),
            "Exactly at range should be outside"
        );
    }

    #[test]
    fn test_direction_to_coincident_points_is_zero() {
        let a = Position::new(10.0, 10.0);
        let dir = a.direction_to(&a);
        assert_eq!(dir.x, 0.0);
        assert_eq!(dir.y, 0.0);

        let dir = a.direction_to(&Position::new(10.0, 20.0));
        assert!((dir.length() - 1.0).abs() < 1e-12);
        assert!((dir.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_heading_zero_points_up() {
        let v = Velocity::from_heading(0.0, LASER_SPEED);
        assert!(v.vx.abs() < 1e-9);
        assert!((v.vy + LASER_SPEED).abs() < 1e-9, "0° should move up (negative y)");

        let v = Velocity::from_heading(90.0, 2.0);
        assert!((v.vx - 2.0).abs() < 1e-9, "90° should move right");
        assert!(v.vy.abs() < 1e-9);
    }

    #[test]
    fn test_wrap_is_toroidal() {
        let bounds = Bounds::default();
        let p = bounds.wrap(Position::new(-1.0, 300.0));
        assert_eq!(p.x, CANVAS_WIDTH);
        let p = bounds.wrap(Position::new(801.0, 601.0));
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        let inside = Position::new(400.0, 300.0);
        assert_eq!(bounds.wrap(inside), inside);
    }

    #[test]
    fn test_clamp_respects_margin() {
        let bounds = Bounds::default();
        let p = bounds.clamp(Position::new(-50.0, 900.0), ZOMBIE_BOUNDS_MARGIN);
        assert_eq!(p.x, ZOMBIE_BOUNDS_MARGIN);
        assert_eq!(p.y, CANVAS_HEIGHT - ZOMBIE_BOUNDS_MARGIN);
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new(100.0, 50.0);
        assert!(bounds.contains(&Position::new(0.0, 0.0)));
        assert!(bounds.contains(&Position::new(100.0, 50.0)));
        assert!(!bounds.contains(&Position::new(100.1, 10.0)));
        assert!(!bounds.contains(&Position::new(10.0, -0.1)));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..10 {
            time.advance();
        }
        assert_eq!(time.tick, 10);
        assert!((time.now_ms() - 160.0).abs() < 1e-9);
    }

    // ---- Enums ----

    #[test]
    fn test_boss_phase_ordering_and_next() {
        assert!(BossPhase::BruteForce < BossPhase::FinalRage);
        assert_eq!(BossPhase::BruteForce.next(), Some(BossPhase::RangedAssault));
        assert_eq!(BossPhase::FinalRage.next(), None);
        assert_eq!(BossPhase::AreaDevastation.number(), 3);
    }

    #[test]
    fn test_key_code_mapping() {
        assert_eq!(InputCode::from_key_code("KeyA"), Some(InputCode::RotateLeft));
        assert_eq!(InputCode::from_key_code("ArrowRight"), Some(InputCode::RotateRight));
        assert_eq!(InputCode::from_key_code("KeyW"), Some(InputCode::Thrust));
        assert_eq!(InputCode::from_key_code("Space"), Some(InputCode::FireLaser));
        assert_eq!(InputCode::from_key_code("KeyF"), Some(InputCode::FireFlame));
        assert_eq!(InputCode::from_key_code("KeyQ"), None);
    }

    #[test]
    fn test_resource_type_serializes_snake_case() {
        let json = serde_json::to_string(&ResourceType::RareMetals).unwrap();
        assert_eq!(json, "\"rare_metals\"");
        let back: ResourceType = serde_json::from_str("\"crystal\"").unwrap();
        assert_eq!(back, ResourceType::Crystal);
    }

    // ---- Serde ----

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::KeyDown {
                input: InputCode::Thrust,
            },
            PlayerCommand::SetInput {
                inputs: BTreeSet::from([InputCode::FireLaser, InputCode::RotateLeft]),
            },
            PlayerCommand::StartGame,
            PlayerCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_game_event_is_tagged() {
        let event = GameEvent::BossPhaseChanged {
            phase: BossPhase::RangedAssault,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"BossPhaseChanged\""));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.phase, GamePhase::Ready);
        assert!(snap.boss.is_none());
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"boss\":null"));
    }
}
