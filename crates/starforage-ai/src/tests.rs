#[cfg(test)]
mod tests {
    use starforage_core::constants::*;
    use starforage_core::enums::{BossPhase, BossProjectileKind, BossState, ZombieState, ZombieType};
    use starforage_core::types::{Bounds, Position, Velocity};

    use crate::boss::{self, BossAttack, BossContext};
    use crate::fsm::{self, ZombieContext};
    use crate::profiles::{boss_phase_profile, zombie_profile};

    fn zombie_ctx(zombie_type: ZombieType, state: ZombieState, distance: f64) -> ZombieContext {
        let profile = zombie_profile(zombie_type);
        ZombieContext {
            state,
            health: profile.health,
            position: Position::new(400.0, 300.0),
            rocket_position: Position::new(400.0 + distance, 300.0),
            speed: profile.speed,
            attack_range: profile.attack_range,
        }
    }

    fn boss_ctx(state: BossState, distance: f64) -> BossContext {
        let profile = boss_phase_profile(BossPhase::BruteForce);
        BossContext {
            state,
            health: BOSS_MAX_HEALTH,
            position: Position::new(400.0, 300.0),
            rocket_position: Position::new(400.0, 300.0 + distance),
            speed: profile.speed,
            attack_range: profile.attack_range,
            phase_timer_ms: 0.0,
            dt_ms: TICK_MS,
        }
    }

    // ---- Zombie FSM ----

    #[test]
    fn test_zombie_idle_beyond_detection() {
        let ctx = zombie_ctx(ZombieType::Hunter, ZombieState::Chasing, 151.0);
        let update = fsm::evaluate(&ctx);
        assert_eq!(update.new_state, ZombieState::Idle);
        assert!(update.state_changed);
        assert!(update.new_velocity.is_zero());
        assert!(update.new_target.is_none(), "Target should be cleared");
    }

    #[test]
    fn test_zombie_chases_inside_detection() {
        let ctx = zombie_ctx(ZombieType::Hunter, ZombieState::Idle, 100.0);
        let update = fsm::evaluate(&ctx);
        assert_eq!(update.new_state, ZombieState::Chasing);
        // Rocket is due east; velocity is speed along +x.
        assert!((update.new_velocity.vx - 1.5).abs() < 1e-12);
        assert!(update.new_velocity.vy.abs() < 1e-12);
        assert_eq!(update.new_target, Some(ctx.rocket_position));
    }

    #[test]
    fn test_zombie_chases_exactly_at_detection_range() {
        let ctx = zombie_ctx(ZombieType::Crawler, ZombieState::Idle, ZOMBIE_DETECTION_RANGE);
        assert_eq!(fsm::evaluate(&ctx).new_state, ZombieState::Chasing);
    }

    #[test]
    fn test_zombie_attacks_inside_range_and_holds_still() {
        let ctx = zombie_ctx(ZombieType::Spitter, ZombieState::Chasing, 80.0);
        let update = fsm::evaluate(&ctx);
        assert_eq!(update.new_state, ZombieState::Attacking);
        assert!(update.new_velocity.is_zero());
    }

    #[test]
    fn test_zero_health_forces_dead() {
        let mut ctx = zombie_ctx(ZombieType::Brute, ZombieState::Attacking, 10.0);
        ctx.health = 0.0;
        let update = fsm::evaluate(&ctx);
        assert_eq!(update.new_state, ZombieState::Dead);
        assert!(update.new_velocity.is_zero());
    }

    #[test]
    fn test_zombie_step_position_clamps_and_holds() {
        let bounds = Bounds::default();
        let pos = Position::new(21.0, 300.0);
        let vel = Velocity::new(-5.0, 0.0);

        let moved = fsm::step_position(ZombieState::Chasing, &pos, &vel, &bounds);
        assert_eq!(moved.x, ZOMBIE_BOUNDS_MARGIN);

        let held = fsm::step_position(ZombieState::Attacking, &pos, &vel, &bounds);
        assert_eq!(held, pos);
        let held = fsm::step_position(ZombieState::Dead, &pos, &vel, &bounds);
        assert_eq!(held, pos);
    }

    #[test]
    fn test_zombie_attack_cooldown() {
        let mut zombie = fsm::spawn_zombie(0, ZombieType::Crawler);
        assert!(!fsm::can_attack(&zombie, 0.0), "Idle zombies never attack");

        zombie.state = ZombieState::Attacking;
        assert!(fsm::can_attack(&zombie, 0.0), "First attack is immediate");

        zombie.last_attack_ms = Some(1000.0);
        assert!(!fsm::can_attack(&zombie, 2999.0));
        assert!(fsm::can_attack(&zombie, 3000.0));
    }

    /// Crawler (30 hp) hit twice by a 25-damage laser.
    #[test]
    fn test_crawler_killed_by_two_laser_hits() {
        let mut zombie = fsm::spawn_zombie(7, ZombieType::Crawler);
        zombie.state = ZombieState::Chasing;

        assert!(!fsm::apply_damage(&mut zombie, LASER_DAMAGE));
        assert!((zombie.health - 5.0).abs() < 1e-12);
        assert_eq!(zombie.state, ZombieState::Chasing);

        assert!(fsm::apply_damage(&mut zombie, LASER_DAMAGE));
        assert_eq!(zombie.health, 0.0);
        assert_eq!(zombie.state, ZombieState::Dead);

        // No longer eligible for damage or attacks.
        assert!(!fsm::apply_damage(&mut zombie, LASER_DAMAGE));
        assert_eq!(zombie.health, 0.0);
        assert!(!fsm::can_attack(&zombie, 1e9));
    }

    #[test]
    fn test_zombie_health_stays_in_bounds() {
        for zombie_type in ZombieType::ALL {
            let mut zombie = fsm::spawn_zombie(0, zombie_type);
            for damage in [0.0, 3.5, 1000.0, 7.0] {
                fsm::apply_damage(&mut zombie, damage);
                assert!(zombie.health >= 0.0 && zombie.health <= zombie.max_health);
                assert_eq!(zombie.health == 0.0, zombie.state == ZombieState::Dead);
            }
        }
    }

    // ---- Boss phases ----

    /// Boss reduced to 374 enters phase 2 and is locked for 1500ms.
    #[test]
    fn test_boss_phase_transition_lock() {
        let mut b = boss::spawn_boss();
        b.state = BossState::Attacking;
        boss::apply_damage(&mut b, 126.0);
        assert!((b.health - 374.0).abs() < 1e-12);

        assert_eq!(boss::update_phase(&mut b), Some(BossPhase::RangedAssault));
        assert_eq!(b.state, BossState::PhaseTransition);
        assert_eq!(b.phase_timer_ms, BOSS_PHASE_TRANSITION_MS);
        assert_eq!(b.attack_range, 120.0);
        assert_eq!(b.next_phase_threshold, 250.0);

        let ticks_to_unlock = (BOSS_PHASE_TRANSITION_MS / TICK_MS).ceil() as usize;
        let mut timer = b.phase_timer_ms;
        let mut state = b.state;
        for tick in 0..ticks_to_unlock {
            let mut ctx = boss_ctx(state, 10.0);
            ctx.health = b.health;
            ctx.phase_timer_ms = timer;
            let update = boss::evaluate(&ctx);
            assert!(update.new_velocity.is_zero(), "Immobile during transition");
            timer = update.phase_timer_ms;
            state = update.new_state;
            if tick + 1 < ticks_to_unlock {
                assert_eq!(state, BossState::PhaseTransition);
            }
        }
        assert_eq!(state, BossState::Idle);
    }

    #[test]
    fn test_boss_at_full_health_stays_phase_one() {
        let mut b = boss::spawn_boss();
        assert_eq!(boss::update_phase(&mut b), None);
        b.health = 376.0;
        assert_eq!(boss::update_phase(&mut b), None);
        b.health = 375.0;
        assert_eq!(boss::update_phase(&mut b), Some(BossPhase::RangedAssault));
    }

    #[test]
    fn test_boss_phase_is_monotonic_one_step_per_update() {
        let mut b = boss::spawn_boss();
        b.health = 10.0;
        let mut seen = vec![b.phase];
        while let Some(phase) = boss::update_phase(&mut b) {
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                BossPhase::BruteForce,
                BossPhase::RangedAssault,
                BossPhase::AreaDevastation,
                BossPhase::FinalRage
            ]
        );
        // Healing does not regress the phase.
        b.health = 500.0;
        assert_eq!(boss::update_phase(&mut b), None);
        assert_eq!(b.phase, BossPhase::FinalRage);
    }

    #[test]
    fn test_dead_boss_does_not_change_phase() {
        let mut b = boss::spawn_boss();
        assert!(boss::apply_damage(&mut b, 600.0));
        assert_eq!(b.health, 0.0);
        assert_eq!(b.state, BossState::Dead);
        assert_eq!(boss::update_phase(&mut b), None);
        assert!(!boss::apply_damage(&mut b, 1.0));
    }

    // ---- Boss FSM ----

    #[test]
    fn test_boss_detection_bands() {
        assert_eq!(
            boss::evaluate(&boss_ctx(BossState::Spawning, 301.0)).new_state,
            BossState::Idle
        );
        let moving = boss::evaluate(&boss_ctx(BossState::Idle, 200.0));
        assert_eq!(moving.new_state, BossState::Moving);
        assert!((moving.new_velocity.vy - 1.2).abs() < 1e-12);
        let attacking = boss::evaluate(&boss_ctx(BossState::Moving, 40.0));
        assert_eq!(attacking.new_state, BossState::Attacking);
        assert!(attacking.new_velocity.is_zero());
    }

    #[test]
    fn test_boss_cannot_attack_while_transitioning() {
        let mut b = boss::spawn_boss();
        b.state = BossState::PhaseTransition;
        assert!(!boss::can_attack(&b, 10_000.0));
        b.state = BossState::Attacking;
        assert!(boss::can_attack(&b, 10_000.0));
        b.last_attack_ms = Some(9_000.0);
        assert!(!boss::can_attack(&b, 10_000.0));
    }

    #[test]
    fn test_boss_step_position_uses_wider_margin() {
        let bounds = Bounds::default();
        let pos = Position::new(790.0, 300.0);
        let moved = boss::step_position(BossState::Moving, &pos, &Velocity::new(2.0, 0.0), &bounds);
        assert_eq!(moved.x, CANVAS_WIDTH - BOSS_BOUNDS_MARGIN);
        let held =
            boss::step_position(BossState::PhaseTransition, &pos, &Velocity::new(2.0, 0.0), &bounds);
        assert_eq!(held, pos);
    }

    #[test]
    fn test_attack_patterns_by_phase() {
        assert_eq!(
            boss::attack_for(BossPhase::BruteForce, 30.0),
            BossAttack::Contact { damage: 30.0 }
        );
        assert_eq!(
            boss::attack_for(BossPhase::RangedAssault, 25.0),
            BossAttack::Launch(&[BossProjectileKind::EnergyBlast])
        );
        match boss::attack_for(BossPhase::FinalRage, 40.0) {
            BossAttack::Launch(kinds) => {
                assert!(kinds.contains(&BossProjectileKind::Shockwave));
                assert_eq!(kinds.len(), 2);
            }
            other => panic!("Final phase should launch projectiles, got {other:?}"),
        }
    }

    #[test]
    fn test_launch_velocity_aims_at_target() {
        let from = Position::new(0.0, 0.0);
        let v = boss::launch_velocity(&from, &Position::new(0.0, 100.0), BossProjectileKind::Shockwave);
        assert!(v.vx.abs() < 1e-12);
        assert!((v.vy - SHOCKWAVE_SPEED).abs() < 1e-12);
    }

    #[test]
    fn test_shockwave_hit_radius_tracks_size() {
        assert_eq!(
            boss::projectile_hit_radius(BossProjectileKind::EnergyBlast, 12.0),
            BOSS_PROJECTILE_HIT_RADIUS
        );
        assert_eq!(
            boss::projectile_hit_radius(BossProjectileKind::Shockwave, 20.0),
            BOSS_PROJECTILE_HIT_RADIUS
        );
        assert_eq!(boss::projectile_hit_radius(BossProjectileKind::Shockwave, 40.0), 40.0);
    }
}
