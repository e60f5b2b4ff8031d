//! Simulation constants and tuning parameters.
//!
//! Speeds are in pixels per tick, times in milliseconds.

/// Logical duration of one tick (ms).
pub const TICK_MS: f64 = 16.0;

/// Ticks per nominal second, used to express per-second design rates per tick.
pub const TICKS_PER_SECOND: f64 = 60.0;

// --- Play field ---

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

// --- Rocket ---

/// Thrust impulse added along the heading each tick thrust is held.
pub const THRUST_POWER: f64 = 0.5;

/// Rotation per tick while a rotate input is held (degrees).
pub const ROTATION_SPEED_DEG: f64 = 5.0;

/// Velocity damping applied every tick.
pub const FRICTION: f64 = 0.98;

pub const ROCKET_MAX_HEALTH: f64 = 100.0;
pub const ROCKET_MAX_SHIELD: f64 = 50.0;
pub const ROCKET_MAX_ENERGY: f64 = 100.0;

/// Passive shield recharge per tick (only while below max).
pub const SHIELD_REGEN_PER_TICK: f64 = 0.05;

/// Passive weapon energy recharge per tick.
pub const ENERGY_REGEN_PER_TICK: f64 = 0.1;

// --- Resources ---

pub const RESOURCE_NODE_COUNT: usize = 15;

/// Distance below which the rocket harvests a node.
pub const COLLECTION_RANGE: f64 = 30.0;

/// Harvest per tick while in range (2 units per nominal second).
pub const COLLECTION_RATE_PER_TICK: f64 = 2.0 / TICKS_PER_SECOND;

pub const RESOURCE_MIN_AMOUNT: f64 = 50.0;
pub const RESOURCE_AMOUNT_SPREAD: f64 = 100.0;
/// Node regeneration rates are units per millisecond of logical time.
pub const RESOURCE_MIN_REGEN_RATE: f64 = 0.1;
pub const RESOURCE_REGEN_SPREAD: f64 = 0.2;

/// Initial fill is at least this fraction of max.
pub const RESOURCE_INITIAL_FILL: f64 = 0.8;

// --- Weapons ---

pub const LASER_ENERGY_COST: f64 = 5.0;
pub const LASER_DAMAGE: f64 = 25.0;
pub const LASER_COOLDOWN_MS: f64 = 200.0;
pub const LASER_SPEED: f64 = 8.0;
pub const LASER_LIFETIME_MS: f64 = 1000.0;
pub const LASER_SIZE: f64 = 3.0;

pub const FLAME_ENERGY_COST: f64 = 3.0;
pub const FLAME_DAMAGE: f64 = 15.0;
pub const FLAME_COOLDOWN_MS: f64 = 100.0;
pub const FLAME_SPEED: f64 = 4.0;
pub const FLAME_LIFETIME_MS: f64 = 400.0;
pub const FLAME_SIZE: f64 = 6.0;

pub const FLAME_MIN_PARTICLES: usize = 3;
pub const FLAME_MAX_PARTICLES: usize = 5;

/// Half-angle of the flame cone (degrees).
pub const FLAME_SPREAD_DEG: f64 = 30.0;
pub const FLAME_SPEED_MIN_FACTOR: f64 = 0.7;
pub const FLAME_SPEED_FACTOR_SPREAD: f64 = 0.6;
pub const FLAME_POSITION_JITTER: f64 = 10.0;
pub const FLAME_SIZE_JITTER: f64 = 4.0;
pub const FLAME_MIN_OPACITY: f64 = 0.8;
pub const FLAME_OPACITY_JITTER: f64 = 0.2;
pub const FLAME_LIFETIME_JITTER_MS: f64 = 200.0;

/// Per-tick velocity damping of flame particles.
pub const FLAME_DRAG: f64 = 0.98;

/// Per-tick opacity loss of flame particles.
pub const FLAME_OPACITY_DECAY: f64 = 0.01;

/// Particles at or below this opacity are expired.
pub const FLAME_OPACITY_FLOOR: f64 = 0.1;

/// Chance that a flame particle is consumed when it hits something.
pub const FLAME_HIT_CONSUME_CHANCE: f64 = 0.3;

/// Projectile hit radius against zombies is `size + this`.
pub const ZOMBIE_LASER_HIT_PADDING: f64 = 20.0;

/// Particle hit radius against zombies is `size + this`.
pub const ZOMBIE_FLAME_HIT_PADDING: f64 = 15.0;

pub const BOSS_LASER_HIT_RADIUS: f64 = 45.0;
pub const BOSS_FLAME_HIT_RADIUS: f64 = 40.0;

/// Flame damage against the boss is divided by this.
pub const BOSS_FLAME_DAMAGE_DIVISOR: f64 = 10.0;

// --- Zombies ---

pub const ZOMBIE_COUNT: usize = 8;
pub const ZOMBIE_DETECTION_RANGE: f64 = 150.0;
pub const ZOMBIE_BOUNDS_MARGIN: f64 = 20.0;
pub const ZOMBIE_MIN_SPAWN_DISTANCE: f64 = 100.0;
pub const ZOMBIE_ATTACK_FLAG_MS: f64 = 300.0;

// --- Boss ---

pub const BOSS_MAX_HEALTH: f64 = 500.0;
pub const BOSS_DETECTION_RANGE: f64 = 300.0;
pub const BOSS_BOUNDS_MARGIN: f64 = 40.0;
pub const BOSS_MIN_SPAWN_DISTANCE: f64 = 200.0;
pub const BOSS_ATTACK_FLAG_MS: f64 = 500.0;
pub const BOSS_PHASE_TRANSITION_MS: f64 = 1500.0;

pub const BOSS_PROJECTILE_SPEED: f64 = 4.0;
pub const BOSS_PROJECTILE_LIFETIME_MS: f64 = 1200.0;
pub const BOSS_PROJECTILE_SIZE: f64 = 12.0;
pub const SHOCKWAVE_SPEED: f64 = 6.0;
pub const SHOCKWAVE_LIFETIME_MS: f64 = 800.0;
pub const SHOCKWAVE_SIZE: f64 = 20.0;

/// Shockwave size growth per tick.
pub const SHOCKWAVE_GROWTH: f64 = 0.5;

/// Distance below which a boss projectile hits the rocket.
pub const BOSS_PROJECTILE_HIT_RADIUS: f64 = 25.0;

/// Attempts at rejection-sampling a spawn point before accepting the last one.
pub const MAX_SPAWN_ATTEMPTS: usize = 64;
