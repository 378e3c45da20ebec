//! Simulation constants and tuning parameters.
//!
//! These are the authoritative defaults. `horizon_sim::config::TuningConfig`
//! mirrors the gameplay tunables and may override them at startup.

/// Nominal frame rate the host drives the simulation at (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest frame delta the simulation will integrate in one step (seconds).
pub const MAX_FRAME_DELTA: f64 = 0.1;

/// Frame rate that per-frame smoothing factors were tuned against.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

// --- Gravity well ---

/// Radius of the central black hole.
pub const WELL_RADIUS: f64 = 5.0;

/// Multiple of the well radius the player can never get closer than.
pub const WELL_MIN_DISTANCE_FACTOR: f64 = 2.0;

/// Distance at which the well stops influencing speed.
pub const WELL_MAX_DISTANCE: f64 = 300.0;

/// Environment speed multiplier right at the exclusion floor.
pub const MAX_ENV_SPEED_FACTOR: f64 = 15.0;

/// Player maneuverability multiplier right at the exclusion floor.
pub const MIN_PLAYER_SPEED_FACTOR: f64 = 0.1;

/// Overshoot applied when pushing the player back out of the well.
pub const WELL_PUSH_OUT_FACTOR: f64 = 1.05;

/// Well spin rate (rad/s, scaled by the environment factor).
pub const WELL_SPIN_RATE: f64 = 0.1;

/// Accretion disk counter-spin rate (rad/s, scaled by the environment factor).
pub const DISK_SPIN_RATE: f64 = 0.05;

// --- Player ship ---

/// Largest dimension of the ship after model normalization.
pub const SHIP_DESIRED_SIZE: f64 = 5.0;

/// Hits the ship can take before it is destroyed.
pub const SHIP_MAX_HITS: u32 = 3;

/// How long the ship shows its damaged appearance after a hit (seconds).
pub const SHIP_DAMAGE_DISPLAY_SECS: f64 = 1.0;

/// Player spawn position.
pub const PLAYER_START_POSITION: [f64; 3] = [0.0, 0.0, 70.0];

/// Player spawn yaw (radians).
pub const PLAYER_START_YAW: f64 = -std::f64::consts::FRAC_PI_2;

/// Base rotation rate per input axis (rad/s).
pub const PLAYER_ROTATION_SPEED: f64 = 1.6;

/// Forward acceleration while thrusting (units/s²).
pub const PLAYER_THRUST: f64 = 60.0;

/// Exponential velocity damping rate (1/s).
pub const PLAYER_DRAG: f64 = 0.5;

/// Speed cap outside of a boost.
pub const PLAYER_MAX_SPEED: f64 = 120.0;

/// Minimum time between player shots (seconds).
pub const PLAYER_FIRE_COOLDOWN: f64 = 0.2;

/// Impulse added along the forward axis when boosting.
pub const BOOST_IMPULSE: f64 = 250.0;

/// Time the boosting flag stays raised (seconds).
pub const BOOST_DURATION: f64 = 0.3;

/// Time before boost can be used again (seconds).
pub const BOOST_COOLDOWN: f64 = 2.0;

// --- Projectiles ---

/// Muzzle speed added on top of the firer's velocity.
pub const BULLET_BASE_SPEED: f64 = 500.0;

/// Seconds a projectile lives before expiring.
pub const BULLET_LIFETIME: f64 = 2.5;

/// Edge length of the projectile's bounding cube.
pub const BULLET_SIZE: f64 = 1.1;

/// Fraction of the firer's length the projectile spawns ahead of it.
pub const BULLET_SPAWN_OFFSET_FACTOR: f64 = 0.6;

// --- Asteroids ---

/// Large asteroids seeded at game start.
pub const ASTEROID_FIELD_COUNT: usize = 50;

/// Large asteroids seeded for the menu backdrop.
pub const ASTEROID_MENU_COUNT: usize = 20;

/// Inner radius of the asteroid ring.
pub const ASTEROID_MIN_RADIUS: f64 = 200.0;

/// Outer radius of the asteroid ring.
pub const ASTEROID_MAX_RADIUS: f64 = 800.0;

/// Full height of the band asteroids are seeded in.
pub const ASTEROID_HEIGHT_SPREAD: f64 = 200.0;

/// Orbit speed at the inner edge of the ring (rad/s).
pub const ASTEROID_ORBIT_SPEED_NEAR: f64 = 0.2;

/// Orbit speed at the outer edge of the ring (rad/s).
pub const ASTEROID_ORBIT_SPEED_FAR: f64 = 0.05;

/// Collision radius by size tier.
pub const ASTEROID_RADIUS_LARGE: f64 = 15.0;
pub const ASTEROID_RADIUS_MEDIUM: f64 = 10.0;
pub const ASTEROID_RADIUS_SMALL: f64 = 5.0;

/// Fragments produced when a large or medium asteroid splits.
pub const ASTEROID_FRAGMENT_COUNT: usize = 3;

/// Fragment orbit speed multiplier over the parent, by parent size.
pub const FRAGMENT_ORBIT_MULT_FROM_LARGE: f64 = 1.2;
pub const FRAGMENT_ORBIT_MULT_FROM_MEDIUM: f64 = 1.5;

/// Outward impulse given to fragments, by parent size.
pub const FRAGMENT_SPEED_FROM_LARGE: f64 = 100.0;
pub const FRAGMENT_SPEED_FROM_MEDIUM: f64 = 200.0;

/// Range of the fragment spawn offset, as a fraction of parent + fragment radius.
pub const FRAGMENT_OFFSET_MIN: f64 = 0.6;
pub const FRAGMENT_OFFSET_MAX: f64 = 0.8;

/// Per-frame (at the reference rate) fragment velocity retention.
pub const FRAGMENT_DAMPING: f64 = 0.99;

/// Self-spin rates around x, y, z (rad/s).
pub const ASTEROID_SPIN: [f64; 3] = [0.3, 0.5, 0.2];

/// Environment factor applied to the backdrop outside of active play.
pub const MENU_ENV_SPEED_FACTOR: f64 = 0.2;

// --- Enemies ---

/// Normal enemies per wave.
pub const WAVE_ENEMY_COUNT: u32 = 3;

/// Ring around the player enemies spawn on.
pub const ENEMY_SPAWN_MIN_RADIUS: f64 = 150.0;
pub const ENEMY_SPAWN_MAX_RADIUS: f64 = 300.0;

/// Enemies never spawn closer than this to the player.
pub const ENEMY_SAFE_RADIUS: f64 = 180.0;

/// Full height of the vertical spawn band.
pub const ENEMY_SPAWN_HEIGHT_SPREAD: f64 = 100.0;

/// Fixed boss spawn position.
pub const BOSS_SPAWN_POSITION: [f64; 3] = [0.0, 0.0, 150.0];

/// Full extents of the random escort offset around the boss.
pub const ESCORT_OFFSET_SPREAD: [f64; 3] = [40.0, 20.0, 40.0];

/// Levels above this spawn escorts with the boss.
pub const ESCORT_LEVEL_THRESHOLD: u32 = 2;

/// Maximum escorts per boss.
pub const MAX_ESCORTS: u32 = 2;

/// Scale enemies spawn at before growing in.
pub const ENEMY_SPAWN_SCALE: f64 = 0.1;

/// Final scale of normal enemies and bosses.
pub const ENEMY_FINAL_SCALE: f64 = 3.0;
pub const BOSS_FINAL_SCALE: f64 = 6.0;

/// Duration of the spawn grow-in (seconds).
pub const ENEMY_SPAWN_DURATION: f64 = 0.5;

/// Per-frame (at the reference rate) facing interpolation factor.
pub const ENEMY_TURN_FACTOR: f64 = 0.05;

/// Preferred distance to the player.
pub const ENEMY_STANDOFF: f64 = 60.0;
pub const BOSS_STANDOFF: f64 = 100.0;

/// Dead band around the stand-off distance.
pub const STANDOFF_MARGIN: f64 = 10.0;

/// Speed fraction used when backing away.
pub const RETREAT_SPEED_FACTOR: f64 = 0.5;

/// Speed fraction used when strafing.
pub const STRAFE_SPEED_FACTOR: f64 = 0.3;

/// Spread of the aim perturbation at zero accuracy.
pub const AIM_SPREAD_SCALE: f64 = 0.5;

/// Duration of the red hit flash (seconds).
pub const ENEMY_HIT_FLASH_SECS: f64 = 0.15;

/// Emissive color shown while an enemy flashes.
pub const ENEMY_FLASH_EMISSIVE: u32 = 0xff_00_00;

/// Default emissive color of enemy materials.
pub const ENEMY_BASE_EMISSIVE: u32 = 0x00_00_00;

// --- Enemy stat curves (value = base + per_level * level) ---

pub const ENEMY_HEALTH_BASE: f64 = 50.0;
pub const ENEMY_HEALTH_PER_LEVEL: f64 = 10.0;
pub const ENEMY_SPEED_BASE: f64 = 5.0;
pub const ENEMY_SPEED_PER_LEVEL: f64 = 0.5;
pub const ENEMY_FIRE_RATE_BASE: f64 = 0.8;
pub const ENEMY_FIRE_RATE_PER_LEVEL: f64 = -0.05;
pub const ENEMY_FIRE_RATE_FLOOR: f64 = 0.15;
pub const ENEMY_ACCURACY_BASE: f64 = 0.6;
pub const ENEMY_ACCURACY_PER_LEVEL: f64 = 0.02;

pub const BOSS_HEALTH_BASE: f64 = 200.0;
pub const BOSS_HEALTH_PER_LEVEL: f64 = 50.0;
pub const BOSS_SPEED_BASE: f64 = 10.0;
pub const BOSS_SPEED_PER_LEVEL: f64 = 1.0;
pub const BOSS_FIRE_RATE_BASE: f64 = 0.5;
pub const BOSS_FIRE_RATE_PER_LEVEL: f64 = -0.04;
pub const BOSS_FIRE_RATE_FLOOR: f64 = 0.1;
pub const BOSS_ACCURACY_BASE: f64 = 0.7;
pub const BOSS_ACCURACY_PER_LEVEL: f64 = 0.03;

// --- Collision outcomes ---

/// Damage a player bullet deals to an enemy.
pub const BULLET_DAMAGE: f64 = 25.0;

/// Damage an enemy takes when rammed by the player.
pub const RAM_DAMAGE_TO_ENEMY: f64 = 100.0;

/// Hits the player takes per collision type.
pub const ENEMY_BULLET_HITS: u32 = 1;
pub const ASTEROID_COLLISION_HITS: u32 = 1;
pub const RAM_HITS_TO_PLAYER: u32 = 2;

// --- Explosions ---

/// Explosion lifetime (seconds).
pub const EXPLOSION_LIFETIME: f64 = 0.6;

/// Explosion growth rate (scale multiplier per second, linearized).
pub const EXPLOSION_GROWTH: f64 = 4.0;

// --- Waves & levels ---

/// First arcade level.
pub const STARTING_LEVEL: u32 = 1;

/// Last arcade level; clearing it wins the game.
pub const MAX_LEVEL: u32 = 10;

/// Pause between a boss kill and the next wave (seconds).
pub const LEVEL_UP_DELAY_SECS: f64 = 2.0;

/// Key the arcade level is persisted under.
pub const PROGRESS_KEY: &str = "arcadeLevel";
