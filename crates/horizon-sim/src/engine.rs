//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and every piece of run state,
//! processes player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use horizon_core::commands::PlayerCommand;
use horizon_core::constants::{MAX_FRAME_DELTA, MENU_ENV_SPEED_FACTOR};
use horizon_core::enums::GamePhase;
use horizon_core::events::AudioEvent;
use horizon_core::input::InputState;
use horizon_core::state::{GameStateSnapshot, WellView};
use horizon_core::types::SimTime;

use crate::assets::AssetCatalog;
use crate::config::{SimConfig, TuningConfig};
use crate::persistence::{self, ProgressStore};
use crate::systems;
use crate::systems::speed_field::SpeedFactors;
use crate::systems::waves::{WaveContext, WaveOutcome, WaveState};
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    tuning: TuningConfig,
    assets: AssetCatalog,
    store: Box<dyn ProgressStore>,
    command_queue: VecDeque<PlayerCommand>,
    input: InputState,
    speed: SpeedFactors,
    well: WellView,
    waves: WaveState,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create an engine at the main menu. Models must already be loaded.
    pub fn new(config: SimConfig, assets: AssetCatalog, store: Box<dyn ProgressStore>) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::MainMenu,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tuning: config.tuning,
            assets,
            store,
            command_queue: VecDeque::new(),
            input: InputState::default(),
            speed: SpeedFactors::default(),
            well: systems::speed_field::initial_well(),
            waves: WaveState::default(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
        };
        world_setup::setup_menu_backdrop(&mut engine.world, &mut engine.rng, &engine.tuning);
        engine
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `delta` seconds and return the
    /// resulting snapshot. `delta` is clamped to `[0, MAX_FRAME_DELTA]`.
    pub fn tick(&mut self, delta: f64) -> GameStateSnapshot {
        let delta = if delta.is_finite() {
            delta.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };

        self.process_commands();

        match self.phase {
            GamePhase::Active => self.run_systems(delta),
            GamePhase::Paused => {}
            GamePhase::MainMenu | GamePhase::GameOver | GamePhase::Victory => {
                self.run_backdrop(delta)
            }
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &systems::snapshot::FrameState {
                time: &self.time,
                phase: self.phase,
                waves: &self.waves,
                speed: self.speed,
                well: &self.well,
            },
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the wave progression state.
    pub fn waves(&self) -> &WaveState {
        &self.waves
    }

    /// Get the active tuning.
    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage collisions.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Hit an enemy the way the collision pass does, counting a confirmed kill.
    #[cfg(test)]
    pub fn strike_enemy(&mut self, enemy: hecs::Entity, damage: f64) -> bool {
        let destroyed = systems::enemies::handle_hit(
            &mut self.world,
            enemy,
            damage,
            self.time.elapsed_secs,
            &mut self.audio_events,
        );
        if destroyed {
            self.waves.record_kill();
        }
        destroyed
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => self.start_run(),
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::MainMenu {
                    self.return_to_menu();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetInput { input } => {
                self.input = input;
            }
            PlayerCommand::ToggleConstantThrust => {
                systems::player::toggle_constant_thrust(&mut self.world);
            }
        }
    }

    /// Reset every piece of run state and begin at the persisted level.
    fn start_run(&mut self) {
        let stored = match self.store.load_level() {
            Ok(level) => level,
            Err(err) => {
                log::warn!("Failed to read arcade level, starting from the first: {err}");
                None
            }
        };
        let level = persistence::clamp_level(stored, self.tuning.max_level);

        self.world.clear();
        self.time = SimTime::default();
        self.input = InputState::default();
        self.speed = SpeedFactors::default();
        self.well = systems::speed_field::initial_well();
        self.audio_events.clear();
        world_setup::setup_run(&mut self.world, &mut self.rng, &self.assets, &self.tuning);
        self.waves = WaveState::begin(level);
        self.phase = GamePhase::Active;
        log::info!("Arcade run started at level {level}");
    }

    fn return_to_menu(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.input = InputState::default();
        self.speed = SpeedFactors::default();
        self.well = systems::speed_field::initial_well();
        self.waves = WaveState::default();
        world_setup::setup_menu_backdrop(&mut self.world, &mut self.rng, &self.tuning);
        self.phase = GamePhase::MainMenu;
        log::info!("Returned to main menu");
    }

    /// Run one gameplay frame.
    fn run_systems(&mut self, delta: f64) {
        self.time.advance(delta);
        let now = self.time.elapsed_secs;

        self.speed = systems::speed_field::run(&mut self.world, self.well.position);

        systems::player::run(
            &mut self.world,
            &systems::player::PlayerFrame {
                input: &self.input,
                player_speed_factor: self.speed.player,
                delta,
                now,
                tuning: &self.tuning,
            },
            &mut self.audio_events,
        );
        systems::projectiles::advance(&mut self.world, delta, &mut self.despawn_buffer);
        systems::asteroids::advance(&mut self.world, delta, self.speed.env);

        let player_position = systems::player::position(&self.world);
        systems::enemies::advance(
            &mut self.world,
            &mut self.rng,
            &systems::enemies::EnemyFrame {
                player_position,
                delta,
                env_speed_factor: self.speed.env,
                now,
                tuning: &self.tuning,
            },
            &mut self.audio_events,
        );
        systems::enemies::revert_hit_visuals(&mut self.world, now);
        systems::effects::advance(&mut self.world, delta, &mut self.despawn_buffer);
        systems::speed_field::spin_well(&mut self.well, delta, self.speed.env);
        systems::bounds::run(&mut self.world);

        let report = systems::collision::resolve(
            &mut self.world,
            &mut self.rng,
            now,
            &self.tuning,
            &mut self.audio_events,
        );
        self.waves.record_kills(report.enemies_destroyed);

        if report.player_destroyed {
            self.enter_game_over();
            return;
        }

        let spawn_center = systems::player::position(&self.world).unwrap_or(self.well.position);
        let outcome = systems::waves::tick(
            &mut self.waves,
            &mut WaveContext {
                world: &mut self.world,
                rng: &mut self.rng,
                assets: &self.assets,
                store: self.store.as_mut(),
                tuning: &self.tuning,
                spawn_center,
                now,
                audio_events: &mut self.audio_events,
            },
        );
        if outcome == WaveOutcome::Victory {
            self.enter_victory();
        }
    }

    /// Advance the ambient scene shown outside of play.
    fn run_backdrop(&mut self, delta: f64) {
        systems::asteroids::advance(&mut self.world, delta, MENU_ENV_SPEED_FACTOR);
        systems::effects::advance(&mut self.world, delta, &mut self.despawn_buffer);
        systems::speed_field::spin_well(&mut self.well, delta, MENU_ENV_SPEED_FACTOR);
    }

    fn enter_game_over(&mut self) {
        if self.phase != GamePhase::Active {
            return;
        }
        if let Some(position) = systems::player::position(&self.world) {
            systems::effects::spawn_explosion(&mut self.world, position, &mut self.audio_events);
        }
        world_setup::release_run(&mut self.world);
        self.phase = GamePhase::GameOver;
        self.audio_events.push(AudioEvent::GameOver);
        log::info!("Game over at level {}", self.waves.level());
    }

    fn enter_victory(&mut self) {
        world_setup::release_run(&mut self.world);
        self.phase = GamePhase::Victory;
        log::info!("Arcade mode complete");
    }
}
