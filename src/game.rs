//! Session entry point: generate once, then play.
//!
//! `Labyrinth` owns the carved grid and the agent. Renderers read
//! [`Labyrinth::grid`] and [`Labyrinth::player`]; input handlers call
//! [`Labyrinth::attempt_move`] or [`Labyrinth::handle_key`] and redraw when
//! they return `true`.

use log::info;

use crate::core::{Cell, Direction, MazeConfig, MazeError, MazeRng, MazeRngState};
use crate::generator::{CarveStats, MazeGenerator};
use crate::grid::Grid;
use crate::play::{InputHandler, PlayState};

/// A generated maze with one agent in it.
#[derive(Clone, Debug)]
pub struct Labyrinth {
    config: MazeConfig,
    rng_state: MazeRngState,
    grid: Grid,
    player: PlayState,
    stats: CarveStats,
    input: InputHandler,
}

impl Labyrinth {
    /// Validate `config`, carve a maze and place the agent at the origin.
    ///
    /// Without a configured seed a fresh one is drawn; it is logged and
    /// available from [`Labyrinth::seed`].
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        let rng = match config.seed {
            Some(seed) => MazeRng::new(seed),
            None => MazeRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Like [`Labyrinth::new`] with an injected random source.
    ///
    /// `config.seed` is overwritten with the RNG's own seed. The RNG may
    /// already be advanced; [`Labyrinth::rng_state`] records where carving
    /// started.
    pub fn with_rng(mut config: MazeConfig, mut rng: MazeRng) -> Result<Self, MazeError> {
        config.validate()?;

        let rng_state = rng.state();
        config.seed = Some(rng_state.seed);
        let mut grid = Grid::new(config.size);
        let stats = MazeGenerator::new().carve(&mut grid, &mut rng);
        info!(
            "generated {}x{} labyrinth with seed {} at word {}",
            config.size, config.size, rng_state.seed, rng_state.word_pos
        );

        Ok(Self {
            config,
            rng_state,
            grid,
            player: PlayState::new(),
            stats,
            input: InputHandler::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Seed of the RNG that carved this maze.
    ///
    /// Reproduces the maze only when the RNG was fresh, which is always the
    /// case for [`Labyrinth::new`]. Use [`Labyrinth::rng_state`] otherwise.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// RNG state just before carving.
    ///
    /// `Labyrinth::with_rng(config, MazeRng::from_state(&state))` rebuilds
    /// the same maze.
    #[must_use]
    pub fn rng_state(&self) -> &MazeRngState {
        &self.rng_state
    }

    /// The carved grid. Read-only once generated.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn player(&self) -> &PlayState {
        &self.player
    }

    #[must_use]
    pub fn stats(&self) -> CarveStats {
        self.stats
    }

    /// Cell renderers mark as the exit.
    #[must_use]
    pub fn goal(&self) -> Cell {
        self.grid.goal()
    }

    /// Move the agent if there is a passage. Returns `true` if it moved.
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        self.player.attempt_move(&self.grid, direction)
    }

    /// Map a key name (arrows or WASD) and attempt the move.
    ///
    /// Unrecognised keys are ignored and return `false`.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match self.input.direction_for_key(key) {
            Some(direction) => self.attempt_move(direction),
            None => false,
        }
    }
}
