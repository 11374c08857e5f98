//! Game state and core simulation types
//!
//! Everything the frame loop and the input handlers touch lives in one
//! [`GameState`].

use glam::Vec2;
use rand::Rng;

use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Active gameplay
    Running,
    /// Frozen in place until toggled back
    Paused,
    /// Ball was lost; terminal until the next start
    Over,
}

/// Things that happened during a single step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BlockDestroyed { row: usize, column: usize, points: u32 },
    PaddleHit { spin: f32 },
    WallBounce,
    GameOver { score: u64 },
}

/// Horizontal paddle intent from keyboard or on-screen buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleCommand {
    Left,
    Right,
    Stop,
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-frame displacement
    pub vel: Vec2,
    pub radius: f32,
    /// Visual rotation in degrees
    pub rotation: f32,
    /// Degrees added to `rotation` each frame
    pub rotation_speed: f32,
}

impl Ball {
    /// Ball at its spawn point, heading up and to the right
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            vel: Vec2::new(config.ball_speed, -config.ball_speed),
            radius: config.ball_radius,
            rotation: 0.0,
            rotation_speed: 0.0,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.rotation += self.rotation_speed;
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity (per frame)
    pub dx: f32,
    /// Magnitude of `dx` while a direction is held
    pub speed: f32,
}

impl Paddle {
    /// Paddle centred horizontally near the bottom edge
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(SURFACE_WIDTH / 2.0 - config.paddle_width / 2.0, PADDLE_Y),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            dx: 0.0,
            speed: config.paddle_speed,
        }
    }

    pub fn steer(&mut self, command: PaddleCommand) {
        self.dx = match command {
            PaddleCommand::Left => -self.speed,
            PaddleCommand::Right => self.speed,
            PaddleCommand::Stop => 0.0,
        };
    }

    /// Move by `dx` and keep the paddle on the surface
    pub fn advance(&mut self) {
        self.pos.x += self.dx;
        self.clamp();
    }

    /// Centre the paddle on `x` (touch drag)
    pub fn center_on(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.pos.x = self.pos.x.min(SURFACE_WIDTH - self.size.x).max(0.0);
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

/// Whether a block can still be hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    Alive,
    Destroyed,
}

/// A single cell of the block grid
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub row: usize,
    pub column: usize,
    /// Top-left corner, from the grid layout
    pub pos: Vec2,
    pub size: Vec2,
    pub status: BlockStatus,
    pub points: u32,
    /// Index into the config palette (selects the skin)
    pub variant: usize,
}

impl Block {
    pub fn is_alive(&self) -> bool {
        self.status == BlockStatus::Alive
    }
}

/// Fixed-size grid of blocks, stored row-major
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockGrid {
    rows: usize,
    columns: usize,
    cells: Vec<Block>,
}

impl BlockGrid {
    /// Lay out a fresh grid, picking each cell's variant uniformly from the palette
    pub fn build<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let size = Vec2::new(config.block_width(), config.block_height);
        let mut cells = Vec::with_capacity(config.rows * config.columns);

        for row in 0..config.rows {
            for column in 0..config.columns {
                let variant = rng.random_range(0..config.palette.len());
                cells.push(Block {
                    row,
                    column,
                    pos: Vec2::new(
                        column as f32 * size.x,
                        config.offset_top + row as f32 * size.y,
                    ),
                    size,
                    status: BlockStatus::Alive,
                    points: config.palette[variant].points,
                    variant,
                });
            }
        }

        Self {
            rows: config.rows,
            columns: config.columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Block> {
        if row < self.rows && column < self.columns {
            self.cells.get(row * self.columns + column)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Block> {
        if row < self.rows && column < self.columns {
            self.cells.get_mut(row * self.columns + column)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        self.cells.iter_mut()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Block> {
        self.cells.iter().filter(|b| b.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub status: GameStatus,
    pub score: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: BlockGrid,
    /// Frames simulated since the last start
    pub frame: u64,
    /// Events from steps not yet drained by the host
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Idle state: nothing to play until [`GameState::start`] is called
    pub fn new(config: GameConfig) -> Self {
        Self {
            ball: Ball::spawn(&config),
            paddle: Paddle::spawn(&config),
            config,
            status: GameStatus::Over,
            score: 0,
            blocks: BlockGrid::default(),
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Reset every entity and begin a new game
    pub fn start<R: Rng>(&mut self, rng: &mut R) {
        self.blocks = BlockGrid::build(&self.config, rng);
        self.score = 0;
        self.ball = Ball::spawn(&self.config);
        self.paddle = Paddle::spawn(&self.config);
        self.frame = 0;
        self.events.clear();
        self.status = GameStatus::Running;

        log::info!(
            "Game started: {}x{} blocks",
            self.blocks.rows(),
            self.blocks.columns()
        );
    }

    /// Flip between Running and Paused. Returns the new status.
    pub fn toggle_pause(&mut self) -> GameStatus {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::Over => GameStatus::Over,
        };
        log::info!("Pause toggled: {:?}", self.status);
        self.status
    }

    /// Set the paddle direction while running. `Stop` always applies so a key
    /// released during a pause does not leave the paddle drifting on resume.
    pub fn steer(&mut self, command: PaddleCommand) {
        if self.status == GameStatus::Running || command == PaddleCommand::Stop {
            self.paddle.steer(command);
        }
    }

    /// Touch drag: centre the paddle under the finger (only while running)
    pub fn touch_at(&mut self, x: f32) {
        if self.status == GameStatus::Running {
            self.paddle.center_on(x);
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn started(seed: u64) -> GameState {
        let mut state = GameState::new(GameConfig::default());
        state.start(&mut Pcg32::seed_from_u64(seed));
        state
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.status, GameStatus::Over);
        assert!(state.blocks.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_start_builds_full_grid() {
        let state = started(7);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.blocks.len(), 200);
        assert_eq!(state.blocks.alive_count(), 200);
        for block in state.blocks.iter() {
            assert!((1..=5).contains(&block.points));
            assert_eq!(block.points, state.config.palette[block.variant].points);
        }
    }

    #[test]
    fn test_grid_layout_positions() {
        let state = started(7);
        let block = state.blocks.get(2, 3).unwrap();
        assert_eq!(block.pos, Vec2::new(120.0, 100.0));
        assert_eq!(block.size, Vec2::new(40.0, 30.0));
        assert!(state.blocks.get(10, 0).is_none());
        assert!(state.blocks.get(0, 20).is_none());
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = started(42);
        let b = started(42);
        assert_eq!(a.blocks, b.blocks);
    }

    #[test]
    fn test_grid_uses_whole_palette() {
        let state = started(3);
        let mut seen = [false; 5];
        for block in state.blocks.iter() {
            seen[block.variant] = true;
        }
        assert!(seen.iter().all(|s| *s), "200 uniform draws should hit every variant");
    }

    #[test]
    fn test_start_resets_entities() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new(GameConfig::default());
        state.start(&mut rng);

        state.score = 99;
        state.ball.pos = Vec2::new(10.0, 10.0);
        state.ball.rotation_speed = 3.0;
        state.paddle.pos.x = 0.0;
        state.status = GameStatus::Over;
        state.blocks.get_mut(0, 0).unwrap().status = BlockStatus::Destroyed;

        state.start(&mut rng);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 500.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, -4.0));
        assert_eq!(state.ball.rotation, 0.0);
        assert_eq!(state.ball.rotation_speed, 0.0);
        assert_eq!(state.paddle.pos, Vec2::new(350.0, 570.0));
        assert_eq!(state.blocks.alive_count(), 200);
    }

    #[test]
    fn test_toggle_pause() {
        let mut state = started(1);
        assert_eq!(state.toggle_pause(), GameStatus::Paused);
        assert_eq!(state.toggle_pause(), GameStatus::Running);

        state.status = GameStatus::Over;
        assert_eq!(state.toggle_pause(), GameStatus::Over);
    }

    #[test]
    fn test_steer_sets_velocity() {
        let mut state = started(1);
        state.steer(PaddleCommand::Left);
        assert_eq!(state.paddle.dx, -10.0);
        state.steer(PaddleCommand::Right);
        assert_eq!(state.paddle.dx, 10.0);
        state.steer(PaddleCommand::Stop);
        assert_eq!(state.paddle.dx, 0.0);
    }

    #[test]
    fn test_touch_centres_and_clamps() {
        let mut state = started(1);
        state.touch_at(200.0);
        assert_eq!(state.paddle.pos.x, 150.0);
        state.touch_at(10.0);
        assert_eq!(state.paddle.pos.x, 0.0);
        state.touch_at(790.0);
        assert_eq!(state.paddle.pos.x, 700.0);
    }

    #[test]
    fn test_touch_ignored_while_paused() {
        let mut state = started(1);
        state.toggle_pause();
        state.touch_at(100.0);
        assert_eq!(state.paddle.pos.x, 350.0);
    }

    #[test]
    fn test_steer_ignored_unless_running() {
        let mut state = started(1);
        state.steer(PaddleCommand::Right);
        state.toggle_pause();
        state.steer(PaddleCommand::Left);
        assert_eq!(state.paddle.dx, 10.0);
        state.steer(PaddleCommand::Stop);
        assert_eq!(state.paddle.dx, 0.0);

        let mut idle = GameState::new(GameConfig::default());
        idle.steer(PaddleCommand::Left);
        assert_eq!(idle.paddle.dx, 0.0);
    }
}
