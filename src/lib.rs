//! Wallbreak - a classic Breakout arcade game, plus function-graphing demos
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball/paddle/brick physics, game state)
//! - `graph`: Function-graphing demo (axes, curve sampling)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Persisted preferences
//! - `highscores`: LocalStorage leaderboard

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod graph;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen size in pixels (the sim runs in this coordinate space)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ball defaults - position is the center, not the top-left
    pub const BALL_DIAMETER: f32 = 8.0;
    /// Per-axis speed magnitudes; velocity components are always +/- these
    pub const BALL_SPEED_X: f32 = 300.0;
    pub const BALL_SPEED_Y: f32 = 350.0;
    /// Debug mode moves the ball much faster
    pub const DEBUG_BALL_SPEED_X: f32 = 600.0;
    pub const DEBUG_BALL_SPEED_Y: f32 = 700.0;

    /// Paddle defaults - position is the top-left corner
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance of the paddle top from the bottom of the screen
    pub const PADDLE_INSET: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 600.0;

    /// Brick grid - laid out row-major with no gaps
    pub const BRICK_COLUMNS: usize = 18;
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COUNT: usize = BRICK_COLUMNS * BRICK_ROWS;
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Distance of the top brick row from the top of the screen
    pub const BRICK_TOP_OFFSET: f32 = 50.0;

    pub const INITIAL_LIVES: u32 = 3;
}
