//! Game state and core simulation types
//!
//! Everything the arena owns lives here: ball, paddle, brick grid and the
//! player tally. The shell owns a `GameState` and passes it to `advance`
//! once per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Things that happened during one `advance` call.
///
/// The sim records these on the state (cleared at the start of every call)
/// so the shell can drive audio and HUD without the sim knowing either
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top, left or right screen edge
    WallBounce,
    /// Ball bounced off the paddle
    PaddleBounce,
    /// A brick died; the payload is its row-major grid index
    BrickDestroyed { index: usize },
    /// Ball crossed the bottom edge
    LifeLost,
    /// The last brick died and the grid was rebuilt
    RoundCleared,
    /// The life lost was the last one
    GameOver,
    /// The restart action fired while the game was over
    Restarted,
}

/// The ball. Position is the center of the ball, not the top-left.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Per-axis speed magnitudes, fixed at init. The velocity components
    /// are always exactly +/- these - bounces only flip signs.
    pub speed: Vec2,
}

impl Ball {
    pub fn new(speed: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: speed,
            speed,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        BALL_DIAMETER / 2.0
    }

    /// Move the ball by its velocity
    pub fn integrate(&mut self, elapsed_seconds: f32) {
        self.pos += self.vel * elapsed_seconds;
    }
}

/// The player's paddle. Position is the top-left corner; y never changes
/// after init.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Keep the paddle fully on screen
    pub fn clamp_to_screen(&mut self) {
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x > SCREEN_WIDTH - PADDLE_WIDTH {
            self.pos.x = SCREEN_WIDTH - PADDLE_WIDTH;
        }
    }
}

/// One brick in the grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Brick {
    pub alive: bool,
    /// Top-left corner
    pub pos: Vec2,
}

impl Brick {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BRICK_WIDTH, BRICK_HEIGHT)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Row-major grid, exactly `BRICK_COUNT` entries
    pub bricks: Vec<Brick>,
    /// Lives remaining; the player is alive while this is > 0
    pub lives: u32,
    /// +1 per destroyed brick; never reset, survives restarts
    pub score: u64,
    /// Full grids cleared this session (feeds the leaderboard)
    pub rounds_cleared: u32,
    /// Debug mode: fast ball, autopilot paddle, pointer warp
    pub debug: bool,
    /// Events recorded by the most recent `advance` call
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh game: full grid, serve position, all lives
    pub fn new(debug: bool) -> Self {
        let speed = if debug {
            Vec2::new(DEBUG_BALL_SPEED_X, DEBUG_BALL_SPEED_Y)
        } else {
            Vec2::new(BALL_SPEED_X, BALL_SPEED_Y)
        };

        let mut state = Self {
            ball: Ball::new(speed),
            paddle: Paddle { pos: Vec2::ZERO },
            bricks: Vec::with_capacity(BRICK_COUNT),
            lives: INITIAL_LIVES,
            score: 0,
            rounds_cleared: 0,
            debug,
            events: Vec::new(),
        };

        state.reset_serve();
        state.reset_bricks();
        state
    }

    pub fn alive(&self) -> bool {
        self.lives > 0
    }

    /// Rebuild the full grid, all bricks alive, original layout
    pub fn reset_bricks(&mut self) {
        let x_offset = SCREEN_WIDTH / 2.0 - (BRICK_COLUMNS / 2) as f32 * BRICK_WIDTH;
        let y_offset = BRICK_TOP_OFFSET;

        self.bricks.clear();
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLUMNS {
                self.bricks.push(Brick {
                    alive: true,
                    pos: Vec2::new(
                        col as f32 * BRICK_WIDTH + x_offset,
                        row as f32 * BRICK_HEIGHT + y_offset,
                    ),
                });
            }
        }
    }

    /// Put the paddle back in the middle and the ball on the serve position
    /// just above it, heading up and to the right.
    pub fn reset_serve(&mut self) {
        self.paddle.pos = Vec2::new(
            SCREEN_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
            SCREEN_HEIGHT - PADDLE_INSET,
        );

        self.ball.pos = Vec2::new(
            self.paddle.pos.x + PADDLE_WIDTH / 2.0,
            self.paddle.pos.y - BALL_DIAMETER / 2.0,
        );
        self.ball.vel = Vec2::new(self.ball.speed.x, -self.ball.speed.y);
    }

    /// The restart action: new grid, serve position, lives refilled.
    /// Score intentionally carries over.
    pub fn restart(&mut self) {
        self.reset_bricks();
        self.reset_serve();
        self.lives = INITIAL_LIVES;
    }

    pub fn alive_brick_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(false);
        assert_eq!(state.bricks.len(), BRICK_COUNT);
        assert!(state.bricks.iter().all(|b| b.alive));
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.score, 0);

        // First brick sits at the computed grid offset
        assert_eq!(state.bricks[0].pos, Vec2::new(40.0, 50.0));
        // Last brick is the bottom-right of the grid
        let last = state.bricks[BRICK_COUNT - 1];
        assert_eq!(last.pos, Vec2::new(40.0 + 17.0 * 40.0, 50.0 + 5.0 * 20.0));
    }

    #[test]
    fn test_serve_position() {
        let state = GameState::new(false);
        assert_eq!(state.paddle.pos, Vec2::new(350.0, 550.0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 546.0));
        assert_eq!(state.ball.vel, Vec2::new(BALL_SPEED_X, -BALL_SPEED_Y));
    }

    #[test]
    fn test_debug_speeds() {
        let state = GameState::new(true);
        assert_eq!(
            state.ball.speed,
            Vec2::new(DEBUG_BALL_SPEED_X, DEBUG_BALL_SPEED_Y)
        );
    }

    #[test]
    fn test_restart_refills_lives_but_keeps_score() {
        let mut state = GameState::new(false);
        state.lives = 0;
        state.score = 42;
        state.bricks[0].alive = false;

        state.restart();
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.score, 42);
        assert!(state.bricks.iter().all(|b| b.alive));
    }
}
