//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Exactly one `advance` per rendered frame, elapsed seconds passed through
//! - No randomness
//! - No rendering or platform dependencies
//!
//! The shell (main.rs) owns a `GameState`, samples a `FrameInput`, calls
//! `advance`, and then reads positions and events back out for drawing,
//! HUD and audio.

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{HitSide, ball_in_brick, ball_on_paddle, resolve_hit_side};
pub use rect::Rect;
pub use state::{Ball, Brick, GameEvent, GameState, Paddle};
pub use tick::{FrameInput, advance};
