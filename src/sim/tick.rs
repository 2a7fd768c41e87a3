//! Per-frame simulation step
//!
//! `advance` is the whole game: called once per rendered frame with the
//! wall-clock seconds since the previous frame. No clamping and no fixed
//! timestep - the sim is exactly as stable as the caller's frame pacing,
//! and a huge `elapsed_seconds` will visibly teleport the ball.

use glam::Vec2;

use super::collision::{HitSide, ball_in_brick, ball_on_paddle, resolve_hit_side};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input sampled by the shell for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Move-left held (ArrowLeft / A)
    pub left: bool,
    /// Move-right held (ArrowRight / D)
    pub right: bool,
    /// Restart action (P); only honored on the game-over screen
    pub restart: bool,
    /// Debug only: teleport the ball to this position (pointer click)
    pub warp_to: Option<Vec2>,
}

/// Advance the game by one frame.
///
/// Order matters and is load-bearing: motion, screen bounds, bottom loss,
/// paddle move + clamp, paddle bounce, brick hits, round clear, restart.
pub fn advance(state: &mut GameState, input: &FrameInput, elapsed_seconds: f32) {
    state.events.clear();

    // Sampled once, up front: a life lost mid-frame does not stop this
    // frame's paddle movement, and the restart action only counts if the
    // game was already over when the frame began.
    let player_alive = state.alive();

    // --- Ball motion ---
    if player_alive {
        state.ball.integrate(elapsed_seconds);
    }

    // Debug: teleport the ball to the pointer on click
    if state.debug {
        if let Some(target) = input.warp_to {
            state.ball.pos = target;
        }
    }

    // --- Screen bounds ---
    // Top, right and left are three independent checks; right and left can
    // in principle both fire on a degenerate screen width, which is kept
    // as-is.
    if state.ball.pos.y < 0.0 {
        state.ball.pos.y = 0.0;
        state.ball.vel.y = state.ball.speed.y;
        state.events.push(GameEvent::WallBounce);
    }
    if state.ball.pos.x >= SCREEN_WIDTH {
        state.ball.pos.x = SCREEN_WIDTH;
        state.ball.vel.x = -state.ball.speed.x;
        state.events.push(GameEvent::WallBounce);
    }
    if state.ball.pos.x <= 0.0 {
        state.ball.pos.x = 0.0;
        state.ball.vel.x = state.ball.speed.x;
        state.events.push(GameEvent::WallBounce);
    }

    // --- Bottom-of-screen loss ---
    if state.ball.pos.y > SCREEN_HEIGHT {
        state.reset_serve();
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::LifeLost);
        if state.lives == 0 {
            state.events.push(GameEvent::GameOver);
        }
    }

    // --- Paddle movement ---
    if player_alive {
        if input.left {
            state.paddle.pos.x -= PADDLE_SPEED * elapsed_seconds;
        }
        if input.right {
            state.paddle.pos.x += PADDLE_SPEED * elapsed_seconds;
        }
    }

    // Debug autopilot: keep the paddle under the ball
    if state.debug {
        state.paddle.pos.x = state.ball.pos.x - PADDLE_WIDTH / 2.0;
    }

    // --- Paddle clamp ---
    state.paddle.clamp_to_screen();

    // --- Paddle bounce ---
    // Always sends the ball up, whatever the incoming direction or where
    // on the paddle it landed. Checked even on the frozen post-game ball,
    // where it is inert (the serve position sits above the paddle rect).
    if ball_on_paddle(state.ball.pos, &state.paddle.rect()) {
        state.ball.vel.y = -state.ball.speed.y;
        state.events.push(GameEvent::PaddleBounce);
    }

    // --- Brick hits ---
    for i in 0..state.bricks.len() {
        if !state.bricks[i].alive {
            continue;
        }
        let rect = state.bricks[i].rect();
        if !ball_in_brick(state.ball.pos, &rect) {
            continue;
        }

        state.bricks[i].alive = false;
        state.score += 1;
        state.events.push(GameEvent::BrickDestroyed { index: i });

        // Bounce off whichever side the ball penetrated least
        match resolve_hit_side(state.ball.pos, &rect) {
            HitSide::Top => state.ball.vel.y = -state.ball.speed.y,
            HitSide::Bottom => state.ball.vel.y = state.ball.speed.y,
            HitSide::Left => state.ball.vel.x = -state.ball.speed.x,
            HitSide::Right => state.ball.vel.x = state.ball.speed.x,
        }
    }

    // --- Round clear ---
    if state.bricks.iter().all(|b| !b.alive) {
        state.rounds_cleared += 1;
        state.reset_bricks();
        state.reset_serve();
        state.events.push(GameEvent::RoundCleared);
    }

    // --- Restart ---
    if !player_alive && input.restart {
        state.restart();
        state.events.push(GameEvent::Restarted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mid_air_state() -> GameState {
        let mut state = GameState::new(false);
        // Park the ball mid-screen, clear of bricks, paddle and walls
        state.ball.pos = Vec2::new(400.0, 300.0);
        state
    }

    #[test]
    fn test_motion_is_plain_euler() {
        let mut state = mid_air_state();
        let before = state.ball.pos;
        let vel = state.ball.vel;
        let dt = 0.016;

        advance(&mut state, &FrameInput::default(), dt);
        assert_eq!(state.ball.pos, before + vel * dt);
    }

    #[test]
    fn test_zero_dt_is_a_no_op_for_motion() {
        let mut state = mid_air_state();
        let before = state.ball.pos;
        advance(&mut state, &FrameInput::default(), 0.0);
        assert_eq!(state.ball.pos, before);
    }

    #[test]
    fn test_top_bounce_clamps_and_sends_down() {
        let mut state = mid_air_state();
        state.ball.pos = Vec2::new(400.0, 2.0);
        state.ball.vel = Vec2::new(state.ball.speed.x, -state.ball.speed.y);

        advance(&mut state, &FrameInput::default(), 0.05);
        assert_eq!(state.ball.pos.y, 0.0);
        assert_eq!(state.ball.vel.y, state.ball.speed.y);
        assert!(state.events.contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_side_bounces_clamp_and_flip() {
        let mut state = mid_air_state();
        state.ball.pos = Vec2::new(799.0, 300.0);
        state.ball.vel = Vec2::new(state.ball.speed.x, state.ball.speed.y);
        advance(&mut state, &FrameInput::default(), 0.05);
        assert_eq!(state.ball.pos.x, SCREEN_WIDTH);
        assert_eq!(state.ball.vel.x, -state.ball.speed.x);

        let mut state = mid_air_state();
        state.ball.pos = Vec2::new(1.0, 300.0);
        state.ball.vel = Vec2::new(-state.ball.speed.x, state.ball.speed.y);
        advance(&mut state, &FrameInput::default(), 0.05);
        assert_eq!(state.ball.pos.x, 0.0);
        assert_eq!(state.ball.vel.x, state.ball.speed.x);
    }

    #[test]
    fn test_bottom_loss_resets_serve_and_decrements_lives() {
        let mut state = mid_air_state();
        state.ball.pos.y = SCREEN_HEIGHT + 1.0;

        advance(&mut state, &FrameInput::default(), 0.0);
        assert_eq!(state.lives, 2);
        assert_eq!(state.paddle.pos, Vec2::new(350.0, 550.0));
        assert_eq!(
            state.ball.pos,
            Vec2::new(
                state.paddle.pos.x + PADDLE_WIDTH / 2.0,
                state.paddle.pos.y - BALL_DIAMETER / 2.0
            )
        );
        assert_eq!(
            state.ball.vel,
            Vec2::new(state.ball.speed.x, -state.ball.speed.y)
        );
        assert!(state.events.contains(&GameEvent::LifeLost));
    }

    #[test]
    fn test_paddle_moves_and_clamps() {
        let mut state = mid_air_state();
        let input = FrameInput {
            right: true,
            ..Default::default()
        };
        // A full second at paddle speed overshoots the right edge
        advance(&mut state, &input, 1.0);
        assert_eq!(state.paddle.pos.x, SCREEN_WIDTH - PADDLE_WIDTH);

        let input = FrameInput {
            left: true,
            ..Default::default()
        };
        advance(&mut state, &input, 5.0);
        assert_eq!(state.paddle.pos.x, 0.0);
    }

    #[test]
    fn test_both_directions_cancel_out() {
        let mut state = mid_air_state();
        let x_before = state.paddle.pos.x;
        let input = FrameInput {
            left: true,
            right: true,
            ..Default::default()
        };
        advance(&mut state, &input, 0.25);
        assert_eq!(state.paddle.pos.x, x_before);
    }

    #[test]
    fn test_paddle_bounce_always_sends_up() {
        let mut state = mid_air_state();
        state.ball.pos = Vec2::new(
            state.paddle.pos.x + 10.0,
            state.paddle.pos.y + PADDLE_HEIGHT / 2.0,
        );
        state.ball.vel = Vec2::new(-state.ball.speed.x, state.ball.speed.y);

        advance(&mut state, &FrameInput::default(), 0.0);
        assert_eq!(state.ball.vel.y, -state.ball.speed.y);
        // Horizontal direction is untouched
        assert_eq!(state.ball.vel.x, -state.ball.speed.x);
        assert!(state.events.contains(&GameEvent::PaddleBounce));
    }

    #[test]
    fn test_brick_hit_kills_scores_and_bounces() {
        let mut state = mid_air_state();
        // Inside brick 0 (rect (40,50)-(79,69) after trim), nearest the
        // bottom edge: 60 is 9 from bottom, 10 from top, 19/20 from sides.
        state.ball.pos = Vec2::new(59.0, 60.0);
        state.ball.vel = Vec2::new(state.ball.speed.x, -state.ball.speed.y);

        advance(&mut state, &FrameInput::default(), 0.0);
        assert!(!state.bricks[0].alive);
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel.y, state.ball.speed.y);
        assert!(state.events.contains(&GameEvent::BrickDestroyed { index: 0 }));
    }

    #[test]
    fn test_brick_hit_side_resolution_left() {
        let mut state = mid_air_state();
        // Just inside brick 0's left edge
        state.ball.pos = Vec2::new(41.0, 60.0);
        state.ball.vel = Vec2::new(state.ball.speed.x, state.ball.speed.y);

        advance(&mut state, &FrameInput::default(), 0.0);
        assert_eq!(state.ball.vel.x, -state.ball.speed.x);
        assert_eq!(state.ball.vel.y, state.ball.speed.y);
    }

    #[test]
    fn test_dead_bricks_do_not_collide() {
        let mut state = mid_air_state();
        state.bricks[0].alive = false;
        state.ball.pos = Vec2::new(59.0, 60.0);

        advance(&mut state, &FrameInput::default(), 0.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_round_clear_restores_full_grid() {
        let mut state = mid_air_state();
        for brick in &mut state.bricks {
            brick.alive = false;
        }

        advance(&mut state, &FrameInput::default(), 0.0);
        assert_eq!(state.alive_brick_count(), BRICK_COUNT);
        assert_eq!(state.rounds_cleared, 1);
        assert!(state.events.contains(&GameEvent::RoundCleared));

        // Grid comes back in the original row-major layout
        for (i, brick) in state.bricks.iter().enumerate() {
            let row = (i / BRICK_COLUMNS) as f32;
            let col = (i % BRICK_COLUMNS) as f32;
            assert_eq!(
                brick.pos,
                Vec2::new(col * BRICK_WIDTH + 40.0, row * BRICK_HEIGHT + 50.0)
            );
        }

        // Ball and paddle are back on the serve position
        assert_eq!(state.ball.pos, Vec2::new(400.0, 546.0));
    }

    #[test]
    fn test_last_brick_triggers_round_clear_same_frame() {
        let mut state = mid_air_state();
        for brick in state.bricks.iter_mut().skip(1) {
            brick.alive = false;
        }
        state.ball.pos = Vec2::new(59.0, 60.0);

        advance(&mut state, &FrameInput::default(), 0.0);
        assert_eq!(state.score, 1);
        assert_eq!(state.alive_brick_count(), BRICK_COUNT);
        assert!(state.events.contains(&GameEvent::RoundCleared));
    }

    #[test]
    fn test_game_over_freezes_ball_until_restart() {
        let mut state = mid_air_state();
        state.lives = 1;
        state.ball.pos.y = SCREEN_HEIGHT + 1.0;
        state.ball.vel.y = state.ball.speed.y;
        advance(&mut state, &FrameInput::default(), 0.016);
        assert_eq!(state.lives, 0);
        assert!(state.events.contains(&GameEvent::GameOver));

        // Ball is frozen at the serve position even across big steps
        let frozen = state.ball.pos;
        advance(&mut state, &FrameInput::default(), 1.0);
        assert_eq!(state.ball.pos, frozen);

        // Restart refills lives and rebuilds the grid
        let input = FrameInput {
            restart: true,
            ..Default::default()
        };
        advance(&mut state, &input, 0.016);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.alive_brick_count(), BRICK_COUNT);
        assert!(state.events.contains(&GameEvent::Restarted));

        // Pressing restart again while alive does nothing
        advance(&mut state, &input, 0.016);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert!(!state.events.contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_restart_ignored_on_the_frame_the_last_life_is_lost() {
        let mut state = mid_air_state();
        state.lives = 1;
        state.ball.pos.y = SCREEN_HEIGHT + 1.0;
        let input = FrameInput {
            restart: true,
            ..Default::default()
        };
        // Alive at frame start, so the restart does not count yet
        advance(&mut state, &input, 0.0);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_speed_magnitude_invariant_over_many_frames() {
        let mut state = GameState::new(false);
        let input = FrameInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            advance(&mut state, &input, 0.016);
            assert_eq!(state.ball.vel.x.abs(), state.ball.speed.x);
            assert_eq!(state.ball.vel.y.abs(), state.ball.speed.y);
        }
    }

    #[test]
    fn test_debug_warp_and_autopilot() {
        let mut state = GameState::new(true);
        let input = FrameInput {
            warp_to: Some(Vec2::new(321.0, 300.0)),
            ..Default::default()
        };
        advance(&mut state, &input, 0.0);
        assert_eq!(state.ball.pos, Vec2::new(321.0, 300.0));
        // Autopilot centers the paddle under the ball
        assert_eq!(state.paddle.pos.x, 321.0 - PADDLE_WIDTH / 2.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_clamped(
            start_x in -200.0f32..1000.0,
            left in any::<bool>(),
            right in any::<bool>(),
            dt in 0.0f32..0.5,
        ) {
            let mut state = mid_air_state();
            state.paddle.pos.x = start_x;
            let input = FrameInput { left, right, ..Default::default() };

            advance(&mut state, &input, dt);
            prop_assert!(state.paddle.pos.x >= 0.0);
            prop_assert!(state.paddle.pos.x <= SCREEN_WIDTH - PADDLE_WIDTH);
        }

        #[test]
        fn prop_velocity_components_are_exactly_the_fixed_speeds(
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
            flip_x in any::<bool>(),
            flip_y in any::<bool>(),
            dt in 0.0f32..0.05,
        ) {
            let mut state = GameState::new(false);
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(
                if flip_x { -state.ball.speed.x } else { state.ball.speed.x },
                if flip_y { -state.ball.speed.y } else { state.ball.speed.y },
            );

            advance(&mut state, &FrameInput::default(), dt);
            prop_assert_eq!(state.ball.vel.x.abs(), state.ball.speed.x);
            prop_assert_eq!(state.ball.vel.y.abs(), state.ball.speed.y);
        }

        #[test]
        fn prop_free_flight_is_exact_integration(
            x in 100.0f32..700.0,
            y in 250.0f32..500.0,
            flip_x in any::<bool>(),
            flip_y in any::<bool>(),
            dt in 0.0f32..0.1,
        ) {
            let mut state = GameState::new(false);
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(
                if flip_x { -state.ball.speed.x } else { state.ball.speed.x },
                if flip_y { -state.ball.speed.y } else { state.ball.speed.y },
            );
            let expected = state.ball.pos + state.ball.vel * dt;

            advance(&mut state, &FrameInput::default(), dt);
            // The chosen box keeps the ball clear of bricks, paddle and
            // walls for any dt in range, so no clamp can fire
            prop_assert_eq!(state.ball.pos, expected);
        }
    }
}
