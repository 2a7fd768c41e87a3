//! Collision tests for the arena
//!
//! Everything here is point-vs-rect: the ball is tested by its center only,
//! which is what makes the whole game a handful of comparisons per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Which side of a brick the ball penetrated least when a hit is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Check whether the ball's center is on the paddle (edges count as hits)
pub fn ball_on_paddle(ball_center: Vec2, paddle: &Rect) -> bool {
    paddle.contains(ball_center)
}

/// Check whether the ball's center is inside a brick.
///
/// The brick rect is trimmed by one unit on the bottom and right so shared
/// grid edges never register for two bricks, and the interior test is strict.
pub fn ball_in_brick(ball_center: Vec2, brick: &Rect) -> bool {
    brick.trimmed().contains_interior(ball_center)
}

/// Work out which side of the brick the ball penetrated least.
///
/// Scans top, bottom, left, right and keeps the smallest absolute distance
/// from the ball center to each edge; ties keep the earlier-scanned side.
/// Assumes the center is already known to be inside the (trimmed) rect.
pub fn resolve_hit_side(ball_center: Vec2, brick: &Rect) -> HitSide {
    let trimmed = brick.trimmed();

    // Start with the top; it is the first side tested, so it is the winner
    // until something penetrates less.
    let mut side = HitSide::Top;
    let mut shortest = (trimmed.top() - ball_center.y).abs();

    let bottom = (trimmed.bottom() - ball_center.y).abs();
    if bottom < shortest {
        side = HitSide::Bottom;
        shortest = bottom;
    }

    let left = (trimmed.left() - ball_center.x).abs();
    if left < shortest {
        side = HitSide::Left;
        shortest = left;
    }

    let right = (trimmed.right() - ball_center.x).abs();
    if right < shortest {
        side = HitSide::Right;
    }

    side
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_on_paddle_inclusive() {
        let paddle = Rect::new(350.0, 550.0, 100.0, 10.0);
        assert!(ball_on_paddle(Vec2::new(350.0, 550.0), &paddle));
        assert!(ball_on_paddle(Vec2::new(450.0, 560.0), &paddle));
        assert!(ball_on_paddle(Vec2::new(400.0, 555.0), &paddle));
        assert!(!ball_on_paddle(Vec2::new(400.0, 549.9), &paddle));
        assert!(!ball_on_paddle(Vec2::new(450.1, 555.0), &paddle));
    }

    #[test]
    fn test_ball_in_brick_trimmed_edges() {
        let brick = Rect::new(100.0, 100.0, 40.0, 20.0);
        // Shared right/bottom edges are trimmed off
        assert!(!ball_in_brick(Vec2::new(139.0, 110.0), &brick));
        assert!(!ball_in_brick(Vec2::new(120.0, 119.0), &brick));
        // Left/top edges are excluded by the strict comparison
        assert!(!ball_in_brick(Vec2::new(100.0, 110.0), &brick));
        assert!(ball_in_brick(Vec2::new(100.1, 118.9), &brick));
        assert!(ball_in_brick(Vec2::new(120.0, 110.0), &brick));
    }

    #[test]
    fn test_resolve_hit_side_bottom_wins() {
        // Brick spans (100,100)-(139,119) after the trim. Ball center just
        // below the bottom edge: bottom distance 0.4 beats top 19.4 and
        // left 0.5.
        let brick = Rect::new(100.0, 100.0, 40.0, 20.0);
        let side = resolve_hit_side(Vec2::new(100.5, 119.4), &brick);
        assert_eq!(side, HitSide::Bottom);
    }

    #[test]
    fn test_resolve_hit_side_each_edge() {
        let brick = Rect::new(100.0, 100.0, 40.0, 20.0);
        assert_eq!(
            resolve_hit_side(Vec2::new(120.0, 101.0), &brick),
            HitSide::Top
        );
        assert_eq!(
            resolve_hit_side(Vec2::new(120.0, 118.0), &brick),
            HitSide::Bottom
        );
        assert_eq!(
            resolve_hit_side(Vec2::new(101.0, 110.0), &brick),
            HitSide::Left
        );
        assert_eq!(
            resolve_hit_side(Vec2::new(138.0, 110.0), &brick),
            HitSide::Right
        );
    }

    #[test]
    fn test_resolve_hit_side_tie_prefers_scan_order() {
        let brick = Rect::new(0.0, 0.0, 41.0, 41.0); // trimmed to 40x40
        // Dead center: all four distances equal 20 - top is scanned first
        assert_eq!(
            resolve_hit_side(Vec2::new(20.0, 20.0), &brick),
            HitSide::Top
        );
        // Equidistant from bottom and left - bottom is scanned earlier
        assert_eq!(
            resolve_hit_side(Vec2::new(5.0, 35.0), &brick),
            HitSide::Bottom
        );
    }
}
