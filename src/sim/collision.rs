//! Collision detection and response
//!
//! Ball integration against the arena walls, paddle rebounds with per-difficulty
//! perturbation, and brick hits. The bounce model is gameplay-tuned, not
//! physically accurate.

use glam::Vec2;
use rand::Rng;

use super::shape::overlaps;
use super::state::{Ball, BounceRule, Brick, Paddle};

/// What the arena edges did to the ball this step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Reflected off the left or right wall
    pub horizontal: bool,
    /// Reflected off the ceiling
    pub ceiling: bool,
    /// Fell past the bottom edge
    pub missed: bool,
}

impl WallContact {
    pub fn bounced(&self) -> bool {
        self.horizontal || self.ceiling
    }
}

/// Integrate the ball and resolve the arena edges.
///
/// Each edge is checked independently, so a corner contact reflects both axes
/// in the same step. Crossing the bottom edge is reported as a miss and leaves
/// position and velocity for the caller to reset.
pub fn integrate_ball(ball: &mut Ball, dt: f32, arena: Vec2) -> WallContact {
    let radius = ball.radius();
    let mut pos = ball.body.pos + ball.vel * dt;
    let mut vel = ball.vel;
    let mut contact = WallContact::default();

    if pos.x - radius <= 0.0 {
        pos.x = radius;
        vel.x = -vel.x;
        contact.horizontal = true;
    }
    if pos.x + radius >= arena.x {
        pos.x = arena.x - radius;
        vel.x = -vel.x;
        contact.horizontal = true;
    }
    if pos.y + radius >= arena.y {
        pos.y = arena.y - radius;
        vel.y = -vel.y;
        contact.ceiling = true;
    }
    if pos.y - radius <= 0.0 {
        contact.missed = true;
    }

    ball.body.pos = pos;
    ball.vel = vel;
    contact
}

/// Apply a paddle's perturbation rule to a horizontal velocity
pub fn perturb<R: Rng>(vx: f32, rule: BounceRule, rng: &mut R) -> f32 {
    match rule {
        BounceRule::Plain => vx,
        BounceRule::Jitter(max) if max > 0.0 => vx + rng.random_range(-max..=max),
        BounceRule::Jitter(_) => vx,
        BounceRule::Nudge(amount) => vx + amount * vx.signum(),
    }
}

/// Rebound off the paddle. Returns true if the ball was deflected.
///
/// Only a ball moving downward is deflected, so a ball still overlapping the
/// paddle on the next step does not flip back into it.
pub fn bounce_off_paddle<R: Rng>(
    ball: &mut Ball,
    paddle: &Paddle,
    rule: BounceRule,
    rng: &mut R,
) -> bool {
    if ball.vel.y >= 0.0 || !overlaps(&ball.body, &paddle.body) {
        return false;
    }
    ball.vel.y = -ball.vel.y;
    ball.vel.x = perturb(ball.vel.x, rule, rng);
    true
}

/// Strike at most one live brick: reverse the ball and destroy the brick.
///
/// Returns the index of the destroyed brick.
pub fn strike_brick(ball: &mut Ball, bricks: &mut [Brick]) -> Option<usize> {
    let index = bricks
        .iter()
        .position(|brick| brick.alive && overlaps(&ball.body, &brick.body))?;
    bricks[index].destroy();
    ball.vel = -ball.vel;
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::shape::rgb;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const ARENA: Vec2 = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT);

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::default();
        ball.body.pos = pos;
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_free_flight() {
        let mut ball = ball_at(Vec2::new(500.0, 400.0), Vec2::new(100.0, -50.0));
        let contact = integrate_ball(&mut ball, 0.1, ARENA);
        assert_eq!(contact, WallContact::default());
        assert!((ball.body.pos - Vec2::new(510.0, 395.0)).length() < 1e-3);
    }

    #[test]
    fn test_left_wall_reflects() {
        let mut ball = ball_at(Vec2::new(12.0, 400.0), Vec2::new(-100.0, 20.0));
        let contact = integrate_ball(&mut ball, 0.1, ARENA);
        assert!(contact.horizontal);
        assert_eq!(ball.body.pos.x, BALL_RADIUS);
        assert_eq!(ball.vel, Vec2::new(100.0, 20.0));
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let mut ball = ball_at(
            Vec2::new(ARENA_WIDTH - 12.0, ARENA_HEIGHT - 12.0),
            Vec2::new(100.0, 100.0),
        );
        let contact = integrate_ball(&mut ball, 0.1, ARENA);
        assert!(contact.horizontal && contact.ceiling);
        assert_eq!(ball.vel, Vec2::new(-100.0, -100.0));
        assert_eq!(
            ball.body.pos,
            Vec2::new(ARENA_WIDTH - BALL_RADIUS, ARENA_HEIGHT - BALL_RADIUS)
        );
    }

    #[test]
    fn test_bottom_edge_is_a_miss() {
        let mut ball = ball_at(Vec2::new(500.0, 12.0), Vec2::new(0.0, -100.0));
        let contact = integrate_ball(&mut ball, 0.1, ARENA);
        assert!(contact.missed);
        assert!(!contact.bounced());
    }

    #[test]
    fn test_paddle_bounce_inverts_vertical() {
        let paddle = Paddle::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = ball_at(PADDLE_SPAWN + Vec2::new(0.0, 12.0), Vec2::new(80.0, -300.0));
        assert!(bounce_off_paddle(&mut ball, &paddle, BounceRule::Plain, &mut rng));
        assert_eq!(ball.vel, Vec2::new(80.0, 300.0));

        // Already heading up: no second flip
        assert!(!bounce_off_paddle(&mut ball, &paddle, BounceRule::Plain, &mut rng));
        assert_eq!(ball.vel, Vec2::new(80.0, 300.0));
    }

    #[test]
    fn test_paddle_miss_leaves_ball_alone() {
        let paddle = Paddle::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = ball_at(Vec2::new(50.0, 400.0), Vec2::new(80.0, -300.0));
        assert!(!bounce_off_paddle(&mut ball, &paddle, BounceRule::Plain, &mut rng));
        assert_eq!(ball.vel, Vec2::new(80.0, -300.0));
    }

    #[test]
    fn test_perturb_rules() {
        let mut rng = Pcg32::seed_from_u64(9);
        assert_eq!(perturb(50.0, BounceRule::Plain, &mut rng), 50.0);
        assert_eq!(perturb(50.0, BounceRule::Nudge(5.0), &mut rng), 55.0);
        assert_eq!(perturb(-50.0, BounceRule::Nudge(5.0), &mut rng), -55.0);
        for _ in 0..100 {
            let vx = perturb(50.0, BounceRule::Jitter(40.0), &mut rng);
            assert!((10.0..=90.0).contains(&vx));
        }
    }

    #[test]
    fn test_one_brick_per_step() {
        let mut bricks = vec![
            Brick::new(Vec2::new(500.0, 600.0), rgb(1.0, 0.0, 0.0)),
            Brick::new(Vec2::new(560.0, 600.0), rgb(0.0, 1.0, 0.0)),
        ];
        // Touches both bricks
        let mut ball = ball_at(Vec2::new(530.0, 575.0), Vec2::new(30.0, 200.0));
        assert_eq!(strike_brick(&mut ball, &mut bricks), Some(0));
        assert!(!bricks[0].alive);
        assert!(bricks[1].alive);
        assert_eq!(ball.vel, Vec2::new(-30.0, -200.0));

        // Dead bricks are ignored
        assert_eq!(strike_brick(&mut ball, &mut bricks), Some(1));
        assert_eq!(strike_brick(&mut ball, &mut bricks), None);
    }

    proptest! {
        #[test]
        fn prop_side_wall_reflection_is_lossless(
            y in 100.0f32..700.0,
            gap in 0.0f32..0.5,
            vx in 60.0f32..800.0,
            vy in -500.0f32..500.0,
        ) {
            let dt = 0.01;
            let mut ball = ball_at(Vec2::new(BALL_RADIUS + gap, y), Vec2::new(-vx, vy));
            let contact = integrate_ball(&mut ball, dt, ARENA);
            prop_assert!(contact.horizontal);
            prop_assert_eq!(ball.vel.x, vx);
            prop_assert_eq!(ball.vel.y, vy);
            prop_assert_eq!(ball.body.pos.x, BALL_RADIUS);

            let pos = Vec2::new(ARENA_WIDTH - BALL_RADIUS - gap, y);
            let mut ball = ball_at(pos, Vec2::new(vx, vy));
            integrate_ball(&mut ball, dt, ARENA);
            prop_assert_eq!(ball.vel.x, -vx);
            prop_assert_eq!(ball.body.pos.x, ARENA_WIDTH - BALL_RADIUS);
        }

        #[test]
        fn prop_ceiling_reflection_is_lossless(
            x in 100.0f32..900.0,
            gap in 0.0f32..0.5,
            vx in -500.0f32..500.0,
            vy in 60.0f32..800.0,
        ) {
            let pos = Vec2::new(x, ARENA_HEIGHT - BALL_RADIUS - gap);
            let mut ball = ball_at(pos, Vec2::new(vx, vy));
            let contact = integrate_ball(&mut ball, 0.01, ARENA);
            prop_assert!(contact.ceiling);
            prop_assert_eq!(ball.vel.y, -vy);
            prop_assert_eq!(ball.body.pos.y, ARENA_HEIGHT - BALL_RADIUS);
        }
    }
}
