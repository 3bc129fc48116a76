//! Collision detection and response
//!
//! Detection is a pure query over the registry that produces a
//! [`CollisionEvent`]; [`apply`] then performs the reflections and the brick
//! destruction it describes.

use super::state::{Ball, BrickId, Registry};
use crate::config::GameConfig;

/// Arena wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// Something the ball touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionTarget {
    Wall(WallSide),
    Paddle,
    Brick(BrickId),
}

/// Every contact found for one tick
///
/// Walls come first in left/right/top/bottom order, followed by at most one
/// paddle or brick contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionEvent {
    pub targets: Vec<CollisionTarget>,
}

impl CollisionEvent {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn hit_wall(&self, side: WallSide) -> bool {
        self.targets.contains(&CollisionTarget::Wall(side))
    }

    /// Left or right wall (x reflects once even if both fire)
    pub fn hit_side_wall(&self) -> bool {
        self.hit_wall(WallSide::Left) || self.hit_wall(WallSide::Right)
    }

    /// Ball went out through the bottom
    pub fn ball_lost(&self) -> bool {
        self.hit_wall(WallSide::Bottom)
    }

    /// The paddle or brick contact, if any
    pub fn body(&self) -> Option<CollisionTarget> {
        self.targets
            .iter()
            .copied()
            .find(|t| !matches!(t, CollisionTarget::Wall(_)))
    }

    pub fn destroyed_brick(&self) -> Option<BrickId> {
        match self.body() {
            Some(CollisionTarget::Brick(id)) => Some(id),
            _ => None,
        }
    }
}

/// What [`apply`] changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Applied {
    pub flipped_x: bool,
    /// Number of y reflections (top wall and body are independent)
    pub flips_y: u8,
    pub destroyed: Option<BrickId>,
}

/// Wall contacts for the ball's current position
pub fn detect_walls(ball: &Ball, config: &GameConfig) -> Vec<WallSide> {
    let left = ball.rect.left();
    let top = ball.rect.top();
    let mut walls = Vec::new();
    if left <= 0.0 {
        walls.push(WallSide::Left);
    }
    if left > config.width - config.ball_size {
        walls.push(WallSide::Right);
    }
    if top <= 0.0 {
        walls.push(WallSide::Top);
    }
    if top > config.height - config.ball_size {
        walls.push(WallSide::Bottom);
    }
    walls
}

/// First body overlapping the ball, in creation order: bricks by ascending
/// id, then the paddle
pub fn detect_body(ball: &Ball, registry: &Registry) -> Option<CollisionTarget> {
    registry
        .bricks()
        .iter()
        .find(|brick| brick.rect.overlaps(&ball.rect))
        .map(|brick| CollisionTarget::Brick(brick.id))
        .or_else(|| {
            registry
                .paddle
                .rect
                .overlaps(&ball.rect)
                .then_some(CollisionTarget::Paddle)
        })
}

/// Collect every contact of the ball in play. A registry without a ball
/// yields an empty event.
pub fn detect_collisions(registry: &Registry, config: &GameConfig) -> CollisionEvent {
    let Some(ball) = registry.ball() else {
        debug_assert!(false, "detect_collisions: no ball in play");
        return CollisionEvent::default();
    };

    let mut targets: Vec<CollisionTarget> = detect_walls(ball, config)
        .into_iter()
        .map(CollisionTarget::Wall)
        .collect();
    targets.extend(detect_body(ball, registry));
    CollisionEvent { targets }
}

/// Apply reflections and brick destruction for `event`
pub fn apply(event: &CollisionEvent, registry: &mut Registry) -> Applied {
    let mut applied = Applied::default();

    {
        let Some(ball) = registry.ball_mut() else {
            return applied;
        };
        if event.hit_side_wall() {
            ball.reflect_x();
            applied.flipped_x = true;
        }
        if event.hit_wall(WallSide::Top) {
            ball.reflect_y();
            applied.flips_y += 1;
        }
    }

    match event.body() {
        Some(CollisionTarget::Paddle) => {
            if let Some(ball) = registry.ball_mut() {
                ball.reflect_y();
                applied.flips_y += 1;
            }
            log::debug!("Paddle hit");
        }
        Some(CollisionTarget::Brick(id)) => {
            if let Some(ball) = registry.ball_mut() {
                ball.reflect_y();
                applied.flips_y += 1;
            }
            if registry.destroy_brick(id).is_some() {
                applied.destroyed = Some(id);
                log::debug!(
                    "Brick {} destroyed, {} remaining",
                    id,
                    registry.bricks_remaining()
                );
            }
        }
        Some(CollisionTarget::Wall(_)) | None => {}
    }

    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (GameConfig, Registry) {
        let config = GameConfig::default();
        let mut registry = Registry::new(&config).unwrap();
        registry.spawn_ball(&config);
        (config, registry)
    }

    fn place_ball(registry: &mut Registry, x0: f32, y0: f32, vel: Vec2) {
        let ball = registry.ball_mut().unwrap();
        ball.rect = ball.rect.moved_to(Vec2::new(x0, y0));
        ball.vel = vel;
    }

    #[test]
    fn test_no_contacts_in_open_space() {
        let (config, registry) = setup();
        let event = detect_collisions(&registry, &config);
        assert!(event.is_empty());
    }

    #[test]
    fn test_left_wall_reflects_x() {
        let (config, mut registry) = setup();
        place_ball(&mut registry, 0.0, 300.0, Vec2::new(-10.0, 10.0));

        let event = detect_collisions(&registry, &config);
        assert_eq!(event.targets, vec![CollisionTarget::Wall(WallSide::Left)]);

        let applied = apply(&event, &mut registry);
        assert!(applied.flipped_x);
        assert_eq!(applied.flips_y, 0);
        assert_eq!(registry.ball().unwrap().vel, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_right_wall_uses_ball_size() {
        let (config, mut registry) = setup();
        place_ball(&mut registry, 460.0, 300.0, Vec2::new(10.0, 10.0));
        assert!(detect_collisions(&registry, &config).is_empty());

        place_ball(&mut registry, 460.5, 300.0, Vec2::new(10.0, 10.0));
        let event = detect_collisions(&registry, &config);
        assert!(event.hit_wall(WallSide::Right));
        apply(&event, &mut registry);
        assert_eq!(registry.ball().unwrap().vel.x, -10.0);
    }

    #[test]
    fn test_x_flips_once_when_both_side_walls_fire() {
        let (_, mut registry) = setup();
        place_ball(&mut registry, 200.0, 300.0, Vec2::new(-10.0, 10.0));

        let event = CollisionEvent {
            targets: vec![
                CollisionTarget::Wall(WallSide::Left),
                CollisionTarget::Wall(WallSide::Right),
            ],
        };
        let applied = apply(&event, &mut registry);
        assert!(applied.flipped_x);
        assert_eq!(registry.ball().unwrap().vel.x, 10.0);
    }

    #[test]
    fn test_top_wall_reflects_y() {
        let (config, mut registry) = setup();
        place_ball(&mut registry, 100.0, 0.0, Vec2::new(10.0, -10.0));

        let event = detect_collisions(&registry, &config);
        assert_eq!(event.targets, vec![CollisionTarget::Wall(WallSide::Top)]);
        apply(&event, &mut registry);
        assert_eq!(registry.ball().unwrap().vel, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_bottom_wall_marks_lost() {
        let (config, mut registry) = setup();
        place_ball(&mut registry, 300.0, 640.0, Vec2::new(10.0, 10.0));
        assert!(!detect_collisions(&registry, &config).ball_lost());

        place_ball(&mut registry, 300.0, 641.0, Vec2::new(10.0, 10.0));
        assert!(detect_collisions(&registry, &config).ball_lost());
    }

    #[test]
    fn test_brick_hit_destroys_and_reflects() {
        let (config, mut registry) = setup();
        // Overlaps brick (0, 2) only
        let target = registry.bricks()[2].rect;
        place_ball(&mut registry, target.x0 + 2.0, target.y1 - 5.0, Vec2::new(10.0, -10.0));

        let event = detect_collisions(&registry, &config);
        assert!(event.destroyed_brick().is_some());

        let applied = apply(&event, &mut registry);
        assert_eq!(applied.flips_y, 1);
        assert_eq!(registry.bricks_remaining(), 49);
        assert_eq!(registry.ball().unwrap().vel, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_top_wall_and_brick_flips_cancel() {
        // Top row flush with the ceiling
        let config = GameConfig {
            brick_start_y: 0.0,
            ..Default::default()
        };
        let mut registry = Registry::new(&config).unwrap();
        registry.spawn_ball(&config);
        // Ball spans x 110..150, inside brick (0, 2) at 104..148.5
        place_ball(&mut registry, 110.0, -5.0, Vec2::new(10.0, -10.0));

        let event = detect_collisions(&registry, &config);
        assert_eq!(
            event.targets,
            vec![CollisionTarget::Wall(WallSide::Top), CollisionTarget::Brick(3)]
        );

        let applied = apply(&event, &mut registry);
        assert_eq!(applied.flips_y, 2);
        assert!(!applied.flipped_x);
        assert_eq!(applied.destroyed, Some(3));
        assert_eq!(registry.ball().unwrap().vel, Vec2::new(10.0, -10.0));
        assert_eq!(registry.bricks_remaining(), 49);
    }

    #[test]
    fn test_multi_brick_overlap_destroys_lowest_id_only() {
        let (config, mut registry) = setup();
        // Straddles bricks 1 and 2 (row 0) and 11 and 12 (row 1)
        place_ball(&mut registry, 30.0, 55.0, Vec2::new(10.0, -10.0));

        let event = detect_collisions(&registry, &config);
        assert_eq!(event.body(), Some(CollisionTarget::Brick(1)));

        let applied = apply(&event, &mut registry);
        assert_eq!(applied.destroyed, Some(1));
        assert_eq!(applied.flips_y, 1);
        assert_eq!(registry.bricks_remaining(), 49);
    }

    #[test]
    fn test_paddle_hit_reflects_without_destroying() {
        let (config, mut registry) = setup();
        registry.paddle.move_to(&config, 200.0);
        place_ball(&mut registry, 220.0, 601.0, Vec2::new(10.0, 10.0));

        let event = detect_collisions(&registry, &config);
        assert_eq!(event.targets, vec![CollisionTarget::Paddle]);

        let applied = apply(&event, &mut registry);
        assert_eq!(applied.destroyed, None);
        assert_eq!(registry.bricks_remaining(), 50);
        assert_eq!(registry.ball().unwrap().vel, Vec2::new(10.0, -10.0));
    }

    #[test]
    fn test_paddle_edge_contact_counts() {
        let (config, mut registry) = setup();
        // Ball bottom edge exactly on the paddle top edge
        place_ball(&mut registry, 10.0, 600.0, Vec2::new(10.0, 10.0));
        let event = detect_collisions(&registry, &config);
        assert_eq!(event.body(), Some(CollisionTarget::Paddle));
    }
}
