//! Collision resolution between the player hull and obstacle hitboxes
//!
//! The player sprite is approximated by an isosceles triangle (nose tip plus
//! two rear corners) rotated with the sprite. Each obstacle kind carries its
//! own compound hitbox: one or two rectangles/circles whose sub-checks are
//! OR-combined. The fractions below are tuned per sprite; margins run
//! generous or tight relative to the rendered silhouette.

use glam::Vec2;

use super::geometry::{
    Rect, Segment, point_in_rect, segment_circle_intersect, segment_rect_intersect,
};
use super::state::{Obstacle, ObstacleKind, Player, Powerup};
use crate::consts::HULL_SHRINK;
use crate::rotate_around;

/// The player's triangular collision hull for one tick.
///
/// Built once per tick and reused against every obstacle and powerup.
#[derive(Debug, Clone, Copy)]
pub struct Hull {
    /// Nose tip, top-rear corner, bottom-rear corner
    pub points: [Vec2; 3],
}

impl Hull {
    pub fn of_player(player: &Player) -> Self {
        let center = player.center();
        let hw = player.size.x * 0.5;
        let hh = player.size.y * 0.5;
        let radians = player.rotation.to_radians();
        let points = [
            Vec2::new(hw * HULL_SHRINK, 0.0),
            Vec2::new(-hw * HULL_SHRINK, -hh * HULL_SHRINK),
            Vec2::new(-hw * HULL_SHRINK, hh * HULL_SHRINK),
        ]
        .map(|local| rotate_around(center + local, center, radians));
        Self { points }
    }

    /// The three triangle edges
    pub fn edges(&self) -> [Segment; 3] {
        let [nose, top, bottom] = self.points;
        [
            Segment::new(nose, top),
            Segment::new(top, bottom),
            Segment::new(bottom, nose),
        ]
    }

    pub fn centroid(&self) -> Vec2 {
        (self.points[0] + self.points[1] + self.points[2]) / 3.0
    }
}

/// Hull-vs-rectangle: any vertex inside, or any edge crossing the boundary
fn hull_hits_rect(hull: &Hull, rect: &Rect) -> bool {
    hull.points.iter().any(|&p| point_in_rect(p, rect))
        || hull
            .edges()
            .iter()
            .any(|edge| segment_rect_intersect(edge, rect))
}

/// Hull-vs-circle: any vertex within the radius, or any edge passing through
fn hull_hits_circle(hull: &Hull, center: Vec2, radius: f32) -> bool {
    hull.points.iter().any(|&p| p.distance(center) < radius)
        || hull
            .edges()
            .iter()
            .any(|edge| segment_circle_intersect(edge, center, radius))
}

#[inline]
fn at(o: &Obstacle, fx: f32, fy: f32) -> Vec2 {
    o.pos + o.size * Vec2::new(fx, fy)
}

#[inline]
fn part(o: &Obstacle, fx: f32, fy: f32, fw: f32, fh: f32) -> Rect {
    Rect::new(at(o, fx, fy), o.size * Vec2::new(fw, fh))
}

fn ball_circle(o: &Obstacle) -> (Vec2, f32) {
    (at(o, 0.5, 0.33), o.size.x * 0.37)
}

/// Resolve the player hull against one obstacle's compound hitbox
pub fn check_collision(player: &Player, hull: &Hull, obstacle: &Obstacle) -> bool {
    match obstacle.kind {
        ObstacleKind::Ball => {
            let (center, radius) = ball_circle(obstacle);
            let circle_bounds = Rect::new(
                center - Vec2::splat(radius),
                Vec2::splat(radius * 2.0),
            );
            // Cheap reject before the per-edge math
            if !player.bounds().overlaps(&circle_bounds) {
                return false;
            }
            hull_hits_circle(hull, center, radius)
        }
        ObstacleKind::Plant => {
            let pot = part(obstacle, 0.25, 0.55, 0.5, 0.45);
            let foliage = at(obstacle, 0.5, 0.3);
            hull_hits_rect(hull, &pot)
                || hull_hits_circle(hull, foliage, obstacle.size.x * 0.3)
        }
        ObstacleKind::Mug => {
            let body = part(obstacle, 0.05, 0.15, 0.7, 0.8);
            // The rendered handle is an arc; for collision it is a full circle
            let handle = at(obstacle, 0.8, 0.45);
            hull_hits_rect(hull, &body)
                || hull_hits_circle(hull, handle, obstacle.size.x * 0.18)
        }
        ObstacleKind::Monitor => {
            let screen = part(obstacle, 0.05, 0.0, 0.9, 0.6);
            let stand = part(obstacle, 0.35, 0.6, 0.3, 0.4);
            hull_hits_rect(hull, &screen) || hull_hits_rect(hull, &stand)
        }
        // Kinds without a bespoke hitbox get the central 80% of their box
        _ => hull_hits_rect(hull, &part(obstacle, 0.1, 0.1, 0.8, 0.8)),
    }
}

/// Powerup pickup test: vertices only, intentionally coarser than obstacle
/// collision (no edge checks)
pub fn check_powerup_collision(hull: &Hull, powerup: &Powerup) -> bool {
    let center = powerup.center();
    let radius = powerup.radius();
    hull.points.iter().any(|&p| p.distance(center) < radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PowerupKind;

    fn player_at(x: f32, y: f32) -> Player {
        Player {
            pos: Vec2::new(x, y),
            size: Vec2::new(60.0, 30.0),
            rotation: 0.0,
            velocity: 0.0,
        }
    }

    fn obstacle(kind: ObstacleKind, x: f32, y: f32) -> Obstacle {
        Obstacle {
            id: 1,
            kind,
            pos: Vec2::new(x, y),
            size: kind.base_size(),
            passed: false,
        }
    }

    /// Centers of every sub-shape of a kind's compound hitbox, as fractions
    fn sub_shape_centers(kind: ObstacleKind) -> Vec<(f32, f32)> {
        match kind {
            ObstacleKind::Ball => vec![(0.5, 0.33)],
            ObstacleKind::Plant => vec![(0.5, 0.775), (0.5, 0.3)],
            ObstacleKind::Mug => vec![(0.4, 0.55), (0.8, 0.45)],
            ObstacleKind::Monitor => vec![(0.5, 0.3), (0.5, 0.8)],
            ObstacleKind::Crate => vec![(0.5, 0.5)],
        }
    }

    #[test]
    fn test_hull_geometry_unrotated() {
        let player = player_at(90.0, 95.0);
        let hull = Hull::of_player(&player);
        // Center (120, 110), half extents 30x15, shrink 0.45
        assert!((hull.points[0] - Vec2::new(133.5, 110.0)).length() < 1e-4);
        assert!((hull.points[1] - Vec2::new(106.5, 103.25)).length() < 1e-4);
        assert!((hull.points[2] - Vec2::new(106.5, 116.75)).length() < 1e-4);
    }

    #[test]
    fn test_hull_rotation_moves_nose_down() {
        let mut player = player_at(90.0, 95.0);
        player.rotation = 45.0;
        let hull = Hull::of_player(&player);
        // Positive rotation pitches the nose below center in screen space
        assert!(hull.points[0].y > player.center().y);
    }

    #[test]
    fn test_ball_overlap() {
        // Hull nose sits well inside the ball's circle (r 22.2 around ~(130, 120))
        let player = player_at(90.0, 95.0);
        let hull = Hull::of_player(&player);
        let ball = obstacle(ObstacleKind::Ball, 100.0, 100.0);
        assert!(check_collision(&player, &hull, &ball));
    }

    #[test]
    fn test_every_kind_hits_on_trivial_overlap() {
        for kind in ObstacleKind::ALL {
            let o = obstacle(kind, 200.0, 200.0);
            for (fx, fy) in sub_shape_centers(kind) {
                let target = o.pos + o.size * Vec2::new(fx, fy);
                let player = player_at(target.x - 30.0, target.y - 15.0);
                let hull = Hull::of_player(&player);
                assert!(
                    check_collision(&player, &hull, &o),
                    "{kind:?} sub-shape at ({fx}, {fy}) should collide"
                );
            }
        }
    }

    #[test]
    fn test_every_kind_misses_when_far_away() {
        for kind in ObstacleKind::ALL {
            let o = obstacle(kind, 200.0, 200.0);
            let player = player_at(-500.0, -500.0);
            let hull = Hull::of_player(&player);
            assert!(!check_collision(&player, &hull, &o), "{kind:?} should miss");
        }
    }

    #[test]
    fn test_ball_bounding_box_precheck_rejects() {
        // Just outside the circle's box: no collision regardless of angle
        let ball = obstacle(ObstacleKind::Ball, 100.0, 100.0);
        let player = player_at(0.0, 0.0);
        let hull = Hull::of_player(&player);
        assert!(!check_collision(&player, &hull, &ball));
    }

    #[test]
    fn test_powerup_vertex_proximity_only() {
        let player = player_at(90.0, 95.0);
        let hull = Hull::of_player(&player);
        let mut powerup = Powerup {
            id: 1,
            kind: PowerupKind::DoubleScore,
            pos: Vec2::new(70.0, 90.0),
            size: Vec2::new(40.0, 40.0),
            collected: false,
        };
        // Center (90, 110): within 20 of the rear vertices
        assert!(check_powerup_collision(&hull, &powerup));
        // Center (86, 110): beyond 20 of every vertex, even though the rear
        // edge passes closer - vertices are the only test
        powerup.pos.x = 66.0;
        assert!(!check_powerup_collision(&hull, &powerup));
    }
}
