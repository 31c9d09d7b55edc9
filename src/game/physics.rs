//! Arcade Physics
//!
//! Axis-aligned boxes with velocity, gravity and restitution. This is the
//! classic "arcade" model: no rotation, no mass ratios beyond immovable vs
//! movable, and separation along the axis of least penetration.
//!
//! Each frame the runtime calls `step` on every body, then resolves
//! contacts against the world bounds, static platforms, and the player.

use macroquad::math::{Rect, Vec2};

/// Which sides of a body were blocked during the last step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touching {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Touching {
    #[cfg(test)]
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Static ground pieces a body can land on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformMask {
    pub meadow: bool,
    pub volcano: bool,
}

impl PlatformMask {
    pub const NONE: PlatformMask = PlatformMask { meadow: false, volcano: false };
    pub const MEADOW: PlatformMask = PlatformMask { meadow: true, volcano: false };
    pub const VOLCANO: PlatformMask = PlatformMask { meadow: false, volcano: true };
    pub const BOTH: PlatformMask = PlatformMask { meadow: true, volcano: true };
}

/// A physics body. `position` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    /// Fraction of velocity kept after hitting something (0 = dead stop, 1 = perfect bounce)
    pub bounce: f32,
    pub allow_gravity: bool,
    /// Immovable bodies never get pushed by other bodies
    pub immovable: bool,
    pub collide_world_bounds: bool,
    pub platforms: PlatformMask,
    pub touching: Touching,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            bounce: 0.0,
            allow_gravity: true,
            immovable: false,
            collide_world_bounds: false,
            platforms: PlatformMask::NONE,
            touching: Touching::default(),
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_bounce(mut self, bounce: f32) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn without_gravity(mut self) -> Self {
        self.allow_gravity = false;
        self
    }

    pub fn immovable(mut self) -> Self {
        self.immovable = true;
        self
    }

    pub fn collide_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }

    pub fn on_platforms(mut self, platforms: PlatformMask) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }
}

/// Apply gravity and integrate velocity. Clears touching flags.
pub fn step(body: &mut Body, gravity: f32, dt: f32) {
    body.touching = Touching::default();
    if body.immovable {
        return;
    }
    if body.allow_gravity {
        body.velocity.y += gravity * dt;
    }
    body.position += body.velocity * dt;
}

/// Keep a body inside `bounds`, bouncing off the edges
pub fn collide_bounds(body: &mut Body, bounds: Rect) {
    if body.position.x < bounds.x {
        body.position.x = bounds.x;
        body.velocity.x = -body.velocity.x * body.bounce;
        body.touching.left = true;
    } else if body.right() > bounds.right() {
        body.position.x = bounds.right() - body.size.x;
        body.velocity.x = -body.velocity.x * body.bounce;
        body.touching.right = true;
    }

    if body.position.y < bounds.y {
        body.position.y = bounds.y;
        body.velocity.y = -body.velocity.y * body.bounce;
        body.touching.up = true;
    } else if body.bottom() > bounds.bottom() {
        body.position.y = bounds.bottom() - body.size.y;
        body.velocity.y = -body.velocity.y * body.bounce;
        body.touching.down = true;
    }
}

/// How far `a` has sunk into `b`, and from which side.
/// Edges that merely touch still count, so a body resting on a platform
/// keeps reporting `touching.down`.
#[derive(Debug, Clone, Copy)]
struct Penetration {
    /// Distance to push `a` left (positive) or right (negative)
    x: f32,
    /// Distance to push `a` up (positive) or down (negative)
    y: f32,
    /// `a` is left of `b` (pushed left)
    from_left: bool,
    /// `a` is above `b` (pushed up)
    from_above: bool,
}

impl Penetration {
    /// Resolve vertically when that is the shorter way out
    fn vertical(&self) -> bool {
        self.y.abs() <= self.x.abs()
    }
}

fn penetration(a: Rect, b: Rect) -> Option<Penetration> {
    if !a.overlaps(&b) {
        return None;
    }
    let push_left = a.right() - b.x;
    let push_right = b.right() - a.x;
    let push_up = a.bottom() - b.y;
    let push_down = b.bottom() - a.y;

    let from_left = push_left <= push_right;
    let from_above = push_up <= push_down;
    Some(Penetration {
        x: if from_left { push_left } else { -push_right },
        y: if from_above { push_up } else { -push_down },
        from_left,
        from_above,
    })
}

/// Resolve a movable body against a static solid.
/// Returns true if the two were in contact.
pub fn collide_static(body: &mut Body, solid: Rect) -> bool {
    if body.immovable {
        return false;
    }
    let Some(pen) = penetration(body.rect(), solid) else {
        return false;
    };

    if pen.vertical() {
        body.position.y -= pen.y;
        if pen.from_above {
            body.touching.down = true;
            if body.velocity.y > 0.0 {
                body.velocity.y = -body.velocity.y * body.bounce;
            }
        } else {
            body.touching.up = true;
            if body.velocity.y < 0.0 {
                body.velocity.y = -body.velocity.y * body.bounce;
            }
        }
    } else {
        body.position.x -= pen.x;
        if pen.from_left {
            body.touching.right = true;
            if body.velocity.x > 0.0 {
                body.velocity.x = -body.velocity.x * body.bounce;
            }
        } else {
            body.touching.left = true;
            if body.velocity.x < 0.0 {
                body.velocity.x = -body.velocity.x * body.bounce;
            }
        }
    }
    true
}

/// Separate two colliding bodies. An immovable body never yields; two
/// movable bodies share the overlap equally. Returns true on contact.
pub fn separate(a: &mut Body, b: &mut Body) -> bool {
    let Some(pen) = penetration(a.rect(), b.rect()) else {
        return false;
    };
    if a.immovable && b.immovable {
        return true;
    }
    if b.immovable {
        collide_static(a, b.rect());
        return true;
    }
    if a.immovable {
        collide_static(b, a.rect());
        return true;
    }

    if pen.vertical() {
        let half = pen.y * 0.5;
        a.position.y -= half;
        b.position.y += half;
        a.touching.down |= pen.from_above;
        a.touching.up |= !pen.from_above;
        b.touching.up |= pen.from_above;
        b.touching.down |= !pen.from_above;
        let (va, vb) = (a.velocity.y, b.velocity.y);
        a.velocity.y = vb * a.bounce;
        b.velocity.y = va * b.bounce;
    } else {
        let half = pen.x * 0.5;
        a.position.x -= half;
        b.position.x += half;
        a.touching.right |= pen.from_left;
        a.touching.left |= !pen.from_left;
        b.touching.left |= pen.from_left;
        b.touching.right |= !pen.from_left;
        let (va, vb) = (a.velocity.x, b.velocity.x);
        a.velocity.x = vb * a.bounce;
        b.velocity.x = va * b.bounce;
    }
    true
}

/// Plain AABB test, for pairs that trigger without separating
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.rect().overlaps(&b.rect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn ground() -> Rect {
        Rect::new(0.0, 500.0, 1000.0, 100.0)
    }

    #[test]
    fn test_gravity_accelerates_falling_body() {
        let mut body = Body::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        step(&mut body, 300.0, DT);
        step(&mut body, 300.0, DT);
        assert!((body.velocity.y - 10.0).abs() < 1e-3);
        assert!(body.position.y > 0.0);
    }

    #[test]
    fn test_no_gravity_keeps_velocity() {
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(10.0))
            .without_gravity()
            .with_velocity(Vec2::new(60.0, 0.0));
        step(&mut body, 300.0, DT);
        assert_eq!(body.velocity, Vec2::new(60.0, 0.0));
        assert!((body.position.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_immovable_body_does_not_move() {
        let mut fire = Body::new(Vec2::new(5.0, 5.0), Vec2::splat(10.0))
            .immovable()
            .with_velocity(Vec2::new(100.0, 100.0));
        step(&mut fire, 300.0, DT);
        assert_eq!(fire.position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_landing_on_platform_sets_touching_down() {
        let mut body = Body::new(Vec2::new(100.0, 495.0), Vec2::new(20.0, 20.0))
            .with_velocity(Vec2::new(0.0, 120.0));
        assert!(collide_static(&mut body, ground()));
        assert_eq!(body.bottom(), 500.0);
        assert!(body.touching.down);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_bounce_reflects_velocity() {
        let mut bomb = Body::new(Vec2::new(100.0, 495.0), Vec2::new(20.0, 20.0))
            .with_bounce(1.0)
            .with_velocity(Vec2::new(30.0, 120.0));
        collide_static(&mut bomb, ground());
        assert_eq!(bomb.velocity, Vec2::new(30.0, -120.0));
    }

    #[test]
    fn test_side_hit_pushes_horizontally() {
        let wall = Rect::new(100.0, 0.0, 50.0, 500.0);
        let mut body = Body::new(Vec2::new(85.0, 200.0), Vec2::new(20.0, 40.0))
            .with_velocity(Vec2::new(50.0, 0.0));
        collide_static(&mut body, wall);
        assert_eq!(body.right(), 100.0);
        assert!(body.touching.right);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_world_bounds_clamp_and_bounce() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut star = Body::new(Vec2::new(790.0, -5.0), Vec2::splat(20.0))
            .with_bounce(1.0)
            .with_velocity(Vec2::new(40.0, -40.0));
        collide_bounds(&mut star, bounds);
        assert_eq!(star.position, Vec2::new(780.0, 0.0));
        assert_eq!(star.velocity, Vec2::new(-40.0, 40.0));
        assert!(star.touching.right && star.touching.up);
    }

    #[test]
    fn test_resting_on_bounds_bottom_is_grounded() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut body = Body::new(Vec2::new(0.0, 590.0), Vec2::splat(20.0))
            .with_velocity(Vec2::new(0.0, 10.0));
        collide_bounds(&mut body, bounds);
        assert!(body.touching.down);
        assert_eq!(body.bottom(), 600.0);
    }

    #[test]
    fn test_separate_movable_from_immovable() {
        let mut player = Body::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0))
            .with_velocity(Vec2::new(100.0, 0.0));
        let mut fire = Body::new(Vec2::new(15.0, 0.0), Vec2::new(20.0, 20.0)).immovable();
        assert!(separate(&mut player, &mut fire));
        assert_eq!(fire.position, Vec2::new(15.0, 0.0));
        assert_eq!(player.right(), 15.0);
    }

    #[test]
    fn test_separate_two_movable_bodies_share_overlap() {
        let mut a = Body::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let mut b = Body::new(Vec2::new(10.0, 2.0), Vec2::new(20.0, 20.0));
        assert!(separate(&mut a, &mut b));
        assert_eq!(a.position.x, -5.0);
        assert_eq!(b.position.x, 15.0);
        assert_eq!(a.right(), b.position.x);
    }

    #[test]
    fn test_no_contact_when_apart() {
        let mut a = Body::new(Vec2::ZERO, Vec2::splat(10.0));
        let mut b = Body::new(Vec2::new(50.0, 50.0), Vec2::splat(10.0));
        assert!(!separate(&mut a, &mut b));
        assert!(!overlaps(&a, &b));
        assert!(!a.touching.any());
    }
}
