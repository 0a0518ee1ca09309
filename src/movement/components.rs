//! Movement domain: canvas-space components shared by the hero and enemies.

use bevy::prelude::*;

/// Marker for the player-controlled hero.
#[derive(Component, Debug)]
pub struct Player;

/// Logical position on the 800x600 canvas: origin top-left, y grows downward.
/// Rendering maps this to world space once per frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Horizontal facing. Also selects mirrored frames for rendering.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn toward(dx: f32) -> Self {
        if dx < 0.0 { Facing::Left } else { Facing::Right }
    }
}

/// Collision box size, centered on the entity's position.
#[derive(Component, Debug, Clone, Copy)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}

/// Collision rectangle centered on `position`.
pub fn body_rect(position: Position, bounds: Bounds) -> Rect {
    Rect::from_center_size(
        Vec2::new(position.x, position.y),
        Vec2::new(bounds.width, bounds.height),
    )
}

/// Strict overlap test: rectangles sharing only an edge do not collide.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}

/// Per-tick vertical kinematics against a fixed ground baseline.
#[derive(Component, Debug, Clone)]
pub struct VerticalMotion {
    pub vel_y: f32,
    pub on_ground: bool,
    /// Canvas y at which falling stops for this entity.
    pub ground_y: f32,
}

impl VerticalMotion {
    pub fn new(ground_y: f32) -> Self {
        Self {
            vel_y: 0.0,
            on_ground: false,
            ground_y,
        }
    }

    /// One gravity step: accelerate downward by a fixed per-tick increment,
    /// advance, and clamp at the ground baseline.
    pub fn apply_gravity(&mut self, y: &mut f32, gravity: f32) {
        self.vel_y += gravity;
        *y += self.vel_y;
        if *y >= self.ground_y {
            *y = self.ground_y;
            self.vel_y = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }
    }
}
