//! The player: input drive, jump physics and per-axis collision

use macroquad::math::{vec2, Vec2};

use crate::geom::Rect;

use super::projectile::Projectile;
use super::{GRAVITY, WORLD_W};

pub const PLAYER_W: f32 = 46.0;
pub const PLAYER_H: f32 = 62.0;
const RUN_SPEED: f32 = 340.0;
const JUMP_SPEED: f32 = -960.0;
const MUG_SPEED: f32 = 680.0;
const SHOOT_COOLDOWN: f32 = 0.35;
/// Grace period after a hit
const HIT_INVULN: f32 = 1.2;
const START_LIVES: i32 = 3;

pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1 facing right, -1 facing left
    pub facing: i32,
    pub on_ground: bool,
    pub lives: i32,
    pub invuln_timer: f32,
    pub shoot_cooldown: f32,
}

impl Player {
    pub fn spawn(x: f32, y: f32) -> Self {
        Self {
            pos: vec2(x, y),
            vel: Vec2::ZERO,
            facing: 1,
            on_ground: false,
            lives: START_LIVES,
            invuln_timer: 0.0,
            shoot_cooldown: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_W, PLAYER_H)
    }

    /// Drive, jump, fall and resolve against the solids.
    pub fn update(&mut self, dt: f32, solids: &[Rect], move_x: f32, jump_pressed: bool) {
        self.shoot_cooldown = (self.shoot_cooldown - dt).max(0.0);
        self.invuln_timer = (self.invuln_timer - dt).max(0.0);

        self.vel.x = move_x * RUN_SPEED;
        if move_x < -0.1 {
            self.facing = -1;
        } else if move_x > 0.1 {
            self.facing = 1;
        }

        if jump_pressed && self.on_ground {
            self.vel.y = JUMP_SPEED;
            self.on_ground = false;
        }

        self.vel.y += GRAVITY * dt;
        self.move_and_collide(dt, solids);
    }

    /// Integrate one axis at a time, snapping to the nearest free edge of
    /// any solid hit and zeroing that axis of the velocity.
    fn move_and_collide(&mut self, dt: f32, solids: &[Rect]) {
        self.pos.x += self.vel.x * dt;
        for solid in solids {
            if !self.rect().overlaps(solid) {
                continue;
            }
            if self.vel.x > 0.0 {
                self.pos.x = solid.x - PLAYER_W;
                self.vel.x = 0.0;
            } else if self.vel.x < 0.0 {
                self.pos.x = solid.right();
                self.vel.x = 0.0;
            }
        }

        self.pos.y += self.vel.y * dt;
        self.on_ground = false;
        for solid in solids {
            if !self.rect().overlaps(solid) {
                continue;
            }
            if self.vel.y > 0.0 {
                self.pos.y = solid.y - PLAYER_H;
                self.on_ground = true;
                self.vel.y = 0.0;
            } else if self.vel.y < 0.0 {
                self.pos.y = solid.bottom();
                self.vel.y = 0.0;
            }
        }

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x + PLAYER_W > WORLD_W {
            self.pos.x = WORLD_W - PLAYER_W;
        }
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_cooldown <= 0.0
    }

    /// Hurl a mug ahead of the player and start the cooldown.
    pub fn throw_mug(&mut self) -> Projectile {
        self.shoot_cooldown = SHOOT_COOLDOWN;
        let body = self.rect();
        Projectile::mug(
            vec2(
                body.center_x() + self.facing as f32 * 22.0,
                body.center_y() - 8.0,
            ),
            vec2(self.facing as f32 * MUG_SPEED, -120.0),
        )
    }

    /// Lose a life and get knocked back, unless still invulnerable.
    pub fn take_hit(&mut self, direction: i32) {
        if self.invuln_timer > 0.0 {
            return;
        }
        self.lives -= 1;
        self.invuln_timer = HIT_INVULN;
        self.vel = vec2(260.0 * direction as f32, -480.0);
    }
}
