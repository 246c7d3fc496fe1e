//! Pretzel Dash: the endless obstacle runner
//!
//! The simpler sibling of the platformer. The runner holds a fixed
//! screen column while crates slide in from the right at randomized
//! gaps; one jump button, one life, one score per crate cleared. The
//! run speeds up the longer it lasts.

pub mod draw;

use rand::Rng;

use crate::geom::Rect;
use crate::input::Controls;

pub const SCREEN_W: f32 = 960.0;
pub const SCREEN_H: f32 = 540.0;
pub const GROUND_Y: f32 = 460.0;
const GRAVITY: f32 = 2300.0;
const JUMP_SPEED: f32 = -860.0;
const PLAYER_X: f32 = 140.0;
pub const PLAYER_W: f32 = 40.0;
pub const PLAYER_H: f32 = 54.0;
const BASE_SPEED: f32 = 320.0;
const MAX_SPEED: f32 = 640.0;
/// Pixels per second gained per second of survival
const SPEED_RAMP: f32 = 14.0;
/// Spawn gap range in seconds at base speed; scaled down as speed rises
const SPAWN_GAP_MIN: f32 = 0.9;
const SPAWN_GAP_MAX: f32 = 1.7;
const OBSTACLE_MIN_W: f32 = 26.0;
const OBSTACLE_MAX_W: f32 = 46.0;
const OBSTACLE_MIN_H: f32 = 30.0;
const OBSTACLE_MAX_H: f32 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Menu,
    Running,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub rect: Rect,
    /// Set once the runner has cleared it
    pub scored: bool,
}

pub struct Runner {
    pub state: RunState,
    pub player_y: f32,
    pub vel_y: f32,
    pub on_ground: bool,
    pub obstacles: Vec<Obstacle>,
    pub spawn_timer: f32,
    pub speed: f32,
    pub score: u32,
    pub best: u32,
    /// Seconds survived this run
    pub elapsed: f32,
    /// Total ground scrolled past, drives the parallax backdrop
    pub distance: f32,
}

impl Runner {
    pub fn new(best: u32) -> Self {
        Self {
            state: RunState::Menu,
            player_y: GROUND_Y - PLAYER_H,
            vel_y: 0.0,
            on_ground: true,
            obstacles: Vec::new(),
            spawn_timer: SPAWN_GAP_MAX,
            speed: BASE_SPEED,
            score: 0,
            best,
            elapsed: 0.0,
            distance: 0.0,
        }
    }

    pub fn player_rect(&self) -> Rect {
        Rect::new(PLAYER_X, self.player_y, PLAYER_W, PLAYER_H)
    }

    fn reset(&mut self) {
        self.player_y = GROUND_Y - PLAYER_H;
        self.vel_y = 0.0;
        self.on_ground = true;
        self.obstacles.clear();
        self.spawn_timer = SPAWN_GAP_MAX;
        self.speed = BASE_SPEED;
        self.score = 0;
        self.elapsed = 0.0;
        self.distance = 0.0;
    }

    /// Advance the run by one frame.
    pub fn update(&mut self, dt: f32, controls: &Controls, rng: &mut impl Rng) {
        if self.state != RunState::Running {
            if controls.start_pressed() {
                self.reset();
                self.state = RunState::Running;
            }
            return;
        }

        self.elapsed += dt;
        self.speed = (BASE_SPEED + SPEED_RAMP * self.elapsed).min(MAX_SPEED);
        self.distance += self.speed * dt;

        if controls.jump_pressed && self.on_ground {
            self.vel_y = JUMP_SPEED;
            self.on_ground = false;
        }
        self.vel_y += GRAVITY * dt;
        self.player_y += self.vel_y * dt;
        if self.player_y >= GROUND_Y - PLAYER_H {
            self.player_y = GROUND_Y - PLAYER_H;
            self.vel_y = 0.0;
            self.on_ground = true;
        }

        self.spawn_timer -= dt;
        if self.spawn_timer <= 0.0 {
            self.spawn(rng);
        }

        let player = self.player_rect();
        for obstacle in self.obstacles.iter_mut() {
            obstacle.rect.x -= self.speed * dt;
            if !obstacle.scored && obstacle.rect.right() < player.x {
                obstacle.scored = true;
                self.score += 1;
            }
        }
        self.obstacles.retain(|o| o.rect.right() > -40.0);

        // One clip ends the run; hitbox slightly forgiving
        let hitbox = player.inflate(-8.0, -4.0);
        if self.obstacles.iter().any(|o| o.rect.overlaps(&hitbox)) {
            self.state = RunState::GameOver;
            self.best = self.best.max(self.score);
        }
    }

    /// Drop one crate just off the right edge and rearm the timer.
    /// Gaps shrink in proportion to the current speed so the spacing in
    /// pixels stays fair.
    fn spawn(&mut self, rng: &mut impl Rng) {
        let w = rng.gen_range(OBSTACLE_MIN_W..=OBSTACLE_MAX_W);
        let h = rng.gen_range(OBSTACLE_MIN_H..=OBSTACLE_MAX_H);
        self.obstacles.push(Obstacle {
            rect: Rect::new(SCREEN_W + 40.0, GROUND_Y - h, w, h),
            scored: false,
        });
        self.spawn_timer = rng.gen_range(SPAWN_GAP_MIN..=SPAWN_GAP_MAX) * (BASE_SPEED / self.speed);
    }
}
