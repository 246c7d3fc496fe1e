//! Bavarian Mug Run: the festival platformer
//!
//! One long side-scrolling level. Run right, collect beer and pretzels,
//! throw mugs at waiters and police, and reach the festival gate with
//! enough beer to be let in. All simulation state lives in flat lists on
//! `Game`; each frame advances the player, the projectiles and the
//! enemies in turn, then checks the goal and the loss conditions.

pub mod draw;
pub mod enemy;
pub mod level;
pub mod player;
pub mod projectile;

use rand::Rng;

use crate::geom::Rect;
use crate::input::Controls;
use enemy::Enemy;
use level::{Collectible, CollectibleKind, LevelDef};
use player::Player;
use projectile::Projectile;

pub const SCREEN_W: f32 = 960.0;
pub const SCREEN_H: f32 = 540.0;
pub const WORLD_W: f32 = 6000.0;
pub const GROUND_Y: f32 = 460.0;
pub const GRAVITY: f32 = 2300.0;

/// How far ahead of the screen center the camera leads the player
const CAMERA_LEAD: f32 = 0.42;
/// Gate trigger distance from the right edge of the world
const GATE_OFFSET: f32 = 50.0;
/// Below this the player has fallen out of the world
const FALL_LIMIT: f32 = SCREEN_H + 120.0;
const INTRO_MESSAGE: &str = "Collect beer and pretzels. Reach the festival gate!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Running,
    GameOver,
    Win,
}

pub struct Game {
    pub state: GameState,
    pub level: LevelDef,
    pub solids: Vec<Rect>,
    pub collectibles: Vec<Collectible>,
    pub enemies: Vec<Enemy>,
    pub player: Player,
    pub mugs: Vec<Projectile>,
    pub bottles: Vec<Projectile>,
    pub score: u32,
    pub beers: u32,
    pub pretzels: u32,
    pub camera_x: f32,
    pub message: String,
    pub message_timer: f32,
    /// Wall-clock seconds since launch, drives bob and blink animation
    pub clock: f32,
}

impl Game {
    pub fn new(rng: &mut impl Rng) -> Self {
        let level = LevelDef::load();
        let solids = level.build_solids();
        let collectibles = level::seed_collectibles(&solids, rng);
        let enemies = level.build_enemies();
        Self {
            state: GameState::Menu,
            solids,
            collectibles,
            enemies,
            player: Player::spawn(80.0, GROUND_Y - player::PLAYER_H),
            mugs: Vec::new(),
            bottles: Vec::new(),
            score: 0,
            beers: 0,
            pretzels: 0,
            camera_x: 0.0,
            message: INTRO_MESSAGE.to_string(),
            message_timer: 6.0,
            clock: 0.0,
            level,
        }
    }

    /// Rebuild the world for a fresh run.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.solids = self.level.build_solids();
        self.collectibles = level::seed_collectibles(&self.solids, rng);
        self.enemies = self.level.build_enemies();
        self.player = Player::spawn(80.0, GROUND_Y - player::PLAYER_H);
        self.mugs.clear();
        self.bottles.clear();
        self.score = 0;
        self.beers = 0;
        self.pretzels = 0;
        self.camera_x = 0.0;
        self.message = INTRO_MESSAGE.to_string();
        self.message_timer = 6.0;
    }

    /// Advance the simulation by one frame.
    pub fn update(&mut self, dt: f32, controls: &Controls, rng: &mut impl Rng) {
        self.clock += dt;
        self.message_timer = (self.message_timer - dt).max(0.0);

        if self.state != GameState::Running {
            if controls.start_pressed() {
                self.reset(rng);
                self.state = GameState::Running;
            }
            return;
        }

        if controls.shoot_pressed && self.player.can_shoot() {
            self.mugs.push(self.player.throw_mug());
        }

        self.player
            .update(dt, &self.solids, controls.move_x, controls.jump_pressed);

        self.pick_up_collectibles();
        self.score += projectile::update(
            &mut self.mugs,
            &mut self.bottles,
            &mut self.enemies,
            &mut self.player,
            dt,
        );
        enemy::update(&mut self.enemies, &mut self.player, &mut self.bottles, dt);
        self.check_goal();
        self.update_camera(dt);

        // Falling off the world costs a hit and a respawn further back
        if self.player.pos.y > FALL_LIMIT {
            self.player.take_hit(-1);
            self.player.pos.x = (self.player.pos.x - 120.0).max(40.0);
            self.player.pos.y = GROUND_Y - player::PLAYER_H;
        }

        if self.player.lives <= 0 {
            self.state = GameState::GameOver;
        }
    }

    fn pick_up_collectibles(&mut self) {
        let player_rect = self.player.rect();
        for item in self.collectibles.iter_mut().filter(|item| !item.taken) {
            if player_rect.overlaps(&item.rect) {
                item.taken = true;
                self.score += item.value;
                match item.kind {
                    CollectibleKind::Beer => self.beers += 1,
                    CollectibleKind::Pretzel => self.pretzels += 1,
                }
            }
        }
    }

    fn check_goal(&mut self) {
        if self.player.rect().right() < WORLD_W - GATE_OFFSET {
            return;
        }
        if self.beers >= self.level.goal_beers {
            self.state = GameState::Win;
        } else {
            let missing = self.level.goal_beers - self.beers;
            self.message = format!("You need {missing} more beer(s) to enter Oktoberfest!");
            self.message_timer = 2.3;
            self.player.pos.x = WORLD_W - GATE_OFFSET - 4.0 - player::PLAYER_W;
        }
    }

    fn update_camera(&mut self, dt: f32) {
        let target =
            (self.player.rect().center_x() - SCREEN_W * CAMERA_LEAD).clamp(0.0, WORLD_W - SCREEN_W);
        self.camera_x += (target - self.camera_x) * (dt * 8.0).min(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn controls(move_x: f32, jump: bool, shoot: bool) -> Controls {
        Controls {
            move_x,
            jump_pressed: jump,
            shoot_pressed: shoot,
        }
    }

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_starts_in_menu_and_jump_starts_run() {
        let mut rng = rng();
        let mut game = Game::new(&mut rng);
        assert_eq!(game.state, GameState::Menu);

        game.update(DT, &controls(0.0, true, false), &mut rng);
        assert_eq!(game.state, GameState::Running);
        assert_eq!(game.player.lives, 3);
    }

    #[test]
    fn test_menu_without_press_stays_menu() {
        let mut rng = rng();
        let mut game = Game::new(&mut rng);
        game.update(DT, &controls(1.0, false, false), &mut rng);
        assert_eq!(game.state, GameState::Menu);
    }

    #[test]
    fn test_collectible_scored_exactly_once() {
        let mut rng = rng();
        let mut game = Game::new(&mut rng);
        game.state = GameState::Running;
        game.collectibles = vec![Collectible::new(
            CollectibleKind::Beer,
            game.player.pos.x,
            game.player.pos.y,
            0.0,
        )];

        game.update(DT, &controls(0.0, false, false), &mut rng);
        assert!(game.collectibles[0].taken);
        assert_eq!(game.beers, 1);
        assert_eq!(game.score, 30);

        game.update(DT, &controls(0.0, false, false), &mut rng);
        assert_eq!(game.beers, 1);
        assert_eq!(game.score, 30);
        assert_eq!(game.collectibles.len(), 1, "taken items stay in the list");
    }

    #[test]
    fn test_gate_rejects_without_enough_beer() {
        let mut rng = rng();
        let mut game = Game::new(&mut rng);
        game.state = GameState::Running;
        game.player.pos.x = WORLD_W - 60.0;
        game.collectibles.clear();
        game.enemies.clear();

        game.update(DT, &controls(1.0, false, false), &mut rng);
        assert_eq!(game.state, GameState::Running);
        assert!(game.message.contains("more beer"));
        assert!(game.player.rect().right() < WORLD_W - GATE_OFFSET);
    }

    #[test]
    fn test_gate_wins_with_enough_beer() {
        let mut rng = rng();
        let mut game = Game::new(&mut rng);
        game.state = GameState::Running;
        game.player.pos.x = WORLD_W - 60.0;
        game.beers = game.level.goal_beers;
        game.collectibles.clear();
        game.enemies.clear();

        game.update(DT, &controls(1.0, false, false), &mut rng);
        assert_eq!(game.state, GameState::Win);
    }

    #[test]
    fn test_no_lives_means_game_over() {
        let mut rng = rng();
        let mut game = Game::new(&mut rng);
        game.state = GameState::Running;
        game.player.lives = 0;
        game.update(DT, &controls(0.0, false, false), &mut rng);
        assert_eq!(game.state, GameState::GameOver);
    }

    #[test]
    fn test_falling_out_costs_a_hit_and_respawns() {
        let mut rng = rng();
        let mut game = Game::new(&mut rng);
        game.state = GameState::Running;
        game.enemies.clear();
        game.player.pos.y = FALL_LIMIT + 50.0;
        let x_before = game.player.pos.x;

        game.update(DT, &controls(0.0, false, false), &mut rng);
        assert_eq!(game.player.lives, 2);
        assert_eq!(game.player.pos.y, GROUND_Y - player::PLAYER_H);
        assert!(game.player.pos.x <= x_before);
    }

    #[test]
    fn test_shoot_spawns_one_mug_per_cooldown() {
        let mut rng = rng();
        let mut game = Game::new(&mut rng);
        game.state = GameState::Running;
        game.enemies.clear();

        game.update(DT, &controls(0.0, false, true), &mut rng);
        assert_eq!(game.mugs.len(), 1);

        // Cooldown still running: a second press does nothing
        game.update(DT, &controls(0.0, false, true), &mut rng);
        assert_eq!(game.mugs.len(), 1);
    }

    #[test]
    fn test_restart_from_game_over_resets_world() {
        let mut rng = rng();
        let mut game = Game::new(&mut rng);
        game.state = GameState::GameOver;
        game.score = 900;
        game.beers = 5;

        game.update(DT, &controls(0.0, true, false), &mut rng);
        assert_eq!(game.state, GameState::Running);
        assert_eq!(game.score, 0);
        assert_eq!(game.beers, 0);
        assert_eq!(game.player.lives, 3);
        assert!(game.mugs.is_empty());
    }

    #[test]
    fn test_camera_follows_and_clamps() {
        let mut rng = rng();
        let mut game = Game::new(&mut rng);
        game.state = GameState::Running;
        game.enemies.clear();
        game.player.pos.x = 3000.0;
        for _ in 0..240 {
            game.update(DT, &controls(0.0, false, false), &mut rng);
        }
        let expected = game.player.rect().center_x() - SCREEN_W * CAMERA_LEAD;
        assert!((game.camera_x - expected).abs() < 2.0);

        game.player.pos.x = 0.0;
        for _ in 0..240 {
            game.update(DT, &controls(0.0, false, false), &mut rng);
        }
        assert!(game.camera_x >= 0.0);
        assert!(game.camera_x < 1.0);
    }
}
