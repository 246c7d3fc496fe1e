//! Enemy patrols: melee waiters and bottle-throwing police

use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::geom::Rect;

use super::level::EnemyPost;
use super::player::Player;
use super::projectile::Projectile;
use super::GROUND_Y;

pub const ENEMY_W: f32 = 50.0;
pub const ENEMY_H: f32 = 62.0;
/// Waiters sprint at the player inside this range
const MELEE_AGGRO_RANGE: f32 = 190.0;
const MELEE_AGGRO_FACTOR: f32 = 1.75;
/// Police throw bottles inside this range
const THROW_RANGE: f32 = 430.0;
const THROW_COOLDOWN: f32 = 1.7;
const BOTTLE_SPEED: f32 = 420.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Waiter,
    Police,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub patrol_min: f32,
    pub patrol_max: f32,
    pub speed: f32,
    /// 1 walking right, -1 walking left
    pub dir: i32,
    pub throw_cooldown: f32,
}

impl Enemy {
    pub fn at_post(post: &EnemyPost) -> Self {
        Self {
            kind: post.kind,
            pos: vec2(post.x, GROUND_Y - ENEMY_H),
            patrol_min: post.patrol_min,
            patrol_max: post.patrol_max,
            speed: post.speed,
            dir: 1,
            throw_cooldown: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ENEMY_W, ENEMY_H)
    }
}

/// Advance every enemy: cooldowns, patrol/aggro movement, ranged attacks
/// and touch damage against the player.
pub fn update(enemies: &mut [Enemy], player: &mut Player, bottles: &mut Vec<Projectile>, dt: f32) {
    for enemy in enemies.iter_mut() {
        enemy.throw_cooldown = (enemy.throw_cooldown - dt).max(0.0);

        let dist = player.rect().center_x() - enemy.rect().center_x();
        let mut speed = enemy.speed;
        if enemy.kind == EnemyKind::Waiter && dist.abs() < MELEE_AGGRO_RANGE {
            enemy.dir = if dist > 0.0 { 1 } else { -1 };
            speed *= MELEE_AGGRO_FACTOR;
        }

        enemy.pos.x += enemy.dir as f32 * speed * dt;

        if enemy.pos.x <= enemy.patrol_min {
            enemy.pos.x = enemy.patrol_min;
            enemy.dir = 1;
        } else if enemy.pos.x + ENEMY_W >= enemy.patrol_max {
            enemy.pos.x = enemy.patrol_max - ENEMY_W;
            enemy.dir = -1;
        }

        if enemy.kind == EnemyKind::Police
            && dist.abs() < THROW_RANGE
            && enemy.throw_cooldown <= 0.0
        {
            enemy.throw_cooldown = THROW_COOLDOWN;
            let throw_dir = if dist > 0.0 { 1.0 } else { -1.0 };
            let body = enemy.rect();
            bottles.push(Projectile::bottle(
                vec2(body.center_x(), body.center_y() - 9.0),
                vec2(throw_dir * BOTTLE_SPEED, 0.0),
            ));
        }

        // Body contact; slightly forgiving hitbox on the player side
        if enemy.rect().overlaps(&player.rect().inflate(-10.0, -6.0)) {
            let push = if player.rect().center_x() > enemy.rect().center_x() {
                -1
            } else {
                1
            };
            player.take_hit(push);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn waiter(x: f32) -> Enemy {
        Enemy::at_post(&EnemyPost {
            kind: EnemyKind::Waiter,
            x,
            patrol_min: x - 100.0,
            patrol_max: x + 150.0,
            speed: 100.0,
        })
    }

    fn police(x: f32) -> Enemy {
        Enemy::at_post(&EnemyPost {
            kind: EnemyKind::Police,
            x,
            patrol_min: x - 100.0,
            patrol_max: x + 150.0,
            speed: 100.0,
        })
    }

    fn far_player() -> Player {
        Player::spawn(5000.0, GROUND_Y - 62.0)
    }

    #[test]
    fn test_patrol_reverses_at_bounds() {
        let mut enemies = vec![waiter(1000.0)];
        let mut player = far_player();
        let mut bottles = Vec::new();

        // Walk right until the far bound flips the direction
        for _ in 0..120 {
            update(&mut enemies, &mut player, &mut bottles, DT);
        }
        assert_eq!(enemies[0].dir, -1);
        assert!(enemies[0].pos.x + ENEMY_W <= enemies[0].patrol_max);

        for _ in 0..240 {
            update(&mut enemies, &mut player, &mut bottles, DT);
        }
        assert!(enemies[0].pos.x >= enemies[0].patrol_min);
    }

    #[test]
    fn test_waiter_charges_nearby_player() {
        let mut enemies = vec![waiter(1000.0)];
        // Player just left of the waiter, inside aggro range
        let mut player = Player::spawn(900.0, GROUND_Y - 62.0);
        let mut bottles = Vec::new();

        let x_before = enemies[0].pos.x;
        update(&mut enemies, &mut player, &mut bottles, DT);
        assert_eq!(enemies[0].dir, -1, "turned toward the player");
        let step = x_before - enemies[0].pos.x;
        let expected = 100.0 * MELEE_AGGRO_FACTOR * DT;
        assert!((step - expected).abs() < 0.01, "sprinting, not patrolling");
    }

    #[test]
    fn test_waiter_ignores_distant_player() {
        let mut enemies = vec![waiter(1000.0)];
        let mut player = far_player();
        let mut bottles = Vec::new();

        update(&mut enemies, &mut player, &mut bottles, DT);
        assert_eq!(enemies[0].dir, 1, "keeps patrolling");
        assert!(bottles.is_empty());
    }

    #[test]
    fn test_police_throws_toward_player_with_cooldown() {
        let mut enemies = vec![police(1000.0)];
        let mut player = Player::spawn(700.0, GROUND_Y - 62.0);
        let mut bottles = Vec::new();

        update(&mut enemies, &mut player, &mut bottles, DT);
        assert_eq!(bottles.len(), 1);
        assert!(bottles[0].vel.x < 0.0, "thrown at the player on the left");
        assert!(bottles[0].from_enemy);
        assert!(enemies[0].throw_cooldown > 0.0);

        // Cooldown suppresses the next frames
        update(&mut enemies, &mut player, &mut bottles, DT);
        assert_eq!(bottles.len(), 1);
    }

    #[test]
    fn test_police_holds_fire_out_of_range() {
        let mut enemies = vec![police(1000.0)];
        let mut player = far_player();
        let mut bottles = Vec::new();

        update(&mut enemies, &mut player, &mut bottles, DT);
        assert!(bottles.is_empty());
    }

    #[test]
    fn test_touch_damage() {
        let mut enemies = vec![waiter(1000.0)];
        let mut player = Player::spawn(1000.0, GROUND_Y - 62.0);
        let mut bottles = Vec::new();

        update(&mut enemies, &mut player, &mut bottles, DT);
        assert_eq!(player.lives, 2);
        assert!(player.invuln_timer > 0.0);
    }
}
