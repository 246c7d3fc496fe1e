//! Thrown things: player mugs and police bottles

use macroquad::math::Vec2;

use crate::geom::Rect;

use super::enemy::Enemy;
use super::player::Player;
use super::{GRAVITY, GROUND_Y, WORLD_W};

pub const MUG_SIZE: f32 = 22.0;
pub const BOTTLE_SIZE: f32 = 14.0;
/// Mugs arc; bottles fly flat
const MUG_GRAVITY_FACTOR: f32 = 0.45;
const ENEMY_BOUNTY: u32 = 60;

#[derive(Debug, Clone)]
pub struct Projectile {
    pub rect: Rect,
    pub vel: Vec2,
    pub from_enemy: bool,
}

impl Projectile {
    pub fn mug(center: Vec2, vel: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center.x, center.y, MUG_SIZE, MUG_SIZE),
            vel,
            from_enemy: false,
        }
    }

    pub fn bottle(center: Vec2, vel: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center.x, center.y, BOTTLE_SIZE, BOTTLE_SIZE),
            vel,
            from_enemy: true,
        }
    }
}

/// Integrate both projectile lists, cull anything out of bounds, then
/// apply mug→enemy and bottle→player impacts. Returns the score gained.
pub fn update(
    mugs: &mut Vec<Projectile>,
    bottles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
    player: &mut Player,
    dt: f32,
) -> u32 {
    for mug in mugs.iter_mut() {
        mug.vel.y += GRAVITY * MUG_GRAVITY_FACTOR * dt;
        mug.rect.x += mug.vel.x * dt;
        mug.rect.y += mug.vel.y * dt;
    }
    for bottle in bottles.iter_mut() {
        bottle.rect.x += bottle.vel.x * dt;
        bottle.rect.y += bottle.vel.y * dt;
    }

    // Mugs also die on the ground, bottles only off the world edges
    mugs.retain(|mug| {
        mug.rect.right() > 0.0 && mug.rect.right() < WORLD_W && mug.rect.bottom() < GROUND_Y + 10.0
    });
    bottles.retain(|bottle| bottle.rect.right() > 0.0 && bottle.rect.right() < WORLD_W);

    let mut score = 0;
    enemies.retain(|enemy| {
        if let Some(hit) = mugs.iter().position(|mug| enemy.rect().overlaps(&mug.rect)) {
            mugs.remove(hit);
            score += ENEMY_BOUNTY;
            false
        } else {
            true
        }
    });

    bottles.retain(|bottle| {
        if player.rect().overlaps(&bottle.rect) {
            let push = if bottle.vel.x > 0.0 { -1 } else { 1 };
            player.take_hit(push);
            false
        } else {
            true
        }
    });

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platformer::enemy::{EnemyKind, ENEMY_H};
    use crate::platformer::level::EnemyPost;
    use macroquad::math::vec2;

    const DT: f32 = 1.0 / 60.0;

    fn enemy_at(x: f32) -> Enemy {
        Enemy::at_post(&EnemyPost {
            kind: EnemyKind::Waiter,
            x,
            patrol_min: x - 50.0,
            patrol_max: x + 50.0,
            speed: 0.0,
        })
    }

    fn player_at(x: f32) -> Player {
        Player::spawn(x, GROUND_Y - 62.0)
    }

    #[test]
    fn test_mug_arcs_under_reduced_gravity() {
        let mut mugs = vec![Projectile::mug(vec2(500.0, 300.0), vec2(680.0, -120.0))];
        let mut bottles = Vec::new();
        let mut enemies = Vec::new();
        let mut player = player_at(100.0);

        update(&mut mugs, &mut bottles, &mut enemies, &mut player, DT);
        let expected_vy = -120.0 + GRAVITY * MUG_GRAVITY_FACTOR * DT;
        assert!((mugs[0].vel.y - expected_vy).abs() < 0.01);
        assert!(mugs[0].rect.x > 500.0);
    }

    #[test]
    fn test_bottle_flies_flat() {
        let mut mugs = Vec::new();
        let mut bottles = vec![Projectile::bottle(vec2(500.0, 400.0), vec2(-420.0, 0.0))];
        let mut enemies = Vec::new();
        let mut player = player_at(4000.0);

        let y_before = bottles[0].rect.y;
        update(&mut mugs, &mut bottles, &mut enemies, &mut player, DT);
        assert_eq!(bottles[0].rect.y, y_before);
        assert!(bottles[0].rect.x < 500.0 - BOTTLE_SIZE * 0.5);
    }

    #[test]
    fn test_mug_culled_at_ground() {
        let mut mugs = vec![Projectile::mug(
            vec2(500.0, GROUND_Y + 20.0),
            vec2(0.0, 100.0),
        )];
        let mut bottles = Vec::new();
        let mut enemies = Vec::new();
        let mut player = player_at(100.0);

        update(&mut mugs, &mut bottles, &mut enemies, &mut player, DT);
        assert!(mugs.is_empty());
    }

    #[test]
    fn test_projectiles_culled_off_world() {
        let mut mugs = vec![Projectile::mug(vec2(WORLD_W - 2.0, 300.0), vec2(680.0, 0.0))];
        let mut bottles = vec![Projectile::bottle(vec2(0.0, 300.0), vec2(-420.0, 0.0))];
        let mut enemies = Vec::new();
        let mut player = player_at(100.0);

        update(&mut mugs, &mut bottles, &mut enemies, &mut player, DT);
        assert!(mugs.is_empty());
        assert!(bottles.is_empty());
    }

    #[test]
    fn test_mug_fells_enemy_for_bounty() {
        let mut enemies = vec![enemy_at(800.0)];
        let mut mugs = vec![Projectile::mug(
            vec2(810.0, GROUND_Y - ENEMY_H * 0.5),
            vec2(0.0, 0.0),
        )];
        let mut bottles = Vec::new();
        let mut player = player_at(100.0);

        let score = update(&mut mugs, &mut bottles, &mut enemies, &mut player, DT);
        assert_eq!(score, 60);
        assert!(enemies.is_empty());
        assert!(mugs.is_empty(), "the mug is spent");
    }

    #[test]
    fn test_one_mug_takes_one_enemy() {
        let mut enemies = vec![enemy_at(800.0), enemy_at(806.0)];
        let mut mugs = vec![Projectile::mug(
            vec2(810.0, GROUND_Y - ENEMY_H * 0.5),
            vec2(0.0, 0.0),
        )];
        let mut bottles = Vec::new();
        let mut player = player_at(100.0);

        let score = update(&mut mugs, &mut bottles, &mut enemies, &mut player, DT);
        assert_eq!(score, 60);
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn test_bottle_hits_player_and_is_spent() {
        let mut player = player_at(600.0);
        let mut bottles = vec![Projectile::bottle(
            vec2(
                player.rect().center_x() + 10.0,
                player.rect().center_y(),
            ),
            vec2(420.0, 0.0),
        )];
        let mut mugs = Vec::new();
        let mut enemies = Vec::new();

        update(&mut mugs, &mut bottles, &mut enemies, &mut player, DT);
        assert!(bottles.is_empty());
        assert_eq!(player.lives, 2);
        assert!(player.vel.x < 0.0, "knocked away from the throw direction");
    }

    #[test]
    fn test_bottle_spent_even_on_invulnerable_player() {
        let mut player = player_at(600.0);
        player.invuln_timer = 1.0;
        let mut bottles = vec![Projectile::bottle(
            vec2(player.rect().center_x(), player.rect().center_y()),
            vec2(420.0, 0.0),
        )];
        let mut mugs = Vec::new();
        let mut enemies = Vec::new();

        update(&mut mugs, &mut bottles, &mut enemies, &mut player, DT);
        assert!(bottles.is_empty());
        assert_eq!(player.lives, 3, "no life lost during invulnerability");
    }
}
