//! Festival rendering: parallax backdrop, world, HUD and overlays

use macroquad::prelude::*;

use crate::assets::SpriteStore;
use crate::sprites::SpriteId;

use super::level::CollectibleKind;
use super::enemy::EnemyKind;
use super::{Game, GameState, GROUND_Y, SCREEN_H, SCREEN_W, WORLD_W};

fn c(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Draw one full frame of the platformer.
pub fn draw(game: &Game, sprites: &SpriteStore) {
    draw_backdrop(game);
    draw_solids(game);
    draw_goal_gate(game);
    draw_entities(game, sprites);
    draw_hud(game);
    draw_controls_hint();
    draw_state_overlay(game);
}

fn draw_backdrop(game: &Game) {
    clear_background(c(125, 198, 245));
    draw_rectangle(0.0, 0.0, SCREEN_W, 160.0, c(94, 178, 233));

    // Distant alps scroll slower than the world
    let mountain_offset = game.camera_x * 0.18;
    for i in -1..8 {
        let x = i as f32 * 220.0 - mountain_offset % 220.0;
        draw_triangle(
            vec2(x, 290.0),
            vec2(x + 100.0, 180.0),
            vec2(x + 200.0, 290.0),
            c(100, 129, 152),
        );
        draw_triangle(
            vec2(x + 20.0, 290.0),
            vec2(x + 105.0, 200.0),
            vec2(x + 190.0, 290.0),
            c(131, 164, 188),
        );
    }

    // Festival tents in the mid distance
    let tent_offset = game.camera_x * 0.42;
    for i in -1..11 {
        let x = i as f32 * 150.0 - tent_offset % 150.0;
        draw_triangle(
            vec2(x + 10.0, GROUND_Y),
            vec2(x + 70.0, 338.0),
            vec2(x + 130.0, GROUND_Y),
            c(248, 237, 214),
        );
        draw_rectangle(x + 14.0, 395.0, 112.0, 12.0, c(220, 71, 54));
        draw_rectangle(x + 34.0, 410.0, 72.0, 50.0, c(241, 230, 205));
    }
}

fn draw_solids(game: &Game) {
    draw_rectangle(0.0, GROUND_Y, SCREEN_W, SCREEN_H - GROUND_Y, c(58, 149, 89));
    draw_rectangle(0.0, GROUND_Y, SCREEN_W, 12.0, c(46, 112, 67));

    for solid in &game.solids[1..] {
        let x = solid.x - game.camera_x;
        if x + solid.w < -20.0 || x > SCREEN_W + 20.0 {
            continue;
        }
        draw_rectangle(x, solid.y, solid.w, solid.h, c(157, 113, 74));
        draw_rectangle(x, solid.y + solid.h - 6.0, solid.w, 6.0, c(128, 90, 58));
    }
}

fn draw_goal_gate(game: &Game) {
    let gate_x = WORLD_W - 62.0 - game.camera_x;
    if gate_x >= SCREEN_W {
        return;
    }
    draw_rectangle(gate_x, GROUND_Y - 130.0, 56.0, 130.0, c(182, 139, 82));
    draw_rectangle(gate_x + 6.0, GROUND_Y - 126.0, 44.0, 118.0, c(104, 62, 39));
    draw_text("Fest", gate_x + 8.0, GROUND_Y - 66.0, 21.0, c(255, 244, 222));
}

fn draw_sprite(sprites: &SpriteStore, id: SpriteId, x: f32, y: f32, flip_x: bool) {
    let (w, h) = id.size();
    draw_texture_ex(
        sprites.get(id),
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w as f32, h as f32)),
            flip_x,
            ..Default::default()
        },
    );
}

fn draw_entities(game: &Game, sprites: &SpriteStore) {
    for item in game.collectibles.iter().filter(|item| !item.taken) {
        let bob = 4.0 * (game.clock * 3.6 + item.bob_seed).sin();
        let id = match item.kind {
            CollectibleKind::Beer => SpriteId::Beer,
            CollectibleKind::Pretzel => SpriteId::Pretzel,
        };
        draw_sprite(
            sprites,
            id,
            item.rect.x - game.camera_x,
            item.rect.y + bob,
            false,
        );
    }

    for enemy in &game.enemies {
        let id = match enemy.kind {
            EnemyKind::Waiter => SpriteId::Waiter,
            EnemyKind::Police => SpriteId::Police,
        };
        draw_sprite(
            sprites,
            id,
            enemy.pos.x - game.camera_x,
            enemy.pos.y,
            enemy.dir < 0,
        );
    }

    for mug in &game.mugs {
        draw_sprite(
            sprites,
            SpriteId::Mug,
            mug.rect.x - game.camera_x,
            mug.rect.y,
            mug.vel.x < 0.0,
        );
    }

    for bottle in &game.bottles {
        let x = bottle.rect.x - game.camera_x;
        draw_circle(x + 7.0, bottle.rect.y + 7.0, 7.0, c(49, 104, 198));
        draw_circle(x + 5.0, bottle.rect.y + 5.0, 2.0, c(219, 231, 255));
    }

    // Hit flash: skip every other tick while invulnerable
    let blink = game.player.invuln_timer > 0.0 && (game.clock * 14.0) as i32 % 2 == 0;
    if !blink {
        draw_sprite(
            sprites,
            SpriteId::Player,
            game.player.pos.x - game.camera_x,
            game.player.pos.y,
            game.player.facing < 0,
        );
    }
}

fn draw_hud(game: &Game) {
    draw_text(&format!("Score {}", game.score), 20.0, 40.0, 30.0, WHITE);
    draw_text(
        &format!(
            "Beer {}/{}  Pretzels {}  Lives {}",
            game.beers, game.level.goal_beers, game.pretzels, game.player.lives
        ),
        20.0,
        70.0,
        21.0,
        WHITE,
    );

    if game.message_timer > 0.0 {
        let dims = measure_text(&game.message, None, 21, 1.0);
        let box_w = dims.width + 28.0;
        let box_x = (SCREEN_W - box_w) * 0.5;
        draw_rectangle(box_x, 82.0, box_w, 36.0, c(249, 225, 168));
        draw_rectangle_lines(box_x, 82.0, box_w, 36.0, 2.0, c(184, 147, 83));
        draw_text(&game.message, box_x + 14.0, 106.0, 21.0, c(22, 22, 22));
    }
}

fn draw_controls_hint() {
    draw_text(
        "Move A/D or Left/Right | Jump SPACE | Throw Mug J/LCTRL | F11 fullscreen | ESC quit",
        12.0,
        SCREEN_H - 14.0,
        21.0,
        c(243, 243, 243),
    );
}

fn draw_centered(text: &str, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (SCREEN_W - dims.width) * 0.5, y, size, color);
}

fn draw_state_overlay(game: &Game) {
    if game.state == GameState::Running {
        return;
    }

    draw_rectangle(0.0, 0.0, SCREEN_W, SCREEN_H, Color::new(0.04, 0.04, 0.04, 0.51));

    let (title, subtitle, prompt) = match game.state {
        GameState::Menu => (
            "Bavarian Mug Run".to_string(),
            "Move with A/D or arrows. Jump SPACE. Throw mug J.".to_string(),
            "Press SPACE or the A button to start",
        ),
        GameState::GameOver => (
            "Game Over".to_string(),
            "The police ended your Oktoberfest tour.".to_string(),
            "Press SPACE to retry",
        ),
        _ => (
            "Prost! You Made It".to_string(),
            format!("Final score {} with {} beers.", game.score, game.beers),
            "Press SPACE to play again",
        ),
    };

    draw_centered(&title, SCREEN_H * 0.5 - 34.0, 54.0, c(255, 246, 220));
    draw_centered(&subtitle, SCREEN_H * 0.5 + 2.0, 21.0, WHITE);
    draw_centered(prompt, SCREEN_H * 0.5 + 38.0, 21.0, WHITE);
}
