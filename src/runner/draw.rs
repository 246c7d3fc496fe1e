//! Dash rendering: alley backdrop, crates, runner and overlays

use macroquad::prelude::*;

use crate::assets::SpriteStore;
use crate::sprites::SpriteId;

use super::{RunState, Runner, GROUND_Y, PLAYER_H, PLAYER_W, SCREEN_H, SCREEN_W};

fn c(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Draw one full frame of the runner.
pub fn draw(runner: &Runner, sprites: &SpriteStore) {
    draw_backdrop(runner);
    draw_obstacles(runner);
    draw_player(runner, sprites);
    draw_hud(runner);
    draw_state_overlay(runner);
}

fn draw_backdrop(runner: &Runner) {
    clear_background(c(125, 198, 245));
    draw_rectangle(0.0, 0.0, SCREEN_W, 160.0, c(94, 178, 233));

    let mountain_offset = runner.distance * 0.18;
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

    // Fence line drifting with the alley
    let fence_offset = runner.distance * 0.6;
    for i in -1..25 {
        let x = i as f32 * 40.0 - fence_offset % 40.0;
        draw_rectangle(x, 404.0, 8.0, 56.0, c(172, 134, 96));
    }

    draw_rectangle(0.0, GROUND_Y, SCREEN_W, SCREEN_H - GROUND_Y, c(58, 149, 89));
    draw_rectangle(0.0, GROUND_Y, SCREEN_W, 12.0, c(46, 112, 67));

    // Lane dashes keep the scroll speed readable
    let dash_offset = runner.distance;
    for i in -1..13 {
        let x = i as f32 * 80.0 - dash_offset % 80.0;
        draw_rectangle(x, GROUND_Y + 40.0, 36.0, 6.0, c(46, 112, 67));
    }
}

fn draw_obstacles(runner: &Runner) {
    for obstacle in &runner.obstacles {
        let r = obstacle.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, c(157, 113, 74));
        draw_rectangle(r.x, r.y, r.w, 6.0, c(128, 90, 58));
        // Keg hoops
        draw_rectangle(r.x, r.y + r.h * 0.35, r.w, 3.0, c(90, 62, 40));
        draw_rectangle(r.x, r.y + r.h * 0.7, r.w, 3.0, c(90, 62, 40));
    }
}

fn draw_player(runner: &Runner, sprites: &SpriteStore) {
    let body = runner.player_rect();
    draw_texture_ex(
        sprites.get(SpriteId::Player),
        body.x,
        body.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(PLAYER_W, PLAYER_H)),
            ..Default::default()
        },
    );

    if runner.state == RunState::GameOver {
        let (w, h) = SpriteId::Stun.size();
        draw_texture_ex(
            sprites.get(SpriteId::Stun),
            body.center_x() - w as f32 * 0.5,
            body.y - h as f32 - 6.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w as f32, h as f32)),
                ..Default::default()
            },
        );
    }
}

fn draw_hud(runner: &Runner) {
    draw_text(&format!("Score {}", runner.score), 20.0, 40.0, 30.0, WHITE);
    draw_text(&format!("Best {}", runner.best), 20.0, 70.0, 21.0, WHITE);
}

fn draw_centered(text: &str, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (SCREEN_W - dims.width) * 0.5, y, size, color);
}

fn draw_state_overlay(runner: &Runner) {
    if runner.state == RunState::Running {
        return;
    }

    draw_rectangle(0.0, 0.0, SCREEN_W, SCREEN_H, Color::new(0.04, 0.04, 0.04, 0.51));

    match runner.state {
        RunState::Menu => {
            draw_centered("Pretzel Dash", SCREEN_H * 0.5 - 34.0, 54.0, c(255, 246, 220));
            draw_centered(
                "Jump the beer kegs. The alley only gets faster.",
                SCREEN_H * 0.5 + 2.0,
                21.0,
                WHITE,
            );
            draw_centered(
                "Press SPACE or the A button to start",
                SCREEN_H * 0.5 + 38.0,
                21.0,
                WHITE,
            );
        }
        _ => {
            draw_centered("Game Over", SCREEN_H * 0.5 - 34.0, 54.0, c(255, 246, 220));
            draw_centered(
                &format!("Cleared {} kegs. Best {}.", runner.score, runner.best),
                SCREEN_H * 0.5 + 2.0,
                21.0,
                WHITE,
            );
            draw_centered("Press SPACE to dash again", SCREEN_H * 0.5 + 38.0, 21.0, WHITE);
        }
    }
}
