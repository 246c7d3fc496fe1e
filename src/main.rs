//! Bavarian Mug Run: the festival platformer binary

use std::path::Path;

use macroquad::prelude::*;

use mug_run::assets::{SpriteStore, SPRITE_DIR};
use mug_run::input::InputState;
use mug_run::platformer::{self, Game};

fn fullscreen_arg() -> bool {
    std::env::args().any(|arg| arg == "--fullscreen")
}

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Bavarian Mug Run v{}", mug_run::VERSION),
        window_width: platformer::SCREEN_W as i32,
        window_height: platformer::SCREEN_H as i32,
        fullscreen: fullscreen_arg(),
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let mut rng = ::rand::thread_rng();
    let sprites = SpriteStore::load(Path::new(SPRITE_DIR));
    let mut input = InputState::new();
    let mut game = Game::new(&mut rng);
    let mut fullscreen = fullscreen_arg();

    loop {
        input.poll();
        if input.quit_pressed() {
            break;
        }
        if input.fullscreen_toggle_pressed() {
            fullscreen = !fullscreen;
            set_fullscreen(fullscreen);
        }

        let controls = input.controls();
        game.update(get_frame_time(), &controls, &mut rng);
        platformer::draw::draw(&game, &sprites);

        next_frame().await;
    }
}
