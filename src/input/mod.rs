//! Input handling with gamepad support
//!
//! Polls keyboard (macroquad) and gamepad (gilrs on native) every frame
//! and folds both into the per-frame `Controls` sample the games consume.

mod gamepad;

pub use gamepad::Gamepad;

use macroquad::prelude::*;

/// One frame's worth of player intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Controls {
    /// Horizontal drive in -1..=1
    pub move_x: f32,
    /// Jump went down this frame
    pub jump_pressed: bool,
    /// Shoot went down this frame
    pub shoot_pressed: bool,
}

impl Controls {
    /// Any press that starts or restarts a game from a non-running state
    pub fn start_pressed(&self) -> bool {
        self.jump_pressed || self.shoot_pressed
    }
}

/// Unified input state merging keyboard and gamepad.
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
        }
    }

    /// Call once per frame before sampling `controls`.
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Sample the current frame's controls.
    pub fn controls(&self) -> Controls {
        let mut move_x: f32 = 0.0;
        if is_key_down(KeyCode::A) || is_key_down(KeyCode::Left) {
            move_x -= 1.0;
        }
        if is_key_down(KeyCode::D) || is_key_down(KeyCode::Right) {
            move_x += 1.0;
        }

        // Stick wins over keys when it is deflected further
        let stick = self.gamepad.move_axis();
        if stick.abs() > move_x.abs() {
            move_x = stick;
        }

        Controls {
            move_x: move_x.clamp(-1.0, 1.0),
            jump_pressed: is_key_pressed(KeyCode::Space)
                || is_key_pressed(KeyCode::Up)
                || is_key_pressed(KeyCode::W)
                || self.gamepad.jump_pressed(),
            shoot_pressed: is_key_pressed(KeyCode::J)
                || is_key_pressed(KeyCode::LeftControl)
                || is_key_pressed(KeyCode::Enter)
                || self.gamepad.shoot_pressed(),
        }
    }

    pub fn quit_pressed(&self) -> bool {
        is_key_pressed(KeyCode::Escape)
    }

    pub fn fullscreen_toggle_pressed(&self) -> bool {
        is_key_pressed(KeyCode::F11)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
