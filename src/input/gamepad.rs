//! Gamepad support
//!
//! Native: gilrs for cross-platform controllers. WASM: stubbed out,
//! keyboard input still works through the regular macroquad path.

// ============================================================================
// Native implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Axis, Button, Gilrs};

    const JUMP_BIT: u8 = 1 << 0;
    const SHOOT_BIT: u8 = 1 << 1;

    pub struct Gamepad {
        gilrs: Option<Gilrs>,
        deadzone: f32,
        held: u8,
        pressed: u8,
    }

    impl Gamepad {
        pub fn new() -> Self {
            // A missing gamepad backend degrades to keyboard-only play
            Self {
                gilrs: Gilrs::new().ok(),
                deadzone: 0.15,
                held: 0,
                pressed: 0,
            }
        }

        /// Drain gilrs events and refresh the pressed-edge snapshot.
        pub fn poll(&mut self) {
            if let Some(gilrs) = &mut self.gilrs {
                while gilrs.next_event().is_some() {}
            }
            let current = self.button_mask();
            self.pressed = current & !self.held;
            self.held = current;
        }

        fn active(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        fn button_mask(&self) -> u8 {
            let Some(gp) = self.active() else { return 0 };
            let mut mask = 0;
            if gp.is_pressed(Button::South) {
                mask |= JUMP_BIT;
            }
            if gp.is_pressed(Button::East)
                || gp.is_pressed(Button::West)
                || gp.is_pressed(Button::RightTrigger)
            {
                mask |= SHOOT_BIT;
            }
            mask
        }

        /// Horizontal drive in -1..=1 from the left stick or the d-pad.
        pub fn move_axis(&self) -> f32 {
            let Some(gp) = self.active() else { return 0.0 };
            let stick = apply_deadzone(gp.value(Axis::LeftStickX), self.deadzone);
            if stick != 0.0 {
                return stick.clamp(-1.0, 1.0);
            }
            if gp.is_pressed(Button::DPadLeft) {
                -1.0
            } else if gp.is_pressed(Button::DPadRight) {
                1.0
            } else {
                0.0
            }
        }

        /// South button went down since the previous poll.
        pub fn jump_pressed(&self) -> bool {
            self.pressed & JUMP_BIT != 0
        }

        /// Any shoot button went down since the previous poll.
        pub fn shoot_pressed(&self) -> bool {
            self.pressed & SHOOT_BIT != 0
        }
    }

    /// Apply a deadzone with linear rescaling back to the full range.
    fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
        if value.abs() < deadzone {
            return 0.0;
        }
        (value.abs() - deadzone) / (1.0 - deadzone) * value.signum()
    }
}

// ============================================================================
// WASM stub
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn move_axis(&self) -> f32 {
            0.0
        }

        pub fn jump_pressed(&self) -> bool {
            false
        }

        pub fn shoot_pressed(&self) -> bool {
            false
        }
    }
}

pub use platform::Gamepad;

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}
