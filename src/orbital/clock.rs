//! Simulation clock for the orrery

use bevy::prelude::*;

use crate::config::OrreryConfig;

pub const MIN_TIME_SCALE: f32 = 1.0 / 64.0;
pub const MAX_TIME_SCALE: f32 = 64.0;

/// Simulation clock resource. One tick per rendered frame; the scale
/// multiplies every body's per-tick increments.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimulationClock {
    pub time_scale: f32,
    pub paused: bool,
    /// Ticks that actually advanced the bodies.
    pub ticks: u64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            paused: false,
            ticks: 0,
        }
    }
}

impl SimulationClock {
    pub fn from_config(config: &OrreryConfig) -> Self {
        Self {
            time_scale: config.time_scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE),
            paused: config.start_paused,
            ticks: 0,
        }
    }

    /// Scale to apply this tick, or `None` while paused.
    pub fn tick_scale(&self) -> Option<f32> {
        if self.paused { None } else { Some(self.time_scale) }
    }

    pub fn faster(&mut self) {
        self.time_scale = (self.time_scale * 2.0).clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
    }

    pub fn slower(&mut self) {
        self.time_scale = (self.time_scale * 0.5).clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
    }

    pub fn reset_scale(&mut self) {
        self.time_scale = 1.0;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

/// Keyboard shortcuts: Space pauses, `=`/`-` double or halve the rate, `0` resets it.
pub fn clock_keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
) {
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle_pause();
        info!("Simulation {}", if clock.paused { "paused" } else { "resumed" });
    }
    if keys.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
        clock.faster();
        info!("Time scale: {}x", clock.time_scale);
    }
    if keys.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
        clock.slower();
        info!("Time scale: {}x", clock.time_scale);
    }
    if keys.any_just_pressed([KeyCode::Digit0, KeyCode::Numpad0]) {
        clock.reset_scale();
        info!("Time scale: 1x");
    }
}
