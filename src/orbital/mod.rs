//! Orbital animation module
//!
//! This module owns the simulation clock and the per-frame update that
//! advances every body's spin and orbital angles.

use bevy::prelude::*;

pub mod animation;
pub mod clock;

pub use animation::advance_bodies;
pub use clock::{SimulationClock, clock_keyboard_controls};

use crate::session::AppView;

/// Frame ordering for the orrery. Animation mutates transforms before
/// anything reads them for drawing; both happen before transform propagation
/// and rendering of the same frame.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrrerySet {
    Input,
    Animate,
    Draw,
}

/// Plugin for the simulation clock and body animation
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (OrrerySet::Input, OrrerySet::Animate, OrrerySet::Draw)
                .chain()
                .run_if(in_state(AppView::Orrery)),
        )
        .add_systems(
            Update,
            (
                clock_keyboard_controls.in_set(OrrerySet::Input),
                advance_bodies.in_set(OrrerySet::Animate),
            ),
        );
    }
}
