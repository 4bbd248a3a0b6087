//! User interface module
//!
//! This module handles the landing screen and the in-orrery HUD overlay.

use bevy::prelude::*;

pub mod hud;
pub mod landing;

pub use hud::{despawn_hud, spawn_hud, update_clock_readout};
pub use landing::{despawn_landing, spawn_landing, start_orrery};

use crate::orbital::OrrerySet;
use crate::session::AppView;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppView::Landing), spawn_landing)
            .add_systems(OnExit(AppView::Landing), despawn_landing)
            .add_systems(OnEnter(AppView::Orrery), spawn_hud)
            .add_systems(OnExit(AppView::Orrery), despawn_hud)
            .add_systems(
                Update,
                (
                    start_orrery.run_if(in_state(AppView::Landing)),
                    update_clock_readout.in_set(OrrerySet::Draw),
                ),
            );
    }
}
