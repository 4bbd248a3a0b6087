//! Body components for the Bevy ECS

use bevy::prelude::*;

use crate::bodies::catalog::{BodyDescriptor, MoonDescriptor};

/// Marker for an invisible anchor at a parent's centre. Body nodes orbit
/// their pivot without the pivot ever rotating.
#[derive(Component)]
pub struct OrbitPivot;

/// Runtime state of one body, stored on its body node.
///
/// The node's translation is always derived from `orbit_radius` and
/// `orbital_angle`; it is never stored on its own.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct BodyState {
    pub spin_angle: f32,
    pub orbital_angle: f32,
    pub orbit_radius: f32,
    pub rotation_speed: f32,
    pub revolution_speed: f32,
    pub tilt: f32,
}

impl BodyState {
    pub fn new(orbit_radius: f32, rotation_speed: f32, revolution_speed: f32, tilt: f32) -> Self {
        Self {
            spin_angle: 0.0,
            orbital_angle: 0.0,
            orbit_radius,
            rotation_speed,
            revolution_speed,
            tilt,
        }
    }

    /// Advance both angles by one tick, scaled by the simulation clock.
    pub fn advance(&mut self, scale: f32) {
        self.spin_angle += self.rotation_speed * scale;
        self.orbital_angle += self.revolution_speed * scale;
    }

    /// Position relative to the parent pivot.
    pub fn local_position(&self) -> Vec3 {
        let (sin, cos) = self.orbital_angle.sin_cos();
        Vec3::new(self.orbit_radius * cos, 0.0, self.orbit_radius * sin)
    }

    /// Axial tilt about Z, then spin about the tilted Y axis.
    pub fn surface_rotation(&self) -> Quat {
        Quat::from_rotation_z(self.tilt) * Quat::from_rotation_y(self.spin_angle)
    }
}

impl From<&BodyDescriptor> for BodyState {
    fn from(desc: &BodyDescriptor) -> Self {
        Self::new(
            desc.orbit_radius,
            desc.rotation_speed,
            desc.revolution_speed,
            desc.tilt,
        )
    }
}

impl From<&MoonDescriptor> for BodyState {
    fn from(desc: &MoonDescriptor) -> Self {
        Self::new(desc.orbit_radius, desc.rotation_speed, desc.revolution_speed, 0.0)
    }
}

/// Link from a body node to the mesh entity that carries its spin.
#[derive(Component, Copy, Clone, Debug)]
pub struct BodySurface(pub Entity);

/// Marker for the sun (or any other light-emitting body).
#[derive(Component)]
pub struct Luminous;

/// Marker for moon body nodes.
#[derive(Component)]
pub struct Moon;

/// Marker for ring meshes; always a child of a surface mesh.
#[derive(Component)]
pub struct PlanetRing;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_linearly() {
        let mut state = BodyState::new(10.0, 0.01, 0.005, 0.0);
        for _ in 0..1000 {
            state.advance(1.0);
        }
        assert!((state.spin_angle - 10.0).abs() < 1e-3);
        assert!((state.orbital_angle - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_advance_does_not_wrap() {
        let mut state = BodyState::new(1.0, 1.0, 1.0, 0.0);
        for _ in 0..10 {
            state.advance(1.0);
        }
        assert!(state.orbital_angle > std::f32::consts::TAU);
        assert!((state.orbital_angle - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_advance_respects_scale() {
        let mut state = BodyState::new(1.0, 0.2, 0.1, 0.0);
        state.advance(0.0);
        assert_eq!(state.orbital_angle, 0.0);
        state.advance(4.0);
        assert!((state.orbital_angle - 0.4).abs() < 1e-6);
        assert!((state.spin_angle - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_position_stays_on_orbit() {
        let mut state = BodyState::new(20.0, 0.0, 0.037, 0.0);
        for _ in 0..500 {
            state.advance(1.0);
            let p = state.local_position();
            assert_eq!(p.y, 0.0);
            assert!((p.x * p.x + p.z * p.z - 400.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_quarter_turn_position() {
        let mut state = BodyState::new(5.0, 0.0, std::f32::consts::FRAC_PI_2, 0.0);
        state.advance(1.0);
        let p = state.local_position();
        assert!(p.x.abs() < 1e-5);
        assert!((p.z - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_surface_rotation_applies_tilt() {
        let state = BodyState::new(0.0, 0.0, 0.0, 0.5);
        let up = state.surface_rotation() * Vec3::Y;
        assert!((up.angle_between(Vec3::Y) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_spin_keeps_tilted_axis() {
        let mut state = BodyState::new(0.0, 0.3, 0.0, 0.4);
        let axis_before = state.surface_rotation() * Vec3::Y;
        state.advance(7.0);
        let axis_after = state.surface_rotation() * Vec3::Y;
        assert!(axis_before.distance(axis_after) < 1e-5);
    }
}
