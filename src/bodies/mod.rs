//! Celestial bodies module
//!
//! This module holds the static body table, the components carried by body
//! entities, and the builder that turns the table into a scene hierarchy.

pub mod builder;
pub mod catalog;
pub mod components;

pub use builder::{BuildSettings, BuiltSystem, build_solar_system};
pub use catalog::{BodyDescriptor, MoonDescriptor, solar_system};
pub use components::{BodyState, BodySurface, Luminous, Moon, OrbitPivot, PlanetRing};
