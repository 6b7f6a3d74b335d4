//! Yet Another RayCaster.
//!
//! A grid world rendered one screen column at a time with a DDA ray caster,
//! driven by a fixed-budget frame loop.
//!
//! * [`world`]    – tile grid and player pose
//! * [`engine`]   – ray casting into per-column draw commands
//! * [`renderer`] – draw-command back-ends (software frame-buffer)
//! * [`sim`]      – input, movement and the frame loop
//! * [`platform`] – window, input queue and clock

pub mod config;
pub mod engine;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod world;

pub use config::{Config, ConfigError};
