//! # mb-shell
//!
//! Outermost layer of Motorbook: loads configuration, installs tracing,
//! wires adapters into [`mb_app::AppDeps`] and runs the command surface.

pub mod adapters;
pub mod bootstrap;
pub mod commands;
