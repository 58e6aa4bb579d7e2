//! Motorbook Application Orchestration Layer
//!
//! This crate contains business logic use cases: driving the registration
//! wizard, submitting the finished draft and reading vehicle history.

pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::UseCases;
