//! Command layer: one function per CLI subcommand, each going through a use case.

pub mod account;
pub mod register;
pub mod session;
pub mod vehicles;
