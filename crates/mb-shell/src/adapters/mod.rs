pub mod navigation;

pub use navigation::{CliNavigator, Route};
