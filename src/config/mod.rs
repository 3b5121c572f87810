//! Configuration and path management for FinZen

pub mod paths;
pub mod settings;

pub use paths::FinZenPaths;
pub use settings::Settings;
