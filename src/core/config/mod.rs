pub mod config;

pub use config::{BalloonConfig, ConfigIssues, GameConfig, InputConfig, TextConfig, WindowConfig};
