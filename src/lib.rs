pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use app::game::{build_model, BalloonGamePlugin};
pub use crate::core::config::{GameConfig, WindowConfig};
pub use gameplay::{
    Balloon, BalloonEvent, BalloonEventKind, BalloonExpired, BalloonModel, BalloonParams,
    BalloonSimulationPlugin, BalloonTally, BalloonTouched, ModelError, TextCatalog, TextLayout,
};
pub use rendering::view::BalloonView;
