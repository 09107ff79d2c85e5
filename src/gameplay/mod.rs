//! Balloon state, spawn / rise / expiry rules and the events they raise.

pub mod events;
pub mod model;
pub mod plugin;
pub mod text_layout;

pub use events::{BalloonEmitter, BalloonEvent, BalloonEventKind};
pub use model::{Balloon, BalloonModel, BalloonParams, ModelError, TickReport};
pub use plugin::{BalloonExpired, BalloonSimulationPlugin, BalloonTally, BalloonTouched};
pub use text_layout::{TextCatalog, TextLayout, TextMeasure, TextMetrics};
