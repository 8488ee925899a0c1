#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod insights;
pub mod panels;
pub mod phase;
pub mod state;
pub mod summary;
pub mod surface;
pub mod thumbnails;
pub mod tool;
pub mod util;

pub use app::HtpApp;
pub use config::AppConfig;
pub use error::SurfaceError;
pub use event::SessionEvent;
pub use insights::InsightState;
pub use phase::{PHASES, Phase, PhaseId};
pub use state::{Action, DrawingRecord, SessionState, reduce};
pub use surface::{DrawingImage, DrawingSurface, RenderableSurface};
pub use tool::ToolState;
