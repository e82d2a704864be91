//! scroll-rig: deterministic scroll-driven narrative engine.
//!
//! Raw wheel/touch input is translated into a clamped scroll offset, mapped to
//! a normalized progress and a discrete phase, and fanned out to a cinematic
//! camera rig and a content-visibility resolver. Rendering stays outside the
//! crate behind the `render::Renderer` contract.

pub mod api;
pub mod camera;
pub mod content;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{NarrativeEngine, NarrativeEngineConfig, PhaseStateStore};
pub use error::{RigError, RigResult};
