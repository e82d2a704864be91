//! `NarrativeEngine` facade.
//!
//! The engine is split into one `impl` block per concern: construction,
//! accessors, input, navigation, frame ticks, observer dispatch and
//! snapshots.

mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod frame_controller;
mod input_controller;
mod json_contract;
mod navigation_controller;
mod observer_dispatch;
mod observer_registry;
mod phase_state_store;
mod snapshot_controller;
mod validation;

pub use engine::NarrativeEngine;
pub use engine_config::NarrativeEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use phase_state_store::{JumpPlan, Notifications, PhaseStateStore};
