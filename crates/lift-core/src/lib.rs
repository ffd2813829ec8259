//! `lift-core` — foundational types for the `liftsim` single-car lift simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`status`]     | `LiftStatus`, `LiftState`, `Direction`, `DoorState`    |
//! | [`transition`] | The fixed status-transition adjacency table            |
//! | [`time`]       | `Tick`, `SimClock`                                     |
//! | [`config`]     | `EngineConfig` and its construction-time validation    |
//! | [`ids`]        | `RequestId`                                            |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod status;
pub mod time;
pub mod transition;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EngineConfig;
pub use error::{CoreError, CoreResult};
pub use ids::RequestId;
pub use status::{Direction, DoorState, Floor, LiftState, LiftStatus};
pub use time::{SimClock, Tick};
