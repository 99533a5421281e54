//! Scheduling: running a cycler's step and glitch chains over time.
//!
//! - [`Driver`]: single-threaded timer queue on a virtual clock. Hosts with
//!   their own event loop (or tests) advance it explicitly.
//! - [`CyclerActor`]: a dedicated thread that advances a driver in real
//!   time until it is disposed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   Command::Dispose   ┌──────────────────────────┐
//! │  Host thread │ ───────────────────▶ │ Actor thread             │
//! └──────────────┘                      │  Driver                  │
//!                                       │   ├─ TextCycler (state)  │
//!                                       │   └─ timer queue         │
//!                                       └────────────┬─────────────┘
//!                                                    │ Frame
//!                                                    ▼
//!                                       ┌──────────────────────────┐
//!                                       │ DisplayTarget            │
//!                                       └──────────────────────────┘
//! ```

mod cycler_actor;
mod driver;
mod messages;

pub use cycler_actor::CyclerActor;
pub use driver::{Driver, TimerEvent};
pub use messages::Command;
