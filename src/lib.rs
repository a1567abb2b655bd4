//! # Tour Basics
//!
//! Small, self-contained demos of everyday language mechanics. Every demo
//! writes its results to the sink it is given and returns; none of them
//! share state.
//!
//! ## Sections
//!
//! 1. **Flow control** - loops, `if`, `match` guards, deferred actions
//! 2. **More types** - references, structs, arrays, slice views, maps,
//!    function values, closures
//!
//! ## Running
//!
//! ```bash
//! # everything, in order
//! cargo run --bin tour
//!
//! # one section, or a single demo
//! cargo run --bin tour -- --section flow-control
//! cargo run --bin tour -- --demo making_slices
//!
//! # list demo names
//! cargo run --bin tour -- --list
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` / `anyhow` - library errors and binary error context
//! - `serde` + `toml` - optional `tour.toml` config
//! - `chrono` - today's weekday
//! - `tracing` - diagnostics on stderr, demo output stays on stdout

pub mod catalog;
pub mod config;
pub mod defer;
pub mod error;
pub mod flow_control;
pub mod host;
pub mod more_types;
pub mod slice;
pub mod wc;

pub use catalog::{catalog, select, Demo, Runner, Section};
pub use config::TourConfig;
pub use defer::DeferStack;
pub use error::{Result, TourError};
pub use host::Host;
pub use slice::SliceView;
