//! `shelfmap` — Lay out picking-shelf bin contents from a JSON goals file.
//!
//! This library provides the goals parsing, shelf layout, and output
//! formatting behind the `shelfmap` CLI. Bins are ranked by sorted name and
//! placed column by column on a shelf of three rows; each position has five
//! item slots.
//!
//! # Example
//!
//! ```
//! use shelfmap::{Config, Goals, ShelfGrid, format_slot};
//!
//! let goals = Goals::from_json_str(
//!     r#"{"bin_contents":{"bin_B":["glue"],"bin_A":["oreo"]},"work_order":[]}"#,
//! )
//! .unwrap();
//! let config = Config::default();
//! let grid = ShelfGrid::from_goals(&goals, &config.layout).unwrap();
//!
//! let mut out = String::new();
//! let first = grid.slots().next().unwrap();
//! format_slot(&first, &config, false, &mut out);
//! assert_eq!(out, "0 0 0 oreo");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod goals;
pub mod grid;
pub mod layout;
pub mod logger;
pub mod shelf;

// Re-export primary API types for convenience.
pub use config::Config;
pub use error::ShelfError;
pub use formatter::{format_pose, format_slot, format_target};
pub use goals::{Goals, WorkOrderEntry, WorkTarget};
pub use grid::{ShelfGrid, SlotEntry};
pub use layout::{GridPosition, Layout, position_for_rank};
pub use shelf::{Pose, ShelfGeometry};
