//! # fieldcut
//!
//! A line-oriented field extraction filter, in the spirit of `cut -f`.
//!
//! Each input line is split on a literal delimiter (tab by default) and the
//! requested fields are written back out, joined by the same delimiter.
//!
//! ## Overview
//!
//! - **Field specification**: `1,3-5,7` selects fields 1, 3, 4, 5 and 7.
//!   Fields are 1-based and appear in the order they are listed; a field
//!   listed twice is emitted once, at its first position.
//! - **Projection**: one record in, at most one record out. Missing fields
//!   are skipped silently; with `require_delimiter`, lines that do not
//!   contain the delimiter are dropped.
//! - **Filtering**: lines are processed strictly in order, one at a time.
//!
//! ## Example
//!
//! ```
//! use fieldcut::{Config, Projection, Specification, project};
//!
//! let spec: Specification = "1,3-4".parse().unwrap();
//! let config = Config::new(",", false, spec).unwrap();
//!
//! assert_eq!(
//!     project("id,name,dept,salary", &config),
//!     Projection::Emit("id,dept,salary".to_string())
//! );
//! ```

pub mod error;
pub mod filter;
pub mod logging;
pub mod project;
pub mod spec;

pub use error::{ConfigError, CutError, RangeSide, SpecError};
pub use filter::{FilterStats, Input, filter_lines};
pub use project::{Config, Projection, project};
pub use spec::{FieldRange, Specification};
