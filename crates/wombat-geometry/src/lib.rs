//! Box-model geometry accessors.
//!
//! A uniform API to read and write the dimensions, scroll offsets and
//! positions of a window, a document, or an element, following
//! [CSSOM View](https://drafts.csswg.org/cssom-view/) for the raw values and
//! reconciling the `content-box` / `border-box` sizing models on top of them.
//!
//! ```text
//! [---------- content ---- padding ---- border ---- margin ]
//! |---- width ----|
//! |-------- innerWidth --------|
//! |-------------- outerWidth ----------------|
//! ```
//!
//! # Module Structure
//!
//! - [`host`] - the traits a DOM implementation provides ([`GeometryHost`], [`StyleReader`])
//! - [`target`] - window / document / element classification
//! - [`boundary`] - which box a measurement stops at, and the read/write deltas
//! - [`metrics`] - per-axis padding and border sums
//! - [`size`], [`scroll`], [`position`] - the accessors
//! - [`dispatch`] - the "value given means write" calling convention
//! - [`accessor`] - every accessor addressable by name, plus the [`Geometry`] facade
//! - [`snapshot`] - all readings of a target at once

pub mod accessor;
pub mod boundary;
pub mod dispatch;
pub mod host;
pub mod metrics;
pub mod position;
pub mod scroll;
pub mod size;
pub mod snapshot;
pub mod target;

pub use accessor::{Accessor, Geometry};
pub use boundary::{Axis, Boundary};
pub use host::{GeometryHost, StyleReader};
pub use metrics::BoxMetrics;
pub use position::PositionKind;
pub use snapshot::GeometrySnapshot;
pub use target::Target;
