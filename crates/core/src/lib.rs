//! # numtape
//!
//! A number-line addition widget: the learner is shown an arc over the tape
//! and types `a`, then `b`, then `a + b`, one step at a time.
//!
//! This crate owns the problem, the step sequence and the pixel geometry.
//! Drawing and input elements belong to a host, which implements
//! [`surface::Surface`] and forwards key presses and commits to a
//! [`sequencer::Widget`].
//!
//! ## Quick Start
//!
//! ```
//! use numtape::prelude::*;
//!
//! let problem = Problem::new(3, 4, 20).unwrap();
//! let mut widget = Widget::with_defaults(problem, RecordingSurface::new());
//! widget.start();
//!
//! assert!(!widget.on_field_commit(Field::A, "5"));
//! assert!(widget.on_field_commit(Field::A, "3"));
//! assert_eq!(widget.step(), Step::PrintSecond);
//! assert_eq!(widget.surface().expression(), Some("3 + ? = ?"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialization of config, draw commands and session
//!   snapshots, plus JSON config loading.
//!
//! ## Modules
//!
//! - [`problem`]: problem generation and the three answer fields
//! - [`sequencer`]: the step machine and the host-facing widget
//! - [`expression`]: the `a + b = sum` readout
//! - [`geometry`]: tape pixel layout and arc shape
//! - [`surface`]: host rendering interface

#[path = "core/config.rs"]
pub mod config;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/expression.rs"]
pub mod expression;

#[path = "core/geometry.rs"]
pub mod geometry;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/problem.rs"]
pub mod problem;

#[path = "core/sequencer.rs"]
pub mod sequencer;

#[path = "core/surface.rs"]
pub mod surface;

/// Prelude module for convenient imports.
///
/// ```
/// use numtape::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::WidgetConfig;
    pub use crate::error::TapeError;
    pub use crate::expression::{render_expression, ExpressionTemplate, InputValues};
    pub use crate::geometry::{ArcPath, InputPlacement, TapeGeometry};
    pub use crate::prng::Prng;
    pub use crate::problem::{Field, Problem};
    pub use crate::sequencer::{KeyFilter, Session, Step, Widget};
    pub use crate::surface::{DrawCommand, RecordingSurface, Surface};
}
