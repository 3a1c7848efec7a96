//! # lariat-rs
//!
//! A library for lasso text selection: given the text regions an OCR pass
//! detected in a screenshot and the free-hand path a user dragged around
//! them, decide which regions the path encloses.
//!
//! ## Features
//!
//! - **Selection Engine**: pure ray-casting point-in-polygon test with
//!   center-containment semantics — deterministic, no mutation, no I/O
//! - **Gesture Lifecycle**: a small tracker that accumulates a drag and
//!   evaluates it exactly once at pointer-up
//! - **Recorded Traces**: serde-backed pointer-event logs and stored paths,
//!   replayable from the CLI or from tests
//! - **Region Contract**: consumes snapshots through the `lariat-ocr`
//!   `RegionSource` trait, keeping the engine independent of any OCR backend
//!
//! ## Quick Start
//!
//! ```ignore
//! use lariat_rs::prelude::*;
//!
//! // Pure selection over a finalized path
//! let selected = select_regions_in_path(&snapshot.regions, &points);
//!
//! // Or drive the gesture lifecycle event by event
//! let mut tracker = GestureTracker::new();
//! tracker.pointer_down(0.0, 0.0);
//! tracker.pointer_move(120.0, 0.0);
//! tracker.pointer_move(120.0, 80.0);
//! let selected = tracker.pointer_up(&snapshot.regions);
//!
//! // Assemble the selected text for copy/search/share
//! let text = selected_text(&snapshot.regions, &selected);
//! ```

pub mod gesture;
pub mod selection;
pub mod trace;

// Re-export commonly used types at the root level
pub use gesture::{GesturePhase, GestureTracker};
pub use selection::{point_in_polygon, select_regions_in_path, selected_text, PathPoint, MIN_PATH_POINTS};
pub use trace::{load_path_points, load_trace, replay_trace, GestureTrace, PathFile, ReplayOutcome, TraceEvent};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```ignore
/// use lariat_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        load_path_points, load_trace, point_in_polygon, replay_trace, select_regions_in_path,
        selected_text, GesturePhase, GestureTracker, GestureTrace, PathFile, PathPoint,
        ReplayOutcome, TraceEvent, MIN_PATH_POINTS,
    };
}
