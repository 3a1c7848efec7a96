//! Pointer-gesture lifecycle for lasso selection.
//!
//! The selection engine itself is a pure function; this module owns the
//! stateful part of a drag. The lifecycle is a three-state cycle: `Idle`,
//! pointer-down moves to `Drawing`, each pointer-move appends to the path,
//! and pointer-up runs the engine exactly once over the complete accumulated
//! path before returning to `Idle`. Mid-drag the path is only read for
//! visual feedback; hit-testing never happens before pointer-up.

use lariat_ocr::TextRegion;

use crate::selection::{select_regions_in_path, PathPoint, MIN_PATH_POINTS};

/// Where the tracker is in the drag cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Drawing,
}

/// Accumulates a single drag gesture and evaluates it on release.
///
/// Events that do not fit the current phase are ignored: a move or an up
/// while `Idle` is a no-op, and a down while already `Drawing` restarts the
/// gesture with a fresh path.
#[derive(Debug)]
pub struct GestureTracker {
    phase: GesturePhase,
    path: Vec<PathPoint>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            phase: GesturePhase::Idle,
            path: Vec::new(),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// The path accumulated so far. For drawing feedback only; the engine is
    /// not consulted until the gesture completes.
    pub fn path(&self) -> &[PathPoint] {
        &self.path
    }

    /// Starts a new gesture at the contact point. Any gesture already in
    /// progress is discarded.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.path.clear();
        self.path.push(PathPoint::new(x, y));
        self.phase = GesturePhase::Drawing;
    }

    /// Appends a point to the active gesture. Ignored while `Idle`.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.phase == GesturePhase::Drawing {
            self.path.push(PathPoint::new(x, y));
        }
    }

    /// Completes the gesture and evaluates it against `regions`.
    ///
    /// The engine is invoked once, with the complete path, and only if the
    /// path has at least [`MIN_PATH_POINTS`] points; shorter paths are
    /// discarded silently. The tracker is `Idle` with an empty path on
    /// return either way.
    pub fn pointer_up(&mut self, regions: &[TextRegion]) -> Vec<usize> {
        let selected = if self.phase == GesturePhase::Drawing && self.path.len() >= MIN_PATH_POINTS
        {
            select_regions_in_path(regions, &self.path)
        } else {
            Vec::new()
        };

        log::debug!(
            "gesture ended: {} path points, {} of {} regions selected",
            self.path.len(),
            selected.len(),
            regions.len()
        );

        self.path.clear();
        self.phase = GesturePhase::Idle;
        selected
    }

    /// Discards the gesture without consulting the engine, e.g. when the
    /// host interrupts the drag.
    pub fn cancel(&mut self) {
        self.path.clear();
        self.phase = GesturePhase::Idle;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}
