//! Recorded gesture traces.
//!
//! Capture surfaces report pointer events live; this module gives those
//! events a stored form so selections can be replayed outside the input
//! loop, from the CLI or from tests.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lariat_ocr::TextRegion;

use crate::gesture::{GesturePhase, GestureTracker};
use crate::selection::PathPoint;

/// One pointer event in a recorded trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum TraceEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Cancel,
}

/// An ordered pointer-event log, possibly spanning several gestures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureTrace {
    pub events: Vec<TraceEvent>,
}

/// A stored free-hand path, already finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathFile {
    pub points: Vec<PathPoint>,
}

/// The selection produced by one completed gesture of a replayed trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    /// Position of the gesture among the trace's completed gestures.
    pub gesture_index: usize,
    /// Indices of the selected regions, in region order.
    pub selected: Vec<usize>,
}

/// Loads a pointer-event log from a JSON file.
pub fn load_trace<P: AsRef<Path>>(path: P) -> Result<GestureTrace> {
    let contents =
        std::fs::read_to_string(path.as_ref()).context("Failed to read trace file")?;
    serde_json::from_str(&contents).context("Failed to parse trace JSON")
}

/// Loads a stored path from a JSON file.
pub fn load_path_points<P: AsRef<Path>>(path: P) -> Result<Vec<PathPoint>> {
    let contents = std::fs::read_to_string(path.as_ref()).context("Failed to read path file")?;
    let file: PathFile = serde_json::from_str(&contents).context("Failed to parse path JSON")?;
    Ok(file.points)
}

/// Drives a tracker through every event of `trace` and collects the
/// selection of each completed gesture.
///
/// A gesture completes when an up event ends a `Drawing` phase; completed
/// gestures that select nothing still produce an (empty) outcome. Cancelled
/// gestures and stray events produce none.
pub fn replay_trace(trace: &GestureTrace, regions: &[TextRegion]) -> Vec<ReplayOutcome> {
    let mut tracker = GestureTracker::new();
    let mut outcomes = Vec::new();

    for event in &trace.events {
        match *event {
            TraceEvent::Down { x, y } => tracker.pointer_down(x, y),
            TraceEvent::Move { x, y } => tracker.pointer_move(x, y),
            TraceEvent::Up => {
                let completed = tracker.phase() == GesturePhase::Drawing;
                let selected = tracker.pointer_up(regions);
                if completed {
                    outcomes.push(ReplayOutcome {
                        gesture_index: outcomes.len(),
                        selected,
                    });
                }
            }
            TraceEvent::Cancel => tracker.cancel(),
        }
    }

    log::debug!(
        "replayed {} events into {} completed gestures",
        trace.events.len(),
        outcomes.len()
    );

    outcomes
}
