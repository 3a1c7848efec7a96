//! Lasso selection over OCR text regions.
//!
//! Given the rectangles reported by a region source and the free-hand path a
//! user dragged across the screen, this module decides which regions the path
//! encloses. The convention is center-containment: a region is selected iff
//! the center of its bounding box lies inside the closed polygon formed by
//! the path.

use lariat_ocr::TextRegion;
use serde::{Deserialize, Serialize};

/// One point of a pointer trajectory, in the same pixel space as the region
/// bounding boxes (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

impl PathPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Minimum number of path points that can enclose any area.
pub const MIN_PATH_POINTS: usize = 3;

/// Selects the regions whose bounding-box center falls inside the closed
/// polygon formed by `path`.
///
/// The path is implicitly closed by connecting its last point back to its
/// first. Paths with fewer than [`MIN_PATH_POINTS`] points cannot enclose
/// any area and yield an empty selection. Self-intersecting paths are not an
/// error; they are classified by the even-odd rule.
///
/// Returns the indices of the selected regions, preserving region order.
pub fn select_regions_in_path(regions: &[TextRegion], path: &[PathPoint]) -> Vec<usize> {
    if path.len() < MIN_PATH_POINTS {
        return Vec::new();
    }

    regions
        .iter()
        .enumerate()
        .filter(|(_, region)| {
            let (cx, cy) = region.bounding_box.center();
            point_in_polygon(cx, cy, path)
        })
        .map(|(index, _)| index)
        .collect()
}

/// Ray-casting point-in-polygon test.
///
/// Casts a horizontal ray from `(x, y)` towards +x and counts how many
/// polygon edges it crosses; an odd count means the point is inside. The
/// one-sided `>` comparison on each edge's y-span keeps a vertex shared by
/// two edges from being counted twice. No epsilon is applied, so a point
/// exactly on an edge gets the algorithm's usual boundary-ambiguous answer.
/// A polygon with fewer than three vertices contains nothing.
pub fn point_in_polygon(x: f32, y: f32, polygon: &[PathPoint]) -> bool {
    if polygon.len() < MIN_PATH_POINTS {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;

    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];

        if (pi.y > y) != (pj.y > y) {
            // The edge straddles the ray's y, so pj.y - pi.y is non-zero.
            let crossing_x = (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x;
            if x < crossing_x {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}

/// Joins the text of the selected regions, one region per line, in selection
/// order. Indices out of range are skipped.
pub fn selected_text(regions: &[TextRegion], selected: &[usize]) -> String {
    selected
        .iter()
        .filter_map(|&index| regions.get(index))
        .map(|region| region.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
