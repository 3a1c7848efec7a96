use lariat_ocr::{BoundingBox, TextRegion};
use lariat_rs::prelude::*;

fn region(text: &str, left: f32, top: f32, right: f32, bottom: f32) -> TextRegion {
    TextRegion {
        text: text.to_string(),
        bounding_box: BoundingBox::new(left, top, right, bottom),
        confidence: Some(0.95),
    }
}

fn main() {
    // A small fake OCR snapshot: two lines of text
    let regions = vec![
        region("Meet", 10.0, 10.0, 60.0, 30.0),
        region("me", 70.0, 10.0, 100.0, 30.0),
        region("at", 110.0, 10.0, 130.0, 30.0),
        region("noon", 10.0, 40.0, 70.0, 60.0),
        region("tomorrow", 80.0, 40.0, 180.0, 60.0),
    ];

    println!("Snapshot: {} regions", regions.len());
    println!();

    // Drive a lasso gesture around the first line
    let mut tracker = GestureTracker::new();
    tracker.pointer_down(0.0, 0.0);
    tracker.pointer_move(140.0, 0.0);
    tracker.pointer_move(140.0, 35.0);
    tracker.pointer_move(0.0, 35.0);

    println!("Drawing... ({} path points so far)", tracker.path().len());

    let selected = tracker.pointer_up(&regions);
    println!("Selected indices: {:?}", selected);
    println!("Selected text:");
    for line in selected_text(&regions, &selected).lines() {
        println!("  {}", line);
    }
    println!();

    // The same selection as a one-shot call over a finalized path
    let path = vec![
        PathPoint::new(0.0, 30.0),
        PathPoint::new(200.0, 30.0),
        PathPoint::new(200.0, 70.0),
        PathPoint::new(0.0, 70.0),
    ];
    let second_line = select_regions_in_path(&regions, &path);
    println!("Second line: {:?}", selected_text(&regions, &second_line));
}
