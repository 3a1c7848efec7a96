pub mod json;
pub mod region;
pub mod source;

pub use json::JsonRegionSource;
pub use region::{BoundingBox, TextRegion};
pub use source::{RegionSnapshot, RegionSource, SnapshotInput, SourceError};
