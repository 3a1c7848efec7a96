use async_trait::async_trait;

use crate::source::{RegionSnapshot, RegionSource, SnapshotInput, SourceError};

/// Region source backed by a JSON snapshot document, the format OCR results
/// are persisted in:
///
/// ```json
/// {
///   "text": "hello world",
///   "regions": [
///     {
///       "text": "hello",
///       "bounding_box": { "left": 0.0, "top": 0.0, "right": 42.0, "bottom": 16.0 },
///       "confidence": 0.97
///     }
///   ]
/// }
/// ```
pub struct JsonRegionSource;

impl JsonRegionSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRegionSource {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_snapshot(raw: &str) -> Result<RegionSnapshot, SourceError> {
    let mut snapshot: RegionSnapshot =
        serde_json::from_str(raw).map_err(|e| SourceError::InvalidInput(e.to_string()))?;

    // Older snapshots omit the joined text; rebuild it from the regions.
    if snapshot.text.is_empty() {
        snapshot.text = snapshot
            .regions
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
    }

    Ok(snapshot)
}

#[async_trait]
impl RegionSource for JsonRegionSource {
    async fn capture(&self, input: &SnapshotInput) -> Result<RegionSnapshot, SourceError> {
        match input {
            SnapshotInput::FilePath(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| SourceError::Backend(e.to_string()))?;
                parse_snapshot(&raw)
            }
            SnapshotInput::Bytes(bytes) => {
                let raw = std::str::from_utf8(bytes)
                    .map_err(|e| SourceError::InvalidInput(e.to_string()))?;
                parse_snapshot(raw)
            }
        }
    }
}
