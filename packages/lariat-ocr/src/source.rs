use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::region::TextRegion;

#[derive(Debug, Clone)]
pub enum SnapshotInput {
    FilePath(PathBuf),
    Bytes(Vec<u8>),
}

/// The regions recognized in one captured screenshot, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSnapshot {
    #[serde(default)]
    pub text: String,
    pub regions: Vec<TextRegion>,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported operation")]
    Unsupported,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Producer of region snapshots. A selection session consumes exactly one
/// snapshot; a new capture replaces it wholesale.
#[async_trait]
pub trait RegionSource: Send + Sync {
    async fn capture(&self, input: &SnapshotInput) -> Result<RegionSnapshot, SourceError>;
}
