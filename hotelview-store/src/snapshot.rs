use hotelview_core::{CoreError, SearchResult};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Malformed(#[from] CoreError),
}

/// Read a pre-fetched search result from a JSON file
pub async fn load_snapshot(path: impl AsRef<Path>) -> Result<SearchResult, SnapshotError> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path).await.map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let result = SearchResult::from_json(&json)?;
    tracing::info!(
        "Loaded snapshot for '{}' with {} of {} properties",
        result.search_parameters.query,
        result.properties.len(),
        result.total_results
    );
    Ok(result)
}
