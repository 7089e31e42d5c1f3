//! Scan combination entry points

use crate::report::ErrorReport;
use crate::request::CombineRequest;
use floorscan_combine::{combine_scans, AssetLoader, CombineConfig, CompositeWriter, FileAssetLoader, FileSceneWriter};
use floorscan_core::ErrorKind;
use serde_json::{json, Value};
use std::sync::Arc;

/// Scan combination with pluggable loader and writer
#[derive(Clone)]
pub struct CombineService {
    loader: Arc<dyn AssetLoader>,
    writer: Arc<dyn CompositeWriter>,
    config: CombineConfig,
}

impl CombineService {
    /// Service reading and writing scenes on disk
    pub fn new(config: CombineConfig) -> Self {
        Self::with_collaborators(Arc::new(FileAssetLoader), Arc::new(FileSceneWriter), config)
    }

    pub fn with_collaborators(
        loader: Arc<dyn AssetLoader>,
        writer: Arc<dyn CompositeWriter>,
        config: CombineConfig,
    ) -> Self {
        Self { loader, writer, config }
    }

    pub fn config(&self) -> &CombineConfig {
        &self.config
    }

    /// Blocking combination; returns the output path on success
    pub fn combine_scans(&self, request: &CombineRequest) -> Result<String, ErrorReport> {
        combine_scans(
            request.paths.as_slice(),
            &request.transforms,
            &request.output_path,
            self.loader.as_ref(),
            self.writer.as_ref(),
            &self.config,
        )
        .map_err(|e| {
            tracing::warn!(
                output = %request.output_path,
                code = e.kind().code(),
                error = %e,
                "Scan combination failed"
            );
            ErrorReport::from(e)
        })
    }

    /// Run [`Self::combine_scans`] on the blocking thread pool
    pub async fn combine_scans_async(&self, request: CombineRequest) -> Result<String, ErrorReport> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.combine_scans(&request))
            .await
            .map_err(|e| ErrorReport::worker_failure(ErrorKind::ExportFailure, e))?
    }

    /// Handle a JSON request, answering `{ "outputPath": "..." }`
    pub async fn handle_json(&self, request: Value) -> Result<Value, ErrorReport> {
        let request = CombineRequest::from_json(&request).map_err(ErrorReport::from)?;
        let output_path = self.combine_scans_async(request).await?;
        Ok(json!({ "outputPath": output_path }))
    }
}
