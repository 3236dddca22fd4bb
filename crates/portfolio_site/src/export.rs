use std::path::{Path, PathBuf};
use std::sync::Arc;

use portfolio_core::{update, Catalog, DeploymentMode, Effect, ViewState};
use portfolio_logging::{portfolio_debug, portfolio_info};
use serde_json::json;
use url::Url;

use crate::html::PageRenderer;
use crate::links::SnapshotLinks;
use crate::persist::{AtomicFileWriter, WriteError};
use crate::snapshot::canonical_snapshots;

#[derive(Clone)]
pub struct ExportOptions {
    pub mode: DeploymentMode,
    /// Scheme and host the snapshots pretend to be served from.
    pub origin: Url,
    pub manifest_filename: Option<String>,
    pub generated_utc: Arc<dyn Fn() -> String + Send + Sync>,
}

impl ExportOptions {
    pub fn new(mode: DeploymentMode, origin: Url) -> Self {
        Self {
            mode,
            origin,
            manifest_filename: Some("manifest.json".to_string()),
            generated_utc: Arc::new(|| "1970-01-01T00:00:00Z".to_string()),
        }
    }
}

impl std::fmt::Debug for ExportOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportOptions")
            .field("mode", &self.mode)
            .field("origin", &self.origin.as_str())
            .field("manifest_filename", &self.manifest_filename)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub page_count: usize,
    pub pages: Vec<PathBuf>,
    pub manifest_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("write error: {0}")]
    Write(#[from] WriteError),
    #[error("invalid site root: {0}")]
    SiteRoot(#[from] url::ParseError),
}

/// Renders every canonical view of `catalog` into `output_dir` and, when
/// configured, a JSON manifest describing them.
pub fn export_site(
    output_dir: &Path,
    catalog: &Catalog,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    let base_path = options.mode.base_path();
    let site_root = options.origin.join(&base_path)?;
    let links = SnapshotLinks::new(base_path, catalog);
    let renderer = PageRenderer::new(options.mode, *catalog, &links);
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());

    let mut pages = Vec::new();
    let mut entries = Vec::new();
    for plan in canonical_snapshots(catalog) {
        let mut state = ViewState::from_location(site_root.clone());
        let mut location = site_root.clone();
        for msg in plan.steps {
            let (next, effects) = update(state, msg);
            state = next;
            for effect in effects {
                match effect {
                    Effect::PushHistory { url } => location = url,
                }
            }
        }

        let view = state.view(catalog);
        let html = renderer.render(&view);
        let path = writer.write(&plan.path, &html)?;
        portfolio_debug!("Wrote snapshot {} ({} bytes)", plan.path, html.len());

        entries.push(json!({
            "file": plan.path,
            "query": location.query().unwrap_or_default(),
            "command": view.command_text,
        }));
        pages.push(path);
    }

    let manifest_path = match &options.manifest_filename {
        Some(name) => {
            let manifest = json!({
                "generated_utc": (options.generated_utc)(),
                "base_path": options.mode.base_path(),
                "page_count": entries.len(),
                "pages": entries,
            });
            Some(writer.write(name, &manifest.to_string())?)
        }
        None => None,
    };

    portfolio_info!(
        "Exported {} pages to {:?} (mode {:?})",
        pages.len(),
        output_dir,
        options.mode
    );

    Ok(ExportSummary {
        page_count: pages.len(),
        pages,
        manifest_path,
    })
}
