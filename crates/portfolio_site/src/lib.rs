//! Portfolio site: HTML rendering and static snapshot export.
mod export;
mod html;
mod links;
mod persist;
mod snapshot;

pub use export::{export_site, ExportError, ExportOptions, ExportSummary};
pub use html::{escape_html, PageRenderer};
pub use links::{LinkResolver, QueryLinks, SnapshotLinks};
pub use persist::{ensure_output_dir, AtomicFileWriter, WriteError};
pub use snapshot::{
    canonical_snapshots, project_snapshot_path, project_snapshot_paths, section_snapshot_path,
    SnapshotPlan,
};
