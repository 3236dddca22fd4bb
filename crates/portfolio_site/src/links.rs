use std::collections::HashMap;

use portfolio_core::{Catalog, ProjectRecord, Section, PROJECT_PARAM, SECTION_PARAM};
use url::form_urlencoded::byte_serialize;

use crate::snapshot::{project_snapshot_paths, section_snapshot_path};

/// Decides where rendered anchors point.
pub trait LinkResolver {
    fn section_href(&self, section: Section) -> String;
    fn project_href(&self, record: &ProjectRecord) -> String;
}

/// Single-page links: every view is the site root plus a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLinks {
    base_path: String,
}

impl QueryLinks {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl LinkResolver for QueryLinks {
    fn section_href(&self, section: Section) -> String {
        format!("{}?{}={}", self.base_path, SECTION_PARAM, section.as_str())
    }

    fn project_href(&self, record: &ProjectRecord) -> String {
        let id: String = byte_serialize(record.id.as_bytes()).collect();
        format!(
            "{}?{}={}&{}={}",
            self.base_path,
            SECTION_PARAM,
            Section::Projects.as_str(),
            PROJECT_PARAM,
            id
        )
    }
}

/// Links between pre-rendered snapshot files of a static export of one
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLinks {
    base_path: String,
    project_paths: HashMap<&'static str, String>,
}

impl SnapshotLinks {
    pub fn new(base_path: impl Into<String>, catalog: &Catalog) -> Self {
        Self {
            base_path: base_path.into(),
            project_paths: project_snapshot_paths(catalog),
        }
    }
}

impl LinkResolver for SnapshotLinks {
    fn section_href(&self, section: Section) -> String {
        format!("{}{}", self.base_path, section_snapshot_path(section))
    }

    fn project_href(&self, record: &ProjectRecord) -> String {
        match self.project_paths.get(record.id) {
            Some(path) => format!("{}{}", self.base_path, path),
            // Not part of the export; the list is the closest page.
            None => self.section_href(Section::Projects),
        }
    }
}
