use std::collections::{HashMap, HashSet};

use portfolio_core::{Catalog, Msg, ProjectRecord, Section};

/// One pre-rendered view: where it is written and the navigation that
/// produces it from a fresh session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPlan {
    pub path: String,
    pub steps: Vec<Msg>,
}

/// Every view reachable by clicking: each section, then each project.
pub fn canonical_snapshots(catalog: &Catalog) -> Vec<SnapshotPlan> {
    let sections = Section::ALL.into_iter().map(|section| SnapshotPlan {
        path: section_snapshot_path(section),
        steps: vec![Msg::SectionChosen(section)],
    });
    let mut paths = project_snapshot_paths(catalog);
    let projects = catalog.all().iter().map(move |record| SnapshotPlan {
        path: paths
            .remove(record.id)
            .unwrap_or_else(|| preferred_project_path(record)),
        steps: vec![
            Msg::SectionChosen(Section::Projects),
            Msg::ProjectChosen {
                id: record.id.to_string(),
            },
        ],
    });
    sections.chain(projects).collect()
}

pub fn section_snapshot_path(section: Section) -> String {
    match section {
        Section::Projects => "index.html".to_string(),
        other => format!("{}.html", other.as_str()),
    }
}

/// File of `record`'s detail page within an export of `catalog`.
pub fn project_snapshot_path(catalog: &Catalog, record: &ProjectRecord) -> String {
    project_snapshot_paths(catalog)
        .remove(record.id)
        .unwrap_or_else(|| preferred_project_path(record))
}

/// Detail page file for every project, keyed by id. Paths are unique: a
/// project whose name maps onto an earlier project's file gets
/// `projects/project-<id>.html` instead.
pub fn project_snapshot_paths(catalog: &Catalog) -> HashMap<&'static str, String> {
    let mut taken = HashSet::new();
    let mut paths = HashMap::with_capacity(catalog.len());
    for record in catalog.all() {
        let mut path = preferred_project_path(record);
        let mut attempt = 1;
        while taken.contains(&path) {
            path = id_project_path(record.id, (attempt > 1).then_some(attempt));
            attempt += 1;
        }
        taken.insert(path.clone());
        paths.insert(record.id, path);
    }
    paths
}

fn preferred_project_path(record: &ProjectRecord) -> String {
    match sanitize_segment(&record.slug()) {
        Some(segment) => format!("projects/{segment}.html"),
        None => id_project_path(record.id, None),
    }
}

fn id_project_path(id: &str, suffix: Option<usize>) -> String {
    let segment =
        sanitize_segment(&format!("project-{id}")).unwrap_or_else(|| "project".to_string());
    match suffix {
        Some(n) => format!("projects/{segment}-{n}.html"),
        None => format!("projects/{segment}.html"),
    }
}

/// Makes a slug safe as a file name on every platform. `None` when nothing
/// usable is left.
fn sanitize_segment(input: &str) -> Option<String> {
    let mut compacted = String::with_capacity(input.len());
    let mut prev_underscore = false;
    for c in input.chars() {
        let c = if is_forbidden(c) { '_' } else { c };
        if c == '_' && prev_underscore {
            continue;
        }
        prev_underscore = c == '_';
        compacted.push(c);
    }

    let mut segment = compacted.trim_matches(&['_', '-', ' ', '.'][..]).to_string();
    if segment.is_empty() {
        return None;
    }
    if segment.len() > 80 {
        let mut end = 80;
        while !segment.is_char_boundary(end) {
            end -= 1;
        }
        segment.truncate(end);
    }
    if is_reserved_windows_name(&segment) {
        segment.push('_');
    }
    Some(segment)
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '#' | '%' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::ProjectStatus;

    fn record(id: &'static str, name: &'static str) -> ProjectRecord {
        record_const(id, name)
    }

    const fn record_const(id: &'static str, name: &'static str) -> ProjectRecord {
        ProjectRecord {
            id,
            name,
            status: ProjectStatus::Completed,
            description: "",
            technologies: &[],
            github_url: None,
            live_url: None,
            video_url: None,
            image: None,
            extended_description: None,
            key_features: None,
            technical_details: None,
            unique_aspect: None,
        }
    }

    #[test]
    fn builtin_catalog_yields_sections_then_projects() {
        let plans = canonical_snapshots(&Catalog::builtin());
        let paths: Vec<_> = plans.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "index.html",
                "about.html",
                "contact.html",
                "projects/robovibe.html",
                "projects/consenstris.html",
                "projects/songpad.html",
                "projects/bondsnap.html",
                "projects/shortcut-finder.html",
                "projects/emailsmart.html",
            ]
        );
    }

    #[test]
    fn unsafe_names_are_sanitized() {
        assert_eq!(
            preferred_project_path(&record("7", "C/C++: Tools?")),
            "projects/c_c++_-tools.html"
        );
        assert_eq!(preferred_project_path(&record("8", "Con")), "projects/con_.html");
        assert_eq!(preferred_project_path(&record("9", "???")), "projects/project-9.html");
    }

    #[test]
    fn colliding_names_fall_back_to_id_paths() {
        static RECORDS: [ProjectRecord; 4] = [
            record_const("a", "Foo Bar"),
            record_const("b", "foo  bar"),
            record_const("c", "project-b"),
            record_const("d", "FOO\tBAR"),
        ];
        let catalog = Catalog::new(&RECORDS);
        let paths = project_snapshot_paths(&catalog);

        assert_eq!(paths["a"], "projects/foo-bar.html");
        assert_eq!(paths["b"], "projects/project-b.html");
        assert_eq!(paths["c"], "projects/project-c.html");
        assert_eq!(paths["d"], "projects/project-d.html");
        assert_eq!(
            project_snapshot_path(&catalog, &RECORDS[1]),
            "projects/project-b.html"
        );

        let unique: HashSet<_> = canonical_snapshots(&catalog)
            .into_iter()
            .map(|plan| plan.path)
            .collect();
        assert_eq!(unique.len(), Section::ALL.len() + RECORDS.len());
    }
}
