use crate::catalog::{Catalog, ProjectRecord, ProjectStatus};
use crate::content::PALETTE;
use crate::section::{ActiveSection, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioViewModel {
    pub command_text: String,
    pub active_section: ActiveSection,
    pub content: ContentView,
    pub palette: Vec<PaletteRowView>,
    /// Raw (unprefixed) path of the screenshot shown full size, if any.
    pub modal_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentView {
    ProjectList(Vec<ProjectRowView>),
    ProjectDetail(Box<ProjectDetailView>),
    About,
    Contact,
    /// Nothing matches: unknown section or a project id the catalog lacks.
    #[default]
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Code,
    Live,
    Video,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Code => "View Code",
            LinkKind::Live => "Live Demo",
            LinkKind::Video => "Video Demo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRowView {
    /// One-based display number.
    pub number: usize,
    pub id: &'static str,
    pub name: &'static str,
    /// Command previewed while hovering the row.
    pub command: String,
    pub status: ProjectStatus,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub links: Vec<ProjectLink>,
    pub image: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailView {
    pub summary: ProjectRowView,
    pub extended_description: Option<&'static str>,
    pub key_features: &'static [&'static str],
    pub technical_details: Option<&'static str>,
    pub unique_aspect: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRowView {
    pub section: Section,
    pub command: String,
    pub description: &'static str,
    pub active: bool,
}

/// A `project` key takes precedence over `section`: when one is selected the
/// detail view renders (or nothing, if the id is unknown) whatever the
/// section says.
pub(crate) fn build_content(
    section: &ActiveSection,
    selected_project: Option<&str>,
    catalog: &Catalog,
) -> ContentView {
    if let Some(id) = selected_project {
        return match catalog.find_by_id(id) {
            Some(record) => {
                let number = catalog.index_of(id).map_or(0, |index| index + 1);
                ContentView::ProjectDetail(Box::new(detail_view(number, record)))
            }
            None => ContentView::Blank,
        };
    }

    match section.known() {
        Some(Section::Projects) => ContentView::ProjectList(
            catalog
                .all()
                .iter()
                .enumerate()
                .map(|(index, record)| row_view(index + 1, record))
                .collect(),
        ),
        Some(Section::About) => ContentView::About,
        Some(Section::Contact) => ContentView::Contact,
        None => ContentView::Blank,
    }
}

pub(crate) fn build_palette(section: &ActiveSection) -> Vec<PaletteRowView> {
    PALETTE
        .iter()
        .map(|entry| PaletteRowView {
            section: entry.section,
            command: entry.section.command(),
            description: entry.description,
            active: section.is(entry.section),
        })
        .collect()
}

fn row_view(number: usize, record: &'static ProjectRecord) -> ProjectRowView {
    let links = [
        (LinkKind::Code, record.github_url),
        (LinkKind::Live, record.live_url),
        (LinkKind::Video, record.video_url),
    ]
    .into_iter()
    .filter_map(|(kind, url)| url.map(|url| ProjectLink { kind, url }))
    .collect();

    ProjectRowView {
        number,
        id: record.id,
        name: record.name,
        command: record.command(),
        status: record.status,
        description: record.description,
        technologies: record.technologies,
        links,
        image: record.image,
    }
}

fn detail_view(number: usize, record: &'static ProjectRecord) -> ProjectDetailView {
    ProjectDetailView {
        summary: row_view(number, record),
        extended_description: record.extended_description,
        key_features: record.key_features.unwrap_or(&[]),
        technical_details: record.technical_details,
        unique_aspect: record.unique_aspect,
    }
}
