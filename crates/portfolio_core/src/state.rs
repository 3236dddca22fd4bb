use url::Url;

use crate::catalog::Catalog;
use crate::query::{read_location, rewrite_query, ParamUpdate, PROJECT_PARAM, SECTION_PARAM};
use crate::section::{ActiveSection, Section};
use crate::view_model::{self, PortfolioViewModel};

/// Navigation state of one session, mirrored into the location's query.
///
/// `location` is the last URL this state was read from or written to; it
/// supplies the path and unrelated parameters when the next URL is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    location: Url,
    section: ActiveSection,
    selected_project: Option<String>,
    hover_preview: Option<String>,
    modal_image: Option<String>,
    dirty: bool,
}

impl ViewState {
    /// Builds the initial state from the page's location. Ids are not
    /// checked against the catalog.
    pub fn from_location(location: Url) -> Self {
        let params = read_location(&location);
        Self {
            location,
            section: params.section,
            selected_project: params.project,
            hover_preview: None,
            modal_image: None,
            dirty: true,
        }
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn section(&self) -> &ActiveSection {
        &self.section
    }

    pub fn selected_project(&self) -> Option<&str> {
        self.selected_project.as_deref()
    }

    pub fn hover_preview(&self) -> Option<&str> {
        self.hover_preview.as_deref()
    }

    pub fn modal_image(&self) -> Option<&str> {
        self.modal_image.as_deref()
    }

    /// Text shown in the input bar: hover preview, then the selected
    /// project, then the section.
    pub fn command_text(&self, catalog: &Catalog) -> String {
        if let Some(text) = &self.hover_preview {
            return text.clone();
        }
        if let Some(id) = &self.selected_project {
            return match catalog.find_by_id(id) {
                Some(record) => record.command(),
                None => Section::Projects.command(),
            };
        }
        format!("/{}", self.section.as_str())
    }

    pub fn view(&self, catalog: &Catalog) -> PortfolioViewModel {
        PortfolioViewModel {
            command_text: self.command_text(catalog),
            active_section: self.section.clone(),
            content: view_model::build_content(
                &self.section,
                self.selected_project.as_deref(),
                catalog,
            ),
            palette: view_model::build_palette(&self.section),
            modal_image: self.modal_image.clone(),
        }
    }

    /// Returns whether anything changed since the last call, then resets.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn navigate_to_section(&mut self, section: Section) -> Url {
        self.section = ActiveSection::Known(section);
        self.selected_project = None;
        self.reset_transients();
        self.push_location(&[
            (SECTION_PARAM, ParamUpdate::Set(section.as_str().to_string())),
            (PROJECT_PARAM, ParamUpdate::Remove),
        ])
    }

    pub(crate) fn select_project(&mut self, id: String) -> Url {
        let update = ParamUpdate::Set(id.clone());
        self.selected_project = Some(id);
        self.reset_transients();
        self.push_location(&[(PROJECT_PARAM, update)])
    }

    pub(crate) fn clear_selection(&mut self) -> Url {
        self.selected_project = None;
        self.reset_transients();
        self.push_location(&[(PROJECT_PARAM, ParamUpdate::Remove)])
    }

    /// Empty text previews nothing.
    pub(crate) fn set_hover_preview(&mut self, text: Option<String>) {
        let text = text.filter(|t| !t.is_empty());
        if self.hover_preview != text {
            self.hover_preview = text;
            self.dirty = true;
        }
    }

    pub(crate) fn set_modal_image(&mut self, path: Option<String>) {
        if self.modal_image != path {
            self.modal_image = path;
            self.dirty = true;
        }
    }

    /// Re-derives section and selection from `location` without producing a
    /// history entry. Returns whether the view changed.
    pub(crate) fn apply_browser_location(&mut self, location: Url) -> bool {
        let params = read_location(&location);
        self.location = location;
        if params.section == self.section && params.project == self.selected_project {
            return false;
        }
        self.section = params.section;
        self.selected_project = params.project;
        self.modal_image = None;
        self.dirty = true;
        true
    }

    fn push_location(&mut self, updates: &[(&str, ParamUpdate)]) -> Url {
        self.location = rewrite_query(&self.location, updates);
        self.dirty = true;
        self.location.clone()
    }

    // The element that owned the hover or the overlay is re-rendered away.
    fn reset_transients(&mut self) {
        self.hover_preview = None;
        self.modal_image = None;
    }
}
