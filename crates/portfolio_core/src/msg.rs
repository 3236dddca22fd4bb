use url::Url;

use crate::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a section from the palette (or typed its command).
    SectionChosen(Section),
    /// User opened a project from the list.
    ProjectChosen { id: String },
    /// User clicked "Back to projects" in the detail view.
    BackToProjects,
    /// Pointer entered an element that previews a command.
    HoverEntered(String),
    /// Pointer left the previewing element.
    HoverLeft,
    /// User clicked a screenshot to see it full size.
    ImageOpened { path: String },
    /// User dismissed the full-size screenshot.
    ImageClosed,
    /// Browser back/forward landed on `location`.
    BrowserNavigated(Url),
}
