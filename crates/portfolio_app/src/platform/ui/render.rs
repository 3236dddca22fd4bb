use portfolio_core::content::{
    AboutBody, ABOUT_BLOCKS, ABOUT_INTRO, BACK_TO_PROJECTS, CONTACT_INTRO, CONTACT_LINKS,
    CONTACT_NOTE, CONTACT_NOTE_HEADING, HEADER_HINT, HEADER_WORKDIR, HEADER_WORKDIR_LABEL,
    PROJECTS_INTRO, SITE_TITLE,
};
use portfolio_core::{
    asset_path, ContentView, DeploymentMode, PaletteRowView, PortfolioViewModel,
    ProjectDetailView, ProjectLink, ProjectRowView,
};

use super::constants::*;

/// Renders a full terminal frame: banner, content, input bar and palette.
pub fn render(view: &PortfolioViewModel, mode: DeploymentMode) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("✻ {SITE_TITLE}"));
    lines.push(format!("  {HEADER_HINT}"));
    lines.push(format!("  {HEADER_WORKDIR_LABEL} {HEADER_WORKDIR}"));
    lines.push(String::new());

    match &view.content {
        ContentView::ProjectList(rows) => render_project_list(&mut lines, rows, mode),
        ContentView::ProjectDetail(detail) => render_project_detail(&mut lines, detail, mode),
        ContentView::About => render_about(&mut lines),
        ContentView::Contact => render_contact(&mut lines),
        ContentView::Blank => {}
    }

    lines.push("─".repeat(RULE_WIDTH));
    lines.push(format!("{PROMPT}{}", view.command_text));
    lines.extend(view.palette.iter().map(format_palette_row));
    if let Some(image) = &view.modal_image {
        lines.push(String::new());
        lines.push(format!("[image] {} (:close to dismiss)", asset_path(mode, image)));
    }
    lines
}

fn render_project_list(lines: &mut Vec<String>, rows: &[ProjectRowView], mode: DeploymentMode) {
    lines.push(PROJECTS_INTRO.to_string());
    for row in rows {
        lines.push(String::new());
        lines.push(format!(
            "› {}. {} [{}] · Enter to view details",
            row.number,
            row.name,
            row.status.label()
        ));
        lines.push(format!("{INDENT}{}", row.description));
        lines.push(format!("{INDENT}Technologies: {}", row.technologies.join(", ")));
        if let Some(links) = format_links(&row.links) {
            lines.push(format!("{INDENT}{links}"));
        }
        if let Some(image) = row.image {
            lines.push(format!("{INDENT}Image: {}", asset_path(mode, image)));
        }
    }
}

fn render_project_detail(lines: &mut Vec<String>, detail: &ProjectDetailView, mode: DeploymentMode) {
    let row = &detail.summary;
    lines.push(format!("← {BACK_TO_PROJECTS} (..)"));
    lines.push(String::new());
    lines.push(format!(
        "⌄ {}. {} [{}]",
        row.number,
        row.name,
        row.status.label()
    ));

    lines.push(format!("{INDENT}Project Overview"));
    lines.push(format!("{INDENT}{INDENT}{}", row.description));
    if let Some(extended) = detail.extended_description {
        lines.push(format!("{INDENT}{INDENT}{extended}"));
    }
    if !detail.key_features.is_empty() {
        lines.push(format!("{INDENT}Key Features"));
        for feature in detail.key_features {
            lines.push(format!("{INDENT}{INDENT}• {feature}"));
        }
    }
    if let Some(details) = detail.technical_details {
        lines.push(format!("{INDENT}Technical Implementation"));
        lines.push(format!("{INDENT}{INDENT}{details}"));
    }
    if let Some(unique) = detail.unique_aspect {
        lines.push(format!("{INDENT}What Makes It Unique"));
        lines.push(format!("{INDENT}{INDENT}{unique}"));
    }
    lines.push(format!("{INDENT}Technologies: {}", row.technologies.join(", ")));
    if let Some(links) = format_links(&row.links) {
        lines.push(format!("{INDENT}{links}"));
    }
    if let Some(image) = row.image {
        lines.push(format!(
            "{INDENT}Image: {} (:image to enlarge)",
            asset_path(mode, image)
        ));
    }
}

fn render_about(lines: &mut Vec<String>) {
    lines.push(ABOUT_INTRO.to_string());
    for block in ABOUT_BLOCKS {
        lines.push(String::new());
        lines.push(format!("{} {}", block.icon, block.heading));
        match block.body {
            AboutBody::Text(text) => lines.push(format!("{INDENT}{text}")),
            AboutBody::Skills(groups) => {
                for group in groups {
                    lines.push(format!("{INDENT}{}: {}", group.title, group.items.join(", ")));
                }
            }
        }
    }
}

fn render_contact(lines: &mut Vec<String>) {
    lines.push(CONTACT_INTRO.to_string());
    for link in CONTACT_LINKS {
        lines.push(format!("{INDENT}{} {}: {}", link.icon, link.label, link.text));
    }
    lines.push(String::new());
    lines.push(CONTACT_NOTE_HEADING.to_string());
    lines.push(format!("{INDENT}{CONTACT_NOTE}"));
}

fn format_links(links: &[ProjectLink]) -> Option<String> {
    if links.is_empty() {
        return None;
    }
    let parts: Vec<String> = links
        .iter()
        .map(|link| format!("{}: {}", link.kind.label(), link.url))
        .collect();
    Some(parts.join(" | "))
}

fn format_palette_row(row: &PaletteRowView) -> String {
    let marker = if row.active { '*' } else { ' ' };
    format!("{marker} {:<12}{}", row.command, row.description)
}
