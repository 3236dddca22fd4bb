//! Renders a [`PortfolioViewModel`] as a self-contained HTML document.
//!
//! Interactive elements carry `data-command` (the hover preview) and
//! `data-action` attributes so a client script can drive the same messages
//! the terminal shell sends.

use portfolio_core::content::{
    AboutBody, ABOUT_BLOCKS, ABOUT_INTRO, BACK_TO_PROJECTS, CONTACT_INTRO, CONTACT_LINKS,
    CONTACT_NOTE, CONTACT_NOTE_HEADING, HEADER_HINT, HEADER_WORKDIR, HEADER_WORKDIR_LABEL,
    PROJECTS_INTRO, SITE_DESCRIPTION, SITE_TITLE,
};
use portfolio_core::{
    asset_path, Catalog, ContentView, DeploymentMode, PaletteRowView, PortfolioViewModel,
    ProjectDetailView, ProjectLink, ProjectRowView, ProjectStatus, Section,
};

use crate::links::LinkResolver;

const STYLESHEET: &str = r#"
body { margin: 0; background: #fff; font-family: ui-monospace, Menlo, monospace; color: #374151; }
.terminal { max-width: 72rem; margin: 0 auto; height: 100dvh; display: flex; flex-direction: column; }
.terminal__content { flex: 1; overflow-y: auto; padding: 1.5rem; }
.terminal__prompt { flex-shrink: 0; padding: 1rem 1.5rem 1.5rem; border-top: 1px solid #d1d5db; max-height: 40vh; }
.banner { display: flex; gap: .5rem; border: 1px solid #fdba74; border-radius: .5rem; padding: 1rem; margin-bottom: 1.5rem; }
.banner__mark { color: #fdba74; }
.banner__hint, .banner__workdir { color: #4b5563; font-size: .875rem; margin-top: .25rem; }
.project { margin-bottom: 1.5rem; }
.project__heading { display: flex; gap: .75rem; padding: .5rem; color: inherit; text-decoration: none; }
.project__number { color: #3b82f6; }
.project__status--completed { color: #16a34a; margin-left: auto; }
.project__status--in-progress { color: #ca8a04; margin-left: auto; }
.project__body { margin-left: 2rem; padding: 1rem; background: #f9fafb; border-radius: .5rem; }
.project__image { width: 16rem; height: 10rem; object-fit: cover; border: 1px solid #e5e7eb; }
.chip { display: inline-block; padding: .25rem .5rem; margin: .125rem; background: #dbeafe; color: #1d4ed8; border-radius: .25rem; font-size: .875rem; }
.input-bar { display: flex; gap: .5rem; border: 1px solid #d1d5db; border-radius: .5rem; padding: .75rem; }
.input-bar input { flex: 1; border: none; outline: none; font: inherit; background: transparent; }
.palette__entry { display: flex; gap: 1rem; padding: .5rem; color: inherit; text-decoration: none; border-radius: .25rem; }
.palette__entry--active { background: #dbeafe; }
.palette__command { color: #2563eb; min-width: 5rem; }
.card { padding: 1rem; background: #f9fafb; border-radius: .5rem; margin-bottom: 1rem; }
.modal { position: fixed; inset: 0; background: rgba(0, 0, 0, .75); display: flex; align-items: center; justify-content: center; }
.modal img { max-width: 100%; max-height: 90vh; object-fit: contain; }
"#;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub struct PageRenderer<'a> {
    mode: DeploymentMode,
    catalog: Catalog,
    links: &'a dyn LinkResolver,
}

impl<'a> PageRenderer<'a> {
    pub fn new(mode: DeploymentMode, catalog: Catalog, links: &'a dyn LinkResolver) -> Self {
        Self {
            mode,
            catalog,
            links,
        }
    }

    pub fn render(&self, view: &PortfolioViewModel) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<meta name="description" content="{description}">
<style>{css}</style>
</head>
<body class="custom-scrollbar">
<div class="terminal">
<main class="terminal__content">
{banner}
<section class="content" data-section="{section}">
{content}
</section>
</main>
<footer class="terminal__prompt">
<div class="input-bar"><span>&gt;</span><input type="text" readonly value="{command}"><span class="cursor"></span></div>
<nav class="palette">
{palette}
</nav>
</footer>
</div>
{modal}
</body>
</html>
"#,
            title = escape_html(SITE_TITLE),
            description = escape_html(SITE_DESCRIPTION),
            css = STYLESHEET,
            banner = render_banner(),
            section = escape_html(view.active_section.as_str()),
            content = self.render_content(&view.content),
            command = escape_html(&view.command_text),
            palette = self.render_palette(&view.palette),
            modal = self.render_modal(view.modal_image.as_deref()),
        )
    }

    fn render_content(&self, content: &ContentView) -> String {
        match content {
            ContentView::ProjectList(rows) => self.render_project_list(rows),
            ContentView::ProjectDetail(detail) => self.render_project_detail(detail),
            ContentView::About => render_about(),
            ContentView::Contact => render_contact(),
            ContentView::Blank => String::new(),
        }
    }

    fn render_project_list(&self, rows: &[ProjectRowView]) -> String {
        let mut html = format!(
            "<p class=\"intro\">{}</p>\n<div class=\"projects\">\n",
            escape_html(PROJECTS_INTRO)
        );
        for row in rows {
            let href = self.project_href(row);
            html.push_str(&format!(
                "<article class=\"project\" data-project-id=\"{id}\">\n\
                 <a class=\"project__heading\" href=\"{href}\" data-command=\"{command}\">\
                 <span class=\"project__number\">{number}.</span> \
                 <span class=\"project__name\">{name}</span>{status}\
                 <span class=\"project__hint\">Enter to view details</span></a>\n\
                 <div class=\"project__body\" data-command=\"{command}\">\n\
                 <p class=\"project__description\">{description}</p>\n{technologies}{links}{image}\
                 </div>\n</article>\n",
                id = escape_html(row.id),
                href = escape_html(&href),
                command = escape_html(&row.command),
                number = row.number,
                name = escape_html(row.name),
                status = render_status(row.status),
                description = escape_html(row.description),
                technologies = render_technologies(row.technologies),
                links = render_links(&row.links),
                image = self.render_image(row, "project__image", false),
            ));
        }
        html.push_str("</div>");
        html
    }

    fn render_project_detail(&self, detail: &ProjectDetailView) -> String {
        let row = &detail.summary;
        let back_href = self.links.section_href(Section::Projects);
        let mut html = format!(
            "<a class=\"back\" href=\"{href}\" data-action=\"back-to-projects\" \
             data-command=\"{command}\">&larr; {label}</a>\n\
             <article class=\"project project--detail\" data-project-id=\"{id}\">\n\
             <div class=\"project__heading\"><span class=\"project__number\">{number}.</span> \
             <span class=\"project__name\">{name}</span>{status}</div>\n\
             <div class=\"project__body\">\n",
            href = escape_html(&back_href),
            command = escape_html(&Section::Projects.command()),
            label = escape_html(BACK_TO_PROJECTS),
            id = escape_html(row.id),
            number = row.number,
            name = escape_html(row.name),
            status = render_status(row.status),
        );

        html.push_str("<section class=\"overview\"><h3>Project Overview</h3>\n");
        html.push_str(&format!("<p>{}</p>\n", escape_html(row.description)));
        if let Some(extended) = detail.extended_description {
            html.push_str(&format!("<p>{}</p>\n", escape_html(extended)));
        }
        html.push_str("</section>\n");

        if !detail.key_features.is_empty() {
            html.push_str("<section class=\"features\"><h3>Key Features</h3>\n<ul>\n");
            for feature in detail.key_features {
                html.push_str(&format!("<li>{}</li>\n", escape_html(feature)));
            }
            html.push_str("</ul>\n</section>\n");
        }
        if let Some(details) = detail.technical_details {
            html.push_str(&format!(
                "<section class=\"technical\"><h3>Technical Implementation</h3>\n<p>{}</p>\n</section>\n",
                escape_html(details)
            ));
        }
        if let Some(unique) = detail.unique_aspect {
            html.push_str(&format!(
                "<section class=\"unique\"><h3>What Makes It Unique</h3>\n<p>{}</p>\n</section>\n",
                escape_html(unique)
            ));
        }

        html.push_str(&render_technologies(row.technologies));
        html.push_str(&render_links(&row.links));
        html.push_str(&self.render_image(row, "project__image project__image--large", true));
        html.push_str("</div>\n</article>");
        html
    }

    fn render_image(&self, row: &ProjectRowView, class: &str, zoomable: bool) -> String {
        let Some(image) = row.image else {
            return String::new();
        };
        let zoom = if zoomable {
            format!(
                " data-action=\"open-image\" data-image=\"{}\"",
                escape_html(image)
            )
        } else {
            String::new()
        };
        format!(
            "<img class=\"{class}\" src=\"{src}\" alt=\"{alt}\"{zoom}>\n",
            class = class,
            src = escape_html(&asset_path(self.mode, image)),
            alt = escape_html(&format!("{} preview", row.name)),
            zoom = zoom,
        )
    }

    fn render_palette(&self, rows: &[PaletteRowView]) -> String {
        rows.iter()
            .map(|row| {
                let class = if row.active {
                    "palette__entry palette__entry--active"
                } else {
                    "palette__entry"
                };
                format!(
                    "<a class=\"{class}\" href=\"{href}\" data-command=\"{command}\">\
                     <span class=\"palette__command\">{command}</span>\
                     <span class=\"palette__description\">{description}</span></a>",
                    class = class,
                    href = escape_html(&self.links.section_href(row.section)),
                    command = escape_html(&row.command),
                    description = escape_html(row.description),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_modal(&self, image: Option<&str>) -> String {
        match image {
            Some(path) => format!(
                "<div class=\"modal\" data-action=\"close-image\">\
                 <img src=\"{src}\" alt=\"Full size preview\">\
                 <button class=\"modal__close\" data-action=\"close-image\" aria-label=\"Close\">&times;</button>\
                 </div>",
                src = escape_html(&asset_path(self.mode, path)),
            ),
            None => String::new(),
        }
    }

    // Rows come from the catalog, so a miss here means the view model was
    // built from a different catalog; fall back to the list.
    fn project_href(&self, row: &ProjectRowView) -> String {
        match self.catalog.find_by_id(row.id) {
            Some(record) => self.links.project_href(record),
            None => self.links.section_href(Section::Projects),
        }
    }
}

fn render_banner() -> String {
    format!(
        "<header class=\"banner\"><span class=\"banner__mark\">✻</span><div>\
         <div class=\"banner__title\">{title}</div>\
         <div class=\"banner__hint\">{hint}</div>\
         <div class=\"banner__workdir\"><span>{label}</span> {workdir}</div>\
         </div></header>",
        title = escape_html(SITE_TITLE),
        hint = escape_html(HEADER_HINT),
        label = escape_html(HEADER_WORKDIR_LABEL),
        workdir = escape_html(HEADER_WORKDIR),
    )
}

fn render_status(status: ProjectStatus) -> String {
    let modifier = match status {
        ProjectStatus::Completed => "completed",
        ProjectStatus::InProgress => "in-progress",
    };
    format!(
        "<span class=\"project__status project__status--{modifier}\">{label}</span>",
        label = status.label(),
    )
}

fn render_technologies(technologies: &[&str]) -> String {
    let chips: String = technologies
        .iter()
        .map(|tech| format!("<span class=\"chip\">{}</span>", escape_html(tech)))
        .collect();
    format!("<div class=\"technologies\"><span>Technologies:</span> {chips}</div>\n")
}

fn render_links(links: &[ProjectLink]) -> String {
    if links.is_empty() {
        return String::new();
    }
    let anchors: Vec<String> = links
        .iter()
        .map(|link| {
            format!(
                "<a class=\"link\" href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>",
                href = escape_html(link.url),
                label = link.kind.label(),
            )
        })
        .collect();
    format!("<div class=\"links\">{}</div>\n", anchors.join(" "))
}

fn render_about() -> String {
    let mut html = format!("<p class=\"intro\">{}</p>\n", escape_html(ABOUT_INTRO));
    for block in ABOUT_BLOCKS {
        html.push_str(&format!(
            "<div class=\"card\"><h3>{icon} {heading}</h3>\n",
            icon = block.icon,
            heading = escape_html(block.heading),
        ));
        match block.body {
            AboutBody::Text(text) => html.push_str(&format!("<p>{}</p>\n", escape_html(text))),
            AboutBody::Skills(groups) => {
                html.push_str("<div class=\"skills\">\n");
                for group in groups {
                    html.push_str(&format!(
                        "<div class=\"skills__group\"><span>{}:</span><ul>",
                        escape_html(group.title)
                    ));
                    for item in group.items {
                        html.push_str(&format!("<li>{}</li>", escape_html(item)));
                    }
                    html.push_str("</ul></div>\n");
                }
                html.push_str("</div>\n");
            }
        }
        html.push_str("</div>\n");
    }
    html
}

fn render_contact() -> String {
    let mut html = format!("<p class=\"intro\">{}</p>\n", escape_html(CONTACT_INTRO));
    for link in CONTACT_LINKS {
        let target = if link.external {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<div class=\"card contact\"><span>{icon}</span> <span>{label}:</span> \
             <a href=\"{href}\"{target}>{text}</a></div>\n",
            icon = link.icon,
            label = escape_html(link.label),
            href = escape_html(link.href),
            target = target,
            text = escape_html(link.text),
        ));
    }
    html.push_str(&format!(
        "<div class=\"card note\"><h3>{}</h3>\n<p>{}</p>\n</div>\n",
        escape_html(CONTACT_NOTE_HEADING),
        escape_html(CONTACT_NOTE)
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_html("Shortcut Finder ✻"), "Shortcut Finder ✻");
    }
}
