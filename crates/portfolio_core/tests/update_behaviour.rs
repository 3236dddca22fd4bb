use std::sync::Once;

use portfolio_core::{
    read_location, update, ActiveSection, Catalog, ContentView, Effect, Msg, Section, ViewState,
};
use pretty_assertions::assert_eq;
use url::Url;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(portfolio_logging::initialize_for_tests);
}

fn state_at(raw: &str) -> ViewState {
    ViewState::from_location(Url::parse(raw).unwrap())
}

fn pushed_url(effects: &[Effect]) -> Url {
    match effects {
        [Effect::PushHistory { url }] => url.clone(),
        other => panic!("expected exactly one history push, got {other:?}"),
    }
}

#[test]
fn initialize_defaults_to_projects_without_selection() {
    init_logging();
    let state = state_at("http://localhost:3000/");

    assert_eq!(state.section(), &ActiveSection::Known(Section::Projects));
    assert_eq!(state.selected_project(), None);
    assert_eq!(state.hover_preview(), None);
    assert_eq!(state.command_text(&Catalog::builtin()), "/projects");
}

#[test]
fn initialize_does_not_validate_project_ids() {
    init_logging();
    let state = state_at("http://localhost:3000/?project=missing");

    assert_eq!(state.selected_project(), Some("missing"));
    assert_eq!(state.command_text(&Catalog::builtin()), "/projects");
    assert_eq!(state.view(&Catalog::builtin()).content, ContentView::Blank);
}

#[test]
fn navigate_to_section_round_trips_through_browser_navigation() {
    init_logging();
    let state = state_at("http://localhost:3000/?project=1");

    let (state, effects) = update(state, Msg::SectionChosen(Section::About));
    let url = pushed_url(&effects);
    assert_eq!(url.query(), Some("section=about"));
    assert_eq!(state.selected_project(), None);

    // Simulate landing on that same URL from a fresh session.
    let (restored, effects) = update(
        state_at("http://localhost:3000/?section=contact&project=4"),
        Msg::BrowserNavigated(url),
    );
    assert!(effects.is_empty());
    assert_eq!(restored.section(), &ActiveSection::Known(Section::About));
    assert_eq!(restored.selected_project(), None);
}

#[test]
fn select_then_clear_leaves_section_untouched() {
    init_logging();
    let state = state_at("http://localhost:3000/?section=projects");

    let (state, effects) = update(state, Msg::ProjectChosen { id: "3".to_string() });
    assert_eq!(pushed_url(&effects).query(), Some("section=projects&project=3"));

    let (state, effects) = update(state, Msg::BackToProjects);
    let url = pushed_url(&effects);
    assert_eq!(url.query(), Some("section=projects"));
    assert_eq!(state.location(), &url);
    assert_eq!(state.section(), &ActiveSection::Known(Section::Projects));
}

#[test]
fn select_then_clear_without_section_key_leaves_no_query() {
    init_logging();
    let state = state_at("http://localhost:3000/");

    let (state, _) = update(state, Msg::ProjectChosen { id: "3".to_string() });
    let (_, effects) = update(state, Msg::BackToProjects);

    let url = pushed_url(&effects);
    assert_eq!(url.query(), None);
    assert_eq!(url.as_str(), "http://localhost:3000/");
}

#[test]
fn command_text_follows_selection() {
    init_logging();
    let catalog = Catalog::builtin();
    let state = state_at("http://localhost:3000/?section=projects");

    let (state, _) = update(state, Msg::ProjectChosen { id: "0".to_string() });
    assert_eq!(state.command_text(&catalog), "/projects robovibe");

    let (state, _) = update(state, Msg::BackToProjects);
    assert_eq!(state.command_text(&catalog), "/projects");
}

#[test]
fn hover_overrides_command_text_and_never_touches_url() {
    init_logging();
    let catalog = Catalog::builtin();
    let state = state_at("http://localhost:3000/?section=about&ref=mail");
    let before = state.location().clone();

    let (state, effects) = update(state, Msg::HoverEntered("/projects".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.command_text(&catalog), "/projects");
    assert_eq!(state.location(), &before);

    let (state, effects) = update(state, Msg::HoverLeft);
    assert!(effects.is_empty());
    assert_eq!(state.command_text(&catalog), "/about");
}

#[test]
fn empty_hover_text_falls_through_to_section() {
    init_logging();
    let catalog = Catalog::builtin();
    let mut state = state_at("http://localhost:3000/?section=about");
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::HoverEntered(String::new()));

    assert!(effects.is_empty());
    assert_eq!(state.hover_preview(), None);
    assert_eq!(state.command_text(&catalog), "/about");
    assert!(!state.consume_dirty());
}

#[test]
fn navigation_preserves_unrelated_params_and_base_path() {
    init_logging();
    let state = state_at("http://example.github.io/gauntlet-portfolio/?utm_source=cv&section=about");

    let (state, effects) = update(state, Msg::SectionChosen(Section::Projects));
    assert_eq!(
        pushed_url(&effects).as_str(),
        "http://example.github.io/gauntlet-portfolio/?utm_source=cv&section=projects"
    );

    let (_, effects) = update(state, Msg::ProjectChosen { id: "5".to_string() });
    assert_eq!(
        pushed_url(&effects).as_str(),
        "http://example.github.io/gauntlet-portfolio/?utm_source=cv&section=projects&project=5"
    );
}

#[test]
fn every_navigation_click_pushes_history() {
    init_logging();
    let state = state_at("http://localhost:3000/");

    let (state, first) = update(state, Msg::SectionChosen(Section::Projects));
    let (state, second) = update(state, Msg::SectionChosen(Section::Projects));
    let (_, third) = update(state, Msg::BackToProjects);

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(third.len(), 1);
}

#[test]
fn browser_navigation_is_idempotent() {
    init_logging();
    let catalog = Catalog::builtin();
    let mut state = state_at("http://localhost:3000/");
    assert!(state.consume_dirty());
    let target = Url::parse("http://localhost:3000/?section=projects&project=2").unwrap();

    let (mut state, effects) = update(state, Msg::BrowserNavigated(target.clone()));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let first_view = state.view(&catalog);

    let (mut state, effects) = update(state, Msg::BrowserNavigated(target));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view(&catalog), first_view);
    assert_eq!(state.command_text(&catalog), "/projects songpad");
}

#[test]
fn browser_navigation_keeps_hover_preview() {
    init_logging();
    let state = state_at("http://localhost:3000/");
    let (state, _) = update(state, Msg::HoverEntered("/about".to_string()));

    let (state, _) = update(
        state,
        Msg::BrowserNavigated(Url::parse("http://localhost:3000/?section=contact").unwrap()),
    );

    assert_eq!(state.hover_preview(), Some("/about"));
    assert_eq!(state.section(), &ActiveSection::Known(Section::Contact));
}

#[test]
fn unknown_section_renders_nothing_but_echoes_command() {
    init_logging();
    let catalog = Catalog::builtin();
    let state = state_at("http://localhost:3000/?section=blog");
    let view = state.view(&catalog);

    assert_eq!(view.content, ContentView::Blank);
    assert_eq!(view.command_text, "/blog");
    assert!(view.palette.iter().all(|row| !row.active));
}

#[test]
fn project_key_overrides_section_for_content() {
    init_logging();
    let catalog = Catalog::builtin();
    let state = state_at("http://localhost:3000/?section=about&project=1");
    let view = state.view(&catalog);

    match view.content {
        ContentView::ProjectDetail(detail) => {
            assert_eq!(detail.summary.name, "Consenstris");
            assert_eq!(detail.summary.number, 2);
        }
        other => panic!("expected detail view, got {other:?}"),
    }
    assert_eq!(view.command_text, "/projects consenstris");
    // The palette still reflects the stored section.
    assert!(view.palette.iter().any(|row| row.active && row.section == Section::About));
}

#[test]
fn image_modal_is_ephemeral() {
    init_logging();
    let state = state_at("http://localhost:3000/?project=0");

    let (state, effects) = update(
        state,
        Msg::ImageOpened {
            path: "/screenshots/robovibe.png".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.modal_image(), Some("/screenshots/robovibe.png"));
    assert_eq!(read_location(state.location()).project.as_deref(), Some("0"));

    let (state, _) = update(state, Msg::ImageClosed);
    assert_eq!(state.modal_image(), None);

    let (state, _) = update(
        state,
        Msg::ImageOpened {
            path: "/screenshots/robovibe.png".to_string(),
        },
    );
    let (state, _) = update(state, Msg::BackToProjects);
    assert_eq!(state.modal_image(), None);
}

#[test]
fn navigation_clears_hover_preview() {
    init_logging();
    let catalog = Catalog::builtin();
    let state = state_at("http://localhost:3000/");
    let (state, _) = update(state, Msg::HoverEntered("/projects consenstris".to_string()));

    let (state, _) = update(state, Msg::ProjectChosen { id: "1".to_string() });
    assert_eq!(state.hover_preview(), None);
    assert_eq!(state.command_text(&catalog), "/projects consenstris");
}

#[test]
fn empty_project_id_is_ignored() {
    init_logging();
    let state = state_at("http://localhost:3000/");
    let (next, effects) = update(state.clone(), Msg::ProjectChosen { id: String::new() });

    assert_eq!(next, state);
    assert!(effects.is_empty());
}
