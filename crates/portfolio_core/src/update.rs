use crate::{Effect, Msg, ViewState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ViewState, msg: Msg) -> (ViewState, Vec<Effect>) {
    let effects = match msg {
        Msg::SectionChosen(section) => {
            let url = state.navigate_to_section(section);
            vec![Effect::PushHistory { url }]
        }
        Msg::ProjectChosen { id } => {
            if id.is_empty() {
                return (state, Vec::new());
            }
            let url = state.select_project(id);
            vec![Effect::PushHistory { url }]
        }
        Msg::BackToProjects => {
            // Pushed even when nothing is selected so every click is undoable.
            let url = state.clear_selection();
            vec![Effect::PushHistory { url }]
        }
        Msg::HoverEntered(text) => {
            state.set_hover_preview(Some(text));
            Vec::new()
        }
        Msg::HoverLeft => {
            state.set_hover_preview(None);
            Vec::new()
        }
        Msg::ImageOpened { path } => {
            state.set_modal_image(Some(path));
            Vec::new()
        }
        Msg::ImageClosed => {
            state.set_modal_image(None);
            Vec::new()
        }
        Msg::BrowserNavigated(location) => {
            state.apply_browser_location(location);
            Vec::new()
        }
    };

    (state, effects)
}
