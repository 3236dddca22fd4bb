//! Portfolio core: catalog, pure view-state machine and view-model helpers.
mod assets;
mod catalog;
pub mod content;
mod effect;
mod msg;
mod query;
mod section;
mod slug;
mod state;
mod update;
mod view_model;

pub use assets::{asset_path, DeploymentMode, PRODUCTION_BASE_PATH};
pub use catalog::{Catalog, ProjectRecord, ProjectStatus, PROJECTS};
pub use effect::Effect;
pub use msg::Msg;
pub use query::{
    read_location, rewrite_query, LocationParams, ParamUpdate, PROJECT_PARAM, SECTION_PARAM,
};
pub use section::{ActiveSection, ParseSectionError, Section};
pub use slug::slugify;
pub use state::ViewState;
pub use update::update;
pub use view_model::{
    ContentView, LinkKind, PaletteRowView, PortfolioViewModel, ProjectDetailView, ProjectLink,
    ProjectRowView,
};
