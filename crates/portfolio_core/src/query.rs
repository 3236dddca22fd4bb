//! Query-string codec for the view state.
//!
//! [`read_location`] is the only place that parses a URL into view state and
//! [`rewrite_query`] the only place that writes one back. Parameters other
//! than `section` and `project` pass through untouched.

use url::Url;

use crate::section::ActiveSection;

pub const SECTION_PARAM: &str = "section";
pub const PROJECT_PARAM: &str = "project";

/// View-relevant parameters decoded from a location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationParams {
    pub section: ActiveSection,
    pub project: Option<String>,
}

/// Reads `section` and `project` from `url`. The first occurrence of a key
/// wins; an empty `project` value counts as no selection.
pub fn read_location(url: &Url) -> LocationParams {
    let mut section: Option<String> = None;
    let mut project: Option<String> = None;
    for (key, value) in url.query_pairs() {
        if key == SECTION_PARAM && section.is_none() {
            section = Some(value.into_owned());
        } else if key == PROJECT_PARAM && project.is_none() {
            project = Some(value.into_owned());
        }
    }

    LocationParams {
        section: ActiveSection::from_param(section.as_deref()),
        project: project.filter(|id| !id.is_empty()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamUpdate {
    Set(String),
    Remove,
}

/// Returns a copy of `url` with `updates` applied to its query string.
///
/// `Set` replaces the first pair with that key in place and drops any later
/// duplicates, appending when the key is absent. `Remove` drops every pair
/// with that key. An empty result clears the `?` entirely. The path is kept;
/// the fragment is dropped.
pub fn rewrite_query(url: &Url, updates: &[(&str, ParamUpdate)]) -> Url {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    for (key, update) in updates {
        match update {
            ParamUpdate::Set(value) => set_pair(&mut pairs, key, value),
            ParamUpdate::Remove => pairs.retain(|(k, _)| k != key),
        }
    }

    let mut next = url.clone();
    next.set_fragment(None);
    if pairs.is_empty() {
        next.set_query(None);
    } else {
        next.query_pairs_mut().clear().extend_pairs(pairs);
    }
    next
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    let mut found = false;
    pairs.retain_mut(|(k, v)| {
        if k != key {
            return true;
        }
        if found {
            return false;
        }
        found = true;
        *v = value.to_string();
        true
    });
    if !found {
        pairs.push((key.to_string(), value.to_string()));
    }
}
