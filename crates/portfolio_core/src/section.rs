use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Projects,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Projects, Section::About, Section::Contact];

    /// Value used in the `section` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Terminal command that opens this section, e.g. `/about`.
    pub fn command(self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section {0:?}")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// The section as read from the URL.
///
/// Values outside the known set are kept verbatim: nothing renders for them
/// but the command line still echoes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveSection {
    Known(Section),
    Unrecognized(String),
}

impl ActiveSection {
    /// Interprets a raw `section` parameter. Absent or empty means projects.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => ActiveSection::Known(Section::default()),
            Some(value) => match value.parse::<Section>() {
                Ok(section) => ActiveSection::Known(section),
                Err(ParseSectionError(value)) => ActiveSection::Unrecognized(value),
            },
        }
    }

    pub fn known(&self) -> Option<Section> {
        match self {
            ActiveSection::Known(section) => Some(*section),
            ActiveSection::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActiveSection::Known(section) => section.as_str(),
            ActiveSection::Unrecognized(value) => value,
        }
    }

    pub fn is(&self, section: Section) -> bool {
        self.known() == Some(section)
    }
}

impl Default for ActiveSection {
    fn default() -> Self {
        ActiveSection::Known(Section::default())
    }
}

impl From<Section> for ActiveSection {
    fn from(section: Section) -> Self {
        ActiveSection::Known(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_sections() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "Projects".parse::<Section>(),
            Err(ParseSectionError("Projects".to_string()))
        );
    }

    #[test]
    fn missing_or_empty_param_defaults_to_projects() {
        let projects = ActiveSection::Known(Section::Projects);
        assert_eq!(ActiveSection::from_param(None), projects);
        assert_eq!(ActiveSection::from_param(Some("")), projects);
    }

    #[test]
    fn unknown_param_is_kept_verbatim() {
        let active = ActiveSection::from_param(Some("blog"));
        assert_eq!(active, ActiveSection::Unrecognized("blog".to_string()));
        assert_eq!(active.as_str(), "blog");
        assert_eq!(active.known(), None);
    }
}
