use portfolio_core::{Catalog, Msg, Section};

/// What one line typed into the shell asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Dispatch(Msg),
    /// Open the selected project's screenshot full size.
    OpenImage,
    HistoryBack,
    HistoryForward,
    ShowUrl,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str, catalog: &Catalog) -> ShellCommand {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }

    if let Some(rest) = line.strip_prefix(':') {
        return parse_meta(rest, line);
    }

    if line == ".." {
        return ShellCommand::Dispatch(Msg::BackToProjects);
    }

    if let Ok(number) = line.parse::<usize>() {
        return match number.checked_sub(1).and_then(|i| catalog.all().get(i)) {
            Some(record) => choose(record.id),
            None => ShellCommand::Unknown(format!("no project numbered {number}")),
        };
    }

    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };
    let section = command
        .strip_prefix('/')
        .and_then(|name| name.parse::<Section>().ok());

    match (section, argument) {
        (Some(section), "") => ShellCommand::Dispatch(Msg::SectionChosen(section)),
        (Some(Section::Projects), slug) => match catalog.find_by_slug(slug) {
            Some(record) => choose(record.id),
            None => ShellCommand::Unknown(format!("no project named {slug}")),
        },
        _ => ShellCommand::Unknown(format!("unknown command {line}")),
    }
}

fn parse_meta(rest: &str, line: &str) -> ShellCommand {
    let (command, argument) = match rest.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (rest, ""),
    };
    match (command, argument) {
        ("hover", "") => ShellCommand::Unknown(":hover needs text to preview".to_string()),
        ("hover", text) => ShellCommand::Dispatch(Msg::HoverEntered(text.to_string())),
        ("leave", _) => ShellCommand::Dispatch(Msg::HoverLeft),
        ("image", _) => ShellCommand::OpenImage,
        ("close", _) => ShellCommand::Dispatch(Msg::ImageClosed),
        ("back", _) => ShellCommand::HistoryBack,
        ("forward", _) => ShellCommand::HistoryForward,
        ("url", _) => ShellCommand::ShowUrl,
        ("help", _) => ShellCommand::Help,
        ("quit", _) | ("q", _) => ShellCommand::Quit,
        _ => ShellCommand::Unknown(format!("unknown command {line}")),
    }
}

fn choose(id: &str) -> ShellCommand {
    ShellCommand::Dispatch(Msg::ProjectChosen { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> ShellCommand {
        parse_line(line, &Catalog::builtin())
    }

    #[test]
    fn section_commands() {
        assert_eq!(
            parse("/about"),
            ShellCommand::Dispatch(Msg::SectionChosen(Section::About))
        );
        assert_eq!(
            parse("  /contact "),
            ShellCommand::Dispatch(Msg::SectionChosen(Section::Contact))
        );
        assert!(matches!(parse("/blog"), ShellCommand::Unknown(_)));
    }

    #[test]
    fn projects_by_slug_and_number() {
        let consenstris = ShellCommand::Dispatch(Msg::ProjectChosen {
            id: "1".to_string(),
        });
        assert_eq!(parse("/projects consenstris"), consenstris);
        assert_eq!(parse("2"), consenstris);
        assert_eq!(
            parse("/projects shortcut-finder"),
            ShellCommand::Dispatch(Msg::ProjectChosen {
                id: "4".to_string()
            })
        );
        assert!(matches!(parse("0"), ShellCommand::Unknown(_)));
        assert!(matches!(parse("7"), ShellCommand::Unknown(_)));
        assert!(matches!(parse("/projects nope"), ShellCommand::Unknown(_)));
        assert!(matches!(parse("/about me"), ShellCommand::Unknown(_)));
    }

    #[test]
    fn meta_commands() {
        assert_eq!(parse(".."), ShellCommand::Dispatch(Msg::BackToProjects));
        assert_eq!(
            parse(":hover /projects robovibe"),
            ShellCommand::Dispatch(Msg::HoverEntered("/projects robovibe".to_string()))
        );
        assert!(matches!(parse(":hover"), ShellCommand::Unknown(_)));
        assert_eq!(parse(":leave"), ShellCommand::Dispatch(Msg::HoverLeft));
        assert_eq!(parse(":back"), ShellCommand::HistoryBack);
        assert_eq!(parse(":forward"), ShellCommand::HistoryForward);
        assert_eq!(parse(":image"), ShellCommand::OpenImage);
        assert_eq!(parse(":close"), ShellCommand::Dispatch(Msg::ImageClosed));
        assert_eq!(parse(":q"), ShellCommand::Quit);
        assert_eq!(parse(""), ShellCommand::Empty);
        assert!(matches!(parse(":nope"), ShellCommand::Unknown(_)));
    }
}
