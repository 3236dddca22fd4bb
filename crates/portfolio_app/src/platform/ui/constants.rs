pub const PROMPT: &str = "> ";
pub const RULE_WIDTH: usize = 72;
pub const INDENT: &str = "    ";

pub const HELP_LINES: &[&str] = &[
    "/projects | /about | /contact   open a section",
    "/projects <name> or <number>    open a project",
    "..                              back to projects",
    ":hover <text> / :leave          preview a command",
    ":image / :close                 full-size screenshot",
    ":back / :forward                browser history",
    ":url                            show the current location",
    ":quit                           leave",
];
