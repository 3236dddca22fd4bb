use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use portfolio_core::{update, Catalog, ContentView, DeploymentMode, Msg, ViewState};
use portfolio_logging::{portfolio_debug, portfolio_info, portfolio_warn};
use url::Url;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{parse_line, ShellCommand};
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_shell(config: AppConfig, start_query: Option<&str>) -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let location = config
        .start_location(start_query)
        .context("building start location")?;
    portfolio_info!("Starting shell at {} (mode {:?})", location, config.mode);

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    portfolio_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
    });

    let mut shell = Shell::new(Catalog::builtin(), config.mode, location.clone());
    let mut state = ViewState::from_location(location);
    let mut stdout = io::stdout();

    shell.render_if_dirty(&mut state);
    shell.flush_to(&mut stdout)?;

    while let Ok(line) = line_rx.recv() {
        let (next, flow) = shell.handle_line(state, &line);
        state = next;
        shell.flush_to(&mut stdout)?;
        if flow == Flow::Quit {
            break;
        }
    }

    portfolio_info!(
        "Shell closed at {} (view at {})",
        shell.current_location(),
        state.location()
    );
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns everything except the view state: the emulated browser, the catalog
/// and the pending terminal output.
pub struct Shell {
    catalog: Catalog,
    mode: DeploymentMode,
    effects: EffectRunner,
    output: Vec<String>,
}

impl Shell {
    pub fn new(catalog: Catalog, mode: DeploymentMode, location: Url) -> Self {
        Self {
            catalog,
            mode,
            effects: EffectRunner::new(location),
            output: Vec::new(),
        }
    }

    pub fn handle_line(&mut self, state: ViewState, line: &str) -> (ViewState, Flow) {
        let mut state = state;
        match parse_line(line, &self.catalog) {
            ShellCommand::Dispatch(msg) => state = self.dispatch(state, msg),
            ShellCommand::OpenImage => match self.selected_image(&state) {
                Some(path) => state = self.dispatch(state, Msg::ImageOpened { path }),
                None => self.say("no screenshot to enlarge here"),
            },
            ShellCommand::HistoryBack => match self.effects.back() {
                Some(msg) => state = self.dispatch(state, msg),
                None => self.say("already at the oldest entry"),
            },
            ShellCommand::HistoryForward => match self.effects.forward() {
                Some(msg) => state = self.dispatch(state, msg),
                None => self.say("already at the newest entry"),
            },
            ShellCommand::ShowUrl => {
                let url = self.effects.current_location().to_string();
                self.say(&url);
            }
            ShellCommand::Help => {
                let help = ui::constants::HELP_LINES.iter().map(|l| l.to_string());
                self.output.extend(help);
            }
            ShellCommand::Quit => return (state, Flow::Quit),
            ShellCommand::Empty => {}
            ShellCommand::Unknown(reason) => self.say(&reason),
        }
        (state, Flow::Continue)
    }

    fn dispatch(&mut self, state: ViewState, msg: Msg) -> ViewState {
        portfolio_debug!("dispatch {:?}", msg);
        let (mut state, effects) = update(state, msg);
        self.effects.run(effects);
        self.render_if_dirty(&mut state);
        state
    }

    fn render_if_dirty(&mut self, state: &mut ViewState) {
        if state.consume_dirty() {
            let view = state.view(&self.catalog);
            self.output.push(String::new());
            self.output.extend(ui::render::render(&view, self.mode));
        }
    }

    fn selected_image(&self, state: &ViewState) -> Option<String> {
        match state.view(&self.catalog).content {
            ContentView::ProjectDetail(detail) => detail.summary.image.map(str::to_string),
            _ => None,
        }
    }

    fn say(&mut self, text: &str) {
        self.output.push(format!("  {text}"));
    }

    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    pub fn current_location(&self) -> &Url {
        self.effects.current_location()
    }

    fn flush_to(&mut self, out: &mut impl Write) -> io::Result<()> {
        for line in self.take_output() {
            writeln!(out, "{line}")?;
        }
        write!(out, "{}", ui::constants::PROMPT)?;
        out.flush()
    }
}
