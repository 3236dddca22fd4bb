use portfolio_core::{Effect, Msg};
use portfolio_logging::{portfolio_debug, portfolio_info};
use url::Url;

use super::history::MemoryHistory;

/// Executes effects against the emulated browser and turns history moves
/// back into messages.
pub struct EffectRunner {
    history: MemoryHistory,
}

impl EffectRunner {
    pub fn new(initial: Url) -> Self {
        Self {
            history: MemoryHistory::new(initial),
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PushHistory { url } => {
                    portfolio_info!("PushHistory url={}", url);
                    self.history.push(url);
                    portfolio_debug!("history depth={}", self.history.len());
                }
            }
        }
    }

    pub fn current_location(&self) -> &Url {
        self.history.current()
    }

    /// Browser "back". `None` at the start of history.
    pub fn back(&mut self) -> Option<Msg> {
        self.history.back().map(Msg::BrowserNavigated)
    }

    /// Browser "forward". `None` at the newest entry.
    pub fn forward(&mut self) -> Option<Msg> {
        self.history.forward().map(Msg::BrowserNavigated)
    }
}
