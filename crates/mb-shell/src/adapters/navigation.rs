use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use mb_core::ports::NavigationPort;

/// Where the command line "is" after the wizard asked to navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Wizard,
    /// Whatever screen opened the wizard.
    Previous,
    Home,
}

/// Navigation for a terminal session: there are no screens, only a history
/// the command runner inspects to know when the wizard was left.
pub struct CliNavigator {
    history: Mutex<Vec<Route>>,
}

impl Default for CliNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl CliNavigator {
    pub fn new() -> Self {
        Self {
            history: Mutex::new(vec![Route::Wizard]),
        }
    }

    pub fn current(&self) -> Route {
        self.history
            .lock()
            .ok()
            .and_then(|history| history.last().copied())
            .unwrap_or(Route::Wizard)
    }

    pub fn left_wizard(&self) -> bool {
        self.current() != Route::Wizard
    }

    fn with_history(&self, f: impl FnOnce(&mut Vec<Route>)) -> anyhow::Result<()> {
        let mut history = self
            .history
            .lock()
            .map_err(|_| anyhow::anyhow!("navigation history poisoned"))?;
        f(&mut history);
        Ok(())
    }
}

#[async_trait]
impl NavigationPort for CliNavigator {
    async fn go_back(&self) -> anyhow::Result<()> {
        info!("leaving registration wizard");
        self.with_history(|history| history.push(Route::Previous))
    }

    async fn reset_to_home(&self) -> anyhow::Result<()> {
        info!("navigation reset to home");
        self.with_history(|history| {
            history.clear();
            history.push(Route::Home);
        })
    }
}
