//! Two-screen navigation: term selection, then calculation.

use log::{debug, info};

use crate::rates::TERM_DEFAULT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Selection,
    Calculation,
}

/// Returned by `terminate` to tell the front end to shut down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ShutdownSignal;

#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Move to the calculation screen unless no term is chosen yet.
    ///
    /// Returns whether the state changed. A refused advance is silent.
    pub fn advance(&mut self, term_label: &str) -> bool {
        if term_label == TERM_DEFAULT {
            debug!("advance refused: no term selected");
            return false;
        }
        if self.state == NavigationState::Calculation {
            return false;
        }
        info!("navigating to calculation screen for {}", term_label);
        self.state = NavigationState::Calculation;
        true
    }

    /// Back to the selection screen. No-op when already there.
    pub fn retreat(&mut self) -> bool {
        if self.state == NavigationState::Selection {
            return false;
        }
        info!("navigating back to term selection");
        self.state = NavigationState::Selection;
        true
    }

    pub fn terminate(&self) -> ShutdownSignal {
        info!("exit requested");
        ShutdownSignal
    }
}
