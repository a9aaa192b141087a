//! Event handling between the terminal front end and the calculator core.

use log::{debug, warn};

use crate::calculator::{compute, CalculationResult};
use crate::entry::parse_principal;
use crate::error::CalcError;
use crate::navigation::{NavigationController, NavigationState, ShutdownSignal};
use crate::rates::{RateTable, TERM_DEFAULT};

/// Shown in both result slots before a calculation or after a failed one.
pub const EMPTY_DISPLAY: &str = "$            ";

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    TermChosen(String),
    NavigateForward,
    NavigateBack,
    CalculateRequested(String),
    ExitRequested,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RenderResult { mean: String, total: String },
    ShowScreen(NavigationState),
    Shutdown,
}

impl From<ShutdownSignal> for Effect {
    fn from(_: ShutdownSignal) -> Self {
        Effect::Shutdown
    }
}

pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Parse, look up and validate a request, then compute it.
pub fn evaluate(
    table: &RateTable,
    term_label: &str,
    principal_text: &str,
) -> Result<CalculationResult, CalcError> {
    let principal = parse_principal(principal_text)?;
    let term = table
        .lookup(term_label)
        .ok_or_else(|| CalcError::UnknownTerm(term_label.to_string()))?;

    if principal <= 0.0 {
        return Err(CalcError::InvalidDomainValue {
            field: "principal",
            value: principal,
        });
    }
    if term.annual_rate < 0.0 {
        return Err(CalcError::InvalidDomainValue {
            field: "annual rate",
            value: term.annual_rate,
        });
    }
    if term.term_months <= 0.0 {
        return Err(CalcError::InvalidDomainValue {
            field: "term months",
            value: term.term_months,
        });
    }

    let result = compute(principal, term.annual_rate, term.term_months);
    if !result.total.is_finite() || !result.mean_monthly_return.is_finite() {
        return Err(CalcError::InvalidDomainValue {
            field: "total",
            value: result.total,
        });
    }
    Ok(result)
}

pub struct App {
    pub rates: RateTable,
    pub navigation: NavigationController,
    pub term_label: String,
    /// Highlighted row in the term menu, index into `rates.labels()`
    pub menu_cursor: usize,
    pub principal_input: String,
    pub mean_display: String,
    pub total_display: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            rates: RateTable::default(),
            navigation: NavigationController::new(),
            term_label: TERM_DEFAULT.to_string(),
            menu_cursor: 0,
            principal_input: String::new(),
            mean_display: EMPTY_DISPLAY.to_string(),
            total_display: EMPTY_DISPLAY.to_string(),
        }
    }
}

impl App {
    pub fn screen(&self) -> NavigationState {
        self.navigation.state()
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Option<Effect> {
        match event {
            UiEvent::TermChosen(label) => {
                debug!("term chosen: {}", label);
                self.term_label = label;
                None
            }
            UiEvent::NavigateForward => self
                .navigation
                .advance(&self.term_label)
                .then_some(Effect::ShowScreen(NavigationState::Calculation)),
            UiEvent::NavigateBack => self
                .navigation
                .retreat()
                .then_some(Effect::ShowScreen(NavigationState::Selection)),
            UiEvent::CalculateRequested(text) => {
                let (mean, total) = match evaluate(&self.rates, &self.term_label, &text) {
                    Ok(result) => {
                        debug!(
                            "{} on {:?}: mean {} total {}",
                            self.term_label, text, result.mean_monthly_return, result.total
                        );
                        (
                            format_currency(result.mean_monthly_return),
                            format_currency(result.total),
                        )
                    }
                    Err(e) => {
                        warn!("calculation failed: {}", e);
                        (EMPTY_DISPLAY.to_string(), EMPTY_DISPLAY.to_string())
                    }
                };
                self.mean_display = mean.clone();
                self.total_display = total.clone();
                Some(Effect::RenderResult { mean, total })
            }
            UiEvent::ExitRequested => Some(self.navigation.terminate().into()),
        }
    }
}
