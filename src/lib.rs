//! Certificate of deposit calculator.
//!
//! Pick a fixed-term deposit, enter a principal, and see the average monthly
//! dividend and the end-of-term total. The terminal front end lives in
//! [`ui`] and [`input`]; [`app`] connects it to the calculator core.

pub mod app;
pub mod calculator;
pub mod config;
pub mod entry;
pub mod error;
pub mod input;
pub mod logging;
pub mod navigation;
pub mod rates;
pub mod terminal;
pub mod ui;

pub use app::{App, Effect, UiEvent};
pub use calculator::{compute, CalculationResult};
pub use entry::parse_principal;
pub use error::CalcError;
pub use navigation::{NavigationController, NavigationState};
pub use rates::{RateTable, Term, TERM_DEFAULT};
