//! Fixed-term deposit products offered by the calculator.

/// Label shown before any term has been picked. Never a catalog key.
pub const TERM_DEFAULT: &str = "[Select a Term]";

/// A deposit product: annual rate as a fraction and duration in months.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub label: &'static str,
    pub annual_rate: f64,
    pub term_months: f64,
}

// Purdue Federal Credit Union certificate rates, July 2023.
const CATALOG: [Term; 3] = [
    Term {
        label: "8-Month",
        annual_rate: 0.0512,
        term_months: 8.0,
    },
    Term {
        label: "15-Month",
        annual_rate: 0.0512,
        term_months: 15.0,
    },
    Term {
        label: "29-Month",
        annual_rate: 0.0405,
        term_months: 29.0,
    },
];

#[derive(Debug, Clone)]
pub struct RateTable {
    terms: Vec<Term>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            terms: CATALOG.to_vec(),
        }
    }
}

impl RateTable {
    /// Find a term by label. The sentinel label is never found.
    pub fn lookup(&self, label: &str) -> Option<&Term> {
        self.terms.iter().find(|term| term.label == label)
    }

    /// Labels in menu order, sentinel first.
    pub fn labels(&self) -> Vec<&'static str> {
        std::iter::once(TERM_DEFAULT)
            .chain(self.terms.iter().map(|term| term.label))
            .collect()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}
