//! Display projections of API records.
//!
//! Pure functions deriving labels and styling classes from the raw codes the API stores.
//! They never fail and never touch the records they are given, so they can run on every
//! render.

pub mod dashboard;
pub mod user;
pub mod vehicle;

use std::fmt;

pub use dashboard::DashboardStats;
pub use vehicle::{
    assignee_name, assignment_label, assignment_severity, charge_level, charging_label,
    charging_severity, is_assigned, ChargeLevel,
};

/// Styling classification of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Primary,
    Success,
    Warning,
    Error,
    Default,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
