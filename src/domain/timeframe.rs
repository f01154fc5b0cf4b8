//! Horizon selector for the weekly statistics history.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Length of the projected weekly history shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    /// Four weeks.
    Weeks4,
    /// Twelve weeks.
    #[default]
    Months3,
    /// Twenty-four weeks.
    Months6,
}

impl Timeframe {
    /// Returns the number of weekly steps in the horizon.
    #[must_use]
    pub const fn weeks(&self) -> u32 {
        match self {
            Self::Weeks4 => 4,
            Self::Months3 => 12,
            Self::Months6 => 24,
        }
    }

    /// Returns the dashboard label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weeks4 => "Últimas 4 semanas",
            Self::Months3 => "Últimos 3 meses",
            Self::Months6 => "Últimos 6 meses",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
