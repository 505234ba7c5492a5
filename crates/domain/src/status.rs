// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employment status vocabulary and seat classification.
//!
//! The vocabulary is partitioned into two classes: active-like statuses
//! occupy a seat against the position's capacity, terminal-like statuses do
//! not. Classification, not a transition graph, drives all side effects;
//! any status may move to any other status.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The status of an employment contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Working normally. Occupies a seat.
    Active,
    /// Suspended (disciplinary or administrative). Still occupies a seat.
    Suspended,
    /// On approved leave. Still occupies a seat.
    OnLeave,
    /// On medical rest. Still occupies a seat.
    OnRest,
    /// Contract ended by the employer at term.
    Terminated,
    /// Contract ended by the person.
    Resigned,
    /// Contract ended by dismissal.
    Dismissed,
    /// Contract voided as if it never took effect.
    Annulled,
}

impl EmploymentStatus {
    /// The statuses that occupy a seat.
    pub const ACTIVE_LIKE: [Self; 4] = [Self::Active, Self::Suspended, Self::OnLeave, Self::OnRest];

    /// The statuses that release a seat.
    pub const TERMINAL_LIKE: [Self; 4] = [
        Self::Terminated,
        Self::Resigned,
        Self::Dismissed,
        Self::Annulled,
    ];

    /// Returns whether this status counts against the position's capacity.
    #[must_use]
    pub const fn is_active_like(self) -> bool {
        matches!(
            self,
            Self::Active | Self::Suspended | Self::OnLeave | Self::OnRest
        )
    }

    /// Returns whether this status has released its seat.
    #[must_use]
    pub const fn is_terminal_like(self) -> bool {
        !self.is_active_like()
    }

    /// Converts this status to its persisted string code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::OnLeave => "on_leave",
            Self::OnRest => "on_rest",
            Self::Terminated => "terminated",
            Self::Resigned => "resigned",
            Self::Dismissed => "dismissed",
            Self::Annulled => "annulled",
        }
    }

    /// The persisted string codes of all active-like statuses.
    ///
    /// Used to build occupancy filters against the employment ledger.
    #[must_use]
    pub const fn active_like_codes() -> &'static [&'static str] {
        &["active", "suspended", "on_leave", "on_rest"]
    }
}

impl FromStr for EmploymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            "on_leave" => Ok(Self::OnLeave),
            "on_rest" => Ok(Self::OnRest),
            "terminated" => Ok(Self::Terminated),
            "resigned" => Ok(Self::Resigned),
            "dismissed" => Ok(Self::Dismissed),
            "annulled" => Ok(Self::Annulled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The reason a contract reached a terminal-like status.
///
/// The label feeds the audit log's reason text together with any free-text
/// exit notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    /// The person resigned.
    Resignation,
    /// The person was dismissed.
    Dismissal,
    /// A fixed-term contract reached its end date.
    EndOfContract,
    /// The person retired.
    Retirement,
    /// The person abandoned the position.
    Abandonment,
    /// Any other reason; details go in the exit notes.
    Other,
}

impl ExitReason {
    /// Converts this reason to its persisted string code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resignation => "resignation",
            Self::Dismissal => "dismissal",
            Self::EndOfContract => "end_of_contract",
            Self::Retirement => "retirement",
            Self::Abandonment => "abandonment",
            Self::Other => "other",
        }
    }

    /// Returns the human-readable label used in audit reason text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resignation => "Resignation",
            Self::Dismissal => "Dismissal",
            Self::EndOfContract => "End of contract",
            Self::Retirement => "Retirement",
            Self::Abandonment => "Abandonment",
            Self::Other => "Other",
        }
    }
}

impl FromStr for ExitReason {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resignation" => Ok(Self::Resignation),
            "dismissal" => Ok(Self::Dismissal),
            "end_of_contract" => Ok(Self::EndOfContract),
            "retirement" => Ok(Self::Retirement),
            "abandonment" => Ok(Self::Abandonment),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidExitReason(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExitReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
