//! Project model and rate tier.
//!
//! This module defines the [`Project`] struct tracked by the ledger and the
//! [`RateTier`] that its creation-order position maps to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The creation-order position that carries the premium rate.
pub const PREMIUM_POSITION: u32 = 1;

/// The billing tier a project falls into.
///
/// Only the project created first in a session (position 1) is billed at the
/// premium rate and may accrue overtime. Every later project is standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// The first project ever created; premium monthly rate plus overtime.
    Premium,
    /// Any project created after the first; standard monthly rate, no overtime.
    Standard,
}

impl RateTier {
    /// Maps a creation-order position to its tier.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_calculator::models::RateTier;
    ///
    /// assert_eq!(RateTier::for_position(1), RateTier::Premium);
    /// assert_eq!(RateTier::for_position(2), RateTier::Standard);
    /// ```
    pub fn for_position(position: u32) -> Self {
        if position == PREMIUM_POSITION {
            RateTier::Premium
        } else {
            RateTier::Standard
        }
    }
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateTier::Premium => write!(f, "Premium"),
            RateTier::Standard => write!(f, "Standard"),
        }
    }
}

/// A project whose working days are billed.
///
/// `position` records the original creation order and is never reassigned,
/// not by edits, not by retiring, and not by removing other projects.
///
/// # Example
///
/// ```
/// use salary_calculator::models::{Project, RateTier};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let project = Project {
///     id: Uuid::new_v4(),
///     name: "Website Redesign".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     position: 1,
///     disbanded: false,
/// };
/// assert!(project.is_active());
/// assert_eq!(project.tier(), RateTier::Premium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// First billed date (inclusive).
    pub start_date: NaiveDate,
    /// Last billed date (inclusive).
    pub end_date: NaiveDate,
    /// Creation-order position, starting at 1.
    pub position: u32,
    /// Whether the project has been retired from calculations.
    #[serde(default)]
    pub disbanded: bool,
}

impl Project {
    /// Returns true unless the project has been retired.
    pub fn is_active(&self) -> bool {
        !self.disbanded
    }

    /// Returns the tier implied by the project's creation-order position.
    pub fn tier(&self) -> RateTier {
        RateTier::for_position(self.position)
    }
}

/// The user-editable fields of a project.
///
/// Creating or editing a project only ever touches these fields; the id and
/// position are owned by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    /// Display name.
    pub name: String,
    /// First billed date (inclusive).
    pub start_date: NaiveDate,
    /// Last billed date (inclusive).
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_project(position: u32) -> Project {
        Project {
            id: Uuid::nil(),
            name: "Mobile App".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            position,
            disbanded: false,
        }
    }

    #[test]
    fn test_position_one_is_premium() {
        assert_eq!(create_test_project(1).tier(), RateTier::Premium);
    }

    #[test]
    fn test_later_positions_are_standard() {
        for position in [0, 2, 3, 10, 999] {
            assert_eq!(create_test_project(position).tier(), RateTier::Standard);
        }
    }

    #[test]
    fn test_disbanded_project_is_not_active() {
        let mut project = create_test_project(2);
        assert!(project.is_active());
        project.disbanded = true;
        assert!(!project.is_active());
    }

    #[test]
    fn test_rate_tier_serialization() {
        assert_eq!(
            serde_json::to_string(&RateTier::Premium).unwrap(),
            "\"premium\""
        );
        assert_eq!(
            serde_json::to_string(&RateTier::Standard).unwrap(),
            "\"standard\""
        );
    }

    #[test]
    fn test_deserialize_project_defaults_to_active() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Mobile App",
            "start_date": "2024-01-01",
            "end_date": "2024-01-31",
            "position": 3
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.position, 3);
        assert!(!project.disbanded);
        assert_eq!(
            project.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }
}
