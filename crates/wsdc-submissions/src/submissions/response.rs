use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::DivisionType;
use super::validation::{Defect, Severity};

/// Uniform envelope for every submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub data: Option<T>,
    pub has_errors: bool,
    pub errors: Vec<Defect>,
}

impl<T> ServiceResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            has_errors: false,
            errors: Vec::new(),
        }
    }

    pub fn failure(errors: Vec<Defect>) -> Self {
        Self {
            data: None,
            has_errors: true,
            errors,
        }
    }

    pub fn single_failure(
        code: &str,
        message: impl Into<String>,
        property_path: Option<String>,
        severity: Severity,
    ) -> Self {
        Self::failure(vec![Defect::new(code, message, property_path, severity)])
    }

    /// Envelope for a body that could not be decoded into a submission at all.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::single_failure(
            "VALIDATION_ERROR",
            message,
            Some("$".to_string()),
            Severity::Error,
        )
    }

    /// Envelope for unexpected failures; the ticket ties the response to the server log.
    pub fn internal_error(ticket: &str) -> Self {
        Self::single_failure(
            "INTERNAL_SERVER_ERROR",
            format!(
                "An unexpected error occurred while processing your request. \
                 Please contact support with this ticket number: {ticket}"
            ),
            None,
            Severity::Critical,
        )
    }
}

/// Accepted-submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResultResponse {
    pub submitted_at: DateTime<Utc>,
    pub divisions: Vec<DivisionSummary>,
    pub total_leaders: usize,
    pub total_followers: usize,
    pub total_participants: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter_email: Option<String>,
}

/// Per-division statistics. Counts come from the division's first round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionSummary {
    pub division_type: DivisionType,
    pub leader_count: usize,
    pub follower_count: usize,
    pub total_count: usize,
    pub has_prelims: bool,
    pub has_quarters: bool,
    pub has_semis: bool,
    pub finals_competitor_count: usize,
}
