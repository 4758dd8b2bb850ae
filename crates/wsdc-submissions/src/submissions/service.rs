use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::domain::{EventResultsRequest, SubmitterIdentity};
use super::response::{ServiceResponse, SubmissionResultResponse};
use super::summary::summarize;
use super::validation::validate;

/// Time source for the `submittedAt` stamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Which endpoint a submission arrived through. Both run the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionAction {
    Validate,
    Submit,
}

impl SubmissionAction {
    pub fn label(self) -> &'static str {
        match self {
            SubmissionAction::Validate => "validation",
            SubmissionAction::Submit => "submission",
        }
    }
}

/// Runs the validators and, on acceptance, the summarizer.
pub struct SubmissionService<C = SystemClock> {
    clock: Arc<C>,
}

impl SubmissionService<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl Default for SubmissionService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> SubmissionService<C>
where
    C: Clock + 'static,
{
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Dry run: reports defects or the summary that a submission would produce.
    pub fn validate_event_data(
        &self,
        request: Option<&EventResultsRequest>,
        identity: Option<&SubmitterIdentity>,
    ) -> ServiceResponse<SubmissionResultResponse> {
        self.process(SubmissionAction::Validate, request, identity)
    }

    /// Accepts the results for processing once they pass every rule.
    pub fn submit_event_data(
        &self,
        request: Option<&EventResultsRequest>,
        identity: Option<&SubmitterIdentity>,
    ) -> ServiceResponse<SubmissionResultResponse> {
        self.process(SubmissionAction::Submit, request, identity)
    }

    pub fn process(
        &self,
        action: SubmissionAction,
        request: Option<&EventResultsRequest>,
        identity: Option<&SubmitterIdentity>,
    ) -> ServiceResponse<SubmissionResultResponse> {
        let stage = action.label();
        info!(stage, "starting event data {stage}");

        if request.is_none() {
            warn!(stage, "{stage} request received with null payload");
        }

        let defects = validate(request);
        let Some(request) = request.filter(|_| defects.is_empty()) else {
            warn!(
                stage,
                error_count = defects.len(),
                "event data {stage} failed validation"
            );
            return ServiceResponse::failure(defects);
        };

        let summary = summarize(request, identity, self.clock.now());
        info!(
            stage,
            division_count = summary.divisions.len(),
            submitted_at = %summary.submitted_at,
            "{stage} completed"
        );
        ServiceResponse::success(summary)
    }
}
