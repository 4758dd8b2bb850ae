//! Results submission pipeline: decode, validate, summarize.

pub mod accounts;
pub mod decode;
pub mod domain;
pub mod response;
pub mod router;
pub mod service;
pub mod summary;
pub mod validation;

pub use accounts::{
    api_key_lookup_hash, authenticate, bearer_token, Account, AccountError, AccountRepository,
};
pub use domain::{
    CallbackType, Competitor, Division, DivisionType, Event, EventResultsRequest, Judge,
    Participant, ParticipantType, Round, RoundType, Staff, StaffType, SubmitterIdentity,
};
pub use response::{DivisionSummary, ServiceResponse, SubmissionResultResponse};
pub use router::submission_router;
pub use service::{Clock, SubmissionAction, SubmissionService, SystemClock};
pub use summary::summarize;
pub use validation::{validate, Defect, Severity};

#[cfg(test)]
mod tests;
