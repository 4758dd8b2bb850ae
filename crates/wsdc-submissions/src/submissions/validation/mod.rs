//! Hierarchical rule validation for results submissions.
//!
//! Validators never stop at the first problem: every applicable rule runs and writes into
//! a shared [`DefectSink`], so a single pass returns the complete defect list in
//! depth-first discovery order.

mod composites;
mod defects;
mod entities;
mod rounds;

pub use composites::{
    validate_competitor, validate_division, validate_event, validate_request, validate_round,
};
pub use defects::{limits, Defect, DefectSink, Severity};
pub use entities::{validate_judge, validate_participant, validate_staff};
pub use rounds::{
    rules_for, CallbackRule, ParticipantRule, RuleBundle, ScoreGrammar, NON_FINAL_SCORES,
};

use super::domain::EventResultsRequest;

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Runs every rule over the submission. An empty result means the submission is accepted.
pub fn validate(request: Option<&EventResultsRequest>) -> Vec<Defect> {
    let mut defects = Vec::new();
    let mut sink = DefectSink::new(&mut defects);
    match request {
        Some(request) => validate_request(request, &mut sink),
        None => sink.error(VALIDATION_ERROR, "Request cannot be null", "$"),
    }
    defects
}
