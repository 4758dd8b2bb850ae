use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::domain::{
    Division, EventResultsRequest, Participant, ParticipantType, RoundType, SubmitterIdentity,
};
use super::response::{DivisionSummary, SubmissionResultResponse};

/// Distinctness key for counting dancers: registry number when present, name otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ParticipantKey {
    Id(String),
    Name(String),
}

impl ParticipantKey {
    fn of(participant: &Participant) -> Self {
        match participant.id.as_deref() {
            Some(id) if participant.has_valid_wsdc_id() => ParticipantKey::Id(id.to_string()),
            _ => ParticipantKey::Name(participant.name.clone()),
        }
    }
}

/// Builds the acceptance payload for a submission that produced no defects.
pub fn summarize(
    request: &EventResultsRequest,
    identity: Option<&SubmitterIdentity>,
    submitted_at: DateTime<Utc>,
) -> SubmissionResultResponse {
    let divisions: Vec<DivisionSummary> = request
        .event
        .as_ref()
        .and_then(|event| event.divisions.as_deref())
        .unwrap_or_default()
        .iter()
        .map(summarize_division)
        .collect();

    let total_leaders = divisions.iter().map(|d| d.leader_count).sum();
    let total_followers = divisions.iter().map(|d| d.follower_count).sum();
    let total_participants = divisions.iter().map(|d| d.total_count).sum();

    SubmissionResultResponse {
        submitted_at,
        divisions,
        total_leaders,
        total_followers,
        total_participants,
        submitter_name: identity.map(|who| who.name.clone()),
        submitter_email: identity.map(|who| who.email.clone()),
    }
}

pub fn summarize_division(division: &Division) -> DivisionSummary {
    let rounds = division.rounds.as_deref().unwrap_or_default();

    let mut leaders = HashSet::new();
    let mut followers = HashSet::new();
    if let Some(first) = rounds.first() {
        let participants = first
            .competitors
            .iter()
            .flatten()
            .flat_map(|competitor| competitor.participants.iter().flatten());
        for participant in participants {
            match participant.role {
                Some(ParticipantType::Leader) => {
                    leaders.insert(ParticipantKey::of(participant));
                }
                Some(ParticipantType::Follower) => {
                    followers.insert(ParticipantKey::of(participant));
                }
                None => {}
            }
        }
    }

    let has_round = |kind| rounds.iter().any(|round| round.round_type == Some(kind));
    let finals_competitor_count = rounds
        .iter()
        .find(|round| round.round_type == Some(RoundType::Finals))
        .and_then(|round| round.competitors.as_ref())
        .map_or(0, Vec::len);

    DivisionSummary {
        division_type: division.division_type,
        leader_count: leaders.len(),
        follower_count: followers.len(),
        total_count: leaders.len() + followers.len(),
        has_prelims: has_round(RoundType::Prelims),
        has_quarters: has_round(RoundType::Quarters),
        has_semis: has_round(RoundType::Semis),
        finals_competitor_count,
    }
}
