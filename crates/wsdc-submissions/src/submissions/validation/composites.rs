use std::collections::HashSet;

use super::defects::{limits, DefectSink};
use super::entities::{exceeds, is_blank, validate_judge, validate_participant, validate_staff};
use super::rounds::rules_for;
use crate::submissions::domain::{
    Competitor, Division, DivisionType, Event, EventResultsRequest, Round, StaffType,
};

pub fn validate_request(request: &EventResultsRequest, sink: &mut DefectSink<'_>) {
    match &request.event {
        Some(event) => validate_event(event, &mut sink.with_prefix("Event")),
        None => sink.error("EVENT_REQUIRED", "Event data is required", "Event"),
    }
}

pub fn validate_event(event: &Event, sink: &mut DefectSink<'_>) {
    if is_blank(&event.event_name) {
        sink.error("EVENT_NAME_REQUIRED", "Event name is required", "EventName");
    } else if exceeds(&event.event_name, limits::NAME) {
        sink.error(
            "EVENT_NAME_TOO_LONG",
            format!("Event name must not exceed {} characters", limits::NAME),
            "EventName",
        );
    }

    if event.event_start_date.is_none() {
        sink.error(
            "EVENT_START_DATE_REQUIRED",
            "Event start date is required",
            "EventStartDate",
        );
    }
    match (event.event_start_date, event.event_end_date) {
        (_, None) => sink.error(
            "EVENT_END_DATE_REQUIRED",
            "Event end date is required",
            "EventEndDate",
        ),
        (Some(start), Some(end)) if end < start => sink.error(
            "INVALID_DATE_RANGE",
            "Event end date must be on or after the start date",
            "EventEndDate",
        ),
        _ => {}
    }

    if is_blank(&event.venue_name) {
        sink.error("EVENT_LOCATION_REQUIRED", "Event location is required", "VenueName");
    } else if exceeds(&event.venue_name, limits::LOCATION) {
        sink.error(
            "EVENT_LOCATION_TOO_LONG",
            format!("Event location must not exceed {} characters", limits::LOCATION),
            "VenueName",
        );
    }

    match event.staff.as_deref() {
        None | Some([]) => {
            if event.staff.is_none() {
                sink.error("STAFF_REQUIRED", "Staff list is required", "Staff");
            }
            sink.error("NO_STAFF", "Event must have at least one staff member", "Staff");
        }
        Some(staff) => {
            for (index, member) in staff.iter().enumerate() {
                validate_staff(member, &mut sink.with_prefix(&format!("Staff[{index}]")));
            }
        }
    }
    let has_chief_judge = event
        .staff
        .iter()
        .flatten()
        .any(|member| member.staff_type == Some(StaffType::ChiefJudgePrimary));
    if !has_chief_judge {
        sink.error(
            "MISSING_CHIEF_JUDGE",
            "Event must have at least one Chief Judge (CHIEF_JUDGE_PRIMARY)",
            "Staff",
        );
    }

    match event.divisions.as_deref() {
        None | Some([]) => {
            if event.divisions.is_none() {
                sink.error(
                    "DIVISIONS_REQUIRED",
                    "Divisions list is required",
                    "DivisionsRegistry",
                );
            }
            sink.error(
                "NO_DIVISIONS",
                "Event must have at least one division",
                "DivisionsRegistry",
            );
        }
        Some(divisions) => {
            for (index, division) in divisions.iter().enumerate() {
                validate_division(
                    division,
                    &mut sink.with_prefix(&format!("DivisionsRegistry[{index}]")),
                );
            }
        }
    }
}

pub fn validate_division(division: &Division, sink: &mut DefectSink<'_>) {
    if division.division_type == DivisionType::Undefined {
        sink.error(
            "INVALID_DIVISION_TYPE",
            "Division type must be one of: Newcomer, Novice, Intermediate, Advanced, \
             AllStar, Champions, Masters, Juniors, Sophisticated",
            "Type",
        );
    }

    match division.rounds.as_deref() {
        None | Some([]) => {
            if division.rounds.is_none() {
                sink.error("ROUNDS_REQUIRED", "Rounds list is required", "Rounds");
            }
            sink.error("NO_ROUNDS", "Division must have at least one round", "Rounds");
        }
        Some(rounds) => {
            for (index, round) in rounds.iter().enumerate() {
                validate_round(round, &mut sink.with_prefix(&format!("Rounds[{index}]")));
            }
        }
    }
}

/// Validates each competitor, then applies the round-type bundle to it before moving on.
pub fn validate_round(round: &Round, sink: &mut DefectSink<'_>) {
    if round.round_type.is_none() {
        sink.error(
            "INVALID_ROUND_TYPE",
            "Round type must be 'Prelims', 'Quarters', 'Semis', or 'Finals'",
            "Type",
        );
    }
    let bundle = round.round_type.map(rules_for);

    match round.competitors.as_deref() {
        None | Some([]) => {
            if round.competitors.is_none() {
                sink.error(
                    "COMPETITORS_REQUIRED",
                    "Competitors list is required",
                    "Competitors",
                );
            }
            sink.error(
                "NO_COMPETITORS",
                "Round must have at least one competitor",
                "Competitors",
            );
        }
        Some(competitors) => {
            for (index, competitor) in competitors.iter().enumerate() {
                let mut scoped = sink.with_prefix(&format!("Competitors[{index}]"));
                validate_competitor(competitor, &mut scoped);
                if let Some(bundle) = &bundle {
                    bundle.apply(competitor, &mut scoped);
                }
            }
        }
    }
}

pub fn validate_competitor(competitor: &Competitor, sink: &mut DefectSink<'_>) {
    match competitor.participants.as_deref() {
        None | Some([]) => {
            if competitor.participants.is_none() {
                sink.error(
                    "PARTICIPANTS_REQUIRED",
                    "Participants list is required",
                    "Participants",
                );
            }
            sink.error(
                "NO_PARTICIPANTS",
                "Competitor must have at least one participant",
                "Participants",
            );
        }
        Some(participants) => {
            for (index, participant) in participants.iter().enumerate() {
                validate_participant(
                    participant,
                    &mut sink.with_prefix(&format!("Participants[{index}]")),
                );
            }
            if has_duplicate_ids(participants.iter().map(|p| p.id.as_deref())) {
                sink.error(
                    "DUPLICATE_PARTICIPANT_IDS",
                    "Competitor cannot have duplicate participant IDs",
                    "Participants",
                );
            }
        }
    }

    match competitor.judges.as_deref() {
        None => sink.error("JUDGES_REQUIRED", "Judges list is required", "Judges"),
        Some(judges) => {
            for (index, judge) in judges.iter().enumerate() {
                validate_judge(judge, &mut sink.with_prefix(&format!("Judges[{index}]")));
            }
            if has_duplicate_ids(judges.iter().map(|j| j.id.as_deref())) {
                sink.error(
                    "DUPLICATE_JUDGE_IDS",
                    "Competitor cannot have duplicate judge IDs",
                    "Judges",
                );
            }
        }
    }
}

/// Blank and absent ids are not identifiers and never collide.
fn has_duplicate_ids<'a>(ids: impl Iterator<Item = Option<&'a str>>) -> bool {
    let mut seen = HashSet::new();
    ids.flatten()
        .filter(|id| !is_blank(id))
        .any(|id| !seen.insert(id))
}
