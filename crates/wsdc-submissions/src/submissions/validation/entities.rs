//! Leaf validators for participants, judges, and staff.

use super::defects::{limits, DefectSink};
use crate::submissions::domain::{parse_positive_id, Judge, Participant, Staff};

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn exceeds(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

/// Blank, or a base-10 integer greater than zero.
pub(crate) fn is_valid_id_format(id: &str) -> bool {
    id.is_empty() || parse_positive_id(id).is_some()
}

struct IdCodes {
    label: &'static str,
    required: &'static str,
    too_long: &'static str,
    format: &'static str,
}

const PARTICIPANT_ID: IdCodes = IdCodes {
    label: "Participant",
    required: "PARTICIPANT_ID_REQUIRED",
    too_long: "PARTICIPANT_ID_TOO_LONG",
    format: "INVALID_PARTICIPANT_ID_FORMAT",
};

const JUDGE_ID: IdCodes = IdCodes {
    label: "Judge",
    required: "JUDGE_ID_REQUIRED",
    too_long: "JUDGE_ID_TOO_LONG",
    format: "INVALID_JUDGE_ID_FORMAT",
};

const STAFF_ID: IdCodes = IdCodes {
    label: "Staff",
    required: "STAFF_ID_REQUIRED",
    too_long: "STAFF_ID_TOO_LONG",
    format: "INVALID_STAFF_ID_FORMAT",
};

fn check_id(id: Option<&str>, codes: &IdCodes, sink: &mut DefectSink<'_>) {
    let Some(id) = id else {
        sink.error(codes.required, format!("{} ID is required", codes.label), "Id");
        return;
    };
    if exceeds(id, limits::ID) {
        sink.error(
            codes.too_long,
            format!("{} ID must not exceed {} characters", codes.label, limits::ID),
            "Id",
        );
    }
    if !is_valid_id_format(id) {
        sink.error(
            codes.format,
            format!("{} ID must be a positive integer or blank", codes.label),
            "Id",
        );
    }
}

fn check_name(
    name: &str,
    label: &str,
    required: &str,
    too_long: &str,
    sink: &mut DefectSink<'_>,
) {
    if is_blank(name) {
        sink.error(required, format!("{label} name is required"), "Name");
    } else if exceeds(name, limits::NAME) {
        sink.error(
            too_long,
            format!("{label} name must not exceed {} characters", limits::NAME),
            "Name",
        );
    }
}

pub fn validate_participant(participant: &Participant, sink: &mut DefectSink<'_>) {
    check_id(participant.id.as_deref(), &PARTICIPANT_ID, sink);

    if participant.role.is_none() {
        sink.error(
            "INVALID_PARTICIPANT_TYPE",
            "Participant type must be 'Leader' or 'Follower'",
            "Type",
        );
    }

    check_name(
        &participant.name,
        "Participant",
        "PARTICIPANT_NAME_REQUIRED",
        "PARTICIPANT_NAME_TOO_LONG",
        sink,
    );
}

/// Format-level checks only. Score grammar depends on the round and is applied by the
/// round rule bundle.
pub fn validate_judge(judge: &Judge, sink: &mut DefectSink<'_>) {
    check_id(judge.id.as_deref(), &JUDGE_ID, sink);

    match judge.score.as_deref() {
        None => sink.error("JUDGE_SCORE_REQUIRED", "Judge score is required", "Score"),
        Some(score) if exceeds(score, limits::SCORE) => sink.error(
            "JUDGE_SCORE_TOO_LONG",
            format!("Judge score must not exceed {} characters", limits::SCORE),
            "Score",
        ),
        Some(_) => {}
    }
}

pub fn validate_staff(staff: &Staff, sink: &mut DefectSink<'_>) {
    check_id(staff.id.as_deref(), &STAFF_ID, sink);

    if staff.staff_type.is_none() {
        sink.error(
            "INVALID_STAFF_TYPE",
            "Staff type must be one of: EVENT_DIRECTOR, CHIEF_JUDGE_PRIMARY, \
             CHIEF_JUDGE_SECONDARY, RAW_SCORE_JUDGE, SCORE_PERSON",
            "Type",
        );
    }

    check_name(
        &staff.name,
        "Staff",
        "STAFF_NAME_REQUIRED",
        "STAFF_NAME_TOO_LONG",
        sink,
    );

    if exceeds(&staff.email, limits::EMAIL) {
        sink.error(
            "STAFF_EMAIL_TOO_LONG",
            format!("Staff email must not exceed {} characters", limits::EMAIL),
            "Email",
        );
    }
    if exceeds(&staff.phone, limits::PHONE) {
        sink.error(
            "STAFF_PHONE_TOO_LONG",
            format!("Staff phone must not exceed {} characters", limits::PHONE),
            "Phone",
        );
    }
}
