//! Lenient wire decoding for submission payloads.
//!
//! Scoring tools in the field emit enums as names, numeric codes, or numeric strings, and
//! leave optional text as `null`. The helpers here absorb that variance so the validators
//! see a uniform tree: unknown enum tokens become absent (or the default variant) and are
//! reported as defects later instead of rejecting the whole document.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::domain::EventResultsRequest;

/// An enum carried on the wire by name or numeric code.
pub trait WireEnum: Copy + Sized + 'static {
    const VARIANTS: &'static [(Self, &'static str, i64)];

    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(_, wire, _)| *wire == name)
            .map(|(variant, _, _)| *variant)
    }

    fn from_code(code: i64) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(_, _, value)| *value == code)
            .map(|(variant, _, _)| *variant)
    }

    fn wire_name(self) -> &'static str
    where
        Self: PartialEq,
    {
        Self::VARIANTS
            .iter()
            .find(|(variant, _, _)| *variant == self)
            .map(|(_, wire, _)| *wire)
            .unwrap_or("")
    }
}

fn enum_from_value<T: WireEnum>(value: &Value) -> Option<T> {
    match value {
        Value::String(raw) => T::from_name(raw)
            .or_else(|| raw.trim().parse::<i64>().ok().and_then(T::from_code)),
        Value::Number(number) => number.as_i64().and_then(T::from_code),
        _ => None,
    }
}

/// Decodes an enum, yielding `None` for `null` or any unrecognized token.
pub fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: WireEnum,
{
    let value = Value::deserialize(deserializer)?;
    Ok(enum_from_value(&value))
}

/// Decodes an enum, falling back to the type's default for `null` or unknown tokens.
pub fn lenient_enum_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: WireEnum + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(enum_from_value(&value).unwrap_or_default())
}

pub fn null_as_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifier and score text. Numbers are kept in their JSON spelling; `null` stays absent.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        other => Err(de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

pub fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_timestamp(trimmed)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid date '{raw}'")))
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(value) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(value);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Missing id and score fields decode to blank; only an explicit `null` is absent.
pub fn blank() -> Option<String> {
    Some(String::new())
}

/// Missing collections decode to empty; only an explicit `null` is absent.
pub fn empty_list<T>() -> Option<Vec<T>> {
    Some(Vec::new())
}

/// Decodes a whole submission document. A JSON `null` document yields `Ok(None)`.
pub fn request_from_slice(bytes: &[u8]) -> Result<Option<EventResultsRequest>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submissions::domain::{
        CallbackType, Division, DivisionType, Judge, Participant, ParticipantType, Round,
        RoundType, Staff, StaffType,
    };
    use serde_json::json;

    #[test]
    fn enums_accept_names_codes_and_numeric_strings() {
        let by_name: Round = serde_json::from_value(json!({ "type": "Finals" })).unwrap();
        let by_code: Round = serde_json::from_value(json!({ "type": 2 })).unwrap();
        let by_text: Round = serde_json::from_value(json!({ "type": " 3 " })).unwrap();
        assert_eq!(by_name.round_type, Some(RoundType::Finals));
        assert_eq!(by_code.round_type, Some(RoundType::Quarters));
        assert_eq!(by_text.round_type, Some(RoundType::Semis));
    }

    #[test]
    fn unknown_enum_tokens_become_absent_or_default() {
        let round: Round = serde_json::from_value(json!({ "type": "Octofinals" })).unwrap();
        assert_eq!(round.round_type, None);

        let participant: Participant =
            serde_json::from_value(json!({ "type": 9, "name": "Dancer" })).unwrap();
        assert_eq!(participant.role, None);

        let division: Division =
            serde_json::from_value(json!({ "type": "Pro", "typeSecondary": null })).unwrap();
        assert_eq!(division.division_type, DivisionType::Undefined);
        assert_eq!(division.secondary_type, DivisionType::Undefined);
    }

    #[test]
    fn staff_roles_use_screaming_snake_case() {
        let staff: Staff =
            serde_json::from_value(json!({ "id": "", "type": "CHIEF_JUDGE_PRIMARY" })).unwrap();
        assert_eq!(staff.staff_type, Some(StaffType::ChiefJudgePrimary));
        assert_eq!(
            serde_json::to_value(StaffType::ScorePerson).unwrap(),
            json!("SCORE_PERSON")
        );
        assert_eq!(StaffType::RawScoreJudge.wire_name(), "RAW_SCORE_JUDGE");
    }

    #[test]
    fn missing_and_null_ids_are_distinguished() {
        let missing: Judge = serde_json::from_value(json!({ "name": "Judge A" })).unwrap();
        assert_eq!(missing.id.as_deref(), Some(""));
        assert_eq!(missing.score.as_deref(), Some(""));

        let null: Judge =
            serde_json::from_value(json!({ "id": null, "score": null })).unwrap();
        assert_eq!(null.id, None);
        assert_eq!(null.score, None);

        let numeric: Judge = serde_json::from_value(json!({ "id": 12, "score": 4.5 })).unwrap();
        assert_eq!(numeric.id.as_deref(), Some("12"));
        assert_eq!(numeric.score.as_deref(), Some("4.5"));
    }

    #[test]
    fn missing_and_null_collections_are_distinguished() {
        let missing: Round = serde_json::from_value(json!({ "type": "Prelims" })).unwrap();
        assert_eq!(missing.competitors, Some(Vec::new()));

        let null: Round =
            serde_json::from_value(json!({ "type": "Prelims", "competitors": null })).unwrap();
        assert_eq!(null.competitors, None);
    }

    #[test]
    fn callback_codes_decode() {
        let value = json!({ "participants": [], "callback": 3, "judges": [] });
        let competitor: crate::submissions::domain::Competitor =
            serde_json::from_value(value).unwrap();
        assert_eq!(competitor.callback, Some(CallbackType::Alt1));
    }

    #[test]
    fn timestamps_accept_dates_and_offsets() {
        assert_eq!(
            parse_timestamp("2025-05-02"),
            NaiveDate::from_ymd_opt(2025, 5, 2).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(
            parse_timestamp("2025-05-02T10:30:00+02:00"),
            NaiveDate::from_ymd_opt(2025, 5, 2).and_then(|d| d.and_hms_opt(8, 30, 0))
        );
        assert!(parse_timestamp("2025-05-02T10:30:00.250").is_some());
        assert!(parse_timestamp("second of May").is_none());
    }

    #[test]
    fn null_document_decodes_to_none() {
        assert_eq!(request_from_slice(b"null").unwrap(), None);
        let parsed = request_from_slice(br#"{"event":null}"#).unwrap();
        assert_eq!(parsed.map(|request| request.event), Some(None));
    }

    #[test]
    fn role_names_round_trip_through_the_table() {
        assert_eq!(
            ParticipantType::from_name("Follower"),
            Some(ParticipantType::Follower)
        );
        assert_eq!(ParticipantType::from_code(1), Some(ParticipantType::Leader));
        assert_eq!(ParticipantType::from_name("follower"), None);
    }
}
