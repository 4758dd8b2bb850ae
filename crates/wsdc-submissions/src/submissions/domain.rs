use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::decode::{self, WireEnum};

/// Root wrapper for an inbound results submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResultsRequest {
    #[serde(default)]
    pub event: Option<Event>,
}

/// Event metadata plus the staff and division trees being reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub event_name: String,
    #[serde(default, deserialize_with = "decode::optional_timestamp")]
    pub event_start_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "decode::optional_timestamp")]
    pub event_end_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub venue_name: String,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub venue_address1: String,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub venue_address2: String,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub venue_city: String,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub venue_state_or_province: String,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub venue_postal_code: String,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub venue_country: String,
    #[serde(default = "decode::empty_list")]
    pub staff: Option<Vec<Staff>>,
    #[serde(
        default = "decode::empty_list",
        rename = "divisionsRegistry",
        alias = "divisions"
    )]
    pub divisions: Option<Vec<Division>>,
    /// Free-form names of divisions that are not tracked by the registry.
    #[serde(default, deserialize_with = "decode::null_as_default")]
    pub divisions_non_registry: Vec<String>,
}

/// Event staff member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    #[serde(default = "decode::blank", deserialize_with = "decode::optional_text")]
    pub id: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "decode::lenient_enum")]
    pub staff_type: Option<StaffType>,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub name: String,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub email: String,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub phone: String,
}

/// A competition category and the rounds danced in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    #[serde(
        default,
        rename = "type",
        deserialize_with = "decode::lenient_enum_or_default"
    )]
    pub division_type: DivisionType,
    #[serde(
        default,
        rename = "typeSecondary",
        alias = "secondaryType",
        deserialize_with = "decode::lenient_enum_or_default"
    )]
    pub secondary_type: DivisionType,
    #[serde(default = "decode::empty_list")]
    pub rounds: Option<Vec<Round>>,
}

/// One round of a division. The round type selects the scoring rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    #[serde(default, rename = "type", deserialize_with = "decode::lenient_enum")]
    pub round_type: Option<RoundType>,
    #[serde(default = "decode::empty_list")]
    pub competitors: Option<Vec<Competitor>>,
}

/// A single entry in a round: one dancer in non-final rounds, a couple in finals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    #[serde(default = "decode::empty_list")]
    pub participants: Option<Vec<Participant>>,
    #[serde(default, deserialize_with = "decode::lenient_enum")]
    pub callback: Option<CallbackType>,
    #[serde(default = "decode::empty_list")]
    pub judges: Option<Vec<Judge>>,
}

/// A dancer. A blank id marks a dancer without a WSDC registry number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default = "decode::blank", deserialize_with = "decode::optional_text")]
    pub id: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "decode::lenient_enum")]
    pub role: Option<ParticipantType>,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub name: String,
}

impl Participant {
    /// The registry number, when the id holds a positive integer.
    pub fn wsdc_id(&self) -> Option<i32> {
        self.id.as_deref().and_then(parse_positive_id)
    }

    pub fn has_valid_wsdc_id(&self) -> bool {
        self.wsdc_id().is_some()
    }
}

/// A judge's mark for one competitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Judge {
    #[serde(default = "decode::blank", deserialize_with = "decode::optional_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "decode::null_as_blank")]
    pub name: String,
    #[serde(default = "decode::blank", deserialize_with = "decode::optional_text")]
    pub score: Option<String>,
    #[serde(default)]
    pub violation: Option<String>,
}

/// Resolved caller identity handed to the summarizer by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterIdentity {
    pub name: String,
    pub email: String,
}

/// Parses registry-style ids: a base-10 integer greater than zero.
pub(crate) fn parse_positive_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|value| *value > 0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DivisionType {
    #[default]
    Undefined,
    Newcomer,
    Novice,
    Intermediate,
    Advanced,
    AllStar,
    Champions,
    Masters,
    Juniors,
    Sophisticated,
}

impl WireEnum for DivisionType {
    const VARIANTS: &'static [(Self, &'static str, i64)] = &[
        (Self::Undefined, "Undefined", 0),
        (Self::Newcomer, "Newcomer", 1),
        (Self::Novice, "Novice", 2),
        (Self::Intermediate, "Intermediate", 3),
        (Self::Advanced, "Advanced", 4),
        (Self::AllStar, "AllStar", 5),
        (Self::Champions, "Champions", 6),
        (Self::Masters, "Masters", 7),
        (Self::Juniors, "Juniors", 8),
        (Self::Sophisticated, "Sophisticated", 9),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundType {
    Prelims,
    Quarters,
    Semis,
    Finals,
}

impl WireEnum for RoundType {
    const VARIANTS: &'static [(Self, &'static str, i64)] = &[
        (Self::Prelims, "Prelims", 1),
        (Self::Quarters, "Quarters", 2),
        (Self::Semis, "Semis", 3),
        (Self::Finals, "Finals", 4),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantType {
    Leader,
    Follower,
}

impl WireEnum for ParticipantType {
    const VARIANTS: &'static [(Self, &'static str, i64)] =
        &[(Self::Leader, "Leader", 1), (Self::Follower, "Follower", 2)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallbackType {
    Yes,
    No,
    Alt1,
    Alt2,
    Alt3,
}

impl WireEnum for CallbackType {
    const VARIANTS: &'static [(Self, &'static str, i64)] = &[
        (Self::Yes, "Yes", 1),
        (Self::No, "No", 2),
        (Self::Alt1, "Alt1", 3),
        (Self::Alt2, "Alt2", 4),
        (Self::Alt3, "Alt3", 5),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffType {
    EventDirector,
    ChiefJudgePrimary,
    ChiefJudgeSecondary,
    RawScoreJudge,
    ScorePerson,
}

impl WireEnum for StaffType {
    const VARIANTS: &'static [(Self, &'static str, i64)] = &[
        (Self::EventDirector, "EVENT_DIRECTOR", 1),
        (Self::ChiefJudgePrimary, "CHIEF_JUDGE_PRIMARY", 2),
        (Self::ChiefJudgeSecondary, "CHIEF_JUDGE_SECONDARY", 3),
        (Self::RawScoreJudge, "RAW_SCORE_JUDGE", 4),
        (Self::ScorePerson, "SCORE_PERSON", 5),
    ];
}
