//! Round-type rule bundles.
//!
//! Non-final rounds score single dancers with raw marks and callbacks; finals score
//! leader/follower couples with placements. [`rules_for`] is the only place the distinction
//! is made.

use std::sync::LazyLock;

use regex::Regex;

use super::defects::DefectSink;
use super::entities::is_blank;
use crate::submissions::domain::{Competitor, ParticipantType, RoundType};

/// Raw marks allowed outside finals: Yes, Alt1, Alt2, Alt3, No.
pub const NON_FINAL_SCORES: [&str; 5] = ["10", "4.5", "4.3", "4.2", "0"];

static PLACEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]*$").expect("placement pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrammar {
    FixedSet(&'static [&'static str]),
    /// Positive integer without a leading zero.
    PositiveInteger,
}

impl ScoreGrammar {
    pub fn accepts(self, score: &str) -> bool {
        match self {
            ScoreGrammar::FixedSet(allowed) => allowed.contains(&score),
            ScoreGrammar::PositiveInteger => PLACEMENT_RE.is_match(score),
        }
    }

    fn rejection(self, score: &str) -> String {
        match self {
            ScoreGrammar::FixedSet(_) => {
                format!("Score '{score}' is invalid. Must be '10', '4.5', '4.3', '4.2', or '0'")
            }
            ScoreGrammar::PositiveInteger => {
                format!("Score '{score}' is invalid. Must be a positive integer (1 or greater)")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantRule {
    Single,
    LeaderFollowerPair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackRule {
    Required,
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleBundle {
    pub scores: ScoreGrammar,
    pub participants: ParticipantRule,
    pub callback: CallbackRule,
}

const NON_FINAL: RuleBundle = RuleBundle {
    scores: ScoreGrammar::FixedSet(&NON_FINAL_SCORES),
    participants: ParticipantRule::Single,
    callback: CallbackRule::Required,
};

const FINAL: RuleBundle = RuleBundle {
    scores: ScoreGrammar::PositiveInteger,
    participants: ParticipantRule::LeaderFollowerPair,
    callback: CallbackRule::Forbidden,
};

pub fn rules_for(round_type: RoundType) -> RuleBundle {
    match round_type {
        RoundType::Prelims | RoundType::Quarters | RoundType::Semis => NON_FINAL,
        RoundType::Finals => FINAL,
    }
}

impl RuleBundle {
    /// Applies the bundle to one competitor. `sink` is scoped to that competitor.
    pub fn apply(&self, competitor: &Competitor, sink: &mut DefectSink<'_>) {
        self.check_participants(competitor, sink);
        self.check_callback(competitor, sink);
        self.check_scores(competitor, sink);
    }

    fn check_participants(&self, competitor: &Competitor, sink: &mut DefectSink<'_>) {
        let participants = competitor.participants.as_deref().unwrap_or_default();
        match self.participants {
            ParticipantRule::Single => {
                if participants.len() != 1 {
                    sink.error(
                        "INVALID_PARTICIPANT_COUNT",
                        "Non-final round competitors must have exactly 1 participant",
                        "Participants",
                    );
                }
            }
            ParticipantRule::LeaderFollowerPair => {
                if participants.len() != 2 {
                    sink.error(
                        "INVALID_PARTICIPANT_COUNT",
                        "Final round competitors must have exactly 2 participants",
                        "Participants",
                    );
                    return;
                }
                let has = |role| participants.iter().any(|p| p.role == Some(role));
                if !has(ParticipantType::Leader) {
                    sink.error(
                        "MISSING_LEADER",
                        "Final round competitor must have one Leader",
                        "Participants",
                    );
                }
                if !has(ParticipantType::Follower) {
                    sink.error(
                        "MISSING_FOLLOWER",
                        "Final round competitor must have one Follower",
                        "Participants",
                    );
                }
            }
        }
    }

    fn check_callback(&self, competitor: &Competitor, sink: &mut DefectSink<'_>) {
        match (self.callback, competitor.callback) {
            (CallbackRule::Required, None) => sink.error(
                "CALLBACK_REQUIRED",
                "Callback is required for non-final rounds. \
                 Must be 'Yes', 'No', 'Alt1', 'Alt2', or 'Alt3'",
                "Callback",
            ),
            (CallbackRule::Forbidden, Some(_)) => sink.error(
                "CALLBACK_NOT_ALLOWED",
                "Callback must be null for final rounds",
                "Callback",
            ),
            _ => {}
        }
    }

    fn check_scores(&self, competitor: &Competitor, sink: &mut DefectSink<'_>) {
        let judges = competitor.judges.as_deref().unwrap_or_default();
        for (index, judge) in judges.iter().enumerate() {
            // An explicit null is already reported by the judge validator.
            let Some(score) = judge.score.as_deref() else {
                continue;
            };
            let path = format!("Judges[{index}].Score");
            if is_blank(score) {
                sink.error("JUDGE_SCORE_REQUIRED", "Score is required", &path);
            } else if !self.scores.accepts(score) {
                sink.error("JUDGE_SCORE_INVALID", self.scores.rejection(score), &path);
            }
        }
    }
}
