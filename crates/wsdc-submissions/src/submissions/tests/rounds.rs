use crate::submissions::domain::RoundType;
use crate::submissions::validation::{
    rules_for, CallbackRule, ParticipantRule, ScoreGrammar, NON_FINAL_SCORES,
};

#[test]
fn non_final_rounds_share_one_bundle() {
    let prelims = rules_for(RoundType::Prelims);
    assert_eq!(prelims, rules_for(RoundType::Quarters));
    assert_eq!(prelims, rules_for(RoundType::Semis));
    assert_eq!(prelims.participants, ParticipantRule::Single);
    assert_eq!(prelims.callback, CallbackRule::Required);
    assert_eq!(prelims.scores, ScoreGrammar::FixedSet(&NON_FINAL_SCORES));
}

#[test]
fn finals_use_couples_and_placements() {
    let finals = rules_for(RoundType::Finals);
    assert_eq!(finals.participants, ParticipantRule::LeaderFollowerPair);
    assert_eq!(finals.callback, CallbackRule::Forbidden);
    assert_eq!(finals.scores, ScoreGrammar::PositiveInteger);
}

#[test]
fn raw_marks_are_an_exact_set() {
    let grammar = rules_for(RoundType::Semis).scores;
    for score in NON_FINAL_SCORES {
        assert!(grammar.accepts(score), "{score} should be accepted");
    }
    for score in ["11", "4.50", " 10", "4.4", "1", "-0", "yes"] {
        assert!(!grammar.accepts(score), "{score} should be rejected");
    }
}

#[test]
fn placements_are_positive_without_leading_zero() {
    let grammar = rules_for(RoundType::Finals).scores;
    for score in ["1", "9", "10", "11", "120"] {
        assert!(grammar.accepts(score), "{score} should be accepted");
    }
    for score in ["0", "01", "-1", "+3", "1.0", "4.5", "", " 2"] {
        assert!(!grammar.accepts(score), "{score} should be rejected");
    }
}
