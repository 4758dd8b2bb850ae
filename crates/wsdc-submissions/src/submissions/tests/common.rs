use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::response::Response;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::submissions::accounts::{Account, AccountError, AccountRepository};
use crate::submissions::domain::{
    CallbackType, Competitor, Division, DivisionType, Event, EventResultsRequest, Judge,
    Participant, ParticipantType, Round, RoundType, Staff, StaffType, SubmitterIdentity,
};
use crate::submissions::service::{Clock, SubmissionService};
use crate::submissions::validation::Defect;

/// Cheapest cost bcrypt accepts; keeps account tests fast.
pub(super) const TEST_BCRYPT_COST: u32 = 4;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date")
}

pub(super) fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 5, 18, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn identity() -> SubmitterIdentity {
    SubmitterIdentity {
        name: "Test User".to_string(),
        email: "testuser@wsdc.com".to_string(),
    }
}

pub(super) fn participant(id: &str, role: ParticipantType, name: &str) -> Participant {
    Participant {
        id: Some(id.to_string()),
        role: Some(role),
        name: name.to_string(),
    }
}

pub(super) fn judge(id: &str, name: &str, score: &str) -> Judge {
    Judge {
        id: Some(id.to_string()),
        name: name.to_string(),
        score: Some(score.to_string()),
        violation: None,
    }
}

fn panel(scores: [&str; 3]) -> Vec<Judge> {
    vec![
        judge("501", "Judge A", scores[0]),
        judge("502", "Judge B", scores[1]),
        judge("503", "Judge C", scores[2]),
    ]
}

pub(super) fn prelim_entry(
    id: &str,
    role: ParticipantType,
    name: &str,
    callback: CallbackType,
) -> Competitor {
    Competitor {
        participants: Some(vec![participant(id, role, name)]),
        callback: Some(callback),
        judges: Some(panel(["10", "4.5", "0"])),
    }
}

pub(super) fn finals_couple(
    leader: (&str, &str),
    follower: (&str, &str),
    placement: &str,
) -> Competitor {
    Competitor {
        participants: Some(vec![
            participant(leader.0, ParticipantType::Leader, leader.1),
            participant(follower.0, ParticipantType::Follower, follower.1),
        ]),
        callback: None,
        judges: Some(panel([placement, placement, placement])),
    }
}

pub(super) fn round(round_type: RoundType, competitors: Vec<Competitor>) -> Round {
    Round {
        round_type: Some(round_type),
        competitors: Some(competitors),
    }
}

pub(super) fn staff(id: &str, staff_type: StaffType, name: &str) -> Staff {
    Staff {
        id: Some(id.to_string()),
        staff_type: Some(staff_type),
        name: name.to_string(),
        email: String::new(),
        phone: String::new(),
    }
}

pub(super) fn event(divisions: Vec<Division>) -> Event {
    Event {
        event_name: "The Test Event".to_string(),
        event_start_date: Some(date(2025, 5, 2)),
        event_end_date: Some(date(2025, 5, 4)),
        venue_name: "Venue Name".to_string(),
        venue_address1: "123 Venue St".to_string(),
        venue_address2: String::new(),
        venue_city: "Venue City".to_string(),
        venue_state_or_province: "VS".to_string(),
        venue_postal_code: "12345".to_string(),
        venue_country: "US".to_string(),
        staff: Some(vec![
            staff("", StaffType::ScorePerson, "Staff000"),
            staff("1001", StaffType::ChiefJudgePrimary, "Staff001"),
            staff("1002", StaffType::ChiefJudgePrimary, "Staff002"),
        ]),
        divisions: Some(divisions),
        divisions_non_registry: Vec::new(),
    }
}

/// Novice division: four prelim entries feeding two final couples.
pub(super) fn novice_division() -> Division {
    Division {
        division_type: DivisionType::Novice,
        secondary_type: DivisionType::Undefined,
        rounds: Some(vec![
            round(
                RoundType::Prelims,
                vec![
                    prelim_entry("101", ParticipantType::Leader, "Leader One", CallbackType::Yes),
                    prelim_entry("102", ParticipantType::Leader, "Leader Two", CallbackType::Alt1),
                    prelim_entry(
                        "201",
                        ParticipantType::Follower,
                        "Follower One",
                        CallbackType::Yes,
                    ),
                    prelim_entry("", ParticipantType::Follower, "Follower Two", CallbackType::No),
                ],
            ),
            round(
                RoundType::Finals,
                vec![
                    finals_couple(("101", "Leader One"), ("201", "Follower One"), "1"),
                    finals_couple(("102", "Leader Two"), ("", "Follower Two"), "2"),
                ],
            ),
        ]),
    }
}

pub(super) fn valid_request() -> EventResultsRequest {
    EventResultsRequest {
        event: Some(event(vec![novice_division()])),
    }
}

/// One division with `prelims` single entries (leaders then followers) and `finals` couples.
pub(super) fn sized_request(prelims: usize, finals: usize) -> EventResultsRequest {
    let leaders = prelims.div_ceil(2);
    let entries = (0..prelims)
        .map(|index| {
            let (role, label) = if index < leaders {
                (ParticipantType::Leader, "Leader")
            } else {
                (ParticipantType::Follower, "Follower")
            };
            prelim_entry(
                &(1000 + index).to_string(),
                role,
                &format!("{label} {index}"),
                CallbackType::Yes,
            )
        })
        .collect();
    let couples = (0..finals)
        .map(|index| {
            let placement = (index + 1).to_string();
            finals_couple(
                (&(1000 + index).to_string(), &format!("Leader {index}")),
                (&(2000 + index).to_string(), &format!("Follower {index}")),
                &placement,
            )
        })
        .collect();

    EventResultsRequest {
        event: Some(event(vec![Division {
            division_type: DivisionType::Intermediate,
            secondary_type: DivisionType::Undefined,
            rounds: Some(vec![
                round(RoundType::Prelims, entries),
                round(RoundType::Finals, couples),
            ]),
        }])),
    }
}

pub(super) fn event_mut(request: &mut EventResultsRequest) -> &mut Event {
    request.event.as_mut().expect("event present")
}

pub(super) fn round_mut(request: &mut EventResultsRequest, index: usize) -> &mut Round {
    event_mut(request)
        .divisions
        .as_mut()
        .and_then(|divisions| divisions.first_mut())
        .and_then(|division| division.rounds.as_mut())
        .and_then(|rounds| rounds.get_mut(index))
        .expect("round present")
}

pub(super) fn competitor_mut(
    request: &mut EventResultsRequest,
    round: usize,
    competitor: usize,
) -> &mut Competitor {
    round_mut(request, round)
        .competitors
        .as_mut()
        .and_then(|competitors| competitors.get_mut(competitor))
        .expect("competitor present")
}

pub(super) fn codes(defects: &[Defect]) -> Vec<&str> {
    defects.iter().map(|d| d.error_code.as_str()).collect()
}

pub(super) fn located<'a>(defects: &'a [Defect], code: &str) -> Vec<&'a str> {
    defects
        .iter()
        .filter(|d| d.error_code == code)
        .filter_map(|d| d.property_path.as_deref())
        .collect()
}

pub(super) struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(super) fn fixed_service() -> SubmissionService<FixedClock> {
    SubmissionService::with_clock(Arc::new(FixedClock(submitted_at())))
}

#[derive(Default, Clone)]
pub(super) struct MemoryAccounts {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MemoryAccounts {
    pub(super) fn with(account: Account) -> Self {
        let store = Self::default();
        store
            .accounts
            .write()
            .expect("lock")
            .insert(account.api_key_lookup.clone(), account);
        store
    }
}

impl AccountRepository for MemoryAccounts {
    fn find_by_lookup_hash(&self, lookup: &str) -> Result<Option<Account>, AccountError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| AccountError::Unavailable("lock poisoned".to_string()))?;
        Ok(accounts.get(lookup).cloned())
    }
}

pub(super) fn issue_account(api_key: &str) -> Account {
    Account::issue(
        Uuid::from_u128(1),
        "Test User",
        "testuser@wsdc.com",
        api_key,
        TEST_BCRYPT_COST,
    )
    .expect("bcrypt hash")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
