//! Community program records shown in the paged list views

use crate::error::CohortError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use time::OffsetDateTime;
use tracing::debug;

/// Access level of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
    Consultant,
    Member,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Staff => write!(f, "staff"),
            Role::Consultant => write!(f, "consultant"),
            Role::Member => write!(f, "member"),
        }
    }
}

impl FromStr for Role {
    type Err = CohortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .into_iter()
            .find(|role| role.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CohortError::Parse(format!("unknown role '{}'", s)))
    }
}

impl Role {
    pub fn all() -> Vec<Role> {
        vec![
            Role::Admin,
            Role::Manager,
            Role::Staff,
            Role::Consultant,
            Role::Member,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Upcoming => write!(f, "upcoming"),
            EventStatus::Ongoing => write!(f, "ongoing"),
            EventStatus::Completed => write!(f, "completed"),
            EventStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for EventStatus {
    type Err = CohortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventStatus::all()
            .into_iter()
            .find(|status| status.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CohortError::Parse(format!("unknown event status '{}'", s)))
    }
}

impl EventStatus {
    pub fn all() -> Vec<EventStatus> {
        vec![
            EventStatus::Upcoming,
            EventStatus::Ongoing,
            EventStatus::Completed,
            EventStatus::Cancelled,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    /// Name of the community program this event belongs to
    pub program: String,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    pub capacity: u32,
    #[serde(default)]
    pub attendee_count: u32,
    pub status: EventStatus,
}

impl Event {
    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.attendee_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Narrows the event list. Changing it should send the list back to page 1,
/// so it doubles as a paginator reset trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub search: String,
    pub status: Option<EventStatus>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        if self.status.is_some_and(|status| status != event.status) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || [&event.title, &event.program, &event.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let matched: Vec<&Event> = events.iter().filter(|e| self.matches(e)).collect();
        debug!(
            "Event filter {:?} matched {} of {} events",
            self,
            matched.len(),
            events.len()
        );
        matched
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    pub search: String,
    pub role: Option<Role>,
}

impl MemberFilter {
    pub fn matches(&self, member: &Member) -> bool {
        if self.role.is_some_and(|role| role != member.role) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || member.name.to_lowercase().contains(&needle)
            || member.email.to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, members: &'a [Member]) -> Vec<&'a Member> {
        members.iter().filter(|m| self.matches(m)).collect()
    }
}

/// Read a JSON array of records (events, members) from disk
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CohortError> {
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<T> = serde_json::from_str(&contents)?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

const SAMPLE_PROGRAMS: [&str; 4] = [
    "Youth Mentoring",
    "Senior Digital Skills",
    "Community Garden",
    "Newcomer Welcome",
];
const SAMPLE_LOCATIONS: [&str; 3] = ["Main Hall", "Library Annex", "Riverside Park"];

/// Deterministic demo events, one a week starting January 2026
pub fn sample_events(count: usize) -> Vec<Event> {
    let first = time::macros::datetime!(2026-01-05 18:00 UTC);
    (0..count)
        .map(|i| {
            let program = SAMPLE_PROGRAMS[i % SAMPLE_PROGRAMS.len()];
            let status = match i % 10 {
                0 => EventStatus::Cancelled,
                1..=3 => EventStatus::Completed,
                4 => EventStatus::Ongoing,
                _ => EventStatus::Upcoming,
            };
            Event {
                id: i as u64 + 1,
                title: format!("{} session {}", program, i / SAMPLE_PROGRAMS.len() + 1),
                program: program.to_string(),
                location: SAMPLE_LOCATIONS[i % SAMPLE_LOCATIONS.len()].to_string(),
                starts_at: first + time::Duration::weeks(i as i64),
                capacity: 20 + (i % 5) as u32 * 5,
                attendee_count: (i * 7 % 25) as u32,
                status,
            }
        })
        .collect()
}

pub fn sample_members(count: usize) -> Vec<Member> {
    let roles = Role::all();
    (0..count)
        .map(|i| Member {
            id: i as u64 + 1,
            name: format!("Member {}", i + 1),
            email: format!("member{}@example.org", i + 1),
            role: roles[i % roles.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" consultant ".parse::<Role>().unwrap(), Role::Consultant);
        assert!(matches!("owner".parse::<Role>(), Err(CohortError::Parse(_))));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("ONGOING".parse::<EventStatus>().unwrap(), EventStatus::Ongoing);
        assert!("postponed".parse::<EventStatus>().is_err());
    }

    #[test]
    fn test_sample_events_are_deterministic() {
        let a = sample_events(12);
        let b = sample_events(12);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert_eq!(a[0].id, 1);
        assert_eq!(a[0].status, EventStatus::Cancelled);
        assert!(a[1].starts_at > a[0].starts_at);
    }

    #[test]
    fn test_event_filter_search_and_status() {
        let events = sample_events(40);

        let garden = EventFilter {
            search: "GARDEN".to_string(),
            status: None,
        };
        let matched = garden.apply(&events);
        assert_eq!(matched.len(), 10);
        assert!(matched.iter().all(|e| e.program == "Community Garden"));

        let cancelled = EventFilter {
            search: String::new(),
            status: Some(EventStatus::Cancelled),
        };
        assert_eq!(cancelled.apply(&events).len(), 4);

        assert_eq!(EventFilter::default().apply(&events).len(), 40);
    }

    #[test]
    fn test_member_filter_by_role() {
        let members = sample_members(10);
        let staff = MemberFilter {
            search: String::new(),
            role: Some(Role::Staff),
        };
        assert_eq!(staff.apply(&members).len(), 2);

        let by_email = MemberFilter {
            search: "member3@".to_string(),
            role: None,
        };
        assert_eq!(by_email.apply(&members).len(), 1);
    }

    #[test]
    fn test_event_json_round_trip_through_file() {
        let events = sample_events(3);
        let path = std::env::temp_dir().join(format!("cohort-events-{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&events).unwrap()).unwrap();

        let loaded: Vec<Event> = load_records(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, events);
    }

    #[test]
    fn test_event_json_defaults_attendee_count() {
        let json = r#"[{
            "id": 7,
            "title": "Open house",
            "program": "Newcomer Welcome",
            "location": "Main Hall",
            "starts_at": "2026-03-01T10:00:00Z",
            "capacity": 30,
            "status": "upcoming"
        }]"#;
        let events: Vec<Event> = serde_json::from_str(json).unwrap();
        assert_eq!(events[0].attendee_count, 0);
        assert_eq!(events[0].seats_left(), 30);
    }
}
