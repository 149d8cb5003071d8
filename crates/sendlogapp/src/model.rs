//! # Domain Model: Climbs, Attempts, Links and Friends
//!
//! This module defines the core data structures for sendlog: [`Climb`], [`Attempt`],
//! [`Link`], [`UserProfile`] and [`FriendEdge`].
//!
//! ## Ownership
//!
//! A climb belongs to exactly one user's catalogue (`owner_id`, never changed after
//! creation). Attempts and links have no identity outside their climb: they are
//! stored inside the climb document and always written back as whole fields.
//!
//! ## Sends Are Typed Attempts
//!
//! A send is recorded as an ordinary attempt whose [`AttemptKind`] is `Completion`.
//! Nothing about the notes text decides whether an attempt is a send, so a note that
//! happens to read "Sent it!" stays a regular attempt.
//!
//! ## Sequence Numbers
//!
//! Attempts are numbered from 1 in creation order. The climb keeps the highest number
//! ever issued in `attempt_counter`, so numbers are never reused, even when unsending
//! removes the completion attempt that held the latest number.
//!
//! ## Field Normalization
//!
//! Every write path runs [`validate_fields`], which trims text fields, drops blank
//! optional fields and checks the grade against the discipline's rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Result, SendlogError};
use crate::grade;

/// Opaque identifier of a user, as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    Boulder,
    Sport,
    Trad,
}

impl Discipline {
    pub const ALL: [Discipline; 3] = [Discipline::Boulder, Discipline::Sport, Discipline::Trad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Boulder => "Boulder",
            Discipline::Sport => "Sport",
            Discipline::Trad => "Trad",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = SendlogError;

    fn from_str(s: &str) -> Result<Self> {
        Discipline::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                SendlogError::Validation(format!(
                    "unknown discipline '{}' (expected boulder, sport or trad)",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttemptKind {
    #[default]
    Regular,
    Completion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub id: Uuid,
    pub sequence_number: u32,
    pub date: DateTime<Utc>,
    pub notes: String,
    #[serde(default)]
    pub kind: AttemptKind,
}

impl Attempt {
    pub fn new(sequence_number: u32, date: DateTime<Utc>, notes: &str, kind: AttemptKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence_number,
            date,
            notes: notes.trim().to_string(),
            kind,
        }
    }

    pub fn is_completion(&self) -> bool {
        self.kind == AttemptKind::Completion
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

impl Link {
    /// Builds a link from user input, rejecting blank names or urls.
    pub fn new(name: &str, url: &str) -> Result<Self> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() {
            return Err(SendlogError::Validation("link name cannot be empty".into()));
        }
        if url.is_empty() {
            return Err(SendlogError::Validation("link url cannot be empty".into()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            url: url.to_string(),
        })
    }
}

/// The user-editable descriptive fields of a climb.
///
/// Used as the payload for creating, editing and copying climbs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbFields {
    pub name: String,
    pub discipline: Discipline,
    pub grade: String,
    pub location: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl ClimbFields {
    pub fn new(
        name: impl Into<String>,
        discipline: Discipline,
        grade: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            discipline,
            grade: grade.into(),
            location: location.into(),
            city: None,
            region: None,
            country: None,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalizes and validates climb fields.
///
/// This is the one gate every create, edit and copy path passes through:
/// - `name`, `grade` and `location` are trimmed and must be non-empty
/// - blank `city`/`region`/`country` become `None`
/// - the grade must satisfy [`grade::check_grade`] for the discipline
pub fn validate_fields(fields: ClimbFields) -> Result<ClimbFields> {
    let name = fields.name.trim().to_string();
    if name.is_empty() {
        return Err(SendlogError::Validation("name cannot be empty".into()));
    }
    let location = fields.location.trim().to_string();
    if location.is_empty() {
        return Err(SendlogError::Validation("location cannot be empty".into()));
    }
    let grade = fields.grade.trim().to_string();
    if grade.is_empty() {
        return Err(SendlogError::Validation("grade cannot be empty".into()));
    }
    grade::check_grade(fields.discipline, &grade)?;

    Ok(ClimbFields {
        name,
        discipline: fields.discipline,
        grade,
        location,
        city: trim_optional(fields.city),
        region: trim_optional(fields.region),
        country: trim_optional(fields.country),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Climb {
    pub id: Uuid,
    pub owner_id: UserId,
    pub name: String,
    pub discipline: Discipline,
    pub grade: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub attempts: Vec<Attempt>,
    #[serde(default)]
    pub attempt_counter: u32,
    #[serde(default)]
    pub links: Vec<Link>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Climb {
    /// Builds a fresh, never-attempted climb. Fields are expected to be validated.
    pub fn new(owner_id: UserId, fields: ClimbFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: fields.name,
            discipline: fields.discipline,
            grade: fields.grade,
            location: fields.location,
            city: fields.city,
            region: fields.region,
            country: fields.country,
            attempts: Vec::new(),
            attempt_counter: 0,
            links: Vec::new(),
            completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn fields(&self) -> ClimbFields {
        ClimbFields {
            name: self.name.clone(),
            discipline: self.discipline,
            grade: self.grade.clone(),
            location: self.location.clone(),
            city: self.city.clone(),
            region: self.region.clone(),
            country: self.country.clone(),
        }
    }

    /// Attempts ordered most recent first.
    pub fn attempts_for_display(&self) -> Vec<&Attempt> {
        let mut attempts: Vec<&Attempt> = self.attempts.iter().collect();
        attempts.sort_by(|a, b| b.sequence_number.cmp(&a.sequence_number));
        attempts
    }

    pub fn find_attempt(&self, attempt_id: &Uuid) -> Option<&Attempt> {
        self.attempts.iter().find(|a| &a.id == attempt_id)
    }

    /// Repairs fields that older documents may lack or carry inconsistently.
    ///
    /// - `attempt_counter` is never below the highest stored sequence number
    /// - `completed_at` is dropped when the climb is not completed
    /// - a completed climb without `completed_at` takes the date of its completion
    ///   attempt, or its creation time when there is none
    pub fn repair(&mut self) {
        let highest = self
            .attempts
            .iter()
            .map(|a| a.sequence_number)
            .max()
            .unwrap_or(0);
        if self.attempt_counter < highest {
            self.attempt_counter = highest;
        }
        if !self.completed {
            self.completed_at = None;
        } else if self.completed_at.is_none() {
            let sent_on = self
                .attempts
                .iter()
                .filter(|a| a.is_completion())
                .map(|a| a.date)
                .max();
            self.completed_at = Some(sent_on.unwrap_or(self.created_at));
        }
    }
}

/// A set of whole-field replacements applied to a stored climb in one write.
///
/// Fields left as `None` are untouched. `completion` sets both `completed` and
/// `completed_at` from a single value so the two can never disagree:
/// `Some(Some(t))` marks the climb sent at `t`, `Some(None)` clears completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClimbPatch {
    pub fields: Option<ClimbFields>,
    pub attempts: Option<Vec<Attempt>>,
    pub attempt_counter: Option<u32>,
    pub links: Option<Vec<Link>>,
    pub completion: Option<Option<DateTime<Utc>>>,
}

impl ClimbPatch {
    pub fn with_fields(mut self, fields: ClimbFields) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Replaces the attempt list together with the sequence counter.
    pub fn with_attempts_of(mut self, climb: &Climb) -> Self {
        self.attempts = Some(climb.attempts.clone());
        self.attempt_counter = Some(climb.attempt_counter);
        self
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = Some(links);
        self
    }

    pub fn with_completion(mut self, completed_at: Option<DateTime<Utc>>) -> Self {
        self.completion = Some(completed_at);
        self
    }

    /// Applies the patch in place. `owner_id`, `id` and `created_at` are never touched.
    pub fn apply(self, climb: &mut Climb) {
        if let Some(fields) = self.fields {
            climb.name = fields.name;
            climb.discipline = fields.discipline;
            climb.grade = fields.grade;
            climb.location = fields.location;
            climb.city = fields.city;
            climb.region = fields.region;
            climb.country = fields.country;
        }
        if let Some(attempts) = self.attempts {
            climb.attempts = attempts;
        }
        if let Some(counter) = self.attempt_counter {
            climb.attempt_counter = counter;
        }
        if let Some(links) = self.links {
            climb.links = links;
        }
        if let Some(completed_at) = self.completion {
            climb.completed = completed_at.is_some();
            climb.completed_at = completed_at;
        }
        climb.updated_at = Utc::now();
    }
}

/// Lowercases and trims an email so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(id: UserId, name: &str, email: &str) -> Result<Self> {
        let name = name.trim();
        let email = normalize_email(email);
        if name.is_empty() {
            return Err(SendlogError::Validation("name cannot be empty".into()));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(SendlogError::Validation(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            email,
            created_at: Utc::now(),
        })
    }
}

/// One directed half of a friend relationship.
///
/// A relationship between A and B is stored as the pair `A -> B` and `B -> A`;
/// the store writes and removes both halves together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendEdge {
    pub user: UserId,
    pub friend: UserId,
    pub created_at: DateTime<Utc>,
}

impl FriendEdge {
    pub fn connects(&self, a: &UserId, b: &UserId) -> bool {
        &self.user == a && &self.friend == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ClimbFields {
        ClimbFields::new("  Midnight Lightning ", Discipline::Boulder, " V8 ", " Camp 4 ")
    }

    #[test]
    fn validate_fields_trims_text() {
        let fields = validate_fields(fields().with_city("  ").with_country(" USA ")).unwrap();
        assert_eq!(fields.name, "Midnight Lightning");
        assert_eq!(fields.grade, "V8");
        assert_eq!(fields.location, "Camp 4");
        assert_eq!(fields.city, None);
        assert_eq!(fields.country.as_deref(), Some("USA"));
    }

    #[test]
    fn validate_fields_requires_name_and_location() {
        let mut f = fields();
        f.name = "   ".into();
        assert!(matches!(
            validate_fields(f),
            Err(SendlogError::Validation(_))
        ));

        let mut f = fields();
        f.location = "".into();
        assert!(matches!(
            validate_fields(f),
            Err(SendlogError::Validation(_))
        ));
    }

    #[test]
    fn validate_fields_checks_grade_for_discipline() {
        let mut f = fields();
        f.grade = "V18".into();
        assert!(matches!(validate_fields(f), Err(SendlogError::Grade(_))));

        let f = ClimbFields::new("Slab", Discipline::Sport, "24", "Arapiles");
        assert!(validate_fields(f).is_ok());

        let f = ClimbFields::new("Crack", Discipline::Trad, "HVS 5a", "Stanage");
        assert!(validate_fields(f).is_ok());
    }

    #[test]
    fn discipline_parses_case_insensitively() {
        assert_eq!("boulder".parse::<Discipline>().unwrap(), Discipline::Boulder);
        assert_eq!(" SPORT ".parse::<Discipline>().unwrap(), Discipline::Sport);
        assert!("aid".parse::<Discipline>().is_err());
    }

    #[test]
    fn attempts_display_most_recent_first() {
        let mut climb = Climb::new("u1".into(), validate_fields(fields()).unwrap());
        for n in 1..=3 {
            climb
                .attempts
                .push(Attempt::new(n, Utc::now(), "try", AttemptKind::Regular));
        }
        let order: Vec<u32> = climb
            .attempts_for_display()
            .iter()
            .map(|a| a.sequence_number)
            .collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn repair_restores_counter_and_completion_invariant() {
        let mut climb = Climb::new("u1".into(), validate_fields(fields()).unwrap());
        climb
            .attempts
            .push(Attempt::new(4, Utc::now(), "", AttemptKind::Regular));
        climb.completed_at = Some(Utc::now());
        climb.repair();
        assert_eq!(climb.attempt_counter, 4);
        assert_eq!(climb.completed_at, None);
    }

    #[test]
    fn repair_backfills_missing_send_time() {
        let mut climb = Climb::new("u1".into(), validate_fields(fields()).unwrap());
        let sent = Utc::now() - chrono::Duration::days(3);
        climb
            .attempts
            .push(Attempt::new(1, sent, "", AttemptKind::Completion));
        climb.completed = true;
        climb.repair();
        assert_eq!(climb.completed_at, Some(sent));

        let mut bare = Climb::new("u1".into(), validate_fields(fields()).unwrap());
        bare.completed = true;
        bare.repair();
        assert_eq!(bare.completed_at, Some(bare.created_at));
    }

    #[test]
    fn patch_completion_sets_flag_and_timestamp_together() {
        let mut climb = Climb::new("u1".into(), validate_fields(fields()).unwrap());
        let at = Utc::now();
        ClimbPatch::default()
            .with_completion(Some(at))
            .apply(&mut climb);
        assert!(climb.completed);
        assert_eq!(climb.completed_at, Some(at));

        ClimbPatch::default().with_completion(None).apply(&mut climb);
        assert!(!climb.completed);
        assert_eq!(climb.completed_at, None);
    }

    #[test]
    fn link_requires_name_and_url() {
        assert!(Link::new(" Topo ", " https://example.com/topo ").is_ok());
        assert!(Link::new("", "https://example.com").is_err());
        assert!(Link::new("Topo", "  ").is_err());
    }

    #[test]
    fn user_profile_normalizes_email() {
        let user = UserProfile::new("u1".into(), "Alex", "  Alex@Example.COM ").unwrap();
        assert_eq!(user.email, "alex@example.com");
        assert!(UserProfile::new("u2".into(), "Sam", "not-an-email").is_err());
    }

    #[test]
    fn legacy_attempt_without_kind_is_regular() {
        let json = r#"{
            "id": "6f1c1b1e-8a5e-4c1e-9d7a-2b0c8a4b9e10",
            "sequence_number": 1,
            "date": "2024-05-01T00:00:00Z",
            "notes": "Sent it! 🎉 finally"
        }"#;
        let attempt: Attempt = serde_json::from_str(json).unwrap();
        assert_eq!(attempt.kind, AttemptKind::Regular);
    }
}
