//! Club service
//!
//! Club registration, the approve/reject decision flow (same one-way
//! rules as events), and the club/country matching heuristic used to
//! link free-text club names from interest submissions to registered
//! clubs.

use std::sync::Arc;

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::entities::{Club, ClubId, ClubStatus, NewClub};
use crate::domain::ports::{ClubRepository, Mailer, OutboundEmail};
use crate::error::{AppError, DomainError};

/// Minimum score for a heuristic match to be reported
const MATCH_THRESHOLD: f64 = 0.5;

/// A scored match from the club matching heuristic
#[derive(Debug, Clone)]
pub struct ClubMatch {
    pub club: Club,
    pub score: f64,
}

/// Service for club registration and review
pub struct ClubService<CR, M>
where
    CR: ClubRepository,
    M: Mailer,
{
    clubs: Arc<CR>,
    mailer: Arc<M>,
}

impl<CR, M> ClubService<CR, M>
where
    CR: ClubRepository,
    M: Mailer,
{
    pub fn new(clubs: Arc<CR>, mailer: Arc<M>) -> Self {
        Self { clubs, mailer }
    }

    /// Register a new club. The registration starts pending.
    pub async fn register(&self, club: NewClub) -> Result<Club, AppError> {
        if club.name.trim().is_empty() {
            return Err(DomainError::Validation("Club name must not be empty".to_string()).into());
        }
        if club.country.trim().is_empty() {
            return Err(DomainError::Validation("Country must not be empty".to_string()).into());
        }
        if !club.contact_email.contains('@') {
            return Err(DomainError::Validation(format!(
                "Invalid contact email: {}",
                club.contact_email
            ))
            .into());
        }

        if self.clubs.find_by_name(&club.name).await?.is_some() {
            return Err(DomainError::AlreadyExists(format!(
                "A club named '{}' is already registered",
                club.name
            ))
            .into());
        }

        Ok(self.clubs.create(&club).await?)
    }

    pub async fn get(&self, id: &ClubId) -> Result<Option<Club>, AppError> {
        Ok(self.clubs.find_by_id(id).await?)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Club>, AppError> {
        Ok(self.clubs.find_all(limit, offset).await?)
    }

    /// Approve a pending club registration
    pub async fn approve(&self, id: &ClubId) -> Result<Club, AppError> {
        let mut club = self.load_pending(id).await?;

        self.clubs
            .update_status(id, ClubStatus::Approved, None)
            .await?;

        club.status = ClubStatus::Approved;
        club.rejection_reason = None;

        self.notify(
            &club,
            format!("{} is now registered on TourGael", club.name),
            format!(
                "Your registration for {} has been approved. You can now host events and configure day-pass pricing.",
                club.name
            ),
        )
        .await;

        Ok(club)
    }

    /// Reject a pending club registration with a non-blank reason
    pub async fn reject(&self, id: &ClubId, reason: &str) -> Result<Club, AppError> {
        if reason.trim().is_empty() {
            return Err(
                DomainError::Validation("Rejection reason must not be empty".to_string()).into(),
            );
        }

        let mut club = self.load_pending(id).await?;

        self.clubs
            .update_status(id, ClubStatus::Rejected, Some(reason))
            .await?;

        club.status = ClubStatus::Rejected;
        club.rejection_reason = Some(reason.to_string());

        self.notify(
            &club,
            format!("Registration for {} was not approved", club.name),
            format!("Reason given: {}", reason),
        )
        .await;

        Ok(club)
    }

    /// Find the approved club best matching a free-text name.
    ///
    /// Country, when given, narrows the candidate set. Candidates are
    /// scored on normalized names: exact match beats prefix match beats
    /// token overlap. Returns None when nothing clears the threshold.
    pub async fn match_club(
        &self,
        name: &str,
        country: Option<&str>,
    ) -> Result<Option<ClubMatch>, AppError> {
        let needle = normalize_club_name(name);
        if needle.is_empty() {
            return Ok(None);
        }

        let candidates = self.clubs.find_approved(country).await?;

        let best = candidates
            .into_iter()
            .map(|club| {
                let score = match_score(&needle, &normalize_club_name(&club.name));
                ClubMatch { club, score }
            })
            .filter(|m| m.score >= MATCH_THRESHOLD)
            .max_by(|a, b| a.score.total_cmp(&b.score));

        Ok(best)
    }

    async fn load_pending(&self, id: &ClubId) -> Result<Club, AppError> {
        let club = self
            .clubs
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Club {} not found", id)))?;

        if club.status.is_terminal() {
            return Err(DomainError::Conflict(format!(
                "Club {} is already {}",
                id, club.status
            ))
            .into());
        }

        Ok(club)
    }

    async fn notify(&self, club: &Club, subject: String, body: String) {
        let email = OutboundEmail {
            to: club.contact_email.clone(),
            subject,
            body,
        };

        if let Err(e) = self.mailer.send(&email).await {
            tracing::warn!(error = %e, to = %email.to, "Failed to send decision notification");
        }
    }
}

/// Lowercase, strip punctuation, and drop GAA boilerplate words so
/// "St. Colmcille's GAA Club" and "st colmcilles" compare equal.
pub fn normalize_club_name(name: &str) -> String {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    let non_word = NON_WORD.get_or_init(|| Regex::new(r"[^a-z0-9 ]+").unwrap());

    let lowered = name.to_lowercase();
    let stripped = non_word.replace_all(&lowered, "");

    stripped
        .split_whitespace()
        .filter(|w| !matches!(*w, "gaa" | "gac" | "gfc" | "hc" | "cc" | "club" | "clg"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score two normalized names: 1.0 exact, 0.8 prefix, otherwise the
/// fraction of needle tokens present in the candidate.
fn match_score(needle: &str, candidate: &str) -> f64 {
    if candidate.is_empty() {
        return 0.0;
    }
    if needle == candidate {
        return 1.0;
    }
    if candidate.starts_with(needle) || needle.starts_with(candidate) {
        return 0.8;
    }

    let needle_tokens: Vec<&str> = needle.split_whitespace().collect();
    if needle_tokens.is_empty() {
        return 0.0;
    }
    let hits = needle_tokens
        .iter()
        .filter(|t| candidate.split_whitespace().any(|c| c == **t))
        .count();

    hits as f64 / needle_tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_club_named, test_club_with_status, InMemoryClubRepository, RecordingMailer};

    fn create_service(
        club_repo: InMemoryClubRepository,
        mailer: RecordingMailer,
    ) -> ClubService<InMemoryClubRepository, RecordingMailer> {
        ClubService::new(Arc::new(club_repo), Arc::new(mailer))
    }

    fn new_club(name: &str) -> NewClub {
        NewClub {
            name: name.to_string(),
            country: "Germany".to_string(),
            county: None,
            contact_email: "info@club.test".to_string(),
        }
    }

    #[tokio::test]
    async fn register_creates_pending_club() {
        let service = create_service(InMemoryClubRepository::new(), RecordingMailer::new());

        let club = service.register(new_club("Berlin GAA")).await.unwrap();

        assert_eq!(club.status, ClubStatus::Pending);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_name() {
        let existing = test_club_named("Berlin GAA");
        let service = create_service(
            InMemoryClubRepository::new().with_club(existing),
            RecordingMailer::new(),
        );

        let result = service.register(new_club("Berlin GAA")).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn register_rejects_bad_email() {
        let service = create_service(InMemoryClubRepository::new(), RecordingMailer::new());

        let mut club = new_club("Berlin GAA");
        club.contact_email = "not-an-email".to_string();
        let result = service.register(club).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn approve_and_reject_follow_one_way_rules() {
        let pending = test_club_with_status(ClubStatus::Pending);
        let service = create_service(
            InMemoryClubRepository::new().with_club(pending.clone()),
            RecordingMailer::new(),
        );

        let approved = service.approve(&pending.id).await.unwrap();
        assert_eq!(approved.status, ClubStatus::Approved);

        let result = service.reject(&pending.id, "changed our minds").await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Conflict(_)))
        ));
    }

    #[tokio::test]
    async fn reject_requires_reason() {
        let pending = test_club_with_status(ClubStatus::Pending);
        let service = create_service(
            InMemoryClubRepository::new().with_club(pending.clone()),
            RecordingMailer::new(),
        );

        let result = service.reject(&pending.id, "  ").await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
        let stored = service.get(&pending.id).await.unwrap().unwrap();
        assert_eq!(stored.status, ClubStatus::Pending);
    }

    #[tokio::test]
    async fn decision_notifies_contact() {
        let pending = test_club_with_status(ClubStatus::Pending);
        let mailer = RecordingMailer::new();
        let service = create_service(
            InMemoryClubRepository::new().with_club(pending.clone()),
            mailer.clone(),
        );

        service.reject(&pending.id, "Duplicate of existing club").await.unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, pending.contact_email);
        assert!(sent[0].body.contains("Duplicate of existing club"));
    }

    #[test]
    fn normalize_strips_punctuation_and_boilerplate() {
        assert_eq!(
            normalize_club_name("St. Colmcille's GAA Club"),
            "st colmcilles"
        );
        assert_eq!(normalize_club_name("Berlin GAA"), "berlin");
        assert_eq!(normalize_club_name("Éire Óg"), "ire g");
    }

    #[tokio::test]
    async fn match_finds_exact_name_despite_decoration() {
        let club = test_club_named("Berlin GAA");
        let service = create_service(
            InMemoryClubRepository::new().with_club(club.clone()),
            RecordingMailer::new(),
        );

        let found = service.match_club("berlin", None).await.unwrap().unwrap();

        assert_eq!(found.club.id, club.id);
        assert_eq!(found.score, 1.0);
    }

    #[tokio::test]
    async fn match_prefers_better_score() {
        let munich = test_club_named("Munich Colmcilles GAA");
        let hamburg = test_club_named("Hamburg GAA");
        let service = create_service(
            InMemoryClubRepository::new()
                .with_club(munich.clone())
                .with_club(hamburg),
            RecordingMailer::new(),
        );

        let found = service
            .match_club("Munich Colmcilles", None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.club.id, munich.id);
    }

    #[tokio::test]
    async fn match_respects_country_filter() {
        let mut berlin = test_club_named("Berlin GAA");
        berlin.country = "Germany".to_string();
        let service = create_service(
            InMemoryClubRepository::new().with_club(berlin),
            RecordingMailer::new(),
        );

        let found = service.match_club("berlin", Some("France")).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn match_ignores_pending_clubs() {
        let pending = test_club_with_status(ClubStatus::Pending);
        let service = create_service(
            InMemoryClubRepository::new().with_club(pending.clone()),
            RecordingMailer::new(),
        );

        let found = service.match_club(&pending.name, None).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn no_match_below_threshold() {
        let club = test_club_named("Zurich Inter GAA");
        let service = create_service(
            InMemoryClubRepository::new().with_club(club),
            RecordingMailer::new(),
        );

        let found = service
            .match_club("Copenhagen Harps", None)
            .await
            .unwrap();

        assert!(found.is_none());
    }
}
