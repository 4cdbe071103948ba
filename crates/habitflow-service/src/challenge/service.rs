//! Challenge listing, creation, and join/leave flows.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use habitflow_core::error::AppError;
use habitflow_core::types::pagination::{PageRequest, PageResponse};
use habitflow_database::repositories::challenge::ChallengeRepository;
use habitflow_database::repositories::notification::NotificationRepository;
use habitflow_entity::challenge::{
    Challenge, ChallengeParticipant, CreateChallenge, ParticipantWithProfile,
};
use habitflow_entity::notification::NewNotification;

use crate::context::RequestContext;

/// Manages challenges and participant membership.
///
/// Challenges are visible to every authenticated user; only
/// participation rows are owner-scoped.
#[derive(Debug, Clone)]
pub struct ChallengeService {
    /// Challenge repository.
    challenge_repo: Arc<ChallengeRepository>,
    /// Notification repository, for join notifications.
    notification_repo: Arc<NotificationRepository>,
}

impl ChallengeService {
    /// Creates a new challenge service.
    pub fn new(
        challenge_repo: Arc<ChallengeRepository>,
        notification_repo: Arc<NotificationRepository>,
    ) -> Self {
        Self {
            challenge_repo,
            notification_repo,
        }
    }

    /// Lists open challenges.
    pub async fn list_active(
        &self,
        _ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Challenge>, AppError> {
        self.challenge_repo.find_active(&page).await
    }

    /// Gets a challenge by ID.
    pub async fn get_challenge(
        &self,
        _ctx: &RequestContext,
        challenge_id: Uuid,
    ) -> Result<Challenge, AppError> {
        self.challenge_repo
            .find_by_id(challenge_id)
            .await?
            .ok_or_else(|| AppError::not_found("Challenge not found"))
    }

    /// Creates a challenge with the current user as creator.
    pub async fn create_challenge(
        &self,
        ctx: &RequestContext,
        data: CreateChallenge,
    ) -> Result<Challenge, AppError> {
        if data.end_date <= data.start_date {
            return Err(AppError::validation("end_date must be after start_date"));
        }
        if let Some(max) = data.max_participants {
            if max < 1 {
                return Err(AppError::validation("max_participants must be at least 1"));
            }
        }

        let challenge = self.challenge_repo.create(ctx.user_id, &data).await?;
        info!(
            user_id = %ctx.user_id,
            challenge_id = %challenge.id,
            title = %challenge.title,
            "Challenge created"
        );
        Ok(challenge)
    }

    /// Joins a challenge.
    ///
    /// A duplicate join, full challenge, or ended challenge is rejected
    /// before the insert; the unique constraint remains the backstop
    /// for concurrent joins.
    pub async fn join(
        &self,
        ctx: &RequestContext,
        challenge_id: Uuid,
    ) -> Result<ChallengeParticipant, AppError> {
        let challenge = self.get_challenge(ctx, challenge_id).await?;

        if !challenge.is_active || challenge.has_ended() {
            return Err(AppError::validation("Challenge is no longer open"));
        }

        if self
            .challenge_repo
            .is_participant(challenge_id, ctx.user_id)
            .await?
        {
            return Err(AppError::conflict("Already joined this challenge"));
        }

        let count = self.challenge_repo.count_participants(challenge_id).await?;
        if challenge.is_full(count) {
            return Err(AppError::conflict("Challenge is full"));
        }

        let participant = self
            .challenge_repo
            .add_participant(challenge_id, ctx.user_id)
            .await?;

        self.notification_repo
            .create(&NewNotification::challenge_joined(
                ctx.user_id,
                &challenge.title,
            ))
            .await?;

        info!(user_id = %ctx.user_id, challenge_id = %challenge_id, "Joined challenge");
        Ok(participant)
    }

    /// Leaves a challenge, removing exactly the caller's own row.
    pub async fn leave(&self, ctx: &RequestContext, challenge_id: Uuid) -> Result<(), AppError> {
        self.challenge_repo
            .remove_participant(challenge_id, ctx.user_id)
            .await?;
        info!(user_id = %ctx.user_id, challenge_id = %challenge_id, "Left challenge");
        Ok(())
    }

    /// Lists a challenge's participants with their public profiles.
    pub async fn list_participants(
        &self,
        ctx: &RequestContext,
        challenge_id: Uuid,
    ) -> Result<Vec<ParticipantWithProfile>, AppError> {
        // 404 before leaking an empty list for nonexistent challenges.
        self.get_challenge(ctx, challenge_id).await?;
        self.challenge_repo.find_participants(challenge_id).await
    }

    /// Challenges the current user has joined that are still running.
    pub async fn list_joined(&self, ctx: &RequestContext) -> Result<Vec<Challenge>, AppError> {
        self.challenge_repo.find_joined_by_user(ctx.user_id).await
    }
}
