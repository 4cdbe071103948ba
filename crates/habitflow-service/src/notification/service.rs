//! Notification feed operations.

use std::sync::Arc;

use uuid::Uuid;

use habitflow_core::error::AppError;
use habitflow_core::types::pagination::{PageRequest, PageResponse};
use habitflow_database::repositories::notification::NotificationRepository;
use habitflow_entity::notification::Notification;

use crate::context::RequestContext;

/// Manages the stored notification feed. Delivery is a read flag only.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Lists the current user's notifications, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notification_repo.find_by_user(ctx.user_id, &page).await
    }

    /// Counts unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notification_repo.count_unread(ctx.user_id).await
    }

    /// Marks one notification read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> Result<(), AppError> {
        self.notification_repo
            .mark_read(ctx.user_id, notification_id)
            .await
    }

    /// Marks all notifications read. Returns how many changed.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notification_repo.mark_all_read(ctx.user_id).await
    }
}
