//! Notification listing, read-state toggling, and workflow fan-out.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use givebridge_core::error::AppError;
use givebridge_core::types::pagination::{PageRequest, PageResponse};
use givebridge_database::repositories::notification::NotificationRepository;
use givebridge_entity::notification::{Notification, NotificationPayload};

use crate::context::RequestContext;

/// Manages user notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Lists notifications for the current user.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notif_repo.find_by_user(ctx.user_id, &page).await
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notif_repo.count_unread(ctx.user_id).await
    }

    /// Marks a notification as read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> Result<(), AppError> {
        self.notif_repo.mark_read(notification_id, ctx.user_id).await
    }

    /// Marks all notifications as read, returning the count.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notif_repo.mark_all_read(ctx.user_id).await
    }

    /// Records a workflow notification for a recipient.
    ///
    /// Fire-and-insert: delivery is the row existing for the client to
    /// poll, so a failed insert is logged and swallowed rather than
    /// failing the transition that triggered it.
    pub async fn record(
        &self,
        recipient: Uuid,
        title: &str,
        message: &str,
        payload: NotificationPayload,
    ) {
        let kind = payload.kind();
        let value = match serde_json::to_value(&payload) {
            Ok(v) => v,
            Err(e) => {
                warn!(recipient = %recipient, kind = %kind, "Failed to serialize notification payload: {e}");
                return;
            }
        };

        if let Err(e) = self
            .notif_repo
            .create(recipient, kind, title, message, Some(&value))
            .await
        {
            warn!(recipient = %recipient, kind = %kind, "Failed to insert notification: {e}");
        }
    }
}
