//! Need request operations — NGO CRUD and the urgent-needs board.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use givebridge_core::error::AppError;
use givebridge_core::types::pagination::{PageRequest, PageResponse};
use givebridge_database::repositories::request::RequestRepository;
use givebridge_entity::request::model::CreateNeedRequest;
use givebridge_entity::request::{NeedRequest, RequestStatus, Urgency};
use givebridge_entity::surplus::ItemCategory;

use crate::context::RequestContext;

/// Number of entries the urgent-needs board surfaces.
const URGENT_NEEDS_LIMIT: i64 = 10;

/// Fields an NGO may change on their own request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequestFields {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New quantity.
    pub quantity: Option<i32>,
    /// New urgency.
    pub urgency: Option<Urgency>,
    /// New status (open / fulfilled / cancelled).
    pub status: Option<RequestStatus>,
}

/// Handles NGO need request operations.
#[derive(Debug, Clone)]
pub struct RequestService {
    /// Request repository.
    request_repo: Arc<RequestRepository>,
}

impl RequestService {
    /// Creates a new request service.
    pub fn new(request_repo: Arc<RequestRepository>) -> Self {
        Self { request_repo }
    }

    /// Files a new need request for the current NGO.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        title: String,
        description: Option<String>,
        category: ItemCategory,
        quantity: i32,
        unit: String,
        urgency: Urgency,
    ) -> Result<NeedRequest, AppError> {
        let request = self
            .request_repo
            .create(&CreateNeedRequest {
                ngo_id: ctx.user_id,
                title,
                description,
                category,
                quantity,
                unit,
                urgency,
            })
            .await?;

        info!(request_id = %request.id, ngo_id = %ctx.user_id, "Need request filed");
        Ok(request)
    }

    /// Lists the current NGO's requests.
    pub async fn list_mine(
        &self,
        ctx: &RequestContext,
        status: Option<RequestStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<NeedRequest>, AppError> {
        self.request_repo.find_by_ngo(ctx.user_id, status, &page).await
    }

    /// Updates one of the current NGO's requests.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        fields: UpdateRequestFields,
    ) -> Result<NeedRequest, AppError> {
        self.request_repo
            .update(
                id,
                ctx.user_id,
                fields.title.as_deref(),
                fields.description.as_deref(),
                fields.quantity,
                fields.urgency,
                fields.status,
            )
            .await
    }

    /// The urgent-needs board: open high/critical requests across all NGOs.
    pub async fn urgent_needs(&self) -> Result<Vec<NeedRequest>, AppError> {
        self.request_repo.find_urgent(URGENT_NEEDS_LIMIT).await
    }
}
