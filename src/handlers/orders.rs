use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::order;
use crate::services::orders::{self as svc_orders, CustomerDetails, NewOrder, UpdateOrderDetails};
use crate::{errors::ServiceError, ApiResult, AppState, ListQuery};

// Order DTOs

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    /// Storage id, surfaced as a string
    pub id: String,
    pub order_number: String,
    pub customer: CustomerPayload,
    pub order_date: String,
    pub status: String,
    pub total_amount: Decimal,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer: CustomerPayload,
    pub total_amount: Decimal,
    /// Defaults to "Pending" when omitted
    pub status: Option<String>,
    /// Defaults to "unpaid" when omitted
    pub payment_status: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub order_number: Option<String>,
    /// Replaces name, email and avatar together
    pub customer: Option<CustomerPayload>,
    pub order_date: Option<String>,
    pub status: Option<String>,
    pub total_amount: Option<Decimal>,
    pub payment_status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderListResponse {
    pub orders: Vec<OrderResponse>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderStatsResponse {
    pub total: i64,
    pub pending: i64,
    pub shipped: i64,
    pub refunded: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkStatusUpdateRequest {
    pub order_ids: Vec<i64>,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkOrderIdsRequest {
    pub order_ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkStatusUpdateResponse {
    pub updated: u64,
    pub orders: Vec<OrderResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DuplicatedOrderResponse {
    pub id: String,
    pub order_number: String,
    pub source_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkDuplicateResponse {
    pub duplicated: u64,
    pub orders: Vec<DuplicatedOrderResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkDeleteResponse {
    pub deleted: u64,
    pub order_ids: Vec<i64>,
}

fn map_order(model: order::Model) -> OrderResponse {
    OrderResponse {
        id: model.id.to_string(),
        order_number: model.order_number,
        customer: CustomerPayload {
            name: model.customer_name,
            email: model.customer_email,
            avatar: model.customer_avatar,
        },
        order_date: model.order_date,
        status: model.status,
        total_amount: model.total_amount,
        payment_status: model.payment_status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn customer_details(payload: CustomerPayload) -> CustomerDetails {
    CustomerDetails {
        name: payload.name,
        email: payload.email,
        avatar: payload.avatar,
    }
}

/// List orders with pagination and filtering
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = "Orders",
    summary = "List orders",
    description = "Get a paginated list of orders with optional filtering and sorting",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("status" = Option<String>, Query, description = "Filter by order status"),
        ("search" = Option<String>, Query, description = "Search by customer name or order number"),
        ("sort_by" = Option<String>, Query, description = "Sort field (default: id)"),
        ("sort_order" = Option<String>, Query, description = "Sort order, asc or desc (default: desc)"),
    ),
    responses(
        (status = 200, description = "Orders retrieved successfully", body = OrderListResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<OrderListResponse> {
    let order_query = crate::db::query_builder::OrderQuery::from_list_params(&query);
    let page = state.services.order.list_orders(order_query).await?;

    Ok(Json(OrderListResponse {
        orders: page.orders.into_iter().map(map_order).collect(),
        total: page.total,
        page: page.page,
        limit: page.limit,
        total_pages: page.total_pages,
    }))
}

/// Aggregate order counts
#[utoipa::path(
    get,
    path = "/api/v1/orders/stats",
    tag = "Orders",
    summary = "Order statistics",
    description = "Total order count plus counts for the Pending, Completed and Refunded buckets",
    responses(
        (status = 200, description = "Statistics retrieved successfully", body = OrderStatsResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn order_stats(
    State(state): State<AppState>,
) -> ApiResult<OrderStatsResponse> {
    let summary = state.services.order.stats().await?;

    Ok(Json(OrderStatsResponse {
        total: summary.total,
        pending: summary.pending,
        shipped: summary.shipped,
        refunded: summary.refunded,
    }))
}

/// Get order by ID
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    tag = "Orders",
    summary = "Get order",
    params(
        ("id" = i64, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order retrieved successfully", body = OrderResponse),
        (status = 404, description = "Order not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<OrderResponse> {
    let order = state.services.order.get_order(id).await?;
    Ok(Json(map_order(order)))
}

/// Create a new order
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = "Orders",
    summary = "Create order",
    description = "Create a new order; the server assigns id, order number, order date and timestamps",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ServiceError> {
    let created = state
        .services
        .order
        .create_order(NewOrder {
            customer: customer_details(request.customer),
            total_amount: request.total_amount,
            status: request.status,
            payment_status: request.payment_status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_order(created))))
}

/// Update order
#[utoipa::path(
    put,
    path = "/api/v1/orders/{id}",
    tag = "Orders",
    summary = "Update order",
    description = "Partial update; only supplied fields change. An empty body is a no-op.",
    params(
        ("id" = i64, Path, description = "Order id"),
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated successfully", body = OrderResponse),
        (status = 404, description = "Order not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateOrderRequest>,
) -> ApiResult<OrderResponse> {
    let update_details = UpdateOrderDetails {
        order_number: request.order_number,
        customer: request.customer.map(customer_details),
        order_date: request.order_date,
        status: request.status,
        total_amount: request.total_amount,
        payment_status: request.payment_status,
    };

    let updated = state.services.order.update_order(id, update_details).await?;
    Ok(Json(map_order(updated)))
}

/// Delete order
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{id}",
    tag = "Orders",
    summary = "Delete order",
    params(
        ("id" = i64, Path, description = "Order id"),
    ),
    responses(
        (status = 204, description = "Order deleted successfully"),
        (status = 404, description = "Order not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    state.services.order.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk status update
#[utoipa::path(
    put,
    path = "/api/v1/orders/bulk/status",
    tag = "Orders",
    summary = "Bulk update order status",
    description = "Set the status on every existing order among the given ids; missing ids are ignored",
    request_body = BulkStatusUpdateRequest,
    responses(
        (status = 200, description = "Statuses updated", body = BulkStatusUpdateResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn bulk_update_status(
    State(state): State<AppState>,
    Json(request): Json<BulkStatusUpdateRequest>,
) -> ApiResult<BulkStatusUpdateResponse> {
    let outcome: svc_orders::BulkStatusOutcome = state
        .services
        .order
        .bulk_update_status(&request.order_ids, &request.status)
        .await?;

    Ok(Json(BulkStatusUpdateResponse {
        updated: outcome.updated,
        orders: outcome.orders.into_iter().map(map_order).collect(),
    }))
}

/// Bulk duplicate
#[utoipa::path(
    post,
    path = "/api/v1/orders/bulk/duplicate",
    tag = "Orders",
    summary = "Bulk duplicate orders",
    description = "Insert a copy of every existing order among the given ids; missing ids are skipped",
    request_body = BulkOrderIdsRequest,
    responses(
        (status = 201, description = "Orders duplicated", body = BulkDuplicateResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn bulk_duplicate_orders(
    State(state): State<AppState>,
    Json(request): Json<BulkOrderIdsRequest>,
) -> Result<(StatusCode, Json<BulkDuplicateResponse>), ServiceError> {
    let duplicated = state
        .services
        .order
        .bulk_duplicate(&request.order_ids)
        .await?;

    let orders: Vec<DuplicatedOrderResponse> = duplicated
        .into_iter()
        .map(|copy| DuplicatedOrderResponse {
            id: copy.id.to_string(),
            order_number: copy.order_number,
            source_id: copy.source_id.to_string(),
        })
        .collect();

    Ok((
        StatusCode::CREATED,
        Json(BulkDuplicateResponse {
            duplicated: orders.len() as u64,
            orders,
        }),
    ))
}

/// Bulk delete
#[utoipa::path(
    delete,
    path = "/api/v1/orders/bulk",
    tag = "Orders",
    summary = "Bulk delete orders",
    description = "Delete every existing order among the given ids; missing ids are ignored",
    request_body = BulkOrderIdsRequest,
    responses(
        (status = 200, description = "Orders deleted", body = BulkDeleteResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn bulk_delete_orders(
    State(state): State<AppState>,
    Json(request): Json<BulkOrderIdsRequest>,
) -> ApiResult<BulkDeleteResponse> {
    let deleted = state.services.order.bulk_delete(&request.order_ids).await?;

    Ok(Json(BulkDeleteResponse {
        deleted,
        order_ids: request.order_ids,
    }))
}
