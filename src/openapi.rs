use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orderdesk API",
        version = "0.1.0",
        description = r#"
# Orderdesk API

Backend for the orders dashboard: paginated listing with filtering and
sorting, CRUD on individual orders, bulk actions (status update, duplicate,
delete) and aggregate statistics.

## Pagination

The listing endpoint supports the following query parameters:
- `page`: Page number (default: 1)
- `limit`: Items per page (default: 10, max: 100)
- `status`: Filter by order status
- `search`: Search by customer name or order number
- `sort_by`: Field to sort by (default: id)
- `sort_order`: Sort order, asc or desc (default: desc)

## Error Handling

Failing endpoints return a consistent error body:

```json
{
  "error": "Not Found",
  "message": "Order not found",
  "timestamp": "2024-12-17T10:30:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Orders", description = "Order management endpoints")
    ),
    paths(
        crate::handlers::orders::list_orders,
        crate::handlers::orders::order_stats,
        crate::handlers::orders::get_order,
        crate::handlers::orders::create_order,
        crate::handlers::orders::update_order,
        crate::handlers::orders::delete_order,
        crate::handlers::orders::bulk_update_status,
        crate::handlers::orders::bulk_duplicate_orders,
        crate::handlers::orders::bulk_delete_orders,
    ),
    components(schemas(
        crate::errors::ErrorResponse,
        crate::handlers::orders::CustomerPayload,
        crate::handlers::orders::OrderResponse,
        crate::handlers::orders::CreateOrderRequest,
        crate::handlers::orders::UpdateOrderRequest,
        crate::handlers::orders::OrderListResponse,
        crate::handlers::orders::OrderStatsResponse,
        crate::handlers::orders::BulkStatusUpdateRequest,
        crate::handlers::orders::BulkOrderIdsRequest,
        crate::handlers::orders::BulkStatusUpdateResponse,
        crate::handlers::orders::DuplicatedOrderResponse,
        crate::handlers::orders::BulkDuplicateResponse,
        crate::handlers::orders::BulkDeleteResponse,
    ))
)]
pub struct ApiDoc;

/// Swagger UI router serving the generated OpenAPI document
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
