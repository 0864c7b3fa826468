use crate::{
    db::{query_builder::OrderQuery, DbPool},
    entities::order::{self, ActiveModel as OrderActiveModel, Entity as OrderEntity, Model as OrderModel},
    errors::ServiceError,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Customer fields as accepted on create and on whole-customer replacement.
#[derive(Debug, Clone)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// Input for order creation. The store assigns id, order number, order date
/// and timestamps.
#[derive(Debug)]
pub struct NewOrder {
    pub customer: CustomerDetails,
    pub total_amount: Decimal,
    pub status: Option<String>,
    pub payment_status: Option<String>,
}

/// Partial update; only supplied fields change. Supplying `customer` replaces
/// name, email and avatar together.
#[derive(Debug, Default)]
pub struct UpdateOrderDetails {
    pub order_number: Option<String>,
    pub customer: Option<CustomerDetails>,
    pub order_date: Option<String>,
    pub status: Option<String>,
    pub total_amount: Option<Decimal>,
    pub payment_status: Option<String>,
}

impl UpdateOrderDetails {
    pub fn is_empty(&self) -> bool {
        self.order_number.is_none()
            && self.customer.is_none()
            && self.order_date.is_none()
            && self.status.is_none()
            && self.total_amount.is_none()
            && self.payment_status.is_none()
    }
}

/// One page of listing results together with the pagination bookkeeping.
#[derive(Debug)]
pub struct OrderPage {
    pub orders: Vec<OrderModel>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// Outcome of a bulk status update: affected count plus the rows as they look
/// after the update.
#[derive(Debug)]
pub struct BulkStatusOutcome {
    pub updated: u64,
    pub orders: Vec<OrderModel>,
}

/// One row created by a bulk duplicate.
#[derive(Debug)]
pub struct DuplicatedOrder {
    pub id: i64,
    pub order_number: String,
    pub source_id: i64,
}

/// Aggregate counts for the stats endpoint. `shipped` counts rows stored as
/// "Completed"; statuses outside the three buckets only contribute to `total`.
#[derive(Debug, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: i64,
    pub pending: i64,
    pub shipped: i64,
    pub refunded: i64,
}

#[derive(FromQueryResult)]
struct StatusCount {
    status: String,
    count: i64,
}

const NOT_FOUND_MESSAGE: &str = "Order not found";

fn order_number_for(id: i64) -> String {
    format!("#ORD{}", 1000 + id)
}

/// Service for managing orders
#[derive(Clone)]
pub struct OrderService {
    db_pool: Arc<DbPool>,
}

impl OrderService {
    /// Creates a new order service instance
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Lists orders for the given filter/sort/page spec. Issues exactly two
    /// queries: a count, then a page fetch.
    #[instrument(skip(self, query))]
    pub async fn list_orders(&self, query: OrderQuery) -> Result<OrderPage, ServiceError> {
        let db = &*self.db_pool;

        let select = query.select();
        let total = select.clone().count(db).await.map_err(|e| {
            error!(error = %e, "Failed to count orders");
            ServiceError::DatabaseError(e)
        })?;

        let page = query.page;
        let orders = select
            .limit(page.limit)
            .offset(page.offset())
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, page = page.page, limit = page.limit, "Failed to fetch orders page");
                ServiceError::DatabaseError(e)
            })?;

        info!(
            total = total,
            page = page.page,
            limit = page.limit,
            returned_count = orders.len(),
            "Orders listed successfully"
        );

        Ok(OrderPage {
            orders,
            total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages(total),
        })
    }

    /// Retrieves an order by id
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn get_order(&self, order_id: i64) -> Result<OrderModel, ServiceError> {
        let db = &*self.db_pool;

        let order = OrderEntity::find_by_id(order_id).one(db).await.map_err(|e| {
            error!(error = %e, order_id = order_id, "Failed to fetch order from database");
            ServiceError::DatabaseError(e)
        })?;

        order.ok_or_else(|| {
            info!(order_id = order_id, "Order not found");
            ServiceError::NotFound(NOT_FOUND_MESSAGE.to_string())
        })
    }

    /// Creates a new order. The order number is derived from the assigned
    /// primary key inside the same transaction, so concurrent creates cannot
    /// hand out the same number.
    #[instrument(skip(self, request), fields(customer = %request.customer.name))]
    pub async fn create_order(&self, request: NewOrder) -> Result<OrderModel, ServiceError> {
        let db = &*self.db_pool;
        let now = Utc::now();

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for order creation");
            ServiceError::DatabaseError(e)
        })?;

        let order_active_model = OrderActiveModel {
            order_number: Set(String::new()),
            customer_name: Set(request.customer.name),
            customer_email: Set(request.customer.email),
            customer_avatar: Set(request.customer.avatar),
            order_date: Set(now.format("%d %b %Y").to_string()),
            status: Set(request.status.unwrap_or_else(|| "Pending".to_string())),
            total_amount: Set(request.total_amount),
            payment_status: Set(request.payment_status.unwrap_or_else(|| "unpaid".to_string())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = order_active_model.insert(&txn).await.map_err(|e| {
            error!(error = %e, "Failed to create order in database");
            ServiceError::DatabaseError(e)
        })?;

        let order_id = inserted.id;
        let mut numbered: OrderActiveModel = inserted.into();
        numbered.order_number = Set(order_number_for(order_id));

        let order_model = numbered.update(&txn).await.map_err(|e| {
            error!(error = %e, order_id = order_id, "Failed to assign order number");
            ServiceError::DatabaseError(e)
        })?;

        txn.commit().await.map_err(|e| {
            error!(error = %e, order_id = order_id, "Failed to commit order creation transaction");
            ServiceError::DatabaseError(e)
        })?;

        info!(order_id = order_id, order_number = %order_model.order_number, "Order created successfully");

        Ok(order_model)
    }

    /// Applies a partial update. A request with no recognized fields returns
    /// the current row unchanged and leaves `updated_at` alone.
    #[instrument(skip(self, request), fields(order_id = %order_id))]
    pub async fn update_order(
        &self,
        order_id: i64,
        request: UpdateOrderDetails,
    ) -> Result<OrderModel, ServiceError> {
        let db = &*self.db_pool;

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, order_id = order_id, "Failed to start transaction for order update");
            ServiceError::DatabaseError(e)
        })?;

        let existing = OrderEntity::find_by_id(order_id)
            .one(&txn)
            .await
            .map_err(|e| {
                error!(error = %e, order_id = order_id, "Failed to find order for update");
                ServiceError::DatabaseError(e)
            })?;

        let existing = existing.ok_or_else(|| {
            warn!(order_id = order_id, "Order not found for update");
            ServiceError::NotFound(NOT_FOUND_MESSAGE.to_string())
        })?;

        if request.is_empty() {
            txn.commit().await.map_err(ServiceError::DatabaseError)?;
            return Ok(existing);
        }

        let mut order_active_model: OrderActiveModel = existing.into();
        if let Some(order_number) = request.order_number {
            order_active_model.order_number = Set(order_number);
        }
        if let Some(customer) = request.customer {
            order_active_model.customer_name = Set(customer.name);
            order_active_model.customer_email = Set(customer.email);
            order_active_model.customer_avatar = Set(customer.avatar);
        }
        if let Some(order_date) = request.order_date {
            order_active_model.order_date = Set(order_date);
        }
        if let Some(status) = request.status {
            order_active_model.status = Set(status);
        }
        if let Some(total_amount) = request.total_amount {
            order_active_model.total_amount = Set(total_amount);
        }
        if let Some(payment_status) = request.payment_status {
            order_active_model.payment_status = Set(payment_status);
        }
        order_active_model.updated_at = Set(Utc::now());

        let updated_order = order_active_model.update(&txn).await.map_err(|e| {
            error!(error = %e, order_id = order_id, "Failed to update order");
            ServiceError::DatabaseError(e)
        })?;

        txn.commit().await.map_err(|e| {
            error!(error = %e, order_id = order_id, "Failed to commit order update transaction");
            ServiceError::DatabaseError(e)
        })?;

        info!(order_id = order_id, "Order updated successfully");

        Ok(updated_order)
    }

    /// Hard-deletes an order
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn delete_order(&self, order_id: i64) -> Result<(), ServiceError> {
        let db = &*self.db_pool;

        let result = OrderEntity::delete_by_id(order_id).exec(db).await.map_err(|e| {
            error!(error = %e, order_id = order_id, "Failed to delete order");
            ServiceError::DatabaseError(e)
        })?;

        if result.rows_affected == 0 {
            warn!(order_id = order_id, "Order not found for deletion");
            return Err(ServiceError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        info!(order_id = order_id, "Order deleted successfully");
        Ok(())
    }

    /// Sets the status on every existing row among `order_ids` in a single
    /// statement. Ids without a row are silently ignored.
    #[instrument(skip(self, order_ids), fields(requested = order_ids.len(), status = %status))]
    pub async fn bulk_update_status(
        &self,
        order_ids: &[i64],
        status: &str,
    ) -> Result<BulkStatusOutcome, ServiceError> {
        if order_ids.is_empty() {
            return Ok(BulkStatusOutcome {
                updated: 0,
                orders: Vec::new(),
            });
        }

        let db = &*self.db_pool;

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for bulk status update");
            ServiceError::DatabaseError(e)
        })?;

        let result = OrderEntity::update_many()
            .col_expr(order::Column::Status, Expr::value(status))
            .col_expr(order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(order::Column::Id.is_in(order_ids.to_vec()))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to bulk-update order status");
                ServiceError::DatabaseError(e)
            })?;

        let orders = OrderEntity::find()
            .filter(order::Column::Id.is_in(order_ids.to_vec()))
            .order_by_asc(order::Column::Id)
            .all(&txn)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to re-fetch bulk-updated orders");
                ServiceError::DatabaseError(e)
            })?;

        txn.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit bulk status update transaction");
            ServiceError::DatabaseError(e)
        })?;

        info!(updated = result.rows_affected, status = %status, "Bulk status update completed");

        Ok(BulkStatusOutcome {
            updated: result.rows_affected,
            orders,
        })
    }

    /// Duplicates every existing row among `order_ids`. The copies keep all
    /// field values except the order number, which gains a " (Copy)" suffix,
    /// and the timestamps, which are stamped fresh. Runs in one transaction
    /// so a mid-batch failure leaves no partial set behind.
    #[instrument(skip(self, order_ids), fields(requested = order_ids.len()))]
    pub async fn bulk_duplicate(
        &self,
        order_ids: &[i64],
    ) -> Result<Vec<DuplicatedOrder>, ServiceError> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = &*self.db_pool;

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for bulk duplicate");
            ServiceError::DatabaseError(e)
        })?;

        let sources = OrderEntity::find()
            .filter(order::Column::Id.is_in(order_ids.to_vec()))
            .order_by_asc(order::Column::Id)
            .all(&txn)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch orders for duplication");
                ServiceError::DatabaseError(e)
            })?;

        let now = Utc::now();
        let mut duplicated = Vec::with_capacity(sources.len());

        for source in sources {
            let copy = OrderActiveModel {
                order_number: Set(format!("{} (Copy)", source.order_number)),
                customer_name: Set(source.customer_name),
                customer_email: Set(source.customer_email),
                customer_avatar: Set(source.customer_avatar),
                order_date: Set(source.order_date),
                status: Set(source.status),
                total_amount: Set(source.total_amount),
                payment_status: Set(source.payment_status),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            let inserted = copy.insert(&txn).await.map_err(|e| {
                error!(error = %e, source_id = source.id, "Failed to insert duplicated order");
                ServiceError::DatabaseError(e)
            })?;

            duplicated.push(DuplicatedOrder {
                id: inserted.id,
                order_number: inserted.order_number,
                source_id: source.id,
            });
        }

        txn.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit bulk duplicate transaction");
            ServiceError::DatabaseError(e)
        })?;

        info!(duplicated = duplicated.len(), "Bulk duplicate completed");

        Ok(duplicated)
    }

    /// Deletes every existing row among `order_ids` in a single statement and
    /// returns how many rows were actually removed.
    #[instrument(skip(self, order_ids), fields(requested = order_ids.len()))]
    pub async fn bulk_delete(&self, order_ids: &[i64]) -> Result<u64, ServiceError> {
        if order_ids.is_empty() {
            return Ok(0);
        }

        let db = &*self.db_pool;

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for bulk delete");
            ServiceError::DatabaseError(e)
        })?;

        let result = OrderEntity::delete_many()
            .filter(order::Column::Id.is_in(order_ids.to_vec()))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to bulk-delete orders");
                ServiceError::DatabaseError(e)
            })?;

        txn.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit bulk delete transaction");
            ServiceError::DatabaseError(e)
        })?;

        info!(deleted = result.rows_affected, "Bulk delete completed");

        Ok(result.rows_affected)
    }

    /// Aggregate counts: total rows plus the three fixed status buckets.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<StatusSummary, ServiceError> {
        let db = &*self.db_pool;

        let rows: Vec<StatusCount> = OrderEntity::find()
            .select_only()
            .column(order::Column::Status)
            .column_as(order::Column::Id.count(), "count")
            .group_by(order::Column::Status)
            .into_model::<StatusCount>()
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to compute order stats");
                ServiceError::DatabaseError(e)
            })?;

        let mut summary = StatusSummary {
            total: 0,
            pending: 0,
            shipped: 0,
            refunded: 0,
        };

        for row in rows {
            summary.total += row.count;
            match row.status.as_str() {
                "Pending" => summary.pending = row.count,
                "Completed" => summary.shipped = row.count,
                "Refunded" => summary.refunded = row.count,
                _ => {}
            }
        }

        Ok(summary)
    }
}
