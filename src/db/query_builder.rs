//! Typed listing spec for the orders collection.
//!
//! User-supplied sort/filter input never reaches the SQL text directly: sort
//! fields resolve through a fixed enum to entity columns, and filter values
//! are bound as parameters.

use sea_orm::sea_query::*;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Select};

use crate::entities::order::{self, Entity as OrderEntity};
use crate::ListQuery;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Fields the listing endpoint may sort by. Anything outside this set falls
/// back to `Id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    OrderNumber,
    OrderDate,
    TotalAmount,
    PaymentStatus,
    CustomerName,
    Status,
}

impl SortField {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("id") => Self::Id,
            Some("order_number") => Self::OrderNumber,
            Some("order_date") => Self::OrderDate,
            Some("total_amount") => Self::TotalAmount,
            Some("payment_status") => Self::PaymentStatus,
            Some("customer_name") => Self::CustomerName,
            Some("status") => Self::Status,
            _ => Self::Id,
        }
    }

    fn column(self) -> order::Column {
        match self {
            Self::Id => order::Column::Id,
            Self::OrderNumber => order::Column::OrderNumber,
            Self::OrderDate => order::Column::OrderDate,
            Self::TotalAmount => order::Column::TotalAmount,
            Self::PaymentStatus => order::Column::PaymentStatus,
            Self::CustomerName => order::Column::CustomerName,
            Self::Status => order::Column::Status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

/// Maps UI-facing status synonyms onto the stored values. Unrecognized values
/// pass through unchanged so storage stays permissive.
pub fn canonical_status(raw: &str) -> String {
    match raw.to_ascii_lowercase().as_str() {
        "incomplete" | "pending" => "Pending".to_string(),
        "finished" | "completed" => "Completed".to_string(),
        "refunded" => "Refunded".to_string(),
        _ => raw.to_string(),
    }
}

/// Optional filter predicates for the listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl OrderFilter {
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            condition = condition.add(order::Column::Status.eq(canonical_status(status)));
        }

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", search.to_lowercase());
            condition = condition.add(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(order::Column::CustomerName)))
                            .like(pattern.clone()),
                    )
                    .add(Expr::expr(Func::lower(Expr::col(order::Column::OrderNumber))).like(pattern)),
            );
        }

        condition
    }
}

/// Page selection with the documented bounds applied: page >= 1,
/// limit within [1, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u64,
    pub limit: u64,
}

impl Page {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        (total + self.limit - 1) / self.limit
    }
}

/// Fully resolved listing query: filters, sort and page bounds.
#[derive(Debug, Clone)]
pub struct OrderQuery {
    pub filter: OrderFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page: Page,
}

impl OrderQuery {
    pub fn from_list_params(params: &ListQuery) -> Self {
        Self {
            filter: OrderFilter {
                status: params.status.clone(),
                search: params.search.clone(),
            },
            sort_field: SortField::parse(params.sort_by.as_deref()),
            sort_direction: SortDirection::parse(params.sort_order.as_deref()),
            page: Page::new(params.page, params.limit),
        }
    }

    pub fn select(&self) -> Select<OrderEntity> {
        let select = OrderEntity::find().filter(self.filter.condition());
        match self.sort_direction {
            SortDirection::Asc => select.order_by_asc(self.sort_field.column()),
            SortDirection::Desc => select.order_by_desc(self.sort_field.column()),
        }
    }
}
