use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted order row. The customer is stored flattened; handlers surface it
/// as a nested object.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Assigned once at creation and never recomputed. Not unique: duplicated
    /// orders share their source's number plus a " (Copy)" suffix.
    pub order_number: String,

    pub customer_name: String,
    pub customer_email: String,
    pub customer_avatar: Option<String>,

    /// Free-form date text, e.g. "17 Dec 2024".
    pub order_date: String,

    /// Free text; Pending/Completed/Refunded by convention. Values are never
    /// constrained server-side.
    pub status: String,

    pub total_amount: Decimal,
    pub payment_status: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
