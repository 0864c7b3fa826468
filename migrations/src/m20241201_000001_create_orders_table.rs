use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create orders table aligned with entities::order Model
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::OrderNumber).string().not_null())
                    .col(ColumnDef::new(Orders::CustomerName).string().not_null())
                    .col(ColumnDef::new(Orders::CustomerEmail).string().not_null())
                    .col(ColumnDef::new(Orders::CustomerAvatar).string().null())
                    .col(ColumnDef::new(Orders::OrderDate).string().not_null())
                    .col(ColumnDef::new(Orders::Status).string().not_null())
                    .col(ColumnDef::new(Orders::TotalAmount).decimal().not_null())
                    .col(ColumnDef::new(Orders::PaymentStatus).string().not_null())
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Orders::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Base sample data
        let seed = Query::insert()
            .into_table(Orders::Table)
            .columns([
                Orders::OrderNumber,
                Orders::CustomerName,
                Orders::CustomerEmail,
                Orders::OrderDate,
                Orders::Status,
                Orders::TotalAmount,
                Orders::PaymentStatus,
            ])
            .values_panic([
                "#ORD1008".into(),
                "Esther Kiehn".into(),
                "esther.kiehn@example.com".into(),
                "17 Dec 2024".into(),
                "Pending".into(),
                10.50.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1007".into(),
                "Denise Kuhn".into(),
                "denise.kuhn@example.com".into(),
                "16 Dec 2024".into(),
                "Pending".into(),
                100.50.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1006".into(),
                "Clint Hoppe".into(),
                "clint.hoppe@example.com".into(),
                "16 Dec 2024".into(),
                "Completed".into(),
                60.50.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1005".into(),
                "Darin Deckow".into(),
                "darin.deckow@example.com".into(),
                "16 Dec 2024".into(),
                "Refunded".into(),
                640.50.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1004".into(),
                "Jacquelyn Robel".into(),
                "jacquelyn.robel@example.com".into(),
                "15 Dec 2024".into(),
                "Completed".into(),
                39.50.into(),
                "Paid".into(),
            ])
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    OrderNumber,
    CustomerName,
    CustomerEmail,
    CustomerAvatar,
    OrderDate,
    Status,
    TotalAmount,
    PaymentStatus,
    CreatedAt,
    UpdatedAt,
}
