use sea_orm_migration::prelude::*;

use crate::m20241201_000001_create_orders_table::Orders;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Additional sample orders for exercising pagination and filters
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
                "#ORD1009".into(),
                "Alice Johnson".into(),
                "alice.johnson@example.com".into(),
                "18 Dec 2024".into(),
                "Pending".into(),
                125.00.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1010".into(),
                "Bob Smith".into(),
                "bob.smith@example.com".into(),
                "18 Dec 2024".into(),
                "Pending".into(),
                89.99.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1011".into(),
                "Carol Williams".into(),
                "carol.williams@example.com".into(),
                "19 Dec 2024".into(),
                "Pending".into(),
                234.50.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1012".into(),
                "David Brown".into(),
                "david.brown@example.com".into(),
                "19 Dec 2024".into(),
                "Pending".into(),
                45.75.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1013".into(),
                "Emma Davis".into(),
                "emma.davis@example.com".into(),
                "20 Dec 2024".into(),
                "Pending".into(),
                178.20.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1014".into(),
                "Frank Miller".into(),
                "frank.miller@example.com".into(),
                "20 Dec 2024".into(),
                "Pending".into(),
                99.99.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1015".into(),
                "Grace Wilson".into(),
                "grace.wilson@example.com".into(),
                "21 Dec 2024".into(),
                "Pending".into(),
                312.40.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1016".into(),
                "Henry Moore".into(),
                "henry.moore@example.com".into(),
                "21 Dec 2024".into(),
                "Pending".into(),
                67.80.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1017".into(),
                "Ivy Taylor".into(),
                "ivy.taylor@example.com".into(),
                "22 Dec 2024".into(),
                "Pending".into(),
                156.30.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1018".into(),
                "Jack Anderson".into(),
                "jack.anderson@example.com".into(),
                "22 Dec 2024".into(),
                "Pending".into(),
                203.15.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1019".into(),
                "Kate Thomas".into(),
                "kate.thomas@example.com".into(),
                "15 Dec 2024".into(),
                "Completed".into(),
                445.00.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1020".into(),
                "Liam Jackson".into(),
                "liam.jackson@example.com".into(),
                "15 Dec 2024".into(),
                "Completed".into(),
                78.50.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1021".into(),
                "Mia White".into(),
                "mia.white@example.com".into(),
                "16 Dec 2024".into(),
                "Completed".into(),
                189.99.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1022".into(),
                "Noah Harris".into(),
                "noah.harris@example.com".into(),
                "16 Dec 2024".into(),
                "Completed".into(),
                523.75.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1023".into(),
                "Olivia Martin".into(),
                "olivia.martin@example.com".into(),
                "17 Dec 2024".into(),
                "Completed".into(),
                91.20.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1024".into(),
                "Peter Thompson".into(),
                "peter.thompson@example.com".into(),
                "17 Dec 2024".into(),
                "Completed".into(),
                267.40.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1025".into(),
                "Quinn Garcia".into(),
                "quinn.garcia@example.com".into(),
                "18 Dec 2024".into(),
                "Completed".into(),
                134.60.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1026".into(),
                "Rachel Martinez".into(),
                "rachel.martinez@example.com".into(),
                "18 Dec 2024".into(),
                "Completed".into(),
                398.80.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1027".into(),
                "Sam Robinson".into(),
                "sam.robinson@example.com".into(),
                "19 Dec 2024".into(),
                "Completed".into(),
                56.90.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1028".into(),
                "Tina Clark".into(),
                "tina.clark@example.com".into(),
                "19 Dec 2024".into(),
                "Completed".into(),
                712.30.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1029".into(),
                "Uma Rodriguez".into(),
                "uma.rodriguez@example.com".into(),
                "20 Dec 2024".into(),
                "Completed".into(),
                145.50.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1030".into(),
                "Victor Lewis".into(),
                "victor.lewis@example.com".into(),
                "20 Dec 2024".into(),
                "Completed".into(),
                289.00.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1031".into(),
                "Wendy Lee".into(),
                "wendy.lee@example.com".into(),
                "21 Dec 2024".into(),
                "Completed".into(),
                423.75.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1032".into(),
                "Xavier Walker".into(),
                "xavier.walker@example.com".into(),
                "21 Dec 2024".into(),
                "Completed".into(),
                98.40.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1033".into(),
                "Yara Hall".into(),
                "yara.hall@example.com".into(),
                "22 Dec 2024".into(),
                "Completed".into(),
                567.20.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1034".into(),
                "Zoe Allen".into(),
                "zoe.allen@example.com".into(),
                "14 Dec 2024".into(),
                "Refunded".into(),
                234.00.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1035".into(),
                "Aaron Young".into(),
                "aaron.young@example.com".into(),
                "14 Dec 2024".into(),
                "Refunded".into(),
                156.50.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1036".into(),
                "Bella King".into(),
                "bella.king@example.com".into(),
                "15 Dec 2024".into(),
                "Refunded".into(),
                89.99.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1037".into(),
                "Chris Wright".into(),
                "chris.wright@example.com".into(),
                "15 Dec 2024".into(),
                "Refunded".into(),
                345.60.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1038".into(),
                "Diana Lopez".into(),
                "diana.lopez@example.com".into(),
                "16 Dec 2024".into(),
                "Refunded".into(),
                123.45.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1039".into(),
                "Ethan Hill".into(),
                "ethan.hill@example.com".into(),
                "23 Dec 2024".into(),
                "Pending".into(),
                278.90.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1040".into(),
                "Fiona Scott".into(),
                "fiona.scott@example.com".into(),
                "23 Dec 2024".into(),
                "Pending".into(),
                167.30.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1041".into(),
                "George Green".into(),
                "george.green@example.com".into(),
                "24 Dec 2024".into(),
                "Pending".into(),
                445.80.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1042".into(),
                "Hannah Adams".into(),
                "hannah.adams@example.com".into(),
                "24 Dec 2024".into(),
                "Pending".into(),
                92.15.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1043".into(),
                "Ian Baker".into(),
                "ian.baker@example.com".into(),
                "25 Dec 2024".into(),
                "Pending".into(),
                356.70.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1044".into(),
                "Julia Nelson".into(),
                "julia.nelson@example.com".into(),
                "13 Dec 2024".into(),
                "Completed".into(),
                678.40.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1045".into(),
                "Kevin Carter".into(),
                "kevin.carter@example.com".into(),
                "13 Dec 2024".into(),
                "Completed".into(),
                234.90.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1046".into(),
                "Laura Mitchell".into(),
                "laura.mitchell@example.com".into(),
                "14 Dec 2024".into(),
                "Completed".into(),
                145.20.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1047".into(),
                "Mike Perez".into(),
                "mike.perez@example.com".into(),
                "14 Dec 2024".into(),
                "Completed".into(),
                523.60.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1048".into(),
                "Nina Roberts".into(),
                "nina.roberts@example.com".into(),
                "15 Dec 2024".into(),
                "Completed".into(),
                89.75.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1049".into(),
                "Oscar Turner".into(),
                "oscar.turner@example.com".into(),
                "15 Dec 2024".into(),
                "Completed".into(),
                412.30.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1050".into(),
                "Paula Phillips".into(),
                "paula.phillips@example.com".into(),
                "16 Dec 2024".into(),
                "Completed".into(),
                198.50.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1051".into(),
                "Quincy Campbell".into(),
                "quincy.campbell@example.com".into(),
                "16 Dec 2024".into(),
                "Completed".into(),
                756.80.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1052".into(),
                "Rita Parker".into(),
                "rita.parker@example.com".into(),
                "17 Dec 2024".into(),
                "Completed".into(),
                334.20.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1053".into(),
                "Steve Evans".into(),
                "steve.evans@example.com".into(),
                "17 Dec 2024".into(),
                "Completed".into(),
                167.90.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1054".into(),
                "Tara Edwards".into(),
                "tara.edwards@example.com".into(),
                "25 Dec 2024".into(),
                "Pending".into(),
                289.40.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1055".into(),
                "Umar Collins".into(),
                "umar.collins@example.com".into(),
                "25 Dec 2024".into(),
                "Completed".into(),
                445.70.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1056".into(),
                "Vera Stewart".into(),
                "vera.stewart@example.com".into(),
                "26 Dec 2024".into(),
                "Pending".into(),
                123.80.into(),
                "Unpaid".into(),
            ])
            .values_panic([
                "#ORD1057".into(),
                "Will Sanchez".into(),
                "will.sanchez@example.com".into(),
                "26 Dec 2024".into(),
                "Completed".into(),
                567.30.into(),
                "Paid".into(),
            ])
            .values_panic([
                "#ORD1058".into(),
                "Xena Morris".into(),
                "xena.morris@example.com".into(),
                "27 Dec 2024".into(),
                "Refunded".into(),
                234.50.into(),
                "Paid".into(),
            ])
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let numbers: Vec<String> = (1009..=1058).map(|n| format!("#ORD{n}")).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Orders::Table)
                    .cond_where(Expr::col(Orders::OrderNumber).is_in(numbers))
                    .to_owned(),
            )
            .await
    }
}
