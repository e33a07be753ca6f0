use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_warehouses_table::Migration),
            Box::new(m20250110_000002_create_products_table::Migration),
            Box::new(m20250110_000003_create_product_warehouses_table::Migration),
            Box::new(m20250110_000004_create_orders_table::Migration),
        ]
    }
}

// Migration implementations

mod m20250110_000001_create_warehouses_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250110_000001_create_warehouses_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Warehouses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Warehouses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Warehouses::Code)
                                .string_len(50)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Warehouses::Name).string_len(100).not_null())
                        .col(
                            ColumnDef::new(Warehouses::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Warehouses::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Warehouses {
        Table,
        Id,
        Code,
        Name,
        IsActive,
    }
}

mod m20250110_000002_create_products_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250110_000002_create_products_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Products::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Products::Code)
                                .string_len(100)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Products::Description)
                                .string_len(500)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Products::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(Products::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Products {
        Table,
        Id,
        Code,
        Description,
        Quantity,
        IsActive,
    }
}

mod m20250110_000003_create_product_warehouses_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250110_000003_create_product_warehouses_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ProductWarehouses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProductWarehouses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ProductWarehouses::ProductId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProductWarehouses::WarehouseId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProductWarehouses::Quantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(ProductWarehouses::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_warehouses_product_id")
                                .from(ProductWarehouses::Table, ProductWarehouses::ProductId)
                                .to(
                                    super::m20250110_000002_create_products_table::Products::Table,
                                    super::m20250110_000002_create_products_table::Products::Id,
                                )
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_warehouses_warehouse_id")
                                .from(ProductWarehouses::Table, ProductWarehouses::WarehouseId)
                                .to(
                                    super::m20250110_000001_create_warehouses_table::Warehouses::Table,
                                    super::m20250110_000001_create_warehouses_table::Warehouses::Id,
                                )
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // Lookup index only. Pair uniqueness is enforced by
            // lookup-before-insert in the services, not by a constraint.
            manager
                .create_index(
                    Index::create()
                        .name("idx_product_warehouses_product_warehouse")
                        .table(ProductWarehouses::Table)
                        .col(ProductWarehouses::ProductId)
                        .col(ProductWarehouses::WarehouseId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ProductWarehouses::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum ProductWarehouses {
        Table,
        Id,
        ProductId,
        WarehouseId,
        Quantity,
        IsActive,
    }
}

mod m20250110_000004_create_orders_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250110_000004_create_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Orders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Orders::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Orders::ProductId).integer().not_null())
                        .col(
                            ColumnDef::new(Orders::SourceWarehouseId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Orders::DestinationWarehouseId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Orders::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(Orders::OrderDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Orders::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_orders_product_id")
                                .from(Orders::Table, Orders::ProductId)
                                .to(
                                    super::m20250110_000002_create_products_table::Products::Table,
                                    super::m20250110_000002_create_products_table::Products::Id,
                                )
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_orders_source_warehouse_id")
                                .from(Orders::Table, Orders::SourceWarehouseId)
                                .to(
                                    super::m20250110_000001_create_warehouses_table::Warehouses::Table,
                                    super::m20250110_000001_create_warehouses_table::Warehouses::Id,
                                )
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_orders_destination_warehouse_id")
                                .from(Orders::Table, Orders::DestinationWarehouseId)
                                .to(
                                    super::m20250110_000001_create_warehouses_table::Warehouses::Table,
                                    super::m20250110_000001_create_warehouses_table::Warehouses::Id,
                                )
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
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
        ProductId,
        SourceWarehouseId,
        DestinationWarehouseId,
        Quantity,
        OrderDate,
        IsActive,
    }
}
