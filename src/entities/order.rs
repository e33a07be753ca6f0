use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Immutable record of a completed stock transfer between two warehouses.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub source_warehouse_id: i32,
    pub destination_warehouse_id: i32,
    pub quantity: i32,
    pub order_date: DateTimeUtc,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::warehouse::Entity",
        from = "Column::SourceWarehouseId",
        to = "super::warehouse::Column::Id"
    )]
    SourceWarehouse,
    #[sea_orm(
        belongs_to = "super::warehouse::Entity",
        from = "Column::DestinationWarehouseId",
        to = "super::warehouse::Column::Id"
    )]
    DestinationWarehouse,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
