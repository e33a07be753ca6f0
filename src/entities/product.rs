use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Product code cannot be longer than 100 characters."
    ))]
    pub code: String,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Product description cannot be longer than 500 characters."
    ))]
    pub description: String,

    /// Nominal quantity captured at creation time. On-hand stock per
    /// warehouse lives in `product_warehouses`.
    pub quantity: i32,

    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_warehouse::Entity")]
    ProductWarehouse,
}

impl Related<super::product_warehouse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductWarehouse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
