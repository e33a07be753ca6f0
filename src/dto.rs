//! Wire-facing data shapes shared between the services and the HTTP layer.
//!
//! Field names on the wire keep the original API's casing (`wareHouseCode`,
//! `productCode`, ...) so existing clients keep working.

use sea_orm::{FromQueryResult, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::{product, warehouse};
use crate::services::catalog::CatalogEntry;

/// Warehouse as exposed by the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WarehouseDto {
    #[serde(rename = "wareHouseCode")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "Warehouse code must be between 1 and 50 characters."
    ))]
    pub code: String,

    #[serde(rename = "wareHouseName")]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Warehouse name must be between 1 and 100 characters."
    ))]
    pub name: String,
}

impl CatalogEntry for WarehouseDto {
    type Entity = warehouse::Entity;
    type ActiveModel = warehouse::ActiveModel;

    fn into_active_model(self) -> warehouse::ActiveModel {
        warehouse::ActiveModel {
            code: Set(self.code),
            name: Set(self.name),
            is_active: Set(true),
            ..Default::default()
        }
    }

    fn from_model(model: &warehouse::Model) -> Self {
        Self {
            code: model.code.clone(),
            name: model.name.clone(),
        }
    }

    fn active_flag() -> warehouse::Column {
        warehouse::Column::IsActive
    }
}

/// Product as exposed by the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    #[serde(rename = "productCode")]
    pub code: String,

    #[serde(rename = "productQuantity")]
    pub quantity: i32,

    #[serde(rename = "productDescription")]
    pub description: String,
}

impl CatalogEntry for ProductDto {
    type Entity = product::Entity;
    type ActiveModel = product::ActiveModel;

    fn into_active_model(self) -> product::ActiveModel {
        product::ActiveModel {
            code: Set(self.code),
            description: Set(self.description),
            quantity: Set(self.quantity),
            is_active: Set(true),
            ..Default::default()
        }
    }

    fn from_model(model: &product::Model) -> Self {
        Self {
            code: model.code.clone(),
            quantity: model.quantity,
            description: model.description.clone(),
        }
    }

    fn active_flag() -> product::Column {
        product::Column::IsActive
    }
}

/// One junction row enriched with product and warehouse details, as
/// returned by the stock search.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct StockRow {
    #[serde(rename = "productCode")]
    pub product_code: String,

    #[serde(rename = "wareHouseCode")]
    pub warehouse_code: String,

    #[serde(rename = "wareHouseName")]
    pub warehouse_name: String,

    pub quantity: i32,
}

/// Order listing projection: names resolved and the junction rows'
/// current quantities alongside the ordered amount.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderSummary {
    #[serde(rename = "sourceWareHouseName")]
    pub source_warehouse_name: String,

    #[serde(rename = "destinationWareHouseName")]
    pub destination_warehouse_name: String,

    #[serde(rename = "productName")]
    pub product_name: String,

    #[serde(rename = "productQuantityOrdered")]
    pub quantity_ordered: i32,

    #[serde(rename = "newSourceWarehouseQuantity")]
    pub source_warehouse_quantity: i32,

    #[serde(rename = "newDestinationWareHouseQuantity")]
    pub destination_warehouse_quantity: i32,
}
