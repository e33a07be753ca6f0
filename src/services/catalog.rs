use std::marker::PhantomData;
use std::sync::Arc;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel,
    QueryFilter,
};
use tracing::{error, instrument};

use crate::{db::DbPool, errors::ServiceError};

/// Capability set an entity needs to flow through the catalog service: a
/// persisted record form, a wire form, and a first-class active flag.
///
/// Implemented once per (entity, DTO) pair at the call site; the service
/// itself carries no per-entity logic.
pub trait CatalogEntry: Sized + Send + Sync {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send;

    fn into_active_model(self) -> Self::ActiveModel;
    fn from_model(model: &<Self::Entity as EntityTrait>::Model) -> Self;

    /// Column holding the soft-delete flag. Listing only returns rows where
    /// this column is true.
    fn active_flag() -> <Self::Entity as EntityTrait>::Column;
}

/// Generic create/list service shared by simple catalog entities.
pub struct CatalogService<E> {
    db_pool: Arc<DbPool>,
    _entry: PhantomData<E>,
}

impl<E> Clone for CatalogService<E> {
    fn clone(&self) -> Self {
        Self {
            db_pool: self.db_pool.clone(),
            _entry: PhantomData,
        }
    }
}

impl<E> CatalogService<E>
where
    E: CatalogEntry,
    <E::Entity as EntityTrait>::Model: IntoActiveModel<E::ActiveModel>,
{
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            db_pool,
            _entry: PhantomData,
        }
    }

    /// Inserts a new record unless `exists` matches one already.
    ///
    /// The existence check deliberately ignores the active flag: a
    /// soft-deleted record still blocks re-creation under the same key.
    #[instrument(skip_all)]
    pub async fn create(&self, entry: E, exists: Option<Condition>) -> Result<(), ServiceError> {
        let db = &*self.db_pool;

        if let Some(condition) = exists {
            let existing = <E::Entity as EntityTrait>::find()
                .filter(condition)
                .one(db)
                .await
                .map_err(|e| {
                    error!(error = %e, "existence check failed");
                    ServiceError::DatabaseError(e)
                })?;
            if existing.is_some() {
                return Err(ServiceError::Conflict("Entity already exists".to_string()));
            }
        }

        entry.into_active_model().insert(db).await.map_err(|e| {
            error!(error = %e, "failed to insert entity");
            ServiceError::DatabaseError(e)
        })?;

        Ok(())
    }

    /// Lists all active records, mapped to their wire form, in store order.
    #[instrument(skip_all)]
    pub async fn list(&self) -> Result<Vec<E>, ServiceError> {
        let db = &*self.db_pool;

        let rows = <E::Entity as EntityTrait>::find()
            .filter(E::active_flag().eq(true))
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to list entities");
                ServiceError::DatabaseError(e)
            })?;

        Ok(rows.iter().map(E::from_model).collect())
    }
}
