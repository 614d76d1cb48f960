use anyhow::{Result, bail};
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::{
    domain::{
        entities::subscriptions::{
            EditSubscriptionEntity, InsertSubscriptionEntity, SubscriptionEntity,
        },
        repositories::subscriptions::{SubscriptionRepository, require_id},
        value_objects::subscriptions::SubscriptionModel,
    },
    infrastructure::postgres::{postgres_connection::SubscriptionPool, schema::subscription},
};

pub struct SubscriptionPostgres {
    db_pool: Arc<SubscriptionPool>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<SubscriptionPool>) -> Self {
        Self { db_pool }
    }
}

impl SubscriptionRepository for SubscriptionPostgres {
    fn insert(&self, subscription_model: SubscriptionModel) -> Result<SubscriptionModel> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let inserted = insert_into(subscription::table)
            .values(&InsertSubscriptionEntity::from(&subscription_model))
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)?;

        inserted.to_model()
    }

    fn update(&self, subscription_model: &SubscriptionModel) -> Result<()> {
        let subscription_id = require_id(subscription_model)?;
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let updated = update(subscription::table.find(subscription_id))
            .set(&EditSubscriptionEntity::from(subscription_model))
            .execute(&mut conn)?;
        if updated == 0 {
            bail!("subscription {} no longer exists", subscription_id);
        }

        Ok(())
    }

    fn delete(&self, subscription_id: i32) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted =
            diesel::delete(subscription::table.find(subscription_id)).execute(&mut conn)?;

        Ok(deleted > 0)
    }

    fn find_by_id(&self, subscription_id: i32) -> Result<Option<SubscriptionModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = subscription::table
            .find(subscription_id)
            .select(SubscriptionEntity::as_select())
            .first::<SubscriptionEntity>(&mut conn)
            .optional()?;

        result.map(SubscriptionEntity::to_model).transpose()
    }

    fn find_by_user_id(&self, user_id: i32) -> Result<Vec<SubscriptionModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = subscription::table
            .filter(subscription::user_id.eq(user_id))
            .order(subscription::id.asc())
            .select(SubscriptionEntity::as_select())
            .load::<SubscriptionEntity>(&mut conn)?;

        results.into_iter().map(SubscriptionEntity::to_model).collect()
    }

    fn find_all(&self) -> Result<Vec<SubscriptionModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = subscription::table
            .order(subscription::id.asc())
            .select(SubscriptionEntity::as_select())
            .load::<SubscriptionEntity>(&mut conn)?;

        results.into_iter().map(SubscriptionEntity::to_model).collect()
    }
}
