//! Mutex-guarded in-process store implementing [`SubscriptionRepository`].

use anyhow::{Result, anyhow, bail};
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use crate::domain::{
    repositories::subscriptions::{SubscriptionRepository, require_id},
    value_objects::subscriptions::SubscriptionModel,
};

#[derive(Debug, Default)]
struct Rows {
    last_id: i32,
    subscriptions: BTreeMap<i32, SubscriptionModel>,
}

#[derive(Debug, Default)]
pub struct SubscriptionInMemory {
    rows: Mutex<Rows>,
}

impl SubscriptionInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> Result<MutexGuard<'_, Rows>> {
        self.rows
            .lock()
            .map_err(|_| anyhow!("in-memory subscription store is poisoned"))
    }
}

impl SubscriptionRepository for SubscriptionInMemory {
    fn insert(&self, mut subscription: SubscriptionModel) -> Result<SubscriptionModel> {
        let mut rows = self.rows()?;

        rows.last_id += 1;
        let subscription_id = rows.last_id;
        subscription.id = Some(subscription_id);
        rows.subscriptions.insert(subscription_id, subscription.clone());

        Ok(subscription)
    }

    fn update(&self, subscription: &SubscriptionModel) -> Result<()> {
        let subscription_id = require_id(subscription)?;
        let mut rows = self.rows()?;

        match rows.subscriptions.get_mut(&subscription_id) {
            Some(existing) => {
                *existing = subscription.clone();
                Ok(())
            }
            None => bail!("subscription {} no longer exists", subscription_id),
        }
    }

    fn delete(&self, subscription_id: i32) -> Result<bool> {
        Ok(self.rows()?.subscriptions.remove(&subscription_id).is_some())
    }

    fn find_by_id(&self, subscription_id: i32) -> Result<Option<SubscriptionModel>> {
        Ok(self.rows()?.subscriptions.get(&subscription_id).cloned())
    }

    fn find_by_user_id(&self, user_id: i32) -> Result<Vec<SubscriptionModel>> {
        Ok(self
            .rows()?
            .subscriptions
            .values()
            .filter(|subscription| subscription.user_id == user_id)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> Result<Vec<SubscriptionModel>> {
        Ok(self.rows()?.subscriptions.values().cloned().collect())
    }
}
