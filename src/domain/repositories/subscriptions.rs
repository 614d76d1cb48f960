use anyhow::{Result, bail};
use mockall::automock;

use crate::domain::value_objects::subscriptions::SubscriptionModel;

#[automock]
pub trait SubscriptionRepository {
    /// Persists a new row and returns it with the assigned id.
    fn insert(&self, subscription: SubscriptionModel) -> Result<SubscriptionModel>;

    /// Errors when the model has no id or its row no longer exists.
    fn update(&self, subscription: &SubscriptionModel) -> Result<()>;

    /// `true` iff a row existed and was removed.
    fn delete(&self, subscription_id: i32) -> Result<bool>;

    fn find_by_id(&self, subscription_id: i32) -> Result<Option<SubscriptionModel>>;

    fn find_by_user_id(&self, user_id: i32) -> Result<Vec<SubscriptionModel>>;

    fn find_all(&self) -> Result<Vec<SubscriptionModel>>;

    fn upsert(&self, subscription: SubscriptionModel) -> Result<SubscriptionModel> {
        match subscription.id {
            None => self.insert(subscription),
            Some(_) => {
                self.update(&subscription)?;
                Ok(subscription)
            }
        }
    }
}

pub(crate) fn require_id(subscription: &SubscriptionModel) -> Result<i32> {
    match subscription.id {
        Some(id) => Ok(id),
        None => bail!("cannot update a subscription that has no id"),
    }
}
