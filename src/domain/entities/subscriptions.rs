use anyhow::Result;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::{
    domain::value_objects::{
        enums::{providers::Provider, subscription_statuses::SubscriptionStatus},
        subscriptions::SubscriptionModel,
    },
    infrastructure::postgres::schema::subscription,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = subscription)]
pub struct SubscriptionEntity {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub provider: String,
    pub expiration_date: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = subscription)]
pub struct InsertSubscriptionEntity {
    pub user_id: i32,
    pub name: String,
    pub provider: String,
    pub expiration_date: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = subscription)]
pub struct EditSubscriptionEntity {
    pub user_id: i32,
    pub name: String,
    pub provider: String,
    pub expiration_date: DateTime<Utc>,
    pub status: String,
}

impl SubscriptionEntity {
    pub fn to_model(self) -> Result<SubscriptionModel> {
        Ok(SubscriptionModel {
            id: Some(self.id),
            user_id: self.user_id,
            name: self.name,
            provider: self.provider.parse::<Provider>()?,
            expiration_date: self.expiration_date,
            status: self.status.parse::<SubscriptionStatus>()?,
        })
    }
}

impl From<&SubscriptionModel> for InsertSubscriptionEntity {
    fn from(model: &SubscriptionModel) -> Self {
        Self {
            user_id: model.user_id,
            name: model.name.clone(),
            provider: model.provider.to_string(),
            expiration_date: model.expiration_date,
            status: model.status.to_string(),
        }
    }
}

impl From<&SubscriptionModel> for EditSubscriptionEntity {
    fn from(model: &SubscriptionModel) -> Self {
        Self {
            user_id: model.user_id,
            name: model.name.clone(),
            provider: model.provider.to_string(),
            expiration_date: model.expiration_date,
            status: model.status.to_string(),
        }
    }
}
