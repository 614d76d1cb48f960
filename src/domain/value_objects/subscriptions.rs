use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::{
    providers::Provider, subscription_statuses::SubscriptionStatus,
};

/// A subscription as the lifecycle engine sees it. `id` stays `None` until
/// the repository assigns one on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionModel {
    pub id: Option<i32>,
    pub user_id: i32,
    pub name: String,
    pub provider: Provider,
    pub expiration_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
}

/// Untrusted create/update input. Every field may be missing and the provider
/// is free text until validation has run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionModel {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub provider: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
}
