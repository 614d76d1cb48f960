use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::value_objects::{
    enums::{
        providers::{Provider, UnknownProvider},
        subscription_statuses::SubscriptionStatus,
    },
    subscriptions::{CreateSubscriptionModel, SubscriptionModel},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("{0} is missing")]
    MissingField(&'static str),
    #[error(transparent)]
    UnknownProvider(#[from] UnknownProvider),
}

struct RequestFields {
    user_id: i32,
    name: String,
    provider: Provider,
    expiration_date: DateTime<Utc>,
}

impl TryFrom<&CreateSubscriptionModel> for RequestFields {
    type Error = MappingError;

    fn try_from(request: &CreateSubscriptionModel) -> Result<Self, Self::Error> {
        let provider = request
            .provider
            .as_deref()
            .ok_or(MappingError::MissingField("provider"))?;

        Ok(Self {
            user_id: request.user_id.ok_or(MappingError::MissingField("userId"))?,
            name: request
                .name
                .clone()
                .ok_or(MappingError::MissingField("name"))?,
            provider: Provider::parse(provider)?,
            expiration_date: request
                .expiration_date
                .ok_or(MappingError::MissingField("expirationDate"))?,
        })
    }
}

/// Turns a validated request into a subscription. Fed unvalidated input it
/// fails instead of guessing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateSubscriptionMapper;

impl CreateSubscriptionMapper {
    pub fn new() -> Self {
        Self
    }

    /// New, not yet persisted subscription in the initial `Active` state.
    pub fn map(
        &self,
        request: &CreateSubscriptionModel,
    ) -> Result<SubscriptionModel, MappingError> {
        let fields = RequestFields::try_from(request)?;

        Ok(SubscriptionModel {
            id: None,
            user_id: fields.user_id,
            name: fields.name,
            provider: fields.provider,
            expiration_date: fields.expiration_date,
            status: SubscriptionStatus::Active,
        })
    }

    /// Overwrites the request-owned fields of `existing`, keeping its id and status.
    pub fn merge(
        &self,
        mut existing: SubscriptionModel,
        request: &CreateSubscriptionModel,
    ) -> Result<SubscriptionModel, MappingError> {
        let fields = RequestFields::try_from(request)?;

        existing.provider = fields.provider;
        existing.expiration_date = fields.expiration_date;
        existing.name = fields.name;
        existing.user_id = fields.user_id;

        Ok(existing)
    }
}
