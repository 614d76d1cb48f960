use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    application::{
        interfaces::clock::Clock,
        mappers::{CreateSubscriptionMapper, MappingError},
        validators::CreateSubscriptionValidator,
    },
    domain::{
        repositories::subscriptions::SubscriptionRepository,
        value_objects::{
            enums::subscription_statuses::{ExpirePolicy, LifecycleViolation},
            subscriptions::{CreateSubscriptionModel, SubscriptionModel},
            validation::ValidationResult,
        },
    },
};

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("invalid subscription request: {0}")]
    Validation(ValidationResult),
    #[error("subscription {subscription_id}: {violation}")]
    Lifecycle {
        subscription_id: i32,
        violation: LifecycleViolation,
    },
    #[error("subscription {0} not found")]
    NotFound(i32),
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

pub type UseCaseResult<T> = std::result::Result<T, SubscriptionError>;

pub struct SubscriptionUseCase<R, C>
where
    R: SubscriptionRepository + Send + Sync,
    C: Clock + Send + Sync,
{
    subscription_repository: Arc<R>,
    validator: CreateSubscriptionValidator,
    mapper: CreateSubscriptionMapper,
    clock: Arc<C>,
    expire_policy: ExpirePolicy,
}

impl<R, C> SubscriptionUseCase<R, C>
where
    R: SubscriptionRepository + Send + Sync,
    C: Clock + Send + Sync,
{
    pub fn new(
        subscription_repository: Arc<R>,
        validator: CreateSubscriptionValidator,
        mapper: CreateSubscriptionMapper,
        clock: Arc<C>,
        expire_policy: ExpirePolicy,
    ) -> Self {
        Self {
            subscription_repository,
            validator,
            mapper,
            clock,
            expire_policy,
        }
    }

    /// Creates the subscription, or updates the user's existing one with the
    /// same name. The first exact name match wins.
    pub fn upsert(&self, request: CreateSubscriptionModel) -> UseCaseResult<SubscriptionModel> {
        info!(
            user_id = ?request.user_id,
            name = ?request.name,
            "subscriptions: upsert requested"
        );

        let validation_result = self.validator.validate(&request);
        if validation_result.has_errors() {
            return Err(SubscriptionError::Validation(validation_result));
        }

        let user_id = request
            .user_id
            .ok_or(MappingError::MissingField("userId"))?;

        let existing = self
            .subscription_repository
            .find_by_user_id(user_id)?
            .into_iter()
            .find(|subscription| Some(&subscription.name) == request.name.as_ref());

        let subscription = match existing {
            Some(existing) => {
                debug!(
                    user_id,
                    subscription_id = ?existing.id,
                    "subscriptions: updating subscription with the same name"
                );
                self.mapper.merge(existing, &request)?
            }
            None => {
                debug!(user_id, "subscriptions: no subscription with this name, creating");
                self.mapper.map(&request)?
            }
        };

        let saved = self.subscription_repository.upsert(subscription)?;
        info!(
            user_id,
            subscription_id = ?saved.id,
            status = %saved.status,
            "subscriptions: upsert completed"
        );

        Ok(saved)
    }

    pub fn cancel(&self, subscription_id: i32) -> UseCaseResult<SubscriptionModel> {
        info!(subscription_id, "subscriptions: cancel requested");

        let mut subscription = self.load(subscription_id)?;
        subscription.status = subscription
            .status
            .cancel()
            .map_err(|violation| SubscriptionError::Lifecycle {
                subscription_id,
                violation,
            })?;

        self.subscription_repository.update(&subscription)?;
        info!(subscription_id, "subscriptions: subscription canceled");

        Ok(subscription)
    }

    /// Marks the subscription expired and stamps the expiry instant as its
    /// expiration date.
    pub fn expire(&self, subscription_id: i32) -> UseCaseResult<SubscriptionModel> {
        info!(subscription_id, "subscriptions: expire requested");

        let mut subscription = self.load(subscription_id)?;
        subscription.status = subscription
            .status
            .expire(self.expire_policy)
            .map_err(|violation| SubscriptionError::Lifecycle {
                subscription_id,
                violation,
            })?;
        subscription.expiration_date = self.clock.now();

        self.subscription_repository.update(&subscription)?;
        info!(
            subscription_id,
            expiration_date = %subscription.expiration_date,
            "subscriptions: subscription expired"
        );

        Ok(subscription)
    }

    fn load(&self, subscription_id: i32) -> UseCaseResult<SubscriptionModel> {
        self.subscription_repository
            .find_by_id(subscription_id)?
            .ok_or(SubscriptionError::NotFound(subscription_id))
    }
}
