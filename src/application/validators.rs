use crate::domain::value_objects::{
    enums::providers::Provider,
    subscriptions::CreateSubscriptionModel,
    validation::{ValidationError, ValidationResult},
};

pub const INVALID_USER_ID: u16 = 100;
pub const INVALID_NAME: u16 = 101;
pub const INVALID_PROVIDER: u16 = 102;
pub const INVALID_EXPIRATION_DATE: u16 = 103;

/// Presence checks for a create/update request. Every check runs, so all
/// problems come back together in field order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateSubscriptionValidator;

impl CreateSubscriptionValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, request: &CreateSubscriptionModel) -> ValidationResult {
        let mut result = ValidationResult::new();

        if request.user_id.is_none() {
            result.add(ValidationError::new(INVALID_USER_ID, "userId is invalid"));
        }
        if request.name.is_none() {
            result.add(ValidationError::new(INVALID_NAME, "name is invalid"));
        }
        let provider_resolves = request
            .provider
            .as_deref()
            .is_some_and(|provider| Provider::parse(provider).is_ok());
        if !provider_resolves {
            result.add(ValidationError::new(INVALID_PROVIDER, "provider is invalid"));
        }
        if request.expiration_date.is_none() {
            result.add(ValidationError::new(
                INVALID_EXPIRATION_DATE,
                "expirationDate is invalid",
            ));
        }

        result
    }
}
