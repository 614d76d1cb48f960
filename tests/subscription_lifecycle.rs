use std::sync::Arc;

use chrono::{Duration, DurationRound, Utc};
use subscription_lifecycle::{
    application::{
        interfaces::clock::SystemClock,
        mappers::CreateSubscriptionMapper,
        usecases::subscriptions::{SubscriptionError, SubscriptionUseCase},
        validators::CreateSubscriptionValidator,
    },
    domain::{
        repositories::subscriptions::SubscriptionRepository,
        value_objects::{
            enums::{
                providers::Provider,
                subscription_statuses::{ExpirePolicy, LifecycleViolation, SubscriptionStatus},
            },
            subscriptions::CreateSubscriptionModel,
        },
    },
    infrastructure::memory::subscriptions::SubscriptionInMemory,
};

fn setup() -> (
    Arc<SubscriptionInMemory>,
    SubscriptionUseCase<SubscriptionInMemory, SystemClock>,
) {
    let repository = Arc::new(SubscriptionInMemory::new());
    let use_case = SubscriptionUseCase::new(
        Arc::clone(&repository),
        CreateSubscriptionValidator::new(),
        CreateSubscriptionMapper::new(),
        Arc::new(SystemClock),
        ExpirePolicy::default(),
    );
    (repository, use_case)
}

fn subscription_request(name: &str) -> CreateSubscriptionModel {
    let expiration_date = (Utc::now() + Duration::days(30))
        .duration_trunc(Duration::try_seconds(1).unwrap())
        .unwrap();
    CreateSubscriptionModel {
        user_id: Some(666),
        name: Some(name.to_string()),
        provider: Some(Provider::Google.to_string()),
        expiration_date: Some(expiration_date),
    }
}

#[test]
fn upsert_creates_active_subscription_with_assigned_id() {
    let (repository, use_case) = setup();
    let request = subscription_request("sub1");

    let subscription = use_case.upsert(request.clone()).unwrap();

    assert!(subscription.id.is_some());
    assert_eq!(subscription.user_id, 666);
    assert_eq!(subscription.name, "sub1");
    assert_eq!(subscription.provider, Provider::Google);
    assert_eq!(subscription.status, SubscriptionStatus::Active);
    assert_eq!(Some(subscription.expiration_date), request.expiration_date);
    assert_eq!(
        repository.find_by_id(subscription.id.unwrap()).unwrap(),
        Some(subscription)
    );
}

#[test]
fn repeated_upsert_for_same_user_and_name_updates_in_place() {
    let (repository, use_case) = setup();

    let first = use_case.upsert(subscription_request("sub1")).unwrap();
    let second = use_case
        .upsert(CreateSubscriptionModel {
            provider: Some("apple".to_string()),
            ..subscription_request("sub1")
        })
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.provider, Provider::Apple);
    assert_eq!(repository.find_by_user_id(666).unwrap().len(), 1);
}

#[test]
fn different_names_get_separate_rows() {
    let (repository, use_case) = setup();

    let first = use_case.upsert(subscription_request("sub1")).unwrap();
    let second = use_case.upsert(subscription_request("sub2")).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repository.find_all().unwrap().len(), 2);
}

#[test]
fn invalid_request_is_rejected_before_storage() {
    let (repository, use_case) = setup();

    let result = use_case.upsert(CreateSubscriptionModel {
        expiration_date: None,
        ..subscription_request("sub1")
    });

    assert!(matches!(result, Err(SubscriptionError::Validation(_))));
    assert!(repository.find_all().unwrap().is_empty());
}

#[test]
fn cancel_persists_canceled_status() {
    let (repository, use_case) = setup();
    let subscription = use_case.upsert(subscription_request("sub1")).unwrap();
    let subscription_id = subscription.id.unwrap();

    use_case.cancel(subscription_id).unwrap();

    let stored = repository.find_by_id(subscription_id).unwrap().unwrap();
    assert_eq!(stored.status, SubscriptionStatus::Canceled);
    assert_eq!(stored.expiration_date, subscription.expiration_date);
}

#[test]
fn cancel_twice_is_a_lifecycle_violation() {
    let (_, use_case) = setup();
    let subscription_id = use_case.upsert(subscription_request("sub1")).unwrap().id.unwrap();
    use_case.cancel(subscription_id).unwrap();

    let result = use_case.cancel(subscription_id);

    assert!(matches!(
        result,
        Err(SubscriptionError::Lifecycle {
            violation: LifecycleViolation::AlreadyCanceled,
            ..
        })
    ));
}

#[test]
fn expire_persists_expired_status_and_expiry_instant() {
    let (repository, use_case) = setup();
    let subscription_id = use_case.upsert(subscription_request("sub1")).unwrap().id.unwrap();

    use_case.expire(subscription_id).unwrap();

    let stored = repository.find_by_id(subscription_id).unwrap().unwrap();
    assert_eq!(stored.status, SubscriptionStatus::Expired);
    assert!(stored.expiration_date <= Utc::now());
}

#[test]
fn expire_twice_is_a_lifecycle_violation() {
    let (_, use_case) = setup();
    let subscription_id = use_case.upsert(subscription_request("sub1")).unwrap().id.unwrap();
    use_case.expire(subscription_id).unwrap();

    let result = use_case.expire(subscription_id);

    assert!(matches!(
        result,
        Err(SubscriptionError::Lifecycle {
            violation: LifecycleViolation::AlreadyExpired,
            ..
        })
    ));
}

#[test]
fn unknown_id_is_not_found_for_both_transitions() {
    let (_, use_case) = setup();

    assert!(matches!(use_case.cancel(999), Err(SubscriptionError::NotFound(999))));
    assert!(matches!(use_case.expire(999), Err(SubscriptionError::NotFound(999))));
}
