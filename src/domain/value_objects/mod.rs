pub mod enums;
pub mod subscriptions;
pub mod validation;
