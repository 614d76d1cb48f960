pub mod providers;
pub mod subscription_statuses;
