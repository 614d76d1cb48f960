use std::{fmt::Display, str::FromStr};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Canceled,
    Expired,
}

/// Whether `expire` may move a canceled subscription to expired.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirePolicy {
    #[default]
    AllowCanceled,
    RejectCanceled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleViolation {
    #[error("subscription is already canceled")]
    AlreadyCanceled,
    #[error("subscription is already expired")]
    AlreadyExpired,
    #[error("canceled subscription cannot be expired")]
    CanceledNotExpirable,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "ACTIVE",
            SubscriptionStatus::Canceled => "CANCELED",
            SubscriptionStatus::Expired => "EXPIRED",
        }
    }

    pub fn cancel(self) -> Result<Self, LifecycleViolation> {
        match self {
            SubscriptionStatus::Canceled => Err(LifecycleViolation::AlreadyCanceled),
            SubscriptionStatus::Active | SubscriptionStatus::Expired => {
                Ok(SubscriptionStatus::Canceled)
            }
        }
    }

    pub fn expire(self, policy: ExpirePolicy) -> Result<Self, LifecycleViolation> {
        match (self, policy) {
            (SubscriptionStatus::Expired, _) => Err(LifecycleViolation::AlreadyExpired),
            (SubscriptionStatus::Canceled, ExpirePolicy::RejectCanceled) => {
                Err(LifecycleViolation::CanceledNotExpirable)
            }
            _ => Ok(SubscriptionStatus::Expired),
        }
    }
}

impl Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ACTIVE" => Ok(SubscriptionStatus::Active),
            "CANCELED" => Ok(SubscriptionStatus::Canceled),
            "EXPIRED" => Ok(SubscriptionStatus::Expired),
            other => Err(anyhow!("Unsupported subscription status: {}", other)),
        }
    }
}

impl FromStr for ExpirePolicy {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "allow" => Ok(ExpirePolicy::AllowCanceled),
            "reject" => Ok(ExpirePolicy::RejectCanceled),
            other => Err(anyhow!("Unsupported expire policy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_rejected_only_when_already_canceled() {
        assert_eq!(
            SubscriptionStatus::Active.cancel(),
            Ok(SubscriptionStatus::Canceled)
        );
        assert_eq!(
            SubscriptionStatus::Canceled.cancel(),
            Err(LifecycleViolation::AlreadyCanceled)
        );
    }

    #[test]
    fn expire_follows_policy_for_canceled_subscriptions() {
        assert_eq!(
            SubscriptionStatus::Active.expire(ExpirePolicy::AllowCanceled),
            Ok(SubscriptionStatus::Expired)
        );
        assert_eq!(
            SubscriptionStatus::Canceled.expire(ExpirePolicy::AllowCanceled),
            Ok(SubscriptionStatus::Expired)
        );
        assert_eq!(
            SubscriptionStatus::Canceled.expire(ExpirePolicy::RejectCanceled),
            Err(LifecycleViolation::CanceledNotExpirable)
        );
        assert_eq!(
            SubscriptionStatus::Expired.expire(ExpirePolicy::AllowCanceled),
            Err(LifecycleViolation::AlreadyExpired)
        );
    }

    #[test]
    fn stored_names_parse_back() {
        for status in [
            SubscriptionStatus::Active,
            SubscriptionStatus::Canceled,
            SubscriptionStatus::Expired,
        ] {
            assert_eq!(status.to_string().parse::<SubscriptionStatus>().unwrap(), status);
        }
        assert!("active".parse::<SubscriptionStatus>().is_err());
    }

    #[test]
    fn expire_policy_parses_config_values() {
        assert_eq!("allow".parse::<ExpirePolicy>().unwrap(), ExpirePolicy::AllowCanceled);
        assert_eq!("REJECT".parse::<ExpirePolicy>().unwrap(), ExpirePolicy::RejectCanceled);
        assert!("sometimes".parse::<ExpirePolicy>().is_err());
    }
}
