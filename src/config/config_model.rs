use crate::{
    config::stage::Stage,
    domain::value_objects::enums::subscription_statuses::ExpirePolicy,
};

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub stage: Stage,
    pub database: Database,
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
    pub pool_max_size: u32,
}

#[derive(Debug, Clone)]
pub struct Lifecycle {
    pub expire_policy: ExpirePolicy,
}
