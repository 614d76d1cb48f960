use anyhow::{Context, Result, bail};

use crate::config::{
    config_model::{Database, DotEnvyConfig, Lifecycle},
    stage::Stage,
};
use crate::domain::value_objects::enums::subscription_statuses::ExpirePolicy;

const DEFAULT_POOL_MAX_SIZE: u32 = 10;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    from_lookup(|key| std::env::var(key).ok())
}

fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<DotEnvyConfig> {
    let stage = match lookup("STAGE").filter(|value| !value.is_empty()) {
        Some(value) => Stage::try_from(&value)?,
        None => Stage::default(),
    };

    let pool_max_size = match lookup("DATABASE_POOL_MAX_SIZE") {
        Some(value) => value
            .parse::<u32>()
            .context("DATABASE_POOL_MAX_SIZE is invalid")?,
        None => DEFAULT_POOL_MAX_SIZE,
    };
    if pool_max_size == 0 {
        bail!("DATABASE_POOL_MAX_SIZE must be positive");
    }

    let database = Database {
        url: lookup("DATABASE_URL").context("DATABASE_URL is invalid")?,
        pool_max_size,
    };

    let expire_policy = match lookup("SUBSCRIPTION_EXPIRE_CANCELED") {
        Some(value) => value
            .parse::<ExpirePolicy>()
            .context("SUBSCRIPTION_EXPIRE_CANCELED is invalid")?,
        None => ExpirePolicy::default(),
    };

    Ok(DotEnvyConfig {
        stage,
        database,
        lifecycle: Lifecycle { expire_policy },
    })
}
