use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::{
    application::{
        interfaces::clock::SystemClock, mappers::CreateSubscriptionMapper,
        usecases::subscriptions::SubscriptionUseCase, validators::CreateSubscriptionValidator,
    },
    config::{config_loader, config_model::DotEnvyConfig},
    infrastructure::postgres::{
        postgres_connection, repositories::subscriptions::SubscriptionPostgres,
    },
    observability,
};

pub type PostgresSubscriptionUseCase = SubscriptionUseCase<SubscriptionPostgres, SystemClock>;

/// Loads the environment, installs tracing, and wires the use case to PostgreSQL.
pub fn init(component: &str) -> Result<PostgresSubscriptionUseCase> {
    let dotenvy_env = config_loader::load()?;
    observability::init_observability(component)?;
    info!(stage = %dotenvy_env.stage, "ENV has been loaded");

    postgres_use_case(&dotenvy_env)
}

pub fn postgres_use_case(dotenvy_env: &DotEnvyConfig) -> Result<PostgresSubscriptionUseCase> {
    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database)?;
    info!(
        pool_max_size = dotenvy_env.database.pool_max_size,
        "Postgres connection has been established"
    );

    Ok(SubscriptionUseCase::new(
        Arc::new(SubscriptionPostgres::new(Arc::new(postgres_pool))),
        CreateSubscriptionValidator::new(),
        CreateSubscriptionMapper::new(),
        Arc::new(SystemClock),
        dotenvy_env.lifecycle.expire_policy,
    ))
}
