use anyhow::{Context, Result};
use diesel::{
    Connection, PgConnection,
    connection::CacheSize,
    r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool},
};

use crate::config::config_model::Database;

pub type SubscriptionPool = Pool<ConnectionManager<PgConnection>>;

/// Turns the prepared-statement cache off on checkout; transaction-mode
/// poolers (pgbouncer, supavisor) reject named statements.
#[derive(Debug, Clone, Copy)]
struct StatementCacheOff;

impl CustomizeConnection<PgConnection, R2d2Error> for StatementCacheOff {
    fn on_acquire(&self, conn: &mut PgConnection) -> std::result::Result<(), R2d2Error> {
        conn.set_prepared_statement_cache_size(CacheSize::Disabled);
        Ok(())
    }
}

pub fn establish_connection(database: &Database) -> Result<SubscriptionPool> {
    Pool::builder()
        .max_size(database.pool_max_size)
        .connection_customizer(Box::new(StatementCacheOff))
        .build(ConnectionManager::<PgConnection>::new(database.url.as_str()))
        .with_context(|| {
            format!(
                "subscription pool could not connect (max_size {})",
                database.pool_max_size
            )
        })
}
