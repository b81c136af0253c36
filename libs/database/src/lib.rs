//! Database library: PostgreSQL connection management for the CRM services.
//!
//! # Features
//!
//! - `postgres` (default) - SeaORM connection pool, migrations, health checks
//! - `config` - `core_config::FromEnv` support for [`postgres::PostgresConfig`]
//!   and [`common::RetryConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::{common::RetryConfig, postgres};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(config, RetryConfig::default()).await?;
//! postgres::run_migrations::<Migrator>(&db, "crm_api").await?;
//! ```

pub mod clock;
pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
