//! Companies Domain
//!
//! CRUD for CRM companies. The `work` list and the `socials` map are stored
//! as delimited strings in fixed-width columns (see `column_codec`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, OpenAPI
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, DTO mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Ids, timestamps, constraints (in-memory + Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← `companies` row, encoded collections
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_companies::{
//!     handlers,
//!     repository::InMemoryCompanyRepository,
//!     service::CompanyService,
//! };
//!
//! let repository = InMemoryCompanyRepository::new();
//! let service = CompanyService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use entity::{SOCIALS_CAPACITY, WORK_CAPACITY};
pub use error::{CompanyError, CompanyResult, Violation};
pub use models::{Company, CompanyDto, CreateCompany, UpdateCompany};
pub use postgres::PgCompanyRepository;
pub use repository::{CompanyRepository, InMemoryCompanyRepository};
pub use service::CompanyService;
