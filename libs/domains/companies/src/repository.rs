use async_trait::async_trait;
use database::clock;
use sea_orm::ActiveValue::Set;
use sea_orm::TryIntoModel;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::entity;
use crate::error::{CompanyError, CompanyResult, Violation};
use crate::models::{Company, CreateCompany, UpdateCompany};

/// Repository trait for Company persistence
///
/// Implementations own id assignment and the `created_at` / `updated_at`
/// stamps. Every write is atomic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a new company, failing on a duplicate reference id
    async fn create(&self, input: CreateCompany) -> CompanyResult<Company>;

    /// Get a company by ID
    async fn get_by_id(&self, id: i64) -> CompanyResult<Option<Company>>;

    /// All companies in ascending id order
    async fn list(&self) -> CompanyResult<Vec<Company>>;

    /// Apply a partial update and refresh `updated_at`
    async fn update(&self, id: i64, input: UpdateCompany) -> CompanyResult<Company>;

    /// Delete a company by ID, returning whether it existed
    async fn delete(&self, id: i64) -> CompanyResult<bool>;
}

pub(crate) fn duplicate_reference(reference_id: Option<&str>) -> CompanyError {
    CompanyError::ConstraintViolation(Violation::Duplicate(format!(
        "Company with reference id '{}' already exists",
        reference_id.unwrap_or_default()
    )))
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, entity::Model>,
    last_id: i64,
}

impl Table {
    fn reference_taken(&self, reference_id: Option<&str>, except: Option<i64>) -> bool {
        let Some(reference_id) = reference_id else {
            return false;
        };
        self.rows.values().any(|row| {
            Some(row.id) != except && row.reference_id.as_deref() == Some(reference_id)
        })
    }
}

/// In-memory implementation of CompanyRepository (for development/testing)
///
/// Rows are kept in their encoded form so column capacities apply exactly as
/// they do in Postgres.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCompanyRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, input: CreateCompany) -> CompanyResult<Company> {
        let reference_id = input.reference_id.clone();
        let mut active = input.into_active_model(clock::now())?;
        let mut table = self.table.write().await;

        if table.reference_taken(reference_id.as_deref(), None) {
            return Err(duplicate_reference(reference_id.as_deref()));
        }

        let id = table.last_id + 1;
        active.id = Set(id);
        let model = active.try_into_model()?;

        table.last_id = id;
        table.rows.insert(id, model.clone());

        tracing::info!(company_id = id, "Created company");
        Company::try_from(model)
    }

    async fn get_by_id(&self, id: i64) -> CompanyResult<Option<Company>> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().map(Company::try_from).transpose()
    }

    async fn list(&self) -> CompanyResult<Vec<Company>> {
        let table = self.table.read().await;
        table.rows.values().cloned().map(Company::try_from).collect()
    }

    async fn update(&self, id: i64, input: UpdateCompany) -> CompanyResult<Company> {
        let mut table = self.table.write().await;

        let row = table
            .rows
            .get(&id)
            .cloned()
            .ok_or(CompanyError::NotFound(id))?;

        let mut company = Company::try_from(row)?;
        company.apply_update(input);
        company.updated_at = clock::after(company.updated_at);
        let model = company.into_model()?;

        if table.reference_taken(model.reference_id.as_deref(), Some(id)) {
            return Err(duplicate_reference(model.reference_id.as_deref()));
        }

        table.rows.insert(id, model.clone());

        tracing::info!(company_id = id, "Updated company");
        Company::try_from(model)
    }

    async fn delete(&self, id: i64) -> CompanyResult<bool> {
        let mut table = self.table.write().await;

        if table.rows.remove(&id).is_some() {
            tracing::info!(company_id = id, "Deleted company");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
