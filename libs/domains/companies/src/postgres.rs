use async_trait::async_trait;
use database::{clock, postgres::unique_violation};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::{
    entity,
    error::{CompanyError, CompanyResult},
    models::{Company, CreateCompany, UpdateCompany},
    repository::{CompanyRepository, duplicate_reference},
};

/// PostgreSQL implementation of CompanyRepository
#[derive(Debug, Clone)]
pub struct PgCompanyRepository {
    db: DatabaseConnection,
}

impl PgCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn write_error(err: DbErr, reference_id: Option<&str>) -> CompanyError {
    match unique_violation(&err) {
        Some(detail) => {
            tracing::debug!(%detail, "Unique constraint rejected company write");
            duplicate_reference(reference_id)
        }
        None => err.into(),
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn create(&self, input: CreateCompany) -> CompanyResult<Company> {
        let reference_id = input.reference_id.clone();
        let active_model = input.into_active_model(clock::now())?;

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, reference_id.as_deref()))?;

        tracing::info!(company_id = model.id, "Created company");
        Company::try_from(model)
    }

    async fn get_by_id(&self, id: i64) -> CompanyResult<Option<Company>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        model.map(Company::try_from).transpose()
    }

    async fn list(&self) -> CompanyResult<Vec<Company>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(Company::try_from).collect()
    }

    async fn update(&self, id: i64, input: UpdateCompany) -> CompanyResult<Company> {
        let txn = self.db.begin().await?;

        // Row lock serializes concurrent updates of the same company
        let model = entity::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(CompanyError::NotFound(id))?;

        let mut company = Company::try_from(model)?;
        company.apply_update(input);
        company.updated_at = clock::after(company.updated_at);
        let model = company.into_model()?;
        let reference_id = model.reference_id.clone();

        let updated = entity::ActiveModel::from(model)
            .reset_all()
            .update(&txn)
            .await
            .map_err(|e| write_error(e, reference_id.as_deref()))?;

        txn.commit().await?;

        tracing::info!(company_id = id, "Updated company");
        Company::try_from(updated)
    }

    async fn delete(&self, id: i64) -> CompanyResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(company_id = id, "Deleted company");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn row(id: i64) -> entity::Model {
        let t0 = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        entity::Model {
            id,
            reference_id: Some(format!("REF-{}", id)),
            name: "Acme".to_string(),
            contact_person: None,
            work: "web\u{1f}".to_string(),
            status: None,
            socials: String::new(),
            drive_link: None,
            created_at: t0,
            updated_at: t0,
            last_updated_by: None,
        }
    }

    #[tokio::test]
    async fn test_list_decodes_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1), row(2)]])
            .into_connection();
        let repo = PgCompanyRepository::new(db);

        let companies = repo.list().await.unwrap();

        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].work, vec!["web"]);
        assert!(companies[1].socials.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_company_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgCompanyRepository::new(db);

        assert_eq!(repo.get_by_id(9).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgCompanyRepository::new(db);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_oversized_create_never_reaches_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PgCompanyRepository::new(db);

        let err = repo
            .create(CreateCompany {
                name: "Acme".to_string(),
                work: vec!["w".repeat(1000)],
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CompanyError::CapacityExceeded { field: "work", .. }));
    }
}
