use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CompanyError, CompanyResult, Violation};
use crate::models::{CompanyDto, CreateCompany, UpdateCompany};
use crate::repository::CompanyRepository;

/// Blank or empty values for a required field break the record's constraints
fn require(field: &'static str, value: Option<&str>) -> CompanyResult<()> {
    match value {
        Some(value) if value.trim().is_empty() => {
            Err(CompanyError::ConstraintViolation(Violation::Required(field)))
        }
        _ => Ok(()),
    }
}

/// Service layer mapping company DTOs onto the repository
#[derive(Clone)]
pub struct CompanyService<R: CompanyRepository> {
    repository: Arc<R>,
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every company in ascending id order
    #[instrument(skip(self))]
    pub async fn list_companies(&self) -> CompanyResult<Vec<CompanyDto>> {
        let companies = self.repository.list().await?;
        Ok(companies.into_iter().map(CompanyDto::from).collect())
    }

    /// Get a company by ID
    #[instrument(skip(self))]
    pub async fn get_company(&self, id: i64) -> CompanyResult<CompanyDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(CompanyDto::from)
            .ok_or(CompanyError::NotFound(id))
    }

    /// Create a new company
    #[instrument(skip(self, input), fields(reference_id = ?input.reference_id))]
    pub async fn create_company(&self, input: CreateCompany) -> CompanyResult<CompanyDto> {
        require("name", Some(input.name.as_str()))?;
        input
            .validate()
            .map_err(|e| CompanyError::Validation(e.to_string()))?;

        let company = self.repository.create(input).await?;
        Ok(company.into())
    }

    /// Update a company, overwriting only the supplied fields
    #[instrument(skip(self, input))]
    pub async fn update_company(&self, id: i64, input: UpdateCompany) -> CompanyResult<CompanyDto> {
        require("name", input.name.as_deref())?;
        input
            .validate()
            .map_err(|e| CompanyError::Validation(e.to_string()))?;

        let company = self.repository.update(id, input).await?;
        Ok(company.into())
    }

    /// Delete a company
    #[instrument(skip(self))]
    pub async fn delete_company(&self, id: i64) -> CompanyResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(CompanyError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Company;
    use crate::repository::MockCompanyRepository;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn stored(id: i64) -> Company {
        let t0 = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Company {
            id,
            reference_id: None,
            name: "Acme".to_string(),
            contact_person: None,
            work: vec!["web".to_string(), "design".to_string()],
            status: None,
            socials: BTreeMap::from([("x".to_string(), "acme".to_string())]),
            drive_link: None,
            created_at: t0,
            updated_at: t0,
            last_updated_by: None,
        }
    }

    #[tokio::test]
    async fn test_get_missing_company_is_not_found() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(7))
            .returning(|_| Ok(None));

        let service = CompanyService::new(mock_repo);
        let err = service.get_company(7).await.unwrap_err();

        assert!(matches!(err, CompanyError::NotFound(7)));
    }

    #[tokio::test]
    async fn test_create_maps_to_dto() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Ok(stored(1)));

        let service = CompanyService::new(mock_repo);
        let dto = service
            .create_company(CreateCompany {
                name: "Acme".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(dto.id, 1);
        assert_eq!(dto.created_at, dto.updated_at);
        assert_eq!(dto.work, vec!["web", "design"]);
    }

    #[tokio::test]
    async fn test_create_without_name_is_constraint_violation() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo.expect_create().never();

        let service = CompanyService::new(mock_repo);
        let err = service
            .create_company(CreateCompany::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CompanyError::ConstraintViolation(Violation::Required("name"))
        ));
    }

    #[tokio::test]
    async fn test_create_with_blank_name_is_constraint_violation() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo.expect_create().never();

        let service = CompanyService::new(mock_repo);
        let err = service
            .create_company(CreateCompany {
                name: "   ".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CompanyError::ConstraintViolation(Violation::Required("name"))
        ));
    }

    #[tokio::test]
    async fn test_oversized_name_is_validation_error() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo.expect_create().never();

        let service = CompanyService::new(mock_repo);
        let err = service
            .create_company(CreateCompany {
                name: "a".repeat(256),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CompanyError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_clearing_name_is_constraint_violation() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo.expect_update().never();

        let service = CompanyService::new(mock_repo);
        let err = service
            .update_company(
                1,
                UpdateCompany {
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CompanyError::ConstraintViolation(Violation::Required("name"))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_company_is_not_found() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo
            .expect_delete()
            .with(mockall::predicate::eq(5))
            .returning(|_| Ok(false));

        let service = CompanyService::new(mock_repo);
        let err = service.delete_company(5).await.unwrap_err();

        assert!(matches!(err, CompanyError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_list_preserves_repository_order() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Ok(vec![stored(1), stored(2)]));

        let service = CompanyService::new(mock_repo);
        let ids: Vec<i64> = service
            .list_companies()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(ids, vec![1, 2]);
    }
}
