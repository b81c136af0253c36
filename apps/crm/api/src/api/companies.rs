use axum::Router;
use domain_companies::{CompanyService, PgCompanyRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgCompanyRepository::new(state.db.clone());
    let service = CompanyService::new(repository);
    handlers::router(service)
}
