use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "CRM API",
        version = "0.1.0",
        description = "API for managing CRM companies and tasks"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/companies", api = domain_companies::handlers::ApiDoc),
        (path = "/v1/tasks", api = domain_tasks::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&str> = spec.paths.paths.keys().map(String::as_str).collect();

        for resource in ["companies", "tasks"] {
            for route in ["all", "create", "{id}", "update/{id}", "delete/{id}"] {
                let path = format!("/v1/{}/{}", resource, route);
                assert!(paths.contains(&path.as_str()), "missing {}", path);
            }
        }
    }
}
