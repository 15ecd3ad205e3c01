use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CustomerDoc {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub balance: f64,
    pub account_type: String,
}

#[derive(ToSchema)]
pub struct CustomerInputDoc {
    pub name: String,
    pub email: String,
    pub balance: f64,
    pub account_type: String,
}

#[derive(ToSchema)]
pub struct MessageResponseDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list_customers,
        crate::routes::customers::create_customer,
        crate::routes::customers::get_customer,
        crate::routes::customers::update_customer,
        crate::routes::customers::delete_customer,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            CustomerInputDoc,
            MessageResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_customer_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/customers"));
        assert!(paths.iter().any(|p| p.as_str() == "/customers/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
