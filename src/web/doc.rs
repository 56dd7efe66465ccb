use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub struct CookieAuthModifier;

impl Modify for CookieAuthModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(schema) = openapi.components.as_mut() {
            schema.add_security_scheme(
                "cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "SID",
                    "JWT identifying the caller's learning session",
                ))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::routes::session::session_start_handler,
        crate::web::routes::session::session_get_handler,
        crate::web::routes::session::session_delete_handler,
        crate::web::routes::diagnostic::diagnostic_get_handler,
        crate::web::routes::diagnostic::diagnostic_submit_handler,
        crate::web::routes::path::path_get_handler,
        crate::web::routes::path::module_get_handler,
        crate::web::routes::path::module_complete_handler,
        crate::web::routes::payment::plans_list_handler,
        crate::web::routes::payment::payment_get_handler,
        crate::web::routes::payment::payment_confirm_handler,
        crate::web::routes::project::project_get_handler,
        crate::web::routes::project::project_submit_handler,
        crate::web::routes::project::project_review_handler,
        crate::web::routes::project::project_complete_handler,
    ),
    modifiers(&CookieAuthModifier),
    tags(
        (name = "session", description = "Anonymous learning sessions"),
        (name = "diagnostic", description = "Diagnostic questionnaire"),
        (name = "path", description = "Personalized learning path"),
        (name = "payment", description = "Premium plans and payment confirmation"),
        (name = "project", description = "Final certification project"),
    ),
)]
pub struct ApiDoc;
