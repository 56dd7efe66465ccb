use crate::web::{AppState, doc::ApiDoc};
use axum::Router;
use tower_cookies::CookieManagerLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod diagnostic;
pub mod path;
pub mod payment;
pub mod project;
pub mod session;

pub fn build_app(state: AppState) -> Router {
    let config = state.config();

    let mut router = Router::new()
        .merge(session::routes(state.clone()))
        .merge(diagnostic::routes(state.clone()))
        .merge(path::routes(state.clone()))
        .merge(payment::routes(state.clone()))
        .merge(project::routes(state));

    if config.app().docs() {
        let openapi = ApiDoc::openapi();

        router = router
            .merge(
                SwaggerUi::new("/api/v1/docs")
                    .url("/api-doc/openapi.json", openapi),
            );
    }

    router
        .layer(CookieManagerLayer::new())
        .layer(CorsLayer::very_permissive())
}
