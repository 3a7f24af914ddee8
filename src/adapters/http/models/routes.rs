//! HTTP routes for decision model endpoints.

use axum::{
    routing::{get, post, MethodRouter},
    Router,
};

use super::handlers::{
    compute_ranking, create_model, delete_model, export_model, get_model, import_model,
    list_models, submit_expert_input, ModelAppState,
};

/// Creates the model router. Every path also answers with a trailing slash.
pub fn model_routes(state: ModelAppState) -> Router {
    let routes: Vec<(&str, MethodRouter<ModelAppState>)> = vec![
        ("/models", get(list_models).post(create_model)),
        ("/models/import", post(import_model)),
        ("/models/:id", get(get_model).delete(delete_model)),
        ("/models/:id/experts", post(submit_expert_input)),
        ("/models/:id/export", get(export_model)),
        ("/models/:id/rankings", get(compute_ranking)),
    ];

    routes
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            router
                .route(path, method_router.clone())
                .route(&format!("{}/", path), method_router)
        })
        .with_state(state)
}
