//! HTTP handlers for decision model endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::model::{
    ComputeRankingHandler, ComputeRankingQuery, CreateModelCommand, CreateModelHandler,
    DeleteModelCommand, DeleteModelHandler, ExportModelHandler, ExportModelQuery,
    GetModelHandler, GetModelQuery, ImportModelCommand, ImportModelHandler, ListModelsHandler,
    SubmitExpertInputCommand, SubmitExpertInputHandler,
};
use crate::domain::decision::{ExpertInput, ModelError};
use crate::domain::foundation::{ErrorCode, ModelId};
use crate::ports::DecisionModelRepository;

use super::dto::{ApiResponse, CreateModelRequest, ErrorResponse, HealthResponse};

/// Multipart field carrying the uploaded model document.
pub const IMPORT_FIELD: &str = "file";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ModelAppState {
    create_handler: Arc<CreateModelHandler>,
    get_handler: Arc<GetModelHandler>,
    list_handler: Arc<ListModelsHandler>,
    delete_handler: Arc<DeleteModelHandler>,
    submit_handler: Arc<SubmitExpertInputHandler>,
    import_handler: Arc<ImportModelHandler>,
    export_handler: Arc<ExportModelHandler>,
    ranking_handler: Arc<ComputeRankingHandler>,
}

impl ModelAppState {
    /// Wires every handler against one shared repository.
    pub fn new(repository: Arc<dyn DecisionModelRepository>) -> Self {
        Self {
            create_handler: Arc::new(CreateModelHandler::new(repository.clone())),
            get_handler: Arc::new(GetModelHandler::new(repository.clone())),
            list_handler: Arc::new(ListModelsHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteModelHandler::new(repository.clone())),
            submit_handler: Arc::new(SubmitExpertInputHandler::new(repository.clone())),
            import_handler: Arc::new(ImportModelHandler::new(repository.clone())),
            export_handler: Arc::new(ExportModelHandler::new(repository.clone())),
            ranking_handler: Arc::new(ComputeRankingHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/models - List every model
pub async fn list_models(State(state): State<ModelAppState>) -> Response {
    match state.list_handler.handle().await {
        Ok(models) => (StatusCode::OK, Json(ApiResponse::ok(models))).into_response(),
        Err(e) => handle_model_error(e),
    }
}

/// POST /api/v1/models - Create a model from names
pub async fn create_model(
    State(state): State<ModelAppState>,
    payload: Result<Json<CreateModelRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection.status(), rejection.body_text()),
    };

    let cmd = CreateModelCommand {
        name: req.name,
        alternatives: req.alternatives,
        criteria: req.criteria,
    };

    match state.create_handler.handle(cmd).await {
        Ok(model) => (StatusCode::CREATED, Json(ApiResponse::ok(model))).into_response(),
        Err(e) => handle_model_error(e),
    }
}

/// GET /api/v1/models/:id - Get one model
pub async fn get_model(
    State(state): State<ModelAppState>,
    Path(model_id): Path<String>,
) -> Response {
    let model_id = match parse_model_id(&model_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_handler.handle(GetModelQuery { model_id }).await {
        Ok(model) => (StatusCode::OK, Json(ApiResponse::ok(model))).into_response(),
        Err(e) => handle_model_error(e),
    }
}

/// DELETE /api/v1/models/:id - Delete a model, echoing it back
pub async fn delete_model(
    State(state): State<ModelAppState>,
    Path(model_id): Path<String>,
) -> Response {
    let model_id = match parse_model_id(&model_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.delete_handler.handle(DeleteModelCommand { model_id }).await {
        Ok(model) => (StatusCode::OK, Json(ApiResponse::ok(model))).into_response(),
        Err(e) => handle_model_error(e),
    }
}

/// POST /api/v1/models/:id/experts - Submit one expert's weights and scores
pub async fn submit_expert_input(
    State(state): State<ModelAppState>,
    Path(model_id): Path<String>,
    payload: Result<Json<ExpertInput>, JsonRejection>,
) -> Response {
    let model_id = match parse_model_id(&model_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(input) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection.status(), rejection.body_text()),
    };

    match state
        .submit_handler
        .handle(SubmitExpertInputCommand { model_id, input })
        .await
    {
        Ok(model) => (StatusCode::OK, Json(ApiResponse::ok(model))).into_response(),
        Err(e) => handle_model_error(e),
    }
}

/// POST /api/v1/models/import - Upload a model document as multipart `file`
pub async fn import_model(
    State(state): State<ModelAppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => return rejection_response(rejection.status(), rejection.body_text()),
    };

    let document = match read_field(&mut multipart, IMPORT_FIELD).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "Missing multipart field '{}'",
                    IMPORT_FIELD
                ))),
            )
                .into_response()
        }
        Err(e) => return rejection_response(e.status(), e.body_text()),
    };

    match state
        .import_handler
        .handle(ImportModelCommand { document })
        .await
    {
        Ok(model) => (StatusCode::OK, Json(ApiResponse::ok(model))).into_response(),
        Err(e) => handle_model_error(e),
    }
}

/// GET /api/v1/models/:id/export - Full model document as an attachment
pub async fn export_model(
    State(state): State<ModelAppState>,
    Path(model_id): Path<String>,
) -> Response {
    let model_id = match parse_model_id(&model_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.export_handler.handle(ExportModelQuery { model_id }).await {
        Ok(export) => (
            StatusCode::OK,
            [(
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name),
            )],
            Json(ApiResponse::ok(export.model)),
        )
            .into_response(),
        Err(e) => handle_model_error(e),
    }
}

/// GET /api/v1/models/:id/rankings - Run TOPSIS over the current inputs
pub async fn compute_ranking(
    State(state): State<ModelAppState>,
    Path(model_id): Path<String>,
) -> Response {
    let model_id = match parse_model_id(&model_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .ranking_handler
        .handle(ComputeRankingQuery { model_id })
        .await
    {
        Ok(ranking) => (StatusCode::OK, Json(ApiResponse::ok(ranking))).into_response(),
        Err(e) => handle_model_error(e),
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Response {
    let body = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    };
    (StatusCode::OK, Json(ApiResponse::ok(body))).into_response()
}

/// Fallback for unmatched paths, so clients always get the envelope.
pub async fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("Route not found")),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_model_id(raw: &str) -> Result<ModelId, Response> {
    raw.parse::<ModelId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid model ID")),
        )
            .into_response()
    })
}

async fn read_field(
    multipart: &mut Multipart,
    name: &str,
) -> Result<Option<Vec<u8>>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(name) {
            return Ok(Some(field.bytes().await?.to_vec()));
        }
    }
    Ok(None)
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Extractor rejections keep axum's status; the body becomes the envelope.
fn rejection_response(status: StatusCode, message: String) -> Response {
    let code = if status == StatusCode::UNPROCESSABLE_ENTITY {
        ErrorCode::ValidationFailed
    } else {
        ErrorCode::BadRequest
    };
    (status, Json(ErrorResponse::new(status, code, message))).into_response()
}

fn handle_model_error(error: ModelError) -> Response {
    let status = match &error {
        ModelError::NotFound(_) => StatusCode::NOT_FOUND,
        ModelError::AlreadyExists(_) | ModelError::InvalidDocument(_) => StatusCode::BAD_REQUEST,
        ModelError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ModelError::Ranking(_) | ModelError::Infrastructure(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse::new(status, error.code(), error.to_string())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::RankingError;
    use crate::domain::foundation::{AlternativeId, ExpertId, ValidationError};

    #[test]
    fn model_not_found_maps_to_404() {
        let error = ModelError::NotFound(ModelId::new("m1").unwrap());
        let response = handle_model_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_import_maps_to_400() {
        let error = ModelError::AlreadyExists(ModelId::new("m1").unwrap());
        let response = handle_model_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_failure_maps_to_422() {
        let error = ModelError::Validation(ValidationError::too_few_entries("alternatives", 2, 1));
        let response = handle_model_error(error);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn ranking_failure_maps_to_500() {
        let error = ModelError::Ranking(RankingError::UnknownAlternative {
            expert_id: ExpertId::new("e1").unwrap(),
            alternative_id: AlternativeId::new("ghost").unwrap(),
        });
        let response = handle_model_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn blank_model_id_is_rejected() {
        let response = parse_model_id("  ").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
