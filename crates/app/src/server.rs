use crate::error::ApiError;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Json, Router,
};
use codedoc_core::{
    solution, DocCoordinator, DotnetAnalyzer, OllamaClient, RawDocument, SolutionAnalyzer,
    SolutionError,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

const MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024;

struct AppState {
    analyzer: DotnetAnalyzer,
    coordinator: DocCoordinator<OllamaClient>,
}

pub async fn run(
    bind: &str,
    analyzer: DotnetAnalyzer,
    coordinator: DocCoordinator<OllamaClient>,
) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        analyzer,
        coordinator,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/analyze", post(handle_analyze))
        .route("/health", get(handle_health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(state);

    info!("listening on http://{bind}");
    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct AnalyzeResponse {
    markdown: String,
}

/// `POST /api/analyze` — multipart body with a required `solution_zip` field
/// and any number of `extra_docs` fields.
async fn handle_analyze(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let mut archive: Option<(String, Vec<u8>)> = None;
    let mut uploads: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| ApiError::BadRequest(format!("malformed multipart body: {error}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|error| ApiError::BadRequest(format!("unreadable upload: {error}")))?;

        match field_name.as_str() {
            "solution_zip" => archive = Some((file_name, data.to_vec())),
            "extra_docs" => uploads.push((file_name, data.to_vec())),
            _ => {}
        }
    }

    let (archive_name, archive_bytes) =
        archive.ok_or_else(|| ApiError::BadRequest("missing solution_zip field".to_string()))?;

    let workdir = tempfile::tempdir()
        .map_err(|error| ApiError::Internal(format!("workdir setup failed: {error}")))?;

    tokio::task::block_in_place(|| solution::unpack_archive(&archive_bytes, workdir.path()))?;

    let solution_path = solution::find_solution_file(workdir.path()).ok_or_else(|| {
        SolutionError::MissingSolution(format!("zip archive {archive_name:?} has no .sln"))
    })?;

    let fingerprint = solution::fingerprint_archive(&archive_bytes, &solution_path);
    info!(
        request_id = %request_id,
        archive = %archive_name,
        solution = %fingerprint.solution_path,
        checksum = %fingerprint.archive_checksum,
        "solution unpacked"
    );

    let records = state.analyzer.analyze(&solution_path, workdir.path()).await?;

    let mut documents = Vec::new();
    for (name, bytes) in uploads {
        match RawDocument::from_upload(&name, &bytes) {
            Some(document) => documents.push(document),
            None => warn!(
                request_id = %request_id,
                file = %name,
                "skipping unsupported document type"
            ),
        }
    }

    let outcome = state
        .coordinator
        .generate_documentation(&records, &documents)
        .await?;

    info!(
        request_id = %request_id,
        facts = records.len(),
        documents = documents.len(),
        candidate_segments = outcome.candidate_segments,
        selected_segments = outcome.selected_segments,
        "documentation generated"
    );

    Ok(Json(AnalyzeResponse {
        markdown: outcome.markdown,
    }))
}
