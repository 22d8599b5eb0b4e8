//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::extract::{extract_resume, UploadedResume};
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

/// Multipart field carrying the resume document.
const FILE_FIELD: &str = "file";

/// POST /api/analyze/resume
///
/// Extracts the uploaded resume, loads the job catalog and returns one
/// analysis per job, in catalog order. Any model failure fails the request.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<AnalysisResult>>, AppError> {
    let run_id = Uuid::new_v4();
    let upload = read_file_field(&mut multipart).await?;

    async move {
        info!(
            "Resume received: file={:?} content_type={:?} bytes={}",
            upload.file_name,
            upload.content_type,
            upload.data.len()
        );

        let resume = extract_resume(upload).await?;
        let jobs = state.catalog.list_jobs().await?;
        let results = state.analyzer.analyze(&resume, &jobs).await?;

        Ok::<_, AppError>(Json(results))
    }
    .instrument(info_span!("analyze_resume", %run_id))
    .await
}

async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedResume, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read '{FILE_FIELD}': {e}")))?;

        if data.is_empty() {
            return Err(AppError::Validation(format!("'{FILE_FIELD}' is empty")));
        }

        return Ok(UploadedResume {
            file_name,
            content_type,
            data,
        });
    }

    Err(AppError::Validation(format!(
        "Missing required multipart field '{FILE_FIELD}'"
    )))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::analysis::invoker::ModelInvoker;
    use crate::analysis::orchestrator::Analyzer;
    use crate::catalog::JobCatalog;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::llm_client::LlmError;
    use crate::models::job::JobPosting;
    use crate::routes::build_router;
    use crate::state::AppState;

    const BOUNDARY: &str = "X-RESUME-BOUNDARY";

    struct FixedCatalog(Vec<JobPosting>);

    #[async_trait]
    impl JobCatalog for FixedCatalog {
        async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
            Ok(self.0.clone())
        }
    }

    struct QueuedInvoker(Mutex<VecDeque<Result<Option<String>, LlmError>>>);

    #[async_trait]
    impl ModelInvoker for QueuedInvoker {
        async fn invoke(&self, _prompt: &str) -> Result<Option<String>, LlmError> {
            self.0
                .lock()
                .unwrap()
                .pop_front()
                .expect("invoked more times than scripted")
        }
    }

    fn job(id: i64, title: &str) -> JobPosting {
        JobPosting {
            id,
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            employment_type: "Full-time".to_string(),
            experience_level: "3+ years".to_string(),
            description: "Build the platform.".to_string(),
            required_skills: vec!["Rust".to_string(), "SQL".to_string()],
        }
    }

    fn app(jobs: Vec<JobPosting>, responses: Vec<Result<Option<String>, LlmError>>) -> Router {
        let invoker = Arc::new(QueuedInvoker(Mutex::new(responses.into())));
        build_router(AppState {
            catalog: Arc::new(FixedCatalog(jobs)),
            analyzer: Analyzer::new(invoker),
            config: Config {
                database_url: "postgres://unused".to_string(),
                anthropic_api_key: "unused".to_string(),
                anthropic_api_url: "http://127.0.0.1:9/unused".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                max_upload_bytes: 1024 * 1024,
            },
        })
    }

    fn multipart_request(field: &str, file_name: &str, content_type: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\
             \r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/analyze/resume")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_returns_one_result_per_job_in_catalog_order() {
        let app = app(
            vec![job(1, "Backend Engineer"), job(2, "Data Engineer")],
            vec![
                Ok(Some(
                    r#"Here you go: {"title": "Backend Engineer", "matchScore": {"overall": 81.0}}"#
                        .to_string(),
                )),
                Ok(Some("not json at all".to_string())),
            ],
        );

        let (status, body) = send(
            app,
            multipart_request("file", "cv.txt", "text/plain", "Rust engineer, jane@example.com"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["title"], "Backend Engineer");
        assert_eq!(results[0]["matchScore"]["overall"], 81.0);
        assert_eq!(results[0]["growthAreas"], "");
        assert_eq!(results[1]["title"], "");
        assert_eq!(results[1]["summary"], "not json at all");
    }

    #[tokio::test]
    async fn test_model_failure_fails_whole_request() {
        let app = app(
            vec![job(1, "Backend Engineer"), job(2, "Data Engineer")],
            vec![
                Ok(Some(r#"{"title": "Backend Engineer"}"#.to_string())),
                Err(LlmError::Api {
                    status: 500,
                    message: "boom".to_string(),
                }),
            ],
        );

        let (status, body) =
            send(app, multipart_request("file", "cv.txt", "text/plain", "Rust engineer")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert!(!body.is_array());
    }

    #[tokio::test]
    async fn test_missing_file_field_is_bad_request() {
        let app = app(vec![job(1, "Backend Engineer")], vec![]);

        let (status, body) =
            send(app, multipart_request("resume", "cv.txt", "text/plain", "Rust engineer")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unsupported_document_is_generic_failure() {
        let app = app(vec![job(1, "Backend Engineer")], vec![]);

        let (status, body) = send(
            app,
            multipart_request("file", "cv.png", "image/png", "binary-ish"),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "EXTRACTION_ERROR");
    }
}
