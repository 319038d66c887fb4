use anyhow::Context;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::screening::{JobRecord, ResumeRecord, ScreeningRecord};
use crate::screening::models::{CandidateProfile, Category, JobRequirement};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Jobs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub department: Option<String>,
    pub experience_required: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateJobResponse {
    pub job_id: Uuid,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<CreateJobResponse>), AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation("job_description is required".to_string()));
    }

    let requirement = JobRequirement::new(
        req.job_description,
        &req.skills,
        req.department,
        req.experience_required.as_deref().unwrap_or("Any"),
    );
    if requirement.required_skills().is_empty() {
        return Err(AppError::Validation("At least one skill is required".to_string()));
    }

    let record = JobRecord {
        id: Uuid::new_v4(),
        requirement,
        created_at: Utc::now(),
    };
    let job_id = state.repository.create_job(record).await?;
    Ok((StatusCode::CREATED, Json(CreateJobResponse { job_id })))
}

// ────────────────────────────────────────────────────────────────────────────
// Resumes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeInput {
    pub filename: String,
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateResumesRequest {
    pub resumes: Vec<ResumeInput>,
}

#[derive(Debug, Serialize)]
pub struct CreateResumesResponse {
    pub resume_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ResumeContentResponse {
    pub content: String,
}

/// POST /api/v1/resumes
pub async fn handle_create_resumes(
    State(state): State<AppState>,
    Json(req): Json<CreateResumesRequest>,
) -> Result<Json<CreateResumesResponse>, AppError> {
    if req.resumes.is_empty() {
        return Err(AppError::Validation("No resumes provided".to_string()));
    }

    let mut resume_ids = Vec::with_capacity(req.resumes.len());
    for input in req.resumes {
        resume_ids.push(store_resume(&state, input.filename, input.raw_text).await?);
    }
    info!("Stored {} resumes", resume_ids.len());
    Ok(Json(CreateResumesResponse { resume_ids }))
}

/// POST /api/v1/resumes/upload
/// Multipart field `files`, repeated. Nothing is written to disk.
pub async fn handle_upload_resumes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CreateResumesResponse>, AppError> {
    let mut resume_ids = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("files") {
            continue;
        }
        let filename = match field.file_name() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => continue,
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read '{filename}': {e}")))?;

        let raw_text = extract_text(&filename, data).await?;
        resume_ids.push(store_resume(&state, filename, raw_text).await?);
    }

    if resume_ids.is_empty() {
        return Err(AppError::Validation("No files uploaded".to_string()));
    }
    info!("Uploaded {} resumes", resume_ids.len());
    Ok(Json(CreateResumesResponse { resume_ids }))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeContentResponse>, AppError> {
    let resume = state
        .repository
        .get_resume(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(ResumeContentResponse {
        content: resume.profile.raw_text().to_string(),
    }))
}

async fn store_resume(state: &AppState, filename: String, raw_text: String) -> Result<Uuid, AppError> {
    let record = ResumeRecord {
        id: Uuid::new_v4(),
        filename,
        profile: CandidateProfile::from_raw_text(raw_text),
        created_at: Utc::now(),
    };
    state.repository.create_resume(record).await
}

/// PDFs go through `pdf-extract` on the blocking pool; everything else is
/// treated as UTF-8 text.
async fn extract_text(filename: &str, data: Bytes) -> Result<String, AppError> {
    if !filename.to_ascii_lowercase().ends_with(".pdf") {
        return Ok(String::from_utf8_lossy(&data).into_owned());
    }

    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .context("PDF extraction task panicked")?;
    extracted.map_err(|e| {
        warn!("Could not extract text from '{filename}': {e}");
        AppError::UnprocessableEntity(format!("Could not read PDF '{filename}'"))
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Screening
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    pub job_id: Uuid,
    #[serde(default)]
    pub resume_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub message: &'static str,
    pub results: Vec<ScreeningRecord>,
}

/// POST /api/v1/screen
/// Replaces any earlier screening results. Unknown resume ids are skipped.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(req): Json<ScreenRequest>,
) -> Result<Json<ScreenResponse>, AppError> {
    let job = state
        .repository
        .get_job(req.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", req.job_id)))?;

    let mut resumes = Vec::with_capacity(req.resume_ids.len());
    for id in &req.resume_ids {
        match state.repository.get_resume(*id).await? {
            Some(resume) => resumes.push(resume),
            None => warn!("Resume {id} not found, skipping"),
        }
    }

    let engine = state.engine.clone();
    let requirement = job.requirement.clone();
    let (resumes, screened) = tokio::task::spawn_blocking(move || {
        let screened = {
            let profiles: Vec<&CandidateProfile> = resumes.iter().map(|r| &r.profile).collect();
            engine.screen(&requirement, &profiles)
        };
        (resumes, screened)
    })
    .await
    .context("Screening task panicked")?;

    let screened_at = Utc::now();
    let results: Vec<ScreeningRecord> = resumes
        .iter()
        .zip(screened)
        .map(|(resume, candidate)| ScreeningRecord {
            job_id: job.id,
            resume_id: resume.id,
            filename: resume.filename.clone(),
            display_name: resume.display_name().to_string(),
            match_score: candidate.final_score,
            matched_skills: candidate.result.matched_skills,
            department: job.requirement.department().map(str::to_string),
            category: resume.profile.category(),
            breakdown: candidate.result.breakdown,
            screened_at,
        })
        .collect();

    state.repository.save_results(results.clone()).await?;
    Ok(Json(ScreenResponse {
        message: "Screening complete",
        results,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Dashboard
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub sort_by: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRow {
    pub id: Uuid,
    pub name: String,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub department: String,
    pub category: Category,
    pub shortlisted: bool,
}

impl From<ScreeningRecord> for DashboardRow {
    fn from(record: ScreeningRecord) -> Self {
        Self {
            id: record.resume_id,
            name: record.display_name,
            match_score: record.match_score,
            matched_skills: record.matched_skills,
            department: record.department.unwrap_or_else(|| "N/A".to_string()),
            category: record.category,
            shortlisted: false,
        }
    }
}

/// Sorts in place: `score` (default) is descending, `name` ascending by
/// filename. Any other value keeps screening order.
fn sort_results(results: &mut [ScreeningRecord], sort_by: Option<&str>) {
    match sort_by.unwrap_or("score") {
        "score" => results.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
        "name" => results.sort_by(|a, b| a.filename.cmp(&b.filename)),
        _ => {}
    }
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<Vec<DashboardRow>>, AppError> {
    let mut results = state.repository.list_results().await?;
    sort_results(&mut results, params.sort_by.as_deref());
    Ok(Json(results.into_iter().map(DashboardRow::from).collect()))
}

/// POST /api/v1/session/clear
pub async fn handle_clear_session(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.repository.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::repository::InMemoryRepository;
    use crate::routes::build_router;

    fn app() -> Router {
        build_router(AppState::new(
            &Config::default(),
            Arc::new(InMemoryRepository::new()),
        ))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_job(app: &Router, department: Option<&str>) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/api/v1/jobs",
            Some(json!({
                "job_description": "Senior Python backend engineer",
                "skills": ["Python", "SQL"],
                "department": department,
                "experience_required": "3-5",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["job_id"].as_str().unwrap().to_string()
    }

    async fn create_resumes(app: &Router) -> Vec<String> {
        let (status, body) = send(
            app,
            "POST",
            "/api/v1/resumes",
            Some(json!({
                "resumes": [
                    {
                        "filename": "alice.pdf",
                        "raw_text": "5 years of experience as a Python and SQL backend developer, worked in the Engineering department"
                    },
                    {
                        "filename": "bob.txt",
                        "raw_text": "Pastry chef with 2 years in a bakery"
                    }
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["resume_ids"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_create_job_requires_description_and_skills() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/jobs",
            Some(json!({"job_description": "  ", "skills": ["python"]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/jobs",
            Some(json!({"job_description": "Engineer", "skills": [" "]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_resume_content() {
        let app = app();
        let ids = create_resumes(&app).await;

        let (status, body) = send(&app, "GET", &format!("/api/v1/resumes/{}", ids[1]), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"], "Pastry chef with 2 years in a bakery");

        let missing = Uuid::new_v4();
        let (status, _) = send(&app, "GET", &format!("/api/v1/resumes/{missing}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_screen_unknown_job_is_404() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/screen",
            Some(json!({"job_id": Uuid::new_v4(), "resume_ids": []})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_screen_and_dashboard_flow() {
        let app = app();
        let job_id = create_job(&app, Some("Engineering")).await;
        let mut ids = create_resumes(&app).await;
        ids.push(Uuid::new_v4().to_string()); // unknown id is skipped

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/screen",
            Some(json!({"job_id": job_id, "resume_ids": ids})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["filename"], "alice.pdf");
        assert_eq!(results[0]["matched_skills"], json!(["python", "sql"]));
        assert!(results[0]["match_score"].as_u64().unwrap() >= 90);

        let (_, by_score) = send(&app, "GET", "/api/v1/dashboard", None).await;
        let rows = by_score.as_array().unwrap();
        assert_eq!(rows[0]["name"], "alice");
        assert_eq!(rows[0]["department"], "Engineering");
        assert_eq!(rows[0]["category"], "Tech");
        assert_eq!(rows[0]["shortlisted"], false);
        assert!(rows[0]["matchScore"].as_u64() > rows[1]["matchScore"].as_u64());

        let (_, by_name) = send(&app, "GET", "/api/v1/dashboard?sort_by=name", None).await;
        let names: Vec<&str> = by_name
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_dashboard_department_defaults_to_na() {
        let app = app();
        let job_id = create_job(&app, None).await;
        let ids = create_resumes(&app).await;
        send(
            &app,
            "POST",
            "/api/v1/screen",
            Some(json!({"job_id": job_id, "resume_ids": ids})),
        )
        .await;

        let (_, body) = send(&app, "GET", "/api/v1/dashboard", None).await;
        for row in body.as_array().unwrap() {
            assert_eq!(row["department"], "N/A");
        }
    }

    #[tokio::test]
    async fn test_clear_session() {
        let app = app();
        let ids = create_resumes(&app).await;

        let (status, _) = send(&app, "POST", "/api/v1/session/clear", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", &format!("/api/v1/resumes/{}", ids[0]), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (_, body) = send(&app, "GET", "/api/v1/dashboard", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_upload_plain_text_resume() {
        let app = app();
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"files\"; filename=\"carol.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             Registered nurse, patient care\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"files\"; filename=\"\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             \r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        let ids = json["resume_ids"].as_array().unwrap();
        assert_eq!(ids.len(), 1);

        let uri = format!("/api/v1/resumes/{}", ids[0].as_str().unwrap());
        let (_, content) = send(&app, "GET", &uri, None).await;
        assert_eq!(content["content"], "Registered nurse, patient care");
    }

    #[test]
    fn test_sort_results() {
        let record = |filename: &str, score: u32| ScreeningRecord {
            job_id: Uuid::nil(),
            resume_id: Uuid::new_v4(),
            filename: filename.to_string(),
            display_name: filename.to_string(),
            match_score: score,
            matched_skills: vec![],
            department: None,
            category: Category::Uncategorized,
            breakdown: crate::screening::models::ScoreBreakdown {
                semantic: 0.0,
                skill: 0.0,
                experience: 0.0,
                semantic_backend: crate::screening::models::SemanticBackend::TfIdf,
            },
            screened_at: Utc::now(),
        };

        let mut results = vec![record("b", 40), record("a", 90), record("c", 60)];
        sort_results(&mut results, None);
        let scores: Vec<u32> = results.iter().map(|r| r.match_score).collect();
        assert_eq!(scores, vec![90, 60, 40]);

        sort_results(&mut results, Some("name"));
        let names: Vec<&str> = results.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        sort_results(&mut results, Some("shoe size"));
        let names: Vec<&str> = results.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
