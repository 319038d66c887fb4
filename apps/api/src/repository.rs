//! Screening session storage.
//!
//! `AppState` holds an `Arc<dyn ScreeningRepository>`; `InMemoryRepository` is
//! the default and only lives as long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::screening::{JobRecord, ResumeRecord, ScreeningRecord};

#[async_trait]
pub trait ScreeningRepository: Send + Sync {
    async fn create_job(&self, job: JobRecord) -> Result<Uuid, AppError>;

    async fn get_job(&self, id: Uuid) -> Result<Option<JobRecord>, AppError>;

    async fn create_resume(&self, resume: ResumeRecord) -> Result<Uuid, AppError>;

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError>;

    /// Replaces the previous result set.
    async fn save_results(&self, results: Vec<ScreeningRecord>) -> Result<(), AppError>;

    async fn list_results(&self) -> Result<Vec<ScreeningRecord>, AppError>;

    /// Drops every job, resume and result.
    async fn clear(&self) -> Result<(), AppError>;
}

#[derive(Default)]
struct Store {
    jobs: HashMap<Uuid, JobRecord>,
    resumes: HashMap<Uuid, ResumeRecord>,
    results: Vec<ScreeningRecord>,
}

#[derive(Default)]
pub struct InMemoryRepository {
    store: RwLock<Store>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScreeningRepository for InMemoryRepository {
    async fn create_job(&self, job: JobRecord) -> Result<Uuid, AppError> {
        let id = job.id;
        self.store.write().await.jobs.insert(id, job);
        info!("Job requirements stored with id {id}");
        Ok(id)
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobRecord>, AppError> {
        Ok(self.store.read().await.jobs.get(&id).cloned())
    }

    async fn create_resume(&self, resume: ResumeRecord) -> Result<Uuid, AppError> {
        let id = resume.id;
        self.store.write().await.resumes.insert(id, resume);
        Ok(id)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        Ok(self.store.read().await.resumes.get(&id).cloned())
    }

    async fn save_results(&self, results: Vec<ScreeningRecord>) -> Result<(), AppError> {
        self.store.write().await.results = results;
        Ok(())
    }

    async fn list_results(&self) -> Result<Vec<ScreeningRecord>, AppError> {
        Ok(self.store.read().await.results.clone())
    }

    async fn clear(&self) -> Result<(), AppError> {
        *self.store.write().await = Store::default();
        info!("Screening session data cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::screening::models::{CandidateProfile, JobRequirement};

    fn job() -> JobRecord {
        JobRecord {
            id: Uuid::new_v4(),
            requirement: JobRequirement::new("Backend engineer", ["rust"], None, "2+"),
            created_at: Utc::now(),
        }
    }

    fn resume(filename: &str) -> ResumeRecord {
        ResumeRecord {
            id: Uuid::new_v4(),
            filename: filename.to_string(),
            profile: CandidateProfile::from_raw_text("rust developer"),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_job() {
        let repo = InMemoryRepository::new();
        let record = job();
        let id = repo.create_job(record.clone()).await.unwrap();
        assert_eq!(id, record.id);

        let fetched = repo.get_job(id).await.unwrap().unwrap();
        assert_eq!(fetched.requirement.description(), "Backend engineer");
        assert!(repo.get_job(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_and_get_resume() {
        let repo = InMemoryRepository::new();
        let id = repo.create_resume(resume("a.pdf")).await.unwrap();
        let fetched = repo.get_resume(id).await.unwrap().unwrap();
        assert_eq!(fetched.filename, "a.pdf");
        assert_eq!(fetched.profile.raw_text(), "rust developer");
    }

    #[tokio::test]
    async fn test_clear_drops_everything() {
        let repo = InMemoryRepository::new();
        let job_id = repo.create_job(job()).await.unwrap();
        let resume_id = repo.create_resume(resume("b.txt")).await.unwrap();

        repo.clear().await.unwrap();

        assert!(repo.get_job(job_id).await.unwrap().is_none());
        assert!(repo.get_resume(resume_id).await.unwrap().is_none());
        assert!(repo.list_results().await.unwrap().is_empty());
    }
}
