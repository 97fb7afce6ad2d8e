//! Per-resource binding of validators and gateway operations.
//!
//! Handlers are generic over [`Resource`], so both `/api/experience` and
//! `/api/project` run the same request pipeline.

use async_trait::async_trait;
use folio_core::entities::{Experience, NewExperience, NewProject, Project};
use folio_core::enums::ResourceKind;
use folio_core::ids::RecordId;
use folio_core::updates::{ExperienceUpdate, ProjectUpdate};
use folio_db::error::DatabaseError;
use folio_db::service::FolioService;
use folio_schema::ValidationError;
use folio_schema::validate;
use serde::Serialize;
use serde_json::Value;

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Record: Serialize + Send;
    type Draft: Send + Sync;
    type Update: Send + Sync;

    const KIND: ResourceKind;
    /// Collection name used in client-facing messages.
    const PLURAL: &'static str;

    fn validate_new(payload: &Value) -> Result<Self::Draft, ValidationError>;
    fn validate_update(payload: &Value) -> Result<Self::Update, ValidationError>;

    async fn create(svc: &FolioService, draft: &Self::Draft) -> Result<Self::Record, DatabaseError>;
    async fn find(svc: &FolioService, id: &RecordId) -> Result<Option<Self::Record>, DatabaseError>;
    async fn list(svc: &FolioService) -> Result<Vec<Self::Record>, DatabaseError>;
    async fn update(
        svc: &FolioService,
        id: &RecordId,
        update: &Self::Update,
    ) -> Result<Option<Self::Record>, DatabaseError>;
    async fn delete(svc: &FolioService, id: &RecordId) -> Result<Option<Self::Record>, DatabaseError>;
}

pub struct ExperienceResource;

#[async_trait]
impl Resource for ExperienceResource {
    type Record = Experience;
    type Draft = NewExperience;
    type Update = ExperienceUpdate;

    const KIND: ResourceKind = ResourceKind::Experience;
    const PLURAL: &'static str = "experiences";

    fn validate_new(payload: &Value) -> Result<NewExperience, ValidationError> {
        validate::validate_new_experience(payload)
    }

    fn validate_update(payload: &Value) -> Result<ExperienceUpdate, ValidationError> {
        validate::validate_experience_update(payload)
    }

    async fn create(svc: &FolioService, draft: &NewExperience) -> Result<Experience, DatabaseError> {
        svc.create_experience(draft).await
    }

    async fn find(svc: &FolioService, id: &RecordId) -> Result<Option<Experience>, DatabaseError> {
        svc.get_experience(id).await
    }

    async fn list(svc: &FolioService) -> Result<Vec<Experience>, DatabaseError> {
        svc.list_experiences().await
    }

    async fn update(
        svc: &FolioService,
        id: &RecordId,
        update: &ExperienceUpdate,
    ) -> Result<Option<Experience>, DatabaseError> {
        svc.update_experience(id, update).await
    }

    async fn delete(svc: &FolioService, id: &RecordId) -> Result<Option<Experience>, DatabaseError> {
        svc.delete_experience(id).await
    }
}

pub struct ProjectResource;

#[async_trait]
impl Resource for ProjectResource {
    type Record = Project;
    type Draft = NewProject;
    type Update = ProjectUpdate;

    const KIND: ResourceKind = ResourceKind::Project;
    const PLURAL: &'static str = "projects";

    fn validate_new(payload: &Value) -> Result<NewProject, ValidationError> {
        validate::validate_new_project(payload)
    }

    fn validate_update(payload: &Value) -> Result<ProjectUpdate, ValidationError> {
        validate::validate_project_update(payload)
    }

    async fn create(svc: &FolioService, draft: &NewProject) -> Result<Project, DatabaseError> {
        svc.create_project(draft).await
    }

    async fn find(svc: &FolioService, id: &RecordId) -> Result<Option<Project>, DatabaseError> {
        svc.get_project(id).await
    }

    async fn list(svc: &FolioService) -> Result<Vec<Project>, DatabaseError> {
        svc.list_projects().await
    }

    async fn update(
        svc: &FolioService,
        id: &RecordId,
        update: &ProjectUpdate,
    ) -> Result<Option<Project>, DatabaseError> {
        svc.update_project(id, update).await
    }

    async fn delete(svc: &FolioService, id: &RecordId) -> Result<Option<Project>, DatabaseError> {
        svc.delete_project(id).await
    }
}
