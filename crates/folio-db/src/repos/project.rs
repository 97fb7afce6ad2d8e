//! Project repository.

use chrono::Utc;
use folio_core::entities::{NewProject, Project};
use folio_core::enums::ResourceKind;
use folio_core::ids::RecordId;
use folio_core::updates::ProjectUpdate;

use crate::error::DatabaseError;
use crate::helpers::{
    SetClauses, classify_write_error, get_opt_string, get_record_id, opt_value,
    parse_datetime, parse_optional_datetime,
};
use crate::service::FolioService;

const KIND: ResourceKind = ResourceKind::Project;

const SELECT_COLS: &str = "id, name, start_date, end_date, description, deployment_link, github_link, created_at, updated_at";

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: get_record_id(row, 0)?,
        name: row.get(1)?,
        start_date: parse_datetime(&row.get::<String>(2)?)?,
        end_date: parse_optional_datetime(get_opt_string(row, 3)?.as_deref())?,
        description: get_opt_string(row, 4)?,
        deployment_link: get_opt_string(row, 5)?,
        github_link: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl FolioService {
    /// Insert a new project with a store-assigned id.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` when another project has the same name and start date.
    pub async fn create_project(&self, draft: &NewProject) -> Result<Project, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id().await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO projects ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    id.as_str(),
                    draft.name.as_str(),
                    draft.start_date.to_rfc3339(),
                    draft.end_date.map(|d| d.to_rfc3339()),
                    draft.description.as_deref(),
                    draft.deployment_link.as_deref(),
                    draft.github_link.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await
            .map_err(|e| classify_write_error(e, KIND))?;

        tracing::debug!(id = %id, name = %draft.name, "project created");

        Ok(Project {
            id,
            name: draft.name.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            description: draft.description.clone(),
            deployment_link: draft.deployment_link.clone(),
            github_link: draft.github_link.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_project(&self, id: &RecordId) -> Result<Option<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM projects WHERE id = ?1"),
                [id.as_str()],
            )
            .await?;
        rows.next().await?.map(|row| row_to_project(&row)).transpose()
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM projects ORDER BY rowid"), ())
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }

    /// Apply a partial update. Returns `None` if no project has this id.
    ///
    /// # Errors
    ///
    /// `Schema` when the merged record is not a valid project, and
    /// `DuplicateKey` when it collides with another project's unique key.
    pub async fn update_project(
        &self,
        id: &RecordId,
        update: &ProjectUpdate,
    ) -> Result<Option<Project>, DatabaseError> {
        let Some(current) = self.get_project(id).await? else {
            return Ok(None);
        };
        if update.is_empty() {
            return Ok(Some(current));
        }

        let now = Utc::now();
        let mut merged = update.apply_to(&current);
        merged.updated_at = now;
        self.check_merged(KIND.as_str(), &merged)?;

        let mut sets = SetClauses::new();
        if let Some(ref name) = update.name {
            sets.push("name", name.clone());
        }
        if let Some(start_date) = update.start_date {
            sets.push("start_date", start_date.to_rfc3339());
        }
        if let Some(end_date) = update.end_date {
            sets.push("end_date", opt_value(end_date.map(|d| d.to_rfc3339())));
        }
        if let Some(ref description) = update.description {
            sets.push("description", opt_value(description.clone()));
        }
        if let Some(ref deployment_link) = update.deployment_link {
            sets.push("deployment_link", opt_value(deployment_link.clone()));
        }
        if let Some(ref github_link) = update.github_link {
            sets.push("github_link", opt_value(github_link.clone()));
        }
        sets.push("updated_at", now.to_rfc3339());

        let (sql, params) = sets.into_sql("projects", id);
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| classify_write_error(e, KIND))?;
        if affected == 0 {
            return Ok(None);
        }

        tracing::debug!(id = %id, "project updated");
        self.get_project(id).await
    }

    /// Remove a project, returning the record as it was before deletion.
    pub async fn delete_project(&self, id: &RecordId) -> Result<Option<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("DELETE FROM projects WHERE id = ?1 RETURNING {SELECT_COLS}"),
                [id.as_str()],
            )
            .await?;
        let deleted = rows.next().await?.map(|row| row_to_project(&row)).transpose()?;

        if deleted.is_some() {
            tracing::debug!(id = %id, "project deleted");
        }
        Ok(deleted)
    }
}
