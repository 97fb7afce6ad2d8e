//! Experience repository.

use chrono::Utc;
use folio_core::entities::{Experience, NewExperience};
use folio_core::enums::ResourceKind;
use folio_core::ids::RecordId;
use folio_core::updates::ExperienceUpdate;

use crate::error::DatabaseError;
use crate::helpers::{
    SetClauses, classify_write_error, get_opt_string, get_record_id, opt_value,
    parse_datetime, parse_optional_datetime,
};
use crate::service::FolioService;

const KIND: ResourceKind = ResourceKind::Experience;

const SELECT_COLS: &str =
    "id, company, title, location, start_date, end_date, description, created_at, updated_at";

fn row_to_experience(row: &libsql::Row) -> Result<Experience, DatabaseError> {
    Ok(Experience {
        id: get_record_id(row, 0)?,
        company: row.get(1)?,
        title: row.get(2)?,
        location: get_opt_string(row, 3)?,
        start_date: parse_datetime(&row.get::<String>(4)?)?,
        end_date: parse_optional_datetime(get_opt_string(row, 5)?.as_deref())?,
        description: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl FolioService {
    /// Insert a new experience with a store-assigned id.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` when another experience has the same company, title and
    /// start date.
    pub async fn create_experience(&self, draft: &NewExperience) -> Result<Experience, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id().await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO experiences ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    id.as_str(),
                    draft.company.as_str(),
                    draft.title.as_str(),
                    draft.location.as_deref(),
                    draft.start_date.to_rfc3339(),
                    draft.end_date.map(|d| d.to_rfc3339()),
                    draft.description.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await
            .map_err(|e| classify_write_error(e, KIND))?;

        tracing::debug!(id = %id, company = %draft.company, "experience created");

        Ok(Experience {
            id,
            company: draft.company.clone(),
            title: draft.title.clone(),
            location: draft.location.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            description: draft.description.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_experience(&self, id: &RecordId) -> Result<Option<Experience>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM experiences WHERE id = ?1"),
                [id.as_str()],
            )
            .await?;
        rows.next().await?.map(|row| row_to_experience(&row)).transpose()
    }

    /// Every experience, in insertion order.
    pub async fn list_experiences(&self) -> Result<Vec<Experience>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM experiences ORDER BY rowid"),
                (),
            )
            .await?;

        let mut experiences = Vec::new();
        while let Some(row) = rows.next().await? {
            experiences.push(row_to_experience(&row)?);
        }
        Ok(experiences)
    }

    /// Apply a partial update. Returns `None` if no experience has this id.
    ///
    /// An empty update leaves the record untouched, `updated_at` included.
    ///
    /// # Errors
    ///
    /// `Schema` when the merged record is not a valid experience, and
    /// `DuplicateKey` when it collides with another experience's unique key.
    pub async fn update_experience(
        &self,
        id: &RecordId,
        update: &ExperienceUpdate,
    ) -> Result<Option<Experience>, DatabaseError> {
        let Some(current) = self.get_experience(id).await? else {
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
        if let Some(ref company) = update.company {
            sets.push("company", company.clone());
        }
        if let Some(ref title) = update.title {
            sets.push("title", title.clone());
        }
        if let Some(ref location) = update.location {
            sets.push("location", opt_value(location.clone()));
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
        sets.push("updated_at", now.to_rfc3339());

        let (sql, params) = sets.into_sql("experiences", id);
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| classify_write_error(e, KIND))?;
        if affected == 0 {
            return Ok(None);
        }

        tracing::debug!(id = %id, "experience updated");
        self.get_experience(id).await
    }

    /// Remove an experience, returning the record as it was before deletion.
    pub async fn delete_experience(&self, id: &RecordId) -> Result<Option<Experience>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("DELETE FROM experiences WHERE id = ?1 RETURNING {SELECT_COLS}"),
                [id.as_str()],
            )
            .await?;
        let deleted = rows.next().await?.map(|row| row_to_experience(&row)).transpose()?;

        if deleted.is_some() {
            tracing::debug!(id = %id, "experience deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{day, new_experience, test_service};
    use folio_core::updates::ExperienceUpdateBuilder;

    fn unknown_id() -> RecordId {
        RecordId::parse("ffffffffffffffffffffffff").unwrap()
    }

    #[tokio::test]
    async fn create_experience_roundtrip() {
        let svc = test_service().await;
        let mut draft = new_experience("Acme", "Engineer");
        draft.location = Some("Berlin".into());
        draft.end_date = Some(day(2024, 12, 31));

        let created = svc.create_experience(&draft).await.unwrap();
        assert_eq!(created.id.as_str().len(), 24);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = svc.get_experience(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.start_date, day(2024, 1, 1));
        assert_eq!(fetched.location.as_deref(), Some("Berlin"));
    }

    #[tokio::test]
    async fn duplicate_experience_is_rejected() {
        let svc = test_service().await;
        svc.create_experience(&new_experience("Acme", "Engineer")).await.unwrap();

        let err = svc
            .create_experience(&new_experience("Acme", "Engineer"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, DatabaseError::DuplicateKey { resource: ResourceKind::Experience }),
            "unexpected error: {err}"
        );
        assert_eq!(svc.list_experiences().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_company_different_start_date_is_allowed() {
        let svc = test_service().await;
        svc.create_experience(&new_experience("Acme", "Engineer")).await.unwrap();

        let mut later = new_experience("Acme", "Engineer");
        later.start_date = day(2025, 3, 1);
        svc.create_experience(&later).await.unwrap();
        assert_eq!(svc.list_experiences().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_missing_experience_is_none() {
        let svc = test_service().await;
        assert_eq!(svc.get_experience(&unknown_id()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_experiences_in_insertion_order() {
        let svc = test_service().await;
        assert!(svc.list_experiences().await.unwrap().is_empty());

        for company in ["Zeta", "Acme", "Mid"] {
            svc.create_experience(&new_experience(company, "Engineer")).await.unwrap();
        }
        let companies: Vec<String> = svc
            .list_experiences()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.company)
            .collect();
        assert_eq!(companies, vec!["Zeta", "Acme", "Mid"]);
    }

    #[tokio::test]
    async fn update_experience_partial() {
        let svc = test_service().await;
        let mut draft = new_experience("Acme", "Engineer");
        draft.location = Some("Berlin".into());
        let created = svc.create_experience(&draft).await.unwrap();

        let update = ExperienceUpdateBuilder::new().title("Senior Engineer").build();
        let updated = svc.update_experience(&created.id, &update).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Senior Engineer");
        assert_eq!(updated.company, "Acme");
        assert_eq!(updated.location.as_deref(), Some("Berlin"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_experience_clears_optional_fields() {
        let svc = test_service().await;
        let mut draft = new_experience("Acme", "Engineer");
        draft.description = Some("Backend work".into());
        draft.end_date = Some(day(2024, 6, 30));
        let created = svc.create_experience(&draft).await.unwrap();

        let update = ExperienceUpdateBuilder::new()
            .description(None)
            .end_date(None)
            .build();
        let updated = svc.update_experience(&created.id, &update).await.unwrap().unwrap();
        assert_eq!(updated.description, None);
        assert_eq!(updated.end_date, None);
    }

    #[tokio::test]
    async fn empty_update_returns_current_record() {
        let svc = test_service().await;
        let created = svc.create_experience(&new_experience("Acme", "Engineer")).await.unwrap();

        let unchanged = svc
            .update_experience(&created.id, &ExperienceUpdate::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn update_missing_experience_is_none() {
        let svc = test_service().await;
        let update = ExperienceUpdateBuilder::new().title("Lead").build();
        assert_eq!(svc.update_experience(&unknown_id(), &update).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_into_existing_key_is_duplicate() {
        let svc = test_service().await;
        svc.create_experience(&new_experience("Acme", "Engineer")).await.unwrap();
        let other = svc.create_experience(&new_experience("Acme", "Manager")).await.unwrap();

        let update = ExperienceUpdateBuilder::new().title("Engineer").build();
        let err = svc.update_experience(&other.id, &update).await.unwrap_err();
        assert!(matches!(err, DatabaseError::DuplicateKey { .. }), "unexpected error: {err}");

        let stored = svc.get_experience(&other.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Manager");
    }

    #[tokio::test]
    async fn update_blanking_required_fields_is_schema_error() {
        let svc = test_service().await;
        let created = svc.create_experience(&new_experience("Acme", "Engineer")).await.unwrap();

        let update = ExperienceUpdateBuilder::new().title("").company("").build();
        let err = svc.update_experience(&created.id, &update).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Schema(_)), "unexpected error: {err}");

        let stored = svc.get_experience(&created.id).await.unwrap().unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn delete_experience_returns_removed_record() {
        let svc = test_service().await;
        let created = svc.create_experience(&new_experience("Acme", "Engineer")).await.unwrap();

        let deleted = svc.delete_experience(&created.id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));
        assert_eq!(svc.get_experience(&created.id).await.unwrap(), None);
        assert_eq!(svc.delete_experience(&created.id).await.unwrap(), None);
    }
}
