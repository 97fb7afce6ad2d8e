//! Shared test utilities for folio-db unit tests.

pub(crate) mod helpers {
    use chrono::{DateTime, NaiveDate, Utc};
    use folio_core::entities::{NewExperience, NewProject};

    use crate::FolioDb;
    use crate::service::FolioService;

    /// Create an in-memory `FolioService`.
    pub async fn test_service() -> FolioService {
        let db = FolioDb::open_local(":memory:").await.unwrap();
        FolioService::from_db(db)
    }

    /// UTC midnight of a calendar date.
    pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap()
            .and_utc()
    }

    pub fn new_experience(company: &str, title: &str) -> NewExperience {
        NewExperience {
            company: company.to_string(),
            title: title.to_string(),
            location: None,
            start_date: day(2024, 1, 1),
            end_date: None,
            description: None,
        }
    }

    pub fn new_project(name: &str) -> NewProject {
        NewProject {
            name: name.to_string(),
            start_date: day(2023, 6, 15),
            end_date: None,
            description: None,
            deployment_link: None,
            github_link: None,
        }
    }
}
