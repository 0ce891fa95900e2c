//! Catalog endpoints.
//!
//! - `GET /api/cursos` - list all courses
//! - `GET /api/minicursos` - list workshops with seats left, optionally
//!   filtered to a time window (`inicio`/`fim`, RFC 3339)

use super::error::ApiError;
use crate::server::state::AppState;
use crate::types::{Course, TimeWindow, Workshop};
use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Query parameters for the workshop listing.
#[derive(Debug, Default, Deserialize)]
pub struct WorkshopsQuery {
    /// Window start; workshops must begin after this.
    pub inicio: Option<DateTime<Utc>>,
    /// Window end; workshops must finish before this.
    pub fim: Option<DateTime<Utc>>,
}

impl WorkshopsQuery {
    /// Turn the raw parameters into an optional window.
    ///
    /// Both bounds or neither: a half-specified window is a client error,
    /// not a full listing.
    fn window(&self) -> Result<Option<TimeWindow>, ApiError> {
        match (self.inicio, self.fim) {
            (Some(start), Some(end)) => Ok(Some(TimeWindow { start, end })),
            (None, None) => Ok(None),
            _ => Err(ApiError::bad_request(
                "inicio and fim must be supplied together",
            )),
        }
    }
}

/// List every course.
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = state.catalog.list_courses().await?;
    Ok(Json(courses))
}

/// List workshops that still have seats, optionally within a time window.
pub async fn list_workshops(
    State(state): State<AppState>,
    Query(query): Query<WorkshopsQuery>,
) -> Result<Json<Vec<Workshop>>, ApiError> {
    let window = query.window()?;
    let workshops = state.catalog.list_workshops(window).await?;
    Ok(Json(workshops))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use axum::http::StatusCode;

    fn at(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    #[test]
    fn window_requires_both_bounds() {
        let half = WorkshopsQuery {
            inicio: Some(at("2026-09-01T08:00:00Z")),
            fim: None,
        };
        assert_eq!(
            half.window().unwrap_err().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn omitted_window_means_no_filter() {
        assert_eq!(WorkshopsQuery::default().window().unwrap(), None);
    }

    #[test]
    fn full_window_is_passed_through() {
        let query = WorkshopsQuery {
            inicio: Some(at("2026-09-01T08:00:00Z")),
            fim: Some(at("2026-09-01T18:00:00Z")),
        };
        let window = query.window().unwrap().unwrap();
        assert_eq!(window.start, at("2026-09-01T08:00:00Z"));
        assert_eq!(window.end, at("2026-09-01T18:00:00Z"));
    }
}
