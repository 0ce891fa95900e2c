//! Domain types for the event-registration backend.
//!
//! Wire names (serde renames) keep the legacy Portuguese JSON contract that
//! existing clients depend on; the Rust side uses English names throughout.
//! SQL queries alias columns to the English field names so `sqlx::FromRow`
//! derives need no extra attributes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course participants can be associated with. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    /// Course identifier.
    pub id: i32,
    /// Course name.
    #[serde(rename = "nome")]
    pub name: String,
}

/// A short workshop ("minicurso") with a bounded number of seats.
///
/// `seats_remaining` is mutated only by the enrollment transaction and is
/// kept inside `0..=seats_total` by both the conditional decrement and a
/// database check constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workshop {
    /// Workshop identifier.
    pub id: i32,
    /// Workshop name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Speaker running the workshop.
    #[serde(rename = "palestrante")]
    pub speaker: String,
    /// Start time.
    #[serde(rename = "horarioComeco")]
    pub starts_at: DateTime<Utc>,
    /// End time.
    #[serde(rename = "horarioFim")]
    pub ends_at: DateTime<Utc>,
    /// Total seats.
    #[serde(rename = "vagas")]
    pub seats_total: i32,
    /// Seats still available.
    #[serde(rename = "vagasRestantes")]
    pub seats_remaining: i32,
    /// Duration in hours, used for attendance certificates.
    #[serde(rename = "quantidadeHoras")]
    pub duration_hours: i32,
}

/// A registered participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Participant {
    /// System-assigned identifier.
    pub id: i64,
    /// National id (CPF or institutional RA), the unique business key.
    #[serde(rename = "cpf_ra")]
    pub national_id: i64,
    /// Selected course identifier; 0 when no course was selected.
    #[serde(rename = "curso_id")]
    pub course_id: i32,
    /// Participant name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Home institution.
    #[serde(rename = "instituicao")]
    pub institution: String,
    /// Whether the registration fee has been paid.
    #[serde(rename = "pago")]
    pub paid: bool,
}

/// Fields needed to insert a participant; the id is storage-assigned and the
/// paid flag always starts false.
#[derive(Debug, Clone)]
pub struct NewParticipant {
    /// National id (unique business key).
    pub national_id: i64,
    /// Selected course identifier, 0 for none.
    pub course_id: i32,
    /// Participant name.
    pub name: String,
    /// Home institution.
    pub institution: String,
}

/// Half-open time window used to filter the workshop listing.
///
/// A workshop matches when `starts_at > start AND ends_at < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Window start (exclusive lower bound on workshop start).
    pub start: DateTime<Utc>,
    /// Window end (exclusive upper bound on workshop end).
    pub end: DateTime<Utc>,
}

/// Course selection inside a registration request.
///
/// Clients send the full course object; only the id matters here. `id`
/// defaults to 0 so an empty object means "no course selected".
#[derive(Debug, Clone, Deserialize)]
pub struct CourseSelection {
    /// Selected course identifier.
    #[serde(default)]
    pub id: i32,
}

/// Workshop selection inside a registration request. Clients send the full
/// workshop object; only the id is used.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkshopSelection {
    /// Selected workshop identifier.
    pub id: i32,
}

/// An inbound registration request.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    /// National id in string form; must parse as an integer.
    #[serde(rename = "cpf_ra")]
    pub national_id: String,
    /// Participant name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Home institution.
    #[serde(rename = "instituicao")]
    pub institution: String,
    /// Optional course selection.
    #[serde(rename = "curso", default)]
    pub course: Option<CourseSelection>,
    /// Workshops to enroll in, processed in request order.
    #[serde(rename = "minicursos", default)]
    pub workshops: Vec<WorkshopSelection>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn registration_request_accepts_legacy_wire_names() {
        let json = r#"{
            "cpf_ra": "12345678901",
            "nome": "Ana",
            "instituicao": "UFX",
            "curso": {"id": 2, "nome": "Zootecnia"},
            "minicursos": [{"id": 5, "nome": "Forragens", "vagas": 30}]
        }"#;

        let request: RegistrationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.national_id, "12345678901");
        assert_eq!(request.course.as_ref().map(|c| c.id), Some(2));
        assert_eq!(request.workshops.len(), 1);
        assert_eq!(request.workshops[0].id, 5);
    }

    #[test]
    fn registration_request_course_and_workshops_are_optional() {
        let json = r#"{"cpf_ra": "42", "nome": "Ana", "instituicao": "UFX"}"#;

        let request: RegistrationRequest = serde_json::from_str(json).unwrap();
        assert!(request.course.is_none());
        assert!(request.workshops.is_empty());
    }

    #[test]
    fn workshop_serializes_with_legacy_field_names() {
        let workshop = Workshop {
            id: 1,
            name: "Forragens".to_owned(),
            speaker: "Dr. Silva".to_owned(),
            starts_at: "2026-09-01T09:00:00Z".parse().unwrap(),
            ends_at: "2026-09-01T12:00:00Z".parse().unwrap(),
            seats_total: 30,
            seats_remaining: 12,
            duration_hours: 3,
        };

        let value = serde_json::to_value(&workshop).unwrap();
        assert_eq!(value["vagasRestantes"], 12);
        assert_eq!(value["horarioComeco"], "2026-09-01T09:00:00Z");
        assert_eq!(value["palestrante"], "Dr. Silva");
    }
}
