//! JSON request and response shapes for the task routes.

use crate::task::{domain::Task, services::TaskInput};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Request body for creating or updating a task.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Task title.
    pub title: String,
    /// Optional task description.
    #[serde(default)]
    pub description: Option<String>,
    /// Expiration timestamp.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub expiration_date: DateTime<Utc>,
}

impl From<TaskPayload> for TaskInput {
    fn from(payload: TaskPayload) -> Self {
        Self::new(payload.title, payload.expiration_date)
            .with_optional_description(payload.description)
    }
}

/// Task representation returned by every route that yields a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Task description, `null` when absent.
    pub description: Option<String>,
    /// Creation timestamp.
    pub creation_date: DateTime<Utc>,
    /// Expiration timestamp.
    pub expiration_date: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            creation_date: task.creation_date(),
            expiration_date: task.expiration_date(),
        }
    }
}

/// Parses an RFC 3339 timestamp, or a timestamp without offset read as UTC.
///
/// # Errors
///
/// Returns [`chrono::ParseError`] when the value matches neither form.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|naive| naive.and_utc()))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
