use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::instructor::Instructor;
use crate::domain::models::location::Location;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Available,
    Booked,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Available => "available",
            SessionStatus::Booked => "booked",
            SessionStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "_id")]
    pub id: String,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<Instructor>,
    pub date: DateTime<Utc>,
    /// Start time of day as "HH:MM", separate from the calendar date.
    pub time: String,
    pub duration_minutes: i32,
    #[serde(default)]
    pub price: Option<f64>,
    pub status: SessionStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    pub date: DateTime<Utc>,
    pub time: String,
    pub duration_minutes: i32,
    pub price: f64,
    pub status: SessionStatus,
}
