use serde::{Deserialize, Serialize};

use crate::domain::models::location::Location;

pub const CERTIFICATION_OPTIONS: [&str; 5] = [
    "NASM Certified",
    "Red Cross Lifeguard",
    "Wakeboard Instructor Level 1",
    "ACA Water Safety Instructor",
    "ACA Wake Surf Certification",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Specialty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Specialty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Beginner => "BEGINNER",
            Specialty::Intermediate => "INTERMEDIATE",
            Specialty::Advanced => "ADVANCED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub specialty: Specialty,
    #[serde(default)]
    pub active_locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<i32>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstructor {
    pub name: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub specialty: Specialty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<i32>,
    pub certifications: Vec<String>,
    /// Location ids; the backend stores the references and embeds the
    /// documents on reads.
    pub active_locations: Vec<String>,
}
