use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const UNIVERSITY_FIELDS_REQUIRED: &str = "All fields (name, location, email) are required";
pub const UNIVERSITY_EXISTS: &str = "University already exists";

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct University {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub email: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniversityInsert {
    pub name: String,
    pub location: String,
    pub email: String,
    pub logo: String,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UniversityCreatedResponse {
    pub message: String,
    #[serde(rename = "universityId")]
    pub university_id: i32,
}

// ───── Input & Validation ───────────────────────────────────────────

/// Creation request, from either a JSON body or a multipart form.
/// `logo` is never read from the body; it is the stored upload name.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct NewUniversity {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub location: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[serde(skip)]
    pub logo: Option<String>,
}

#[derive(Debug, MultipartForm)]
pub struct UniversityUpload {
    pub name: Option<Text<String>>,
    pub location: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub logo: Option<TempFile>,
}

impl UniversityUpload {
    /// Splits the form into its text fields and the optional logo file.
    pub fn into_parts(self) -> (NewUniversity, Option<TempFile>) {
        let request = NewUniversity {
            name: self.name.map(|text| text.0),
            location: self.location.map(|text| text.0),
            email: self.email.map(|text| text.0),
            logo: None,
        };
        (request, self.logo)
    }
}

// ───── Insert Preparation Logic ─────────────────────────────────────

impl NewUniversity {
    pub fn new(name: &str, location: &str, email: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            location: Some(location.to_string()),
            email: Some(email.to_string()),
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: Option<String>) -> Self {
        self.logo = logo;
        self
    }

    /// Returns the insert row once every required field is present and non-empty.
    pub fn prepare_for_insert(self) -> Option<UniversityInsert> {
        if self.validate().is_err() {
            return None;
        }

        Some(UniversityInsert {
            name: self.name?,
            location: self.location?,
            email: self.email?,
            logo: self.logo.unwrap_or_default(),
        })
    }
}
