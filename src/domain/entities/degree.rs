use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;

pub const DEGREE_FIELDS_REQUIRED: &str = "All fields are required.";
pub const UNIVERSITY_NOT_FOUND: &str = "University does not exist.";
pub const DEGREE_EXISTS: &str = "Degree already exists for this university.";
pub const INVALID_ISSUE_DATE: &str = "Invalid issue_date, expected YYYY-MM-DD";
pub const NO_DEGREES_FOUND: &str = "No degrees found.";

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Degree {
    pub id: i32,
    pub link: String,
    pub issue_date: NaiveDate,
    pub university_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DegreeInsert {
    pub link: String,
    pub issue_date: NaiveDate,
    pub university_id: i32,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DegreeCreatedResponse {
    pub message: String,
    #[serde(rename = "degreeId")]
    pub degree_id: i32,
}

// ───── Input & Validation ───────────────────────────────────────────

/// `university_id` as clients send it: a number or a numeric string.
/// Numbers outside `i64` and fractional numbers land in `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UniversityRef {
    Id(i64),
    Text(String),
    Other(serde_json::Number),
}

impl UniversityRef {
    /// `0` and `""` are treated as absent.
    pub fn is_blank(&self) -> bool {
        match self {
            UniversityRef::Id(id) => *id == 0,
            UniversityRef::Text(text) => text.is_empty(),
            UniversityRef::Other(number) => number.as_f64() == Some(0.0),
        }
    }

    /// The row id this reference can match, if any.
    pub fn as_row_id(&self) -> Option<i32> {
        match self {
            UniversityRef::Id(id) => i32::try_from(*id).ok(),
            UniversityRef::Text(text) => text.trim().parse::<i32>().ok(),
            UniversityRef::Other(_) => None,
        }
    }
}

impl From<i32> for UniversityRef {
    fn from(id: i32) -> Self {
        UniversityRef::Id(id.into())
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct NewDegree {
    #[validate(required, length(min = 1))]
    pub link: Option<String>,

    #[validate(required, length(min = 1))]
    pub issue_date: Option<String>,

    #[validate(required)]
    pub university_id: Option<UniversityRef>,
}

/// Accepts a calendar date or an RFC 3339 timestamp, keeping the date part.
pub fn parse_issue_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

// ───── Insert Preparation Logic ─────────────────────────────────────

impl NewDegree {
    pub fn new(link: &str, issue_date: &str, university_id: impl Into<UniversityRef>) -> Self {
        Self {
            link: Some(link.to_string()),
            issue_date: Some(issue_date.to_string()),
            university_id: Some(university_id.into()),
        }
    }
}

impl TryFrom<NewDegree> for DegreeInsert {
    type Error = AppError;

    fn try_from(request: NewDegree) -> Result<Self, Self::Error> {
        request
            .validate()
            .map_err(|_| AppError::ValidationError(DEGREE_FIELDS_REQUIRED.into()))?;

        let (Some(link), Some(raw_date), Some(reference)) =
            (request.link, request.issue_date, request.university_id)
        else {
            return Err(AppError::ValidationError(DEGREE_FIELDS_REQUIRED.into()));
        };

        if reference.is_blank() {
            return Err(AppError::ValidationError(DEGREE_FIELDS_REQUIRED.into()));
        }

        let issue_date = parse_issue_date(&raw_date)
            .ok_or_else(|| AppError::ValidationError(INVALID_ISSUE_DATE.into()))?;

        // An id that cannot be a row key can never reference a university.
        let university_id = reference
            .as_row_id()
            .ok_or_else(|| AppError::ValidationError(UNIVERSITY_NOT_FOUND.into()))?;

        Ok(DegreeInsert {
            link,
            issue_date,
            university_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> NewDegree {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_numeric_and_string_university_ids() {
        let numeric = parse(json!({"link": "https://d/1", "issue_date": "2024-06-01", "university_id": 3}));
        let text = parse(json!({"link": "https://d/1", "issue_date": "2024-06-01", "university_id": "3"}));

        let a = DegreeInsert::try_from(numeric).unwrap();
        let b = DegreeInsert::try_from(text).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.university_id, 3);
        assert_eq!(a.issue_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn blank_values_count_as_missing() {
        for body in [
            json!({"issue_date": "2024-06-01", "university_id": 3}),
            json!({"link": "", "issue_date": "2024-06-01", "university_id": 3}),
            json!({"link": "https://d/1", "issue_date": "2024-06-01", "university_id": 0}),
            json!({"link": "https://d/1", "issue_date": "2024-06-01", "university_id": ""}),
            json!({"link": "https://d/1", "university_id": 3}),
        ] {
            let err = DegreeInsert::try_from(parse(body)).unwrap_err();
            assert_eq!(err, AppError::ValidationError(DEGREE_FIELDS_REQUIRED.into()));
        }
    }

    #[test]
    fn non_numeric_university_id_cannot_exist() {
        let err = DegreeInsert::try_from(NewDegree::new("https://d/1", "2024-06-01", UniversityRef::Text("abc".into())))
            .unwrap_err();
        assert_eq!(err, AppError::ValidationError(UNIVERSITY_NOT_FOUND.into()));
    }

    #[test]
    fn out_of_range_or_fractional_ids_cannot_exist() {
        for id in [json!(9999999999999999999u64), json!(3.5), json!(4294967296i64), json!(-1e300)] {
            let request = parse(json!({"link": "https://d/1", "issue_date": "2024-06-01", "university_id": id}));
            let err = DegreeInsert::try_from(request).unwrap_err();
            assert_eq!(err, AppError::ValidationError(UNIVERSITY_NOT_FOUND.into()));
        }
    }

    #[test]
    fn fractional_zero_counts_as_missing() {
        let request = parse(json!({"link": "https://d/1", "issue_date": "2024-06-01", "university_id": 0.0}));
        let err = DegreeInsert::try_from(request).unwrap_err();
        assert_eq!(err, AppError::ValidationError(DEGREE_FIELDS_REQUIRED.into()));
    }

    #[test]
    fn issue_date_formats() {
        assert_eq!(parse_issue_date("2023-01-31"), NaiveDate::from_ymd_opt(2023, 1, 31));
        assert_eq!(parse_issue_date("2023-01-31T10:00:00.000Z"), NaiveDate::from_ymd_opt(2023, 1, 31));
        assert_eq!(parse_issue_date("31/01/2023"), None);

        let err = DegreeInsert::try_from(NewDegree::new("https://d/1", "yesterday", 1)).unwrap_err();
        assert_eq!(err, AppError::ValidationError(INVALID_ISSUE_DATE.into()));
    }
}
