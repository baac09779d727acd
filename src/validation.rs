//! Validation of movie creation payloads
//!
//! Turns a [`MovieDraft`] into a [`NewMovie`], collecting one
//! [`FieldIssue`] per failing field.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::model::{Genre, MovieDraft, NewMovie};

pub const MIN_YEAR: i64 = 1900;
pub const MAX_YEAR: i64 = 2025;

// Far too small for a runtime in minutes, but existing clients rely on it.
pub const MAX_DURATION: i64 = 10;

pub const MIN_RATE: f64 = 0.0;
pub const MAX_RATE: f64 = 10.0;

/// What went wrong with a single field
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Required,
    InvalidType,
    OutOfRange,
    InvalidEnumValue,
    InvalidFormat,
    Empty,
    MalformedBody,
}

/// A diagnostic attached to one field of the payload
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FieldIssue {
    pub field: String,
    pub kind: IssueKind,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &str, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind,
            message: message.into(),
        }
    }
}

/// Rejection of a creation payload
///
/// Always carries at least one issue.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid movie data: {}", describe(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

fn describe(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// The request body could not be read as a JSON object
    pub fn malformed_body(reason: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue::new("body", IssueKind::MalformedBody, reason)],
        }
    }

    /// Returns the issue reported for `field`, if any
    pub fn issue_for(&self, field: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }
}

impl MovieDraft {
    /// Reads a draft from a parsed request body
    ///
    /// Only JSON objects are accepted; absent and `null` fields both count
    /// as missing.
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        if !body.is_object() {
            return Err(ValidationError::malformed_body("expected a JSON object"));
        }
        serde_json::from_value(body).map_err(|e| ValidationError::malformed_body(e.to_string()))
    }

    /// Checks every field and builds the typed movie
    ///
    /// All fields are required except `rate`, which defaults to 0.
    pub fn validate(self) -> Result<NewMovie, ValidationError> {
        let mut issues = Vec::new();

        let title = collect(&mut issues, required_string("title", self.title.as_ref(), true));
        let year = collect(
            &mut issues,
            required_integer("year", self.year.as_ref(), MIN_YEAR, MAX_YEAR),
        );
        let director = collect(
            &mut issues,
            required_string("director", self.director.as_ref(), false),
        );
        let duration = collect(
            &mut issues,
            required_integer("duration", self.duration.as_ref(), 1, MAX_DURATION),
        );
        let rate = collect(&mut issues, optional_rate(self.rate.as_ref()));
        let poster = collect(&mut issues, required_url("poster", self.poster.as_ref()));
        let genre = collect(&mut issues, required_genres("genre", self.genre.as_ref()));

        match (title, year, director, duration, rate, poster, genre) {
            (
                Some(title),
                Some(year),
                Some(director),
                Some(duration),
                Some(rate),
                Some(poster),
                Some(genre),
            ) if issues.is_empty() => Ok(NewMovie {
                title,
                year,
                director,
                duration,
                rate,
                poster,
                genre,
            }),
            _ => Err(ValidationError { issues }),
        }
    }
}

fn collect<T>(issues: &mut Vec<FieldIssue>, result: Result<T, FieldIssue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

fn present<'a>(field: &str, value: Option<&'a Value>) -> Result<&'a Value, FieldIssue> {
    value.ok_or_else(|| FieldIssue::new(field, IssueKind::Required, format!("{field} is required")))
}

fn required_string(field: &str, value: Option<&Value>, non_empty: bool) -> Result<String, FieldIssue> {
    let text = present(field, value)?.as_str().ok_or_else(|| {
        FieldIssue::new(field, IssueKind::InvalidType, format!("{field} must be a string"))
    })?;

    if non_empty && text.trim().is_empty() {
        return Err(FieldIssue::new(
            field,
            IssueKind::Empty,
            format!("{field} must not be empty"),
        ));
    }

    Ok(text.to_string())
}

/// Accepts integral JSON numbers, including ones written as `2020.0`
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let n = value.as_f64()?;
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

fn required_integer(field: &str, value: Option<&Value>, min: i64, max: i64) -> Result<i64, FieldIssue> {
    let n = as_integer(present(field, value)?).ok_or_else(|| {
        FieldIssue::new(field, IssueKind::InvalidType, format!("{field} must be an integer"))
    })?;

    if !(min..=max).contains(&n) {
        return Err(FieldIssue::new(
            field,
            IssueKind::OutOfRange,
            format!("{field} must be between {min} and {max}, got {n}"),
        ));
    }

    Ok(n)
}

fn optional_rate(value: Option<&Value>) -> Result<f64, FieldIssue> {
    let Some(value) = value else {
        return Ok(MIN_RATE);
    };

    let rate = value.as_f64().ok_or_else(|| {
        FieldIssue::new("rate", IssueKind::InvalidType, "rate must be a number")
    })?;

    if !(MIN_RATE..=MAX_RATE).contains(&rate) {
        return Err(FieldIssue::new(
            "rate",
            IssueKind::OutOfRange,
            format!("rate must be between {MIN_RATE} and {MAX_RATE}, got {rate}"),
        ));
    }

    Ok(rate)
}

fn required_url(field: &str, value: Option<&Value>) -> Result<String, FieldIssue> {
    let text = required_string(field, value, false)?;

    Url::parse(&text).map_err(|e| {
        FieldIssue::new(
            field,
            IssueKind::InvalidFormat,
            format!("{field} must be a valid URL ({e})"),
        )
    })?;

    Ok(text)
}

fn required_genres(field: &str, value: Option<&Value>) -> Result<Vec<Genre>, FieldIssue> {
    let items = present(field, value)?.as_array().ok_or_else(|| {
        FieldIssue::new(
            field,
            IssueKind::InvalidType,
            format!("{field} must be an array of strings"),
        )
    })?;

    if items.is_empty() {
        return Err(FieldIssue::new(
            field,
            IssueKind::Empty,
            format!("{field} must contain at least one genre"),
        ));
    }

    items
        .iter()
        .map(|item| {
            let name = item.as_str().ok_or_else(|| {
                FieldIssue::new(
                    field,
                    IssueKind::InvalidType,
                    format!("{field} must be an array of strings"),
                )
            })?;
            Genre::from_name(name).ok_or_else(|| {
                let allowed: Vec<&str> = Genre::ALL.iter().map(Genre::as_str).collect();
                FieldIssue::new(
                    field,
                    IssueKind::InvalidEnumValue,
                    format!("{name:?} is not a valid genre, expected one of {}", allowed.join(", ")),
                )
            })
        })
        .collect()
}
