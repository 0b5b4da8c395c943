//! Schema validation for patient records.
//!
//! A declarative rule table (field → check) evaluated by a generic
//! validator. Rules run independently per field, so one malformed
//! field never hides another. Date fields are rewritten to a canonical
//! ISO-8601 string on success, which makes validation idempotent on
//! already-normalized records.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use regex::Regex;
use serde_json::{Map, Value};

use crate::models::Patient;

/// Key for errors not attributable to a single field.
pub const GENERAL: &str = "general";

static BLOOD_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(A|B|AB|O)[+-]$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]+$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://.+").unwrap());

// ─── FieldErrors ─────────────────────────────────────────────────────

/// Validation failures keyed by field name.
///
/// Errors with no attributable field live under [`GENERAL`]. The map
/// is ordered so messages render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.joined())]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single error under the general bucket.
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(GENERAL, message);
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// All messages as one string, for surfaces that take a single error.
    pub fn joined(&self) -> String {
        self.errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// ─── Validator ───────────────────────────────────────────────────────

type Check = fn(&Map<String, Value>) -> Option<String>;

/// The rule table. Every field is checked; the first failing check per
/// field is recorded.
const RULES: &[(&str, Check)] = &[
    ("id", check_id),
    ("createdAt", check_created_at),
    ("name", check_name),
    ("description", check_description),
    ("avatar", check_avatar),
    ("website", check_website),
    ("bloodType", check_blood_type),
    ("birthDate", check_birth_date),
    ("insuranceNumber", check_insurance_number),
    ("phone", check_phone),
    ("email", check_email),
    ("updatedAt", check_updated_at),
    ("isDeleted", check_is_deleted),
];

/// Validate an untyped candidate record.
///
/// On success, returns the normalized record: canonical date strings,
/// trimmed optional fields, defaulted `isDeleted`. On failure, returns
/// a field → message map. Malformed input is always a normal failure
/// result, never a panic.
pub fn validate(candidate: &Value) -> Result<Patient, FieldErrors> {
    let map = match candidate.as_object() {
        Some(map) => map,
        None => return Err(FieldErrors::general("Expected a patient object")),
    };

    let mut errors = FieldErrors::new();
    for (field, check) in RULES {
        if let Some(message) = check(map) {
            errors.insert(*field, message);
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    // All checks passed; anything failing here is an internal error and
    // collapses into a single general message.
    build_patient(map).map_err(FieldErrors::general)
}

/// Validate an already-typed record by round-tripping it through JSON.
pub fn validate_record(record: &Patient) -> Result<Patient, FieldErrors> {
    let value = serde_json::to_value(record).map_err(|e| FieldErrors::general(e.to_string()))?;
    validate(&value)
}

fn build_patient(map: &Map<String, Value>) -> Result<Patient, String> {
    let required = |key: &str| -> Result<String, String> {
        str_field(map, key)
            .map(str::to_owned)
            .ok_or_else(|| format!("missing field {key}"))
    };
    let optional = |key: &str| -> Option<String> {
        str_field(map, key).map(|s| s.trim().to_owned())
    };
    let date = |key: &str| -> Result<String, String> {
        str_field(map, key)
            .and_then(parse_date)
            .map(canonical)
            .ok_or_else(|| format!("unparseable date in {key}"))
    };
    let optional_date = |key: &str| -> Result<Option<String>, String> {
        match str_field(map, key) {
            None => Ok(None),
            Some(raw) => parse_date(raw)
                .map(canonical)
                .map(Some)
                .ok_or_else(|| format!("unparseable date in {key}")),
        }
    };

    Ok(Patient {
        id: required("id")?,
        created_at: date("createdAt")?,
        name: required("name")?,
        description: required("description")?,
        avatar: optional("avatar"),
        website: optional("website"),
        blood_type: optional("bloodType"),
        birth_date: optional_date("birthDate")?,
        insurance_number: optional("insuranceNumber"),
        phone: optional("phone"),
        email: optional("email"),
        updated_at: optional_date("updatedAt")?,
        is_deleted: map.get("isDeleted").and_then(Value::as_bool).unwrap_or(false),
    })
}

// ─── Field checks ────────────────────────────────────────────────────

fn str_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

fn optional_pattern(
    map: &Map<String, Value>,
    key: &str,
    pattern: &Regex,
    message: &str,
) -> Option<String> {
    match map.get(key) {
        None => None,
        Some(Value::String(s)) if pattern.is_match(s.trim()) => None,
        Some(_) => Some(message.to_owned()),
    }
}

fn check_id(map: &Map<String, Value>) -> Option<String> {
    match str_field(map, "id") {
        Some(id) if !id.is_empty() => None,
        _ => Some("ID is required".into()),
    }
}

fn check_created_at(map: &Map<String, Value>) -> Option<String> {
    match str_field(map, "createdAt").and_then(parse_date) {
        Some(_) => None,
        None => Some("Invalid date format".into()),
    }
}

fn check_name(map: &Map<String, Value>) -> Option<String> {
    match str_field(map, "name") {
        None => Some("Name is required".into()),
        Some(name) if name.is_empty() => Some("Name is required".into()),
        Some(name) if name.chars().count() > 255 => Some("Name too long".into()),
        Some(_) => None,
    }
}

fn check_description(map: &Map<String, Value>) -> Option<String> {
    match str_field(map, "description") {
        Some(description) if !description.is_empty() => None,
        _ => Some("Description is required".into()),
    }
}

fn check_avatar(map: &Map<String, Value>) -> Option<String> {
    // Unlike the other URL field, a null avatar is allowed.
    match map.get("avatar") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if URL_RE.is_match(s.trim()) => None,
        Some(_) => Some("Invalid avatar URL".into()),
    }
}

fn check_website(map: &Map<String, Value>) -> Option<String> {
    optional_pattern(map, "website", &URL_RE, "Invalid website URL")
}

fn check_blood_type(map: &Map<String, Value>) -> Option<String> {
    optional_pattern(map, "bloodType", &BLOOD_TYPE_RE, "Invalid blood type format")
}

fn check_birth_date(map: &Map<String, Value>) -> Option<String> {
    match map.get("birthDate") {
        None => None,
        Some(Value::String(s)) if parse_date(s).is_some() => None,
        Some(_) => Some("Invalid birth date format".into()),
    }
}

fn check_insurance_number(map: &Map<String, Value>) -> Option<String> {
    match map.get("insuranceNumber") {
        None => None,
        Some(Value::String(s)) if !s.trim().is_empty() => None,
        Some(_) => Some("Insurance number cannot be empty".into()),
    }
}

fn check_phone(map: &Map<String, Value>) -> Option<String> {
    optional_pattern(map, "phone", &PHONE_RE, "Invalid phone number format")
}

fn check_email(map: &Map<String, Value>) -> Option<String> {
    optional_pattern(map, "email", &EMAIL_RE, "Invalid email format")
}

fn check_updated_at(map: &Map<String, Value>) -> Option<String> {
    match map.get("updatedAt") {
        None => None,
        Some(Value::String(s)) if parse_date(s).is_some() => None,
        Some(_) => Some("Invalid date format".into()),
    }
}

fn check_is_deleted(map: &Map<String, Value>) -> Option<String> {
    match map.get("isDeleted") {
        None | Some(Value::Bool(_)) => None,
        Some(_) => Some("Invalid soft-delete flag".into()),
    }
}

// ─── Dates ───────────────────────────────────────────────────────────

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` calendar dates.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| DateTime::from_naive_utc_and_offset(ndt, Utc))
}

/// Millisecond-precision UTC form, e.g. `2024-01-01T00:00:00.000Z`.
fn canonical(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
