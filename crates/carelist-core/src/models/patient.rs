//! Patient models.

use serde::{Deserialize, Serialize};

/// Current time as a canonical ISO-8601 string (millisecond precision, UTC).
///
/// Every timestamp stored on a [`Patient`] uses this shape, so a
/// normalized record round-trips through validation unchanged.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// A patient record as exchanged with the remote API.
///
/// Field names serialize in camelCase to match the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique record ID - immutable once assigned
    pub id: String,
    /// Creation timestamp - never changes after creation
    pub created_at: String,
    /// Patient name (1..=255 characters)
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Personal website URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Blood type, e.g. "A+", "O-"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    /// Date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Insurance policy number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_number: Option<String>,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Last modification timestamp - absent means never modified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Soft-delete flag
    #[serde(default)]
    pub is_deleted: bool,
}

impl Patient {
    /// Compose a full record from a draft: fresh UUID, current timestamp.
    pub fn from_draft(draft: PatientDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: now_iso(),
            name: draft.name,
            description: draft.description,
            avatar: draft.avatar,
            website: draft.website,
            blood_type: draft.blood_type,
            birth_date: draft.birth_date,
            insurance_number: draft.insurance_number,
            phone: draft.phone,
            email: draft.email,
            updated_at: None,
            is_deleted: false,
        }
    }

    /// Whether this record has been modified since creation.
    ///
    /// Display logic branches on this: never-modified records carry no
    /// `updatedAt` at all.
    pub fn is_modified(&self) -> bool {
        self.updated_at.is_some()
    }
}

/// Input for creating a patient: everything the caller supplies.
///
/// `id` and `createdAt` are assigned by the gateway, `updatedAt` and
/// `isDeleted` start out absent/false.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub insurance_number: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Partial update: absent fields keep their current value.
///
/// `id` and `createdAt` have no counterpart here, which is what makes
/// them immutable through the update path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub insurance_number: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_deleted: Option<bool>,
}

impl PatientUpdate {
    /// Merge this partial update over an existing record (read-merge-write).
    ///
    /// `id` and `createdAt` always come from `current`; `updatedAt` is
    /// left for the gateway to stamp.
    pub fn apply(&self, current: &Patient) -> Patient {
        Patient {
            id: current.id.clone(),
            created_at: current.created_at.clone(),
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            avatar: self.avatar.clone().or_else(|| current.avatar.clone()),
            website: self.website.clone().or_else(|| current.website.clone()),
            blood_type: self
                .blood_type
                .clone()
                .or_else(|| current.blood_type.clone()),
            birth_date: self
                .birth_date
                .clone()
                .or_else(|| current.birth_date.clone()),
            insurance_number: self
                .insurance_number
                .clone()
                .or_else(|| current.insurance_number.clone()),
            phone: self.phone.clone().or_else(|| current.phone.clone()),
            email: self.email.clone().or_else(|| current.email.clone()),
            updated_at: current.updated_at.clone(),
            is_deleted: self.is_deleted.unwrap_or(current.is_deleted),
        }
    }
}
