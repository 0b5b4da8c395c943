//! Carelist Core Library
//!
//! Client-side core for a patient-record manager: schema validation,
//! an in-memory cache mirroring server state, and the overlay (drawer)
//! state machine driving the create/edit/detail panels.
//!
//! # Data flow
//!
//! ```text
//! UI action → gateway call (carelist-gateway)
//!                  │
//!          [schema::validate]  ── field errors back to the form
//!                  │
//!          success callbacks ──► PatientCache (list + detail entries)
//!                  │
//!          presentation re-renders from the cache
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, PatientDraft, PatientUpdate)
//! - [`schema`]: Rule-table validation with canonical date rewriting
//! - [`cache`]: Session-lifetime list + detail cache
//! - [`drawer`]: Single-slot overlay state machine (pure reducer)

pub mod cache;
pub mod drawer;
pub mod models;
pub mod schema;

// Re-export commonly used types
pub use cache::PatientCache;
pub use drawer::{reduce, Drawer, DrawerAction, DrawerContent, DrawerSize, DrawerState};
pub use models::{now_iso, Patient, PatientDraft, PatientUpdate};
pub use schema::{validate, validate_record, FieldErrors, GENERAL};
