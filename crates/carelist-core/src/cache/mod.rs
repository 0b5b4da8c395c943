//! In-memory patient cache.
//!
//! Mirrors server state across the list view and per-id detail views.
//! The cache is an explicitly owned object: constructed at session
//! start, handed by reference to consumers, dropped at session end.
//! It is mutated only by the success callbacks of gateway operations,
//! never re-fetched wholesale after a mutation.
//!
//! Invariant: after any successful mutation, a list entry and a detail
//! entry for the same id are equal whenever both exist.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::Patient;

/// Session-lifetime cache: the patient list plus per-id detail entries.
#[derive(Debug, Default)]
pub struct PatientCache {
    /// `None` until the first successful list fetch.
    list: Option<Vec<Patient>>,
    details: HashMap<String, Patient>,
}

impl PatientCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Readers ──────────────────────────────────────────

    /// Whether a list has ever been fetched into the cache.
    pub fn is_fetched(&self) -> bool {
        self.list.is_some()
    }

    /// The cached list; empty until the first fetch.
    pub fn list(&self) -> &[Patient] {
        self.list.as_deref().unwrap_or_default()
    }

    /// The detail entry for an id, if one has been cached.
    pub fn detail(&self, id: &str) -> Option<&Patient> {
        self.details.get(id)
    }

    /// Look up a record by id: detail cache first, then the list.
    pub fn find(&self, id: &str) -> Option<&Patient> {
        self.details
            .get(id)
            .or_else(|| self.list().iter().find(|p| p.id == id))
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    // ── Synchronization callbacks ────────────────────────

    /// Replace the cached list after a successful fetch.
    ///
    /// Detail entries that reappear in the fresh list are refreshed,
    /// and entries for ids the server no longer returns are evicted,
    /// so the two views cannot drift apart on a refetch.
    pub fn set_list(&mut self, patients: Vec<Patient>) {
        self.details
            .retain(|id, _| patients.iter().any(|p| p.id == *id));
        for patient in &patients {
            if self.details.contains_key(&patient.id) {
                self.details.insert(patient.id.clone(), patient.clone());
            }
        }
        debug!(count = patients.len(), "cached patient list");
        self.list = Some(patients);
    }

    /// Append a newly created record to the list without re-fetching.
    ///
    /// Ids are unique within the cache, so a duplicate replaces the
    /// existing entry instead of appending.
    pub fn on_create_success(&mut self, patient: Patient) {
        let list = self.list.get_or_insert_with(Vec::new);
        if let Some(existing) = list.iter_mut().find(|p| p.id == patient.id) {
            warn!(id = %patient.id, "created patient already cached, replacing");
            *existing = patient.clone();
            self.details.insert(patient.id.clone(), patient);
        } else {
            debug!(id = %patient.id, "appended created patient to cache");
            // A detail entry may already exist for this id; keep it in
            // step with the list so the two views cannot diverge.
            if self.details.contains_key(&patient.id) {
                self.details.insert(patient.id.clone(), patient.clone());
            }
            list.push(patient);
        }
    }

    /// Replace the list entry and the detail entry for an updated record.
    ///
    /// Both views are patched before any reader can observe either, so
    /// the mutation is atomic from the caller's perspective. An id with
    /// no list entry still gets its detail entry written.
    pub fn on_update_success(&mut self, patient: Patient) {
        if let Some(list) = self.list.as_mut() {
            if let Some(entry) = list.iter_mut().find(|p| p.id == patient.id) {
                *entry = patient.clone();
            }
        }
        debug!(id = %patient.id, "patched cache after update");
        self.details.insert(patient.id.clone(), patient);
    }

    /// Drop the list entry and evict the detail entry for a deleted id.
    pub fn on_delete_success(&mut self, id: &str) {
        if let Some(list) = self.list.as_mut() {
            list.retain(|p| p.id != id);
        }
        self.details.remove(id);
        debug!(%id, "evicted deleted patient from cache");
    }

    /// Drop everything. Session teardown only; there is no TTL.
    pub fn clear(&mut self) {
        self.list = None;
        self.details.clear();
    }
}
