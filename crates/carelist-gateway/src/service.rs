//! Patient service: wires the gateway to the cache store.
//!
//! Owns both, constructed at session start. Every successful mutation
//! patches the cache in place through its success callbacks instead of
//! re-fetching the list. Callers must sequence mutations for the same
//! id themselves; the cache is last-write-wins.

use carelist_core::models::{Patient, PatientDraft, PatientUpdate};
use carelist_core::schema::FieldErrors;
use carelist_core::PatientCache;

use crate::gateway::{ApiResult, GatewayError, PatientGateway};
use crate::transport::Transport;

pub struct PatientService<T: Transport> {
    gateway: PatientGateway<T>,
    cache: PatientCache,
}

impl<T: Transport> PatientService<T> {
    pub fn new(gateway: PatientGateway<T>) -> Self {
        Self {
            gateway,
            cache: PatientCache::new(),
        }
    }

    // ── Cache-backed readers ─────────────────────────────

    /// The cached list; empty until the first successful refresh.
    pub fn patients(&self) -> &[Patient] {
        self.cache.list()
    }

    /// A single record: detail cache first, then the list.
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.cache.find(id)
    }

    pub fn cache(&self) -> &PatientCache {
        &self.cache
    }

    // ── Mutations ────────────────────────────────────────

    /// Re-fetch the list from the remote API and replace the cache.
    pub async fn refresh(&mut self) -> ApiResult<&[Patient]> {
        let patients = self.gateway.list().await?;
        self.cache.set_list(patients);
        Ok(self.cache.list())
    }

    pub async fn create(&mut self, draft: PatientDraft) -> ApiResult<Patient> {
        let patient = self.gateway.create(draft).await?;
        self.cache.on_create_success(patient.clone());
        Ok(patient)
    }

    /// Read-merge-write update: the current record comes from the
    /// cache. An unknown id fails before any transport work, shaped as
    /// a field error so forms can surface it like any other rejection.
    pub async fn update(&mut self, id: &str, changes: PatientUpdate) -> ApiResult<Patient> {
        let current = self.cache.find(id).cloned().ok_or_else(|| {
            GatewayError::Validation(FieldErrors::general(format!("no patient with id {id}")))
        })?;

        let patient = self.gateway.update(&current, &changes).await?;
        self.cache.on_update_success(patient.clone());
        Ok(patient)
    }

    pub async fn delete(&mut self, id: &str) -> ApiResult<String> {
        let deleted = self.gateway.delete(id).await?;
        self.cache.on_delete_success(&deleted);
        Ok(deleted)
    }
}
