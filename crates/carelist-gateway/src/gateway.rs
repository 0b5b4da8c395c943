//! Remote patient gateway.
//!
//! Four operations behind a uniform result type. `list` fetches and
//! validates real records; `create`, `update` and `delete` simulate
//! persistence locally behind a fixed latency, since the mock API has
//! no write endpoints. Validation failures never cross this boundary
//! as panics or opaque errors.

use carelist_core::models::{now_iso, Patient, PatientDraft, PatientUpdate};
use carelist_core::schema;
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::transport::{HttpTransport, Transport, TransportError};

/// Gateway failures: exactly one variant describes each failed call.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// One or more fields failed schema constraints. Recoverable;
    /// surfaced to the caller as form-field errors.
    #[error("invalid patient data: {0}")]
    Validation(schema::FieldErrors),

    /// Network failure or non-success HTTP status.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl GatewayError {
    /// Field errors, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&schema::FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Transport(_) => None,
        }
    }
}

pub type ApiResult<T> = Result<T, GatewayError>;

/// The remote patient gateway. Stateless: it holds no record data,
/// only the transport and its configuration.
pub struct PatientGateway<T: Transport> {
    transport: T,
    config: GatewayConfig,
}

impl PatientGateway<HttpTransport> {
    /// Gateway over a real HTTP transport.
    pub fn over_http(config: GatewayConfig) -> Self {
        let transport = HttpTransport::new(config.base_url.clone());
        Self::new(transport, config)
    }
}

impl<T: Transport> PatientGateway<T> {
    pub fn new(transport: T, config: GatewayConfig) -> Self {
        Self { transport, config }
    }

    /// Fetch all patients.
    ///
    /// Every raw record runs through the schema validator; records
    /// that fail are dropped with a warning, never a hard error. An
    /// HTTP-level failure yields a transport error with no data.
    pub async fn list(&self) -> ApiResult<Vec<Patient>> {
        let raw = self.transport.fetch_users().await?;

        let mut patients = Vec::with_capacity(raw.len());
        for value in raw {
            match schema::validate(&value) {
                Ok(patient) => patients.push(patient),
                Err(errors) => warn!(%errors, "dropping invalid patient record"),
            }
        }
        debug!(count = patients.len(), "fetched patient list");
        Ok(patients)
    }

    /// Create a patient: assign a fresh id and timestamp, validate the
    /// composed record, return it as though persisted.
    pub async fn create(&self, draft: PatientDraft) -> ApiResult<Patient> {
        self.simulate_latency().await;

        let candidate = Patient::from_draft(draft);
        schema::validate_record(&candidate).map_err(GatewayError::Validation)
    }

    /// Update a patient, read-merge-write style: the caller supplies
    /// the current record, the partial update is merged over it, and
    /// `updatedAt` is stamped with now. `id` and `createdAt` survive
    /// untouched by construction.
    pub async fn update(&self, current: &Patient, changes: &PatientUpdate) -> ApiResult<Patient> {
        self.simulate_latency().await;

        let mut merged = changes.apply(current);
        merged.updated_at = Some(now_iso());
        schema::validate_record(&merged).map_err(GatewayError::Validation)
    }

    /// Delete a patient remotely; returns the id on success.
    pub async fn delete(&self, id: &str) -> ApiResult<String> {
        self.simulate_latency().await;

        debug!(%id, "deleted patient");
        Ok(id.to_owned())
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }
}
