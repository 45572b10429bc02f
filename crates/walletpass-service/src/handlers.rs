//! Async contracts implemented by service integrators.
//!
//! The web service runs each request's bundle work on its own task and
//! imposes its own timeouts; these traits expose only the data exchange.
//! Implementations must be shareable across tasks (`Send + Sync`).

use crate::models::{LogEntries, PushToken, SerialNumbers};
use async_trait::async_trait;

/// Failure surface shared by all handlers.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// Requested pass is unknown to the backing store.
    #[error("pass not found: {pass_type_identifier}/{serial_number}")]
    PassNotFound {
        pass_type_identifier: String,
        serial_number: String,
    },

    /// The handler refused the operation.
    #[error("rejected: {reason}")]
    Rejected { reason: String },

    /// Backend failure inside the handler.
    #[error("handler failure: {message}")]
    Internal { message: String },
}

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Device registration and unregistration for pass update notifications.
#[async_trait]
pub trait PassRegistration: Send + Sync {
    async fn register_pass(
        &self,
        device_id: &str,
        pass_type_identifier: &str,
        serial_number: &str,
        push_token: &PushToken,
    ) -> HandlerResult<()>;

    async fn unregister_pass(
        &self,
        device_id: &str,
        pass_type_identifier: &str,
        serial_number: &str,
    ) -> HandlerResult<()>;
}

/// Pass content lookup backing pass creation and update delivery.
#[async_trait]
pub trait PassDataAcquisition: Send + Sync {
    /// Descriptor document for a pass, fresh (`update == false`) or as an
    /// update to an already-delivered pass.
    async fn get_pass_data(
        &self,
        pass_type_identifier: &str,
        serial_number: &str,
        update: bool,
    ) -> HandlerResult<Vec<u8>>;

    /// Serial numbers updated since the `since` tag (all when `None`).
    async fn get_update_serial_numbers(
        &self,
        device_id: &str,
        pass_type_identifier: &str,
        since: Option<&str>,
    ) -> HandlerResult<SerialNumbers>;

    /// Push tokens to notify about an updated pass.
    async fn get_push_tokens(
        &self,
        device_type_id: Option<&str>,
        pass_type_identifier: &str,
        serial_number: &str,
    ) -> HandlerResult<Vec<PushToken>>;
}

/// Per-pass-type credential lookup, overriding the static settings.
#[async_trait]
pub trait DynamicSettings: Send + Sync {
    /// PEM bytes of the signing private key for a pass type.
    async fn get_private_key(&self, pass_type_identifier: &str) -> HandlerResult<Vec<u8>>;

    /// PEM bytes of the signing certificate for a pass type.
    async fn get_pass_certificate(&self, pass_type_identifier: &str) -> HandlerResult<Vec<u8>>;
}

/// Sink for device log batches posted to the log endpoint.
#[async_trait]
pub trait Logging: Send + Sync {
    async fn log(&self, entries: &LogEntries) -> HandlerResult<()>;
}
