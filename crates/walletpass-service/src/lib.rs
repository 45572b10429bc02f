//! Collaborator interfaces for the pass web service.
//!
//! The bundle core treats everything around it — registration storage, pass
//! data acquisition, log ingestion, per-pass-type credential lookup — as
//! pluggable handlers behind async traits. Handlers are wired up explicitly
//! at startup through [`HandlerRegistry`]; there is no runtime discovery.

pub mod handlers;
pub mod models;
pub mod registry;

// Convenience re-exports
pub use handlers::{
    DynamicSettings, HandlerError, HandlerResult, Logging, PassDataAcquisition, PassRegistration,
};
pub use models::{
    LogEntries, PersonalizationDictionary, PushToken, RequiredPersonalizationInfo, SerialNumbers,
};
pub use registry::{HandlerRegistry, RegistryError};
