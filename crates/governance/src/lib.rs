//! Signer-set and admin governance for the quorum update engine.
//!
//! The two aggregates in this crate own the trust parameters of the engine:
//! [`SignerRegistry`] holds the signer set and the confirmation threshold,
//! [`Authority`] holds the single admin identity gating privileged mutations.
//! Neither performs any authorization on its own mutators beyond its local
//! invariants; the coordinator calls [`Authority::require_admin`] before
//! delegating.

pub use authority::Authority;
mod authority;

pub use error::GovernanceError;
mod error;

pub use registry::SignerRegistry;
mod registry;
