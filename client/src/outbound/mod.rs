//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed [`crate::domain::ports::ApiTransport`]
//! - **storage**: directory-backed and in-memory
//!   [`crate::domain::ports::StateStorage`]
//!
//! Adapters are thin translators between domain types and library types.
//! They contain no classification or session logic.

pub mod http;
pub mod storage;
