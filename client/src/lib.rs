//! Client core for the SDU Meow campus cat platform.
//!
//! The crate turns the loosely typed mock backend into typed values
//! ([`domain::ApiResult`], [`domain::ApiError`]), keeps the persisted
//! session consistent ([`domain::SessionStore`]), and decides role-gated
//! navigation ([`domain::require_role`]). HTTP and storage sit behind the
//! ports in [`domain::ports`], with adapters in [`outbound`].

pub mod api;
pub mod config;
pub mod domain;
pub mod outbound;
