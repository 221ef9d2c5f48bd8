//! Application Layer
//!
//! Orchestrates the identity provider, local storage and the observable
//! auth state.

pub mod auth_session;
pub mod config;
pub mod guard;
pub mod guest_identity;
