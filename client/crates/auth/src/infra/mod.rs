//! Infrastructure Layer
//!
//! Identity provider implementations.

pub mod static_provider;
pub mod token_provider;
