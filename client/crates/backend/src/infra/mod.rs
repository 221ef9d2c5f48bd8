//! Infrastructure Layer
//!
//! Contains the HTTP implementation of [`crate::api::BackendApi`].

pub mod http;
