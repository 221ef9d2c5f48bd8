//! Infrastructure Layer

pub mod backend_source;
