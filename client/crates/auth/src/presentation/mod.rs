//! Presentation Layer
//!
//! View models shown by the host for auth failures.

pub mod error_page;
