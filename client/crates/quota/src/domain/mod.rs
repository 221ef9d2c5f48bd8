//! Domain Layer
//!
//! Pure quota logic: no I/O, no clocks.

pub mod guest_session;
pub mod prompt;
pub mod source;
pub mod state;
