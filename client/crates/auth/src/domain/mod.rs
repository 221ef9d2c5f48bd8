//! Domain Layer
//!
//! This layer contains:
//! - Value objects (Email, UserRole)
//! - User and session entities
//! - The observable auth state
//! - The identity provider trait (interface)

pub mod provider;
pub mod session;
pub mod state;
pub mod user;
pub mod value_object;
