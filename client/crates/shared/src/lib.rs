//! Shared Kernel - Client-wide minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by every
//! client crate:
//! - Common error types, result aliases and the user-facing error taxonomy
//! - Typed identifiers (guest ids, check ids)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all pages.

pub mod error {
    pub mod app_error;
    pub mod category;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
