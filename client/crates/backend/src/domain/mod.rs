//! Domain Layer - Wire models
//!
//! This layer contains:
//! - Check request/response models
//! - Guest session model
//! - Upload and OCR models
//! - Page content models (learning, community, dashboard, admin)

pub mod check;
pub mod content;
pub mod guest;
pub mod upload;
