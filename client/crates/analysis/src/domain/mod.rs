//! Domain Layer

pub mod banner;
pub mod input;
pub mod tab;
pub mod validation;
