//! Application Layer

pub mod config;
pub mod current;
pub mod form;
pub mod submit;
