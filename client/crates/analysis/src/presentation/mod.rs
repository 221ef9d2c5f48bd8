//! Presentation Layer

pub mod result_view;
