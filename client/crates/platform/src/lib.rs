//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the client's technical foundations:
//! - Client-local persisted storage (guest id, bookmarks, cached profile)
//! - HTTP transport for the analysis backend
//! - Process-wide observable stores (auth state, theme)
//! - Remote data sources with named fallback datasets
//! - Download and clipboard sinks for result export

pub mod clipboard;
pub mod download;
pub mod fallback;
pub mod http;
pub mod observable;
pub mod storage;
