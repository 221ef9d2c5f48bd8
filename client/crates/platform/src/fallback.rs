//! Remote data with named fallback datasets
//!
//! Pages that must stay usable offline load their data through a
//! [`FallbackSource`]: the remote call is tried once and, on any error, a
//! named default dataset is returned instead. The failure is logged at `warn`
//! and reported to the caller only through [`Origin::Fallback`].

use std::fmt::Display;
use std::future::Future;

/// Where a dataset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fallback(&'static str),
}

impl Origin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Origin::Fallback(_))
    }
}

/// Data tagged with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub origin: Origin,
}

impl<T> Sourced<T> {
    pub fn remote(data: T) -> Self {
        Self {
            data,
            origin: Origin::Remote,
        }
    }

    /// Banner text for the page, if any
    pub fn notice(&self) -> Option<String> {
        match self.origin {
            Origin::Remote => None,
            Origin::Fallback(name) => Some(format!("Showing sample {name} (using defaults)")),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            data: f(self.data),
            origin: self.origin,
        }
    }
}

/// A dataset that can always be produced
#[derive(Debug, Clone, Copy)]
pub struct FallbackSource<T> {
    name: &'static str,
    default: fn() -> T,
}

impl<T> FallbackSource<T> {
    pub const fn new(name: &'static str, default: fn() -> T) -> Self {
        Self { name, default }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The default dataset itself
    pub fn default_data(&self) -> Sourced<T> {
        Sourced {
            data: (self.default)(),
            origin: Origin::Fallback(self.name),
        }
    }

    /// Await `remote`, falling back to the default dataset on error
    pub async fn load<F, E>(&self, remote: F) -> Sourced<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        match remote.await {
            Ok(data) => Sourced::remote(data),
            Err(e) => {
                tracing::warn!(dataset = self.name, error = %e, "Remote fetch failed, using defaults");
                self.default_data()
            }
        }
    }
}
