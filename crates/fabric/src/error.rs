//! # Fabric Errors
//!
//! This module defines the [`FabricError`] enum reported by the factory and by slot access.

use std::borrow::Cow;
use std::convert::Infallible;

/// The single error family of the fabric.
///
/// `BadIndex` covers both a runtime index at or beyond the variant count and access to a slot
/// whose occupant is the error marker. In the latter case `index` equals `count`, which is the
/// tag of the error marker.
#[vfab_derive::fabric_error]
#[derive(Clone, PartialEq, Eq)]
pub enum FabricError {
    /// No variant exists at the requested position.
    #[error(
        "Bad variant index{}: {index} is not below the variant count {count}",
        format_context(.context)
    )]
    BadIndex { index: usize, count: usize, context: Option<Cow<'static, str>> },
}

impl FabricError {
    pub(crate) const fn bad_index(index: usize, count: usize) -> Self {
        Self::BadIndex { index, count, context: None }
    }

    /// The requested position.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::BadIndex { index, .. } => *index,
        }
    }

    /// The number of variants in the set the request was made against.
    #[must_use]
    pub const fn count(&self) -> usize {
        match self {
            Self::BadIndex { count, .. } => *count,
        }
    }
}

impl From<Infallible> for FabricError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
