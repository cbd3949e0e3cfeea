//! A pair set with a fallible member.

use crate::error::SampleError;
use crate::pairs::{Pair, PlainPair};
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, FromRepr};
use tracing::debug;
use vfab::prelude::*;

/// Largest magnitude accepted by [`BoundedPair`].
pub const BOUND_LIMIT: i32 = 1000;

/// A pair that refuses values whose magnitude exceeds [`BOUND_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedPair {
    v1: i32,
    v2: i32,
}

impl BoundedPair {
    /// # Errors
    /// [`SampleError::OutOfRange`] for the first value outside of `-BOUND_LIMIT..=BOUND_LIMIT`.
    pub fn new(v1: i32, v2: i32) -> Result<Self, SampleError> {
        for (value, name) in [(v1, "v1"), (v2, "v2")] {
            if value.unsigned_abs() > BOUND_LIMIT.unsigned_abs() {
                return Err(SampleError::OutOfRange {
                    value,
                    limit: BOUND_LIMIT,
                    context: Some(name.into()),
                });
            }
        }
        Ok(Self { v1, v2 })
    }
}

impl Pair for BoundedPair {
    fn first(&self) -> i32 {
        self.v1
    }

    fn second(&self) -> i32 {
        self.v2
    }

    fn label(&self) -> &'static str {
        "bounded"
    }
}

impl Construct<(i32, i32)> for BoundedPair {
    type Error = SampleError;

    fn construct((v1, v2): (i32, i32)) -> Result<Self, SampleError> {
        Self::new(v1, v2)
    }
}

#[variant_set(interface = dyn Pair, args = (i32, i32), error = SampleError)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedVariants {
    Plain(PlainPair),
    Bounded(BoundedPair),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCountMacro, FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
pub enum CheckedKind {
    Plain = 0,
    Bounded = 1,
}

const _: () = assert!(CheckedKind::COUNT == <CheckedVariants as VariantSet>::COUNT);

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedFactory;

impl CheckedFactory {
    /// Builds the pair chosen by `selector`, or the error slot when there is none.
    ///
    /// # Errors
    /// Only a constructor rejection such as [`SampleError::OutOfRange`]. An unknown selector is
    /// not an error.
    pub fn create(self, selector: usize, v1: i32, v2: i32) -> Result<Slot<CheckedVariants>, SampleError> {
        if selector >= CheckedKind::COUNT {
            debug!(selector, "Checked selector out of range");
            return Ok(Factory::error_slot());
        }

        Factory::create(selector, (v1, v2))
    }

    /// # Errors
    /// Only a constructor rejection.
    pub fn create_kind(
        self,
        kind: CheckedKind,
        v1: i32,
        v2: i32,
    ) -> Result<Slot<CheckedVariants>, SampleError> {
        match kind {
            CheckedKind::Plain => Factory::create_static::<0>((v1, v2)),
            CheckedKind::Bounded => Factory::create_static::<1>((v1, v2)),
        }
    }
}
