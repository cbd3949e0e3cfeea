//! Two-value pairs and the factory that selects between them.

use std::convert::Infallible;
use std::fmt::Debug;
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, FromRepr};
use tracing::debug;
use vfab::prelude::*;

/// Interface shared by every member of [`PairVariants`].
pub trait Pair: Debug {
    fn first(&self) -> i32;
    fn second(&self) -> i32;
    fn label(&self) -> &'static str;

    fn render(&self) -> String {
        format!("{} (v1 = {}, v2 = {})", self.label(), self.first(), self.second())
    }
}

/// Keeps both values as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainPair {
    v1: i32,
    v2: i32,
}

impl PlainPair {
    #[must_use]
    pub const fn new(v1: i32, v2: i32) -> Self {
        Self { v1, v2 }
    }
}

impl Pair for PlainPair {
    fn first(&self) -> i32 {
        self.v1
    }

    fn second(&self) -> i32 {
        self.v2
    }

    fn label(&self) -> &'static str {
        "plain"
    }
}

impl Construct<(i32, i32)> for PlainPair {
    type Error = Infallible;

    fn construct((v1, v2): (i32, i32)) -> Result<Self, Infallible> {
        Ok(Self::new(v1, v2))
    }
}

/// Stores both values multiplied by ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledPair {
    v1: i32,
    v2: i32,
}

impl ScaledPair {
    pub const FACTOR: i32 = 10;

    #[must_use]
    pub const fn new(v1: i32, v2: i32) -> Self {
        Self { v1: v1.wrapping_mul(Self::FACTOR), v2: v2.wrapping_mul(Self::FACTOR) }
    }
}

impl Pair for ScaledPair {
    fn first(&self) -> i32 {
        self.v1
    }

    fn second(&self) -> i32 {
        self.v2
    }

    fn label(&self) -> &'static str {
        "scaled"
    }
}

impl Construct<(i32, i32)> for ScaledPair {
    type Error = Infallible;

    fn construct((v1, v2): (i32, i32)) -> Result<Self, Infallible> {
        Ok(Self::new(v1, v2))
    }
}

#[variant_set(interface = dyn Pair, args = (i32, i32))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairVariants {
    Plain(PlainPair),
    Scaled(ScaledPair),
}

/// Selector for [`PairFactory`]. Discriminants are factory positions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCountMacro, FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
pub enum PairKind {
    Plain = 0,
    Scaled = 1,
}

const _: () = assert!(PairKind::COUNT == <PairVariants as VariantSet>::COUNT);

/// Builds [`PairVariants`] slots from a raw selector or a [`PairKind`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PairFactory;

impl PairFactory {
    /// Builds the pair chosen by `selector`.
    ///
    /// A selector outside of [`PairKind`] yields the error slot instead of an error.
    #[must_use]
    pub fn create(self, selector: usize, v1: i32, v2: i32) -> Slot<PairVariants> {
        if selector >= PairKind::COUNT {
            debug!(selector, "Pair selector out of range");
            return Factory::error_slot();
        }

        Factory::create(selector, (v1, v2)).unwrap_or_else(|_| Factory::error_slot())
    }

    #[must_use]
    pub fn create_kind(self, kind: PairKind, v1: i32, v2: i32) -> Slot<PairVariants> {
        let built = match kind {
            PairKind::Plain => Factory::create_static::<0>((v1, v2)),
            PairKind::Scaled => Factory::create_static::<1>((v1, v2)),
        };
        built.unwrap_or_else(|_| Factory::error_slot())
    }
}
