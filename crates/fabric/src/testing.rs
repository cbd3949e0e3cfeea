//! A hand-written variant set for unit tests inside the crate.

use crate::error::FabricError;
use crate::set::{Construct, Constructor, VariantAt, VariantSet};
use std::convert::Infallible;

pub(crate) trait Reading {
    fn value(&self) -> i64;
    fn adjust(&mut self, by: i64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Plain(i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Doubled(i64);

impl Plain {
    pub(crate) const fn new(value: i64) -> Self {
        Self(value)
    }
}

impl Doubled {
    pub(crate) const fn new(value: i64) -> Self {
        Self(value * 2)
    }
}

impl Reading for Plain {
    fn value(&self) -> i64 {
        self.0
    }

    fn adjust(&mut self, by: i64) {
        self.0 += by;
    }
}

impl Reading for Doubled {
    fn value(&self) -> i64 {
        self.0
    }

    fn adjust(&mut self, by: i64) {
        self.0 += by * 2;
    }
}

impl Construct<i64> for Plain {
    type Error = Infallible;

    fn construct(value: i64) -> Result<Self, Infallible> {
        Ok(Self::new(value))
    }
}

impl Construct<i64> for Doubled {
    type Error = Infallible;

    fn construct(value: i64) -> Result<Self, Infallible> {
        Ok(Self::new(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Readings {
    Plain(Plain),
    Doubled(Doubled),
}

impl VariantSet for Readings {
    type Interface = dyn Reading;
    type Args = i64;
    type Error = FabricError;

    const NAMES: &'static [&'static str] = &["Plain", "Doubled"];
    const CONSTRUCTORS: &'static [Constructor<Self>] =
        &[<Self as VariantAt<0>>::construct_at, <Self as VariantAt<1>>::construct_at];

    fn as_interface(&self) -> &Self::Interface {
        match self {
            Self::Plain(v) => v,
            Self::Doubled(v) => v,
        }
    }

    fn as_interface_mut(&mut self) -> &mut Self::Interface {
        match self {
            Self::Plain(v) => v,
            Self::Doubled(v) => v,
        }
    }
}

impl VariantAt<0> for Readings {
    type Variant = Plain;

    fn wrap(variant: Plain) -> Self {
        Self::Plain(variant)
    }
}

impl VariantAt<1> for Readings {
    type Variant = Doubled;

    fn wrap(variant: Doubled) -> Self {
        Self::Doubled(variant)
    }
}
