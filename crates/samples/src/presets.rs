//! Argument-free presets.

use std::convert::Infallible;
use std::fmt::Debug;
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, FromRepr};
use tracing::debug;
use vfab::prelude::*;

pub trait Preset: Debug {
    fn value(&self) -> i32;
    fn label(&self) -> &'static str;

    fn render(&self) -> String {
        format!("{} v = {}", self.label(), self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenPreset {
    value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwentyPreset {
    value: i32,
}

impl Preset for TenPreset {
    fn value(&self) -> i32 {
        self.value
    }

    fn label(&self) -> &'static str {
        "ten"
    }
}

impl Preset for TwentyPreset {
    fn value(&self) -> i32 {
        self.value
    }

    fn label(&self) -> &'static str {
        "twenty"
    }
}

impl Construct<()> for TenPreset {
    type Error = Infallible;

    fn construct((): ()) -> Result<Self, Infallible> {
        Ok(Self { value: 10 })
    }
}

impl Construct<()> for TwentyPreset {
    type Error = Infallible;

    fn construct((): ()) -> Result<Self, Infallible> {
        Ok(Self { value: 20 })
    }
}

#[variant_set(interface = dyn Preset)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetVariants {
    Ten(TenPreset),
    Twenty(TwentyPreset),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCountMacro, FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
pub enum PresetKind {
    Ten = 0,
    Twenty = 1,
}

const _: () = assert!(PresetKind::COUNT == <PresetVariants as VariantSet>::COUNT);

#[derive(Debug, Clone, Copy, Default)]
pub struct PresetFactory;

impl PresetFactory {
    /// Builds the preset chosen by `selector`, or the error slot when there is none.
    #[must_use]
    pub fn create(self, selector: usize) -> Slot<PresetVariants> {
        if selector >= PresetKind::COUNT {
            debug!(selector, "Preset selector out of range");
            return Factory::error_slot();
        }

        Factory::create(selector, ()).unwrap_or_else(|_| Factory::error_slot())
    }

    #[must_use]
    pub fn create_kind(self, kind: PresetKind) -> Slot<PresetVariants> {
        let built = match kind {
            PresetKind::Ten => Factory::create_static::<0>(()),
            PresetKind::Twenty => Factory::create_static::<1>(()),
        };
        built.unwrap_or_else(|_| Factory::error_slot())
    }
}
