#![allow(dead_code)]

use std::borrow::Cow;
use std::convert::Infallible;
use vfab::prelude::*;

// --- Two-field pairs ---

pub trait Fields {
    fn fields(&self) -> (i32, i32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kept {
    a: i32,
    b: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenfold {
    a: i32,
    b: i32,
}

impl Fields for Kept {
    fn fields(&self) -> (i32, i32) {
        (self.a, self.b)
    }
}

impl Fields for Tenfold {
    fn fields(&self) -> (i32, i32) {
        (self.a, self.b)
    }
}

impl Construct<(i32, i32)> for Kept {
    type Error = Infallible;

    fn construct((a, b): (i32, i32)) -> Result<Self, Infallible> {
        Ok(Self { a, b })
    }
}

impl Construct<(i32, i32)> for Tenfold {
    type Error = Infallible;

    fn construct((a, b): (i32, i32)) -> Result<Self, Infallible> {
        Ok(Self { a: a.wrapping_mul(10), b: b.wrapping_mul(10) })
    }
}

#[variant_set(interface = dyn Fields, args = (i32, i32))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairs {
    Kept(Kept),
    Tenfold(Tenfold),
}

// --- Single member ---

#[variant_set(interface = dyn Fields, args = (i32, i32))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solo {
    Kept(Kept),
}

// --- Five members, the same type listed twice ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negated {
    a: i32,
    b: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swapped {
    a: i32,
    b: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summed {
    sum: i32,
}

impl Fields for Negated {
    fn fields(&self) -> (i32, i32) {
        (self.a, self.b)
    }
}

impl Fields for Swapped {
    fn fields(&self) -> (i32, i32) {
        (self.a, self.b)
    }
}

impl Fields for Summed {
    fn fields(&self) -> (i32, i32) {
        (self.sum, 0)
    }
}

impl Construct<(i32, i32)> for Negated {
    type Error = Infallible;

    fn construct((a, b): (i32, i32)) -> Result<Self, Infallible> {
        Ok(Self { a: a.wrapping_neg(), b: b.wrapping_neg() })
    }
}

impl Construct<(i32, i32)> for Swapped {
    type Error = Infallible;

    fn construct((a, b): (i32, i32)) -> Result<Self, Infallible> {
        Ok(Self { a: b, b: a })
    }
}

impl Construct<(i32, i32)> for Summed {
    type Error = Infallible;

    fn construct((a, b): (i32, i32)) -> Result<Self, Infallible> {
        Ok(Self { sum: a.wrapping_add(b) })
    }
}

#[variant_set(interface = dyn Fields, args = (i32, i32))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mixed {
    First(Kept),
    Negated(Negated),
    Swapped(Swapped),
    Summed(Summed),
    Last(Kept),
}

/// Builds position `index` of [`Mixed`] without the factory.
pub fn direct_fields(index: usize, (a, b): (i32, i32)) -> (i32, i32) {
    match index {
        0 | 4 => (a, b),
        1 => (a.wrapping_neg(), b.wrapping_neg()),
        2 => (b, a),
        3 => (a.wrapping_add(b), 0),
        _ => unreachable!("Mixed has five members"),
    }
}

// --- Counters: no arguments, mutable interface, not Copy ---

pub trait Counter {
    fn count(&self) -> u32;
    fn bump(&mut self);
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Single {
    hits: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Labelled {
    label: String,
    hits: u32,
}

impl Counter for Single {
    fn count(&self) -> u32 {
        self.hits
    }

    fn bump(&mut self) {
        self.hits += 1;
    }
}

impl Counter for Labelled {
    fn count(&self) -> u32 {
        self.hits
    }

    fn bump(&mut self) {
        self.hits += 10;
    }
}

impl Construct<()> for Single {
    type Error = Infallible;

    fn construct((): ()) -> Result<Self, Infallible> {
        Ok(Self::default())
    }
}

impl Construct<()> for Labelled {
    type Error = Infallible;

    fn construct((): ()) -> Result<Self, Infallible> {
        Ok(Self { label: "labelled".to_owned(), hits: 100 })
    }
}

#[variant_set(interface = dyn Counter)]
#[derive(Debug, PartialEq, Eq)]
pub enum Counters {
    Single(Single),
    Labelled(Labelled),
}

// --- Gauges: a member with a fallible constructor and a custom error ---

#[vfab::fabric_error]
#[derive(PartialEq, Eq)]
pub enum GaugeError {
    #[error("Negative reading{}: {value}", format_context(.context))]
    Negative { value: i64, context: Option<Cow<'static, str>> },

    #[error("Fabric error{}: {source}", format_context(.context))]
    Fabric { source: FabricError, context: Option<Cow<'static, str>> },
}

impl From<Infallible> for GaugeError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub trait Reading {
    fn level(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gauge(i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset(i64);

impl Reading for Gauge {
    fn level(&self) -> i64 {
        self.0
    }
}

impl Reading for Offset {
    fn level(&self) -> i64 {
        self.0
    }
}

impl Construct<(i64,)> for Gauge {
    type Error = GaugeError;

    fn construct((value,): (i64,)) -> Result<Self, GaugeError> {
        if value < 0 {
            return Err(GaugeError::Negative { value, context: Some("gauge".into()) });
        }
        Ok(Self(value))
    }
}

impl Construct<(i64,)> for Offset {
    type Error = Infallible;

    fn construct((value,): (i64,)) -> Result<Self, Infallible> {
        Ok(Self(value - 100))
    }
}

#[variant_set(interface = dyn Reading, args = (i64,), error = GaugeError)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gauges {
    Gauge(Gauge),
    Offset(Offset),
}
