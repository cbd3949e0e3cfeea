//! # Samples
//!
//! Concrete variant sets used to demonstrate the fabric, together with the thin wrapper
//! factories that map a domain enumeration onto factory positions.
//!
//! Wrappers check their selector up front and hand out [`vfab::Factory::error_slot`] for
//! anything outside of their enumeration, so callers never see a `BadIndex` failure.
//!
//! ```rust
//! use vfab_samples::pairs::{Pair, PairFactory, PairKind};
//!
//! let slot = PairFactory.create(PairKind::Scaled as usize, 1, 2);
//! assert!(slot.is_valid());
//! assert_eq!(slot.get().map(Pair::render).as_deref(), Ok("scaled (v1 = 10, v2 = 20)"));
//!
//! assert!(!PairFactory.create(7, 1, 2).is_valid());
//! ```

pub mod checked;
mod error;
pub mod pairs;
pub mod presets;

pub use error::{SampleError, SampleErrorExt};
