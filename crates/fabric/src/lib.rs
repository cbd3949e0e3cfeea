//! Heap-free construction of one member out of a closed set of types.
//!
//! A *variant set* is an enum whose variants each wrap one concrete type. All members satisfy
//! a common interface (usually a trait object type) and share one constructor signature.
//! [`Factory`] builds the member selected by a runtime index or by a compile-time position and
//! returns it inside a [`Slot`]: an inline, fixed-size value holding either that member or an
//! explicit error marker. Nothing is allocated on the heap.
//!
//! ## Guarantees
//!
//! * A set whose members do not all satisfy the interface does not compile.
//! * An empty set does not compile.
//! * A compile-time position outside of the set does not compile.
//! * A runtime index outside of the set is reported as [`FabricError::BadIndex`] and produces no
//!   slot.
//! * Every slot holds a fully constructed member or the error marker. There is no empty state.
//!
//! ## Example
//!
//! ```rust
//! use std::convert::Infallible;
//! use vfab::prelude::*;
//!
//! trait Pair {
//!     fn fields(&self) -> (i32, i32);
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! struct Plain(i32, i32);
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! struct Scaled(i32, i32);
//!
//! impl Pair for Plain {
//!     fn fields(&self) -> (i32, i32) {
//!         (self.0, self.1)
//!     }
//! }
//!
//! impl Pair for Scaled {
//!     fn fields(&self) -> (i32, i32) {
//!         (self.0, self.1)
//!     }
//! }
//!
//! impl Construct<(i32, i32)> for Plain {
//!     type Error = Infallible;
//!     fn construct((a, b): (i32, i32)) -> Result<Self, Infallible> {
//!         Ok(Self(a, b))
//!     }
//! }
//!
//! impl Construct<(i32, i32)> for Scaled {
//!     type Error = Infallible;
//!     fn construct((a, b): (i32, i32)) -> Result<Self, Infallible> {
//!         Ok(Self(a * 10, b * 10))
//!     }
//! }
//!
//! #[variant_set(interface = dyn Pair, args = (i32, i32))]
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Pairs {
//!     Plain(Plain),
//!     Scaled(Scaled),
//! }
//!
//! # fn main() -> Result<(), FabricError> {
//! let slot = Factory::<Pairs>::create(1, (1, 2))?;
//! assert_eq!(slot.get()?.fields(), (10, 20));
//!
//! let fixed = Factory::<Pairs>::create_static::<0>((1, 2))?;
//! assert_eq!(fixed.get()?.fields(), (1, 2));
//!
//! let err = Factory::<Pairs>::create(2, (1, 2)).unwrap_err();
//! assert_eq!((err.index(), err.count()), (2, 2));
//! # Ok(())
//! # }
//! ```
//!
//! ## Rejected definitions
//!
//! A member that does not implement the interface:
//!
//! ```rust,compile_fail,E0277
//! use std::convert::Infallible;
//! use vfab::prelude::*;
//!
//! trait Speak {
//!     fn speak(&self) -> &'static str;
//! }
//!
//! struct Dog;
//! struct Rock;
//!
//! impl Speak for Dog {
//!     fn speak(&self) -> &'static str {
//!         "woof"
//!     }
//! }
//!
//! impl Construct<()> for Dog {
//!     type Error = Infallible;
//!     fn construct((): ()) -> Result<Self, Infallible> {
//!         Ok(Self)
//!     }
//! }
//!
//! impl Construct<()> for Rock {
//!     type Error = Infallible;
//!     fn construct((): ()) -> Result<Self, Infallible> {
//!         Ok(Self)
//!     }
//! }
//!
//! #[variant_set(interface = dyn Speak)]
//! enum Things {
//!     Dog(Dog),
//!     Rock(Rock),
//! }
//! ```
//!
//! A member with a different constructor signature:
//!
//! ```rust,compile_fail,E0277
//! use std::convert::Infallible;
//! use vfab::prelude::*;
//!
//! trait Speak {
//!     fn speak(&self) -> &'static str;
//! }
//!
//! struct Dog;
//!
//! impl Speak for Dog {
//!     fn speak(&self) -> &'static str {
//!         "woof"
//!     }
//! }
//!
//! impl Construct<(u8,)> for Dog {
//!     type Error = Infallible;
//!     fn construct(_: (u8,)) -> Result<Self, Infallible> {
//!         Ok(Self)
//!     }
//! }
//!
//! #[variant_set(interface = dyn Speak, args = ())]
//! enum Things {
//!     Dog(Dog),
//! }
//! ```
//!
//! An empty set:
//!
//! ```rust,compile_fail
//! use vfab::prelude::*;
//!
//! trait Speak {
//!     fn speak(&self) -> &'static str;
//! }
//!
//! #[variant_set(interface = dyn Speak)]
//! enum Nothing {}
//! ```
//!
//! A compile-time position outside of the set:
//!
//! ```rust,compile_fail,E0277
//! use std::convert::Infallible;
//! use vfab::prelude::*;
//!
//! trait Speak {
//!     fn speak(&self) -> &'static str;
//! }
//!
//! struct Dog;
//!
//! impl Speak for Dog {
//!     fn speak(&self) -> &'static str {
//!         "woof"
//!     }
//! }
//!
//! impl Construct<()> for Dog {
//!     type Error = Infallible;
//!     fn construct((): ()) -> Result<Self, Infallible> {
//!         Ok(Self)
//!     }
//! }
//!
//! #[variant_set(interface = dyn Speak)]
//! enum Things {
//!     Dog(Dog),
//! }
//!
//! let _ = Factory::<Things>::create_static::<1>(());
//! ```

mod error;
mod factory;
mod set;
mod slot;
#[cfg(test)]
mod testing;

pub use error::{FabricError, FabricErrorExt};
pub use factory::Factory;
pub use set::{Construct, Constructor, VariantAt, VariantSet};
pub use slot::{ErrorMarker, Occupant, Slot};
pub use vfab_derive::{fabric_error, variant_set};

pub mod prelude {
    pub use crate::error::{FabricError, FabricErrorExt};
    pub use crate::factory::Factory;
    pub use crate::set::{Construct, VariantAt, VariantSet};
    pub use crate::slot::{Occupant, Slot};
    pub use vfab_derive::variant_set;
}
