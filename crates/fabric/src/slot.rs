use crate::error::FabricError;
use crate::set::VariantSet;

/// The distinguished member a [`Slot`] holds when no variant was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ErrorMarker;

/// The inline sum stored by a [`Slot`]: one member of the set, or the error marker.
///
/// Every value of this type is one of exactly `COUNT + 1` states, so even the raw escape hatch
/// cannot leave a slot empty or half built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant<S> {
    /// A constructed member of the set.
    Variant(S),
    /// The error marker.
    Error(ErrorMarker),
}

impl<S> Occupant<S> {
    /// Returns `true` for the error marker.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the active member, if any.
    #[must_use]
    pub const fn as_variant(&self) -> Option<&S> {
        match self {
            Self::Variant(variant) => Some(variant),
            Self::Error(_) => None,
        }
    }
}

/// A tagged, fixed-size slot holding exactly one member of `S` or the error marker.
///
/// Slots are produced only by [`crate::Factory`]. They copy, move and drop like any other value;
/// copying a slot copies its single active member.
///
/// # Example
///
/// ```rust
/// # use std::convert::Infallible;
/// use vfab::prelude::*;
///
/// trait Named {
///     fn name(&self) -> String;
/// }
///
/// #[derive(Debug, Clone)]
/// struct Greeting(String);
///
/// impl Named for Greeting {
///     fn name(&self) -> String {
///         format!("hello {}", self.0)
///     }
/// }
///
/// impl Construct<(String,)> for Greeting {
///     type Error = Infallible;
///     fn construct((who,): (String,)) -> Result<Self, Infallible> {
///         Ok(Self(who))
///     }
/// }
///
/// #[variant_set(interface = dyn Named, args = (String,))]
/// #[derive(Debug, Clone)]
/// enum Greetings {
///     Hello(Greeting),
/// }
///
/// # fn main() -> Result<(), FabricError> {
/// let slot = Factory::<Greetings>::create(0, ("Ada".to_owned(),))?;
/// assert!(slot.is_valid());
/// assert_eq!(slot.get()?.name(), "hello Ada");
///
/// let empty = Factory::<Greetings>::error_slot();
/// assert!(!empty.is_valid());
/// assert!(empty.get().is_err());
/// # Ok(())
/// # }
/// ```
///
/// A slot is `Send` and `Sync` exactly when its set is. A set holding an `Rc` stays on its
/// thread:
///
/// ```rust,compile_fail,E0277
/// # use std::convert::Infallible;
/// # use std::rc::Rc;
/// use vfab::prelude::*;
///
/// trait Shared {
///     fn owners(&self) -> usize;
/// }
///
/// struct Local(Rc<u8>);
///
/// impl Shared for Local {
///     fn owners(&self) -> usize {
///         Rc::strong_count(&self.0)
///     }
/// }
///
/// impl Construct<()> for Local {
///     type Error = Infallible;
///     fn construct((): ()) -> Result<Self, Infallible> {
///         Ok(Self(Rc::new(0)))
///     }
/// }
///
/// #[variant_set(interface = dyn Shared)]
/// enum Locals {
///     Local(Local),
/// }
///
/// fn assert_send<T: Send>(_: &T) {}
///
/// let slot = Factory::<Locals>::create(0, ()).unwrap();
/// assert_send(&slot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot<S: VariantSet> {
    occupant: Occupant<S>,
}

impl<S: VariantSet> Slot<S> {
    pub(crate) const fn occupied(variant: S) -> Self {
        Self { occupant: Occupant::Variant(variant) }
    }

    pub(crate) const fn invalid() -> Self {
        Self { occupant: Occupant::Error(ErrorMarker) }
    }

    /// Returns the active member through the common interface.
    ///
    /// # Errors
    /// Returns [`FabricError::BadIndex`] with `index == count` when the slot holds the error
    /// marker.
    pub fn get(&self) -> Result<&S::Interface, FabricError> {
        match &self.occupant {
            Occupant::Variant(variant) => Ok(variant.as_interface()),
            Occupant::Error(_) => Err(marker_error::<S>()),
        }
    }

    /// Mutable counterpart of [`Slot::get`].
    ///
    /// # Errors
    /// Returns [`FabricError::BadIndex`] when the slot holds the error marker.
    pub fn get_mut(&mut self) -> Result<&mut S::Interface, FabricError> {
        match &mut self.occupant {
            Occupant::Variant(variant) => Ok(variant.as_interface_mut()),
            Occupant::Error(_) => Err(marker_error::<S>()),
        }
    }

    /// Returns `true` when the slot holds a genuine member rather than the error marker.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !self.occupant.is_error()
    }

    /// Escape hatch to the underlying sum, bypassing the validity check.
    ///
    /// Prefer [`Slot::get`]; this is for callers that need the concrete member type.
    #[must_use]
    pub const fn raw(&self) -> &Occupant<S> {
        &self.occupant
    }

    /// Mutable escape hatch to the underlying sum.
    #[must_use]
    pub const fn raw_mut(&mut self) -> &mut Occupant<S> {
        &mut self.occupant
    }

    /// Consumes the slot and returns the underlying sum.
    #[must_use]
    pub fn into_raw(self) -> Occupant<S> {
        self.occupant
    }
}

fn marker_error<S: VariantSet>() -> FabricError {
    FabricError::BadIndex {
        index: S::COUNT,
        count: S::COUNT,
        context: Some("slot holds the error marker".into()),
    }
}
