use crate::error::FabricError;
use crate::set::{VariantAt, VariantSet};
use crate::slot::Slot;
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// The only producer of [`Slot`]s for the variant set `S`.
///
/// The factory carries no state; all operations are associated functions parameterized by the
/// set. A set whose members do not all satisfy `S::Interface` is rejected where the set is
/// defined, so every slot handed out here is either a genuinely constructed member or the error
/// marker.
pub struct Factory<S> {
    _set: PhantomData<fn() -> S>,
}

impl<S> fmt::Debug for Factory<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory").field("set", &type_name::<S>()).finish()
    }
}

impl<S: VariantSet> Factory<S> {
    /// Number of members in the set.
    pub const COUNT: usize = S::COUNT;

    /// Creates the member at a runtime `index`, forwarding `args` to its constructor.
    ///
    /// Dispatch is a direct lookup in the set's construction table.
    ///
    /// # Errors
    /// * [`FabricError::BadIndex`] (converted into `S::Error`) if `index >= COUNT`; no slot is
    ///   produced.
    /// * The member's own constructor failure, unchanged.
    pub fn create(index: usize, args: S::Args) -> Result<Slot<S>, S::Error> {
        const { assert!(S::COUNT > 0, "a variant set must declare at least one variant") };

        let Some(construct) = S::CONSTRUCTORS.get(index) else {
            debug!(index, count = S::COUNT, set = type_name::<S>(), "Rejected variant index");
            return Err(FabricError::bad_index(index, S::COUNT).into());
        };

        let variant = construct(args).inspect_err(|_| {
            debug!(index, variant = Self::variant_name(index), "Variant constructor failed");
        })?;
        trace!(index, variant = Self::variant_name(index), "Constructed variant");

        Ok(Slot::occupied(variant))
    }

    /// Creates the member at the compile-time position `P`.
    ///
    /// A position without a member does not compile, so this path never reports
    /// [`FabricError::BadIndex`].
    ///
    /// # Errors
    /// Only the member's own constructor failure.
    pub fn create_static<const P: usize>(args: S::Args) -> Result<Slot<S>, S::Error>
    where
        S: VariantAt<P>,
    {
        const { assert!(P < S::COUNT, "variant position is outside of the set") };

        let variant = <S as VariantAt<P>>::construct_at(args)?;
        trace!(position = P, variant = Self::variant_name(P), "Constructed variant");

        Ok(Slot::occupied(variant))
    }

    /// Returns a slot holding the error marker.
    ///
    /// [`Slot::is_valid`] is `false` for it and [`Slot::get`] fails with
    /// [`FabricError::BadIndex`].
    #[must_use]
    pub fn error_slot() -> Slot<S> {
        debug!(set = type_name::<S>(), "Produced error slot");
        Slot::invalid()
    }

    /// Declared name of the member at `index`, if there is one.
    #[must_use]
    pub fn variant_name(index: usize) -> Option<&'static str> {
        S::NAMES.get(index).copied()
    }
}
