//! # Variant Sets
//!
//! The type-level description of a closed set: which concrete types it contains, in which order,
//! which arguments they are built from, and the interface they are all viewed through.
//!
//! Implementations are normally generated by [`crate::variant_set`]. Writing them by hand is
//! supported as long as `CONSTRUCTORS[p]` is `<Self as VariantAt<p>>::construct_at` for every
//! position `p`.

use crate::error::FabricError;

/// Construction function stored in a set's dispatch table.
pub type Constructor<S> = fn(<S as VariantSet>::Args) -> Result<S, <S as VariantSet>::Error>;

/// The constructor signature shared by every member of a variant set.
///
/// `A` is the argument tuple, for example `(i32, i32)` or `()`. Infallible constructors use
/// [`std::convert::Infallible`] as their error.
pub trait Construct<A>: Sized {
    /// Failure reported by the constructor itself.
    type Error;

    /// Builds the value from the shared arguments.
    ///
    /// # Errors
    /// Whatever the concrete type decides to reject.
    fn construct(args: A) -> Result<Self, Self::Error>;
}

/// A closed, ordered set of concrete types behind one interface.
///
/// The implementing type is the inline sum of all members: an enum with one single-field
/// variant per member, sized to the largest one.
pub trait VariantSet: Sized + 'static {
    /// The common interface, usually `dyn Trait`.
    type Interface: ?Sized;

    /// Arguments forwarded to every member's [`Construct`] implementation.
    type Args: 'static;

    /// Error type of the creation operations.
    ///
    /// It must be able to carry a [`FabricError`] so an out-of-range runtime index can be
    /// reported through it.
    type Error: From<FabricError> + 'static;

    /// Declared member names, by position.
    const NAMES: &'static [&'static str];

    /// Per-position construction functions.
    const CONSTRUCTORS: &'static [Constructor<Self>];

    /// Number of members.
    const COUNT: usize = Self::CONSTRUCTORS.len();

    /// Views the active member through the common interface.
    fn as_interface(&self) -> &Self::Interface;

    /// Mutable counterpart of [`VariantSet::as_interface`].
    fn as_interface_mut(&mut self) -> &mut Self::Interface;
}

/// The member at position `P` of a variant set.
///
/// Only positions that exist have an implementation, so naming `VariantAt<P>` for `P >= COUNT`
/// is a compile error rather than a runtime failure.
pub trait VariantAt<const P: usize>: VariantSet {
    /// Concrete type stored at `P`.
    type Variant: Construct<Self::Args, Error: Into<Self::Error>>;

    /// Places a constructed member into the set.
    fn wrap(variant: Self::Variant) -> Self;

    /// Builds the member at `P` from `args`.
    ///
    /// # Errors
    /// Returns the member's own constructor failure converted with [`Into`]; when the member
    /// already uses the set's error type the value is passed through untouched.
    #[inline]
    fn construct_at(args: Self::Args) -> Result<Self, Self::Error> {
        <Self::Variant as Construct<Self::Args>>::construct(args).map(Self::wrap).map_err(Into::into)
    }
}
