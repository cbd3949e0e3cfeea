#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the fabric.
//! This crate provides the definition-time surface of a variant set and the attribute
//! used by every error enum in the workspace.
//!
//! ## Usage
//! Consumers normally reach these macros through the `vfab` facade:
//! ```toml
//! [dependencies]
//! vfab = { path = "../crates/fabric" }
//! ```
//!
//! The generated code refers to `::vfab` and `::thiserror`, so the consuming crate must
//! depend on both.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemEnum, parse_macro_input};

/// Attribute macro that turns an enum into a closed variant set.
///
/// Every variant must wrap exactly one concrete type. The position of a variant in the
/// declaration is its index for `vfab::Factory::create` and `vfab::Factory::create_static`.
///
/// # Arguments
///
/// * `interface = <Type>` - The common interface every variant is exposed through,
///   usually `dyn Trait`. **Required.**
/// * `args = <Type>` - The argument tuple forwarded to every variant's constructor.
///   Defaults to `()`.
/// * `error = <Type>` - The error type of the creation operations. It must implement
///   `From<vfab::FabricError>`. Defaults to `vfab::FabricError`.
///
/// # Generated Items
///
/// * `impl vfab::VariantSet` with the construction table and the interface projections.
/// * `impl vfab::VariantAt<P>` for each position `P`.
///
/// # Errors
///
/// Emits a compile-time error for generic enums, enums without variants, variants that
/// do not wrap exactly one type, and explicit discriminants. A variant type that does not
/// satisfy `interface` or does not implement `vfab::Construct<args>` fails type checking
/// at the definition site.
///
/// # Example
///
/// ```rust,ignore
/// use vfab::variant_set;
///
/// #[variant_set(interface = dyn Pair, args = (i32, i32))]
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub enum PairVariants {
///     Plain(PlainPair),
///     Scaled(ScaledPair),
/// }
/// ```
#[proc_macro_attribute]
pub fn variant_set(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemEnum);
    macros::variant_set::expand_variant_set(args.into(), input).into()
}

/// Attribute macro for declaring error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to results carrying this error or one of its wrapped source errors.
/// * **Conversions**: Implements `From<Source>` for every variant with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Formatting**: Emits a module-level `format_context` helper for `#[error(...)]`
///   strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. A variant with a source field must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[vfab_derive::fabric_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn fabric_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_fabric_error(input).into()
}
