use std::borrow::Cow;
use std::convert::Infallible;
use vfab::FabricError;

/// Errors produced by the sample variant sets.
#[vfab::fabric_error]
#[derive(Clone, PartialEq, Eq)]
pub enum SampleError {
    /// A bounded constructor received a value it does not accept.
    #[error("Value out of range{}: {value} exceeds the limit of {limit}", format_context(.context))]
    OutOfRange { value: i32, limit: i32, context: Option<Cow<'static, str>> },

    /// The fabric rejected a selection.
    #[error("Fabric error{}: {source}", format_context(.context))]
    Fabric { source: FabricError, context: Option<Cow<'static, str>> },
}

impl From<Infallible> for SampleError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
