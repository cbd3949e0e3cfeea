pub mod error;
pub mod variant_set;
