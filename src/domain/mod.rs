//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `persona` - Catalog, wizard state aggregate, and axis wording

pub mod foundation;
pub mod persona;
