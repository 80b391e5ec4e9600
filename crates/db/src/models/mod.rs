//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as returned by the API
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Struct fields are English and match the SQL columns; the serde names are
//! the Portuguese keys used on the wire.

pub mod category;
pub mod product;
