//! Domain building blocks shared by the database and HTTP layers.
//!
//! Nothing in here touches the database or the network: entity schemas,
//! the field validation engine, product search modes and the domain error
//! type all live in plain Rust so they can be unit tested in isolation.

pub mod error;
pub mod schema;
pub mod search;
pub mod types;
pub mod validation;
