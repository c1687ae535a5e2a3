//! Building containers from external data.
//!
//! - [`json`]: JSON and newline-delimited JSON to and from [`crate::types::Container`]

pub mod json;

pub use json::{
    container_from_json, container_from_json_str, container_to_json, value_from_json, value_to_json,
};
