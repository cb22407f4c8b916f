// inputs/mod.rs

//! Terminal input: key mapping and the event reader.

pub mod handler;
pub mod key;
