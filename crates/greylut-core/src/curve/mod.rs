//! Tone curves: sample parsing and 256-entry table construction.

pub mod csv;
pub mod table;
