//! Widgets composing the gallery screen

pub mod grid;
pub mod header;
pub mod search;
pub mod style;
