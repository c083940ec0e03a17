//! State management module
//!
//! This module handles all application state, including:
//! - Photo library access and the mount-time load (library.rs)
//! - Shared data structures (data.rs)
//! - Active filters and the filtered set (filters.rs)

pub mod data;
pub mod filters;
pub mod library;
