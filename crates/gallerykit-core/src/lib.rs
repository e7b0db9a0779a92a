//! # GalleryKit Core
//!
//! Core types, errors, and utilities for GalleryKit.
//! Provides the fundamental abstractions shared by the editor and the
//! persistence layer: geometry primitives, the error taxonomy, and the
//! named limits and configuration structs used across the workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;

pub use config::{AutoSaveConfig, SnapConfig};
pub use error::{DocumentError, PersistenceError};
pub use geometry::{rotate_point, Bounds, Point};
