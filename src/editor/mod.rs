//! The editing session - the `Framebox` struct and its lifecycle.
//!
//! This module is organized into:
//! - `state` - The Framebox struct definition and sub-structs
//! - `lifecycle` - Construction, frame swapping, and the paint driver

mod lifecycle;
mod state;

pub use state::{Framebox, PointerFlags};
