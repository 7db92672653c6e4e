//! Centralized theme for the workspace shell.
//!
//! - `palette` holds raw color constants
//! - `styles` builds semantic styles and bordered blocks from them

pub mod palette;
pub mod styles;
