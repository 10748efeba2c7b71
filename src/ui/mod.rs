pub mod components;
mod styles;

pub use styles::{setup_styles, ERROR_COLOR, MUTED_COLOR};
