//! Helper functions for the rendering layer
//!
//! These are the pure array/string transforms the site exposes as
//! template filters: sequence slicing and filtering, locale-aware date
//! formatting, and small text utilities.

mod date;
mod list;
mod text;
mod url;

pub use date::*;
pub use list::*;
pub use text::*;
pub use url::*;
