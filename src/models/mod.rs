//! Data models
//!
//! Presentation-facing structs built from energy calculations.

mod label;
mod request;
mod result_view;

pub use label::add_spaces_to_pascal_case;
pub use request::MerRequest;
pub use result_view::{calculate_result_view, ResultView};
