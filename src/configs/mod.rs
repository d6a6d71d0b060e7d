//! Value objects stored inside chart options.
//!
//! Each one is a strict option bag of its own and flattens to a plain JSON object on
//! serialization.

mod box_style;
mod gradient;

pub use box_style::BoxStyle;
pub use gradient::Gradient;
