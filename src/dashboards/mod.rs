pub mod factory;
pub mod filters;

pub use factory::{FilterConstructor, FilterFactory, normalize_type_name};
pub use filters::{FILTER_WRAP_TYPE, Filter, FilterMeta, LabelOrIndex};
