pub mod contracts;
pub mod options;
