pub mod probe;
pub mod selection;
