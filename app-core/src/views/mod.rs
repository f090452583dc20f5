pub mod form;
pub mod overlay;
pub mod style;
