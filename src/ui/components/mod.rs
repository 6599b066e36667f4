pub mod header;
pub mod popup;
pub mod spinner;
