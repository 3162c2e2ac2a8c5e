pub mod photo_grid;
pub mod search_field;
