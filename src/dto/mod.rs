pub mod items;
pub mod wishlists;
