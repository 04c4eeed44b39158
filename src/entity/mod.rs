pub mod items;
pub mod wishlists;

pub use items::Entity as Items;
pub use wishlists::Entity as Wishlists;
