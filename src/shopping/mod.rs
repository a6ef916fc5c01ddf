pub mod aggregator;
pub mod writer;

pub use aggregator::{ShoppingAggregator, aggregate_ingredients};
pub use writer::{save_shopping_list, shopping_list_from_menu_file, write_shopping_list};
