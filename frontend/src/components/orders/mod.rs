pub mod history;
pub mod place_order;
