pub mod add_product_cmd;
pub mod add_review_cmd;
pub mod edit_product_cmd;
pub mod get_product_cmd;
pub mod remove_product_cmd;
pub mod search_products_cmd;
