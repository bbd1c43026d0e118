pub mod create_product;
pub mod delete_product;
pub mod helpers;
pub mod list_products;
pub mod set_product_status;
pub mod update_product;
