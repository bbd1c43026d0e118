pub mod list_categories;
