use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub created_by: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub updated_by: Option<i32>,
}

/// List row: product columns plus the joined category name (null when the
/// product has no category or the category was removed).
#[derive(Debug, Clone)]
pub struct ProductWithCategory {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub created_by: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub updated_by: Option<i32>,
}
