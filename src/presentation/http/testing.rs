//! In-memory repository doubles and context fixtures for handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::error::ApiError;
use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::product_repository::{NewProduct, ProductRepository, ProductUpdate};
use crate::application::ports::user_repository::{AuthUserRow, NewUser, UserRepository, UserUpdate};
use crate::bootstrap::app_context::{AppContext, AppServices};
use crate::bootstrap::config::Config;
use crate::domain::categories::category::Category;
use crate::domain::products::product::{Product, ProductWithCategory};
use crate::domain::users::user::User;

#[derive(Default)]
pub(crate) struct InMemoryUsers {
    rows: Mutex<Vec<(User, String)>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: NewUser) -> Result<User, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|(u, _)| u.email == user.email) {
            return Err(ApiError::Conflict("email"));
        }
        let id = rows.iter().map(|(u, _)| u.id).max().unwrap_or(0) + 1;
        let now = chrono::Utc::now();
        let created = User {
            id,
            name: user.name,
            surname: user.surname,
            second_surname: user.second_surname,
            email: user.email,
            role: user.role,
            is_active: true,
            created_at: now,
            created_by: Some(user.created_by.unwrap_or(id)),
            updated_at: now,
            updated_by: None,
        };
        rows.push((created.clone(), user.password_hash));
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AuthUserRow>, ApiError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|(u, _)| u.email == email).map(|(u, h)| {
            AuthUserRow {
                user: u.clone(),
                password_hash: h.clone(),
            }
        }))
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let rows = self.rows.lock().unwrap();
        let mut users: Vec<User> = rows.iter().map(|(u, _)| u.clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn update_user(&self, id: i32, update: UserUpdate) -> Result<Option<User>, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|(u, _)| u.email == update.email && u.id != id)
        {
            return Err(ApiError::Conflict("email"));
        }
        for (u, _) in rows.iter_mut() {
            if u.id == id {
                u.name = update.name;
                u.surname = update.surname;
                u.second_surname = update.second_surname;
                u.email = update.email;
                u.role = update.role;
                u.updated_at = chrono::Utc::now();
                u.updated_by = Some(update.updated_by);
                return Ok(Some(u.clone()));
            }
        }
        Ok(None)
    }

    async fn set_user_status(
        &self,
        id: i32,
        is_active: bool,
        updated_by: i32,
    ) -> Result<Option<User>, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        for (u, _) in rows.iter_mut() {
            if u.id == id {
                u.is_active = is_active;
                u.updated_at = chrono::Utc::now();
                u.updated_by = Some(updated_by);
                return Ok(Some(u.clone()));
            }
        }
        Ok(None)
    }

    async fn delete_user(&self, id: i32) -> Result<bool, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(u, _)| u.id != id);
        Ok(rows.len() < before)
    }
}

pub(crate) struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
    categories: Vec<Category>,
}

impl InMemoryProducts {
    pub(crate) fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            categories,
        }
    }

    fn check_category(&self, category_id: Option<i32>) -> Result<(), ApiError> {
        match category_id {
            Some(id) if !self.categories.iter().any(|c| c.id == id) => {
                Err(ApiError::Validation("category does not exist".into()))
            }
            _ => Ok(()),
        }
    }

    fn category_name(&self, category_id: Option<i32>) -> Option<String> {
        category_id.and_then(|id| {
            self.categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
        })
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn list_products(&self) -> Result<Vec<ProductWithCategory>, ApiError> {
        let rows = self.rows.lock().unwrap();
        let mut products = rows.clone();
        products.sort_by_key(|p| p.id);
        Ok(products
            .into_iter()
            .map(|p| ProductWithCategory {
                id: p.id,
                name: p.name,
                description: p.description,
                price: p.price,
                stock: p.stock,
                category_id: p.category_id,
                category_name: self.category_name(p.category_id),
                image_url: p.image_url,
                is_active: p.is_active,
                created_at: p.created_at,
                created_by: p.created_by,
                updated_at: p.updated_at,
                updated_by: p.updated_by,
            })
            .collect())
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError> {
        self.check_category(product.category_id)?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let now = chrono::Utc::now();
        let created = Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
            image_url: product.image_url,
            is_active: true,
            created_at: now,
            created_by: product.created_by,
            updated_at: now,
            updated_by: None,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update_product(
        &self,
        id: i32,
        update: ProductUpdate,
    ) -> Result<Option<Product>, ApiError> {
        self.check_category(update.category_id)?;
        let mut rows = self.rows.lock().unwrap();
        for p in rows.iter_mut() {
            if p.id == id {
                p.name = update.name;
                p.description = update.description;
                p.price = update.price;
                p.stock = update.stock;
                p.category_id = update.category_id;
                p.image_url = update.image_url;
                p.updated_at = chrono::Utc::now();
                p.updated_by = Some(update.updated_by);
                return Ok(Some(p.clone()));
            }
        }
        Ok(None)
    }

    async fn set_product_status(
        &self,
        id: i32,
        is_active: bool,
        updated_by: i32,
    ) -> Result<Option<Product>, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        for p in rows.iter_mut() {
            if p.id == id {
                p.is_active = is_active;
                p.updated_at = chrono::Utc::now();
                p.updated_by = Some(updated_by);
                return Ok(Some(p.clone()));
            }
        }
        Ok(None)
    }

    async fn delete_product(&self, id: i32) -> Result<bool, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }
}

pub(crate) struct InMemoryCategories {
    rows: Vec<(Category, bool)>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn list_active(&self) -> Result<Vec<Category>, ApiError> {
        let mut active: Vec<Category> = self
            .rows
            .iter()
            .filter(|(_, is_active)| *is_active)
            .map(|(c, _)| c.clone())
            .collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(active)
    }
}

pub(crate) fn seeded_categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Electronics".to_string(),
        },
        Category {
            id: 2,
            name: "Clothing".to_string(),
        },
    ]
}

fn test_config() -> Config {
    Config {
        api_port: 0,
        frontend_url: None,
        database_url: String::new(),
        bootstrap_admin_id: 1,
        is_production: false,
    }
}

/// Context over empty in-memory stores, seeded with two active categories
/// and one inactive one.
pub(crate) fn test_ctx() -> AppContext {
    let categories = seeded_categories();
    let mut with_inactive: Vec<(Category, bool)> =
        categories.iter().cloned().map(|c| (c, true)).collect();
    with_inactive.push((
        Category {
            id: 3,
            name: "Vintage".to_string(),
        },
        false,
    ));
    let services = AppServices::new(
        Arc::new(InMemoryUsers::default()),
        Arc::new(InMemoryProducts::with_categories(categories)),
        Arc::new(InMemoryCategories {
            rows: with_inactive,
        }),
    );
    AppContext::new(test_config(), services)
}
