use std::sync::Arc;

use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::product_repository::ProductRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    product_repo: Arc<dyn ProductRepository>,
    category_repo: Arc<dyn CategoryRepository>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        product_repo: Arc<dyn ProductRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            user_repo,
            product_repo,
            category_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn product_repo(&self) -> Arc<dyn ProductRepository> {
        self.services.product_repo.clone()
    }

    pub fn category_repo(&self) -> Arc<dyn CategoryRepository> {
        self.services.category_repo.clone()
    }
}
