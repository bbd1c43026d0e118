use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::error::ApiError;
use crate::application::ports::user_repository::{AuthUserRow, NewUser, UserRepository, UserUpdate};
use crate::domain::users::user::{User, UserRole};
use crate::infrastructure::db::{PgPool, map_db_error};

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_user(row: &PgRow) -> User {
    let role: String = row.get("role");
    User {
        id: row.get("id"),
        name: row.get("name"),
        surname: row.get("surname"),
        second_surname: row.get("second_surname"),
        email: row.get("email"),
        role: UserRole::parse(&role).unwrap_or_default(),
        is_active: row.get("is_active"),
        created_at: row.get("created_at"),
        created_by: row.get("created_by"),
        updated_at: row.get("updated_at"),
        updated_by: row.get("updated_by"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(&self, user: NewUser) -> Result<User, ApiError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("email", e))?;

        let row = sqlx::query(
            r#"INSERT INTO users (name, surname, second_surname, email, password_hash, role, created_by)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, name, surname, second_surname, email, role, is_active,
                         created_at, created_by, updated_at, updated_by"#,
        )
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.second_surname)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error("email", e))?;
        let mut created = map_user(&row);

        // Self-registration: the creator is the row itself.
        if user.created_by.is_none() {
            let row = sqlx::query(
                r#"UPDATE users SET created_by = id WHERE id = $1
                   RETURNING id, name, surname, second_surname, email, role, is_active,
                             created_at, created_by, updated_at, updated_by"#,
            )
            .bind(created.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_db_error("email", e))?;
            created = map_user(&row);
        }

        tx.commit().await.map_err(|e| map_db_error("email", e))?;
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AuthUserRow>, ApiError> {
        let row = sqlx::query(
            r#"SELECT id, name, surname, second_surname, email, password_hash, role, is_active,
                      created_at, created_by, updated_at, updated_by
               FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("email", e))?;
        Ok(row.map(|r| AuthUserRow {
            user: map_user(&r),
            password_hash: r.get("password_hash"),
        }))
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let rows = sqlx::query(
            r#"SELECT id, name, surname, second_surname, email, role, is_active,
                      created_at, created_by, updated_at, updated_by
               FROM users ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("email", e))?;
        Ok(rows.iter().map(map_user).collect())
    }

    async fn update_user(&self, id: i32, update: UserUpdate) -> Result<Option<User>, ApiError> {
        let row = sqlx::query(
            r#"UPDATE users
               SET name = $1, surname = $2, second_surname = $3, email = $4, role = $5,
                   updated_at = NOW(), updated_by = $6
               WHERE id = $7
               RETURNING id, name, surname, second_surname, email, role, is_active,
                         created_at, created_by, updated_at, updated_by"#,
        )
        .bind(&update.name)
        .bind(&update.surname)
        .bind(&update.second_surname)
        .bind(&update.email)
        .bind(update.role.as_str())
        .bind(update.updated_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("email", e))?;
        Ok(row.as_ref().map(map_user))
    }

    async fn set_user_status(
        &self,
        id: i32,
        is_active: bool,
        updated_by: i32,
    ) -> Result<Option<User>, ApiError> {
        let row = sqlx::query(
            r#"UPDATE users
               SET is_active = $1, updated_at = NOW(), updated_by = $2
               WHERE id = $3
               RETURNING id, name, surname, second_surname, email, role, is_active,
                         created_at, created_by, updated_at, updated_by"#,
        )
        .bind(is_active)
        .bind(updated_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("email", e))?;
        Ok(row.as_ref().map(map_user))
    }

    async fn delete_user(&self, id: i32) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("email", e))?;
        Ok(res.rows_affected() > 0)
    }
}
