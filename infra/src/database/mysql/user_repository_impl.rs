//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use signet_core::domain::entities::user::User;
use signet_core::errors::DomainError;
use signet_core::repositories::{UserListFilter, UserRepository};

/// Columns selected for every user query
const USER_COLUMNS: &str = "id, username, email, password_hash, bio, avatar_key, \
     is_active, is_admin, created_at, updated_at, last_login_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(db_err)?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("invalid user UUID: {e}"),
            })?,
            username: row.try_get("username").map_err(db_err)?,
            email: row.try_get("email").map_err(db_err)?,
            password_hash: row.try_get("password_hash").map_err(db_err)?,
            bio: row.try_get("bio").map_err(db_err)?,
            avatar_key: row.try_get("avatar_key").map_err(db_err)?,
            is_active: row.try_get("is_active").map_err(db_err)?,
            is_admin: row.try_get("is_admin").map_err(db_err)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(db_err)?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at").map_err(db_err)?,
            last_login_at: row.try_get("last_login_at").map_err(db_err)?,
        })
    }

    /// Append the filter conditions to a query builder
    fn push_filter(qb: &mut QueryBuilder<'_, sqlx::MySql>, filter: &UserListFilter) {
        if let Some(is_active) = filter.is_active {
            qb.push(" AND is_active = ").push_bind(is_active);
        }
        if let Some(is_admin) = filter.is_admin {
            qb.push(" AND is_admin = ").push_bind(is_admin);
        }
        if let Some(ref search) = filter.search {
            let pattern = format!("%{search}%");
            qb.push(" AND (username LIKE ")
                .push_bind(pattern.clone())
                .push(" OR email LIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("database query failed: {e}"),
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, username, email, password_hash, bio, avatar_key,
                is_active, is_admin, created_at, updated_at, last_login_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.bio)
            .bind(&user.avatar_key)
            .bind(user.is_active)
            .bind(user.is_admin)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db)
                    if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
                {
                    DomainError::Validation {
                        message: "email or username already registered".to_string(),
                    }
                }
                other => db_err(other),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                username = ?, email = ?, password_hash = ?, bio = ?,
                avatar_key = ?, is_active = ?, is_admin = ?,
                updated_at = ?, last_login_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.bio)
            .bind(&user.avatar_key)
            .bind(user.is_active)
            .bind(user.is_admin)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS present")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        let present: i8 = row.try_get("present").map_err(db_err)?;
        Ok(present == 1)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?) AS present")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        let present: i8 = row.try_get("present").map_err(db_err)?;
        Ok(present == 1)
    }

    async fn list(
        &self,
        filter: &UserListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<User>, DomainError> {
        let mut qb = QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users WHERE 1 = 1"));
        Self::push_filter(&mut qb, filter);
        qb.push(" ORDER BY email LIMIT ")
            .push_bind(limit as i64)
            .push(" OFFSET ")
            .push_bind(offset as i64);

        let rows = qb.build().fetch_all(&self.pool).await.map_err(db_err)?;
        rows.iter().map(Self::row_to_user).collect()
    }

    async fn count(&self, filter: &UserListFilter) -> Result<u64, DomainError> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) AS total FROM users WHERE 1 = 1");
        Self::push_filter(&mut qb, filter);

        let row = qb.build().fetch_one(&self.pool).await.map_err(db_err)?;
        let total: i64 = row.try_get("total").map_err(db_err)?;
        Ok(total as u64)
    }
}
