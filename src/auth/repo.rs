use sqlx::{FromRow, SqlitePool};

/// User record in the database.
///
/// The password is stored and compared verbatim. That is a deliberate
/// non-production shortcut carried over from the prototype; do not treat
/// this service as an authentication boundary.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
}

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Exact email+password match, used by login.
    pub async fn find_by_credentials(
        db: &SqlitePool,
        email: &str,
        password: &str,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM users
            WHERE email = ?1 AND password = ?2
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user.
    pub async fn create(db: &SqlitePool, email: &str, password: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password)
            VALUES (?1, ?2)
            RETURNING id, email, password
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
