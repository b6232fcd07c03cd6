use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo_types::User;

impl User {
    /// Insert a new user. Unique violations on email or referral code come
    /// back as `sqlx::Error::Database` carrying the constraint name, so the
    /// API boundary can tell the two duplicate cases apart.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        referral_code: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, referral_code)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, referral_code,
                      donations_raised, joining_date
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(referral_code)
        .fetch_one(db)
        .await
    }

    /// Find a user by email (case-sensitive, as stored).
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, referral_code,
                   donations_raised, joining_date
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, referral_code,
                   donations_raised, joining_date
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}
