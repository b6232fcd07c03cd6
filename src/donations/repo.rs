use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo_types::User;

/// Top donors, highest total first; the earlier joiner wins a tie.
pub async fn list_top_by_donations(db: &PgPool, limit: i64) -> anyhow::Result<Vec<User>> {
    let rows = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, referral_code,
               donations_raised, joining_date
        FROM users
        ORDER BY donations_raised DESC, joining_date ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Adds `amount` in a single UPDATE so concurrent updates on the same user
/// never lose a write. Returns the new total, or None for an unknown user.
pub async fn increment_donations(
    db: &PgPool,
    id: Uuid,
    amount: i64,
) -> anyhow::Result<Option<i64>> {
    let total = sqlx::query_scalar::<_, i64>(
        r#"
        UPDATE users
        SET donations_raised = donations_raised + $2
        WHERE id = $1
        RETURNING donations_raised
        "#,
    )
    .bind(id)
    .bind(amount)
    .fetch_optional(db)
    .await?;
    Ok(total)
}
