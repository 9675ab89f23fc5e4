use sqlx::PgPool;

/// Process-wide connection pool shared by every request.
pub type Db = PgPool;
