use sqlx::MySqlPool;

/// Connects to the employees database. The pool is cheap to clone and is
/// what [`crate::repo::mysql::MySqlEmployeeRepository`] is built from.
pub async fn init_db(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    MySqlPool::connect(database_url).await
}
