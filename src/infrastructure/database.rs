use sqlx::{MySqlPool, mysql::MySqlPoolOptions};

pub async fn init_pool(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(16)
        .connect(database_url)
        .await
}
