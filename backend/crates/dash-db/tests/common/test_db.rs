use dash_core::Identity;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    dash_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a bare user row
pub async fn create_test_user(pool: &SqlitePool, user_id: &str) -> Identity {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO users (id, email) VALUES (?, ?)")
        .bind(user_id)
        .bind(format!("{}@example.com", user_id))
        .execute(pool)
        .await
        .expect("Failed to create test user");

    Identity::parse(user_id).expect("valid test user id")
}

/// Writes a raw value into users.image, bypassing validation
pub async fn force_image_column(pool: &SqlitePool, user_id: &str, raw: &str) {
    sqlx::query("UPDATE users SET image = ? WHERE id = ?")
        .bind(raw)
        .bind(user_id)
        .execute(pool)
        .await
        .expect("Failed to update image column");
}
