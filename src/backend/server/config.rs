/**
 * Server Configuration
 *
 * Loads server configuration from environment variables once at startup.
 * Nothing reads the environment after this point: the JWT secret lives in
 * the token codec and the pool is built from the URL captured here, so
 * there are no ambient globals.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - SQLite URL, default `sqlite:ecommerce.db?mode=rwc`
 * - `JWT_SECRET` - token signing secret
 * - `SERVER_PORT` - listen port, default 3000
 * - `CORS_ORIGIN` - allowed browser origin, default `http://localhost:5173`
 */

use sqlx::SqlitePool;

/// Server configuration, captured from the environment at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Database connection URL
    pub database_url: String,
    /// Symmetric JWT signing secret; rotating it invalidates all
    /// outstanding tokens
    pub jwt_secret: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origin for the browser frontend
    pub cors_origin: String,
}

impl ServerConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:ecommerce.db?mode=rwc".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            "your-secret-key-change-in-production".to_string()
        });

        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .unwrap_or(3000);

        let cors_origin = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        Self {
            database_url,
            jwt_secret,
            port,
            cors_origin,
        }
    }
}

/// Connect to the database and run migrations
///
/// Storage is a required collaborator; a connection or migration failure
/// is fatal and propagates to the caller instead of degrading the server.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = SqlitePool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;

    tracing::info!("Database ready");

    Ok(pool)
}
