use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set")]
    Missing(&'static str),

    #[error("Environment variable {name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Failure while reading from the content store. A row that does not
/// exist is never a `StoreError`; reads return `Ok(None)` for that.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Slug {0:?} must be lowercase letters and digits joined by single hyphens")]
    InvalidSlug(String),

    #[error("Path {0:?} must start with '/' and contain only lowercase letters, digits, '-' and '/'")]
    InvalidPath(String),

    #[error("Path {0:?} is longer than 255 characters")]
    PathTooLong(String),

    #[error("Path {0:?} belongs to a protected route")]
    ProtectedPath(String),

    #[error("Path {0:?} uses a reserved namespace")]
    ReservedPrefix(String),

    #[error("Path {0:?} is a blog post path")]
    BlogPostPath(String),
}

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Invalid page: {0}")]
    Validation(#[from] ValidationError),

    #[error("A page already exists at path {0:?}")]
    DuplicatePath(String),

    #[error("Page {0} not found")]
    NotFound(uuid::Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
