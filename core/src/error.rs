use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("config error: {0}")]
    Config(#[from] crate::types::AppConfigError),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate movie id: {0}")]
    DuplicateId(String),
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("only the administrator is authorized to upload movies")]
    NotAuthorized,

    #[error("no movie file selected")]
    NoFileSelected,
}
