//! Error types for the donation cart

use thiserror::Error;

/// Main error type for donation cart operations
#[derive(Error, Debug)]
pub enum CartError {
    /// A draft item was rejected at the `add_item` boundary
    #[error("Invalid donation item: {0}")]
    InvalidItem(String),

    /// Writing the cart snapshot to durable storage failed
    #[error("Failed to save donation cart: {0}")]
    PersistenceWrite(String),

    /// The persisted snapshot could not be read or parsed
    #[error("Failed to restore donation cart: {0}")]
    PersistenceRead(String),

    /// Checkout was attempted with no line items
    #[error("Donation cart is empty")]
    EmptyCart,

    /// Cart options are incomplete for checkout
    #[error("Checkout rejected: {0}")]
    InvalidCheckout(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CartError
pub type CartResult<T> = Result<T, CartError>;
