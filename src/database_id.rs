//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;
/// Alias for transaction row IDs.
pub type TransactionId = i64;
/// Alias for category row IDs.
pub type CategoryId = i64;
