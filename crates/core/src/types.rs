/// Product identifiers are 64-bit integers everywhere in the system.
pub type ProductId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
