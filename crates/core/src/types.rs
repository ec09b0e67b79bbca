/// Database row identifier. SQLite assigns these from an `AUTOINCREMENT`
/// primary key, so they are positive, monotonically increasing, and never
/// reused.
pub type DbId = i64;
