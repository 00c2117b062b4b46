/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar years (birth, death, creation) are stored as INTEGER.
pub type Year = i32;
