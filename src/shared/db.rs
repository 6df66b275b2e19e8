/// Upper bound on ids bound into one `IN (...)` list. PostgreSQL caps a
/// statement at 65 535 bind parameters.
pub const ID_CHUNK_SIZE: usize = 1_000;
