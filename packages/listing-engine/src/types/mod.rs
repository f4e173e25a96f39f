//! Data types for listings, records, and canonical values.

pub mod record;
pub mod value;
