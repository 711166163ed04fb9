/// Catalog primary keys are UUIDs.
pub type DbId = uuid::Uuid;
