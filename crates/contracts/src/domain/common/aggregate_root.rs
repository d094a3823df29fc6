use super::EntityId;

/// Common surface of every resource the client caches.
pub trait AggregateRoot {
    /// Backend id of the record
    fn id(&self) -> EntityId;

    /// Display name of the record
    fn name(&self) -> &str;

    /// REST collection path, e.g. `/api/materials/`
    fn collection_path() -> &'static str;

    /// Path of a single record, e.g. `/api/materials/3`
    fn item_path(id: EntityId) -> String {
        format!("{}/{}", Self::collection_path().trim_end_matches('/'), id)
    }
}
