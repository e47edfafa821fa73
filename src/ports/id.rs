/// Source of identifiers for documents created through `DocumentStore::add`.
pub trait IDGenerator {
    fn generate(&self) -> String;
}
