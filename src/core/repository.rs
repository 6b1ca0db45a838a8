use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity by its identifier
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity by its identifier
    async fn delete(&self, id: &str) -> LibraryResult<usize>;
}
