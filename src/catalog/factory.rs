use crate::books::factory;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub(crate) async fn create_catalog_service(config: &Configuration) -> LibraryResult<Box<dyn CatalogService>> {
    let book_repository = factory::create_book_repository(config).await?;
    Ok(Box::new(CatalogServiceImpl::new(book_repository)))
}
