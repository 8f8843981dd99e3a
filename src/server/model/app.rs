use sea_orm::DatabaseConnection;

use crate::server::catalog::HttpCatalogClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog_client: HttpCatalogClient,
}
