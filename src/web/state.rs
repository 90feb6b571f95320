use wasteloop::catalog::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}
