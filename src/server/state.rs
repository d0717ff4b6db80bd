use std::sync::Arc;

use crate::features::bills::BillService;

#[derive(Clone)]
pub struct AppState {
    pub bills: Arc<BillService>,
    pub api_key: Option<Arc<String>>,
}

impl AppState {
    pub fn new(bills: Arc<BillService>, api_key: Option<String>) -> Self {
        Self {
            bills,
            api_key: api_key.map(Arc::new),
        }
    }
}
