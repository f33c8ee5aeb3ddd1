use std::path::PathBuf;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::payments::PaymentClient;

/// Server state shared by all handlers.
///
/// Holds the configuration, the embedded database handle and the payment
/// client. `Surreal<Db>` and `reqwest::Client` are both cheap to clone, so
/// the whole state clones per request without `Arc` wrapping.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub payments: PaymentClient,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, payments: PaymentClient) -> Self {
        Self {
            config,
            db,
            payments,
        }
    }

    /// Initialize server state: database under `work_dir/orders.db`, then
    /// the payment client.
    ///
    /// # Panics
    ///
    /// Panics when the database cannot be opened.
    pub async fn initialize(config: &Config) -> Self {
        let db_path = PathBuf::from(&config.work_dir).join("orders.db");
        let db_path_str = db_path.to_string_lossy();

        let db_service = DbService::new(&db_path_str)
            .await
            .expect("Failed to initialize database");

        let payments = PaymentClient::new(config.payment_gateway_url.clone());

        Self::new(config.clone(), db_service.db, payments)
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }
}
