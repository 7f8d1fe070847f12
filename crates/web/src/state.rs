use std::sync::Arc;

use storage::Database;
use storage::regulations::RegulationTables;

/// Shared application state: the database handle plus the regulation tables
/// loaded once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub regulations: Arc<RegulationTables>,
}
