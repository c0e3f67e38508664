pub mod tables;

use redb::{Database, Error as RedbError};
use std::path::Path;
use std::sync::Arc;

/// Bincode configuration shared by every record (de)serialization
pub const BINCODE_CONFIG: bincode::config::Configuration = bincode::config::standard();

/// Store handle type (Arc-wrapped for sharing across handlers)
pub type Store = Arc<Database>;

/// Open or create the redb store at the given path
///
/// Creates all required tables on first run.
#[allow(clippy::result_large_err)]
pub fn open_store(path: impl AsRef<Path>) -> Result<Store, RedbError> {
    tracing::info!("Opening store at: {:?}", path.as_ref());

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create store directory: {}", e);
                RedbError::Io(e)
            })?;
        }
    }

    let db = Database::create(path)?;

    // Initialize tables on first run
    let write_txn = db.begin_write()?;
    {
        // Create tables if they don't exist by opening them
        let _ = write_txn.open_table(tables::USERS)?;
        let _ = write_txn.open_table(tables::USER_EMAILS)?;
        let _ = write_txn.open_table(tables::OTPS)?;
    }
    write_txn.commit()?;

    tracing::info!("Store initialized successfully");

    Ok(Arc::new(db))
}
