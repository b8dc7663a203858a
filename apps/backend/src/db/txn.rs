//! Transaction lifecycle helper.
//!
//! Services take `&DatabaseTransaction` and stay oblivious to commit and
//! rollback; callers wrap them with `with_txn` so every operation is
//! all-or-nothing.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Execute a function within a database transaction.
///
/// Begins a transaction, runs the closure, commits on Ok and rolls back on
/// Err. Rollback is best-effort; the original error is preserved.
pub async fn with_txn<R, F, Fut>(db: &DatabaseConnection, f: F) -> Result<R, DomainError>
where
    F: FnOnce(&DatabaseTransaction) -> Fut,
    Fut: std::future::Future<Output = Result<R, DomainError>>,
{
    let txn = db.begin().await.map_err(map_db_err)?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await.map_err(map_db_err)?;
            Ok(val)
        }
        Err(err) => {
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
