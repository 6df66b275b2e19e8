use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::media::application::ports::outgoing::MediaStore;
use crate::seed::adapter::outgoing::SeedStorePostgres;
use crate::seed::application::domain::ImageSource;
use crate::seed::application::ports::outgoing::SeedStoreError;
use crate::seed::application::seeder::{SeedError, SeedOptions, SeedReport, Seeder};

/// Runs the seeder inside one database transaction. Any failure rolls the
/// whole run back; image files already written stay on disk.
pub async fn run_seed<H, R>(
    db: &DatabaseConnection,
    media_store: Arc<dyn MediaStore + Send + Sync>,
    hasher: H,
    images: ImageSource,
    options: &SeedOptions,
    rng: &mut R,
) -> Result<SeedReport, SeedError>
where
    H: PasswordHasher,
    R: Rng + Send,
{
    let txn = db
        .begin()
        .await
        .map_err(|e| SeedStoreError::DatabaseError(e.to_string()))?;

    let seeder = Seeder::new(SeedStorePostgres::new(&txn), hasher, media_store, images);
    let outcome = seeder.run(options, rng).await;
    drop(seeder);

    match outcome {
        Ok(report) => {
            txn.commit()
                .await
                .map_err(|e| SeedStoreError::DatabaseError(e.to_string()))?;
            info!(?report, "Seed committed");
            Ok(report)
        }
        Err(e) => {
            error!(error = %e, "Seed failed, rolling back");
            if let Err(rollback) = txn.rollback().await {
                error!(error = %rollback, "Rollback failed");
            }
            Err(e)
        }
    }
}
