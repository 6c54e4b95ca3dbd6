use crate::domain::model::{scalar_literal, Record};
use crate::domain::ports::StoreClient;

/// One batch of rows destined for a named collection.
#[derive(Debug, Clone)]
pub struct SeedCollection {
    pub collection: String,
    pub rows: Vec<Record>,
}

impl SeedCollection {
    pub fn new(collection: impl Into<String>, rows: Vec<Record>) -> Self {
        Self {
            collection: collection.into(),
            rows,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub failed: usize,
}

/// Pushes seed data into the store, one upsert per row with `id` as the
/// conflict target. A rejected row is logged and counted, never fatal; the
/// run always completes and reports what happened.
pub struct Seeder<C: StoreClient> {
    client: C,
}

impl<C: StoreClient> Seeder<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn run(&self, seed: &[SeedCollection]) -> SeedReport {
        tracing::info!("Seeding the collection store...");
        let mut report = SeedReport::default();

        for set in seed {
            tracing::info!("Seeding {}...", set.collection);
            for row in &set.rows {
                let label = row
                    .get("id")
                    .map(scalar_literal)
                    .unwrap_or_else(|| "item".to_string());

                match self.client.upsert(&set.collection, row, "id").await {
                    Ok(_) => {
                        tracing::info!("Inserted {} {}", set.collection, label);
                        report.inserted += 1;
                    }
                    Err(e) => {
                        tracing::error!("Error inserting {} into {}: {}", label, set.collection, e);
                        report.failed += 1;
                    }
                }
            }
        }

        tracing::info!(
            "Seeding completed: {} inserted, {} failed",
            report.inserted,
            report.failed
        );
        report
    }
}
