use clap::Parser;
use rowstore::core::seeder::{SeedCollection, Seeder};
use rowstore::utils::logger;
use rowstore::{connect_privileged, Record, StoreConfig};
use serde_json::json;

/// Populates the hosted collection store with the initial dataset.
///
/// Reads ROWSTORE_URL and ROWSTORE_SERVICE_ROLE_KEY from the environment.
/// The service role key has admin privileges; never ship it to clients.
#[derive(Debug, Parser)]
#[command(name = "seed")]
#[command(about = "Seed the hosted collection store with initial data")]
struct Args {
    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn provider_seed() -> Vec<SeedCollection> {
    let rows = [
        json!({
            "id": "1",
            "firstName": "John",
            "lastName": "Smith",
            "specialization": "Family Medicine",
            "licenseNumber": "MD12345",
            "email": "dr.smith@clinic.com"
        }),
        json!({
            "id": "2",
            "firstName": "Sarah",
            "lastName": "Johnson",
            "specialization": "Dermatology",
            "licenseNumber": "MD67890",
            "email": "dr.johnson@clinic.com"
        }),
    ];

    let rows = rows
        .into_iter()
        .filter_map(Record::from_value)
        .collect();

    vec![SeedCollection::new("provider", rows)]
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting collection store seeding");

    let config = StoreConfig::from_env();
    if let Err(e) = config.require_privileged() {
        tracing::error!("Configuration check failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Hint: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if args.verbose {
        tracing::debug!("Seeding against {}", config.service_url);
    }

    let client = connect_privileged(&config);
    let seeder = Seeder::new(client);

    let report = seeder.run(&provider_seed()).await;

    println!(
        "Seeding completed: {} inserted, {} failed",
        report.inserted, report.failed
    );
    if report.failed > 0 {
        tracing::warn!("{} row(s) were rejected by the service", report.failed);
    }
}
