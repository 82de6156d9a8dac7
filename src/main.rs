use fatsecret::api::FoodSearchOptions;
use fatsecret::{Credentials, FatSecretClient, FatSecretConfig, VendorError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let credentials = Credentials::from_env()?;
    let config = FatSecretConfig::from_env()?;
    let expression = std::env::args().nth(1).unwrap_or_else(|| "banana".to_string());

    tracing::info!("Validating FatSecret credentials...");
    let client = match FatSecretClient::with_config(credentials, config.clone()).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Authentication failed: {}", e);
            tracing::error!("Please verify:");
            tracing::error!("  - FATSECRET_CLIENT_ID and FATSECRET_CLIENT_SECRET are correct");
            tracing::error!("  - The token endpoint is reachable: {}", config.token_url);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Token acquired, {:.0}s of validity left",
        client.tokens().remaining_validity().await
    );

    tracing::info!("Testing API access with foods.search for {:?}...", expression);
    let results = client
        .foods()
        .search(
            &expression,
            FoodSearchOptions {
                max_results: Some(5),
                ..Default::default()
            },
        )
        .await?;

    if let Some(error) = VendorError::from_response(&results) {
        tracing::warn!("API access test failed: {}", error);
        tracing::warn!("FatSecret only accepts calls from whitelisted IP addresses.");
        tracing::warn!("Check the IP restrictions in your FatSecret platform account.");
    } else {
        tracing::info!("API access test passed");
    }

    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
