// order_service/src/main.rs

use anyhow::Context;
use order_service::models::{OrderRequest, RequestedProduct};
use order_service::seed::{SeedCustomer, SeedData, SeedProduct, SeededCollaborators};
use order_service::{AppConfig, OrderCreationWorkflow};
use std::fs;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(std::io::stderr)
    .init();

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;

  let seed = match &app_config.seed_path {
    Some(path) => SeedData::load(path)?,
    None => {
      tracing::info!("No ORDERFLOW_SEED_PATH set, using the built-in demo catalog.");
      demo_seed()
    }
  };

  let request = match &app_config.request_path {
    Some(path) => {
      let raw = fs::read_to_string(path).with_context(|| format!("Cannot read request file {}", path.display()))?;
      serde_json::from_str::<OrderRequest>(&raw).with_context(|| format!("Invalid order request in {}", path.display()))?
    }
    None => demo_request(&seed)?,
  };

  let collaborators = SeededCollaborators::from_seed(seed);
  let workflow = OrderCreationWorkflow::new(collaborators.repositories(app_config.workflow.clone()))?;

  match workflow.execute(request).await {
    Ok(order) => {
      println!("{}", serde_json::to_string_pretty(&order)?);
      Ok(ExitCode::SUCCESS)
    }
    Err(e) => {
      tracing::warn!(error = %e, status = e.status_code(), "Order was not created.");
      eprintln!("{}", serde_json::to_string_pretty(&e.response_body())?);
      Ok(ExitCode::FAILURE)
    }
  }
}

fn demo_seed() -> SeedData {
  SeedData {
    customers: vec![SeedCustomer {
      id: Uuid::new_v4(),
      name: "Demo Customer".to_string(),
      email: "demo@example.com".to_string(),
    }],
    products: vec![
      SeedProduct {
        id: Uuid::new_v4(),
        name: "Mug".to_string(),
        price_cents: 1000,
        quantity: 5,
      },
      SeedProduct {
        id: Uuid::new_v4(),
        name: "Teapot".to_string(),
        price_cents: 2000,
        quantity: 3,
      },
    ],
  }
}

/// One unit of every seeded product for the first seeded customer.
fn demo_request(seed: &SeedData) -> anyhow::Result<OrderRequest> {
  let customer = seed
    .customers
    .first()
    .context("ORDERFLOW_REQUEST_PATH is unset and the seed has no customer to order for")?;
  Ok(OrderRequest {
    customer_id: customer.id,
    products: seed
      .products
      .iter()
      .map(|p| RequestedProduct { id: p.id, quantity: 1 })
      .collect(),
  })
}
