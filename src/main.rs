// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Moments CLI
//!
//! Small terminal front-end for the Moments API: logs in (or reuses the
//! persisted session) and prints today's summary.

use moments_client::config::Config;
use moments_client::services::LoginRequest;
use moments_client::store::DailySummaryStore;
use moments_client::{time_utils, ApiClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(api = %config.api_base_url, "Starting Moments client");

    let client = ApiClient::with_default_storage(&config);
    client.gateway().on_unauthorized(|| {
        tracing::warn!("Session expired; log in again");
    });

    if !client.auth.is_authenticated() {
        let email = std::env::var("MOMENTS_EMAIL");
        let password = std::env::var("MOMENTS_PASSWORD");
        match (email, password) {
            (Ok(email), Ok(password)) => {
                let response = client.auth.login(&LoginRequest { email, password }).await?;
                tracing::info!(user = %response.user.email, "Logged in");
            }
            _ => {
                eprintln!(
                    "No stored session. Set MOMENTS_EMAIL and MOMENTS_PASSWORD to log in."
                );
                std::process::exit(1);
            }
        }
    }

    let daily = DailySummaryStore::new(client.daily.clone());
    daily.refresh(Some(time_utils::today())).await?;

    if let Some(summary) = daily.summary() {
        println!("Summary for {}", summary.date);
        println!("  water: {} glasses", summary.water_intake);
        println!("  steps: {}", summary.steps);
        println!(
            "  tasks: {} completed, {} pending",
            summary.tasks_completed, summary.tasks_pending
        );
        println!("  journal entries: {}", summary.journal_entries.len());
        println!("  expenses: {:.2}", summary.total_expenses);
    }

    Ok(())
}

/// Initialize terminal logging with env-based filtering.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("moments_client=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
