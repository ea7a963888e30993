//! # Raffle Bot Main Entry Point
//!
//! This is the main entry point for the raffle bot application.
//! It initializes logging, loads configuration, sets up the database,
//! starts the message deleter service, and runs the Telegram bot.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use raffle_bot::bot::handlers::BotHandler;
use raffle_bot::config::Config;
use raffle_bot::database::connection::DatabaseManager;
use raffle_bot::services::health::HealthService;
use raffle_bot::services::message_deleter::MessageDeleterService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "raffle_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Raffle Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Database: {}, HTTP Port: {}",
        config.database_url, config.http_port);

    // Initialize database
    info!("Initializing database connection...");
    let db_manager = DatabaseManager::new(&config.database_url).await?;
    info!("Running database migrations...");
    db_manager.run_migrations().await?;
    let db_arc = Arc::new(db_manager);
    info!("Database initialized successfully");

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(db_arc.as_ref().clone(), config.clone());
    info!("Telegram bot initialized successfully");

    // Initialize and start the message deleter service
    info!("Initializing message deleter service...");
    let mut deleter_service = match MessageDeleterService::new(bot.clone(), db_arc.clone()).await {
        Ok(service) => {
            info!("Message deleter service initialized successfully");
            service
        },
        Err(e) => {
            tracing::error!("Failed to create message deleter service: {}", e);
            return Err(anyhow::anyhow!("Failed to create message deleter service: {}", e));
        }
    };

    if let Err(e) = deleter_service.start().await {
        tracing::error!("Failed to start message deleter service: {}", e);
    } else {
        info!("Message deleter service started successfully");
    }

    // Initialize health service
    let health_service = HealthService::new(db_arc.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    // Stop the message deleter on shutdown
    if let Err(e) = deleter_service.stop().await {
        tracing::warn!("Error stopping message deleter service: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
