mod commands;
mod constants;
mod database;
mod models;
mod schedule;
mod services;
mod utils;

use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    commands::{add, list, remove, start},
    constants::{DEFAULT_ANNOUNCE_CRON, DEFAULT_COMMAND_PREFIX, DEFAULT_TIMEZONE, LOG_DIRECTIVE},
    database::Database,
    models::Data,
    schedule::start_schedule_manager,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to database
    let db = match Database::new(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize bot data
    let data = Data::new(
        db,
        serenity::UserId::new(config.admin_user_id),
        serenity::ChannelId::new(config.announce_channel_id),
        config.timezone,
        config.announce_cron.clone(),
    );

    // Create and start the bot
    if let Err(e) = start_bot(config.discord_token, config.command_prefix, data).await {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    discord_token: String,
    database_url: String,
    admin_user_id: u64,
    announce_channel_id: u64,
    command_prefix: String,
    timezone: chrono_tz::Tz,
    announce_cron: String,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    let discord_token = std::env::var("DISCORD_TOKEN")
        .map_err(|_| "DISCORD_TOKEN environment variable not set. Set it with: export DISCORD_TOKEN=your_bot_token")?;

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL environment variable not set. Set it with: export DATABASE_URL=sqlite://birthdays.db")?;

    let admin_user_id = std::env::var("ADMIN_USER_ID")
        .map_err(|_| "ADMIN_USER_ID environment variable not set. Set it to the Discord user id allowed to manage birthdays")?
        .parse::<u64>()
        .map_err(|_| "ADMIN_USER_ID must be a numeric Discord user id")?;

    let announce_channel_id = std::env::var("ANNOUNCE_CHANNEL_ID")
        .map_err(|_| "ANNOUNCE_CHANNEL_ID environment variable not set. Set it to the channel that receives announcements")?
        .parse::<u64>()
        .map_err(|_| "ANNOUNCE_CHANNEL_ID must be a numeric Discord channel id")?;

    let command_prefix =
        std::env::var("COMMAND_PREFIX").unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string());

    let timezone = std::env::var("BOT_TIMEZONE")
        .unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string())
        .parse::<chrono_tz::Tz>()
        .map_err(|e| format!("BOT_TIMEZONE is not a valid timezone: {}", e))?;

    let announce_cron =
        std::env::var("ANNOUNCE_CRON").unwrap_or_else(|_| DEFAULT_ANNOUNCE_CRON.to_string());

    Ok(Config {
        discord_token,
        database_url,
        admin_user_id,
        announce_channel_id,
        command_prefix,
        timezone,
        announce_cron,
    })
}

/// Create and start the Discord bot
async fn start_bot(
    token: String,
    command_prefix: String,
    data: Data,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Wrap data in Arc for sharing with the schedule manager
    let data_arc = Arc::new(data);
    let data_for_framework = Arc::clone(&data_arc);

    // Create framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![add(), list(), remove(), start()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(command_prefix),
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, _framework| {
            let http = ctx.http.clone();
            let data_clone = Arc::clone(&data_for_framework);

            // Start schedule manager
            start_schedule_manager(http, data_clone);
            info!("Schedule manager task started");

            Box::pin(async move {
                info!("Bot is ready!");

                // Return a new clone of the data
                Ok((*data_for_framework).clone())
            })
        })
        .build();

    // Prefix commands need the message content intent
    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    // Start the bot
    info!("Starting bot...");
    client.start().await?;

    Ok(())
}
