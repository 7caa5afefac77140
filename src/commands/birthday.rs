use tracing::{error, info};

use crate::{
    models::{Context, Error},
    utils::arguments::{parse_add_args, parse_remove_args},
    utils::messages::{
        build_add_usage_message, build_added_message, build_database_error,
        build_empty_list_message, build_help_text, build_invalid_rank_message,
        build_list_message, build_remove_usage_message, build_removed_message,
    },
};

/// Commands are admin-only and ignored silently for everyone else,
/// before any argument is looked at.
fn is_admin(ctx: &Context<'_>) -> bool {
    ctx.author().id == ctx.data().admin_id
}

/// Show the available commands
#[poise::command(prefix_command)]
pub async fn start(ctx: Context<'_>) -> Result<(), Error> {
    if !is_admin(&ctx) {
        return Ok(());
    }

    ctx.say(build_help_text(ctx.prefix())).await?;
    Ok(())
}

/// Add a birthday: name (may contain spaces) followed by a DD.MM.YYYY date
#[poise::command(prefix_command)]
pub async fn add(ctx: Context<'_>, #[rest] args: Option<String>) -> Result<(), Error> {
    if !is_admin(&ctx) {
        return Ok(());
    }

    let input = args.unwrap_or_default();
    let (name, date) = match parse_add_args(&input) {
        Ok((name, date_token, _)) => (name, date_token),
        Err(_) => {
            ctx.say(build_add_usage_message(ctx.prefix())).await?;
            return Ok(());
        }
    };

    match ctx.data().db.insert_birthday(&name, &date).await {
        Ok(id) => {
            info!("Added birthday entry {} for {} ({})", id, name, date);
            ctx.say(build_added_message(&name, &date)).await?;
        }
        Err(e) => {
            error!("Failed to insert birthday: {}", e);
            ctx.say(build_database_error()).await?;
        }
    }

    Ok(())
}

/// List all birthdays with their current numbers
#[poise::command(prefix_command)]
pub async fn list(ctx: Context<'_>) -> Result<(), Error> {
    if !is_admin(&ctx) {
        return Ok(());
    }

    match ctx.data().db.get_all_birthdays().await {
        Ok(records) if records.is_empty() => {
            ctx.say(build_empty_list_message()).await?;
        }
        Ok(records) => {
            ctx.say(build_list_message(&records)).await?;
        }
        Err(e) => {
            error!("Failed to load birthday list: {}", e);
            ctx.say(build_database_error()).await?;
        }
    }

    Ok(())
}

/// Remove a birthday by its current number from the list command
#[poise::command(prefix_command)]
pub async fn remove(ctx: Context<'_>, #[rest] args: Option<String>) -> Result<(), Error> {
    if !is_admin(&ctx) {
        return Ok(());
    }

    let input = args.unwrap_or_default();
    let rank = match parse_remove_args(&input) {
        Ok(rank) => rank,
        Err(_) => {
            ctx.say(build_remove_usage_message(ctx.prefix())).await?;
            return Ok(());
        }
    };

    if rank < 0 {
        ctx.say(build_invalid_rank_message(ctx.prefix())).await?;
        return Ok(());
    }

    match ctx.data().db.delete_birthday_at_rank(rank as usize).await {
        Ok(true) => {
            info!("Removed birthday entry at position {}", rank);
            ctx.say(build_removed_message(rank)).await?;
        }
        Ok(false) => {
            ctx.say(build_invalid_rank_message(ctx.prefix())).await?;
        }
        Err(e) => {
            error!("Failed to remove birthday at position {}: {}", rank, e);
            ctx.say(build_database_error()).await?;
        }
    }

    Ok(())
}
