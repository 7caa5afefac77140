use chrono::Utc;
use poise::serenity_prelude::{self as serenity, CreateMessage};
use std::sync::Arc;
use tracing::{info, warn};

use crate::models::{Data, Error};
use crate::services::reminder::{Notification, evaluate};
use crate::utils::datetime::format_date;
use crate::utils::messages::{build_today_message, build_upcoming_message};

/// Evaluate today's birthdays and send due announcements to the group channel
pub async fn run_birthday_check(http: &Arc<serenity::Http>, data: &Data) -> Result<(), Error> {
    let today = Utc::now().with_timezone(&data.timezone).date_naive();

    info!("Running birthday check for {}", today);

    let records = data.db.get_all_birthdays().await?;
    let notifications = evaluate(today, &records);

    if notifications.is_empty() {
        info!("No birthday notifications due");
        return Ok(());
    }

    info!("Sending {} birthday notification(s)", notifications.len());

    for notification in notifications {
        let content = match &notification {
            Notification::UpcomingTomorrow { name, occurrence } => {
                build_upcoming_message(name, &format_date(*occurrence))
            }
            Notification::Today { name } => build_today_message(name),
        };

        let message = CreateMessage::new().content(content);

        // Failed deliveries are logged and not retried
        if let Err(e) = data
            .announce_channel_id
            .send_message(http, message)
            .await
        {
            warn!(
                "Failed to send birthday notification to channel {}: {}",
                data.announce_channel_id, e
            );
        }
    }

    Ok(())
}
