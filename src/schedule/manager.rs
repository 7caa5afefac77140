use chrono::Utc;
use poise::serenity_prelude as serenity;
use std::str::FromStr;
use std::sync::Arc;
use tokio::time::{Duration, sleep};
use tracing::{error, info, warn};

use super::birthday_tasks::run_birthday_check;
use crate::models::Data;

/// Start the schedule manager that runs the daily birthday check.
///
/// The check fires once per firing of the configured cron expression,
/// evaluated in the configured timezone; the evaluation itself keeps no
/// already-notified state, so this task firing at most once per day is what
/// keeps announcements from repeating.
pub fn start_schedule_manager(http: Arc<serenity::Http>, data: Arc<Data>) {
    tokio::spawn(async move {
        info!("Schedule manager started");

        let schedule = match cron::Schedule::from_str(&data.announce_cron) {
            Ok(schedule) => schedule,
            Err(e) => {
                error!(
                    "Invalid cron expression '{}', birthday checks disabled: {}",
                    data.announce_cron, e
                );
                return;
            }
        };

        loop {
            let now = Utc::now().with_timezone(&data.timezone);
            let Some(next_time) = schedule.upcoming(data.timezone).next() else {
                warn!(
                    "No upcoming time for cron '{}', stopping schedule manager",
                    data.announce_cron
                );
                break;
            };

            let wait_duration = (next_time - now)
                .to_std()
                .unwrap_or(Duration::from_secs(60));

            info!(
                "Next birthday check at {} (in {} minutes)",
                next_time,
                wait_duration.as_secs() / 60
            );

            sleep(wait_duration).await;

            if let Err(e) = run_birthday_check(&http, &data).await {
                error!("Birthday check failed: {}", e);
            }
        }

        info!("Schedule manager stopped");
    });
}
