use chrono_tz::Tz;
use poise::serenity_prelude::{ChannelId, UserId};

use crate::database::Database;

/// A stored birthday entry
///
/// `date` keeps the exact DD.MM.YYYY token the admin entered; it is
/// validated at insert time and parsed again during the daily check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BirthdayRecord {
    pub id: i64,
    pub name: String,
    pub date: String,
}

/// Bot state shared across all commands and the schedule manager
#[derive(Clone)]
pub struct Data {
    /// Database connection
    pub db: Database,
    /// The only user allowed to manage the birthday list
    pub admin_id: UserId,
    /// Channel that receives birthday announcements
    pub announce_channel_id: ChannelId,
    /// Timezone the daily check runs in
    pub timezone: Tz,
    /// Cron expression for the daily check
    pub announce_cron: String,
}

impl Data {
    pub fn new(
        db: Database,
        admin_id: UserId,
        announce_channel_id: ChannelId,
        timezone: Tz,
        announce_cron: String,
    ) -> Self {
        Self {
            db,
            admin_id,
            announce_channel_id,
            timezone,
            announce_cron,
        }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
