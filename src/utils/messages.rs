/// Pure functions for building command replies and announcements
use crate::models::BirthdayRecord;
use crate::utils::markdown::escape_markdown;

/// Build the help text listing the available commands
pub fn build_help_text(prefix: &str) -> String {
    format!(
        "🎉 **Available commands:**\n\n\
         ➕ Add a birthday:\n\
         `{prefix}add Full Name DD.MM.YYYY`\n\n\
         ❌ Remove a birthday:\n\
         `{prefix}remove number`\n\n\
         📅 List all birthdays:\n\
         `{prefix}list`"
    )
}

/// Build the confirmation reply for a newly added birthday
pub fn build_added_message(name: &str, date: &str) -> String {
    format!(
        "🎉 **{}** added!\nDate: `{}`",
        escape_markdown(name),
        escape_markdown(date)
    )
}

/// Build the usage hint for a malformed add command
pub fn build_add_usage_message(prefix: &str) -> String {
    format!("❌ Invalid format. Use:\n`{prefix}add Full Name DD.MM.YYYY`")
}

/// Build the birthday list reply with current 0-based numbers
pub fn build_list_message(records: &[BirthdayRecord]) -> String {
    let entries = records
        .iter()
        .enumerate()
        .map(|(rank, record)| {
            format!(
                "🔹 **{}**: {} - {}",
                rank,
                escape_markdown(&record.name),
                escape_markdown(&record.date)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("📅 **Birthday list:**\n\n{}", entries)
}

/// Build the reply for an empty birthday list
pub fn build_empty_list_message() -> String {
    "📭 The birthday list is empty".to_string()
}

/// Build the confirmation reply for a removed entry
pub fn build_removed_message(rank: i64) -> String {
    format!("✅ Entry **{}** removed", rank)
}

/// Build the usage hint for a malformed remove command
pub fn build_remove_usage_message(prefix: &str) -> String {
    format!("❌ Invalid format. Use:\n`{prefix}remove number`")
}

/// Build the reply for a number that does not match any entry
pub fn build_invalid_rank_message(prefix: &str) -> String {
    format!("❌ Invalid number. Use `{prefix}list` to see the current numbers")
}

/// Build a database error reply (generic, doesn't expose internals)
pub fn build_database_error() -> String {
    "❌ A database error occurred. Please try again later.".to_string()
}

/// Build the announcement for a birthday happening tomorrow
pub fn build_upcoming_message(name: &str, occurrence: &str) -> String {
    format!(
        "🚨 **Heads up!** Tomorrow ({})\n\
         🎂 It's **{}**'s birthday!\n\
         *Don't forget to congratulate them!* 🎁",
        occurrence,
        escape_markdown(name)
    )
}

/// Build the announcement for a birthday happening today
pub fn build_today_message(name: &str) -> String {
    format!(
        "🎈 **{}** celebrates their birthday today!\n\
         🎊 Congratulations and best wishes! 🥳",
        escape_markdown(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, date: &str) -> BirthdayRecord {
        BirthdayRecord {
            id,
            name: name.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_build_help_text() {
        let help = build_help_text("!");
        assert!(help.contains("`!add Full Name DD.MM.YYYY`"));
        assert!(help.contains("`!remove number`"));
        assert!(help.contains("`!list`"));
    }

    #[test]
    fn test_build_added_message() {
        let message = build_added_message("Jane Doe", "01.01.2000");
        assert!(message.contains("**Jane Doe**"));
        assert!(message.contains("`01.01.2000`"));
    }

    #[test]
    fn test_build_added_message_escapes_name() {
        let message = build_added_message("J*ne", "01.01.2000");
        assert!(message.contains("J\\*ne"));
    }

    #[test]
    fn test_build_list_message_numbers_from_zero() {
        let records = vec![
            record(1, "Alice", "15.03.1990"),
            record(3, "Bob", "29.02.2000"),
        ];
        let message = build_list_message(&records);

        assert!(message.contains("**0**: Alice - 15.03.1990"));
        assert!(message.contains("**1**: Bob - 29.02.2000"));
        // Numbers are positions, not stored ids
        assert!(!message.contains("**3**"));
    }

    #[test]
    fn test_build_empty_list_message() {
        assert!(build_empty_list_message().contains("empty"));
    }

    #[test]
    fn test_build_removed_message() {
        assert_eq!(build_removed_message(2), "✅ Entry **2** removed");
    }

    #[test]
    fn test_build_usage_messages_mention_prefix() {
        assert!(build_add_usage_message("?").contains("`?add"));
        assert!(build_remove_usage_message("?").contains("`?remove"));
        assert!(build_invalid_rank_message("?").contains("`?list`"));
    }

    #[test]
    fn test_build_upcoming_message() {
        let message = build_upcoming_message("Alice", "15.03.2024");
        assert!(message.contains("Tomorrow (15.03.2024)"));
        assert!(message.contains("**Alice**"));
    }

    #[test]
    fn test_build_today_message() {
        let message = build_today_message("Alice");
        assert!(message.contains("**Alice**"));
        assert!(message.contains("today"));
    }
}
