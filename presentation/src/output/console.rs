//! Console output formatter for dashboard views

use autoreply_application::{DispatchError, DispatchOutcome, StoreCounts};
use autoreply_domain::{BusinessConfig, Message, MessageStatus, SessionState};
use colored::Colorize;
use serde::Serialize;
use serde_json::json;

const BODY_PREVIEW_CHARS: usize = 60;

/// Formats dashboard data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a message list with a counts line
    pub fn format_message_list(messages: &[Message], counts: StoreCounts) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Customer Messages"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} pending, {} answered, {} total\n",
            "Inbox:".cyan().bold(),
            counts.pending.to_string().yellow(),
            counts.answered.to_string().green(),
            counts.total()
        ));

        if messages.is_empty() {
            output.push_str(&format!("\n{}\n", "No messages match the filter.".dimmed()));
        }

        for message in messages {
            output.push_str(&format!(
                "\n{} {} {} {}\n    {}\n",
                format!("{:>4}", message.id().to_string()).bold(),
                Self::status_badge(message.status()),
                format!("[{}]", message.category()).cyan(),
                message.customer(),
                Self::preview(message.body()).dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a single message with its reply, if any
    pub fn format_message_detail(message: &Message) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header(&format!("Message {}", message.id())));
        output.push_str(&format!("{} {}\n", "From:".cyan().bold(), message.customer()));
        output.push_str(&format!("{} {}\n", "Category:".cyan().bold(), message.category()));
        output.push_str(&format!("{} {}\n", "Sentiment:".cyan().bold(), message.sentiment()));
        output.push_str(&format!(
            "{} {}\n",
            "Received:".cyan().bold(),
            message.timestamp().format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Status:".cyan().bold(),
            Self::status_badge(message.status())
        ));
        output.push_str(&Self::indent(message.body(), "  "));
        output.push('\n');

        if let Some(response) = message.response() {
            let answered = match message.response_time() {
                Some(at) => format!("Reply ({})", at.format("%Y-%m-%d %H:%M UTC")),
                None => "Reply".to_string(),
            };
            output.push_str(&format!("\n{}\n", answered.green().bold()));
            output.push_str(&Self::indent(response, "  "));
            output.push('\n');
        }

        output
    }

    /// Format the current session state
    pub fn format_session(state: &SessionState) -> String {
        match state.user() {
            Some(user) => format!(
                "{} {} ({})",
                "Logged in as".green(),
                user.email.bold(),
                user.role
            ),
            None => format!("{}", "Not logged in".yellow()),
        }
    }

    /// Format the business settings
    pub fn format_settings(config: &BusinessConfig) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Business Settings"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Name:".cyan().bold(), config.name));
        output.push_str(&format!("{} {}\n", "Hours:".cyan().bold(), config.hours));
        output.push_str(&format!(
            "{} {}\n",
            "Categories:".cyan().bold(),
            config.categories.join(", ")
        ));

        output.push_str(&Self::section_header("AI"));
        output.push_str(&format!("  model:       {}\n", config.ai.model));
        output.push_str(&format!("  temperature: {}\n", config.ai.temperature));
        output.push_str(&format!("  max_tokens:  {}\n", config.ai.max_tokens));
        output.push_str(&format!("  timeout:     {}s\n", config.ai.timeout_secs));

        if !config.common_responses.is_empty() {
            output.push_str(&Self::section_header("Common Responses"));
            for response in &config.common_responses {
                output.push_str(&format!(
                    "  {} {}\n    {}\n",
                    format!("{}.", response.id).dimmed(),
                    response.trigger.yellow(),
                    response.response
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a single dispatch failure
    pub fn format_dispatch_error(error: &DispatchError) -> String {
        let hint = if error.is_retryable() {
            " (message is still pending, try again)"
        } else {
            ""
        };
        format!("{} {}{}", "Error:".red().bold(), error, hint.dimmed())
    }

    /// Format the results of a batch dispatch
    pub fn format_dispatch_summary(outcomes: &[DispatchOutcome]) -> String {
        let mut output = String::new();
        let succeeded = outcomes.iter().filter(|(_, r)| r.is_ok()).count();

        output.push_str(&Self::section_header("Reply Results"));
        if outcomes.is_empty() {
            output.push_str(&format!("{}\n", "No pending messages.".dimmed()));
            return output;
        }

        for (id, result) in outcomes {
            match result {
                Ok(message) => output.push_str(&format!(
                    "  {} {} {}\n",
                    "v".green(),
                    id,
                    Self::preview(message.response().unwrap_or_default())
                )),
                Err(e) => output.push_str(&format!("  {} {} {}\n", "x".red(), id, e)),
            }
        }

        output.push_str(&format!(
            "\n{} of {} replies recorded\n",
            succeeded,
            outcomes.len()
        ));
        output
    }

    /// Batch outcomes as a JSON value
    pub fn outcomes_json(outcomes: &[DispatchOutcome]) -> serde_json::Value {
        serde_json::Value::Array(
            outcomes
                .iter()
                .map(|(id, result)| match result {
                    Ok(message) => json!({ "id": id.value(), "ok": true, "message": message }),
                    Err(e) => json!({
                        "id": id.value(),
                        "ok": false,
                        "error": e.to_string(),
                        "retryable": e.is_retryable(),
                    }),
                })
                .collect(),
        )
    }

    /// Format as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn status_badge(status: MessageStatus) -> String {
        match status {
            MessageStatus::Pending => format!("{}", "pending ".yellow()),
            MessageStatus::Answered => format!("{}", "answered".green()),
        }
    }

    fn preview(text: &str) -> String {
        let first_line = text.lines().next().unwrap_or_default();
        if first_line.chars().count() > BODY_PREVIEW_CHARS || text.lines().nth(1).is_some() {
            let cut: String = first_line.chars().take(BODY_PREVIEW_CHARS).collect();
            format!("{}...", cut.trim_end())
        } else {
            first_line.to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreply_domain::{MessageId, User};
    use chrono::{TimeZone, Utc};

    fn message(id: u64, body: &str) -> Message {
        Message::new(
            MessageId::new(id),
            "john@example.com",
            body,
            "General",
            Utc.with_ymd_and_hms(2024, 2, 14, 10, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_message_list_shows_counts_and_rows() {
        plain();
        let messages = vec![message(1, "What are your business hours?")];
        let counts = StoreCounts {
            pending: 1,
            answered: 0,
        };
        let output = ConsoleFormatter::format_message_list(&messages, counts);
        assert!(output.contains("1 pending, 0 answered, 1 total"));
        assert!(output.contains("#1"));
        assert!(output.contains("[General]"));
        assert!(output.contains("What are your business hours?"));
    }

    #[test]
    fn test_empty_list_says_so() {
        plain();
        let output = ConsoleFormatter::format_message_list(&[], StoreCounts::default());
        assert!(output.contains("No messages match the filter."));
    }

    #[test]
    fn test_detail_includes_reply() {
        plain();
        let answered = message(1, "Hours?")
            .with_recorded_reply("9 to 5")
            .unwrap();
        let output = ConsoleFormatter::format_message_detail(&answered);
        assert!(output.contains("Message #1"));
        assert!(output.contains("answered"));
        assert!(output.contains("  9 to 5"));
    }

    #[test]
    fn test_session_formatting() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_session(&SessionState::Anonymous),
            "Not logged in"
        );
        let state = SessionState::Authenticated(User::admin("owner@example.com"));
        assert_eq!(
            ConsoleFormatter::format_session(&state),
            "Logged in as owner@example.com (admin)"
        );
    }

    #[test]
    fn test_preview_truncates_long_bodies() {
        let long = "a".repeat(100);
        let preview = ConsoleFormatter::preview(&long);
        assert_eq!(preview.len(), BODY_PREVIEW_CHARS + 3);
        assert_eq!(ConsoleFormatter::preview("short\nsecond line"), "short...");
    }

    #[test]
    fn test_outcomes_json() {
        let answered = message(2, "Pricing?").with_recorded_reply("Plans start at $99").unwrap();
        let outcomes: Vec<DispatchOutcome> = vec![
            (MessageId::new(2), Ok(answered)),
            (MessageId::new(3), Err(DispatchError::Cancelled)),
        ];
        let value = ConsoleFormatter::outcomes_json(&outcomes);
        assert_eq!(value[0]["ok"], true);
        assert_eq!(value[0]["message"]["response"], "Plans start at $99");
        assert_eq!(value[1]["ok"], false);
        assert_eq!(value[1]["retryable"], true);
    }
}
