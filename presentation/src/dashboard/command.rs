//! Slash-command parsing for the interactive dashboard

use autoreply_domain::{
    CategoryFilter, DateRange, DomainError, MessageFilter, MessageId, NewMessage, StatusFilter,
};
use thiserror::Error;

/// A parsed dashboard command
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    Login { email: String, password: String },
    Logout,
    WhoAmI,
    List(MessageFilter),
    Show(MessageId),
    Reply(MessageId),
    ReplyAll,
    New(NewMessage),
    Settings,
    Help,
    Quit,
}

/// Errors produced while parsing a dashboard line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Invalid(#[from] DomainError),

    #[error("Commands start with '/'. Type /help for available commands")]
    NotACommand,
}

const LOGIN_USAGE: &str = "/login <email> <password>";
const SHOW_USAGE: &str = "/show <id>";
const REPLY_USAGE: &str = "/reply <id> | /reply all";
const NEW_USAGE: &str = "/new <category> <email> <text>";
const LIST_USAGE: &str = "/list [status=..] [category=..] [range=..]";

impl DashboardCommand {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Err(CommandError::NotACommand);
        };

        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        match name.to_lowercase().as_str() {
            "login" => {
                let mut parts = args.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(email), Some(password), None) => Ok(DashboardCommand::Login {
                        email: email.to_string(),
                        password: password.to_string(),
                    }),
                    _ => Err(CommandError::Usage(LOGIN_USAGE)),
                }
            }
            "logout" => Ok(DashboardCommand::Logout),
            "whoami" => Ok(DashboardCommand::WhoAmI),
            "list" | "ls" => parse_list(args).map(DashboardCommand::List),
            "show" => {
                if args.is_empty() || args.contains(char::is_whitespace) {
                    return Err(CommandError::Usage(SHOW_USAGE));
                }
                Ok(DashboardCommand::Show(args.parse()?))
            }
            "reply" => match args {
                "" => Err(CommandError::Usage(REPLY_USAGE)),
                "all" => Ok(DashboardCommand::ReplyAll),
                id if !id.contains(char::is_whitespace) => Ok(DashboardCommand::Reply(id.parse()?)),
                _ => Err(CommandError::Usage(REPLY_USAGE)),
            },
            "new" => {
                let mut parts = args.splitn(3, char::is_whitespace);
                match (parts.next(), parts.next(), parts.next().map(str::trim)) {
                    (Some(category), Some(customer), Some(body))
                        if !category.is_empty() && !customer.is_empty() && !body.is_empty() =>
                    {
                        Ok(DashboardCommand::New(NewMessage::new(customer, body, category)))
                    }
                    _ => Err(CommandError::Usage(NEW_USAGE)),
                }
            }
            "settings" | "config" => Ok(DashboardCommand::Settings),
            "help" | "h" | "?" => Ok(DashboardCommand::Help),
            "quit" | "exit" | "q" => Ok(DashboardCommand::Quit),
            _ => Err(CommandError::Unknown(format!("/{}", name))),
        }
    }
}

/// Build a filter from the three textual constraints
pub fn build_filter(status: &str, category: &str, range: &str) -> Result<MessageFilter, DomainError> {
    Ok(MessageFilter::all()
        .with_status(status.parse::<StatusFilter>()?)
        .with_category(category.parse::<CategoryFilter>()?)
        .with_date_range(range.parse::<DateRange>()?))
}

fn parse_list(args: &str) -> Result<MessageFilter, CommandError> {
    let (mut status, mut category, mut range) = ("all", "all", "all");

    for pair in args.split_whitespace() {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CommandError::Usage(LIST_USAGE));
        };
        match key {
            "status" => status = value,
            "category" => category = value,
            "range" => range = value,
            _ => return Err(CommandError::Usage(LIST_USAGE)),
        }
    }

    Ok(build_filter(status, category, range)?)
}

/// Help text listing every dashboard command
pub fn help_text() -> &'static str {
    "Commands:
  /login <email> <password>          - Log in to the dashboard
  /logout                            - Log out
  /whoami                            - Show the current session
  /list [status=..] [category=..] [range=..]
                                     - List messages (status: all|pending|answered,
                                       range: all|today|week|month)
  /show <id>                         - Show one message
  /reply <id>                        - Generate and record a reply
  /reply all                         - Reply to every pending message
  /new <category> <email> <text>     - Add an incoming message
  /settings                          - Show business settings
  /help, /h, /?                      - Show this help
  /quit, /exit, /q                   - Exit the dashboard"
}
