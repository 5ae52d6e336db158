//! Interactive dashboard REPL

use super::command::{CommandError, DashboardCommand, help_text};
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use autoreply_application::{DispatchNotifier, ReplyDispatcher, Session};
use autoreply_domain::BusinessConfig;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Interactive dashboard over a session and a reply dispatcher
pub struct DashboardRepl {
    session: Arc<Session>,
    dispatcher: Arc<ReplyDispatcher>,
    business: BusinessConfig,
    config: ReplConfig,
}

impl DashboardRepl {
    pub fn new(
        session: Arc<Session>,
        dispatcher: Arc<ReplyDispatcher>,
        business: BusinessConfig,
    ) -> Self {
        Self {
            session,
            dispatcher,
            business,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the dashboard until /quit or Ctrl-D
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled ({}): {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.config.prompt.clone()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if self.execute_line(line).await {
                        break;
                    }
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => {
                    println!("^C");
                }
            }
        }

        Ok(())
    }

    /// Execute one input line. Returns true if the dashboard should exit.
    pub async fn execute_line(&self, line: &str) -> bool {
        match DashboardCommand::parse(line) {
            Ok(command) => self.handle_command(command).await,
            Err(e @ (CommandError::Unknown(_) | CommandError::NotACommand)) => {
                println!("{}", e);
                println!("Type /help for available commands");
                false
            }
            Err(e) => {
                println!("{} {}", "Error:".red().bold(), e);
                false
            }
        }
    }

    async fn handle_command(&self, command: DashboardCommand) -> bool {
        debug!("Dashboard command: {:?}", command);

        match command {
            DashboardCommand::Quit => {
                println!("Bye!");
                return true;
            }
            DashboardCommand::Help => println!("\n{}\n", help_text()),
            DashboardCommand::WhoAmI => {
                println!("{}", ConsoleFormatter::format_session(&self.session.state()))
            }
            DashboardCommand::Login { email, password } => {
                match self.session.login(&email, &password).await {
                    Ok(user) => println!("{} {}", "Welcome,".green(), user.email.bold()),
                    Err(e) => println!("{} {}", "Login failed:".red().bold(), e),
                }
            }
            other => {
                if !self.session.is_authenticated() {
                    println!(
                        "{}",
                        "Please log in first: /login <email> <password>".yellow()
                    );
                    return false;
                }
                self.handle_authenticated(other).await;
            }
        }

        false
    }

    async fn handle_authenticated(&self, command: DashboardCommand) {
        let store = self.dispatcher.store();

        match command {
            DashboardCommand::Logout => {
                self.session.logout();
                println!("Logged out");
            }
            DashboardCommand::List(filter) => {
                let messages = store.list(&filter);
                println!(
                    "{}",
                    ConsoleFormatter::format_message_list(&messages, store.counts())
                );
            }
            DashboardCommand::Show(id) => match store.get(id) {
                Some(message) => println!("{}", ConsoleFormatter::format_message_detail(&message)),
                None => println!("{} Message {} not found", "Error:".red().bold(), id),
            },
            DashboardCommand::Reply(id) => {
                let notifier = self.notifier();
                match self
                    .dispatcher
                    .generate_and_apply_with_progress(id, notifier.as_ref())
                    .await
                {
                    Ok(message) => println!("{}", ConsoleFormatter::format_message_detail(&message)),
                    Err(e) => println!("{}", ConsoleFormatter::format_dispatch_error(&e)),
                }
            }
            DashboardCommand::ReplyAll => {
                let notifier = self.notifier();
                let outcomes = self.dispatcher.generate_all_pending(notifier.as_ref()).await;
                println!("{}", ConsoleFormatter::format_dispatch_summary(&outcomes));
            }
            DashboardCommand::New(new) => match store.insert(new) {
                Ok(message) => println!(
                    "{} {} from {} [{}]",
                    "Added".green(),
                    message.id(),
                    message.customer(),
                    message.category()
                ),
                Err(e) => println!("{} {}", "Error:".red().bold(), e),
            },
            DashboardCommand::Settings => {
                println!("{}", ConsoleFormatter::format_settings(&self.business))
            }
            DashboardCommand::Login { .. }
            | DashboardCommand::WhoAmI
            | DashboardCommand::Help
            | DashboardCommand::Quit => {}
        }
    }

    fn notifier(&self) -> Box<dyn DispatchNotifier> {
        if self.config.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         Auto-Reply Dashboard                │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{} {}", "Business:".cyan().bold(), self.business.name);
        println!("{} {}", "Model:".cyan().bold(), self.business.ai.model);
        println!("{}", ConsoleFormatter::format_session(&self.session.state()));
        println!();
        println!("Type /help for available commands");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use autoreply_application::{
        AuthError, AuthProvider, GenerationError, MessageStore, ReplyContext, ReplyGenerator,
    };
    use autoreply_domain::{MessageFilter, MessageId, NewMessage, StatusFilter, User};

    struct AcceptAll;

    #[async_trait]
    impl AuthProvider for AcceptAll {
        async fn authenticate(&self, email: &str, _password: &str) -> Result<User, AuthError> {
            Ok(User::admin(email))
        }
    }

    struct Echo;

    #[async_trait]
    impl ReplyGenerator for Echo {
        async fn generate(
            &self,
            message: &str,
            _context: &ReplyContext,
        ) -> Result<String, GenerationError> {
            Ok(format!("Re: {}", message))
        }
    }

    fn repl() -> DashboardRepl {
        let business = BusinessConfig::default();
        let store = Arc::new(MessageStore::new(business.categories.clone()));
        store
            .insert(NewMessage::new("sarah@example.com", "Pricing?", "Sales"))
            .unwrap();
        let dispatcher = Arc::new(ReplyDispatcher::new(
            store,
            Arc::new(Echo),
            business.ai.clone(),
        ));
        let session = Arc::new(Session::new(Arc::new(AcceptAll)));
        DashboardRepl::new(session, dispatcher, business).with_config(ReplConfig {
            show_progress: false,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_commands_require_login() {
        let repl = repl();
        assert!(!repl.execute_line("/reply 1").await);
        let message = repl.dispatcher.store().get(MessageId::new(1)).unwrap();
        assert!(message.is_pending());
    }

    #[tokio::test]
    async fn test_login_then_reply() {
        let repl = repl();
        repl.execute_line("/login owner@example.com pw").await;
        assert!(repl.session.is_authenticated());

        repl.execute_line("/reply 1").await;
        let message = repl.dispatcher.store().get(MessageId::new(1)).unwrap();
        assert_eq!(message.response(), Some("Re: Pricing?"));
    }

    #[tokio::test]
    async fn test_new_then_reply_all() {
        let repl = repl();
        repl.execute_line("/login owner@example.com pw").await;
        repl.execute_line("/new support mia@example.com Where is my order?")
            .await;

        let store = repl.dispatcher.store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(MessageId::new(2)).unwrap().category(), "Support");

        repl.execute_line("/reply all").await;
        let pending = store.list(&MessageFilter::all().with_status(StatusFilter::Pending));
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn test_logout_and_quit() {
        let repl = repl();
        repl.execute_line("/login owner@example.com pw").await;
        assert!(!repl.execute_line("/logout").await);
        assert!(!repl.session.is_authenticated());
        assert!(repl.execute_line("/quit").await);
    }
}
