//! REPL (Read-Eval-Print Loop) for interactive play

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::{ReplyFormatter, formatter_for};
use colored::Colorize;
use mindreader_application::{AnswerInput, GameController, GameReply, SessionStore};
use mindreader_domain::{OutputFormat, PlayerId};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// What the loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplStep {
    /// Text to print, one entry per line
    pub output: Vec<String>,
    pub quit: bool,
}

impl ReplStep {
    fn show(output: Vec<String>) -> Self {
        Self {
            output,
            quit: false,
        }
    }

    fn quit(message: &str) -> Self {
        Self {
            output: vec![message.to_string()],
            quit: true,
        }
    }
}

/// Interactive game REPL
pub struct GameRepl<S: SessionStore + 'static> {
    controller: Arc<GameController<S>>,
    player: PlayerId,
    formatter: Box<dyn ReplyFormatter>,
    config: ReplConfig,
}

impl<S: SessionStore + 'static> GameRepl<S> {
    pub fn new(controller: Arc<GameController<S>>, player: PlayerId) -> Self {
        Self {
            controller,
            player,
            formatter: formatter_for(OutputFormat::Text),
            config: ReplConfig::default(),
        }
    }

    pub fn with_formatter(mut self, formatter: Box<dyn ReplyFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if !self.config.quiet {
            self.print_welcome();
        }
        for line in self.start_game().await.output {
            println!("{}", line);
        }

        loop {
            match rl.readline("> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    let step = self.handle_line(line).await;
                    for text in &step.output {
                        println!("{}", text);
                    }
                    if step.quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Process one trimmed, non-empty input line
    pub async fn handle_line(&self, line: &str) -> ReplStep {
        if line.starts_with('/') {
            return self.handle_command(line).await;
        }

        // `attribute:token` comes from pasted button data
        let input = if line.contains(':') {
            AnswerInput::from_callback_data(self.player.clone(), line)
        } else {
            AnswerInput::new(self.player.clone(), line)
        };

        match self.controller.answer(input).await {
            Ok(reply) => ReplStep::show(self.render(&reply)),
            Err(e) => {
                let mut output = vec![self.formatter.format_error(&e)];
                if e.is_invalid_answer()
                    && let Ok(current) = self.controller.current(&self.player).await
                {
                    output.push(self.formatter.format_reply(&current));
                }
                ReplStep::show(output)
            }
        }
    }

    async fn handle_command(&self, cmd: &str) -> ReplStep {
        match cmd {
            "/quit" | "/exit" | "/q" => ReplStep::quit("Bye!"),
            "/start" | "/restart" => self.start_game().await,
            "/stop" => {
                let message = if self.controller.abandon(&self.player).await {
                    "Game abandoned. Type /start to play again."
                } else {
                    "No game in progress."
                };
                ReplStep::show(vec![message.to_string()])
            }
            "/status" => {
                let session = self.controller.session(&self.player).await;
                ReplStep::show(vec![ConsoleFormatter::format_status(
                    session.as_ref(),
                    self.controller.catalog(),
                )])
            }
            "/help" | "/h" | "/?" => ReplStep::show(help_lines()),
            _ => ReplStep::show(vec![format!(
                "{} {} (type /help for commands)",
                "Unknown command:".red(),
                cmd
            )]),
        }
    }

    async fn start_game(&self) -> ReplStep {
        let reply = self.controller.start(&self.player).await;
        ReplStep::show(self.render(&reply))
    }

    fn render(&self, reply: &GameReply) -> Vec<String> {
        let mut output = vec![self.formatter.format_reply(reply)];
        if reply.is_terminal() && !self.config.quiet {
            output.push(format!("{}", "Type /start to play again.".dimmed()));
        }
        output
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                 Mindreader                  │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::greeting());
        println!(
            "Catalog: {} characters, {} attributes",
            self.controller.catalog().len(),
            self.controller.catalog().attribute_domain().len()
        );
        println!("Strategy: {}", self.controller.config().strategy.description());
        println!();
        for line in help_lines() {
            println!("{}", line);
        }
    }
}

fn help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  /start, /restart  - Start a new game".to_string(),
        "  /stop             - Abandon the current game".to_string(),
        "  /status           - Show the current game".to_string(),
        "  /help, /h, /?     - Show this help".to_string(),
        "  /quit, /exit, /q  - Exit".to_string(),
        String::new(),
        "Answer questions with yes, no or maybe.".to_string(),
    ]
}
