//! Terminal chat with the portfolio assistant
//!
//! Answers from the local rule table by default. Set `PORTFOLIO_CHAT_URL` to
//! talk to a running proxy instead. The two are never mixed in one run.
//!
//! Commands: `:reset` clears the conversation, `:N` sends suggestion N,
//! `:quit` exits.

use portfolio_assistant::client::RemoteAssistantClient;
use portfolio_assistant::config::ChatConfig;
use portfolio_assistant::dispatcher::ResponseDispatcher;
use portfolio_assistant::render::{self, ChatInput, Suggestion};
use portfolio_assistant::session::{ChatSession, ThinkingDelay, GREETING};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const REMOTE_FAILURE: &str =
    "Sorry, I couldn't get a response right now. Please try sending your message again.";

enum Backend {
    Scripted(ResponseDispatcher),
    Remote(RemoteAssistantClient),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_assistant=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ChatConfig::from_env();
    let backend = match &config.remote_url {
        Some(url) => {
            let client = RemoteAssistantClient::new(url.as_str())?;
            println!("(remote assistant at {})", client.url());
            Backend::Remote(client)
        }
        None => Backend::Scripted(ResponseDispatcher::portfolio()),
    };

    let mut session = ChatSession::new();
    let mut suggestions: Vec<Suggestion> = Vec::new();
    tracing::info!(session = %session.id(), "Chat session started");

    show_reply(GREETING, &mut suggestions);
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let message = match render::parse_input(&line, &suggestions) {
            ChatInput::Quit => break,
            ChatInput::Reset => {
                session.reset();
                show_reply(GREETING, &mut suggestions);
                prompt()?;
                continue;
            }
            ChatInput::NoSuggestion(n) => {
                println!("(no suggestion {n})");
                prompt()?;
                continue;
            }
            ChatInput::Ignore => {
                prompt()?;
                continue;
            }
            ChatInput::Send(message) => message,
        };
        // Echo a picked suggestion
        if message != line.trim() {
            println!("> {message}");
        }

        match &backend {
            Backend::Scripted(dispatcher) => {
                think(config.thinking_delay).await?;
                if let Some(reply) = session.reply_scripted(dispatcher, &message) {
                    show_reply(&reply, &mut suggestions);
                }
            }
            Backend::Remote(client) => match client.ask(session.history(), &message).await {
                Ok(reply) => {
                    session.record_exchange(message.as_str(), reply.as_str());
                    show_reply(&reply, &mut suggestions);
                }
                Err(e) => {
                    tracing::warn!(session = %session.id(), error = %e, "Remote assistant failed");
                    println!("{REMOTE_FAILURE}");
                }
            },
        }
        prompt()?;
    }

    Ok(())
}

async fn think(delay: ThinkingDelay) -> std::io::Result<()> {
    if !delay.is_none() {
        print!("...");
        std::io::stdout().flush()?;
        delay.pause().await;
        println!();
    }
    Ok(())
}

fn show_reply(reply: &str, suggestions: &mut Vec<Suggestion>) {
    println!("\n{}\n", render::to_plain_text(reply));
    *suggestions = render::suggestions(reply);
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("  [:{}] {}", i + 1, suggestion.label);
    }
}

fn prompt() -> std::io::Result<()> {
    print!("you> ");
    std::io::stdout().flush()
}
