use anyhow::Result;
use clap::{Parser, Subcommand};
use souschef_core::{Config, Message, Role, get_agent_response};
use std::io::{BufRead, Write};
use tracing::info;

#[derive(Parser)]
#[command(name = "souschef")]
#[command(about = "Recipe suggestion chatbot CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question and print the reply
    Ask {
        /// What to ask, e.g. "I have eggs and spinach"
        question: String,
    },

    /// Interactive chat session (empty line or Ctrl-D to exit)
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    info!("Using model: {}", config.model_name);

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { question } => {
            ask_command(question, &config).await?;
        }
        Commands::Chat => {
            chat_command(&config).await?;
        }
    }

    Ok(())
}

async fn ask_command(question: String, config: &Config) -> Result<()> {
    let history = vec![Message::user(question)];
    let updated = get_agent_response(&history, config).await?;

    print_last_reply(&updated);
    Ok(())
}

async fn chat_command(config: &Config) -> Result<()> {
    println!("Tell me what's in your kitchen and I'll suggest a recipe.");
    println!("Empty line to exit.\n");

    let stdin = std::io::stdin();
    let mut history: Vec<Message> = Vec::new();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            break;
        }

        history.push(Message::user(input));
        history = get_agent_response(&history, config).await?;

        print_last_reply(&history);
    }

    println!("Bon appetit!");
    Ok(())
}

fn print_last_reply(history: &[Message]) {
    if let Some(reply) = history.last().filter(|m| m.role == Role::Assistant) {
        println!("\n{}\n", reply.content);
    }
}
