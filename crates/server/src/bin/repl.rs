//! Interactive REPL for manual testing
//!
//! Reads a query per line, prints the composed response, exits on
//! "quit" or "exit".

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use college_agent_agent::{AgentError, CollegeAgent};
use college_agent_config::{load_settings, ResponseTemplates};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config_path = std::env::args().nth(1);
    let settings = load_settings(config_path.as_deref()).context("loading settings")?;

    let agent = CollegeAgent::from_dataset_file(
        settings.dataset.path.clone(),
        ResponseTemplates::default(),
    )
    .with_context(|| format!("loading dataset from {}", settings.dataset.path))?;

    println!("College Information Agent ({} colleges loaded)", agent.college_count());
    println!("Enter a query, or 'quit' to exit.");

    let stdin = io::stdin();
    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        match agent.handle_text(input, None) {
            Ok(response) => println!("{}", response),
            Err(AgentError::EmptyQuery) => println!("Please enter a query."),
            Err(e) => println!("Error: {}", e),
        }
    }

    Ok(())
}
