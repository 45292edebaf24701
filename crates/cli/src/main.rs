use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

use symptom_cli::client::HttpRelayClient;
use symptom_cli::form::{FormController, RelayClient};
use symptom_cli::render::{render_result, TerminalNotifier};

#[derive(Parser)]
#[command(name = "symptom")]
#[command(about = "Healthcare symptom checker (educational use only)")]
struct Cli {
    /// Base URL of the symptom relay server
    #[arg(long, env = "SYMPTOM_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse one symptom description
    Check {
        /// Free-text description of the symptoms
        symptoms: Vec<String>,
    },
    /// Read symptom descriptions from stdin, one per line
    Interactive,
}

fn run_once<R: RelayClient>(
    form: &mut FormController<R, TerminalNotifier>,
    text: &str,
) -> io::Result<bool> {
    match form.submit(text) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            render_result(&mut stdout, &result)?;
            stdout.flush()?;
            Ok(true)
        }
        // Already reported through the notifier.
        Err(_) => Ok(false),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let relay = HttpRelayClient::new(&cli.api_url);
    let mut form = FormController::new(relay, TerminalNotifier);

    match cli.command {
        Some(Commands::Check { symptoms }) => {
            if !run_once(&mut form, &symptoms.join(" "))? {
                std::process::exit(1);
            }
        }
        Some(Commands::Interactive) => {
            println!("Describe your symptoms (empty line to retry, Ctrl-D to quit):");
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                run_once(&mut form, &line)?;
                println!();
            }
        }
        None => {
            println!("Use 'symptom --help' for commands");
        }
    }

    Ok(())
}
