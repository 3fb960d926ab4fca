//! ANHub key generator and activation watcher.
//!
//! Terminal counterpart of the key-system web page:
//! 1. Enter (or detect, or paste) your HWID
//! 2. Get the preview key
//! 3. Register it by submitting the pre-filled tracker issue
//! 4. Wait while the ledger is polled for your activation
//!
//! Usage:
//!   anhub-keygen --hwid ABCDE12345
//!   anhub-keygen --detect --no-open

use anhub_activation::{
    ActivationPoller, IssueTracker, LedgerClient, LedgerConfig, PollConfig, PollState,
};
use anhub_keygen::{ConsoleFrontend, FlowConfig, KeyFlow, SystemClipboard};
use anhub_license::local_hwid;
use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "anhub-keygen")]
#[command(about = "ANHub key generator and activation watcher")]
struct Args {
    /// HWID to prefill the input with (the web page's ?hwid= parameter)
    #[arg(long)]
    hwid: Option<String>,

    /// Prefill with this machine's detected hardware fingerprint
    #[arg(long)]
    detect: bool,

    /// Prefill from the system clipboard
    #[arg(long)]
    paste: bool,

    /// Print the registration URL instead of opening a browser
    #[arg(long)]
    no_open: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let ledger = LedgerClient::new(LedgerConfig::default())?;
    let poller = ActivationPoller::new(ledger, PollConfig::default());
    let mut flow = KeyFlow::new(
        FlowConfig::default(),
        ConsoleFrontend::new(!args.no_open),
        SystemClipboard,
        IssueTracker::default(),
        poller,
    );

    banner();

    // Prefill sources, strongest first; none of them auto-submit.
    let mut prefill = args.hwid.clone();
    if prefill.is_none() && args.detect {
        prefill = Some(local_hwid());
    }
    if prefill.is_none() && args.paste {
        prefill = flow.paste_from_clipboard();
    }

    let key = loop {
        let raw = match &prefill {
            Some(value) => prompt(&format!("HWID [{value}]: "))?,
            None => prompt("HWID: ")?,
        };
        let raw = if raw.trim().is_empty() {
            prefill.clone().unwrap_or(raw)
        } else {
            raw
        };

        match flow.submit(&raw).await {
            Ok(key) => break key,
            // The flow already showed the corrective message.
            Err(_) => continue,
        }
    };

    if confirm("Copy the key to the clipboard?")? {
        flow.copy_key_to_clipboard();
    }

    prompt("Press Enter to open the registration page...")?;
    flow.register();

    loop {
        match flow.wait_for_activation().await {
            Ok(PollState::Succeeded) => break,
            Ok(_) => {
                if confirm("Check again?")? {
                    flow.retry();
                } else {
                    println!("  Your key: {key}");
                    println!("  Run again later to re-check activation.");
                    break;
                }
            }
            Err(err) => {
                warn!(error = %err, "poll session ended unexpectedly");
                break;
            }
        }
    }

    Ok(())
}

fn banner() {
    println!();
    println!("========================================");
    println!("  ANHub Key System");
    println!("========================================");
    println!("  Enter your HWID to generate a key,");
    println!("  then register it via the issue page.");
    println!();
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn confirm(message: &str) -> io::Result<bool> {
    let answer = prompt(&format!("{message} [y/N]: "))?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
