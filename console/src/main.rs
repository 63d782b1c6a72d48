//! Terminal front end for managing countries against a REST backend.

mod command;
mod config;
mod host;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use country_core::{view, CountryClient, CountryId, CountryManager, Notification, Notifier, Transport};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use command::{Command, HELP};
use config::{Config, DEFAULT_LOG_FILTER};
use host::{StdinConfirmer, TerminalNotifier, UreqTransport};

type Manager = CountryManager<UreqTransport, TerminalNotifier, StdinConfirmer>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    info!(api_url = %config.api_url, "starting country console");

    let transport = UreqTransport::new();
    let mut manager = CountryManager::new(
        CountryClient::new(&config.api_url),
        transport.clone(),
        TerminalNotifier,
        StdinConfirmer,
    );

    // Load failures are already reported as toasts.
    if let Err(err) = manager.mount().await {
        debug!(%err, "initial load failed");
    }
    print_view(&manager);
    println!("type `help` for commands");

    loop {
        let Some(line) = prompt_line().await? else {
            break;
        };
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        if !dispatch(&mut manager, &transport, command).await {
            break;
        }
    }

    info!("bye");
    Ok(())
}

/// Run one command. Returns `false` when the user asked to quit.
async fn dispatch(manager: &mut Manager, transport: &UreqTransport, command: Command) -> bool {
    // Operation failures are surfaced through the notifier; the loop keeps going.
    let result = match command {
        Command::Quit => return false,
        Command::Help => {
            println!("{HELP}");
            return true;
        }
        Command::Refresh => manager.refresh().await.map(drop),
        Command::Name(name) => {
            manager.set_name(name);
            Ok(())
        }
        Command::Edit(id) => {
            let selected = manager.countries().iter().find(|c| c.id == id).cloned();
            match selected {
                Some(country) => manager.select_for_edit(&country),
                None => TerminalNotifier.notify(Notification::info(format!(
                    "No country with id {id} in the list"
                ))),
            }
            Ok(())
        }
        Command::Save => manager.save().await.map(drop),
        Command::Reset => {
            manager.reset_form();
            Ok(())
        }
        Command::Delete(id) => manager.delete_record(id).await.map(drop),
        Command::Show(id) => {
            show(manager.client(), transport, id).await;
            return true;
        }
    };
    if let Err(err) = result {
        debug!(%err, "command failed");
    }
    print_view(manager);
    true
}

async fn show(client: &CountryClient, transport: &UreqTransport, id: CountryId) {
    let request = client.build_get_country(id);
    let result = match transport.execute(request).await {
        Ok(response) => client.parse_get_country(response),
        Err(err) => Err(err),
    };
    match result {
        Ok(country) => println!("#{} {}", country.id, country.name),
        Err(err) => TerminalNotifier.notify(Notification::error(format!(
            "Failed to load country {id}: {err}"
        ))),
    }
}

fn print_view(manager: &Manager) {
    println!();
    print!("{}", view::render(manager.countries(), manager.form()));
}

/// Read one line from stdin; `None` at end of input.
async fn prompt_line() -> anyhow::Result<Option<String>> {
    tokio::task::spawn_blocking(|| -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(b"> ")?;
        stdout.flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    })
    .await
    .context("input task failed")?
    .context("failed to read from stdin")
}
