//! termout - demonstration CLI for the terminal output layer.
//!
//! Each sub-command is a small handler whose result is handed to the [`Responder`].

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::time::Duration;
use termout::{
    CommandResult, LineSender, Output, ProgressBar, Responder, ResultStream, Spinner,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = cli().get_matches();
    let outcome = dispatch(&matches).await;

    // Handler errors are rendered, not mapped to an exit status.
    let responder = Responder::new();
    match outcome {
        Ok(value) => responder.respond(Some(value), None).await?,
        Err(err) => responder.respond(None, Some(&err)).await?,
    }

    Ok(())
}

fn cli() -> Command {
    Command::new("termout")
        .version(termout::VERSION)
        .about("Demonstrates termout's progress indicators and result streaming")
        .subcommand_required(true)
        .subcommand(Command::new("hello").about("Print 'Hello World!'"))
        .subcommand(
            Command::new("params").about("Greet someone by name").arg(
                Arg::new("name")
                    .long("name")
                    .help("Name to greet")
                    .default_value("World"),
            ),
        )
        .subcommand(Command::new("stream").about("Stream lines from a background task"))
        .subcommand(Command::new("progress").about("Drive a progress bar to completion"))
        .subcommand(Command::new("spinner").about("Show a spinner while work runs"))
}

async fn dispatch(matches: &ArgMatches) -> Result<CommandResult> {
    match matches.subcommand() {
        Some(("hello", _)) => Ok("Hello World!".into()),
        Some(("params", args)) => {
            let name = args
                .get_one::<String>("name")
                .context("name has a default value")?;
            Ok(format!("Hello {name}!").into())
        }
        Some(("stream", _)) => Ok(stream()),
        Some(("progress", _)) => progress().await,
        Some(("spinner", _)) => spinner().await,
        Some((other, _)) => anyhow::bail!("Unknown command: {other}"),
        None => anyhow::bail!("No command given"),
    }
}

fn stream() -> CommandResult {
    let (tx, lines) = ResultStream::channel();

    tokio::spawn(async move {
        if let Err(err) = produce_lines(tx).await {
            log::debug!("stream producer stopped early: {err}");
        }
    });

    lines.into()
}

/// Stops at the first send after the consumer has gone away.
async fn produce_lines(tx: LineSender) -> termout::Result<()> {
    tx.send("starting something")?;
    tokio::time::sleep(Duration::from_secs(1)).await;
    tx.send("done task 1")?;
    tx.send("starting task 2")?;
    tokio::time::sleep(Duration::from_secs(2)).await;
    tx.send("completed all tasks")?;
    tx.close();
    Ok(())
}

async fn progress() -> Result<CommandResult> {
    let output = Output::stdout();
    let mut bar = ProgressBar::new(output.clone(), 100)?;

    output.println("Starting a time consuming process")?;
    while bar.increment(10)? {
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    Ok("Completed!".into())
}

async fn spinner() -> Result<CommandResult> {
    let mut spinner = Spinner::globe(Output::stdout());

    spinner.spin()?;
    tokio::time::sleep(Duration::from_secs(3)).await;
    spinner.stop().await?;

    Ok("Completed!".into())
}
