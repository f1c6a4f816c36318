use std::error::Error;
use std::io::{BufRead, IsTerminal};
use std::sync::Arc;
use std::thread;

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use github_repo_searching::{
    input, render, Args, GitHubSearcher, LoadingSpinner, SearchWidget, WidgetHandle,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();

    // Logs go to stderr; stdout is the widget.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let searcher = Arc::new(GitHubSearcher::new(&args)?);
    let (widget, handle) = SearchWidget::new(searcher, args.debounce());

    eprintln!("{}", input::HELP);
    if let Some(query) = &args.query {
        handle.input(query.clone());
    }

    // Blocking stdin reads get their own thread so the runtime never waits on them.
    thread::spawn(move || read_prompt(handle));

    let mut spinner = if std::io::stderr().is_terminal() {
        LoadingSpinner::new()
    } else {
        LoadingSpinner::hidden()
    };
    let mut rendered = None;
    widget
        .run(|session| {
            spinner.set_visible(session.is_loading());
            if session.is_loading() || rendered == Some(session.revision()) {
                return;
            }
            rendered = Some(session.revision());
            let screen = render::render(session);
            spinner.suspend(|| println!("{}", screen));
        })
        .await;

    spinner.set_visible(false);
    info!("Search widget closed");
    Ok(())
}

fn read_prompt(handle: WidgetHandle) {
    for line in std::io::stdin().lock().lines() {
        match line {
            Ok(line) => match input::parse_line(&line) {
                Ok(event) => {
                    if !handle.send(event) {
                        break;
                    }
                }
                Err(e) => warn!("{} ({})", e, input::HELP),
            },
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }
}
