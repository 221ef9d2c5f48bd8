//! MisinfoGuard Shell
//!
//! Wires the client core the way a browser host would and runs one command.
//! Uses `anyhow` for startup errors; everything below the shell reports
//! through its own typed errors.

mod command;
mod config;

use analysis::{CurrentAnalysis, FormConfig, ResultView, SubmissionForm, SubmitFlow, Tab};
use auth::{AuthConfig, AuthSession, TokenProvider};
use backend::HttpBackend;
use backend::models::FileUpload;
use command::{Command, Invocation, USAGE, mime_for};
use config::ShellConfig;
use platform::download::DirectorySink;
use platform::storage::{FileStore, LocalStore};
use quota::{BackendSessionSource, GuestQuotaTracker, QuotaConfig, UpgradePrompt};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| ShellConfig::log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let invocation = match Invocation::parse(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let config = ShellConfig::from_env()?;
    tracing::debug!(api = %config.backend.base_url, data_dir = %config.data_dir.display(), "Configuration loaded");

    // Backend and local storage
    let backend = Arc::new(HttpBackend::new(&config.backend)?);
    let store: Arc<dyn LocalStore> = Arc::new(FileStore::open(&config.data_dir)?);

    // Auth session, restored from the local cache
    let provider = Arc::new(TokenProvider::new(
        backend.transport().clone(),
        AuthConfig::default(),
    ));
    let session = AuthSession::new(provider, store);
    let auth_state = session.init().await;

    // Guest quota
    let tracker = Arc::new(GuestQuotaTracker::new(
        Arc::new(BackendSessionSource::new(backend.clone())),
        QuotaConfig::default(),
    ));
    tracker.on_auth_state(&auth_state).await;

    let flow = SubmitFlow::new(
        backend,
        tracker.clone(),
        CurrentAnalysis::new(),
        FormConfig::default(),
    );
    let credentials = session.credentials();

    let view = match invocation.command {
        Command::Get(id) => {
            let view = flow.open(&id, &credentials).await?;
            print_view(&view);
            view
        }
        command => {
            let mut form = SubmissionForm::new();
            fill(&mut form, command, flow.config()).await?;

            match flow.submit(&mut form, &credentials).await {
                Ok(submission) => {
                    if let Some(text) = &submission.extracted_text {
                        println!("Extracted text: {text}");
                    }
                    print_view(&submission.view);
                    if let Some(prompt) = submission.prompt {
                        print_prompt(&prompt);
                    }
                    submission.view
                }
                Err(e) => {
                    if let Some(banner) = form.banner() {
                        eprintln!("{}", banner.message);
                        if let Some(action) = &banner.action {
                            eprintln!("{action}");
                        }
                    }
                    return Err(e.into());
                }
            }
        }
    };

    if let Some(remaining) = tracker.remaining() {
        println!("Free checks remaining today: {remaining}");
    }

    if let Some(dir) = invocation.download {
        let saved = view.download(&DirectorySink::new(dir))?;
        if let Some(path) = saved.location {
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}

/// Put the command's input on the matching tab
async fn fill(form: &mut SubmissionForm, command: Command, config: &FormConfig) -> anyhow::Result<()> {
    match command {
        Command::Text(text) => {
            form.select_tab(Tab::Text)?;
            form.set_text(text)?;
        }
        Command::Url(url) => {
            form.select_tab(Tab::Url)?;
            form.set_url(url)?;
        }
        Command::File(path) => {
            let bytes = tokio::fs::read(&path).await?;
            let name = file_name(&path);
            form.select_tab(Tab::File)?;
            form.set_file(FileUpload::new(name, mime_for(&path), bytes), config)?;
        }
        Command::Get(_) => {}
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string())
}

fn print_view(view: &ResultView) {
    println!("{} ({}/100, {})", view.verdict, view.score, view.band.label());
    println!("{}", view.summary);
    println!(
        "Sources: {} supporting, {} refuting, {} neutral",
        view.supporting.len(),
        view.refuting.len(),
        view.neutral.len()
    );
    for card in &view.learning_cards {
        println!("- {}: {}", card.title, card.tip);
    }
}

fn print_prompt(prompt: &UpgradePrompt) {
    println!();
    println!("{}", prompt.title());
    println!("{}", prompt.message());
    println!("{} -> {}", prompt.call_to_action(), prompt.signup_route());
}
