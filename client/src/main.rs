//! Command-line front end for the meow client core.
//!
//! Each invocation hydrates the persisted session, applies one command, and
//! prints `key=value` lines. Diagnostics go to stderr as JSON via tracing.

use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde_json::Value;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

use meow_client::api::{ApiClient, AuthLoginPayload};
use meow_client::config::ClientSettings;
use meow_client::domain::ports::HttpRequest;
use meow_client::domain::{
    ApiError, CampusStore, FailurePresentation, LandingDecision, LoginCredentials, Session,
    SessionStore, complete_sdu_mail, landing_redirect, session_from_login,
};
use meow_client::outbound::http::ReqwestTransport;
use meow_client::outbound::storage::FileStateStorage;

/// `meow-client` command arguments.
#[derive(Debug, Parser)]
#[command(name = "meow-client", about = "SDU Meow client core", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the persisted session and where the landing page would go.
    Status,
    /// Continue as a guest.
    Guest,
    /// Sign in with a campus mail address.
    Login {
        /// Email, or a bare 12-digit student id.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Sign out and clear the persisted session.
    Logout,
    /// Show or change the selected campus.
    Campus {
        /// New campus code; omit to print the current one.
        code: Option<String>,
    },
    /// Issue an authenticated `GET` and print the normalised envelope.
    Get {
        /// Path relative to the base URL, e.g. `/cats`.
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let settings = ClientSettings::load_without_cli()?;
    let storage = Arc::new(
        FileStateStorage::open(&settings.storage_dir()).wrap_err("open state directory")?,
    );
    let session = Arc::new(SessionStore::new(storage.clone()));
    let outcome = session.hydrate();
    debug!(?outcome, "session hydrated");

    let client = || -> Result<ApiClient> {
        let transport = ReqwestTransport::new(settings.base_url()?, settings.timeout()?)
            .wrap_err("build HTTP client")?;
        Ok(ApiClient::new(Arc::new(transport), session.clone()))
    };

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Status => print_session(&mut out, &session.snapshot())?,
        Command::Guest => {
            session.enter_guest();
            print_session(&mut out, &session.snapshot())?;
        }
        Command::Login { email, password } => {
            let credentials =
                LoginCredentials::try_from_parts(&complete_sdu_mail(&email), &password)?;
            let result = client()?
                .login(&AuthLoginPayload::from(&credentials))
                .await
                .map_err(|error| report_api_error(&error))?;
            session.login(session_from_login(&result, credentials.email())?);
            print_session(&mut out, &session.snapshot())?;
        }
        Command::Logout => {
            session.logout();
            print_session(&mut out, &session.snapshot())?;
        }
        Command::Campus { code } => {
            let campus = CampusStore::load(storage);
            if let Some(code) = code {
                campus.set_campus(code.trim());
            }
            writeln!(out, "campus={}", campus.campus())?;
        }
        Command::Get { path } => {
            let result = client()?
                .request(HttpRequest::get(path))
                .await
                .map_err(|error| report_api_error(&error))?;
            writeln!(out, "code={}", render_optional(result.code))?;
            writeln!(out, "message={}", result.message)?;
            writeln!(
                out,
                "data={}",
                serde_json::to_string_pretty(&result.data.unwrap_or(Value::Null))?
            )?;
        }
    }
    Ok(())
}

fn print_session(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out, "role={}", render_optional(session.role))?;
    writeln!(out, "has_token={}", session.token.is_some())?;
    let nickname = session
        .profile
        .as_ref()
        .and_then(|profile| profile.nickname.as_deref())
        .unwrap_or("-");
    writeln!(out, "nickname={nickname}")?;
    match landing_redirect(session) {
        LandingDecision::Redirect(path) => writeln!(out, "landing={path}"),
        LandingDecision::Suspend => writeln!(out, "landing=pending"),
    }
}

fn render_optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |value| value.to_string())
}

fn report_api_error(error: &ApiError) -> color_eyre::Report {
    match error.presentation() {
        FailurePresentation::Unavailable => eyre!(
            "{} ({} {})",
            error.message(),
            error.shape().method,
            error.shape().path
        ),
        FailurePresentation::Retry { message } => eyre!(message),
    }
}
