use clap::Parser;
use devicewatch::{check, config::Args, CheckConfig, DesktopNotifier};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // ─── 1) init logging (stderr; stdout is for the user) ───────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    // ─── 2) args → config ───────────────────────────────────────────
    let cfg = CheckConfig::from(Args::parse());
    info!(url = %cfg.url, snapshot = %cfg.snapshot_path.display(), "startup");

    // ─── 3) one check ───────────────────────────────────────────────
    let notifier = DesktopNotifier::default();
    match check::run(&cfg, &notifier).await {
        Ok(outcome) => {
            info!(new = outcome.new_records.len(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {e}");
            debug!(error = ?e, code = e.exit_code(), "check failed");
            ExitCode::from(e.exit_code())
        }
    }
}
