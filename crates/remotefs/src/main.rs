use std::process::ExitCode;

use clap::Parser;
use cli::{App, Commands, GlobalArgs};
use console::style;
use console_io::ConsoleIo;
use remotefs_auth::CredentialCache;
use remotefs_fetch::ErrorKind;
use tracing_subscriber::EnvFilter;

mod cli;
mod console_io;

fn main() -> ExitCode {
    let app = App::parse();
    init_tracing(&app.global);

    let io = ConsoleIo::new(credentials(&app.global), app.global.no_interaction);
    let result = match &app.cmd {
        Commands::Get(arg) => cli::get::get(arg, &app.global, &io),
    };
    io.finish();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::from(exit_code(&err))
        }
    }
}

fn init_tracing(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(global.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn credentials(global: &GlobalArgs) -> CredentialCache {
    let cache = CredentialCache::new();
    if let Some(username) = &global.username {
        cache.set_last_credentials(username.as_str(), global.password.clone().unwrap_or_default());
    }
    cache
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<remotefs_fetch::Error>().map(remotefs_fetch::Error::kind) {
        Some(ErrorKind::NotFound) => 2,
        Some(ErrorKind::AuthenticationRequired) => 3,
        _ => 1,
    }
}
