use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use deutsch_immersion::config::Config;
use deutsch_immersion::logging::init_tracing;
use deutsch_immersion::replay::replay_session;
use deutsch_immersion::ImmersionError;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    // Lives until `main` returns so the file appender flushes on every exit path.
    let _log_guard = init_tracing(&config);

    match run(config, std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "replay failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config, path: Option<String>) -> Result<(), ImmersionError> {
    let snapshot = match path {
        Some(path) => {
            let file = File::open(&path).map_err(|err| {
                tracing::error!(%path, error = %err, "failed to open event file");
                err
            })?;
            replay_session(config, BufReader::new(file))?
        }
        None => replay_session(config, io::stdin().lock())?,
    };

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
