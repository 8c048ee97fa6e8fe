//! One-shot junk filter: evaluates the configured rule file against the
//! configured signal file and prints the junk signals as JSON.

use dotenvy::dotenv;
use junkfilter::config::Config;
use junkfilter::io::{load_rule_set, load_signals};
use junkfilter::logging;
use junkfilter::signals::SignalEngine;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;
    let rule_set = load_rule_set(&config.rule_set_path)?;
    let signals = load_signals(&config.signals_path)?;

    let junk = SignalEngine::junk_signals(&rule_set, &signals);
    info!(
        accepted = signals.len() - junk.len(),
        junk = junk.len(),
        "Junk filter finished"
    );

    println!("{}", serde_json::to_string_pretty(&junk)?);
    Ok(())
}
