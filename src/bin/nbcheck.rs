use std::process::ExitCode;

use anyhow::Result;
use env_logger::Env;

use nbcheck::config::Config;
use nbcheck::exercise::ExerciseRegistry;
use nbcheck::{pipeline, report};

fn main() -> Result<ExitCode> {
    // Parse configuration from command line; usage errors exit here
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(Env::default().default_filter_or(&config.log_level)).init();

    let registry = ExerciseRegistry::from_config(&config)?;
    let report = pipeline::run(&config, &registry)?;

    println!("{}", report::render(&report, config.format)?);

    Ok(config.exit_code_for(&report.result))
}
