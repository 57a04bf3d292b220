use clap::{ArgAction, ArgGroup, Parser};
use log::{error, info, warn};
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

use crate::client::SpaceTradersClient;
use crate::config::{StapiConfig, resolve_bearer_token, save_agent_token};
use crate::error::{ApiError, ConfigError};
use crate::operations::{build_account_info, register_account};
use crate::AGENT_TOKEN_FILE;

/// SpaceTraders API ctl
#[derive(Parser, Debug, Clone)]
#[command(
    name = "stapictl",
    version,
    about = "SpaceTraders API ctl",
    arg_required_else_help = true
)]
#[command(group(ArgGroup::new("operation").args(["create", "info"])))]
pub struct Args {
    /// Creates a new account for SpaceTraders. Requires an account name as an argument.
    #[arg(long, value_name = "ACCOUNT_NAME")]
    pub create: Option<String>,

    /// Shows the agent's account details and its headquarters waypoint.
    #[arg(long)]
    pub info: bool,

    /// Starting faction for --create, overrides api.faction from the config file.
    #[arg(long, requires = "create")]
    pub faction: Option<String>,

    /// Writes the new account's token to the agent token file.
    #[arg(long, requires = "create")]
    pub save_token: bool,

    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "stapictl.toml")]
    pub config: PathBuf,

    /// Agent token file, read when the config file has no token.
    #[arg(long, default_value = AGENT_TOKEN_FILE)]
    pub token_file: PathBuf,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create {
        name: String,
        faction: Option<String>,
        save_token: bool,
    },
    Info,
    Idle,
}

impl Args {
    pub fn operation(&self) -> Operation {
        match (&self.create, self.info) {
            (Some(name), _) => Operation::Create {
                name: name.clone(),
                faction: self.faction.clone(),
                save_token: self.save_token,
            },
            (None, true) => Operation::Info,
            (None, false) => Operation::Idle,
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Runs one invocation. `argv` is only used to record how the tool was called.
pub async fn run(args: &Args, argv: &[String]) -> Result<(), RunError> {
    let started = Instant::now();
    info!("Starting with the following cli: '{}'", argv.join(" "));

    let result = execute(args).await;
    if let Err(e) = &result {
        error!("{}", failure_line(&args.operation(), e));
    }

    info!("Elapsed time: {} seconds.", started.elapsed().as_secs());
    result
}

/// The single error-level line reported for a failed run.
fn failure_line(operation: &Operation, error: &RunError) -> String {
    match (error, operation) {
        (RunError::Config(e), _) => format!("{}, exiting.", e),
        (RunError::Api(e), Operation::Create { name, .. }) => {
            format!("Error creating account \"{}\": {}.", name, e)
        }
        (RunError::Api(e), Operation::Info) => format!("Error fetching account info: {}.", e),
        (RunError::Api(e), Operation::Idle) => format!("{}.", e),
    }
}

async fn execute(args: &Args) -> Result<(), RunError> {
    let config = StapiConfig::load(&args.config)?;
    config.print_summary();
    let client_config = config.client_config();

    match args.operation() {
        Operation::Create {
            name,
            faction,
            save_token,
        } => {
            let faction = faction.unwrap_or_else(|| config.api.faction.clone());
            let client = SpaceTradersClient::new(&client_config)?;
            let report = register_account(&client, &name, &faction).await?;
            for (field, value) in report.fields() {
                info!("{}: {}", field, value);
            }
            if save_token {
                save_agent_token(&args.token_file, &report.registration.token)?;
            }
        }
        Operation::Info => {
            let token = resolve_bearer_token(&client_config, &args.token_file)?;
            let client = SpaceTradersClient::new(&client_config)?;
            let report = build_account_info(&client, &token).await?;
            for (field, value) in report.fields() {
                info!("{}: {}", field, value);
            }
        }
        Operation::Idle => warn!("No operation detected."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn create_takes_account_name() {
        let args = Args::try_parse_from(["stapictl", "--create", "NEW"]).unwrap();
        assert_eq!(
            args.operation(),
            Operation::Create {
                name: "NEW".to_string(),
                faction: None,
                save_token: false,
            }
        );
        assert_eq!(args.config, PathBuf::from("stapictl.toml"));
        assert_eq!(args.token_file, PathBuf::from(AGENT_TOKEN_FILE));
    }

    #[test]
    fn info_and_verbosity() {
        let args = Args::try_parse_from(["stapictl", "--info", "-vv", "-c", "other.toml"]).unwrap();
        assert_eq!(args.operation(), Operation::Info);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn create_and_info_are_exclusive() {
        let err = Args::try_parse_from(["stapictl", "--create", "NEW", "--info"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn no_arguments_prints_help() {
        let err = Args::try_parse_from(["stapictl"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand);
    }

    #[test]
    fn faction_requires_create() {
        let err = Args::try_parse_from(["stapictl", "--info", "--faction", "VOID"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn every_failure_gets_a_classified_line() {
        let create = Operation::Create {
            name: "NEW".to_string(),
            faction: None,
            save_token: false,
        };
        let build_failure =
            RunError::Api(ApiError::Network("failed to build HTTP client: tls".to_string()));
        assert_eq!(
            failure_line(&create, &build_failure),
            "Error creating account \"NEW\": network error: failed to build HTTP client: tls."
        );
        assert_eq!(
            failure_line(&Operation::Info, &build_failure),
            "Error fetching account info: network error: failed to build HTTP client: tls."
        );

        let missing = RunError::Config(ConfigError::NotFound {
            path: PathBuf::from("stapictl.toml"),
        });
        assert_eq!(
            failure_line(&Operation::Info, &missing),
            "config file stapictl.toml not found, exiting."
        );
    }

    #[test]
    fn verbosity_alone_is_idle() {
        let args = Args::try_parse_from(["stapictl", "-v"]).unwrap();
        assert_eq!(args.operation(), Operation::Idle);
    }
}
