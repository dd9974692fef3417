use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Arg;
use clap::ArgMatches;
use clap::Command;
use strum::VariantNames;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::RepeatPolicy;
use crate::domain::services::SpinnerStyle;

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("SITECHECK_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(Command::new("default").about("Outputs the default configuration file."))
        .subcommand(Command::new("path").about("Outputs the default configuration file path."))
        .arg_required_else_help(true);
}

pub fn build() -> Command {
    return Command::new("sitecheck")
        .about("Checks how trustworthy a website is from the terminal.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(subcommand_config())
        .arg(arg_config_file())
        .arg(
            Arg::new(ConfigKey::Endpoint.to_string())
                .short('e')
                .long(ConfigKey::Endpoint.to_string())
                .env("SITECHECK_ENDPOINT")
                .num_args(1)
                .help(format!(
                    "Address the query is posted to [default: {}]",
                    Config::default(ConfigKey::Endpoint)
                )),
        )
        .arg(
            Arg::new(ConfigKey::QueryField.to_string())
                .long(ConfigKey::QueryField.to_string())
                .env("SITECHECK_QUERY_FIELD")
                .num_args(1)
                .help(format!(
                    "Name of the JSON body field holding the query [default: {}]",
                    Config::default(ConfigKey::QueryField)
                )),
        )
        .arg(
            Arg::new(ConfigKey::ApiKey.to_string())
                .long(ConfigKey::ApiKey.to_string())
                .env("API_KEY")
                .hide_env_values(true)
                .num_args(1)
                .help("Credential sent verbatim in the Authorization header"),
        )
        .arg(
            Arg::new(ConfigKey::AccentColor.to_string())
                .long(ConfigKey::AccentColor.to_string())
                .env("SITECHECK_ACCENT_COLOR")
                .num_args(1)
                .help(format!(
                    "Border color: a color name, #rrggbb or a 256-color index [default: {}]",
                    Config::default(ConfigKey::AccentColor)
                )),
        )
        .arg(
            Arg::new(ConfigKey::Spinner.to_string())
                .long(ConfigKey::Spinner.to_string())
                .env("SITECHECK_SPINNER")
                .num_args(1)
                .value_parser(PossibleValuesParser::new(SpinnerStyle::VARIANTS.iter().copied()))
                .help(format!(
                    "Busy indicator animation [default: {}]",
                    Config::default(ConfigKey::Spinner)
                )),
        )
        .arg(
            Arg::new(ConfigKey::AfterResult.to_string())
                .long(ConfigKey::AfterResult.to_string())
                .env("SITECHECK_AFTER_RESULT")
                .num_args(1)
                .value_parser(PossibleValuesParser::new(RepeatPolicy::VARIANTS.iter().copied()))
                .help(format!(
                    "What Enter does on the result screen: stay there or reset the form [default: {}]",
                    Config::default(ConfigKey::AfterResult)
                )),
        )
        .arg(
            Arg::new(ConfigKey::Title.to_string())
                .long(ConfigKey::Title.to_string())
                .env("SITECHECK_TITLE")
                .num_args(1)
                .help(format!(
                    "Title shown above the input [default: {}]",
                    Config::default(ConfigKey::Title)
                )),
        )
        .arg(
            Arg::new(ConfigKey::LogFile.to_string())
                .long(ConfigKey::LogFile.to_string())
                .env("SITECHECK_LOG_FILE")
                .num_args(1)
                .help(format!(
                    "File debug logs are appended to [default: {}]",
                    Config::default(ConfigKey::LogFile)
                )),
        )
        .arg(
            Arg::new(ConfigKey::LogLevel.to_string())
                .long(ConfigKey::LogLevel.to_string())
                .env("SITECHECK_LOG_LEVEL")
                .num_args(1)
                .value_parser(PossibleValuesParser::new(LOG_LEVELS))
                .help(format!(
                    "Log level [default: {}]",
                    Config::default(ConfigKey::LogLevel)
                )),
        );
}

fn handle_config(matches: &ArgMatches) {
    match matches.subcommand() {
        Some(("default", _)) => {
            println!("{}", Config::serialize_default(build()));
        }
        Some(("path", _)) => {
            println!("{}", Config::default(ConfigKey::ConfigFile));
        }
        _ => {}
    }
}

/// Parses the command line. Returns `None` when a subcommand already did all the work.
pub async fn parse() -> Result<Option<Config>> {
    let matches = build().get_matches();

    if let Some(("config", config_matches)) = matches.subcommand() {
        handle_config(config_matches);
        return Ok(None);
    }

    let config = Config::load(build(), vec![&matches]).await?;
    return Ok(Some(config));
}
