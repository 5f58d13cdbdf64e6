use clap::{Arg, Command};
use dotenv::dotenv;
use feature_scaffold::config::Config;
use feature_scaffold::logging;
use std::path::PathBuf;
use std::process;

mod cli;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let matches = build_cli().get_matches();

    if let Err(e) = run_command(matches) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("feature-scaffold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate feature-module folders for React/TypeScript projects")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("create-feature")
                .about("Create a new feature folder with components, query, hook, types and pages")
                .long_about(
                    "Creates src/features/<name> with one boilerplate file per subdirectory. \
                     If the feature already exists, asks for a sub-feature name \
                     and creates it inside.",
                )
                .arg(
                    Arg::new("name")
                        .help("Feature name")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("on-conflict")
                        .long("on-conflict")
                        .help("What to do when a generated file already exists")
                        .value_parser(["overwrite", "skip", "error"]),
                ),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Project root (defaults to the current directory)")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose logging")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
}

fn run_command(matches: clap::ArgMatches) -> anyhow::Result<()> {
    let config = Config::load()?;
    logging::init(&config.logging, matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("create-feature", sub_matches)) => {
            let root = sub_matches.get_one::<PathBuf>("root");
            cli::commands::create_feature::handle_create_feature(sub_matches, root, &config)?
        }
        _ => {
            unreachable!("Command parsing should ensure we never reach this");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_create_feature_arguments() {
        let matches = build_cli()
            .try_get_matches_from([
                "feature-scaffold",
                "--root",
                "/work",
                "create-feature",
                "billing",
                "--on-conflict",
                "skip",
            ])
            .unwrap();

        assert_eq!(matches.get_one::<PathBuf>("root"), Some(&PathBuf::from("/work")));
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "create-feature");
        assert_eq!(sub.get_one::<String>("name").map(String::as_str), Some("billing"));
        assert_eq!(sub.get_one::<String>("on-conflict").map(String::as_str), Some("skip"));
    }

    #[test]
    fn test_name_is_required() {
        assert!(
            build_cli()
                .try_get_matches_from(["feature-scaffold", "create-feature"])
                .is_err()
        );
    }
}
