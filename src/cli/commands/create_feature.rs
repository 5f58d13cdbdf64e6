use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use std::path::{Path, PathBuf};

use feature_scaffold::config::Config;
use feature_scaffold::{
    RealFs, ScaffoldOptions, ScaffoldOutcome, Scaffolder, TerminalPrompt, WritePolicy,
};

pub fn handle_create_feature(
    matches: &ArgMatches,
    root: Option<&PathBuf>,
    config: &Config,
) -> Result<()> {
    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| anyhow!("Feature name is required"))?;

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let options = build_options(matches, root, config, &cwd)?;
    tracing::debug!("Scaffolding into {}", options.features_root.display());

    let mut scaffolder =
        Scaffolder::new(RealFs, TerminalPrompt, options).with_console_output(true);
    let outcome = scaffolder.create_feature_folder(name)?;

    match &outcome {
        ScaffoldOutcome::Created { path, files }
        | ScaffoldOutcome::NestedCreated { path, files, .. } => {
            tracing::info!("{} files written under {}", files.len(), path.display());
        }
        ScaffoldOutcome::NestedExists { path, .. } => {
            tracing::info!("Nothing to do, {} already exists", path.display());
        }
    }

    Ok(())
}

/// Flags win over configuration; the root falls back to `cwd`
fn build_options(
    matches: &ArgMatches,
    root: Option<&PathBuf>,
    config: &Config,
    cwd: &Path,
) -> Result<ScaffoldOptions> {
    let write_policy = match matches.get_one::<String>("on-conflict") {
        Some(policy) => policy.parse::<WritePolicy>().map_err(|e| anyhow!(e))?,
        None => config.generation.on_conflict,
    };

    Ok(ScaffoldOptions {
        features_root: config.features_root(root.map(PathBuf::as_path), cwd),
        nested_subdirectories: config.generation.nested_subdirectories,
        write_policy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn options_for(args: &[&str], env: &[(&str, &str)]) -> ScaffoldOptions {
        let matches = crate::build_cli()
            .try_get_matches_from(args)
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let vars: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = Config::from_env_map(vars).unwrap();

        build_options(sub, sub.get_one::<PathBuf>("root"), &config, Path::new("/cwd")).unwrap()
    }

    #[test]
    fn test_defaults_use_cwd_and_config() {
        let options = options_for(&["feature-scaffold", "create-feature", "billing"], &[]);

        assert_eq!(options.features_root, PathBuf::from("/cwd/src/features"));
        assert!(options.nested_subdirectories);
        assert_eq!(options.write_policy, WritePolicy::Overwrite);
    }

    #[test]
    fn test_on_conflict_flag_overrides_config() {
        let options = options_for(
            &["feature-scaffold", "create-feature", "billing", "--on-conflict", "skip"],
            &[("SCAFFOLD_GENERATION__ON_CONFLICT", "error")],
        );
        assert_eq!(options.write_policy, WritePolicy::Skip);

        let options = options_for(
            &["feature-scaffold", "create-feature", "billing"],
            &[("SCAFFOLD_GENERATION__ON_CONFLICT", "error")],
        );
        assert_eq!(options.write_policy, WritePolicy::Error);
    }

    #[test]
    fn test_root_flag_overrides_configured_root() {
        let env = [("SCAFFOLD_PROJECT__ROOT", "/configured")];

        let options = options_for(
            &["feature-scaffold", "--root", "/flag", "create-feature", "billing"],
            &env,
        );
        assert_eq!(options.features_root, PathBuf::from("/flag/src/features"));

        let options = options_for(&["feature-scaffold", "create-feature", "billing"], &env);
        assert_eq!(options.features_root, PathBuf::from("/configured/src/features"));
    }

    #[test]
    fn test_nested_subdirectories_from_environment() {
        let options = options_for(
            &["feature-scaffold", "create-feature", "billing"],
            &[
                ("SCAFFOLD_GENERATION__NESTED_SUBDIRECTORIES", "false"),
                ("SCAFFOLD_PROJECT__FEATURES_DIR", "app/modules"),
            ],
        );

        assert!(!options.nested_subdirectories);
        assert_eq!(options.features_root, PathBuf::from("/cwd/app/modules"));
    }
}
