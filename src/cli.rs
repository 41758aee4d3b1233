use crate::config::ResolvedConfig;
use crate::constants::REGADDR_COMMENT;
use crate::document::load_document;
use crate::errors::AppResult;
use crate::exporter::write_csv;
use crate::extractor::extract_records;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and runs the extraction workflow.
///
/// Flags override values loaded from an optional TOML config file, which in
/// turn overrides the built-in defaults.
pub fn cli() -> AppResult<()> {
    let matches = build_command().get_matches();
    let config = resolve_config(&matches)?;
    run_workflow(&config)
}

fn build_command() -> Command<'static> {
    Command::new("regaddr-cli")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Input device-profile XML file path")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output CSV file path")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML config file (flags override its values)")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no_strip_regaddr_suffix")
                .long("no-strip-regaddr-suffix")
                .help("Keep the '_RegAddr' suffix in names from the RegAddr group")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("only_regaddr")
                .long("only-regaddr")
                .help("Only export <Group Comment='RegAddr'>/<Integer> address definitions")
                .action(ArgAction::SetTrue),
        )
}

fn resolve_config(matches: &ArgMatches) -> AppResult<ResolvedConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ResolvedConfig::from_toml_file(path)?,
        None => ResolvedConfig::default(),
    };
    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.input = input.clone();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = output.clone();
    }
    if matches.get_flag("no_strip_regaddr_suffix") {
        config.strip_regaddr_suffix = false;
    }
    if matches.get_flag("only_regaddr") {
        config.only_regaddr = true;
    }
    Ok(config)
}

/// Runs the full load → extract → export pipeline for one invocation.
pub fn run_workflow(config: &ResolvedConfig) -> AppResult<()> {
    info!(
        input = %config.input.display(),
        group_marker = REGADDR_COMMENT,
        strip_suffix = config.strip_regaddr_suffix,
        only_regaddr = config.only_regaddr,
        "Loading device profile"
    );

    let root = load_document(&config.input)?;
    let records = extract_records(&root, config);

    info!(records = records.len(), "Extraction completed");

    let count = write_csv(records, &config.output)?;

    println!("Wrote {count} rows to {}", config.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn cli_parses_defaults() {
        let matches = build_command()
            .try_get_matches_from(vec!["regaddr-cli"])
            .unwrap();
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config.output, PathBuf::from("regaddr.csv"));
        assert!(config.strip_regaddr_suffix);
        assert!(!config.only_regaddr);
    }

    #[test]
    fn cli_parses_all_flags() {
        let matches = build_command()
            .try_get_matches_from(vec![
                "regaddr-cli",
                "-i",
                "in.xml",
                "-o",
                "out.csv",
                "--no-strip-regaddr-suffix",
                "--only-regaddr",
            ])
            .unwrap();
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config.input, PathBuf::from("in.xml"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert!(!config.strip_regaddr_suffix);
        assert!(config.only_regaddr);
    }

    #[test]
    fn cli_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("run.toml");
        fs::File::create(&config_path)
            .unwrap()
            .write_all(br#"output = "from-toml.csv""#)
            .unwrap();

        let config_arg = config_path.to_str().unwrap();
        let matches = build_command()
            .try_get_matches_from(vec![
                "regaddr-cli",
                "-c",
                config_arg,
                "-o",
                "from-flag.csv",
            ])
            .unwrap();
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config.output, PathBuf::from("from-flag.csv"));
    }

    #[test]
    fn run_workflow_writes_csv() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("profile.xml");
        let output = dir.path().join("map.csv");
        fs::File::create(&input)
            .unwrap()
            .write_all(
                br#"<Device><Group Comment="RegAddr">
                  <Integer Name="Width_RegAddr"><Value>0x1000</Value></Integer>
                </Group></Device>"#,
            )
            .unwrap();

        let config = ResolvedConfig {
            input,
            output: output.clone(),
            ..ResolvedConfig::default()
        };
        run_workflow(&config).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Width,0x1000,RegAddrGroup,Integer,Width_RegAddr"));
    }

    #[test]
    fn run_workflow_missing_input_errors() {
        let dir = TempDir::new().unwrap();
        let config = ResolvedConfig {
            input: dir.path().join("absent.xml"),
            output: dir.path().join("map.csv"),
            ..ResolvedConfig::default()
        };
        assert!(run_workflow(&config).is_err());
    }
}
