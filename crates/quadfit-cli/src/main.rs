use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use quadfit_cli::config::{load_fit_config, override_samples, FitConfig};
use quadfit_cli::datasets::Dataset;
use quadfit_cli::fit::{run_fit, write_report, OutputFormat};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("QUADFIT_LOG", "error,quadfit=info"))
        .init();

    let matches = Command::new("quadfit")
        .version(clap::crate_version!())
        .about("Fit p = c1*z + c2*z^2 to paired measurements by least squares")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fit")
                .about("Fit the quadratic model and print the report")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON fit configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("dataset")
                        .short('d')
                        .long("dataset")
                        .help(
                            "Built-in sample set to fit. \
                             Overrides the samples in the configuration file.",
                        )
                        .value_parser(["primary", "alternate", "legacy"])
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("z")
                        .long("z")
                        .help("Comma-separated predictor values. Requires --p; replaces the configured samples.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("p")
                        .long("p")
                        .help("Comma-separated outcome values. Requires --z; replaces the configured samples.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("threshold")
                        .short('t')
                        .long("threshold")
                        .help(
                            "Smallest |determinant| of the normal-equation matrix that is \
                             still inverted. Defaults to 0.001.",
                        )
                        .value_parser(clap::value_parser!(f64))
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Report format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Path to write the report to. Defaults to stdout.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("datasets").about("List the built-in sample sets"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("fit", sub_m)) => handle_fit(sub_m),
        Some(("datasets", _)) => handle_datasets(),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_fit(matches: &ArgMatches) -> Result<()> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[quadfit::fit] Using config: {:?}", config_path);
        load_fit_config(config_path)?
    } else {
        log::info!("[quadfit::fit] No config provided; using defaults.");
        FitConfig::default()
    };

    if let Some(name) = matches.get_one::<String>("dataset") {
        let dataset = Dataset::from_str(name).map_err(anyhow::Error::msg)?;
        config.samples = dataset.samples();
    }
    override_samples(
        &mut config.samples,
        matches.get_one::<String>("z").map(String::as_str),
        matches.get_one::<String>("p").map(String::as_str),
    )?;
    if let Some(threshold) = matches.get_one::<f64>("threshold") {
        config.solver.determinant_threshold = *threshold;
    }

    let format = matches
        .get_one::<String>("format")
        .map(|f| OutputFormat::from_str(f).map_err(anyhow::Error::msg))
        .transpose()?
        .unwrap_or_default();
    let output_path: Option<&PathBuf> = matches.get_one("output_file");

    match run_fit(&config) {
        Ok(report) => write_report(&report, format, output_path),
        Err(e) => {
            log::error!("Fit failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_datasets() -> Result<()> {
    for dataset in Dataset::ALL {
        let samples = dataset.samples();
        println!("{:<10} z = {:?}  p = {:?}", dataset.name(), samples.z, samples.p);
    }
    Ok(())
}
