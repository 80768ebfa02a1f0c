//! Command line tool for scoring sense disambiguation answers

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use pico_args::Arguments;
use sense_scorer::{
    cli::Strategy,
    config::Config,
    report,
    scoring,
    senses::Sense,
    utils::audit::RunLog,
};

const HELP: &str = "\
Usage: score PREDICTED GOLD [OPTIONS]

Arguments:
  PREDICTED            The answers to score (e.g., 'my-line-answers.txt')
  GOLD                 The gold standard key (e.g., 'line-answers.txt')

Options:
  -h, --help           Print help
  -d, --data-dir       Directory the answer files are read from (defaults to 'PA3')
  -l, --log-file       Audit log to append to (defaults to 'scorer-log.txt')
  -s, --strategy       How senses are extracted: 'attribute' or 'last-token' (defaults to 'attribute')
  -a, --attribute      Attribute holding the sense (defaults to 'senseid')
  -m, --majority       Sense the baseline always predicts (defaults to 'product')
  --json               Print the report as JSON
";

/// Exit status for usage errors
const USAGE_EXIT: i32 = 2;

#[derive(Debug)]
struct Args {
    predicted: String,
    gold: String,
    data_dir: Option<PathBuf>,
    log_file: Option<PathBuf>,
    strategy: Option<Strategy>,
    attribute: Option<String>,
    majority: Option<Sense>,
    json: bool,
}

/// Usage Error
#[derive(thiserror::Error, Debug)]
enum UsageError {
    /// A required positional argument is missing
    #[error("Missing required argument: {0}")]
    Missing(&'static str),
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let args = Args {
            data_dir: pargs.opt_value_from_str(["-d", "--data-dir"])?,
            log_file: pargs.opt_value_from_str(["-l", "--log-file"])?,
            strategy: pargs.opt_value_from_str(["-s", "--strategy"])?,
            attribute: pargs.opt_value_from_str(["-a", "--attribute"])?,
            majority: pargs.opt_value_from_str(["-m", "--majority"])?,
            json: pargs.contains("--json"),
            predicted: pargs.free_from_str().map_err(|e| match e {
                pico_args::Error::MissingArgument => anyhow!(UsageError::Missing("PREDICTED")),
                _ => anyhow!("{}", e),
            })?,
            gold: pargs.free_from_str().map_err(|e| match e {
                pico_args::Error::MissingArgument => anyhow!(UsageError::Missing("GOLD")),
                _ => anyhow!("{}", e),
            })?,
        };

        let extra = pargs.finish();
        if !extra.is_empty() {
            log::warn!("Ignoring extra arguments: {:?}", extra);
        }

        Ok(Some(args))
    }

    fn into_config(self) -> Config {
        let mut config = Config::new(PathBuf::from(self.predicted), PathBuf::from(self.gold));

        if let Some(data_dir) = self.data_dir {
            config.data_dir = data_dir;
        }

        if let Some(log_file) = self.log_file {
            config.log_file = log_file;
        }

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }

        if let Some(attribute) = self.attribute {
            config.attribute = attribute;
        }

        if let Some(majority) = self.majority {
            config.majority = majority;
        }

        config.json = self.json;

        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", HELP);

            return Ok(());
        }
        Err(e) if e.is::<UsageError>() => {
            println!("{}\n", e);
            print!("{}", HELP);

            std::process::exit(USAGE_EXIT);
        }
        Err(e) => return Err(e),
    };

    let config = args.into_config();

    let mut audit = RunLog::open(&config.log_file)
        .await
        .with_context(|| format!("Unable to open log file {}", config.log_file.display()))?;

    let invoked: Vec<String> = std::env::args().skip(1).collect();
    audit.command(&invoked).await?;

    let evaluation = scoring::score(&config).await?;

    if config.json {
        println!("{}", report::json(&evaluation)?);
    } else {
        print!("{}", report::text(&evaluation));
    }

    audit.exit().await?;

    log::info!("Appended run to {}", audit.path().display());

    Ok(())
}
