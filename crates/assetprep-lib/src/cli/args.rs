use clap::{ArgAction, Parser};
use tracing::Level;

#[derive(Debug, Clone, Default)]
pub struct Command {
    pub config_path: Option<String>,
    pub output_dir: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "assetprep",
    version,
    author = "Nick Guletskii",
    about = "Download the CSS, JavaScript and font assets a web frontend loads from public CDNs so it can be served offline"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional settings file (output_dir, timeout_secs, user_agent)"
    )]
    config: Option<String>,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Directory that receives css/, js/ and fonts/ (default: current directory)"
    )]
    output_dir: Option<String>,

    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Per-request timeout in seconds (default: 30)"
    )]
    timeout: Option<u64>,
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy()
                .add_directive("hyper=warn".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap()),
        )
        .init();

    let command = Command {
        config_path: cli.config,
        output_dir: cli.output_dir,
        timeout_secs: cli.timeout,
    };

    Args { command, log_level }
}
