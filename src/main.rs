use anyhow::Result;
use clap::Parser;

use docqa_cli::cli::commands::{GlobalOptions, ask, chat, config, samples, upload};
use docqa_cli::cli::{Args, Command};
use docqa_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    let global = GlobalOptions {
        api_url: args.api_url,
        config_path: args.config,
    };

    let code = match args.command {
        Some(Command::Upload { files, sample }) => {
            let options = upload::UploadOptions { files, sample };
            upload::run_upload(&global, options).await?
        }
        Some(Command::Ask { query }) => {
            let options = ask::AskOptions {
                query: query.join(" "),
            };
            ask::run_ask(&global, options).await?
        }
        Some(Command::Samples) => {
            samples::print_samples(&global)?;
            exitcode::OK
        }
        Some(Command::Config) => {
            config::print_config(&global)?;
            exitcode::OK
        }
        Some(Command::Chat) | None => chat::run_chat(&global).await?,
    };

    if code != exitcode::OK {
        std::process::exit(code);
    }
    Ok(())
}
