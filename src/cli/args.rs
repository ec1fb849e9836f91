use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "docqa")]
#[command(about = "Ask questions about your legal documents")]
#[command(version)]
pub struct Args {
    /// Backend base URL
    #[arg(short = 'u', long, global = true, env = "API_URL")]
    pub api_url: Option<String>,

    /// Config file path (defaults to ~/.config/docqa/config.toml)
    #[arg(short = 'c', long, global = true, env = "DOCQA_CONFIG")]
    pub config: Option<String>,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session (default)
    Chat,
    /// Upload PDF documents to the backend
    Upload {
        /// PDF files to upload
        files: Vec<String>,

        /// Also upload a sample document by label ("None" for no sample)
        #[arg(short = 's', long)]
        sample: Option<String>,
    },
    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// List sample documents
    Samples,
    /// Show the resolved configuration
    Config,
}
