use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gtl")]
#[command(about = "Translate text and break down its vocabulary with Gemini")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads --file or stdin if not provided)
    pub text: Vec<String>,

    /// File to translate
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<String>,

    /// Model name (overrides the configured model)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Proxy URL (overrides the configured proxy; "" for a direct connection)
    #[arg(short = 'x', long)]
    pub proxy: Option<String>,

    /// Print the raw JSON returned by the model
    #[arg(long)]
    pub json: bool,

    /// Write the raw JSON result to a file
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Suppress status messages and the spinner
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
    /// Configure the API key, proxy and model
    Configure {
        /// Show current configuration
        #[arg(long, conflicts_with_all = ["api_key", "proxy", "model"])]
        show: bool,

        /// Gemini API key
        #[arg(long)]
        api_key: Option<String>,

        /// Proxy URL ("" for a direct connection)
        #[arg(long)]
        proxy: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,
    },
    /// Interactive translation mode
    Chat {
        /// Model name (overrides the configured model)
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// Proxy URL (overrides the configured proxy; "" for a direct connection)
        #[arg(short = 'x', long)]
        proxy: Option<String>,
    },
}
