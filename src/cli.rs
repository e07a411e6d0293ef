use clap::Parser;

#[derive(Parser)]
#[command(name = "ytta", about = "YouTube transcript HTTP API", version)]
pub struct Cli {
    /// Bind host (overrides config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Caption language for /transcript-api (overrides config file)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Log to stderr at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
