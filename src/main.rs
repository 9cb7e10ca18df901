use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

/// portup - report ports that changed since they were installed
///
/// Compares the versions recorded in the installed status database with the
/// versions declared by the local port definitions.
///
/// Examples:
///   portup update     # Show installed packages that differ from their ports
///   portup list       # Show installed packages
#[derive(Parser, Debug)]
#[command(author, version = portup::VERSION, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Root directory holding ports/ and installed/ (defaults to ~/.portup; also via PORTUP_ROOT)
    #[arg(
        long = "root",
        short = 'r',
        env = "PORTUP_ROOT",
        value_name = "PATH",
        global = true
    )]
    pub install_root: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List installed packages whose version differs from their port
    Update(UpdateArgs),

    /// List installed packages
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {}

#[derive(clap::Args, Debug)]
pub struct ListArgs {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = portup::runtime::RealRuntime;

    match cli.command {
        Commands::Update(_args) => {
            let summary = portup::commands::update(runtime, cli.install_root, portup::VERSION)?;
            debug!(
                "{} outdated package(s), advisory: {}",
                summary.outdated.len(),
                summary.advisory.is_some()
            );
        }
        Commands::List(_args) => portup::commands::list(runtime, cli.install_root)?,
    }
    Ok(())
}
