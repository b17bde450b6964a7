use alumni_lib::{
    Error, Repository,
    repository::{seed::PREDEFINED_AREAS, storage::StorageError},
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use sysexits::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod filter;
mod output;
mod profile;

#[derive(Parser, Debug)]
#[command(name = "alumni")]
#[command(author, version, about = "Directorio de perfiles de egresados")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Operate on graduate profiles
    #[command(subcommand)]
    Profile(profile::Command),
    /// Inspect or change the saved search and filters
    #[command(subcommand)]
    Filter(filter::Command),
    /// List the areas present in the roster
    Areas {
        /// List the areas offered when adding a profile instead
        #[arg(long)]
        predefined: bool,
    },
    /// List the entry years that can be filtered on
    Years,
    /// Discard every profile and start over
    Reset,
}

fn main() -> ExitCode {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::Ok,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            exit_code(&err)
        }
    }
}

fn run(cli: &Cli) -> alumni_lib::Result<()> {
    let repo = Repository::new()?;

    match &cli.command {
        Command::Profile(cmd) => profile::handle(&repo, cmd),
        Command::Filter(cmd) => filter::handle(&repo, cmd),
        Command::Areas { predefined } => {
            for area in area_list(&repo, *predefined) {
                println!("{area}");
            }
            Ok(())
        }
        Command::Years => {
            for year in repo.year_options() {
                println!("{year}");
            }
            Ok(())
        }
        Command::Reset => {
            repo.reset_roster();
            println!("{}", "Perfiles restablecidos".green());
            Ok(())
        }
    }
}

fn area_list(repo: &Repository, predefined: bool) -> Vec<String> {
    if predefined {
        PREDEFINED_AREAS.iter().map(|area| area.to_string()).collect()
    } else {
        repo.unique_areas()
    }
}

fn exit_code(err: &Error) -> ExitCode {
    match err {
        Error::Validation(_) => ExitCode::DataErr,
        Error::ProfileNotFound(_) => ExitCode::NoInput,
        Error::DuplicateId(_) => ExitCode::Software,
        Error::Config(_) => ExitCode::Config,
        Error::Storage(StorageError::Unavailable) => ExitCode::Unavailable,
        Error::Storage(_) | Error::Io(_) => ExitCode::IoErr,
        Error::Export(_) => ExitCode::Software,
    }
}
