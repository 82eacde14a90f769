//! CLI Adapter.

mod list;
mod pick;
mod prompt;
mod run;

use crate::domain::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gh-dispatch")]
#[command(version)]
#[command(
    about = "Dispatch manually triggerable GitHub Actions workflows",
    long_about = None
)]
struct Cli {
    /// Target repository as OWNER/NAME (defaults to GH_REPO, then the origin remote)
    #[arg(short = 'R', long, global = true)]
    repo: Option<String>,
    /// Workflow definitions directory (defaults to .github/workflows)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a workflow, branch, and inputs interactively, then dispatch
    #[clap(visible_alias = "p")]
    Pick,
    /// List workflows that support manual dispatch
    #[clap(visible_alias = "ls")]
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Dispatch a workflow without prompting
    #[clap(visible_alias = "r")]
    Run {
        /// Workflow file name (e.g. deploy.yml), file stem, or declared name
        workflow: String,
        /// Branch or tag to run on (defaults to the current branch)
        #[arg(long = "ref")]
        git_ref: Option<String>,
        /// Workflow input as KEY=VALUE (repeatable)
        #[arg(short = 'f', long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let dir = cli.dir.as_deref();
    let repo = cli.repo.as_deref();

    let result: Result<(), AppError> = match cli.command.unwrap_or(Commands::Pick) {
        Commands::Pick => pick::run_pick(repo, dir),
        Commands::List { json } => list::run_list(dir, json),
        Commands::Run { workflow, git_ref, fields } => {
            run::run_dispatch(repo, dir, &workflow, git_ref, &fields)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_empty_catalog(dir: &std::path::Path) {
    println!("No workflows with 'workflow_dispatch' trigger found in {}.", dir.display());
}
