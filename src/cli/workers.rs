use crate::error::Result;
use crate::staff::StaffRepository;
use crate::table;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "workers")]
#[command(about = "Staff registry")]
#[command(version)]
pub struct Cli {
    /// Database file
    #[arg(long, default_value = "workers.db", global = true)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a worker
    Add {
        /// Worker name
        #[arg(short, long)]
        name: String,
        /// Post title, created on first use
        #[arg(short, long)]
        post: String,
        /// Start year
        #[arg(short, long)]
        year: i32,
    },

    /// Show all workers
    Display,

    /// Show workers with at least the given tenure in years
    Select {
        /// Minimum tenure in years
        #[arg(short, long)]
        period: i32,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let repo = StaffRepository::open(&cli.db)?;

    match cli.command {
        Commands::Add { name, post, year } => {
            repo.add_worker(&name, &post, year)?;
            println!("Worker {name} added.");
        }
        Commands::Display => {
            let workers = repo.get_all_workers()?;
            print!("{}", table::render_workers(&workers));
        }
        Commands::Select { period } => {
            let workers = repo.select_by_period(period)?;
            print!("{}", table::render_workers(&workers));
        }
    }

    Ok(())
}
