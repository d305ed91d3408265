use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use task_cli::config::Settings;
use task_cli::{Status, Task, TaskStore};
use tracing_subscriber::EnvFilter;

const RULE: &str = "----------------------------------------";

/// Track tasks from the command line
#[derive(Parser, Debug)]
#[command(name = "task-cli", version)]
struct Cli {
    /// Tasks file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a new task
    Add { description: String },
    /// Change the description of a task
    Update { id: u32, description: String },
    /// Delete a task
    Delete { id: u32 },
    /// Mark a task as in progress
    MarkInProgress { id: u32 },
    /// Mark a task as done
    MarkDone { id: u32 },
    /// List tasks, optionally only those with the given status
    List { status: Option<StatusFilter> },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusFilter {
    Todo,
    InProgress,
    Done,
}

impl From<StatusFilter> for Status {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Todo => Status::Todo,
            StatusFilter::InProgress => Status::InProgress,
            StatusFilter::Done => Status::Done,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let tasks_file = match args.file {
        Some(file) => file,
        None => {
            Settings::load()
                .context("cannot load settings")?
                .tasks_file
        }
    };
    let store = TaskStore::new(tasks_file);

    match args.command {
        Commands::Add { description } => {
            let task = store.add(&description)?;
            println!("Task added successfully (ID: {})", task.id());
        }
        Commands::Update { id, description } => {
            store.update(id, &description)?;
            println!("Task {} updated successfully", id);
        }
        Commands::Delete { id } => {
            store.delete(id)?;
            println!("Task {} deleted successfully", id);
        }
        Commands::MarkInProgress { id } => mark(&store, id, Status::InProgress)?,
        Commands::MarkDone { id } => mark(&store, id, Status::Done)?,
        Commands::List { status } => {
            let status = status.map(Status::from);
            let tasks = store.list(status)?;
            print_tasks(&tasks, status);
        }
    };

    Ok(())
}

fn mark(store: &TaskStore, id: u32, status: Status) -> anyhow::Result<()> {
    let task = store.set_status(id, status)?;
    println!("Task {} marked as {}", task.id(), task.status().label());
    Ok(())
}

fn print_tasks(tasks: &[Task], status: Option<Status>) {
    if tasks.is_empty() {
        println!("No tasks found");
        return;
    }

    let heading = status
        .map(|status| format!(" ({})", status.label()))
        .unwrap_or_default();
    println!("Tasks{}:", heading);
    println!("{RULE}");
    for task in tasks {
        println!("{task}");
        println!("{RULE}");
    }
}
