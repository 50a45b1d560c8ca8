mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::path::{Path, PathBuf};

use captains_log::config;
use captains_log::db::Database;
use captains_log::models::{EventDraft, EventKind, Priority, ProjectDraft};
use captains_log::views::TaskFilter;
use captains_log::{logging, Dashboard, Notification};

#[derive(Parser)]
#[command(name = "captains-log")]
#[command(about = "A pirate-themed dashboard for tasks, voyages and events")]
#[command(version)]
struct Cli {
    /// Log directory (defaults to the nearest .captains-log above the current directory)
    #[arg(long, global = true, env = "CAPTAINS_LOG_DIR")]
    dir: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a captain's log in the current directory
    Init,

    /// Show rank, experience, coins and fleet stats
    Status,

    /// Captain's orders (tasks)
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Voyages (projects)
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Horizon events
    Event {
        #[command(subcommand)]
        action: EventCommands,
    },

    /// Export everything to a JSON backup
    Export {
        /// Output file, or '-' for stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// Log a new bounty
    Add {
        /// Task title
        title: String,
        /// Priority (high, medium, low)
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks
    List {
        /// Filter (all, active, completed)
        #[arg(short, long, default_value = "all")]
        filter: TaskFilter,
    },
    /// Complete or reopen a task
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// Plot a new course
    Add {
        /// Project title
        title: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        deadline: String,
        /// Project description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Crew members, comma-separated
        #[arg(long, default_value = "")]
        crew: String,
        /// Milestones, comma-separated
        #[arg(long, default_value = "")]
        milestones: String,
    },
    /// List projects
    List,
    /// Delete a project
    Delete {
        /// Project ID
        id: String,
    },
}

#[derive(Subcommand)]
enum EventCommands {
    /// Add an event
    Add {
        /// Event title
        title: String,
        /// Date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        date: String,
        /// Time, e.g. "7:00 PM"
        #[arg(long, default_value = "")]
        time: String,
        /// Kind (meeting, deadline, event, reminder)
        #[arg(short, long, default_value = "event")]
        kind: EventKind,
        /// Location
        #[arg(short, long, default_value = "")]
        location: String,
        /// Event description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List events by date
    List,
    /// Delete an event
    Delete {
        /// Event ID
        id: String,
    },
}

fn open_dashboard(dir: Option<&Path>) -> Result<Dashboard<Database>> {
    let cwd = env::current_dir()?;
    let log_dir = config::resolve_log_dir(dir, &cwd)?;
    let db = Database::open(&config::db_path(&log_dir)).context("Failed to open database")?;

    let mut dashboard = Dashboard::open(db);
    dashboard.subscribe(|notification| {
        if let Notification::RankUp(up) = notification {
            println!("🎉 RANK UP! {} {}", up.rank.icon(), up);
        }
    });
    Ok(dashboard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);
    let dir = cli.dir.as_deref();

    match cli.command {
        Commands::Init => {
            let log_dir = match dir {
                Some(dir) => dir.to_path_buf(),
                None => env::current_dir()?.join(config::DIR_NAME),
            };
            commands::init::run(&log_dir)
        }

        Commands::Status => {
            let dashboard = open_dashboard(dir)?;
            commands::status::run(&dashboard)
        }

        Commands::Task { action } => {
            let mut dashboard = open_dashboard(dir)?;
            match action {
                TaskCommands::Add {
                    title,
                    priority,
                    due,
                } => commands::task::add(&mut dashboard, &title, priority, due.as_deref()),
                TaskCommands::List { filter } => commands::task::list(&dashboard, filter),
                TaskCommands::Toggle { id } => commands::task::toggle(&mut dashboard, &id),
                TaskCommands::Delete { id } => commands::task::delete(&mut dashboard, &id),
            }
        }

        Commands::Project { action } => {
            let mut dashboard = open_dashboard(dir)?;
            match action {
                ProjectCommands::Add {
                    title,
                    deadline,
                    description,
                    crew,
                    milestones,
                } => commands::project::add(
                    &mut dashboard,
                    ProjectDraft {
                        title,
                        description,
                        deadline,
                        team_members: crew,
                        milestones,
                    },
                ),
                ProjectCommands::List => commands::project::list(&dashboard),
                ProjectCommands::Delete { id } => commands::project::delete(&mut dashboard, &id),
            }
        }

        Commands::Event { action } => {
            let mut dashboard = open_dashboard(dir)?;
            match action {
                EventCommands::Add {
                    title,
                    date,
                    time,
                    kind,
                    location,
                    description,
                } => commands::event::add(
                    &mut dashboard,
                    EventDraft {
                        title,
                        date,
                        time,
                        kind,
                        location,
                        description,
                    },
                ),
                EventCommands::List => commands::event::list(&dashboard),
                EventCommands::Delete { id } => commands::event::delete(&mut dashboard, &id),
            }
        }

        Commands::Export { output } => {
            let dashboard = open_dashboard(dir)?;
            commands::export::run(&dashboard, output.as_deref())
        }
    }
}
