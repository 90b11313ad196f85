//! Terminal front-end for the todo API.
//!
//! Each invocation loads the collection, applies one operation through the
//! stateful client, and prints the rendered view. Presentation decisions —
//! how failures are worded, what the empty state looks like — live here;
//! the client only reports structured errors.

use anyhow::Context;
use clap::{Parser, Subcommand};
use todo_client::{TodoClient, TodoListView, UreqTransport};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todo", about = "Command-line client for the todo API")]
struct Cli {
    /// Base URL of the todo API server.
    #[arg(long, env = "TODO_API_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current list (the default).
    List,
    /// Add a new todo with the given title.
    Add { title: String },
    /// Flip the completion flag of the todo with the given id.
    Toggle { id: i64 },
    /// Delete the todo with the given id.
    Remove { id: i64 },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut client = TodoClient::new(&cli.base_url, UreqTransport::new());
    client.load_all().context("failed to load todos")?;

    match cli.command.unwrap_or(Command::List) {
        Command::List => {}
        // A whitespace-only title is a silent no-op, mirroring the client.
        Command::Add { title } => {
            client.create(&title).context("failed to add todo")?;
        }
        Command::Toggle { id } => {
            client.toggle(id).context("failed to update todo")?;
        }
        Command::Remove { id } => {
            client.remove(id).context("failed to delete todo")?;
        }
    }

    print_view(&client.render());
    Ok(())
}

fn print_view(view: &TodoListView) {
    println!("{} · {}", view.total_label, view.completed_label);
    if view.is_empty() {
        println!("No tasks yet. Add one to get started!");
        return;
    }
    for row in &view.rows {
        let marker = if row.completed { "x" } else { " " };
        println!("[{marker}] {:>4}  {}", row.id, row.title);
    }
}
