//! Task tracker commands.

use clap::Subcommand;
use etime_core::Shell;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task text
        text: String,
    },
    /// List tasks in insertion order
    List,
    /// Toggle a task's completed flag
    Toggle {
        /// Task ID
        id: String,
    },
    /// Replace a task's text
    Edit {
        /// Task ID
        id: String,
        /// New text
        text: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = Shell::open()?;

    match action {
        TaskAction::Add { text } => match shell.tasks_mut().add(&text) {
            Some(task) => {
                println!("Task created: {}", task.id);
                println!("{}", serde_json::to_string_pretty(task)?);
            }
            None => return Err("task text is empty".into()),
        },
        TaskAction::List => {
            let tasks = shell.tasks().tasks();
            if tasks.is_empty() {
                println!("No tasks yet. Add some tasks to track your work!");
            }
            for task in tasks {
                println!(
                    "[{}] {}  {}  ({})",
                    if task.completed { "x" } else { " " },
                    task.created_hhmm(),
                    task.text,
                    task.id
                );
            }
        }
        TaskAction::Toggle { id } => {
            if shell.tasks_mut().toggle_complete(&id) {
                let task = shell.tasks().get(&id).ok_or("task vanished")?;
                println!(
                    "Task {}: {}",
                    if task.completed { "completed" } else { "reopened" },
                    task.text
                );
            } else {
                println!("Task not found: {id}");
            }
        }
        TaskAction::Edit { id, text } => {
            if shell.tasks_mut().save_edit(&id, &text) {
                println!("Task updated: {id}");
            } else if shell.tasks().get(&id).is_none() {
                println!("Task not found: {id}");
            } else {
                return Err("edit text is empty; edit discarded".into());
            }
        }
        TaskAction::Delete { id } => {
            if shell.tasks_mut().delete(&id) {
                println!("Task deleted: {id}");
            } else {
                println!("Task not found: {id}");
            }
        }
    }
    Ok(())
}
