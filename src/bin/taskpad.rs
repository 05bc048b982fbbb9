//! Interactive console task manager backed by a flat JSON file.
//!
//! Usage:
//!
//! ```text
//! taskpad [FILE]
//! ```
//!
//! Tasks are kept in `FILE` (default `tasks.json`) as a pretty-printed JSON
//! array. A missing or empty file starts an empty list. The tool is
//! deliberately independent of the taskboard API core: it owns its record
//! shape and its load/save routine outright.

#![expect(
    clippy::print_stdout,
    reason = "interactive console tool writes its interface to stdout"
)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while managing the task file.
#[derive(Debug, Error)]
enum TaskpadError {
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("invalid task number")]
    InvalidTaskNumber,
    #[error("failed to read task file: {0}")]
    FileRead(#[source] io::Error),
    #[error("failed to write task file: {0}")]
    FileWrite(#[source] io::Error),
    #[error("task file is not valid JSON: {0}")]
    FileParse(#[source] serde_json::Error),
    #[error("failed to encode tasks: {0}")]
    FileEncode(#[source] serde_json::Error),
    #[error("failed to use the console: {0}")]
    Console(#[source] io::Error),
}

/// Task priority levels offered by the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parses the menu selection (1–3); empty input keeps the default.
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::Low),
            "2" => Some(Self::Medium),
            "3" => Some(Self::High),
            _ => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One task record in the flat file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Task {
    id: Uuid,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    done: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due: Option<DateTime<Utc>>,
    #[serde(default)]
    priority: Priority,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

/// The task list and the file it round-trips through.
struct TaskBook {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskBook {
    /// Loads the task file; a missing or empty file yields an empty list.
    fn load(path: impl Into<PathBuf>) -> Result<Self, TaskpadError> {
        let file_path = path.into();
        if !file_path.exists() {
            return Ok(Self {
                tasks: Vec::new(),
                path: file_path,
            });
        }

        let data = fs::read(&file_path).map_err(TaskpadError::FileRead)?;
        if data.is_empty() {
            return Ok(Self {
                tasks: Vec::new(),
                path: file_path,
            });
        }

        let tasks = serde_json::from_slice(&data).map_err(TaskpadError::FileParse)?;
        Ok(Self {
            tasks,
            path: file_path,
        })
    }

    /// Rewrites the task file with the current list.
    fn save(&self) -> Result<(), TaskpadError> {
        let data = serde_json::to_vec_pretty(&self.tasks).map_err(TaskpadError::FileEncode)?;
        fs::write(&self.path, data).map_err(TaskpadError::FileWrite)
    }

    /// Appends a task and saves the file.
    fn add_task(
        &mut self,
        title: &str,
        note: Option<String>,
        priority: Priority,
        tags: Vec<String>,
    ) -> Result<Task, TaskpadError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskpadError::EmptyTitle);
        }

        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            title: trimmed.to_owned(),
            note,
            done: false,
            created_at: now,
            updated_at: now,
            due: None,
            priority,
            tags,
        };

        self.tasks.push(task.clone());
        self.save()?;
        Ok(task)
    }

    /// Marks the task at `index` done and saves; returns its title.
    fn mark_done(&mut self, index: usize) -> Result<String, TaskpadError> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskpadError::InvalidTaskNumber)?;
        task.done = true;
        task.updated_at = Utc::now();
        let title = task.title.clone();
        self.save()?;
        Ok(title)
    }

    /// Removes the task at `index` and saves; returns its title.
    fn delete_task(&mut self, index: usize) -> Result<String, TaskpadError> {
        if index >= self.tasks.len() {
            return Err(TaskpadError::InvalidTaskNumber);
        }
        let task = self.tasks.remove(index);
        self.save()?;
        Ok(task.title)
    }

    fn incomplete_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }
}

/// Maps a 1-based number over the incomplete view to the list index.
fn nth_incomplete_index(tasks: &[Task], number: usize) -> Option<usize> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| !task.done)
        .nth(number.checked_sub(1)?)
        .map(|(index, _)| index)
}

fn short_id(id: &Uuid) -> String {
    let full = id.simple().to_string();
    full.get(..8).unwrap_or(full.as_str()).to_owned()
}

/// Prompts and reads one trimmed line; `None` on end of input.
fn read_input(prompt: &str, input: &mut impl BufRead) -> Result<Option<String>, TaskpadError> {
    print!("{prompt}");
    io::stdout().flush().map_err(TaskpadError::Console)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(TaskpadError::Console)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn show_menu() {
    println!("\n{}", "=".repeat(40));
    println!("TODO LIST MANAGER");
    println!("{}", "=".repeat(40));
    println!("1. Add New Task");
    println!("2. List Tasks");
    println!("3. Mark Task as Done");
    println!("4. Delete Task");
    println!("5. Exit");
    println!("{}", "=".repeat(40));
}

fn list_tasks(book: &TaskBook, show_done: bool) {
    if book.tasks.is_empty() {
        println!("\nNo tasks found.");
        return;
    }

    println!("\nYour Tasks:");
    println!("{}", "-".repeat(50));

    let mut number = 0_usize;
    for task in &book.tasks {
        if !show_done && task.done {
            continue;
        }
        number += 1;

        let status = if task.done { "[X]" } else { "[ ]" };
        println!("{status} [{number}] {}", task.title);
        println!(
            "   Priority: {} | ID: {}",
            task.priority.label(),
            short_id(&task.id)
        );
        if let Some(note) = &task.note {
            println!("   Note: {note}");
        }
        if !task.tags.is_empty() {
            println!("   Tags: {}", task.tags.join(", "));
        }
        println!();
    }
}

fn add_task_interactive(
    book: &mut TaskBook,
    input: &mut impl BufRead,
) -> Result<(), TaskpadError> {
    println!("\nAdd New Task");
    println!("{}", "-".repeat(30));

    let Some(title) = read_input("Task title: ", input)? else {
        return Ok(());
    };
    if title.is_empty() {
        println!("Error: title cannot be empty");
        return Ok(());
    }

    let Some(note_raw) = read_input("Note (optional): ", input)? else {
        return Ok(());
    };
    let note = (!note_raw.is_empty()).then_some(note_raw);

    let Some(priority_raw) = read_input("Priority (1=Low, 2=Medium, 3=High) [2]: ", input)? else {
        return Ok(());
    };
    let priority = if priority_raw.is_empty() {
        Priority::default()
    } else {
        Priority::parse(&priority_raw).unwrap_or_else(|| {
            println!("Error: invalid priority, using default (2)");
            Priority::default()
        })
    };

    let Some(tags_raw) = read_input("Tags (comma separated, optional): ", input)? else {
        return Ok(());
    };
    let tags: Vec<String> = tags_raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect();

    let task = book.add_task(&title, note, priority, tags)?;
    println!("Task added successfully! (ID: {})", short_id(&task.id));
    Ok(())
}

fn list_tasks_interactive(book: &TaskBook, input: &mut impl BufRead) -> Result<(), TaskpadError> {
    println!("\nTask List Options:");
    println!("1. List incomplete tasks");
    println!("2. List all tasks");

    let Some(choice) = read_input("Select option [1]: ", input)? else {
        return Ok(());
    };
    list_tasks(book, choice == "2");
    Ok(())
}

fn mark_done_interactive(
    book: &mut TaskBook,
    input: &mut impl BufRead,
) -> Result<(), TaskpadError> {
    if book.tasks.is_empty() {
        println!("Error: no tasks available");
        return Ok(());
    }

    list_tasks(book, false);

    let Some(raw) = read_input("\nEnter task number to mark as done: ", input)? else {
        return Ok(());
    };
    if raw.is_empty() {
        return Ok(());
    }

    let Some(index) = raw
        .parse::<usize>()
        .ok()
        .and_then(|number| nth_incomplete_index(&book.tasks, number))
    else {
        println!("Error: invalid task number");
        return Ok(());
    };

    let title = book.mark_done(index)?;
    println!("Task marked as done: {title}");
    Ok(())
}

fn delete_task_interactive(
    book: &mut TaskBook,
    input: &mut impl BufRead,
) -> Result<(), TaskpadError> {
    if book.tasks.is_empty() {
        println!("Error: no tasks available");
        return Ok(());
    }

    list_tasks(book, true);

    let Some(raw) = read_input("\nEnter task number to delete: ", input)? else {
        return Ok(());
    };
    if raw.is_empty() {
        return Ok(());
    }

    let Some(index) = raw
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .filter(|index| *index < book.tasks.len())
    else {
        println!("Error: invalid task number");
        return Ok(());
    };

    let Some(title) = book.tasks.get(index).map(|task| task.title.clone()) else {
        println!("Error: invalid task number");
        return Ok(());
    };

    let Some(confirm) = read_input(
        &format!("Are you sure you want to delete '{title}'? (y/N): "),
        input,
    )?
    else {
        return Ok(());
    };

    if matches!(confirm.to_lowercase().as_str(), "y" | "yes") {
        let deleted = book.delete_task(index)?;
        println!("Task deleted: {deleted}");
    } else {
        println!("Deletion cancelled.");
    }
    Ok(())
}

fn main() -> Result<(), BoxError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tasks.json".to_owned());
    let mut book = TaskBook::load(path)?;

    println!("Starting Todo List Manager...");
    println!(
        "\nYou have {} tasks ({} incomplete)",
        book.tasks.len(),
        book.incomplete_count()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        show_menu();
        let Some(choice) = read_input("Select an option (1-5): ", &mut input)? else {
            break;
        };

        match choice.as_str() {
            "1" => add_task_interactive(&mut book, &mut input)?,
            "2" => list_tasks_interactive(&book, &mut input)?,
            "3" => mark_done_interactive(&mut book, &mut input)?,
            "4" => delete_task_interactive(&mut book, &mut input)?,
            "5" => {
                println!("\nThank you for using Todo List Manager! Goodbye!");
                break;
            }
            "" => println!("Error: please select an option"),
            _ => println!("Error: invalid option, choose 1-5"),
        }
    }

    Ok(())
}
