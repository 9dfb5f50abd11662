//! Line-oriented front-end for the dashboard.
//!
//! Each input line is one command. Food fields are separated by `|` in the
//! order `name | price | description | image`:
//!
//! ```text
//! list
//! add Salad | 9.90 | fresh | https://img/salad.png
//! edit 3 Pizza Supreme | | extra cheese |
//! delete 3
//! toggle 3
//! reload
//! help
//! quit
//! ```
//!
//! For `edit`, a blank field keeps the value prefilled from the record.

use menu_core::food::FoodDraft;
use menu_core::types::FoodId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::events::DashboardEvent;
use crate::list::{self, RowAction};
use crate::orchestrator::Dashboard;

const HELP: &str = "\
commands:
  list                                          show the catalog
  add <name> | <price> | <description> | <image>  create a food
  edit <id> <name> | <price> | <description> | <image>
                                                edit a food (blank keeps current value)
  delete <id>                                   delete a food
  toggle <id>                                   flip availability
  reload                                        re-read the catalog
  help                                          show this text
  quit                                          exit
";

/// Fields typed on the command line. `None` means the field was left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl FormInput {
    /// Overlay the typed fields on a prefilled form.
    pub fn apply_to(self, prefill: FoodDraft) -> FoodDraft {
        FoodDraft {
            name: self.name.unwrap_or(prefill.name),
            description: self.description.unwrap_or(prefill.description),
            price: self.price.unwrap_or(prefill.price),
            image: self.image.unwrap_or(prefill.image),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Add(FormInput),
    Edit { id: FoodId, input: FormInput },
    Delete(FoodId),
    Toggle(FoodId),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),

    #[error("'{0}' needs a food id")]
    MissingId(&'static str),

    #[error("'{0}' is not a valid food id")]
    InvalidId(String),

    #[error("expected at most 4 fields separated by '|', got {0}")]
    TooManyFields(usize),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ConsoleCommand>, ConsoleError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => ConsoleCommand::List,
        "add" => ConsoleCommand::Add(parse_fields(rest)?),
        "edit" => {
            let (id, fields) = match rest.split_once(char::is_whitespace) {
                Some((id, fields)) => (id, fields),
                None => (rest, ""),
            };
            ConsoleCommand::Edit {
                id: parse_id("edit", id)?,
                input: parse_fields(fields)?,
            }
        }
        "delete" | "rm" => ConsoleCommand::Delete(parse_id("delete", rest)?),
        "toggle" => ConsoleCommand::Toggle(parse_id("toggle", rest)?),
        "reload" => ConsoleCommand::Reload,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(ConsoleError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_id(command: &'static str, raw: &str) -> Result<FoodId, ConsoleError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConsoleError::MissingId(command));
    }
    raw.parse().map_err(|_| ConsoleError::InvalidId(raw.to_string()))
}

fn parse_fields(raw: &str) -> Result<FormInput, ConsoleError> {
    if raw.trim().is_empty() {
        return Ok(FormInput::default());
    }

    let fields: Vec<Option<String>> = raw
        .split('|')
        .map(|field| {
            let field = field.trim();
            (!field.is_empty()).then(|| field.to_string())
        })
        .collect();

    if fields.len() > 4 {
        return Err(ConsoleError::TooManyFields(fields.len()));
    }

    let mut fields = fields.into_iter();
    Ok(FormInput {
        name: fields.next().flatten(),
        price: fields.next().flatten(),
        description: fields.next().flatten(),
        image: fields.next().flatten(),
    })
}

/// Drive the dashboard from `input` until EOF or `quit`, writing output
/// to `output`.
///
/// The catalog is printed once up front and again whenever a command
/// changes the store.
pub async fn run<R, W>(dashboard: &Dashboard, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut events = dashboard.subscribe();
    let mut lines = input.lines();

    render(dashboard, &mut output).await?;

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                output.write_all(format!("{e}\n").as_bytes()).await?;
                output.flush().await?;
                continue;
            }
        };

        if command == ConsoleCommand::Quit {
            break;
        }

        execute(dashboard, command, &mut output).await?;

        if records_changed(&mut events) {
            render(dashboard, &mut output).await?;
        }
        output.flush().await?;
    }

    Ok(())
}

async fn execute<W>(
    dashboard: &Dashboard,
    command: ConsoleCommand,
    output: &mut W,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    match command {
        ConsoleCommand::List => render(dashboard, output).await?,
        ConsoleCommand::Add(input) => {
            dashboard.open_add_modal().await;
            let modal = dashboard.add_modal();
            let draft = input.apply_to(modal.initial_form());
            modal.submit(draft).await;
        }
        ConsoleCommand::Edit { id, input } => {
            let record = dashboard.records().await.into_iter().find(|r| r.id == id);
            let Some(record) = record else {
                output
                    .write_all(format!("no food with id {id}\n").as_bytes())
                    .await?;
                return Ok(());
            };

            dispatch_row(dashboard, RowAction::Edit(record)).await;
            let modal = dashboard.edit_modal();
            let prefill = modal.initial_form().await.unwrap_or_default();
            modal.submit(input.apply_to(prefill)).await;
        }
        ConsoleCommand::Delete(id) => dispatch_row(dashboard, RowAction::Delete(id)).await,
        ConsoleCommand::Toggle(id) => {
            dispatch_row(dashboard, RowAction::ToggleAvailability(id)).await
        }
        ConsoleCommand::Reload => {
            if let Err(e) = dashboard.reload().await {
                tracing::error!(error = %e, "Failed to reload foods");
            }
        }
        ConsoleCommand::Help => output.write_all(HELP.as_bytes()).await?,
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

/// Run a row action. Failures (only deletes can fail) end up in the log.
async fn dispatch_row(dashboard: &Dashboard, action: RowAction) {
    if let Err(e) = list::dispatch(dashboard, action).await {
        tracing::error!(error = %e, "Row action failed");
    }
}

/// Drain pending events; true if any of them touched the food list.
fn records_changed(events: &mut broadcast::Receiver<DashboardEvent>) -> bool {
    let mut changed = false;
    loop {
        match events.try_recv() {
            Ok(event) => changed |= event.touches_records(),
            Err(TryRecvError::Lagged(_)) => changed = true,
            Err(TryRecvError::Empty | TryRecvError::Closed) => return changed,
        }
    }
}

async fn render<W>(dashboard: &Dashboard, output: &mut W) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let rows = list::render_rows(&dashboard.records().await);

    let mut text = String::new();
    if rows.is_empty() {
        text.push_str("(no foods)\n");
    }
    for row in rows {
        text.push_str(&row.to_string());
        text.push('\n');
    }

    output.write_all(text.as_bytes()).await
}
