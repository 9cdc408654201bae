use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todoboard")]
#[command(about = "A single-user kanban task board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the board snapshot (or set TODOBOARD_DIR env var)
    #[arg(long, global = true, value_name = "DIR", env = "TODOBOARD_DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// List operations
    List(ListCommand),
    /// Card operations
    Card(CardCommand),
    /// Drag a card onto another card or list, as the board UI would
    Drag(DragArgs),
    /// Discard everything and restore the initial board
    Reset,
    /// Add the sample card to the current board
    Seed,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board with the three status lists
    Create {
        #[arg(long)]
        title: String,
    },
    /// List all boards
    List,
    /// Make a board the current one
    Select {
        #[arg(long)]
        id: String,
    },
    /// Show a board with card summaries (defaults to the current board)
    Show {
        #[arg(long)]
        id: Option<String>,
    },
}

// List commands
#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Append a list to a board
    Create {
        #[arg(long)]
        board: Option<String>,
        #[arg(long)]
        title: String,
    },
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

/// Identifies a card. The board defaults to the current one.
#[derive(Args, Clone)]
pub struct CardRef {
    #[arg(long)]
    pub board: Option<String>,
    #[arg(long)]
    pub card: String,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Create a new card at the end of a list
    Create(CardCreateArgs),
    /// Get a card with its derived summary
    Get(CardRef),
    /// Update card fields
    Update(CardUpdateArgs),
    /// Move a card to a list position
    Move {
        #[command(flatten)]
        target: CardRef,
        #[arg(long)]
        to: String,
        /// Position in the destination list (default: end)
        #[arg(long)]
        index: Option<usize>,
    },
    /// Permanently delete a card
    Delete(CardRef),
    /// Set a card's status (todo, in-progress, completed)
    Status {
        #[command(flatten)]
        target: CardRef,
        #[arg(long)]
        status: String,
    },
    /// Toggle a label on a card
    Label {
        #[command(flatten)]
        target: CardRef,
        #[arg(long)]
        label: String,
    },
    /// Add or delete a comment
    Comment(CardCommentArgs),
    /// Add or delete an attachment
    Attach(CardAttachArgs),
    /// Add a checklist, or an item to an existing checklist
    Checklist(CardChecklistArgs),
    /// Toggle a checklist item
    Check {
        #[command(flatten)]
        target: CardRef,
        #[arg(long)]
        checklist: String,
        #[arg(long)]
        item: String,
    },
}

#[derive(Args)]
pub struct CardCreateArgs {
    #[arg(long)]
    pub board: Option<String>,
    #[arg(long)]
    pub list: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub due_date: Option<String>,
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[command(flatten)]
    pub target: CardRef,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// low, medium, high or none
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub completed: Option<bool>,
    #[arg(long, conflicts_with = "clear_due_date")]
    pub due_date: Option<String>,
    #[arg(long)]
    pub clear_due_date: bool,
    #[arg(long, conflicts_with = "clear_start_date")]
    pub start_date: Option<String>,
    #[arg(long)]
    pub clear_start_date: bool,
}

#[derive(Args)]
#[command(group(ArgGroup::new("comment_action").required(true).args(["text", "delete"])))]
pub struct CardCommentArgs {
    #[command(flatten)]
    pub target: CardRef,
    #[arg(long)]
    pub text: Option<String>,
    /// Id of the comment to delete
    #[arg(long)]
    pub delete: Option<String>,
}

#[derive(Args)]
#[command(group(ArgGroup::new("attach_action").required(true).args(["url", "delete"])))]
pub struct CardAttachArgs {
    #[command(flatten)]
    pub target: CardRef,
    #[arg(long, requires = "url")]
    pub name: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    /// Id of the attachment to delete
    #[arg(long)]
    pub delete: Option<String>,
}

#[derive(Args)]
#[command(group(ArgGroup::new("checklist_action").required(true).args(["title", "item"])))]
pub struct CardChecklistArgs {
    #[command(flatten)]
    pub target: CardRef,
    /// Title of a new checklist
    #[arg(long)]
    pub title: Option<String>,
    /// Checklist receiving the new item
    #[arg(long, requires = "item")]
    pub checklist: Option<String>,
    /// Text of a new item
    #[arg(long, requires = "checklist")]
    pub item: Option<String>,
}

#[derive(Args)]
#[command(group(ArgGroup::new("drop").args(["onto_card", "onto_list"])))]
pub struct DragArgs {
    #[arg(long)]
    pub board: Option<String>,
    #[arg(long)]
    pub card: String,
    /// List the drag starts from (default: the card's list)
    #[arg(long)]
    pub from: Option<String>,
    /// Drop onto this card
    #[arg(long)]
    pub onto_card: Option<String>,
    /// Drop onto the empty area of this list
    #[arg(long)]
    pub onto_list: Option<String>,
    /// Allow drops inside the origin list to reorder
    #[arg(long)]
    pub reorder: bool,
}
