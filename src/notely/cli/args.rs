use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notely")]
#[command(about = "Local-first note-taking with tags, folders and shareable links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    Create {
        /// Title of the note (may be empty)
        #[arg(required = false, default_value = "")]
        title: String,

        /// Content of the note
        #[arg(required = false, default_value = "")]
        content: String,

        /// Tags to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Category (folder) to file the note under
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List notes for a section
    #[command(alias = "ls")]
    List {
        /// Show the archived section instead of active notes
        #[arg(long)]
        archived: bool,

        /// Restrict to active notes carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Restrict to active notes in this category
        #[arg(long)]
        category: Option<String>,

        /// Free-text search within the section
        #[arg(short, long)]
        search: Option<String>,
    },

    /// View a note in full
    #[command(alias = "v")]
    View {
        /// Number of the note as printed by `list`
        index: usize,
    },

    /// Edit a note's title, content or tags
    #[command(alias = "e")]
    Edit {
        /// Number of the note as printed by `list`
        index: usize,

        /// New title (kept unchanged if omitted)
        #[arg(long)]
        title: Option<String>,

        /// New content (kept unchanged if omitted)
        #[arg(long)]
        content: Option<String>,

        /// Replace all tags with these (repeatable; kept if omitted)
        #[arg(short, long = "tag")]
        tags: Option<Vec<String>>,
    },

    /// File a note under a category, or clear it
    Category {
        /// Number of the note as printed by `list`
        index: usize,

        /// Category name (omit together with --none to clear)
        #[arg(required_unless_present = "none")]
        name: Option<String>,

        /// Clear the note's category
        #[arg(long, conflicts_with = "name")]
        none: bool,
    },

    /// Toggle a note's archived state
    #[command(alias = "a")]
    Archive {
        /// Number of the note as printed by `list`
        index: usize,
    },

    /// Delete a note permanently
    #[command(alias = "rm")]
    Delete {
        /// Number of the note as printed by `list`
        index: usize,
    },

    /// List every tag in use
    Tags,

    /// List every category (folder) in use
    Folders,

    /// Export all notes to a JSON backup
    Export {
        /// Output file (defaults to notely-<timestamp>.json)
        output: Option<PathBuf>,
    },

    /// Import a JSON backup, appending its notes to the collection
    Import {
        /// Backup file to import
        path: PathBuf,
    },

    /// Print a share link fragment for a note
    Share {
        /// Number of the note as printed by `list`
        index: usize,
    },

    /// Open a shared note from a share token
    OpenShared {
        /// The token, with or without the leading `share=`
        token: String,
    },
}
