use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linkdb", version)]
#[command(about = "Store, tag and search links from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "LINKDB_HOME")]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a link
    #[command(alias = "a")]
    Add {
        /// URL of the link (may be empty)
        location: String,

        /// Display name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Attribute as key=value (repeatable)
        #[arg(long = "attr")]
        attributes: Vec<String>,
    },

    /// List all links
    #[command(alias = "ls")]
    List,

    /// Show one or more links in full
    #[command(alias = "v")]
    View {
        /// Ids of the links
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Delete one or more links
    #[command(alias = "rm")]
    Delete {
        /// Ids of the links
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Change a link's location, name or description
    Update {
        /// Id of the link
        id: String,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Add tags to links
    Tag {
        /// Id of the link
        id: String,

        /// Tags to add
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Remove tags from links
    Untag {
        /// Id of the link
        id: String,

        /// Tags to remove (all tags with --all)
        #[arg(num_args = 0..)]
        tags: Vec<String>,

        /// Remove every tag
        #[arg(long, conflicts_with = "tags")]
        all: bool,
    },

    /// Set or remove attributes
    #[command(subcommand)]
    Attr(AttrCommand),

    /// Search links
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., ignore-case)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AttrCommand {
    /// Set attributes as key=value
    Set {
        id: String,
        #[arg(required = true, num_args = 1..)]
        pairs: Vec<String>,
    },
    /// Remove attributes by key
    Unset {
        id: String,
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Terms matched against every field (any term may match)
    pub terms: Vec<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Require a tag (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Require an attribute as key=value (repeatable)
    #[arg(long = "attr")]
    pub attributes: Vec<String>,

    /// Match if any filter matches instead of all
    #[arg(long)]
    pub any: bool,

    /// Compare case-sensitively
    #[arg(long, conflicts_with = "ignore_case")]
    pub case_sensitive: bool,

    /// Compare case-insensitively
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Require whole-field equality instead of substring matches
    #[arg(long, conflicts_with = "partial")]
    pub full: bool,

    /// Allow substring matches
    #[arg(long)]
    pub partial: bool,
}
