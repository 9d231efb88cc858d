use crate::core::exchange::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for runcalc
#[derive(Parser)]
#[command(
    name = "runcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "A runner's calculator: estimate your Zone 2 heart rate and keep track of your races",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the database (seeds two example races)
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Estimate your Zone 2 heart-rate range (60-70% of 220 - age)
    Zone2 {
        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Your age in whole years
        #[arg(long)]
        age: Option<String>,
    },

    /// Add a race
    Add {
        /// Race name
        #[arg(long)]
        name: String,

        /// State or country
        #[arg(long)]
        location: String,

        /// Distance in km
        #[arg(long)]
        distance: f64,

        /// Race date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Surface: road | trail (default from config)
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,

        /// Event link (http/https URL)
        #[arg(long)]
        link: Option<String>,

        /// Free notes
        #[arg(long)]
        notes: Option<String>,

        /// Picture URL
        #[arg(long)]
        image: Option<String>,
    },

    /// Edit a race: only the given fields change
    Edit {
        /// Race id (see `list`)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        distance: Option<f64>,

        #[arg(long, help = "Race date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "type", value_name = "TYPE", help = "road | trail")]
        kind: Option<String>,

        #[arg(long, conflicts_with = "clear_link")]
        link: Option<String>,

        #[arg(long, conflicts_with = "clear_notes")]
        notes: Option<String>,

        #[arg(long, conflicts_with = "clear_image")]
        image: Option<String>,

        /// Remove the event link
        #[arg(long = "clear-link")]
        clear_link: bool,

        /// Remove the notes
        #[arg(long = "clear-notes")]
        clear_notes: bool,

        /// Remove the picture
        #[arg(long = "clear-image")]
        clear_image: bool,
    },

    /// Delete a race by id
    Del {
        /// Race id (see `list`)
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List races sorted by date
    List {
        /// Search in name and location (case-insensitive)
        #[arg(long, short)]
        search: Option<String>,

        /// Filter by surface: all | road | trail
        #[arg(long = "type", value_name = "TYPE", default_value = "all")]
        kind: String,
    },

    /// Export all races
    Export {
        /// Export format: json (re-importable) or csv
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace all races with the content of a JSON export
    Import {
        /// JSON file produced by `export`
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show how many days are left until the next race
    Next {
        /// Reference time instead of now (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long, conflicts_with = "watch")]
        at: Option<String>,

        /// Keep refreshing the countdown (interval from config)
        #[arg(long)]
        watch: bool,

        /// Stop watching after N refreshes
        #[arg(long, requires = "watch", hide = true)]
        ticks: Option<u64>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
