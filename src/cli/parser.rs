use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimecalc
#[derive(Parser)]
#[command(
    name = "rtimecalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "A duration calculator: chain HH:MM:SS values with + - × ÷ and keep a restorable history",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config or preference files are written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Press a sequence of keys on the calculator
    ///
    /// Digits may be grouped (`13000` = 01:30:00). Keys: + - × ÷ C ⌫ % =,
    /// with ASCII aliases * x / c < bs.
    Calc {
        #[arg(
            value_name = "KEYS",
            num_args = 1..,
            allow_hyphen_values = true,
            trailing_var_arg = true
        )]
        keys: Vec<String>,

        #[arg(long = "label", help = "Label for entries saved by '='")]
        label: Option<String>,

        #[arg(long = "color", help = "Color tag: blue, red, orange, purple, teal, green, magenta")]
        color: Option<String>,

        #[arg(long = "restore", value_name = "ID", help = "Start from a stored calculation")]
        restore: Option<String>,

        #[arg(long = "no-save", help = "Do not store results in the history")]
        no_save: bool,
    },

    /// Interactive calculator: one line of keys per prompt, ':q' to quit
    Repl {
        #[arg(long = "restore", value_name = "ID", help = "Start from a stored calculation")]
        restore: Option<String>,

        #[arg(long = "color", help = "Color tag for saved entries")]
        color: Option<String>,
    },

    /// List saved calculations
    History {
        #[arg(long, short, help = "Only entries created on YYYY-MM-DD (or 'today')")]
        date: Option<String>,

        #[arg(long = "details", help = "Show the steps of every entry")]
        details: bool,
    },

    /// Show one saved calculation with its steps
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Change the label and/or color of a saved calculation
    Edit {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(long = "label")]
        label: Option<String>,

        #[arg(long = "color")]
        color: Option<String>,
    },

    /// Delete a saved calculation
    Del {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete every saved calculation
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show or change the color theme
    Theme {
        #[arg(value_name = "NAME")]
        name: Option<String>,

        #[arg(long = "list", help = "List available themes")]
        list: bool,
    },

    /// Export saved calculations
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Only entries created on YYYY-MM-DD (or 'today')")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
