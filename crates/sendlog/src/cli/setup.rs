use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "sendlog", bin_name = "sendlog", version = get_version())]
#[command(about = "Log climbs, attempts and sends, and browse your friends' lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to $SENDLOG_DATA, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Optional climb location details.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct PlaceArgs {
    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// State or region
    #[arg(long, alias = "state")]
    pub region: Option<String>,

    /// Country
    #[arg(long)]
    pub country: Option<String>,
}

/// Catalogue filters shared by `list` and `browse`.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterArgs {
    /// Only show one discipline (boulder, sport, trad)
    #[arg(short, long)]
    pub discipline: Option<String>,

    /// Lowest grade to show (e.g. V3 or 3 for boulder, 20 for sport)
    #[arg(long)]
    pub min: Option<String>,

    /// Highest grade to show
    #[arg(long)]
    pub max: Option<String>,

    /// Only show climbs at this location (case-insensitive)
    #[arg(short, long)]
    pub location: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign in as it
    #[command(display_order = 1)]
    Register {
        /// Your name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Email address your friends will find you by
        #[arg(short, long)]
        email: String,
    },

    /// Show the signed-in account
    #[command(display_order = 2)]
    Whoami,

    /// Add a climb to your list
    #[command(alias = "new", display_order = 10)]
    Add {
        /// Climb name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Discipline: boulder, sport or trad
        #[arg(short, long)]
        discipline: String,

        /// Grade (V0-V17 for boulder, 1-35 for sport, anything for trad)
        #[arg(short, long)]
        grade: String,

        /// Crag or area
        #[arg(short, long)]
        location: String,

        #[command(flatten)]
        place: PlaceArgs,
    },

    /// Change a climb's details
    #[command(display_order = 11)]
    Edit {
        /// Climb id or unique id prefix
        climb: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New discipline
        #[arg(short, long)]
        discipline: Option<String>,

        /// New grade
        #[arg(short, long)]
        grade: Option<String>,

        /// New location
        #[arg(short, long)]
        location: Option<String>,

        #[command(flatten)]
        place: PlaceArgs,
    },

    /// List your climbs, projects first
    #[command(alias = "ls", display_order = 12)]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show a climb with its attempts and links
    #[command(alias = "view", display_order = 13)]
    Show {
        /// Climb id or unique id prefix
        climb: String,

        /// Look the climb up in this friend's list
        #[arg(long, value_name = "EMAIL")]
        from: Option<String>,
    },

    /// Delete a climb with its attempts and links
    #[command(alias = "rm", display_order = 14)]
    Delete {
        /// Climb id or unique id prefix
        climb: String,
    },

    /// Log an attempt
    #[command(display_order = 20)]
    Attempt {
        /// Climb id or unique id prefix
        climb: String,

        /// Notes on how it went
        #[arg(trailing_var_arg = true)]
        notes: Vec<String>,

        /// Date of the attempt (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Replace the notes of an attempt
    #[command(display_order = 21)]
    Note {
        /// Climb id or unique id prefix
        climb: String,

        /// Attempt number (e.g. 3 or #3) or attempt id
        attempt: String,

        /// New notes
        #[arg(trailing_var_arg = true)]
        notes: Vec<String>,
    },

    /// Mark a climb as sent
    #[command(display_order = 22)]
    Send {
        /// Climb id or unique id prefix
        climb: String,

        /// Notes on the send
        #[arg(trailing_var_arg = true)]
        notes: Vec<String>,

        /// Date of the send (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Put a sent climb back on the project list
    #[command(display_order = 23)]
    Unsend {
        /// Climb id or unique id prefix
        climb: String,
    },

    /// Attach a beta link to a climb
    #[command(display_order = 24)]
    Link {
        /// Climb id or unique id prefix
        climb: String,

        /// Link title
        name: String,

        /// Link URL
        url: String,
    },

    /// Manage friends
    #[command(display_order = 30)]
    Friends {
        #[command(subcommand)]
        action: Option<FriendsAction>,
    },

    /// Browse a friend's climbs (read-only)
    #[command(display_order = 31)]
    Browse {
        /// Your friend's email
        email: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Copy a friend's climb into your list
    #[command(display_order = 32)]
    Copy {
        /// Your friend's email
        email: String,

        /// Climb id or unique id prefix in their list
        climb: String,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum FriendsAction {
    /// List your friends
    List,

    /// Add a friend by email
    Add { email: String },

    /// Remove a friend by email
    #[command(alias = "rm")]
    Remove { email: String },
}
