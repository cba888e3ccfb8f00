use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use stockroom::model::RecordKind;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
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
#[command(
    name = "stockroom",
    bin_name = "stockroom",
    version = get_version(),
    arg_required_else_help = true
)]
#[command(about = "Product, stock and supplier records in plain CSV files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the per-user data directory instead of the current directory
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Product records (id, name, supplier_id, about)
    #[command(alias = "p")]
    Product(KindArgs),

    /// Stock entries (entry_id, product_id, units)
    #[command(alias = "s")]
    Stock(KindArgs),

    /// Supplier records (id, name, address, phone, email, about)
    #[command(alias = "sup")]
    Supplier(KindArgs),

    /// Create any missing store files
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., stock-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

impl Commands {
    pub fn kind(&self) -> Option<(RecordKind, &KindArgs)> {
        match self {
            Commands::Product(args) => Some((RecordKind::Product, args)),
            Commands::Stock(args) => Some((RecordKind::Stock, args)),
            Commands::Supplier(args) => Some((RecordKind::Supplier, args)),
            Commands::Init | Commands::Config { .. } => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct KindArgs {
    /// Operate on this file instead of the configured one
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub action: RecordAction,
}

#[derive(Subcommand, Debug)]
pub enum RecordAction {
    /// Append one record, fields in order
    #[command(alias = "a")]
    Add {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        fields: Vec<String>,
    },

    /// Print the whole file
    #[command(alias = "ls")]
    List,

    /// Print lines containing the term (case-insensitive)
    #[command(alias = "find")]
    Search {
        /// Words are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Print the path of the store file
    Path,

    /// Describe the record layout
    Fields,
}
