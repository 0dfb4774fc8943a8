//! Clap derive structures for the `wiolink` CLI.
//!
//! One subcommand per endpoint group, mirroring the library surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wiolink -- talk to the Wio Link cloud from the command line
#[derive(Debug, Parser)]
#[command(
    name = "wiolink",
    version,
    about = "Manage Wio Link nodes from the command line",
    long_about = "A CLI over the Wio Link cloud REST API.\n\n\
        Covers user accounts, node management, grove drivers, node I/O,\n\
        OTA firmware updates and the cotf project facade.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "WIOLINK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server region: us or cn (overrides profile)
    #[arg(long, short = 'r', env = "WIOLINK_REGION", global = true)]
    pub region: Option<String>,

    /// Self-hosted server base URL (overrides region)
    #[arg(long, env = "WIOLINK_BASE_URL", global = true, hide = true)]
    pub base_url: Option<String>,

    /// Token to authenticate with (user or node token, depending on the command)
    #[arg(long, short = 't', env = "WIOLINK_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "WIOLINK_OUTPUT",
        default_value = "json",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "WIOLINK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "WIOLINK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Account sign-up, login and passwords
    #[command(alias = "u")]
    User(UserArgs),

    /// Create, list, rename and delete nodes (user token)
    #[command(alias = "n")]
    Nodes(NodesArgs),

    /// Grove driver catalogue (user token)
    Drivers(DriversArgs),

    /// Supported boards (user token)
    Boards(BoardsArgs),

    /// Read/write groves, sleep, OTA and settings of one node (node token)
    Node(NodeArgs),

    /// Project upload/download, variables and functions (node token)
    Cotf(CotfArgs),

    /// Raw request to any API path
    Custom(CustomArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── User ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a new account
    Create {
        email: String,
        #[arg(long, env = "WIOLINK_PASSWORD", hide_env = true)]
        password: String,
    },

    /// Log in and print the user token
    Login {
        email: String,
        #[arg(long, env = "WIOLINK_PASSWORD", hide_env = true)]
        password: String,
    },

    /// Send a password reset mail
    RetrievePassword { email: String },

    /// Change the password of the authenticated account
    ChangePassword {
        #[arg(long)]
        new_password: String,
    },
}

// ── Nodes ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NodesArgs {
    #[command(subcommand)]
    pub command: NodesCommand,
}

#[derive(Debug, Subcommand)]
pub enum NodesCommand {
    /// Create a node
    Create {
        name: String,
        /// Board type
        #[arg(long, default_value = "Wio Link v1.0")]
        board: String,
    },

    /// List nodes
    #[command(alias = "ls")]
    List,

    /// Rename a node
    Rename { node_sn: String, name: String },

    /// Delete a node
    #[command(alias = "rm")]
    Delete { node_sn: String },
}

// ── Drivers / Boards ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DriversArgs {
    #[command(subcommand)]
    pub command: DriversCommand,
}

#[derive(Debug, Subcommand)]
pub enum DriversCommand {
    /// Every known grove driver
    Info,
    /// Progress of the server-side driver scan
    ScanStatus,
}

#[derive(Debug, Args)]
pub struct BoardsArgs {
    #[command(subcommand)]
    pub command: BoardsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BoardsCommand {
    /// List supported boards
    #[command(alias = "ls")]
    List,
}

// ── Node ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NodeArgs {
    #[command(subcommand)]
    pub command: NodeCommand,
}

#[derive(Debug, Subcommand)]
pub enum NodeCommand {
    /// Describe the node's groves and their API
    WellKnown,

    /// Read a grove property
    Read {
        grove: String,
        property: String,
        /// Extra path arguments
        args: Vec<String>,
    },

    /// Write a grove property or call a grove method
    Write {
        grove: String,
        method: String,
        /// Values, joined into the path
        args: Vec<String>,
    },

    /// Put the node into deep sleep
    Sleep { seconds: u32 },

    /// List node resources
    Resources,

    /// Trigger an OTA firmware build
    OtaTrigger {
        /// JSON file describing the board and grove connections
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        build_phase: Option<u32>,
    },

    /// OTA build status
    OtaStatus,

    /// Node configuration
    Config,

    /// Point the node at another data exchange server
    SetDataxServer { address: String, dataxurl: String },
}

// ── Cotf ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CotfArgs {
    #[command(subcommand)]
    pub command: CotfCommand,
}

#[derive(Debug, Subcommand)]
pub enum CotfCommand {
    /// Upload a ULB project from a JSON file
    Upload { file: PathBuf },
    /// Download the node's ULB project
    Download,
    /// Read a project variable
    GetVar { name: String },
    /// Set a project variable
    SetVar { name: String, value: String },
    /// Call a project function
    Call { name: String, arg: String },
}

// ── Custom ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CustomArgs {
    #[command(subcommand)]
    pub command: CustomCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomCommand {
    Head { path: String },
    Get { path: String },
    Post {
        path: String,
        /// JSON body
        #[arg(long)]
        data: Option<String>,
    },
    Put {
        path: String,
        /// JSON body
        #[arg(long)]
        data: Option<String>,
    },
    Delete { path: String },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a profile
    Init {
        /// Profile name
        #[arg(long, default_value = "default")]
        name: String,
        #[arg(long)]
        user_token: Option<String>,
        #[arg(long)]
        node_token: Option<String>,
    },

    /// Show the effective configuration (tokens redacted)
    Show,

    /// Print the configuration file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
