//! Clap derive structures for the `wardline` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wardline -- operations console for multi-site hospital networks
#[derive(Debug, Parser)]
#[command(
    name = "wardline",
    version,
    about = "Manage hospital operations data from the command line",
    long_about = "An operations console for multi-site hospital networks.\n\n\
        Every patient, staff, audit, and compliance record is scoped to the\n\
        active site; data from one site is never visible under another.",
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
    /// Store snapshot file (defaults to the platform data dir)
    #[arg(long, env = "WARDLINE_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,

    /// Switch to this site (code or id) before running the command
    #[arg(long, short = 's', env = "WARDLINE_SITE", global = true)]
    pub site: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "WARDLINE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage sites and the active-site selection
    #[command(alias = "site")]
    Sites(SitesArgs),

    /// Manage the active site's patient records
    #[command(alias = "pt")]
    Patients(PatientsArgs),

    /// Manage the active site's staff directory
    #[command(alias = "st")]
    Staff(StaffArgs),

    /// View and append the active site's audit trail
    Audit(AuditArgs),

    /// View the active site's compliance scores
    #[command(alias = "comp")]
    Compliance(ComplianceArgs),

    /// KPI tiles and department census for the active site
    Stats,

    /// Populate the store with demo hospitals and records
    Seed(SeedArgs),

    /// Inspect configuration paths and contents
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Sites ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SitesArgs {
    #[command(subcommand)]
    pub command: SitesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SitesCommand {
    /// List registered sites
    #[command(alias = "ls")]
    List,

    /// Register a new site
    Add {
        /// Short site code (e.g., NGH)
        code: String,
        /// Display name
        name: String,
        /// Licensed bed capacity
        #[arg(long, default_value_t = 0)]
        beds: u32,
        /// Comma-separated department names
        #[arg(long, value_delimiter = ',')]
        departments: Vec<String>,
        /// Accent theme (teal, indigo, amber, crimson)
        #[arg(long, default_value = "teal")]
        theme: String,
    },

    /// Make a site the active one
    Use {
        /// Site code or id
        site: String,
    },

    /// Show the active site
    Current,

    /// Remove a site and all of its data
    #[command(alias = "rm")]
    Remove {
        /// Site code or id
        site: String,
    },
}

// ── Patients ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PatientsArgs {
    #[command(subcommand)]
    pub command: PatientsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PatientsCommand {
    /// List the active site's patients
    #[command(alias = "ls")]
    List {
        /// Only this department
        #[arg(long)]
        department: Option<String>,
        /// Only this status (admitted, observation, discharged)
        #[arg(long)]
        status: Option<String>,
    },

    /// Admit a new patient
    Admit {
        /// Patient name
        name: String,
        /// Department to admit into
        #[arg(long)]
        department: String,
        /// Acuity level, 1 (stable) through 5 (critical)
        #[arg(long, default_value_t = 2)]
        acuity: u8,
        /// Medical record number (generated when omitted)
        #[arg(long)]
        mrn: Option<String>,
    },

    /// Discharge a patient by record id
    Discharge {
        /// Patient record id (e.g., PT-NGH-0007)
        id: String,
    },
}

// ── Staff ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StaffArgs {
    #[command(subcommand)]
    pub command: StaffCommand,
}

#[derive(Debug, Subcommand)]
pub enum StaffCommand {
    /// List the active site's staff directory
    #[command(alias = "ls")]
    List {
        /// Only staff currently on duty
        #[arg(long)]
        on_duty: bool,
    },

    /// Add a staff member to the directory
    Add {
        /// Staff member name
        name: String,
        /// Role (physician, nurse, technician, pharmacist, administrator)
        #[arg(long)]
        role: String,
        /// Department
        #[arg(long)]
        department: String,
        /// Mark as currently on duty
        #[arg(long)]
        on_duty: bool,
    },
}

// ── Audit ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AuditArgs {
    #[command(subcommand)]
    pub command: AuditCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuditCommand {
    /// List the newest audit entries
    #[command(alias = "ls")]
    List {
        /// Maximum entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Only this severity (info, warning, critical)
        #[arg(long)]
        severity: Option<String>,
    },

    /// Append an entry to the audit trail
    Record {
        /// Action (patient-admitted, record-viewed, config-changed, ...)
        action: String,
        /// Free-form detail
        detail: String,
        /// Operator to attribute the entry to
        #[arg(long, default_value = "console")]
        actor: String,
        /// Severity (info, warning, critical)
        #[arg(long, default_value = "info")]
        severity: String,
    },
}

// ── Compliance ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ComplianceArgs {
    #[command(subcommand)]
    pub command: ComplianceCommand,
}

#[derive(Debug, Subcommand)]
pub enum ComplianceCommand {
    /// List compliance controls with scores and status
    #[command(alias = "ls")]
    List,
}

// ── Seed ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// RNG seed, for reproducible demo data
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Overwrite datasets that already exist
    #[arg(long)]
    pub force: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config and data file paths
    Path,

    /// Print the effective configuration
    Show,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
