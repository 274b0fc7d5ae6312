use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use discovery_mcp_gen::SchemaOrder;

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "discovery-mcp-gen")]
#[command(author, version, about = "Google API Discovery Document to MCP tool bindings generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List methods of a Discovery Document, or the APIs published by Google
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate Rust MCP tool argument types from a Discovery Document
  Generate(GenerateCommand),
}

/// Where to read the Discovery Document from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
  /// Path to a local Discovery Document JSON file
  #[arg(short, long, value_name = "FILE", visible_alias = "file", conflicts_with = "api")]
  pub input: Option<PathBuf>,

  /// API name to fetch from googleapis.com (e.g. youtube, drive, gmail)
  #[arg(long, value_name = "NAME", requires = "api_version")]
  pub api: Option<String>,

  /// API version to fetch (e.g. v3, v1)
  #[arg(long = "version", value_name = "VERSION", requires = "api")]
  pub api_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentInput {
  File(PathBuf),
  Remote { api: String, version: String },
}

impl std::fmt::Display for DocumentInput {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::File(path) => write!(f, "{}", path.display()),
      Self::Remote { api, version } => write!(f, "googleapis.com ({api} {version})"),
    }
  }
}

impl TryFrom<SourceArgs> for DocumentInput {
  type Error = anyhow::Error;

  fn try_from(args: SourceArgs) -> anyhow::Result<Self> {
    match args {
      SourceArgs { input: Some(path), .. } => Ok(Self::File(path)),
      SourceArgs {
        api: Some(api),
        api_version: Some(version),
        ..
      } => Ok(Self::Remote { api, version }),
      _ => anyhow::bail!("a document is required: pass --input FILE or --api NAME --version VERSION"),
    }
  }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  #[command(flatten)]
  pub source: SourceArgs,

  /// Path where the generated Rust code will be written (default: stdout)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Methods to generate (comma-separated dotted names, default: all)
  #[arg(short, long, value_name = "METHODS", value_delimiter = ',')]
  pub methods: Vec<String>,

  /// Name of the generated module
  #[arg(long = "module", value_name = "NAME", default_value = "tools")]
  pub module_name: String,

  /// Tool name prefix (default: <api>_)
  #[arg(long, value_name = "PREFIX")]
  pub prefix: Option<String>,

  /// Argument type name prefix
  #[arg(long, value_name = "PREFIX", default_value = "API")]
  pub type_prefix: String,

  /// Also generate request and response body types
  #[arg(long, default_value_t = false)]
  pub schema: bool,

  /// Order of generated body types
  #[arg(long, value_enum, default_value = "topological")]
  pub schema_order: SchemaOrderArg,

  /// Fail on references to undefined schemas instead of typing them as serde_json::Value
  #[arg(long, default_value_t = false)]
  pub strict_refs: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SchemaOrderArg {
  /// Dependencies before the types that use them
  Topological,
  /// Alphabetical by schema name
  Alphabetical,
}

impl From<SchemaOrderArg> for SchemaOrder {
  fn from(order: SchemaOrderArg) -> Self {
    match order {
      SchemaOrderArg::Topological => Self::Topological,
      SchemaOrderArg::Alphabetical => Self::Alphabetical,
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all methods of a Discovery Document
  Methods {
    #[command(flatten)]
    source: SourceArgs,
  },
  /// List all APIs in the public discovery directory
  Apis {
    /// Only show preferred versions
    #[arg(long, default_value_t = false)]
    preferred: bool,
  },
}
