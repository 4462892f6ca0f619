//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Name the target types and access modes a user can request.
//!
//! Non-responsibilities:
//! - Does not read variables (see `dispatch` module).
//! - Does not render output (see `formatters` module).

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "envget")]
#[command(about = "Read environment variables as typed values", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envget get HOME\n  envget get PORT --type u16\n  envget get DEBUG --type bool --mode default\n  envget get WORKERS --type u32 --optional --mode try\n  envget --output json check TIMEOUT --type u64\n"
)]
pub struct Cli {
    /// Output format (text, json)
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "ENVGET_OUTPUT"
    )]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read a variable and print its converted value
    Get {
        /// Variable name. Omitting it reports a null-name error in strict mode.
        name: Option<String>,

        /// Type to convert the value to
        #[arg(short = 't', long = "type", value_enum, default_value_t = TargetType::String)]
        target: TargetType,

        /// Request the nullable form of the type (rejected in strict mode). An empty value prints `none` in text output, the same as the string "none"; use `--output json` to tell them apart
        #[arg(long)]
        optional: bool,

        /// Failure policy
        #[arg(short, long, value_enum, default_value_t = Mode::Strict)]
        mode: Mode,
    },

    /// Verify that a variable is set and converts to a type, without printing it
    Check {
        /// Variable name
        name: String,

        /// Type the value must convert to
        #[arg(short = 't', long = "type", value_enum, default_value_t = TargetType::String)]
        target: TargetType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Fail with a distinct exit code per error
    Strict,
    /// Print the value or the type's default; exit 1 if it was unavailable
    Try,
    /// Print the value or the type's default; always succeed
    Default,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Try => "try",
            Mode::Default => "default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetType {
    String,
    Bool,
    #[value(name = "i8")]
    I8,
    #[value(name = "i16")]
    I16,
    #[value(name = "i32")]
    I32,
    #[value(name = "i64")]
    I64,
    #[value(name = "u8")]
    U8,
    #[value(name = "u16")]
    U16,
    #[value(name = "u32")]
    U32,
    #[value(name = "u64")]
    U64,
    #[value(name = "f64")]
    F64,
    Char,
}

impl TargetType {
    pub const fn as_str(self) -> &'static str {
        match self {
            TargetType::String => "string",
            TargetType::Bool => "bool",
            TargetType::I8 => "i8",
            TargetType::I16 => "i16",
            TargetType::I32 => "i32",
            TargetType::I64 => "i64",
            TargetType::U8 => "u8",
            TargetType::U16 => "u16",
            TargetType::U32 => "u32",
            TargetType::U64 => "u64",
            TargetType::F64 => "f64",
            TargetType::Char => "char",
        }
    }
}
