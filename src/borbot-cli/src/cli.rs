//! CLI argument definitions for borbot
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

use borbot::Scheme;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "borbot")]
#[command(about = "Borbot Save Converter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect which compression scheme produced a save blob
    #[command(visible_alias = "t")]
    Detect {
        /// Path to the encoded save (stdin if omitted)
        input: Option<PathBuf>,
    },

    /// Decode a save blob and print the record as JSON
    #[command(visible_alias = "d")]
    Decode {
        /// Path to the encoded save (stdin if omitted)
        input: Option<PathBuf>,

        /// Write the record here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON record
        #[arg(short, long)]
        pretty: bool,
    },

    /// Encode a JSON record into a save blob
    #[command(visible_alias = "e")]
    Encode {
        /// Path to the JSON record (stdin if omitted)
        input: Option<PathBuf>,

        /// Write the blob here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compression scheme for the blob
        #[arg(short, long, value_enum)]
        scheme: SchemeArg,
    },

    /// Convert a save to the other platform (rescales rubies)
    #[command(visible_alias = "c")]
    Convert {
        /// Path to the encoded save (stdin if omitted)
        input: Option<PathBuf>,

        /// Write the converted blob here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Re-encode under this scheme instead of the input's own
        #[arg(short, long, value_enum)]
        scheme: Option<SchemeArg>,
    },
}

/// Compression scheme names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    /// Raw DEFLATE, no zlib wrapper
    Deflate,
    /// zlib-wrapped DEFLATE
    Zlib,
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Deflate => Scheme::RawDeflate,
            SchemeArg::Zlib => Scheme::ZlibDeflate,
        }
    }
}
