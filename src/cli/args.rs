//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::distance::DistanceMetric;

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "ru-soundex")]
#[command(about = "Soundex phonetic codes for Russian words")]
#[command(version)]
pub struct Cli {
    /// Encoder options
    #[command(flatten)]
    pub encoder: EncoderArgs,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Encoder options shared by every subcommand.
///
/// Flags only switch options on; anything not given falls back to the
/// configuration file, then to the defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct EncoderArgs {
    /// JSON configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Omit the leading letter
    #[arg(long, global = true)]
    pub delete_first_letter: bool,

    /// Omit the first coded symbol
    #[arg(long, global = true)]
    pub delete_first_coded_letter: bool,

    /// Remove vowel placeholders
    #[arg(short = 'z', long, global = true)]
    pub delete_zeros: bool,

    /// Force the coded tail to a fixed length
    #[arg(long, global = true)]
    pub cut: bool,

    /// Tail length used with --cut
    #[arg(short = 'l', long, global = true)]
    pub seq_len: Option<usize>,

    /// Code vowels by group instead of 0
    #[arg(short = 'v', long, global = true)]
    pub code_vowels: bool,

    /// Tab-separated morphology dictionary (word<TAB>TAG,TAG); enables
    /// the -его/-ого ending rewrite
    #[arg(short = 'm', long, global = true)]
    pub morph_dict: Option<PathBuf>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the Soundex code of each word
    Encode {
        /// Words to encode (read from stdin, one per line, if omitted)
        words: Vec<String>,
    },

    /// Print the edit distance between the codes of two words
    Distance {
        /// First word
        a: String,

        /// Second word
        b: String,

        /// Edit distance metric
        #[arg(long, value_enum, default_value = "levenshtein")]
        metric: DistanceMetric,

        /// Ignore the leading letters
        #[arg(long)]
        tail_only: bool,
    },
}
