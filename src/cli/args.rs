//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "metaphone3")]
#[command(about = "Metaphone 3 phonetic keys for words and names")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log encoder activity at debug level
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode words and print their keys
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,

        /// Encode non-initial vowels
        #[arg(short = 'v', long)]
        vowels: bool,

        /// Keep voiced and unvoiced consonants apart
        #[arg(short = 'e', long)]
        exact: bool,

        /// Maximum key length
        #[arg(short = 'l', long)]
        key_length: Option<usize>,

        /// Print one JSON object per word
        #[arg(long)]
        json: bool,
    },

    /// Encode a word list, one word per line, into CSV
    Batch {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Encode non-initial vowels
        #[arg(short = 'v', long)]
        vowels: bool,

        /// Keep voiced and unvoiced consonants apart
        #[arg(short = 'e', long)]
        exact: bool,
    },

    /// Check the encoder against a conformance file
    ///
    /// Each row holds a word followed by primary/secondary pairs for the four
    /// flag combinations: plain, vowels+exact, exact only, vowels only.
    Verify {
        /// Conformance CSV file
        file: PathBuf,

        /// Print every mismatching row
        #[arg(long)]
        show_failures: bool,
    },

    /// Report whether two words share a phonetic key
    Compare {
        /// First word
        first: String,

        /// Second word
        second: String,

        /// Encode non-initial vowels
        #[arg(short = 'v', long)]
        vowels: bool,

        /// Keep voiced and unvoiced consonants apart
        #[arg(short = 'e', long)]
        exact: bool,
    },

    /// Show or update user settings
    Settings {
        /// Set default vowel encoding
        #[arg(long)]
        set_vowels: Option<bool>,

        /// Set default exact encoding
        #[arg(long)]
        set_exact: Option<bool>,

        /// Set default maximum key length
        #[arg(long)]
        set_key_length: Option<usize>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
