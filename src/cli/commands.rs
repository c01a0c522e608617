//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::phonetic::{EncoderOptions, Metaphone3};

use super::args::Commands;
use super::paths::PersistentConfig;

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Encode {
            words,
            vowels,
            exact,
            key_length,
            json,
        } => {
            let options = resolve_options(config_path, vowels, exact, key_length)?;
            cmd_encode(&words, options, json)
        }
        Commands::Batch {
            input,
            output,
            vowels,
            exact,
        } => {
            let options = resolve_options(config_path, vowels, exact, None)?;
            cmd_batch(input, output, options)
        }
        Commands::Verify {
            file,
            show_failures,
        } => cmd_verify(&file, show_failures),
        Commands::Compare {
            first,
            second,
            vowels,
            exact,
        } => {
            let options = resolve_options(config_path, vowels, exact, None)?;
            cmd_compare(&first, &second, options)
        }
        Commands::Settings {
            set_vowels,
            set_exact,
            set_key_length,
            reset,
        } => cmd_settings(config_path, set_vowels, set_exact, set_key_length, reset),
    }
}

/// Stored settings overlaid with command-line flags
fn resolve_options(
    config_path: Option<&Path>,
    vowels: bool,
    exact: bool,
    key_length: Option<usize>,
) -> Result<EncoderOptions> {
    let stored = PersistentConfig::load_from(config_path)?;
    let options = stored
        .merge_with_cli(vowels, exact, key_length)
        .encoder_options()?;
    debug!(?options, "resolved encoder options");
    Ok(options)
}

/// Encode command
fn cmd_encode(words: &[String], options: EncoderOptions, json: bool) -> Result<()> {
    let mut encoder = Metaphone3::try_from_options(options)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        for word in words {
            let keys = encoder.encode_keys(word);
            let line = serde_json::json!({
                "word": word,
                "primary": keys.primary,
                "secondary": keys.secondary,
            });
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }

    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    for word in words {
        let keys = encoder.encode_keys(word);
        if keys.secondary.is_empty() {
            writeln!(out, "  {:<width$}  {}", word, keys.primary.green())?;
        } else {
            writeln!(
                out,
                "  {:<width$}  {}  {}",
                word,
                keys.primary.green(),
                keys.secondary.cyan()
            )?;
        }
    }
    Ok(())
}

/// Batch command
fn cmd_batch(input: Option<PathBuf>, output: Option<PathBuf>, options: EncoderOptions) -> Result<()> {
    let reader: Box<dyn BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open input: {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    let count = encode_batch(reader, writer, options)?;

    if let Some(path) = output {
        eprintln!(
            "  Encoded {} word(s) into {}",
            count.to_string().green(),
            path.display().to_string().cyan()
        );
    }
    Ok(())
}

/// Encode one word per line from `reader` into `word,primary,secondary` CSV.
///
/// Blank lines are skipped. Returns the number of words written.
pub fn encode_batch<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    options: EncoderOptions,
) -> Result<usize> {
    let mut encoder = Metaphone3::try_from_options(options)?;
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["word", "primary", "secondary"])?;

    let mut count = 0;
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let keys = encoder.encode_keys(word);
        csv.write_record([word, keys.primary.as_str(), keys.secondary.as_str()])?;
        count += 1;
    }
    csv.flush()?;
    info!(count, "batch encoded");
    Ok(count)
}

/// Flag combinations in conformance file column order
pub const VERIFY_MODES: [(&str, EncoderOptions); 4] = [
    (
        "default",
        EncoderOptions {
            encode_vowels: false,
            encode_exact: false,
            max_key_length: crate::phonetic::DEFAULT_MAX_KEY_LENGTH,
        },
    ),
    (
        "vowels+exact",
        EncoderOptions {
            encode_vowels: true,
            encode_exact: true,
            max_key_length: crate::phonetic::DEFAULT_MAX_KEY_LENGTH,
        },
    ),
    (
        "exact",
        EncoderOptions {
            encode_vowels: false,
            encode_exact: true,
            max_key_length: crate::phonetic::DEFAULT_MAX_KEY_LENGTH,
        },
    ),
    (
        "vowels",
        EncoderOptions {
            encode_vowels: true,
            encode_exact: false,
            max_key_length: crate::phonetic::DEFAULT_MAX_KEY_LENGTH,
        },
    ),
];

/// One mismatching conformance row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyFailure {
    /// Input word
    pub word: String,
    /// Name of the flag combination
    pub mode: &'static str,
    /// Expected (primary, secondary)
    pub expected: (String, String),
    /// Actual (primary, secondary)
    pub actual: (String, String),
}

/// Outcome of a conformance run
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    /// Rows checked
    pub rows: usize,
    /// Mismatch count per flag combination, in [`VERIFY_MODES`] order
    pub errors: [usize; 4],
    /// Every mismatch
    pub failures: Vec<VerifyFailure>,
}

impl VerifyReport {
    /// Percentage of rows failing for mode `index`
    pub fn error_percent(&self, index: usize) -> f64 {
        if self.rows == 0 {
            return 0.0;
        }
        self.errors[index] as f64 * 100.0 / self.rows as f64
    }

    /// True when no row failed
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check the encoder against conformance rows.
///
/// Each CSV row is `word` followed by four `primary,secondary` pairs in
/// [`VERIFY_MODES`] order. Rows with fewer than nine fields are skipped.
pub fn verify_reader<R: Read>(reader: R) -> Result<VerifyReport> {
    let mut encoders: Vec<Metaphone3> = VERIFY_MODES
        .iter()
        .map(|(_, options)| Metaphone3::from_options(*options))
        .collect();

    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut report = VerifyReport::default();
    let mut skipped = 0usize;
    for record in csv.records() {
        let record = record.context("Failed to read conformance row")?;
        if record.len() < 9 {
            skipped += 1;
            continue;
        }
        let word = &record[0];
        report.rows += 1;

        for (index, encoder) in encoders.iter_mut().enumerate() {
            let expected = (
                record[1 + index * 2].to_string(),
                record[2 + index * 2].to_string(),
            );
            let actual = encoder.encode(word);
            if actual != expected {
                report.errors[index] += 1;
                report.failures.push(VerifyFailure {
                    word: word.to_string(),
                    mode: VERIFY_MODES[index].0,
                    expected,
                    actual,
                });
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, "skipped conformance rows with fewer than nine fields");
    }
    Ok(report)
}

/// Verify command
fn cmd_verify(file: &Path, show_failures: bool) -> Result<()> {
    let reader = File::open(file)
        .with_context(|| format!("Failed to open conformance file: {}", file.display()))?;
    let report = verify_reader(reader)?;

    println!("{}", "Conformance".bold().underline());
    println!();
    println!("  File:  {}", file.display().to_string().cyan());
    println!("  Rows:  {}", report.rows.to_string().green());
    for (index, (mode, _)) in VERIFY_MODES.iter().enumerate() {
        let percent = format!("{:.2}%", report.error_percent(index));
        let percent = if report.errors[index] == 0 {
            percent.green()
        } else {
            percent.red()
        };
        println!("  {:<13} {} errors ({})", mode, report.errors[index], percent);
    }

    if show_failures {
        println!();
        for failure in &report.failures {
            println!(
                "  {} [{}]: expected {}/{} got {}/{}",
                failure.word.yellow(),
                failure.mode,
                failure.expected.0,
                failure.expected.1,
                failure.actual.0,
                failure.actual.1
            );
        }
    }

    if !report.passed() {
        bail!("{} mismatch(es) in {}", report.failures.len(), file.display());
    }
    println!();
    println!("{}", "All rows match".green().bold());
    Ok(())
}

/// Compare command
fn cmd_compare(first: &str, second: &str, options: EncoderOptions) -> Result<()> {
    let mut encoder = Metaphone3::try_from_options(options)?;
    let a = encoder.encode_keys(first);
    let b = encoder.encode_keys(second);

    println!("  {}  {}", first, a.to_string().cyan());
    println!("  {}  {}", second, b.to_string().cyan());
    println!();
    if a.matches(&b) {
        println!("  {}", "Phonetic match".green().bold());
    } else {
        println!("  {}", "No phonetic match".yellow());
    }
    Ok(())
}

/// Settings command
fn cmd_settings(
    config_path: Option<&Path>,
    set_vowels: Option<bool>,
    set_exact: Option<bool>,
    set_key_length: Option<usize>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = PersistentConfig::default();
        config.save_to(config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config);
        return Ok(());
    }

    let mut config = PersistentConfig::load_from(config_path).unwrap_or_default();
    let mut changed = false;

    if let Some(vowels) = set_vowels {
        config.encode_vowels = Some(vowels);
        println!("  Set default vowel encoding: {}", vowels.to_string().green());
        changed = true;
    }

    if let Some(exact) = set_exact {
        config.encode_exact = Some(exact);
        println!("  Set default exact encoding: {}", exact.to_string().green());
        changed = true;
    }

    if let Some(length) = set_key_length {
        config.max_key_length = Some(length);
        // reject before saving
        config.encoder_options()?;
        println!("  Set default key length: {}", length.to_string().green());
        changed = true;
    }

    if changed {
        config.save_to(config_path)?;
        println!();
        println!("{}", "Configuration saved".green().bold());
    }

    println!();
    print_config(&config);
    Ok(())
}

fn print_config(config: &PersistentConfig) {
    let defaults = EncoderOptions::default();
    println!("{}", "Current Settings".bold().underline());
    println!();
    println!(
        "  Vowels:      {}",
        config
            .encode_vowels
            .unwrap_or(defaults.encode_vowels)
            .to_string()
            .green()
    );
    println!(
        "  Exact:       {}",
        config
            .encode_exact
            .unwrap_or(defaults.encode_exact)
            .to_string()
            .green()
    );
    println!(
        "  Key length:  {}",
        config
            .max_key_length
            .unwrap_or(defaults.max_key_length)
            .to_string()
            .green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_batch_skips_blank_lines() {
        let input = "ack\n\n  ache  \n";
        let mut out = Vec::new();
        let count = encode_batch(input.as_bytes(), &mut out, EncoderOptions::default()).unwrap();
        assert_eq!(count, 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "word,primary,secondary\nack,AK,\nache,AK,AX\n");
    }

    #[test]
    fn test_verify_reader_counts_mismatches() {
        let rows = "A,A,,A,,A,,A,\nshort,S\nack,AK,,AK,,AK,,AK,\neek,XX,,AK,,AK,,AK,\n";
        let report = verify_reader(rows.as_bytes()).unwrap();
        assert_eq!(report.rows, 3);
        assert_eq!(report.errors, [1, 0, 0, 0]);
        assert_eq!(report.failures[0].word, "eek");
        assert!((report.error_percent(0) - 100.0 / 3.0).abs() < 1e-9);
        assert!(!report.passed());
    }
}
