//! CLI command implementations

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{SoundexBuilder, SoundexConfig};
use crate::distance::SoundexDistance;
use crate::soundex::{DictionaryOracle, RussianSoundex};

use super::args::{Cli, Commands, EncoderArgs};

/// Execute a CLI command against stdin/stdout.
pub fn execute(cli: Cli) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(cli, stdin.lock(), stdout.lock())
}

/// Execute a CLI command with explicit input and output streams.
pub fn run<R: BufRead, W: Write>(cli: Cli, input: R, mut output: W) -> Result<()> {
    let soundex = build_encoder(&cli.encoder)?;

    match cli.command {
        Commands::Encode { words } => cmd_encode(&soundex, &words, input, &mut output),
        Commands::Distance {
            a,
            b,
            metric,
            tail_only,
        } => {
            let distance = SoundexDistance::new(soundex, metric);
            let value = if tail_only {
                distance.tail_distance(&a, &b)
            } else {
                distance.distance(&a, &b)
            }
            .with_context(|| format!("Failed to compare '{}' and '{}'", a, b))?;
            writeln!(output, "{}", value)?;
            Ok(())
        }
    }
}

/// Resolve the configuration: file first, then command-line flags.
pub fn resolve_config(args: &EncoderArgs) -> Result<SoundexConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SoundexConfig::default(),
    };

    config.delete_first_letter |= args.delete_first_letter;
    config.delete_first_coded_letter |= args.delete_first_coded_letter;
    config.delete_zeros |= args.delete_zeros;
    config.cut_result |= args.cut;
    config.code_vowels |= args.code_vowels;
    if let Some(len) = args.seq_len {
        config.seq_cutted_len = len;
    }
    if args.morph_dict.is_some() {
        config.use_morph_analysis = true;
    }

    Ok(config)
}

fn load_config(path: &Path) -> Result<SoundexConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = SoundexConfig::from_json(&json)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
}

fn build_encoder(args: &EncoderArgs) -> Result<RussianSoundex> {
    let config = resolve_config(args)?;
    let mut builder = SoundexBuilder::from_config(config.clone());

    if config.use_morph_analysis {
        let Some(path) = &args.morph_dict else {
            bail!("use_morph_analysis is set but no --morph-dict was given");
        };
        let file = File::open(path)
            .with_context(|| format!("Failed to open morphology dictionary {}", path.display()))?;
        let oracle = DictionaryOracle::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to load morphology dictionary {}", path.display()))?;
        info!(path = %path.display(), entries = oracle.len(), "loaded morphology dictionary");
        builder = builder.morph_oracle(Arc::new(oracle));
    }

    Ok(builder.build()?)
}

fn cmd_encode<R: BufRead, W: Write>(
    soundex: &RussianSoundex,
    words: &[String],
    input: R,
    output: &mut W,
) -> Result<()> {
    if !words.is_empty() {
        for word in words {
            encode_line(soundex, word, output)?;
        }
        return Ok(());
    }

    for line in input.lines() {
        let line = line.context("Failed to read from stdin")?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        encode_line(soundex, word, output)?;
    }
    Ok(())
}

fn encode_line<W: Write>(soundex: &RussianSoundex, word: &str, output: &mut W) -> Result<()> {
    let code = soundex
        .transform(word)
        .with_context(|| format!("Failed to encode '{}'", word))?;
    writeln!(output, "{}\t{}", word, code)?;
    Ok(())
}
