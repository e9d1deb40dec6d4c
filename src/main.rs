use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use nucleocomp::cli::{Cli, fmt};
use nucleocomp::io::{FastaReader, SequenceKind, save_report, write_sequences};
use nucleocomp::{Sequence, composition_report, reverse_complement};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter_level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();

    let kind = if cli.amino {
        SequenceKind::AminoAcid
    } else {
        SequenceKind::from_path(&cli.input)
    };

    if cli.verbose > 0 {
        eprintln!("{}", fmt::header("nucleocomp Configuration"));
        eprintln!("{}: {}", fmt::param_aligned("Input", 16), cli.input.display());
        eprintln!("{}: {}", fmt::param_aligned("Output", 16), cli.output.display());
        eprintln!("{}: {:?}", fmt::param_aligned("Sequence kind", 16), kind);
        eprintln!("{}: {}", fmt::param_aligned("Decompose", 16), cli.decompose);
        if let Some(path) = &cli.composition {
            eprintln!("{}: {}", fmt::param_aligned("Composition", 16), path.display());
        }
        eprintln!();
    }

    let sequences = FastaReader::read(&cli.input, kind)
        .with_context(|| format!("Failed to load sequences from {}", cli.input.display()))?;

    if cli.verbose > 0 {
        eprintln!(
            "{}",
            fmt::progress(format!(
                "Reverse-complementing {} sequences ({} residues)...",
                sequences.len(),
                FastaReader::total_length(&sequences)
            ))
        );
    }
    let reverse_complements = sequences
        .iter()
        .map(reverse_complement)
        .collect::<nucleocomp::Result<Vec<Sequence>>>()
        .context("Failed to reverse-complement sequences")?;

    write_sequences(&cli.output, &reverse_complements)
        .with_context(|| format!("Failed to write FASTA file: {}", cli.output.display()))?;

    let report = composition_report(&sequences, cli.decompose).context("Failed to compute composition")?;
    match &cli.composition {
        Some(path) => save_report(&report, path)
            .with_context(|| format!("Failed to write composition report: {}", path.display()))?,
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if cli.verbose > 0 {
        eprintln!("{}", fmt::success(format!("Output written to {}", cli.output.display())));
    }

    Ok(())
}
