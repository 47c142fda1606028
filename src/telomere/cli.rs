use anyhow::Result;
use clap::{Arg, ArgMatches, Command};

use super::consts;

pub fn make_scan_cli() -> Command {
    Command::new(consts::SCAN_CMD)
        .author("Databio")
        .about("Scan a sequence file for degenerate telomeric repeat runs on both strands.")
        .arg(
            Arg::new("sequence")
                .long("sequence")
                .short('s')
                .help("Path to the sequence file to scan (plain text or gzipped).")
                .required(true),
        )
        .arg(
            Arg::new("min-length")
                .long("min-length")
                .short('m')
                .value_parser(clap::value_parser!(usize))
                .help("Minimum telomere length required to report a hit. Values below 30 pick up interstitial TG stretches."),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Path for the results table. Defaults to the input path with a -results.tsv suffix."),
        )
}

pub mod handlers {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::telomere::run_telomere_scan;
    use crate::telomere::writing::default_output_path;

    pub fn detect_telomeres(matches: &ArgMatches) -> Result<()> {
        let sequence = matches
            .get_one::<String>("sequence")
            .expect("A path to a sequence file is required.");

        let min_length = matches
            .get_one::<usize>("min-length")
            .copied()
            .unwrap_or(consts::DEFAULT_MIN_LENGTH);

        if min_length < consts::MIN_RECOMMENDED_LENGTH {
            eprintln!(
                "Warning: --min-length {} is below {}; short TG repeats may get reported as telomeres.",
                min_length,
                consts::MIN_RECOMMENDED_LENGTH
            );
        }

        let sequence = Path::new(sequence);
        let output = match matches.get_one::<String>("output") {
            Some(output) => PathBuf::from(output),
            None => default_output_path(sequence),
        };

        let n_hits = run_telomere_scan(sequence, min_length, &output)?;

        println!(
            "Analysis complete. {} telomeres found. Results written to: {}",
            n_hits,
            output.display()
        );

        Ok(())
    }
}
