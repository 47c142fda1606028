use anyhow::Result;
use clap::Command;

// go through the library crate to get the interfaces
use telofinder::telomere;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = env!("CARGO_PKG_NAME");
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Detect degenerate telomeric repeat runs in sequencing reads, on both strand orientations.")
        .subcommand_required(true)
        .subcommand(telomere::cli::make_scan_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        Some((telomere::consts::SCAN_CMD, matches)) => {
            telomere::cli::handlers::detect_telomeres(matches)?;
        }
        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
