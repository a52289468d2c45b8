use std::path::PathBuf;

use clap::{Parser, Subcommand};
use polars::prelude::*;

use primerpick::generate::{MAX_PRIMER_LENGTH, MIN_PRIMER_LENGTH};
use primerpick::rank::TieBreak;
use primerpick::select::DesignConfig;
use primerpick::{design_primers, read_amplicons_path, table, thermo, CsvOutcome};

/// Primerpick CLI
#[derive(Parser)]
#[command(name = "primerpick")]
#[command(version)]
#[command(about = "PCR primer candidate scoring and ranking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Design primers for a CSV of amplicons ("amplicon name", "sequence")
    Design {
        /// Input CSV file
        input: PathBuf,
        /// Write the full ranked-options table to this CSV
        #[arg(long)]
        ranked_out: Option<PathBuf>,
        /// Write the optimal-primers table to this CSV
        #[arg(long)]
        optimal_out: Option<PathBuf>,
        /// Prepend configured overhangs to the optimal primers
        #[arg(long)]
        add_overhangs: bool,
        /// Overhang prepended to forward optimal primers
        #[arg(long)]
        upstream_overhang: Option<String>,
        /// Overhang prepended to reverse optimal primers
        #[arg(long)]
        downstream_overhang: Option<String>,
        /// Tie-break policy: "index" (deterministic) or "competition" (shared ranks)
        #[arg(long, default_value = "index")]
        tie_break: String,
        /// Also print the full ranked table, not just the optimal rows
        #[arg(long)]
        show_ranked: bool,
    },

    /// Compute the modified Breslauer melting temperature of one sequence
    Tm {
        /// Nucleotide sequence (A/C/G/T, case-insensitive)
        sequence: String,
    },

    /// Print the nearest-neighbor thermodynamic table
    ThermoTable,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Design {
            input,
            ranked_out,
            optimal_out,
            add_overhangs,
            upstream_overhang,
            downstream_overhang,
            tie_break,
            show_ranked,
        } => {
            let tie_break = tie_break
                .parse::<TieBreak>()
                .map_err(|e| anyhow::anyhow!(e))?;
            let config = DesignConfig {
                add_overhangs,
                upstream_overhang,
                downstream_overhang,
                tie_break,
            };
            cmd_design(&input, ranked_out, optimal_out, &config, show_ranked)?;
        }

        Commands::Tm { sequence } => {
            cmd_tm(&sequence)?;
        }

        Commands::ThermoTable => {
            cmd_thermo_table()?;
        }
    }

    Ok(())
}

fn cmd_design(
    input: &std::path::Path,
    ranked_out: Option<PathBuf>,
    optimal_out: Option<PathBuf>,
    config: &DesignConfig,
    show_ranked: bool,
) -> anyhow::Result<()> {
    let amplicons = match read_amplicons_path(input)? {
        CsvOutcome::Valid(rows) => rows,
        CsvOutcome::Invalid { message } => anyhow::bail!(message),
    };
    if amplicons.is_empty() {
        anyhow::bail!("No amplicon rows found in {}", input.display());
    }

    for a in &amplicons {
        if a.sequence.len() < MIN_PRIMER_LENGTH {
            eprintln!(
                "warning: amplicon {:?} is {} bases, below the shortest candidate length ({}); every candidate duplicates the whole sequence",
                a.amplicon_name,
                a.sequence.len(),
                MIN_PRIMER_LENGTH
            );
        } else if a.sequence.len() < MAX_PRIMER_LENGTH {
            eprintln!(
                "warning: amplicon {:?} is {} bases, shorter than {}; the longer length variants clamp to the whole sequence",
                a.amplicon_name,
                a.sequence.len(),
                MAX_PRIMER_LENGTH
            );
        }
    }

    eprintln!(
        "design: amplicons={} | tie_break={} | overhangs={}",
        amplicons.len(),
        config.tie_break.as_str(),
        config.add_overhangs
    );

    let out = design_primers(&amplicons, config)?;

    let mut ranked_df = table::ranked_frame(&out.ranked)?;
    let mut optimal_df = table::ranked_frame(&out.optimal)?;

    configure_polars_fmt();
    if show_ranked {
        println!("\n=== All ranked options ===");
        println!("{}", ranked_df);
    }
    println!("\n=== Optimal primers ===");
    println!("{}", optimal_df);

    if let Some(path) = ranked_out {
        table::write_csv(&mut ranked_df, &path)?;
        eprintln!("wrote ranked table to {}", path.display());
    }
    if let Some(path) = optimal_out {
        table::write_csv(&mut optimal_df, &path)?;
        eprintln!("wrote optimal table to {}", path.display());
    }

    Ok(())
}

fn cmd_tm(sequence: &str) -> anyhow::Result<()> {
    let cleaned = primerpick::primer::clean_sequence(sequence);
    primerpick::generate::validate_sequence("(cli)", &cleaned)?;

    let has_gc = cleaned.bytes().any(|b| matches!(b, b'G' | b'C'));
    if cleaned.len() <= 8 || !has_gc {
        eprintln!(
            "warning: the modified Breslauer model is meaningful for sequences >8 bases containing at least one G or C"
        );
    }

    let tm = thermo::tm_calc(&cleaned)?;
    println!("{:.2}", tm);
    Ok(())
}

fn cmd_thermo_table() -> anyhow::Result<()> {
    let pairs: Vec<String> = thermo::NEAREST_NEIGHBORS
        .iter()
        .map(|nn| String::from_utf8_lossy(&nn.pair).into_owned())
        .collect();
    let h: Vec<f64> = thermo::NEAREST_NEIGHBORS.iter().map(|nn| nn.enthalpy).collect();
    let s: Vec<f64> = thermo::NEAREST_NEIGHBORS.iter().map(|nn| nn.entropy).collect();
    let g: Vec<f64> = thermo::NEAREST_NEIGHBORS.iter().map(|nn| nn.free_energy).collect();

    let df = df!(
        "pair" => pairs,
        "enthalpy" => h,
        "entropy" => s,
        "free_energy" => g,
    )?;

    configure_polars_fmt();
    println!("{}", df);
    Ok(())
}

/// Configure Polars display to show all columns and full cell width.
/// These env vars are read by Polars' pretty-printer (fmt feature).
fn configure_polars_fmt() {
    std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
    std::env::set_var("POLARS_FMT_MAX_COLS", "100000");
    std::env::set_var("POLARS_FMT_MAX_ROWS", "1000000");
    std::env::set_var("POLARS_FMT_STR_LEN", "100000");
    std::env::set_var("POLARS_TABLE_WIDTH", "65535");
}
