//! ceatab CLI - NASA-CEA mole-fraction table extractor

use clap::{Parser, ValueEnum};

use ceatab::{export_table, output_path, parse_report_file, CeaResult, ExportFormat};

#[derive(Parser)]
#[command(name = "ceatab")]
#[command(version)]
#[command(about = "Parses NASA-CEA output text into a clean CSV/XLSX file of MOLE FRACTIONS", long_about = None)]
struct Cli {
    /// Path to the input NASA-CEA output file (e.g., cea_results.txt)
    input_file: String,

    /// Desired name for the output file, without extension (e.g., combustion_data)
    output_file: String,

    /// Output file format
    #[arg(short, long, value_enum, default_value_t = Extension::Xlsx)]
    extension: Extension,

    /// Quiet mode: suppress parse warnings on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Extension {
    /// Comma-separated values (most compatible)
    Csv,
    /// Excel workbook with a "Mole Fractions" sheet
    Xlsx,
}

impl From<Extension> for ExportFormat {
    fn from(ext: Extension) -> Self {
        match ext {
            Extension::Csv => ExportFormat::Csv,
            Extension::Xlsx => ExportFormat::Xlsx,
        }
    }
}

fn run(cli: &Cli) -> CeaResult<()> {
    let format = ExportFormat::from(cli.extension);

    println!("Reading data from: {}", cli.input_file);
    println!(
        "Exporting to: {}",
        output_path(&cli.output_file, format).display()
    );

    let output = parse_report_file(&cli.input_file)?;

    if !cli.quiet {
        for warning in &output.warnings {
            eprintln!("⚠ {}", warning);
        }
    }

    if output.table.is_empty() {
        eprintln!("⚠ No MOLE FRACTIONS tables found; exporting an empty table");
    } else {
        println!(
            "Found {} table(s), {} species",
            output.table.block_count(),
            output.table.species_count()
        );
    }

    let written = export_table(&output.table, &cli.output_file, format)?;
    println!("✓ Data exported to: {}", written.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}
