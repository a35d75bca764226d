// src/main.rs
mod document;
mod extractors;
mod pipeline;
mod report;
mod storage;
mod utils;

use clap::Parser;
use report::Bureau;
use std::path::PathBuf;
use storage::ExportManager;
use utils::AppError;

/// Command Line Interface for the credit report categorizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Credit report to audit (PDF, or plain text with --from-text)
    input: PathBuf,

    /// Bureau section(s) to audit; repeat for more than one
    #[arg(short, long = "bureau", value_enum, ignore_case = true, default_values_t = [Bureau::Equifax])]
    bureaus: Vec<Bureau>,

    /// Treat the input as already-extracted text instead of a PDF
    #[arg(long)]
    from_text: bool,

    /// Output directory for the exported summary
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Skip writing the spreadsheet
    #[arg(long)]
    no_export: bool,

    /// Also write a JSON summary of the run next to the spreadsheet
    #[arg(long)]
    metadata: bool,

    /// Debug mode - save the extracted text with parser anchors marked
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Pull the text layer out of the document
    let text = document::load_document_text(&args.input, args.from_text)?;

    if args.debug {
        let debug_dir = args.output_dir.join("debug");
        std::fs::create_dir_all(&debug_dir)?;

        let raw_text_path = debug_dir.join("extracted_text.txt");
        std::fs::write(&raw_text_path, &text)?;
        tracing::info!("Saved extracted text to: {}", raw_text_path.display());

        let annotated_path = debug_dir.join("extracted_text_annotated.txt");
        if let Err(e) = utils::text_debug::create_debug_text(
            &text,
            &annotated_path,
            &utils::text_debug::REPORT_DEBUG_PATTERNS,
        ) {
            tracing::warn!("Failed to create annotated debug text: {}", e);
        }
    }

    // 4. Segment, parse, sort and compose
    let report = match pipeline::build_report(&text, &args.bureaus) {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!("Nothing to process: {}", e);
            return Ok(());
        }
    };

    // 5. Show notices and the vertical summary
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::display::write_notices(&mut out, &report.notices)?;
    if !report.has_accounts() {
        tracing::info!("No accounts to summarize");
        return Ok(());
    }
    report::display::write_rows(&mut out, &report.rows)?;

    // 6. Export the same rows
    if args.no_export {
        tracing::info!("Export skipped");
        return Ok(());
    }
    let exporter = ExportManager::new(&args.output_dir)?;
    let sheet_path = exporter.save_spreadsheet(&report.rows)?;
    tracing::info!("Saved vertical summary to: {}", sheet_path.display());

    if args.metadata {
        match exporter.save_report_metadata(&report) {
            Ok(path) => tracing::info!("Saved run metadata to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save run metadata: {}", e),
        }
    }

    tracing::info!(
        "Processing finished. Accounts: {}, Bureaus: {}",
        report.records.len(),
        report.bureaus.len()
    );

    Ok(())
}
