//! pdf2image - Entry point
//!
//! Rasterizes a page range of one PDF into image files in the output directory.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2image_tools::cli::{Cli, USAGE};
use pdf2image_tools::{Converter, PdfiumBackend};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    pdf2image_tools::init_tracing("pdf2image_tools=info,pdf2image=info");

    let cli = Cli::parse();
    println!("Welcome to the PDF to Image Conversion Demo.");

    let code = run(&cli);

    if cli.wait {
        println!("Hit Enter to terminate.");
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
    }

    Ok(code)
}

fn run(cli: &Cli) -> ExitCode {
    let Some(request) = cli.to_request() else {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    };

    let source = request.source_path.display().to_string();
    if !request.source_path.exists() {
        tracing::error!("File does not exist: {}", source);
        return ExitCode::FAILURE;
    }
    tracing::info!("{} exists.", source);

    let backend = match PdfiumBackend::with_library_dir(cli.pdfium_dir.as_ref()) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!(error = %e, "could not load the rendering engine");
            return ExitCode::FAILURE;
        }
    };

    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("Converting {pos} out of {len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let result = Converter::new(&backend).convert(&request, |progress| {
        bar.set_length(u64::from(progress.total));
        bar.set_position(u64::from(progress.current));
    });
    bar.finish();
    drop(backend);

    match result {
        Ok(report) => {
            tracing::info!(pages = report.written.len(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "conversion failed");
            ExitCode::FAILURE
        }
    }
}
