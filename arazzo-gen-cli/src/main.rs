use std::path::PathBuf;

use clap::Parser;

use arazzo_gen_source::{is_remote, OpenApiSource};

mod exit_codes;
mod write;

#[derive(Debug, Parser)]
#[command(
    name = "arazzo-gen",
    version,
    about = "Generate Arazzo workflow documents from OpenAPI descriptions"
)]
struct Cli {
    /// Path or URL of the OpenAPI document.
    #[arg(short = 'i', long = "openapi", value_name = "FILE|URL")]
    openapi: String,

    /// Path of the generated Arazzo JSON document.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: PathBuf,

    #[arg(long, short)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run(cli));
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> i32 {
    if !is_remote(&cli.openapi) && !std::path::Path::new(&cli.openapi).exists() {
        eprintln!("error: OpenAPI document not found: {}", cli.openapi);
        return exit_codes::SOURCE_FAILED;
    }

    if !cli.quiet {
        println!("generating Arazzo document from {}", cli.openapi);
    }

    let source = match OpenApiSource::load(&cli.openapi).await {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return exit_codes::SOURCE_FAILED;
        }
    };

    let document = match arazzo_gen_core::generate(&source) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("error: {e}");
            return exit_codes::GENERATION_FAILED;
        }
    };

    match write::write_document(&cli.output, &document) {
        Ok(()) => {
            if !cli.quiet {
                println!(
                    "wrote {} ({} workflows)",
                    cli.output.display(),
                    document.workflows.len()
                );
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write {}: {e}", cli.output.display());
            exit_codes::RUNTIME_ERROR
        }
    }
}
