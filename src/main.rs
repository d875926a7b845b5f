use ads2coa::cli;
use ads2coa::config::{
    GenerateConfig, DEFAULT_AUTHOR_AFFILIATIONS_FILENAME, DEFAULT_OUTPUT_FILENAME,
    DEFAULT_TEMPLATE_FILENAME,
};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ads2coa")]
#[command(about = "Generate the NSF COA spreadsheet from an ADS author affiliations CSV")]
#[command(long_about = "ads2coa - NSF COA Generator

Fills Table 4 of the NSF Collaborators and Other Affiliations template with
one row per author from the ADS author affiliations export.

STEPS:
  1. Export the author affiliations CSV from ADS and save it locally
     as `authorAffiliations.csv`.
  2. Get the unmodified NSF COA template. If `coa_template.xlsx` is missing
     it is downloaded from the NSF website.
  3. Run:  ads2coa -o lastname_coa.xlsx
  4. Review the generated file and save it as lastname_coa.xlsx.

The template must be the unedited vendor file: running against an already
generated COA is refused.")]
#[command(version)]
struct Cli {
    /// Output filename
    #[arg(
        short,
        long,
        alias = "out_filename",
        default_value = DEFAULT_OUTPUT_FILENAME,
        env = "ADS2COA_OUTPUT"
    )]
    out_filename: PathBuf,

    /// Author affiliations CSV filename
    #[arg(
        short,
        long,
        alias = "author_affiliations_filename",
        default_value = DEFAULT_AUTHOR_AFFILIATIONS_FILENAME,
        env = "ADS2COA_AUTHORS"
    )]
    author_affiliations_filename: PathBuf,

    /// NSF COA template filename
    #[arg(
        short,
        long,
        alias = "template_filename",
        default_value = DEFAULT_TEMPLATE_FILENAME,
        env = "ADS2COA_TEMPLATE"
    )]
    template_filename: PathBuf,

    /// Directory that relative filenames are resolved against
    #[arg(short, long, default_value = ".", env = "ADS2COA_DIR")]
    dirname: PathBuf,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "ads2coa=debug" } else { "ads2coa=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let config = GenerateConfig {
        out_filename: args.out_filename,
        author_affiliations_filename: args.author_affiliations_filename,
        template_filename: args.template_filename,
        dirname: args.dirname,
        verbose: args.verbose,
    };

    cli::generate(config)?;
    Ok(())
}
