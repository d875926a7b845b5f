use crate::config::GenerateConfig;
use crate::download::fetch_template;
use crate::error::{CoaError, CoaResult};
use crate::excel::{CoaTemplate, TableExpander, NSF_TEMPLATE_URL};
use crate::parser::parse_records;
use crate::writer::save_workbook;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Same file on disk, falling back to a plain comparison when either path
/// does not exist yet
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Make sure the template exists, downloading the stock NSF file if allowed
fn ensure_template(config: &GenerateConfig) -> CoaResult<PathBuf> {
    let template = config.template_path();
    if template.is_file() {
        return Ok(template);
    }

    if !config.uses_default_template() {
        return Err(CoaError::MissingFile {
            artifact: "template",
            path: template,
        });
    }

    println!(
        "{}",
        format!(
            "🤔 Could not find `{}`; downloading default NSF template",
            template.display()
        )
        .yellow()
    );
    fetch_template(NSF_TEMPLATE_URL, &template)?;
    Ok(template)
}

/// Execute the generate command: template + author CSV -> filled COA workbook.
///
/// Nothing is written unless every step succeeded.
pub fn generate(config: GenerateConfig) -> CoaResult<PathBuf> {
    let output = config.output_path();
    let authors = config.authors_path();
    let template_path = config.template_path();

    for input in [&template_path, &authors] {
        if same_file(&output, input) {
            return Err(CoaError::OutputCollision { path: output });
        }
    }

    let template_path = ensure_template(&config)?;

    if config.verbose {
        println!("{}", "📖 Reading author affiliations...".cyan());
    }
    let records = parse_records(&authors)?;
    if config.verbose {
        println!("   Found {} authors", records.len());
        println!("{}", "📊 Filling table 4...".cyan());
    }

    let mut template = CoaTemplate::open(&template_path)?;
    TableExpander::default().expand(&mut template, &records)?;

    save_workbook(template.workbook(), &output)?;
    info!(output = %output.display(), authors = records.len(), "wrote COA");

    println!(
        "🎉 Wrote {}. Now edit this and save it as {}. 🎉",
        output.display().to_string().bold(),
        "lastname_coa.xlsx".bold()
    );
    Ok(output)
}
