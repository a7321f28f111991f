//! Report assembly
//!
//! Runs the checks in the order the exit codes are defined: input path,
//! file content, format, then category flags.

use std::path::Path;

use crate::core::classify::{classify, CharTables};
use crate::core::error::{CharFreqError, Result};
use crate::core::file_reader::read_content;
use crate::core::model::{CategorySet, Finding, Report, RepetitionPolicy};
use crate::core::select::select;

/// Validate the inputs, classify the file and select one character per
/// requested category.
pub fn build_report(
    input: Option<&str>,
    format: Option<&str>,
    categories: CategorySet,
) -> Result<Report> {
    let path = match input {
        Some(path) if !path.is_empty() => path,
        _ => {
            return Err(CharFreqError::InputArgument(
                "no input file given (use -i=<PATH> or --input=<PATH>)".to_string(),
            ))
        }
    };

    let content = read_content(Path::new(path))?;
    let tables = classify(&content)?;
    log::debug!(
        "classified {} distinct letters, {} punctuation, {} symbols",
        tables.letters.len(),
        tables.punctuation.len(),
        tables.symbols.len()
    );

    let policy: RepetitionPolicy = format
        .ok_or_else(|| {
            CharFreqError::FormatArgument(
                "no format given (use -f=<FORMAT> or --format=<FORMAT>)".to_string(),
            )
        })?
        .parse()?;

    if categories.is_empty() {
        return Err(CharFreqError::FlagArgument(
            "no category requested (use -L, -P and/or -S)".to_string(),
        ));
    }

    Ok(Report {
        file: path.to_string(),
        policy,
        results: findings(&tables, policy, categories),
    })
}

/// Selector results for each requested class, in report order
pub fn findings(
    tables: &CharTables,
    policy: RepetitionPolicy,
    categories: CategorySet,
) -> Vec<Finding> {
    categories
        .iter()
        .map(|category| {
            let character = select(tables.get(category), policy).map(char::from);
            log::debug!("{} {}: {:?}", policy.as_str(), category, character);
            Finding {
                category,
                character,
            }
        })
        .collect()
}
