//! Rofive command line.
//!
//! Two modes over the same core as the web surface:
//!   rofive eval <SMILES>              print the four descriptors + verdict
//!   rofive batch <in.csv> [out.csv]   evaluate the SMILES column; CSV out
//!                                     (stdout when no output path)

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use rofive_common::{BatchResult, EvaluationOutcome};
use rofive_core::{read_smiles_column, BatchRunner, DescriptorEvaluator, RuleOfFiveReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage:
  rofive eval <SMILES>
  rofive batch <input.csv> [output.csv]

The batch input must contain a column labeled 'SMILES'.";

fn main() -> ExitCode {
    // Logs go to stderr so batch CSV output on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> anyhow::Result<u8> {
    match args {
        [cmd, smiles] if cmd == "eval" => eval_single(smiles),
        [cmd, input] if cmd == "batch" => eval_batch(Path::new(input), None),
        [cmd, input, output] if cmd == "batch" => eval_batch(Path::new(input), Some(Path::new(output))),
        _ => {
            eprintln!("{USAGE}");
            Ok(2)
        }
    }
}

fn eval_single(smiles: &str) -> anyhow::Result<u8> {
    match DescriptorEvaluator::new().evaluate(smiles) {
        EvaluationOutcome::Invalid { reason } => {
            println!("Invalid SMILES string ({reason}).");
            Ok(1)
        }
        EvaluationOutcome::Valid { descriptors } => {
            print!("{}", single_report(smiles, &descriptors));
            Ok(0)
        }
    }
}

fn single_report(smiles: &str, d: &rofive_common::DescriptorRecord) -> String {
    let report = RuleOfFiveReport::evaluate(d);
    let verdict = if report.passes { "passes" } else { "fails" };
    format!(
        "Compound: {smiles}\n\
         Molecular Weight:          {:.2}\n\
         Lipophilicity (LogP):      {:.2}\n\
         H-bond donors:             {}\n\
         H-bond acceptors:          {}\n\
         Rule of 5: {verdict} ({} violation(s))\n",
        d.molecular_weight, d.logp, d.h_donors, d.h_acceptors, report.violations,
    )
}

fn eval_batch(input: &Path, output: Option<&Path>) -> anyhow::Result<u8> {
    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let smiles = read_smiles_column(file)?;
    let result = BatchRunner::new().run(smiles);
    info!(rows = result.len(), valid = result.valid_count(), "batch evaluated");

    let csv_out = batch_csv(&result)?;
    match output {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            file.write_all(csv_out.as_bytes())?;
        }
        None => io::stdout().write_all(csv_out.as_bytes())?,
    }
    Ok(0)
}

/// One output row per input row, aligned; failed rows keep their place
/// with blank descriptor cells and the parse reason in the Error column.
fn batch_csv(result: &BatchResult) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "SMILES",
        "MolWt",
        "LogP",
        "NumHDonors",
        "NumHAcceptors",
        "RO5Violations",
        "Error",
    ])?;

    for row in &result.rows {
        match row.outcome.descriptors() {
            Some(d) => {
                let report = RuleOfFiveReport::evaluate(d);
                writer.write_record([
                    row.smiles.as_str(),
                    &format!("{:.4}", d.molecular_weight),
                    &format!("{:.4}", d.logp),
                    &d.h_donors.to_string(),
                    &d.h_acceptors.to_string(),
                    &report.violations.to_string(),
                    "",
                ])?;
            }
            None => {
                let reason = match &row.outcome {
                    EvaluationOutcome::Invalid { reason } => reason.as_str(),
                    EvaluationOutcome::Valid { .. } => unreachable!(),
                };
                writer.write_record([row.smiles.as_str(), "", "", "", "", "", reason])?;
            }
        }
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn single_report_formats_two_decimals() {
        let outcome = DescriptorEvaluator::new().evaluate("CCO");
        let report = single_report("CCO", outcome.descriptors().unwrap());
        assert!(report.contains("46.07"));
        assert!(report.contains("passes"));
    }

    #[test]
    fn batch_csv_keeps_alignment() {
        let result = BatchRunner::new().run(["CCO", "garbage!", "c1ccccc1"]);
        let csv_out = batch_csv(&result).unwrap();
        let lines: Vec<&str> = csv_out.lines().collect();

        assert_eq!(lines.len(), 4); // header + 3 rows
        assert!(lines[0].starts_with("SMILES,MolWt"));
        assert!(lines[1].starts_with("CCO,46.069"));
        assert!(lines[2].starts_with("garbage!,,,,,,"));
        assert!(lines[3].starts_with("c1ccccc1,78.114"));
    }

    #[test]
    fn batch_round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, "Name,SMILES\nethanol,CCO\nbad,???\n").unwrap();

        eval_batch(&input, Some(&output)).unwrap();

        let mut written = String::new();
        File::open(&output).unwrap().read_to_string(&mut written).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("CCO,"));
        assert!(lines[2].starts_with("???,"));
    }

    #[test]
    fn unknown_arguments_fail() {
        let code = run(&["frobnicate".to_string()]).unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn invalid_single_input_is_nonzero_but_not_an_error() {
        let code = eval_single("XQZ123???").unwrap();
        assert_eq!(code, 1);
    }
}
