use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use inference::InferenceAdapter;

use crate::ui::format;

/// Runs a single prediction from the command line and prints the outcome.
///
/// # Args
/// * `adapter` - The adapter to predict with.
/// * `args` - `<age> <bmi> <No|Yes> <children>`.
///
/// # Returns
/// The process exit code, failure if no premium could be produced.
pub fn run(adapter: &InferenceAdapter, args: &[String]) -> Result<ExitCode> {
    let [age, bmi, smoker, children] = args else {
        bail!("predict takes exactly four arguments: <age> <bmi> <No|Yes> <children>");
    };

    let age: i32 = age.parse().with_context(|| format!("invalid age {age:?}"))?;
    let bmi: f64 = bmi.parse().with_context(|| format!("invalid bmi {bmi:?}"))?;
    let children: i32 = children
        .parse()
        .with_context(|| format!("invalid number of children {children:?}"))?;

    match adapter.predict_premium(age, bmi, smoker, children) {
        Ok(premium) => {
            println!("{}", format::premium_line(premium));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", format::error_line(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
