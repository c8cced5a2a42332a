use anyhow::Result;
use colored::Colorize;

use crate::math_result::math_result_instance;

/// Compute on a local record and show its summary plus the hidden quotient.
///
/// Without `checked`, a zero divisor aborts the command exactly like the
/// library's unguarded `compute` does.
pub fn execute(one: i32, two: i32, checked: bool) -> Result<()> {
    let mut result = math_result_instance();

    let summary = if checked {
        result.try_compute(one, two)?
    } else {
        result.compute(one, two)
    };

    println!("{}", summary);
    println!("{} divisor() = {}", "info:".blue().bold(), result.divisor());
    Ok(())
}
