use anyhow::Result;
use colored::Colorize;

use crate::saved_value;

/// Save a value, then read it back from the process-wide slot
pub fn execute(val: i32) -> Result<()> {
    saved_value::save_val(val);
    println!("   {} {}", "Saved".green().bold(), val);
    println!("{}", saved_value::retrieve_val());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(saved_value)]
    fn test_execute_stores_value() {
        execute(42).unwrap();
        assert_eq!(saved_value::retrieve_val(), 42);

        execute(-7).unwrap();
        assert_eq!(saved_value::retrieve_val(), -7);
    }
}
