use anyhow::Result;

use crate::greeting::TITLE;

/// Print the SDK title constant
pub fn execute() -> Result<()> {
    println!("{}", TITLE);
    Ok(())
}
