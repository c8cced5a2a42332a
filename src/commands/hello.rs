use anyhow::Result;

use crate::greeting;

/// Greet someone by name
pub fn execute(to: &str) -> Result<()> {
    let greeting = greeting::say_hello(to)?;
    println!("{}", greeting);
    Ok(())
}
