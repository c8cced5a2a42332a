use anyhow::Result;

use crate::computation::print_result;
use crate::error::SdkError;
use crate::math_result::math_result_pointer;

/// Dispatch through the `Computation` capability on a fresh record
pub fn execute(one: i32, two: i32) -> Result<()> {
    if two == 0 {
        return Err(SdkError::DivideByZero.into());
    }

    let mut result = math_result_pointer();
    println!("{}", print_result(result.as_mut(), one, two));
    Ok(())
}
