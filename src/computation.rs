use testsdk_ffi_macro::ffi;

use crate::math_result::MathResult;

pub const RESULT_LABEL: &str = "Result: \n";

/// Something that can compute a summary for a pair of operands.
///
/// Implemented by [`MathResult`] on the Rust side and by host objects on
/// the mobile side (see `ffi::jni`).
#[ffi]
pub trait Computation {
    fn compute(&mut self, one: i32, two: i32) -> String;
}

impl Computation for MathResult {
    fn compute(&mut self, one: i32, two: i32) -> String {
        MathResult::compute(self, one, two)
    }
}

/// Run `res` on the operands and label its output.
pub fn print_result<C: Computation + ?Sized>(res: &mut C, one: i32, two: i32) -> String {
    format!("{}{}", RESULT_LABEL, res.compute(one, two))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_result::math_result_pointer;

    struct Canned(&'static str);

    impl Computation for Canned {
        fn compute(&mut self, _one: i32, _two: i32) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_print_result_labels_output() {
        let mut canned = Canned("+: 5\n-: 1\n*: 6\n/: 1");
        assert_eq!(
            print_result(&mut canned, 3, 2),
            "Result: \n+: 5\n-: 1\n*: 6\n/: 1"
        );
    }

    #[test]
    fn test_print_result_with_math_result() {
        let mut result = math_result_pointer();
        let printed = print_result(result.as_mut(), 3, 2);

        assert_eq!(printed, "Result: \n+: 5\n-: 1\n*: 6\n/: 1");
        assert_eq!(result.sum, 5);
    }

    #[test]
    fn test_print_result_through_trait_object() {
        let mut result = MathResult::default();
        let dynamic: &mut dyn Computation = &mut result;

        assert_eq!(print_result(dynamic, 8, 4), "Result: \n+: 12\n-: 4\n*: 32\n/: 2");
        assert_eq!(result.divisor(), 2);
    }
}
