use crate::error::SdkError;

/// Results of the four arithmetic operations on a pair of operands.
///
/// `sum`, `difference` and `product` are plain fields the host can read and
/// write. The quotient lives in a private field and is only reachable
/// through [`MathResult::divisor`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MathResult {
    pub sum: i32,
    pub difference: i32,
    pub product: i32,
    divisor: i32,
}

impl MathResult {
    /// Compute sum, difference, product and quotient of `one` and `two`,
    /// store them on `self` and return a summary like `"+: 5\n-: 1\n*: 6\n/: 1"`.
    ///
    /// Arithmetic wraps on 32-bit overflow. The quotient truncates toward zero.
    ///
    /// # Panics
    ///
    /// Panics when `two` is zero. The division is not guarded here; use
    /// [`MathResult::try_compute`] when the divisor comes from untrusted input.
    pub fn compute(&mut self, one: i32, two: i32) -> String {
        self.sum = one.wrapping_add(two);
        self.difference = one.wrapping_sub(two);
        self.product = one.wrapping_mul(two);
        self.divisor = one.wrapping_div(two);
        self.summary()
    }

    /// Same as [`MathResult::compute`], but a zero divisor is reported as
    /// [`SdkError::DivideByZero`] and leaves `self` unchanged.
    pub fn try_compute(&mut self, one: i32, two: i32) -> Result<String, SdkError> {
        if two == 0 {
            return Err(SdkError::DivideByZero);
        }
        Ok(self.compute(one, two))
    }

    /// Quotient from the last computation.
    pub fn divisor(&self) -> i32 {
        self.divisor
    }

    fn summary(&self) -> String {
        format!(
            "+: {}\n-: {}\n*: {}\n/: {}",
            self.sum, self.difference, self.product, self.divisor
        )
    }
}

/// Allocate a fresh record for the host.
///
/// The divisor starts at 1 so reading it before any computation never
/// suggests a division by zero took place.
pub fn math_result_pointer() -> Box<MathResult> {
    Box::new(MathResult {
        sum: 0,
        difference: 0,
        product: 0,
        divisor: 1,
    })
}

/// By-value constructor for use inside the crate. Not exported to the host.
pub(crate) fn math_result_instance() -> MathResult {
    MathResult::default()
}
