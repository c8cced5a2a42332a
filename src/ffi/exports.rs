// Functions the mobile host can call.
//
// Only JNI-friendly shapes cross here: i32, i64, bool, String, unit, and
// Result<T, String> for fallible calls, plus `&mut dyn Trait` for #[ffi]
// interfaces the host implements. A MathResult crosses as an i64 handle
// from math_result_pointer() and must be given back through
// math_result_free().

use testsdk_ffi_macro::ffi;

use crate::computation::{self, Computation};
use crate::error::SdkError;
use crate::ffi::handles;
use crate::{greeting, math_result, saved_value};

#[ffi]
pub fn title() -> String {
    greeting::TITLE.to_string()
}

#[ffi]
pub fn say_hello(to: String) -> Result<String, String> {
    greeting::say_hello(&to).map_err(|e| e.to_string())
}

#[ffi]
pub fn math_result_pointer() -> i64 {
    handles::register(math_result::math_result_pointer())
}

#[ffi]
pub fn math_result_free(handle: i64) -> bool {
    handles::release(handle)
}

#[ffi]
pub fn math_result_sum(handle: i64) -> Result<i32, String> {
    handles::with_result(handle, |r| r.sum).map_err(|e| e.to_string())
}

#[ffi]
pub fn math_result_set_sum(handle: i64, value: i32) -> Result<(), String> {
    handles::with_result(handle, |r| r.sum = value).map_err(|e| e.to_string())
}

#[ffi]
pub fn math_result_difference(handle: i64) -> Result<i32, String> {
    handles::with_result(handle, |r| r.difference).map_err(|e| e.to_string())
}

#[ffi]
pub fn math_result_set_difference(handle: i64, value: i32) -> Result<(), String> {
    handles::with_result(handle, |r| r.difference = value).map_err(|e| e.to_string())
}

#[ffi]
pub fn math_result_product(handle: i64) -> Result<i32, String> {
    handles::with_result(handle, |r| r.product).map_err(|e| e.to_string())
}

#[ffi]
pub fn math_result_set_product(handle: i64, value: i32) -> Result<(), String> {
    handles::with_result(handle, |r| r.product = value).map_err(|e| e.to_string())
}

#[ffi]
pub fn math_result_divisor(handle: i64) -> Result<i32, String> {
    handles::with_result(handle, |r| r.divisor()).map_err(|e| e.to_string())
}

// A panic must not unwind into the host, so the checked variant is used.
#[ffi]
pub fn math_result_compute(handle: i64, one: i32, two: i32) -> Result<String, String> {
    handles::with_result(handle, |r| r.try_compute(one, two))
        .and_then(|summary| summary)
        .map_err(|e| e.to_string())
}

#[ffi]
pub fn print_result(handle: i64, one: i32, two: i32) -> Result<String, String> {
    if two == 0 {
        return Err(SdkError::DivideByZero.to_string());
    }
    handles::with_result(handle, |r| computation::print_result(r, one, two))
        .map_err(|e| e.to_string())
}

// Host-implemented computations reach this through the JNI layer.
#[ffi]
pub fn print_host_result(res: &mut dyn Computation, one: i32, two: i32) -> String {
    computation::print_result(res, one, two)
}

#[ffi]
pub fn save_val(val: i32) {
    saved_value::save_val(val)
}

#[ffi]
pub fn retrieve_val() -> i32 {
    saved_value::retrieve_val()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_title() {
        assert_eq!(title(), "GoMobile Awesomeness");
    }

    #[test]
    fn test_say_hello_error_is_message() {
        assert_eq!(say_hello("World".to_string()).unwrap(), "Hello, World!");
        assert_eq!(
            say_hello(String::new()).unwrap_err(),
            "I will not greet someone with no name."
        );
    }

    #[test]
    fn test_handle_lifecycle() {
        let handle = math_result_pointer();
        assert_eq!(math_result_sum(handle).unwrap(), 0);
        assert_eq!(math_result_difference(handle).unwrap(), 0);
        assert_eq!(math_result_product(handle).unwrap(), 0);
        assert_eq!(math_result_divisor(handle).unwrap(), 1);

        assert_eq!(
            math_result_compute(handle, 3, 2).unwrap(),
            "+: 5\n-: 1\n*: 6\n/: 1"
        );
        assert_eq!(math_result_sum(handle).unwrap(), 5);

        math_result_set_sum(handle, 100).unwrap();
        math_result_set_difference(handle, -100).unwrap();
        math_result_set_product(handle, 7).unwrap();
        assert_eq!(math_result_sum(handle).unwrap(), 100);
        assert_eq!(math_result_difference(handle).unwrap(), -100);
        assert_eq!(math_result_product(handle).unwrap(), 7);

        assert!(math_result_free(handle));
        assert!(math_result_sum(handle).is_err());
    }

    #[test]
    fn test_compute_zero_divisor_is_an_error() {
        let handle = math_result_pointer();

        let err = math_result_compute(handle, 1, 0).unwrap_err();
        assert_eq!(err, SdkError::DivideByZero.to_string());
        assert_eq!(math_result_divisor(handle).unwrap(), 1);

        assert!(print_result(handle, 1, 0).is_err());
        assert!(math_result_free(handle));
    }

    #[test]
    fn test_print_result() {
        let handle = math_result_pointer();
        assert_eq!(
            print_result(handle, 3, 2).unwrap(),
            "Result: \n+: 5\n-: 1\n*: 6\n/: 1"
        );
        assert!(math_result_free(handle));
    }

    #[test]
    fn test_print_host_result_dispatches() {
        struct Fixed;

        impl Computation for Fixed {
            fn compute(&mut self, one: i32, two: i32) -> String {
                format!("{} and {}", one, two)
            }
        }

        assert_eq!(print_host_result(&mut Fixed, 3, 2), "Result: \n3 and 2");
    }

    #[test]
    fn test_unknown_handle_message() {
        assert_eq!(
            math_result_compute(0, 1, 1).unwrap_err(),
            "no MathResult is registered for handle 0"
        );
    }

    #[test]
    #[serial(saved_value)]
    fn test_saved_value_round_trip() {
        save_val(-12);
        assert_eq!(retrieve_val(), -12);
    }
}
