//! JNI entry points for `com.example.testsdk.Testsdk`.
//!
//! Symbol names are spelled for [`super::JNI_PACKAGE`] and
//! [`super::JNI_CLASS`]; `surface` refuses bindings that name anything else.
//!
//! Each function forwards to `ffi::exports`. `Err` values are thrown as
//! `java.lang.IllegalArgumentException` and the function returns a zero/null
//! placeholder the JVM discards.
//!
//! Matching Kotlin declarations:
//!
//! ```kotlin
//! interface Computation { fun compute(one: Int, two: Int): String }
//!
//! object Testsdk {
//!     init { System.loadLibrary("testsdk") }
//!     external fun title(): String
//!     external fun sayHello(to: String): String
//!     external fun mathResultPointer(): Long
//!     external fun printHostResult(res: Computation, one: Int, two: Int): String
//!     // ...
//! }
//! ```

use jni::objects::{JClass, JObject, JString, JValue};
use jni::sys::{jboolean, jint, jlong, jstring, JNI_FALSE, JNI_TRUE};
use jni::JNIEnv;
use std::ptr;

use crate::computation::Computation;
use crate::ffi::exports;

const ERROR_CLASS: &str = "java/lang/IllegalArgumentException";
const NULL_HOST_MESSAGE: &str = "printHostResult called with a null Computation";
const HOST_FAILED_MESSAGE: &str = "Computation.compute did not return a string";

/// A Java exception to raise before returning to the JVM.
#[derive(Debug, PartialEq, Eq)]
struct Exception {
    class: &'static str,
    message: String,
}

/// Split `result` into the value handed back to the JVM and the exception
/// to raise. On `Err` the JVM discards `placeholder`.
fn or_throw<T>(result: Result<T, String>, placeholder: T) -> (T, Option<Exception>) {
    match result {
        Ok(value) => (value, None),
        Err(message) => (
            placeholder,
            Some(Exception {
                class: ERROR_CLASS,
                message,
            }),
        ),
    }
}

fn raise(env: &mut JNIEnv, exception: Option<Exception>) {
    let Some(exception) = exception else {
        return;
    };
    // A pending exception already explains the failure
    if env.exception_check().unwrap_or(true) {
        return;
    }
    let _ = env.throw_new(exception.class, exception.message);
}

fn new_jstring(env: &mut JNIEnv, value: &str) -> jstring {
    match env.new_string(value) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

fn string_result(env: &mut JNIEnv, result: Result<String, String>) -> jstring {
    let (value, exception) = or_throw(result.map(Some), None);
    raise(env, exception);
    match value {
        Some(value) => new_jstring(env, &value),
        None => ptr::null_mut(),
    }
}

fn int_result(env: &mut JNIEnv, result: Result<i32, String>) -> jint {
    let (value, exception) = or_throw(result, 0);
    raise(env, exception);
    value
}

fn unit_result(env: &mut JNIEnv, result: Result<(), String>) {
    let ((), exception) = or_throw(result, ());
    raise(env, exception);
}

/// A host object implementing `Computation`, reached through `call`.
///
/// A failed call yields an empty summary and sets `failed`.
struct HostComputation<F> {
    call: F,
    failed: bool,
}

impl<F> HostComputation<F>
where
    F: FnMut(i32, i32) -> jni::errors::Result<String>,
{
    fn new(call: F) -> Self {
        HostComputation {
            call,
            failed: false,
        }
    }
}

impl<F> Computation for HostComputation<F>
where
    F: FnMut(i32, i32) -> jni::errors::Result<String>,
{
    fn compute(&mut self, one: i32, two: i32) -> String {
        match (self.call)(one, two) {
            Ok(value) => value,
            Err(_) => {
                self.failed = true;
                String::new()
            }
        }
    }
}

fn call_host_compute(
    env: &mut JNIEnv,
    target: &JObject,
    one: i32,
    two: i32,
) -> jni::errors::Result<String> {
    let value = env
        .call_method(
            target,
            "compute",
            "(II)Ljava/lang/String;",
            &[JValue::Int(one), JValue::Int(two)],
        )?
        .l()?;
    let value = JString::from(value);
    let value: String = env.get_string(&value)?.into();
    Ok(value)
}

/// Dispatch through `print_host_result`; `None` stands for a null reference.
fn dispatch_to_host<F>(host: Option<HostComputation<F>>, one: i32, two: i32) -> Result<String, String>
where
    F: FnMut(i32, i32) -> jni::errors::Result<String>,
{
    let Some(mut host) = host else {
        return Err(NULL_HOST_MESSAGE.to_string());
    };

    let printed = exports::print_host_result(&mut host, one, two);
    if host.failed {
        return Err(HOST_FAILED_MESSAGE.to_string());
    }
    Ok(printed)
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_title<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jstring {
    new_jstring(&mut env, &exports::title())
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_sayHello<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    to: JString<'local>,
) -> jstring {
    let to: String = match env.get_string(&to) {
        Ok(s) => s.into(),
        Err(e) => {
            let (_, exception) = or_throw::<()>(Err(format!("invalid string argument: {}", e)), ());
            raise(&mut env, exception);
            return ptr::null_mut();
        }
    };
    let result = exports::say_hello(to);
    string_result(&mut env, result)
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_mathResultPointer<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jlong {
    exports::math_result_pointer()
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_mathResultFree<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) -> jboolean {
    if exports::math_result_free(handle) {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_mathResultSum<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) -> jint {
    int_result(&mut env, exports::math_result_sum(handle))
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_mathResultSetSum<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
    value: jint,
) {
    unit_result(&mut env, exports::math_result_set_sum(handle, value))
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_mathResultDifference<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) -> jint {
    int_result(&mut env, exports::math_result_difference(handle))
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_mathResultSetDifference<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
    value: jint,
) {
    unit_result(&mut env, exports::math_result_set_difference(handle, value))
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_mathResultProduct<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) -> jint {
    int_result(&mut env, exports::math_result_product(handle))
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_mathResultSetProduct<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
    value: jint,
) {
    unit_result(&mut env, exports::math_result_set_product(handle, value))
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_mathResultDivisor<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) -> jint {
    int_result(&mut env, exports::math_result_divisor(handle))
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_mathResultCompute<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
    one: jint,
    two: jint,
) -> jstring {
    let result = exports::math_result_compute(handle, one, two);
    string_result(&mut env, result)
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_printResult<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
    one: jint,
    two: jint,
) -> jstring {
    let result = exports::print_result(handle, one, two);
    string_result(&mut env, result)
}

/// Dispatch to a `Computation` implemented on the host side.
#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_printHostResult<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    res: JObject<'local>,
    one: jint,
    two: jint,
) -> jstring {
    let host = if res.is_null() {
        None
    } else {
        Some(HostComputation::new(|one, two| {
            call_host_compute(&mut env, &res, one, two)
        }))
    };
    let result = dispatch_to_host(host, one, two);
    string_result(&mut env, result)
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_saveVal<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    val: jint,
) {
    exports::save_val(val)
}

#[no_mangle]
pub extern "system" fn Java_com_example_testsdk_Testsdk_retrieveVal<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jint {
    exports::retrieve_val()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answering(summary: &'static str) -> HostComputation<impl FnMut(i32, i32) -> jni::errors::Result<String>> {
        HostComputation::new(move |_, _| Ok(summary.to_string()))
    }

    fn failing() -> HostComputation<impl FnMut(i32, i32) -> jni::errors::Result<String>> {
        HostComputation::new(|_, _| Err(jni::errors::Error::JavaException))
    }

    #[test]
    fn test_err_becomes_illegal_argument_exception() {
        let (value, exception) = or_throw(exports::say_hello(String::new()), String::new());

        assert_eq!(value, "");
        assert_eq!(
            exception,
            Some(Exception {
                class: "java/lang/IllegalArgumentException",
                message: "I will not greet someone with no name.".to_string(),
            })
        );
    }

    #[test]
    fn test_ok_raises_nothing() {
        let (value, exception) = or_throw(Ok::<i32, String>(5), 0);
        assert_eq!(value, 5);
        assert_eq!(exception, None);

        let (value, exception) = or_throw(exports::math_result_sum(0), 0);
        assert_eq!(value, 0);
        assert!(exception.is_some());
    }

    #[test]
    fn test_host_adapter_flags_failed_call() {
        let mut host = failing();

        assert_eq!(host.compute(3, 2), "");
        assert!(host.failed);
    }

    #[test]
    fn test_host_adapter_passes_operands() {
        let mut seen = Vec::new();
        let mut host = HostComputation::new(|one, two| {
            seen.push((one, two));
            Ok("+: 5\n-: 1\n*: 6\n/: 1".to_string())
        });

        assert_eq!(host.compute(3, 2), "+: 5\n-: 1\n*: 6\n/: 1");
        assert!(!host.failed);
        drop(host);
        assert_eq!(seen, vec![(3, 2)]);
    }

    #[test]
    fn test_dispatch_to_host() {
        assert_eq!(
            dispatch_to_host(Some(answering("+: 5\n-: 1\n*: 6\n/: 1")), 3, 2),
            Ok("Result: \n+: 5\n-: 1\n*: 6\n/: 1".to_string())
        );
    }

    #[test]
    fn test_dispatch_to_null_host_is_rejected() {
        let host: Option<HostComputation<fn(i32, i32) -> jni::errors::Result<String>>> = None;
        assert_eq!(dispatch_to_host(host, 3, 2), Err(NULL_HOST_MESSAGE.to_string()));
    }

    #[test]
    fn test_dispatch_to_failing_host_is_rejected() {
        assert_eq!(
            dispatch_to_host(Some(failing()), 3, 2),
            Err(HOST_FAILED_MESSAGE.to_string())
        );
    }
}
