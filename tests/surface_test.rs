// Binding surface listing tests
//
// Renders the crate's own #[ffi] surface and compares it line by line
// against the expected Kotlin declarations and JNI symbols.

use similar::{ChangeTag, TextDiff};

use testsdk::commands::surface::render_surface;
use testsdk::config::BindingsConfig;
use testsdk::surface::{check_bindings, exported_surface, FfiReturn, FfiType};

const EXPECTED: &str = "\
interface Computation {
    fun compute(one: Int, two: Int): String
}
external fun title(): String
    Java_com_example_testsdk_Testsdk_title
external fun sayHello(to: String): String  // throws
    Java_com_example_testsdk_Testsdk_sayHello
external fun mathResultPointer(): Long
    Java_com_example_testsdk_Testsdk_mathResultPointer
external fun mathResultFree(handle: Long): Boolean
    Java_com_example_testsdk_Testsdk_mathResultFree
external fun mathResultSum(handle: Long): Int  // throws
    Java_com_example_testsdk_Testsdk_mathResultSum
external fun mathResultSetSum(handle: Long, value: Int)  // throws
    Java_com_example_testsdk_Testsdk_mathResultSetSum
external fun mathResultDifference(handle: Long): Int  // throws
    Java_com_example_testsdk_Testsdk_mathResultDifference
external fun mathResultSetDifference(handle: Long, value: Int)  // throws
    Java_com_example_testsdk_Testsdk_mathResultSetDifference
external fun mathResultProduct(handle: Long): Int  // throws
    Java_com_example_testsdk_Testsdk_mathResultProduct
external fun mathResultSetProduct(handle: Long, value: Int)  // throws
    Java_com_example_testsdk_Testsdk_mathResultSetProduct
external fun mathResultDivisor(handle: Long): Int  // throws
    Java_com_example_testsdk_Testsdk_mathResultDivisor
external fun mathResultCompute(handle: Long, one: Int, two: Int): String  // throws
    Java_com_example_testsdk_Testsdk_mathResultCompute
external fun printResult(handle: Long, one: Int, two: Int): String  // throws
    Java_com_example_testsdk_Testsdk_printResult
external fun printHostResult(res: Computation, one: Int, two: Int): String
    Java_com_example_testsdk_Testsdk_printHostResult
external fun saveVal(val: Int)
    Java_com_example_testsdk_Testsdk_saveVal
external fun retrieveVal(): Int
    Java_com_example_testsdk_Testsdk_retrieveVal
";

fn assert_same_listing(actual: &str, expected: &str) {
    if actual == expected {
        return;
    }

    let diff = TextDiff::from_lines(expected, actual);
    let mut report = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        report.push_str(&format!("{}{}", sign, change));
    }

    panic!("Surface listing differs from expected:\n{}", report);
}

#[test]
fn test_surface_listing_matches() {
    let surface = exported_surface().unwrap();
    let listing = render_surface(&surface);

    assert_same_listing(&listing, EXPECTED);
}

#[test]
fn test_listing_only_names_compiled_symbols() {
    let bindings = BindingsConfig {
        package: "org.demo.sdk".to_string(),
        class: "Sdk".to_string(),
    };
    assert!(check_bindings(&bindings).is_err());

    let listing = render_surface(&exported_surface().unwrap());
    assert!(!listing.contains("Java_org_demo_sdk_Sdk_"));
}

#[test]
fn test_say_hello_is_fallible() {
    let surface = exported_surface().unwrap();
    let say_hello = surface
        .function("say_hello")
        .expect("say_hello should be exported");

    assert_eq!(say_hello.return_type, FfiReturn::result(FfiType::String));
    assert_eq!(say_hello.params, vec![("to".to_string(), FfiType::String)]);
}

#[test]
fn test_host_dispatch_takes_the_interface() {
    let surface = exported_surface().unwrap();
    let dispatch = surface
        .function("print_host_result")
        .expect("print_host_result should be exported");

    assert_eq!(
        dispatch.params[0],
        ("res".to_string(), FfiType::Interface("Computation".to_string()))
    );
    assert_eq!(dispatch.return_type, FfiReturn::plain(FfiType::String));
}
