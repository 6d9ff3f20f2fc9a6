use super::{run_main, Harness};
use crate::{EvalConfig, EvalError, Value};
use pretty_assertions::assert_eq;
use vds_ir::ErrorCode;

#[test]
fn test_arguments_bind_in_declaration_order() {
    let harness = Harness::new("void f(uint8_t a, uint8_t b) { pair(a, b); }");
    harness.call("f", &[Value::U64(10), Value::U64(20)]).unwrap();
    assert_eq!(harness.log(), vec!["pair 10 20"]);
}

#[test]
fn test_literals() {
    let log = run_main(r#"void main() { emit(0x10); emit(4K); emit("text"); emit(true); }"#);
    assert_eq!(log, vec!["16", "4096", "\"text\"", "true"]);
}

#[test]
fn test_script_calls_script() {
    let log = run_main(
        "void show(uint64_t x) { emit(x); }
         void twice(uint64_t a, uint64_t b) { show(a); show(b); }
         void main() { twice(1, 2); tick(); }",
    );
    assert_eq!(log, vec!["1", "2", "tick"]);
}

#[test]
fn test_nested_call_arguments() {
    // A call evaluates to void.
    let log = run_main("void main() { pair(1, tick()); }");
    assert_eq!(log, vec!["tick", "pair 1 void"]);
}

#[test]
#[should_panic(expected = "`a` is not defined")]
fn test_callee_does_not_see_caller_arguments() {
    let harness = Harness::new("void inner() { emit(a); } void outer(uint64_t a) { inner(); }");
    let _ = harness.call("outer", &[Value::U64(1)]);
}

#[test]
fn test_arguments_visible_in_nested_blocks() {
    let harness = Harness::new("void f(uint64_t a) { { { emit(a); } emit(a); } }");
    harness.call("f", &[Value::U64(7)]).unwrap();
    assert_eq!(harness.log(), vec!["7", "7"]);
}

#[test]
fn test_host_values_pass_through() {
    let harness = Harness::new("void f(string s, bool b) { pair(s, b); }");
    harness
        .call("f", &[Value::string("disk"), Value::Bool(false)])
        .unwrap();
    assert_eq!(harness.log(), vec!["pair \"disk\" false"]);
}

// === Errors ===

#[test]
fn test_unknown_callee() {
    let harness = Harness::new("void main() { emit(1); missing(2); emit(3); }");
    let err = harness.run().unwrap_err();
    assert_eq!(
        err,
        EvalError::NotFound {
            name: "missing".into()
        }
    );
    assert_eq!(err.code(), ErrorCode::E7003);
    assert_eq!(harness.log(), vec!["1"]);
}

#[test]
fn test_in_script_arity_mismatch_runs_no_argument() {
    let harness = Harness::new("void main() { emit(1); emit(tick(), 2); }");
    let err = harness.run().unwrap_err();
    assert_eq!(
        err,
        EvalError::ArityMismatch {
            name: "emit".into(),
            expected: 1,
            found: 2,
        }
    );
    assert_eq!(harness.log(), vec!["1"]);
}

#[test]
fn test_entry_arity_mismatch() {
    let harness = Harness::new("void f(uint64_t a) { tick(); }");
    let err = harness.call("f", &[]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E7002);
    assert!(harness.log().is_empty());
}

#[test]
fn test_callback_failure_aborts() {
    let harness = Harness::new("void main() { tick(); fail(); tick(); }");
    let err = harness.run().unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6001);
    assert_eq!(err.to_string(), "call to `fail` failed: boom");
    assert_eq!(harness.log(), vec!["tick"]);
}

#[test]
fn test_call_depth_limit() {
    let harness =
        Harness::new("void r() { tick(); r(); }").with_config(EvalConfig::default().with_max_call_depth(16));
    let err = harness.call("r", &[]).unwrap_err();
    assert_eq!(err, EvalError::CallDepthExceeded { limit: 16 });
    assert_eq!(harness.log().len(), 16);
}

#[test]
fn test_deep_recursion_without_native_stack() {
    let harness = Harness::new("void r() { r(); }")
        .with_config(EvalConfig::default().with_max_call_depth(200_000));
    let err = harness.call("r", &[]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6002);
}

#[test]
fn test_interpreter_is_reusable_after_error() {
    let harness = Harness::new("void bad() { fail(); } void good() { tick(); }");
    assert!(harness.call("bad", &[]).is_err());
    harness.call("good", &[]).unwrap();
    assert_eq!(harness.log(), vec!["tick"]);
}

// === Fatal conditions ===

#[test]
#[should_panic(expected = "is not supported")]
fn test_operator_is_fatal() {
    run_main("void main() { emit(1 + 2); }");
}

#[test]
#[should_panic(expected = "`x` is not defined")]
fn test_undefined_variable_is_fatal() {
    run_main("void main() { emit(x); }");
}

#[test]
#[should_panic(expected = "cannot call")]
fn test_non_identifier_callee_is_fatal() {
    run_main("void main() { (1)(2); }");
}
