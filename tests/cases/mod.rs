#![allow(dead_code, unused_macros)]

use calc::{Engine, EngineOptions, Environment, Error};

/// Run `input` on a fresh engine against an environment seeded with `vars`.
pub fn eval_with(input: &str, vars: &[(&str, i64)]) -> (Result<i64, Error>, Environment) {
    let engine = Engine::new(EngineOptions::default());
    let mut env = Environment::from_iter(vars.iter().copied());
    let result = engine.eval(input, &mut env);
    (result, env)
}

/// Diagnostic code of a parse failure, `None` for anything else.
pub fn parse_code(result: &Result<i64, Error>) -> Option<&str> {
    match result {
        Err(Error::Parse { diagnostic, .. }) => diagnostic.code.as_deref(),
        _ => None,
    }
}

/// Declare an end-to-end test.
///
/// - `value:` the program runs and its last statement yields the value
/// - `error:` the result matches the given pattern
/// - `code:` parsing fails with the given diagnostic code
/// - `formatted:` the parsed program prints back as the given text
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        $(env: { $($var:literal => $val:expr),* $(,)? },)?
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let vars: &[(&str, i64)] = &[$($(($var, $val)),*)?];
            let (result, _) = cases::eval_with($input, vars);
            match result {
                Ok(value) => pretty_assertions::assert_eq!(value, $value, "input: {:?}", $input),
                Err(e) => panic!("{:?} failed: {}", $input, e),
            }
        }
    };
    (
        $name:ident,
        input: $input:expr,
        $(env: { $($var:literal => $val:expr),* $(,)? },)?
        error: $pat:pat $(,)?
    ) => {
        #[test]
        fn $name() {
            let vars: &[(&str, i64)] = &[$($(($var, $val)),*)?];
            let (result, _) = cases::eval_with($input, vars);
            assert!(
                matches!(result, $pat),
                "input {:?} produced {:?}",
                $input,
                result
            );
        }
    };
    (
        $name:ident,
        input: $input:expr,
        code: $code:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let (result, env) = cases::eval_with($input, &[]);
            pretty_assertions::assert_eq!(
                cases::parse_code(&result),
                Some($code),
                "input: {:?}",
                $input
            );
            assert!(env.is_empty(), "nothing may run after a parse error");
        }
    };
    (
        $name:ident,
        input: $input:expr,
        formatted: $formatted:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let program = calc::parse($input).expect("parsing failed");
            let printed: Vec<String> = program.iter().map(|s| s.to_string()).collect();
            pretty_assertions::assert_eq!(printed.join(" "), $formatted);
        }
    };
}
