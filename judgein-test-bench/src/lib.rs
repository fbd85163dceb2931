pub mod consts;

use judgein_core::{ScanConfig, ScanResult, Scanner, Source, Violation};

/// One reader call in a test script.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Int(Option<(i32, i32)>),
    Long(Option<(i64, i64)>),
    Float(Option<(f64, f64)>),
    Word(Option<String>),
    Char(Option<String>),
    Line(Option<String>),
    Space,
    Newline,
    Eof,
}

///
/// Parses a test script: one reader per line, e.g. `int 0 1000`, `word [a-z]+`, `eof`.
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
///    Returns a description of the first line that is not a known step.
pub fn parse_script(script: &str) -> Result<Vec<Step>, String> {
    let mut steps = Vec::new();
    for (no, raw) in script.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, args) = match line.split_once(' ') {
            Some((name, args)) => (name, Some(args)),
            None => (line, None),
        };
        let step = match (name, args) {
            ("int", None) => Step::Int(None),
            ("int", Some(args)) => Step::Int(Some(bounds(args, no)?)),
            ("long", None) => Step::Long(None),
            ("long", Some(args)) => Step::Long(Some(bounds(args, no)?)),
            ("float", None) => Step::Float(None),
            ("float", Some(args)) => Step::Float(Some(bounds(args, no)?)),
            ("word", pattern) => Step::Word(pattern.map(String::from)),
            ("char", pattern) => Step::Char(pattern.map(String::from)),
            ("line", pattern) => Step::Line(pattern.map(String::from)),
            ("space", None) => Step::Space,
            ("newline", None) => Step::Newline,
            ("eof", None) => Step::Eof,
            _ => return Err(format!("line {}: unknown step {line:?}", no + 1)),
        };
        steps.push(step);
    }
    Ok(steps)
}

fn bounds<T: std::str::FromStr>(args: &str, no: usize) -> Result<(T, T), String> {
    let mut parts = args.split_whitespace().map(str::parse::<T>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(min)), Some(Ok(max)), None) => Ok((min, max)),
        _ => Err(format!("line {}: expected `min max`, got {args:?}", no + 1)),
    }
}

/// Runs the steps in order, stopping at the first violation.
pub fn run_script<S: Source>(scanner: &mut Scanner<S>, steps: &[Step]) -> ScanResult<()> {
    for step in steps {
        match step {
            Step::Int(Some((min, max))) => scanner.read_int(*min, *max).map(drop)?,
            Step::Int(None) => scanner.read_any_int().map(drop)?,
            Step::Long(Some((min, max))) => scanner.read_long(*min, *max).map(drop)?,
            Step::Long(None) => scanner.read_any_long().map(drop)?,
            Step::Float(Some((min, max))) => scanner.read_float(*min, *max).map(drop)?,
            Step::Float(None) => scanner.read_any_float().map(drop)?,
            Step::Word(Some(pattern)) => scanner.read_word_matching(pattern).map(drop)?,
            Step::Word(None) => scanner.read_word().map(drop)?,
            Step::Char(Some(pattern)) => scanner.read_char_matching(pattern).map(drop)?,
            Step::Char(None) => scanner.read_char().map(drop)?,
            Step::Line(Some(pattern)) => scanner.read_line_matching(pattern).map(drop)?,
            Step::Line(None) => scanner.read_line().map(drop)?,
            Step::Space => scanner.read_space()?,
            Step::Newline => scanner.read_newline()?,
            Step::Eof => scanner.read_eof()?,
        }
    }
    Ok(())
}

/// Short name used in fixture `expect` files; `ok` for success.
#[must_use]
pub fn outcome_name(result: &ScanResult<()>) -> &'static str {
    match result {
        Ok(()) => "ok",
        Err(Violation::EndOfStream) => "EndOfStream",
        Err(Violation::IntegerParsing { .. }) => "IntegerParsing",
        Err(Violation::FloatParsing { .. }) => "FloatParsing",
        Err(Violation::Whitespace { .. }) => "Whitespace",
        Err(Violation::NonDecodable(_)) => "NonDecodable",
        Err(Violation::IntegerRange { .. }) => "IntegerRange",
        Err(Violation::FloatRange { .. }) => "FloatRange",
        Err(Violation::Pattern { .. }) => "Pattern",
        Err(Violation::Io(_)) => "Io",
        Err(Violation::InvalidPattern { .. }) => "InvalidPattern",
    }
}

///
/// Assert that for given input, running the script ends with the expected outcome
///
/// # Panics
///
///    Function panics if the script is malformed or the outcome differs from `expected`.
pub fn assert_script(input: &str, script: &str, config: ScanConfig, expected: &str) {
    let steps = parse_script(script).unwrap_or_else(|e| panic!("bad script: {e}"));
    let mut scanner = Scanner::new_from_str(input, config);
    let result = run_script(&mut scanner, &steps);
    assert_eq!(
        outcome_name(&result),
        expected,
        "Error in case: {input:?} ({result:?})"
    );
}
