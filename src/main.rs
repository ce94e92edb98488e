#![allow(nonstandard_style)]

use calc_engine::*;
use log::{info, warn};

fn init_logger(settings: &Settings) {
    env_logger::Builder::new()
        .filter_level(settings.level_filter())
        .parse_default_env()
        .format_timestamp_secs()
        .try_init()
        .ok();
}

fn read_number(word: Option<&str>) -> Result<f64> {
    let word = word.unwrap_or_default();
    word.parse().map_err(|_| CalcError::invalid_number(word.into()))
}

fn is_separator(character: char) -> bool {
    character.is_whitespace() || character == ',' || character == ';'
}

fn expect_end<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<()> {
    match words.next() {
        Some(word) => Err(CalcError::did_not_expect(word.into())),
        None => Ok(()),
    }
}

fn run_basic<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<f64> {
    let left = read_number(words.next())?;
    let right = read_number(words.next())?;
    let name = words.next().unwrap_or_default();
    expect_end(words)?;
    apply_basic_op(left, right, name)
}

fn run_function<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<f64> {
    let name = words.next().unwrap_or_default();
    let arguments = words
        .flat_map(|word| word.split(is_separator))
        .filter(|word| !word.is_empty())
        .map(|word| read_number(Some(word)))
        .collect::<Result<Vec<f64>>>()?;
    apply_function(name, &arguments)
}

fn run_convert<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<f64> {
    let value = read_number(words.next())?;
    let (from, to) = resolve_selection(
        words.next().unwrap_or_default(),
        words.next().unwrap_or_default(),
    );
    expect_end(words)?;
    convert_units(value, from, to)
}

/// Runs one input line, returning the kind of call made alongside its outcome.
fn run_line(line: &str) -> (&'static str, Result<f64>) {
    let mut words = line.split_whitespace();
    match words.next() {
        Some("basic") => ("basic", run_basic(words)),
        Some("fn") => ("advanced", run_function(words)),
        Some("convert") => ("convert", run_convert(words)),
        _ => ("expr", evaluate_expression(line)),
    }
}

fn main() -> std::io::Result<()> {
    use std::io::Write;

    let (settings, problem) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    init_logger(&settings);
    if let Some(e) = problem {
        warn!("error reading settings, loading defaults: {}", e);
    }

    print!("{}", settings.prompt);
    std::io::stdout().flush()?;

    for line in std::io::stdin().lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            break;
        }

        match run_line(line) {
            (kind, Ok(result)) => {
                info!("{}: {} = {}", kind, line, result);
                println!("{}", format_number(result, settings.fraction_digits));
            },
            (kind, Err(e)) => {
                warn!("{}: {} failed: {}", kind, line, e);
                println!("Error, {}", e);
            },
        }

        print!("{}", settings.prompt);
        std::io::stdout().flush()?;
    }
    Ok(())
}
