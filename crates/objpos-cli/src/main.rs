use clap::{Parser, Subcommand};
use objpos_parser::{ObjectPosition, ParseError};
use std::io::{self, BufRead, Write};

mod logging;

#[derive(Parser)]
#[command(name = "objpos")]
#[command(about = "Parse CSS object-position values into fractional offsets")]
#[command(version)]
struct Cli {
    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the `x y` offsets of each value
    Parse {
        /// Values to parse; one per line from stdin when omitted
        values: Vec<String>,

        /// Print CSS percentages instead of fractions
        #[arg(long)]
        css: bool,
    },

    /// Validate a value strictly
    Check {
        /// Value to validate
        value: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Parse { values, css } => cmd_parse(values, css),
        Command::Check { value } => cmd_check(&value),
    }
}

fn render(pos: ObjectPosition, css: bool) -> String {
    if !pos.is_finite() {
        tracing::warn!(x = pos.x, y = pos.y, "position is not finite");
    }
    if css {
        pos.to_string()
    } else {
        format!("{} {}", pos.x, pos.y)
    }
}

/// Parse one value per input line and write one rendered position per line.
fn parse_lines<R: BufRead, W: Write>(input: R, output: &mut W, css: bool) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        tracing::debug!(value = %line, "parsing line");
        writeln!(output, "{}", render(objpos_parser::parse_object_position(&line), css))?;
    }
    Ok(())
}

fn cmd_parse(values: Vec<String>, css: bool) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if values.is_empty() {
        parse_lines(io::stdin().lock(), &mut out, css)
    } else {
        values.iter().try_for_each(|value| {
            writeln!(out, "{}", render(objpos_parser::parse_object_position(value), css))
        })
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// The line reported for a valid value.
fn check_value(value: &str) -> Result<String, ParseError> {
    objpos_parser::Parser::check(value).map(|pos| format!("OK: {pos}"))
}

fn cmd_check(value: &str) {
    match check_value(value) {
        Ok(line) => eprintln!("{line}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_fractions() {
        assert_eq!(render(ObjectPosition::new(0.3, 0.7), false), "0.3 0.7");
        assert_eq!(render(ObjectPosition::new(f64::NAN, 1.0), false), "NaN 1");
    }

    #[test]
    fn test_render_css() {
        assert_eq!(render(ObjectPosition::new(0.3, 0.7), true), "30% 70%");
    }

    fn run_lines(input: &str, css: bool) -> String {
        let mut output = Vec::new();
        parse_lines(input.as_bytes(), &mut output, css).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_lines() {
        assert_eq!(run_lines("left bottom\n30% 70%\n", false), "0 1\n0.3 0.7\n");
    }

    #[test]
    fn test_parse_lines_empty_line_is_center() {
        assert_eq!(run_lines("\nright\n", false), "0.5 0.5\n1 1\n");
    }

    #[test]
    fn test_parse_lines_css() {
        assert_eq!(run_lines("top\nbad%", true), "0% 0%\nNaN% NaN%\n");
    }

    #[test]
    fn test_parse_lines_no_input() {
        assert_eq!(run_lines("", false), "");
    }

    #[test]
    fn test_parse_lines_propagates_read_errors() {
        let mut output = Vec::new();
        let invalid_utf8: &[u8] = &[0xff, 0xfe, b'\n'];
        assert!(parse_lines(invalid_utf8, &mut output, false).is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_check_value_ok() {
        assert_eq!(check_value("left 25%").unwrap(), "OK: 0% 25%");
        assert_eq!(check_value("").unwrap(), "OK: 50% 50%");
    }

    #[test]
    fn test_check_value_error() {
        let err = check_value("bottom left").unwrap_err();
        assert_eq!(err.column, 1);
        assert_eq!(
            err.to_string(),
            "Parse error at column 1: Vertical keyword 'bottom' must be the second value"
        );
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["objpos", "parse", "--css", "left top", "30%"]).unwrap();
        match cli.command {
            Command::Parse { values, css } => {
                assert!(css);
                assert_eq!(values, vec!["left top", "30%"]);
            }
            Command::Check { .. } => panic!("Expected Parse"),
        }
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::try_parse_from(["objpos", "-v", "check", "left"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Check { value } if value == "left"));
    }
}
