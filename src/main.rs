use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use numeral::{frontend::lexer::tokenize, run};
use tracing_subscriber::EnvFilter;

/// numeral parses arithmetic expressions and prints their syntax tree, or a
/// diagnostic pointing at the first error.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numeral to read the expression from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream instead of the syntax tree.
    #[arg(short, long)]
    tokens: bool,

    /// Increase log output on stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression, or a file path with `--file`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      EnvFilter::new(directive_for_verbosity(args.verbose))
                                                  });
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let (name, script) = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => (args.contents.clone(), text),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        ("<stdin>".to_string(), args.contents.clone())
    };

    let output = if args.tokens {
        tokenize(&name, &script).map(|tokens| tokens.to_string())
    } else {
        run(&name, &script).map(|tree| tree.to_string())
    };

    match output {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e.as_string());
            ExitCode::FAILURE
        },
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "numeral=warn",
        1 => "numeral=debug",
        _ => "numeral=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_directives() {
        assert_eq!(directive_for_verbosity(0), "numeral=warn");
        assert_eq!(directive_for_verbosity(1), "numeral=debug");
        assert_eq!(directive_for_verbosity(5), "numeral=trace");
    }

    #[test]
    fn arguments_parse() {
        let args = Args::try_parse_from(["numeral", "-f", "-vv", "sum.expr"]).unwrap();
        assert!(args.file);
        assert!(!args.tokens);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.contents, "sum.expr");
    }

    #[test]
    fn leading_minus_is_an_expression() {
        let args = Args::try_parse_from(["numeral", "-5 + 2"]).unwrap();
        assert_eq!(args.contents, "-5 + 2");
    }
}
