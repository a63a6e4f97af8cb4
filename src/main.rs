use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use infixa::{
    Evaluator,
    error::Error,
    grammar::Grammar,
    interpreter::token::format_postfix,
};
use log::LevelFilter;

/// infixa evaluates infix arithmetic expressions such as `2 + 3 * 4`,
/// `5!` or `log(8) ^ 2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells infixa to read expressions, one per line, from a file instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// The grammar: which operators and functions exist and how expressions
    /// are validated.
    #[arg(short, long, value_enum, default_value_t = Preset::Extended)]
    grammar: Preset,

    /// Overrides the grammar's complexity ceiling (operators or top-level
    /// terms, depending on the grammar).
    #[arg(short, long)]
    limit: Option<usize>,

    /// Prints the postfix form of each expression before its value.
    #[arg(short, long)]
    postfix: bool,

    /// How much the evaluator logs to stderr. `RUST_LOG` takes precedence.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// An expression, or a path with `--file`. Without it, infixa reads
    /// expressions interactively until `exit`.
    contents: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// `+ - * / // ^`, at most 99 operators.
    Basic,
    /// `+ - * / ^ ** !`, `log`, `exp`, at most 15 top-level terms.
    Scientific,
    /// Every operator and function, at most 15 operators.
    Extended,
    /// `extended` with the historical start/end character rule.
    ExtendedLegacy,
}

impl Preset {
    const fn grammar(self) -> Grammar {
        match self {
            Self::Basic => Grammar::BASIC,
            Self::Scientific => Grammar::SCIENTIFIC,
            Self::Extended => Grammar::EXTENDED,
            Self::ExtendedLegacy => Grammar::EXTENDED_LEGACY,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn init_logger(level: LogLevel) {
    env_logger::Builder::new().filter_level(level.into())
                              .parse_default_env()
                              .format_timestamp(None)
                              .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level);

    let mut grammar = args.grammar.grammar();
    if let Some(limit) = args.limit {
        grammar = grammar.with_complexity_limit(limit);
    }
    let evaluator = Evaluator::new(grammar);
    log::info!("using the {} grammar: operators [{}], functions [{}], {:?}",
               grammar.name(),
               join_names(grammar.operators().iter().map(|spec| spec.operator.symbol())),
               join_names(grammar.functions().iter().map(|spec| spec.name())),
               grammar.complexity());

    let ok = match args.contents {
        None => interactive(&evaluator, args.postfix),
        Some(path) if args.file => run_file(&evaluator, &path, args.postfix),
        Some(expression) => report(&evaluator, &expression, args.postfix, false),
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Reads expressions from stdin until `exit` or end of input.
fn interactive(evaluator: &Evaluator, show_postfix: bool) -> bool {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to write the prompt: {e}");
            return false;
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return true,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return false;
            },
        }

        let expression = line.trim();
        if expression.eq_ignore_ascii_case("exit") {
            return true;
        }
        if !expression.is_empty() {
            report(evaluator, expression, show_postfix, false);
        }
    }
}

/// Evaluates every non-empty line of a file; lines starting with `#` are
/// comments.
fn run_file(evaluator: &Evaluator, path: &str, show_postfix: bool) -> bool {
    let script = match fs::read_to_string(path) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the input file '{path}': {e}");
            return false;
        },
    };

    script.lines()
          .map(str::trim)
          .filter(|line| !line.is_empty() && !line.starts_with('#'))
          .fold(true, |ok, expression| report(evaluator, expression, show_postfix, true) && ok)
}

/// Evaluates one expression, printing its value to stdout or its error to
/// stderr. With `echo`, both are prefixed by the expression itself.
fn report(evaluator: &Evaluator, expression: &str, show_postfix: bool, echo: bool) -> bool {
    let prefix = if echo { format!("{expression}: ") } else { String::new() };

    let postfix = match evaluator.compile(expression) {
        Ok(postfix) => postfix,
        Err(e @ Error::ValidationRejected(_)) => {
            eprintln!("{prefix}error: {e} {}", describe_rules(&evaluator.grammar()));
            return false;
        },
        Err(e) => {
            eprintln!("{prefix}error: {e}");
            return false;
        },
    };

    if show_postfix {
        println!("{prefix}[{}]", format_postfix(&postfix));
    }

    match evaluator.evaluate_postfix(&postfix) {
        Ok(value) => {
            println!("{prefix}{value}");
            true
        },
        Err(e) => {
            eprintln!("{prefix}error: {}", Error::from(e));
            false
        },
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(" ")
}

fn describe_rules(grammar: &Grammar) -> String {
    let boundary = grammar.boundary();
    let mut starts = String::from("a number");
    if boundary.leading_paren {
        starts.push_str(", '('");
    }
    if boundary.leading_function {
        starts.push_str(" or a function call");
    }
    let complexity = grammar.complexity();

    format!("Expressions must start with {starts}, end with a number{}, have balanced \
             parentheses and contain at most {} {}.",
            if boundary.trailing.is_empty() {
                String::new()
            } else {
                format!(" or one of {:?}", boundary.trailing)
            },
            complexity.max(),
            complexity.describe())
}
