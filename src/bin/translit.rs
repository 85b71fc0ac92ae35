//! Command-line interface for the transliteration tokenizer
//!
//! Usage:
//!   translit parse [`<word>`...] [--language `<code>`] [--config `<path>`] [--god-number `<n>`...] [--format `<format>`]
//!
//! Without words on the command line, whitespace-separated words are read from stdin.
//! Formats: `json`, `yaml`, `markup` and `debug`. Set `RUST_LOG=debug` to trace the
//! tokenizer on stderr.

use clap::{Arg, ArgAction, ArgMatches, Command};
use cuneiform_translit::translit::export::export_words;
use cuneiform_translit::translit::{
    parse_words, Loader, ParagraphLanguage, ParsedWord, TranslitConfig, TranslitError,
    TranslitResult, WordParser,
};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("translit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize and classify cuneiform transliteration words")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Tokenize words and print the fragments")
                .arg(
                    Arg::new("words")
                        .help("Words to parse (read from stdin when omitted)")
                        .action(ArgAction::Append)
                        .index(1),
                )
                .arg(
                    Arg::new("language")
                        .long("language")
                        .short('l')
                        .help("Paragraph language (Akk, Sum, Luw, Pal, Hur, Hat, Hit, Ign)")
                        .default_value("Hit"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in configuration"),
                )
                .arg(
                    Arg::new("god-number")
                        .long("god-number")
                        .help("Numeral spelling a deity after a god determinative (repeatable, replaces the built-in list)")
                        .value_parser(clap::value_parser!(u32))
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: json, yaml, markup or debug")
                        .default_value("json"),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        _ => unreachable!(),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> TranslitResult<String> {
    let language: ParagraphLanguage = matches
        .get_one::<String>("language")
        .map_or(Ok(ParagraphLanguage::default()), |code| code.parse())?;
    let format = matches
        .get_one::<String>("format")
        .map_or("json", String::as_str);

    let god_numbers: Vec<u32> = matches
        .get_many::<u32>("god-number")
        .map(|numbers| numbers.copied().collect())
        .unwrap_or_default();
    let config = load_config(matches.get_one::<String>("config"), &god_numbers)?;
    let parser = WordParser::new(&config);

    let words: Vec<String> = match matches.get_many::<String>("words") {
        Some(words) => words.cloned().collect(),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            input.split_whitespace().map(str::to_string).collect()
        }
    };
    tracing::debug!("Parsing {} words as {}", words.len(), language);

    let parsed = parse_words(&parser, words.iter().map(String::as_str), language);
    render(&parsed, format)
}

fn load_config(path: Option<&String>, god_numbers: &[u32]) -> TranslitResult<TranslitConfig> {
    let mut loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    if !god_numbers.is_empty() {
        loader = loader.with_god_numbers(god_numbers)?;
    }
    Ok(loader.build()?)
}

fn render(words: &[ParsedWord], format: &str) -> TranslitResult<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(words)?),
        "yaml" => Ok(serde_yaml::to_string(words)?),
        "markup" => Ok(export_words(words)),
        "debug" => Ok(render_debug(words)),
        other => Err(TranslitError::UnknownFormat(other.to_string())),
    }
}

fn render_debug(words: &[ParsedWord]) -> String {
    let mut out = String::new();
    for word in words {
        out.push_str(&format!("{} [{}]\n", word.language(), word.status().level()));
        for fragment in word.fragments() {
            out.push_str(&format!(
                "  {:?} {}\n",
                fragment.breakdown_type(),
                fragment.raw_text().unwrap_or_default()
            ));
        }
        for event in word.status().events() {
            out.push_str(&format!("  ! {}\n", event));
        }
    }
    out
}
