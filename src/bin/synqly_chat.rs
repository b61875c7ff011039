//! synqly-chat — send one chat message through the Synqly API and print the reply.
//!
//! Usage:
//!   synqly-chat [--provider <name>] [--model <name>] <message...>
//!
//! Reads `SYNQLY_API_KEY` and, optionally, `SYNQLY_BASE_URL`.

use synqly::blocking::Client;
use synqly::{ChatCreateParams, Config, Logger, Message, StdLogger};
use tracing_subscriber::EnvFilter;

struct Args {
    provider: String,
    model: String,
    message: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let logger = StdLogger::default();
    let raw: Vec<String> = std::env::args().skip(1).collect();

    if raw.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }
    if raw.iter().any(|a| a == "--version" || a == "-V") {
        println!("synqly-chat {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let args = match parse_args(&raw) {
        Some(args) => args,
        None => {
            print_usage();
            std::process::exit(1);
        }
    };

    let client = match Client::new(Config::from_env()) {
        Ok(client) => client,
        Err(e) => fatal(&logger, &e),
    };

    let params = ChatCreateParams::new(args.model, vec![Message::user(args.message)])
        .provider(args.provider);

    let response = match client.chat().create(&params) {
        Ok(response) => response,
        Err(e) => fatal(&logger, &e),
    };

    logger.info(format_args!("Response: {}", response.content()));
    logger.info(format_args!("Cached: {}", response.cached));
    logger.info(format_args!("Tokens: {}", response.usage.total_tokens));
}

fn parse_args(raw: &[String]) -> Option<Args> {
    let mut provider = "openai".to_string();
    let mut model = "gpt-4".to_string();
    let mut words = Vec::new();

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--provider" => provider = iter.next()?.clone(),
            "--model" => model = iter.next()?.clone(),
            _ => words.push(arg.as_str()),
        }
    }

    if words.is_empty() {
        return None;
    }
    Some(Args {
        provider,
        model,
        message: words.join(" "),
    })
}

fn fatal(logger: &dyn Logger, err: &dyn std::fmt::Display) -> ! {
    logger.error(format_args!("{}", err));
    std::process::exit(1);
}

fn print_usage() {
    println!(
        r#"synqly-chat — send a chat message through the Synqly API

USAGE:
    synqly-chat [--provider <name>] [--model <name>] <message...>

OPTIONS:
    --provider <name>    Upstream provider (default: openai)
    --model <name>       Model identifier (default: gpt-4)
    -h, --help           Show this help message
    -V, --version        Show version information

ENVIRONMENT:
    SYNQLY_API_KEY       API key sent as x-synqly-key
    SYNQLY_BASE_URL      Service endpoint (default: https://api.synqly.xyz)
    RUST_LOG             tracing filter, e.g. synqly=debug"#
    );
}
