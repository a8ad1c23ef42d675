use anglo_i18n::{Direction, Translation, Translator};
use clap::{Arg, Command};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const NO_MATCH_MESSAGE: &str = "Everything looks good to me!";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("anglo")
        .version("0.1.0")
        .about("Translate text between American and British English")
        .arg(
            Arg::new("text")
                .help("Text to translate (read from stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("direction")
                .long("direction")
                .short('d')
                .help("american-to-british, british-to-american, or a target locale such as en-GB")
                .required(true),
        )
        .arg(
            Arg::new("highlight")
                .long("highlight")
                .help("Print the highlighted rendering instead of plain text")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Directory with custom dictionary JSON files"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("List every substitution and enable debug logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let direction: Direction = matches
        .get_one::<String>("direction")
        .ok_or("missing --direction")?
        .parse()?;

    let text = match matches.get_one::<String>("text") {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let custom;
    let translator = match matches.get_one::<String>("data-dir") {
        Some(dir) => {
            custom = Translator::from_dir(Path::new(dir))?;
            &custom
        }
        None => Translator::builtin(),
    };

    if verbose {
        let found = translator.find_matches(&text, direction);
        let mut entries: Vec<_> = found.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        eprintln!("🌍 {}", direction);
        for (key, found) in entries {
            eprintln!("   {:?} \"{}\" → \"{}\"", found.pass, key, found.replacement);
        }
        eprintln!();
    }

    match translator.translate(&text, direction)? {
        Translation::NoMatch => println!("{}", NO_MATCH_MESSAGE),
        Translation::Translated { plain, highlighted } => {
            if matches.get_flag("highlight") {
                println!("{}", highlighted);
            } else {
                println!("{}", plain);
            }
        }
    }

    Ok(())
}
