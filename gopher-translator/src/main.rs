use clap::{Arg, Command};
use gopher_translator::{check_single_word, classify, tokenize, translate_sentence, translate_word};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("gopher")
        .version("0.1.0")
        .about("Translate English into Gopher-speak")
        .arg(
            Arg::new("text")
                .help("Word (or sentence, with --sentence) to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("sentence")
                .long("sentence")
                .short('s')
                .help("Treat the input as a sentence instead of a single word")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show how each token was classified")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches
        .get_one::<String>("text")
        .ok_or("missing text to translate")?;
    let sentence_mode = matches.get_flag("sentence");
    let verbose = matches.get_flag("verbose");

    let result = if sentence_mode {
        if verbose {
            for token in &tokenize(text) {
                println!("   {:<16} {}", token, classify(token));
            }
            println!();
        }
        translate_sentence(text)
    } else {
        let word = match check_single_word(text) {
            Ok(word) => word,
            Err(e) => {
                eprintln!("❌ {}", e);
                eprintln!("   Use --sentence to translate more than one word");
                return Err(e.into());
            }
        };
        if verbose {
            println!("   {:<16} {}", word, classify(word));
            println!();
        }
        translate_word(word)
    };

    println!("{}", result);

    Ok(())
}
