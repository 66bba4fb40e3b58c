use std::fs;

use clap::Parser;
use simpl::run_source;

/// simpl is an easy to use interpreter for a small typed expression
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells simpl to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Also print the final state of every declared variable.
    #[arg(short, long)]
    variables: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match run_source(&script) {
        Ok(outcome) => {
            if let Some(value) = outcome.value {
                println!("{value}");
            }

            if args.variables {
                let mut bindings: Vec<_> = outcome.variables.iter().collect();
                bindings.sort_by(|(a, _), (b, _)| a.cmp(b));

                for (name, value) in bindings {
                    println!("{name} = {value}");
                }
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
