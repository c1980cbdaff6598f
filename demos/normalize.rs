//! An example to normalize URIs given as CLI arguments.

use uri_generic::{normalize_percent_encoding, Uri};

const USAGE: &str = "\
USAGE:
    normalize [FLAGS] [--] URI...

FLAGS:
    -h, --help      Prints this help
    -p, --percent   Also normalizes percent-encoded triplets

ARGS:
    <URI>...        URI references
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

fn main() {
    let mut percent = false;
    let mut uris = Vec::new();
    let mut args = std::env::args().skip(1);
    for arg in args.by_ref() {
        match arg.as_str() {
            "--percent" | "-p" => percent = true,
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--" => break,
            opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
            _ => uris.push(arg),
        }
    }
    uris.extend(args);
    if uris.is_empty() {
        die("URI should be specified");
    }

    for raw in &uris {
        let input = if percent {
            normalize_percent_encoding(raw)
        } else {
            raw.clone()
        };
        match Uri::parse(&input) {
            Ok(uri) => println!("{}", uri.normalized()),
            Err(e) => eprintln!("{:?}: {}", raw, e),
        }
    }
}
