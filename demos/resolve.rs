//! An example to resolve URI references against a base URI.

use uri_generic::resolve::FixedBaseResolver;
use uri_generic::Uri;

const USAGE: &str = "\
USAGE:
    resolve [FLAGS] [--] BASE REFERENCE...

FLAGS:
    -h, --help      Prints this help
    -n, --normalize Normalizes the resolved URIs

ARGS:
    <BASE>          Base URI, which should be absolute
    <REFERENCE>...  URI references to resolve
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// Base URI.
    base: String,
    /// References.
    references: Vec<String>,
    /// Whether to normalize the results.
    normalize: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut positional = Vec::new();
        let mut normalize = false;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--normalize" | "-n" => normalize = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => positional.push(arg),
            }
        }
        positional.extend(args);

        let mut positional = positional.into_iter();
        let base = positional
            .next()
            .unwrap_or_else(|| die("Base URI should be specified"));
        let references: Vec<_> = positional.collect();
        if references.is_empty() {
            die("At least one reference should be specified");
        }
        Self {
            base,
            references,
            normalize,
        }
    }
}

fn main() {
    let opt = CliOpt::parse();

    let base = match Uri::parse(&opt.base) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse base {:?}: {}", opt.base, e)),
    };
    let resolver = match FixedBaseResolver::new(&base) {
        Ok(v) => v,
        Err(e) => die(format_args!("Cannot use {:?} as a base: {}", opt.base, e)),
    };

    for reference in &opt.references {
        let resolved = Uri::parse(reference).and_then(|r| resolver.resolve(&r));
        match resolved {
            Ok(resolved) if opt.normalize => println!("{} => {}", reference, resolved.normalized()),
            Ok(resolved) => println!("{} => {}", reference, resolved),
            Err(e) => eprintln!("{} => ERROR: {}", reference, e),
        }
    }
}
