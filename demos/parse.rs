//! An example to parse a URI from the CLI argument.

use uri_generic::Uri;

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] URI

FLAGS:
    -h, --help      Prints this help
    -n, --normalize Also prints the normalized URI

ARGS:
    <URI>           URI reference
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
    /// URI.
    uri: String,
    /// Whether to print the normalized URI.
    normalize: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut uri = None;
        let mut normalize = false;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--normalize" | "-n" => normalize = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if uri.replace(arg).is_some() {
                        die("URI can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if uri.replace(arg).is_some() {
                die("URI can be specified at most once");
            }
        }

        let uri = uri.unwrap_or_else(|| die("URI should be specified"));
        Self { uri, normalize }
    }
}

fn main() {
    let opt = CliOpt::parse();

    let uri = match Uri::parse(&opt.uri) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse {:?}: {}", opt.uri, e)),
    };
    println!("Successfully parsed: {:?}", uri);

    if uri.is_relative() {
        println!("URI is relative.");
    } else if let Some(scheme) = uri.scheme() {
        println!("URI is absolute, with scheme {:?}.", scheme.as_str());
    }
    match uri.authority() {
        Some(authority) => {
            println!("userinfo: {:?}", authority.userinfo().map(|v| v.as_str()));
            println!("host:     {:?} ({})", authority.host().as_str(), host_kind(&uri));
            println!("port:     {:?}", authority.port());
        }
        None => println!("URI has no authority."),
    }
    println!("path:     {:?}", uri.path().map(|v| v.as_str()).unwrap_or_default());
    println!("query:    {:?}", uri.query().map(|v| v.as_str()));
    println!("fragment: {:?}", uri.fragment().map(|v| v.as_str()));

    if opt.normalize {
        println!("normalized: {}", uri.normalized());
    }
}

/// Describes the kind of the host.
fn host_kind(uri: &Uri) -> &'static str {
    match uri.host() {
        Some(host) if host.is_loopback() => "loopback",
        Some(host) if host.is_ipv4() => "IPv4 address",
        Some(host) if host.is_ipv6() => "IPv6 address",
        Some(_) => "registered name",
        None => "none",
    }
}
