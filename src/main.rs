use human_namecase::{namejoin, nfc, nfd, Mode, NameContext};
use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[cfg_attr(rustfmt, rustfmt_skip)]
const USAGE: &str = "
Usage:
    human_namecase [options] case [--given|--family] <name>...
    human_namecase [options] split <name>...
    human_namecase [options] parts <name>...
    human_namecase [options] join <family> <given>

Options:
    --case-exceptions FILE    Load case exceptions, one per line
    --split-exceptions FILE   Load split exceptions, one per line
    --nfd                     Work in NFD rather than NFC

With the `case` command, human_namecase fixes the capitalization of a full
name (or of given names only, or a family name only). With `split`, it prints
the name as \"Family, Given\". With `parts`, it prints the family and given
names as JSON.

If `-` is the name, it will expect newline-separated names on stdin, and
print one result per line. Otherwise, the arguments are taken as a single
name, and it exits with status 1 if there is no result.

Exception files contain one exception per line, in the form accepted by
`namecase_exception` or `namesplit_exception`. Blank lines and lines
starting with `#` are ignored.
";

const EX_USAGE: i32 = 64;
const EX_NOINPUT: i32 = 66;

#[derive(Default)]
struct Options {
    case_exceptions: Vec<String>,
    split_exceptions: Vec<String>,
    nfd: bool,
}

impl Options {
    fn prepare<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.nfd {
            nfd(input)
        } else {
            nfc(input)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (options, command) = parse_options(&args).unwrap_or_else(|| usage());
    let context = build_context(&options);

    match command {
        [cmd, mode, names @ ..] if cmd == "case" && mode == "--given" && !names.is_empty() => {
            run(&options, names, |name| Some(context.gnamecase(name)))
        }
        [cmd, mode, names @ ..] if cmd == "case" && mode == "--family" && !names.is_empty() => {
            run(&options, names, |name| Some(context.fnamecase(name, None)))
        }
        [cmd, names @ ..] if cmd == "case" && !names.is_empty() && !names[0].starts_with("--") => {
            run(&options, names, |name| {
                Some(context.namecase(name, Mode::Full, None))
            })
        }
        [cmd, names @ ..] if cmd == "split" && !names.is_empty() => {
            run(&options, names, |name| Some(context.namesplit(name)))
        }
        [cmd, names @ ..] if cmd == "parts" && !names.is_empty() => {
            run(&options, names, |name| {
                context.split_parts(name).map(|parts| parts.to_json())
            })
        }
        [cmd, family, given] if cmd == "join" => {
            let family = options.prepare(family);
            let given = options.prepare(given);
            match namejoin(Some(family.as_ref()), Some(given.as_ref())) {
                Some(joined) => println!("{}", joined),
                None => process::exit(1),
            }
        }
        _ => usage(),
    }
}

fn usage() -> ! {
    writeln!(&mut io::stderr(), "{}", USAGE).ok();
    process::exit(EX_USAGE);
}

fn parse_options(args: &[String]) -> Option<(Options, &[String])> {
    let mut options = Options::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--case-exceptions" => {
                options.case_exceptions.push(args.get(i + 1)?.clone());
                i += 2;
            }
            "--split-exceptions" => {
                options.split_exceptions.push(args.get(i + 1)?.clone());
                i += 2;
            }
            "--nfd" => {
                options.nfd = true;
                i += 1;
            }
            _ => break,
        }
    }

    Some((options, &args[i..]))
}

fn build_context(options: &Options) -> NameContext {
    let mut context = NameContext::new();

    for path in options.case_exceptions.iter() {
        load_exceptions(path, |line| {
            context.namecase_exception(&nfc(line))
        });
    }
    for path in options.split_exceptions.iter() {
        load_exceptions(path, |line| {
            context.namesplit_exception(&nfc(line))
        });
    }

    // Exceptions were loaded as NFC, so they get converted along with
    // everything else
    if options.nfd {
        context.normalize(|s| nfd(s).into_owned());
    }

    context
}

fn load_exceptions<F>(path: &str, mut register: F)
where
    F: FnMut(&str) -> bool,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            writeln!(&mut io::stderr(), "can't read {}: {}", path, e).ok();
            process::exit(EX_NOINPUT);
        }
    };

    let mut count = 0;
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                writeln!(&mut io::stderr(), "can't read {}: {}", path, e).ok();
                process::exit(EX_NOINPUT);
            }
        };

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if register(line) {
            count += 1;
        } else {
            warn!(path, line = number + 1, "Invalid exception: {}", line);
        }
    }

    debug!(path, count, "Loaded exceptions");
}

fn run<F>(options: &Options, names: &[String], transform: F)
where
    F: Fn(&str) -> Option<String>,
{
    if names.len() == 1 && names[0] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let input = match line {
                Ok(input) => input,
                Err(_) => break,
            };

            let output = transform(&options.prepare(&input)).unwrap_or_default();
            if writeln!(&mut io::stdout(), "{}", output).is_err() {
                break;
            }
        }
    } else {
        let name = names.join(" ");
        match transform(&options.prepare(&name)) {
            Some(output) if !output.is_empty() => println!("{}", output),
            _ => process::exit(1),
        }
    }
}
