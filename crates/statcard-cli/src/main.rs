use statcard::render::CardKind;
use statcard::{
    JsonFileSource, ReposManifest, StaticSource, StatsSnapshot, StatsSource, Theme,
    TrafficLogSource, respond,
};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const CACHE_SECONDS_ENV: &str = "CACHE_SECONDS";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Data(statcard::Error),
    Card(statcard::render::Error),
    Request { status: u16, body: String },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Data(err) => write!(f, "{err}"),
            CliError::Card(err) => write!(f, "{err}"),
            CliError::Request { status, body } => write!(f, "request failed ({status}): {body}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<statcard::Error> for CliError {
    fn from(value: statcard::Error) -> Self {
        Self::Data(value)
    }
}

impl From<statcard::render::Error> for CliError {
    fn from(value: statcard::render::Error) -> Self {
        Self::Card(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Themes,
}

#[derive(Debug)]
struct Args {
    command: Command,
    card: CardKind,
    query: String,
    repos: Option<String>,
    out: Option<String>,
    headers: bool,
    input: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Render,
            card: CardKind::Medium,
            query: String::new(),
            repos: None,
            out: None,
            headers: false,
            input: None,
        }
    }
}

fn usage() -> &'static str {
    "statcard-cli\n\
\n\
USAGE:\n\
  statcard-cli [render] [--card medium|traffic] [--query <qs>] [--repos <repos.yaml>] [--out <path>] [--headers] [<stats.json>|-]\n\
  statcard-cli themes\n\
\n\
NOTES:\n\
  - If <stats.json> is omitted or '-', the snapshot is read from stdin.\n\
  - --query takes card options as a URL query string, e.g. 'show_icons=true&theme=dark'.\n\
  - With --repos, the input is a traffic log (JSON rows of repo_name/total_views/total_clones)\n\
    summed over the repositories listed in the manifest.\n\
  - For --card traffic without --repos, REPOS_YAML_PATH names the manifest the same way.\n\
  - --headers prints the response headers before the document.\n\
  - CACHE_SECONDS overrides the cache lifetime; RUST_LOG controls logging (stderr).\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "themes" => args.command = Command::Themes,
            "--card" => args.card = next_value(&mut it)?.parse::<CardKind>()?,
            "--query" => args.query = next_value(&mut it)?.clone(),
            "--repos" => args.repos = Some(next_value(&mut it)?.clone()),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--headers" => args.headers = true,
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_stdin_snapshot() -> Result<StaticSource, CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(StaticSource(StatsSnapshot::from_json(&buf)?))
}

// Traffic input is a log whenever a manifest is configured through the environment.
fn manifest_from_env(card: CardKind) -> bool {
    card == CardKind::Traffic && std::env::var_os(ReposManifest::PATH_ENV).is_some()
}

fn build_source(args: &Args) -> Result<Box<dyn StatsSource>, CliError> {
    let input = args.input.as_deref().filter(|p| *p != "-");
    match (args.repos.as_deref(), input) {
        (Some(repos), Some(log)) => Ok(Box::new(TrafficLogSource::new(
            log,
            ReposManifest::load(Path::new(repos)),
        ))),
        (Some(_), None) => Err(CliError::Usage(usage())),
        (None, Some(log)) if manifest_from_env(args.card) => Ok(Box::new(TrafficLogSource::new(
            log,
            ReposManifest::load_from_env(),
        ))),
        (None, Some(path)) => Ok(Box::new(JsonFileSource::new(path))),
        (None, None) => Ok(Box::new(read_stdin_snapshot()?)),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Themes => {
            for theme in Theme::ALL {
                println!("{}", theme.name());
            }
            Ok(())
        }
        Command::Render => {
            let source = build_source(&args)?;
            let deployment = std::env::var(CACHE_SECONDS_ENV).ok();
            let res = respond(
                source.as_ref(),
                args.card,
                &args.query,
                deployment.as_deref(),
            );
            if !res.is_success() {
                return Err(CliError::Request {
                    status: res.status,
                    body: res.body,
                });
            }
            if args.headers {
                for (name, value) in &res.headers {
                    println!("{name}: {value}");
                }
                println!();
            }
            match args.out.as_deref() {
                None => print!("{}", res.body),
                Some(path) => std::fs::write(path, &res.body)?,
            }
            tracing::info!(card = args.card.name(), bytes = res.body.len(), "rendered card");
            Ok(())
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statcard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    init_logging();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
