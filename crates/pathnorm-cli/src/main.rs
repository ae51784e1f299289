use pathnorm::{NormalizeOptions, Path};
use serde::Serialize;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Path(pathnorm::Error),
    Json(serde_json::Error),
    NoPath,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Path(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoPath => write!(f, "{}", pathnorm::Error::NoPathElement),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<pathnorm::Error> for CliError {
    fn from(value: pathnorm::Error) -> Self {
        match value {
            pathnorm::Error::NoPathElement => Self::NoPath,
            other => Self::Path(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Normalize,
    Parse,
    Bbox,
    Translate,
    Extract,
    Preview,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    svg_input: bool,
    pretty: bool,
    both_axes: bool,
    view_box: bool,
    config: Option<String>,
    precision: Option<usize>,
    target_size: Option<f64>,
    absolute: bool,
    out: Option<String>,
}

#[derive(Serialize)]
struct BboxOut {
    #[serde(flatten)]
    bbox: pathnorm::BoundingBox,
    width: f64,
    height: f64,
}

fn usage() -> &'static str {
    "pathnorm-cli\n\
\n\
USAGE:\n\
  pathnorm-cli [normalize] [--precision <n>] [--target-size <n>] [--absolute] [--config <file.json>] [--svg] [--out <path>] [<path>|-]\n\
  pathnorm-cli parse [--pretty] [--svg] [<path>|-]\n\
  pathnorm-cli bbox [--pretty] [--svg] [<path>|-]\n\
  pathnorm-cli translate [--both] [--svg] [--out <path>] [<path>|-]\n\
  pathnorm-cli extract [<path>|-]\n\
  pathnorm-cli preview [--view-box] [--svg] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is path data (a `d` value) unless --svg is given, which reads an SVG document and\n\
    uses its first <path> element. extract always reads an SVG document.\n\
  - translate shifts x only by default; --both shifts both axes.\n\
  - --config reads normalize options from JSON ({\"precision\": 2, \"targetSize\": 24});\n\
    flags given on the command line override it.\n\
  - Set PATHNORM_LOG (e.g. PATHNORM_LOG=debug) to log to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "normalize" => args.command = Command::Normalize,
            "parse" => args.command = Command::Parse,
            "bbox" => args.command = Command::Bbox,
            "translate" => args.command = Command::Translate,
            "extract" => args.command = Command::Extract,
            "preview" => args.command = Command::Preview,
            "--svg" => args.svg_input = true,
            "--pretty" => args.pretty = true,
            "--both" => args.both_axes = true,
            "--view-box" => args.view_box = true,
            "--absolute" => args.absolute = true,
            "--precision" => {
                let Some(p) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.precision = Some(p.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--target-size" => {
                let Some(size) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let size = size.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(size.is_finite() && size > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
                args.target_size = Some(size);
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
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

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))?;
            Ok(())
        }
    }
}

fn normalize_options(args: &Args) -> Result<NormalizeOptions, CliError> {
    let mut options = match args.config.as_deref() {
        Some(path) => NormalizeOptions::from_json(&std::fs::read_to_string(path)?)?,
        None => NormalizeOptions::default(),
    };
    if let Some(precision) = args.precision {
        options.precision = precision;
    }
    if let Some(target_size) = args.target_size {
        options.target_size = target_size;
    }
    if args.absolute {
        options.absolute = true;
    }
    options.validate()?;
    Ok(options)
}

fn path_data(args: &Args, input: String) -> Result<String, CliError> {
    if args.svg_input {
        Ok(pathnorm::svg::first_path_data(&input)?)
    } else {
        Ok(input)
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let input = read_input(args.input.as_deref())?;

    match args.command {
        Command::Extract => {
            for d in pathnorm::svg::path_data_values(&input)? {
                println!("{d}");
            }
            Ok(())
        }
        command => {
            let d = path_data(&args, input)?;
            tracing::debug!(?command, input_bytes = d.len(), "running");
            run_on_path_data(command, &args, &d)
        }
    }
}

fn run_on_path_data(command: Command, args: &Args, d: &str) -> Result<(), CliError> {
    let out = args.out.as_deref();
    match command {
        Command::Parse => {
            let path: Path = pathnorm::parse(d)?;
            write_json(&path, args.pretty)
        }
        Command::Bbox => {
            let bbox = pathnorm::bounding_box_of(d)?;
            write_json(
                &BboxOut {
                    bbox,
                    width: bbox.width(),
                    height: bbox.height(),
                },
                args.pretty,
            )
        }
        Command::Translate => {
            let translated = if args.both_axes {
                pathnorm::translate_xy(d)?
            } else {
                pathnorm::translate_x(d)?
            };
            write_text(&translated, out)
        }
        Command::Normalize => {
            let options = normalize_options(args)?;
            write_text(&pathnorm::normalize_str(d, &options)?, out)
        }
        Command::Preview => {
            let d = d.trim();
            let bbox = if args.view_box {
                Some(pathnorm::bounding_box_of(d)?)
            } else {
                None
            };
            write_text(&pathnorm::svg::preview_document(d, bbox.as_ref()), out)
        }
        Command::Extract => Err(CliError::Usage(usage())),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PATHNORM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
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
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::NoPath) => {
            eprintln!("{}", CliError::NoPath);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
