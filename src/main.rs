use dais::{CaptionPolicy, PipelineBuilder, PipelineError, RenderStats};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

/// A simple CLI to generate a slide deck from a JSON content file.
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    flat: bool,
    skip_blank_captions: bool,
    validate_anchors: bool,
    default_layout: Option<usize>,
    base_dir: Option<PathBuf>,
}

fn print_usage(program: &str) {
    eprintln!("Generate a .pptx slide deck from a declarative JSON content file.");
    eprintln!();
    eprintln!("Usage: {program} [options] <content.json> <output.pptx>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --flat                  render titles and captions only");
    eprintln!("  --skip-blank-captions   drop empty subtitle paragraphs");
    eprintln!("  --validate-anchors      reject position tables that run off-canvas");
    eprintln!("  --layout <n>            default slide layout index (default 1)");
    eprintln!("  --base-dir <dir>        image lookup directory (default: content file's)");
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut positional = Vec::new();
    let mut flat = false;
    let mut skip_blank_captions = false;
    let mut validate_anchors = false;
    let mut default_layout = None;
    let mut base_dir = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--flat" => flat = true,
            "--skip-blank-captions" => skip_blank_captions = true,
            "--validate-anchors" => validate_anchors = true,
            "--layout" => {
                let value = iter.next().ok_or("--layout requires a value")?;
                let index = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid layout index '{value}'"))?;
                default_layout = Some(index);
            }
            "--base-dir" => {
                let value = iter.next().ok_or("--base-dir requires a value")?;
                base_dir = Some(PathBuf::from(value));
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{other}'"));
            }
            other => positional.push(PathBuf::from(other)),
        }
    }

    let [input, output] = <[PathBuf; 2]>::try_from(positional)
        .map_err(|_| "expected exactly two arguments: <content.json> <output.pptx>".to_string())?;
    Ok(CliArgs {
        input,
        output,
        flat,
        skip_blank_captions,
        validate_anchors,
        default_layout,
        base_dir,
    })
}

fn run(args: CliArgs) -> Result<RenderStats, PipelineError> {
    let source = fs::read_to_string(&args.input)?;

    // Image paths in the content resolve relative to the content file
    // unless the caller says otherwise.
    let base_dir = args.base_dir.unwrap_or_else(|| {
        args.input
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let mut builder = PipelineBuilder::new().with_base_dir(base_dir);
    if args.flat {
        builder = builder.flat();
    }
    if args.skip_blank_captions {
        builder = builder.with_caption_policy(CaptionPolicy::SkipBlank);
    }
    if args.validate_anchors {
        builder = builder.validate_anchors();
    }
    if let Some(index) = args.default_layout {
        builder = builder.with_default_layout(index);
    }

    let pipeline = builder.build()?;
    pipeline.generate_to_file(&source, &args.output)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("dais");
    let cli = match parse_args(&args[1..]) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage(program);
            process::exit(1);
        }
    };

    let output = cli.output.clone();
    match run(cli) {
        Ok(stats) => {
            println!(
                "Generated {} with {} slides, {} paragraphs, {} pictures",
                output.display(),
                stats.slides,
                stats.paragraphs,
                stats.pictures
            );
        }
        Err(error) => {
            eprintln!("error: {error}");
            process::exit(1);
        }
    }
}
