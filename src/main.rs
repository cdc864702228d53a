pub mod digest;
pub mod entity;
pub mod error;
pub mod parser;
pub mod translator;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use structopt::StructOpt;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use crate::digest::Md5Digester;
use crate::error::CliError;

fn read(path: &Path) -> Result<String, CliError> {
    if !path.is_file() {
        return Err(CliError::MissingInput(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

fn write<W: Write>(out: W, fragments: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for fragment in fragments {
        out.write_all(fragment.as_bytes())?;
    }
    out.flush()
}

#[derive(Debug, StructOpt)]
#[structopt(name = "md2html", about = "Convert restricted Markdown to HTML")]
struct Opt {
    #[structopt(long = "debug")]
    pub debug: bool,
    /// Log progress at info level
    #[structopt(short = "v", long = "verbose")]
    pub verbose: bool,
    /// Markdown file to convert
    #[structopt(parse(from_os_str))]
    pub input: PathBuf,
    /// HTML file to write, stdout when omitted
    #[structopt(parse(from_os_str))]
    pub output: Option<PathBuf>,
}

fn run(opt: &Opt) -> Result<(), CliError> {
    let content = read(&opt.input)?;
    info!(input = %opt.input.display(), bytes = content.len(), "read markdown");
    let lines = parser::split_lines(&content);
    if opt.debug || tracing::enabled!(Level::DEBUG) {
        for line in &lines {
            let parsed = parser::parse_line(line);
            debug!(line = ?parsed, "classified");
            if opt.debug {
                eprintln!(">>> line = {:?}", parsed);
            }
        }
    }
    let fragments = translator::convert(lines, &Md5Digester);
    debug!(fragments = fragments.len(), "converted");
    match &opt.output {
        Some(path) => {
            write(File::create(path)?, &fragments)?;
            info!(output = %path.display(), "wrote html");
        }
        None => write(io::stdout().lock(), &fragments)?,
    }
    Ok(())
}

fn main() {
    let opt = Opt::from_args();

    // --verbose forces info, otherwise RUST_LOG decides
    let filter = if opt.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if opt.debug {
        eprintln!(">>> opt = {:?}", &opt);
    }
    if let Err(err) = run(&opt) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
