use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tapangle_core::{format_degrees, OverlayStyle, Point, Session, SessionOptions};

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Text,
    Json,
    Svg,
}

/// Mark two segments by tapping four points and report their angles
#[derive(Parser)]
#[command(name = "tapangle", version)]
struct Cli {
    /// Image number to label (1-based)
    #[arg(short, long, default_value_t = 1)]
    image: u32,

    /// Tap location as "x,y". Repeat per tap; taps after the fourth are ignored
    #[arg(short, long = "tap", value_name = "X,Y", allow_hyphen_values = true)]
    taps: Vec<Point>,

    /// Read events from stdin after --tap values: one "x,y" per line,
    /// plus "reset" and "image N"
    #[arg(long)]
    stdin: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Overlay style as JSON; omitted fields use defaults
    #[arg(long, value_name = "FILE")]
    style: Option<PathBuf>,

    /// Drawing surface side in pixels (overrides --style)
    #[arg(long)]
    size: Option<f64>,

    /// Image URL prefix
    #[arg(long)]
    base_url: Option<String>,

    /// Number of images available
    #[arg(long)]
    image_count: Option<u32>,

    /// Add an acute/obtuse caption to SVG output
    #[arg(long)]
    caption: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = session_options(&cli)?;
    let mut session = Session::with_image(options, cli.image)?;
    for &tap in &cli.taps {
        session.tap(tap);
    }
    if cli.stdin {
        let stdin = std::io::stdin();
        run_events(&mut session, stdin.lock())?;
    }

    let output = match cli.format {
        Format::Text => render_text(&session),
        Format::Json => serde_json::to_string_pretty(&session.snapshot())
            .context("failed to serialize session")?,
        Format::Svg => session.svg(),
    };

    if let Some(path) = cli.output {
        std::fs::write(&path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(output.as_bytes())
            .context("write failed")?;
        if !output.ends_with('\n') {
            handle.write_all(b"\n").context("write failed")?;
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn session_options(cli: &Cli) -> Result<SessionOptions> {
    let mut options = SessionOptions::default();
    if let Some(path) = &cli.style {
        options.style = load_style(path)?;
    }
    if let Some(size) = cli.size {
        if !(size.is_finite() && size > 0.0) {
            bail!("--size must be a positive number, got {size}");
        }
        options.style.surface_size = size;
    }
    if cli.caption {
        options.style.show_angles = true;
    }
    if let Some(url) = &cli.base_url {
        options.images.base_url = url.clone();
    }
    if let Some(count) = cli.image_count {
        options.images.count = count;
    }
    Ok(options)
}

fn load_style(path: &Path) -> Result<OverlayStyle> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    OverlayStyle::from_json(&json).with_context(|| format!("bad style file {}", path.display()))
}

/// Apply line-oriented events; blank lines and `#` comments are skipped.
fn run_events(session: &mut Session, input: impl BufRead) -> Result<()> {
    for (n, line) in input.lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        let event = line.trim();
        if event.is_empty() || event.starts_with('#') {
            continue;
        }
        apply_event(session, event).with_context(|| format!("line {}: {event:?}", n + 1))?;
    }
    Ok(())
}

fn apply_event(session: &mut Session, event: &str) -> Result<()> {
    if event.eq_ignore_ascii_case("reset") {
        session.reset();
        return Ok(());
    }
    if let Some(rest) = event.strip_prefix("image") {
        let index: u32 = rest.trim().parse().context("expected \"image N\"")?;
        session.select_image(index)?;
        return Ok(());
    }
    let tap: Point = event.parse()?;
    if session.tap(tap).is_empty() {
        log::warn!("tap {event:?} ignored: both segments already drawn");
    }
    Ok(())
}

fn render_text(session: &Session) -> String {
    let angles = session.angles();
    format!(
        "image: {} ({})\npoints: {}/{}\nacute: {}°\nobtuse: {}°\n",
        session.image_index(),
        session.image_url(),
        session.points().len(),
        tapangle_core::MAX_POINTS,
        format_degrees(angles.small),
        format_degrees(angles.large)
    )
}
