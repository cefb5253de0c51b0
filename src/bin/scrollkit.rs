use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a site content JSON and report section presence.
    Validate(ValidateArgs),
    /// Drive the page headlessly and print frame data.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input site content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input site content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Simulated wall-clock duration in seconds (60Hz ticks).
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Constant wheel delta fed per tick, in pixels.
    #[arg(long, default_value_t = 30.0)]
    wheel: f64,

    /// Viewport size as WIDTHxHEIGHT.
    #[arg(long, default_value = "1280x800")]
    viewport: String,

    /// Stream every frame as a JSON line instead of a final summary.
    #[arg(long)]
    dump_frames: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_content(path: &Path) -> anyhow::Result<scrollkit::SiteContent> {
    let f = File::open(path).with_context(|| format!("open site content '{}'", path.display()))?;
    let content = scrollkit::SiteContent::from_json_reader(BufReader::new(f))
        .with_context(|| "parse site content JSON")?;
    Ok(content)
}

fn parse_viewport(s: &str) -> anyhow::Result<scrollkit::Viewport> {
    let (w, h) = s
        .split_once('x')
        .with_context(|| format!("viewport '{s}' is not WIDTHxHEIGHT"))?;
    let width: f64 = w.parse().with_context(|| "parse viewport width")?;
    let height: f64 = h.parse().with_context(|| "parse viewport height")?;
    Ok(scrollkit::Viewport::new(width, height)?)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let content = read_content(&args.in_path)?;

    let sections = [
        ("hero", content.hero.is_empty()),
        ("about", content.about.is_empty()),
        ("showcase", content.showcase.is_empty()),
        ("gallery", content.gallery.is_empty()),
        ("schedule", content.schedule.is_empty()),
        ("footer", content.footer.is_empty()),
    ];

    println!("{}: ok", args.in_path.display());
    for (name, empty) in sections {
        let state = if empty { "disabled (empty)" } else { "present" };
        println!("  {name:<10} {state}");
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let content = read_content(&args.in_path)?;
    let viewport = parse_viewport(&args.viewport)?;

    let mut page = scrollkit::Page::new(content, viewport)?;

    // Headless run: pretend every tracked asset loads immediately.
    let urls: Vec<String> = page
        .content()
        .showcase
        .cube_textures
        .iter()
        .cloned()
        .collect();
    for url in urls {
        page.mark_asset_ready(&url);
    }

    let dt = 1.0 / 60.0;
    let ticks = (args.seconds / dt).ceil() as u64;
    let stdout = std::io::stdout();

    let mut cue_batches = 0u64;
    let mut last_frame = None;
    for _ in 0..ticks {
        page.wheel(args.wheel);
        let frame = page.advance(dt);

        if args.dump_frames {
            serde_json::to_writer(stdout.lock(), &frame)
                .with_context(|| "write frame JSON")?;
            println!();
        }

        cue_batches += [
            frame.hero.as_ref().map(|h| h.intro.is_some()),
            frame.about.as_ref().map(|a| a.content_cues.is_some()),
            frame.about.as_ref().map(|a| a.stat_cues.is_some()),
            frame.showcase.as_ref().map(|s| s.list_cues.is_some()),
            frame.gallery.as_ref().map(|g| g.grid_cues.is_some()),
            frame.schedule.as_ref().map(|s| s.row_cues.is_some()),
        ]
        .iter()
        .filter(|fired| **fired == Some(true))
        .count() as u64;

        last_frame = Some(frame);
    }

    if !args.dump_frames {
        let final_y = last_frame.as_ref().map(|f| f.scroll_y).unwrap_or(0.0);
        eprintln!(
            "simulated {ticks} ticks: scroll {final_y:.1}/{:.1}px, {cue_batches} entrance batches fired",
            page.document_height()
        );
    }
    Ok(())
}
