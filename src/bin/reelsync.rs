use std::{
    fs::File,
    io::BufReader,
    ops::ControlFlow,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reelsync", version)]
struct Cli {
    /// Log engine transitions to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the mode, total duration and segment windows of a timeline.
    Inspect(InspectArgs),
    /// Print the segment playing at a given time.
    At(AtArgs),
    /// Play a timeline in real time with the internal clock.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scene catalog JSON (array of `{ "title", "description" }`).
    #[arg(long)]
    scenes: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct AtArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Time in seconds.
    #[arg(long, allow_hyphen_values = true)]
    time: f64,

    /// Scene catalog JSON.
    #[arg(long)]
    scenes: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scene catalog JSON.
    #[arg(long)]
    scenes: Option<PathBuf>,

    /// Frame rate of the preview loop.
    #[arg(long, default_value_t = reelsync::DEFAULT_FRAME_RATE)]
    fps: f64,

    /// Start position in seconds.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Stop after this many seconds of playback position.
    #[arg(long)]
    until: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::At(args) => cmd_at(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "reelsync=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_timeline(path: &Path) -> anyhow::Result<reelsync::Timeline> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open timeline '{}'", path.display()))?;
    let timeline = reelsync::Timeline::from_json_str(&text)
        .with_context(|| format!("load timeline '{}'", path.display()))?;
    Ok(timeline)
}

fn read_scenes(path: Option<&Path>) -> anyhow::Result<Vec<reelsync::SceneInfo>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let f = File::open(path).with_context(|| format!("open scenes '{}'", path.display()))?;
    let scenes: Vec<reelsync::SceneInfo> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse scenes JSON")?;
    Ok(scenes)
}

fn warn_dangling(timeline: &reelsync::Timeline, scenes: &[reelsync::SceneInfo]) {
    if scenes.is_empty() {
        return;
    }
    for index in timeline.dangling_scene_refs(scenes.len()) {
        tracing::warn!(index, "timeline references a scene missing from the catalog");
    }
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let timeline = read_timeline(&args.in_path)?;
    let scenes = read_scenes(args.scenes.as_deref())?;
    warn_dangling(&timeline, &scenes);

    let total = reelsync::total_duration(&timeline);
    println!("mode:     {:?}", timeline.mode);
    println!("segments: {}", timeline.len());
    println!("duration: {} ({total:.3}s)", reelsync::format_clock(total));

    let windows = reelsync::segment_windows(&timeline);
    for (i, (seg, window)) in timeline.segments.iter().zip(windows).enumerate() {
        let title = reelsync::display_title(&scenes, seg.scene_index);
        match window {
            Some(w) => println!("  #{i:<3} {:>8.3} .. {:>8.3}  {title}", w.start, w.end()),
            None => println!("  #{i:<3} {:>8} .. {:>8}  {title} (unplaced)", "-", "-"),
        }
    }
    Ok(())
}

fn cmd_at(args: AtArgs) -> anyhow::Result<()> {
    let timeline = read_timeline(&args.in_path)?;
    let scenes = read_scenes(args.scenes.as_deref())?;

    match reelsync::resolve_active(args.time, &timeline) {
        Some(i) => {
            let scene = timeline.segments[i].scene_index;
            println!(
                "segment {i} (scene {scene}: {})",
                reelsync::display_title(&scenes, scene)
            );
        }
        None => println!("none"),
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let timeline = read_timeline(&args.in_path)?;
    let scenes = read_scenes(args.scenes.as_deref())?;
    warn_dangling(&timeline, &scenes);
    if timeline.is_empty() {
        anyhow::bail!("timeline '{}' has no segments", args.in_path.display());
    }

    let opts = reelsync::PlaybackOpts {
        frame_rate: args.fps,
        max_frame_delta_secs: Some(0.25),
    };
    let mut ctl = reelsync::PlaybackController::with_scheduler(
        &timeline,
        None,
        reelsync::FrameQueue::new(),
        opts,
    );
    ctl.seek(args.from);
    ctl.play();

    let describe = |index: Option<usize>| match index {
        Some(i) => {
            let scene = timeline.segments[i].scene_index;
            format!("#{i} {}", reelsync::display_title(&scenes, scene))
        }
        None => "(nothing)".to_owned(),
    };

    let mut shown = ctl.active_segment_index();
    println!(
        "{} / {}  {}",
        reelsync::format_clock(ctl.current_time()),
        reelsync::format_clock(ctl.duration()),
        describe(shown)
    );

    let stats = reelsync::run_paced(&mut ctl, |state| {
        if state.active_segment_index != shown {
            shown = state.active_segment_index;
            println!(
                "{} / {}  {}",
                reelsync::format_clock(state.current_time),
                reelsync::format_clock(state.duration),
                describe(shown)
            );
        }
        match args.until {
            Some(limit) if state.current_time >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    });

    eprintln!(
        "{} at {} after {} frames",
        if stats.interrupted { "stopped" } else { "finished" },
        reelsync::format_clock(ctl.current_time()),
        stats.frames
    );
    Ok(())
}
