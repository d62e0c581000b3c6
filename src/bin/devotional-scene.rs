use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

use devotional_scene::{
    DirectoryTarget, ExportOutcome, PortraitHost, RenderOpts, SceneLayout, SceneSize,
};

#[derive(Parser, Debug)]
#[command(name = "devotional-scene", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the portrait and save it as a PNG.
    Render(RenderArgs),
    /// Print the deterministic scene geometry as JSON.
    Layout(SizeArgs),
}

#[derive(Parser, Debug)]
struct SizeArgs {
    /// Logical width.
    #[arg(long, default_value_t = 1600)]
    width: u32,

    /// Logical height.
    #[arg(long, default_value_t = 900)]
    height: u32,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    size: SizeArgs,

    /// Device pixel ratio (defaults to `DEVOTIONAL_SCENE_DEVICE_SCALE`, then 1).
    #[arg(long)]
    scale: Option<f64>,

    /// Seed for a reproducible render (defaults to `DEVOTIONAL_SCENE_SEED`, then random).
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the PNG is written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print render statistics as JSON on stdout.
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut opts = RenderOpts::from_env();
    if let Some(scale) = args.scale {
        opts = opts.with_device_scale(scale);
    }
    if let Some(seed) = args.seed {
        opts = opts.with_seed(seed);
    }

    let size = SceneSize::new(args.size.width, args.size.height);
    let mut host = PortraitHost::new(opts);
    let stats = host
        .mount(size)
        .with_context(|| format!("render {}x{}", size.width, size.height))?;

    let mut target = DirectoryTarget::new(&args.out_dir);
    match host.download(&mut target)? {
        ExportOutcome::Saved { bytes } => {
            for path in target.written() {
                let data = std::fs::read(path)
                    .with_context(|| format!("read back '{}'", path.display()))?;
                eprintln!(
                    "wrote {} ({bytes} bytes, sha256 {})",
                    path.display(),
                    sha256_hex(&data)
                );
            }
        }
        ExportOutcome::Empty => eprintln!("nothing to export: zero-area canvas"),
        ExportOutcome::NotReady => anyhow::bail!("render did not finish"),
    }

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}

fn cmd_layout(args: SizeArgs) -> anyhow::Result<()> {
    let layout = SceneLayout::for_size(SceneSize::new(args.width, args.height));
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
