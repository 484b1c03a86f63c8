use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::builder::TypedValueParser as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ringlet", version)]
struct Cli {
    /// Log builder and rasterizer events to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the geometry of one widget as JSON.
    Geometry(GeometryArgs),
    /// Render one widget as a PNG.
    Render(RenderArgs),
    /// Render every widget kind into a directory.
    Gallery(GalleryArgs),
}

#[derive(Parser, Debug)]
struct ShapeArgs {
    /// Widget kind.
    #[arg(long, value_parser = kind_parser())]
    kind: ringlet::ShapeKind,

    /// Progress fraction; values outside [0, 1] are clamped.
    #[arg(long, allow_negative_numbers = true)]
    progress: f64,

    /// Bounding box width.
    #[arg(long, default_value_t = 150.0)]
    width: f64,

    /// Bounding box height (defaults to the width, or 30 for bar and milestone).
    #[arg(long)]
    height: Option<f64>,

    /// JSON file overriding fields of the kind's preset style.
    #[arg(long)]
    style: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GeometryArgs {
    #[command(flatten)]
    shape: ShapeArgs,

    /// Print the flattened paint layers instead of the shape geometry.
    #[arg(long)]
    layers: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    shape: ShapeArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Progress fraction shared by every widget.
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.3)]
    progress: f64,

    /// Square cell size; bars and milestones use this width and a height of 30.
    #[arg(long, default_value_t = 150)]
    size: u32,

    /// Output directory, one PNG per kind.
    #[arg(long)]
    out_dir: PathBuf,
}

fn kind_parser() -> impl clap::builder::TypedValueParser<Value = ringlet::ShapeKind> {
    clap::builder::PossibleValuesParser::new(ringlet::ShapeKind::ALL.map(ringlet::ShapeKind::name))
        .try_map(|s| s.parse::<ringlet::ShapeKind>())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Geometry(args) => cmd_geometry(args),
        Command::Render(args) => cmd_render(args),
        Command::Gallery(args) => cmd_gallery(args),
    }
}

fn is_strip(kind: ringlet::ShapeKind) -> bool {
    matches!(kind, ringlet::ShapeKind::Bar | ringlet::ShapeKind::Milestone)
}

fn read_style(kind: ringlet::ShapeKind, path: Option<&Path>) -> anyhow::Result<ringlet::StyleConfig> {
    let base = kind.default_style();
    let Some(path) = path else {
        return Ok(base);
    };
    let f = File::open(path).with_context(|| format!("open style '{}'", path.display()))?;
    let overrides = ringlet::StyleOverrides::from_reader(BufReader::new(f))
        .with_context(|| format!("parse style '{}'", path.display()))?;
    Ok(overrides.apply(base))
}

fn build_shape(args: &ShapeArgs) -> anyhow::Result<(ringlet::Geometry, ringlet::Size)> {
    let kind = args.kind;
    let style = read_style(kind, args.style.as_deref())?;
    let height = args
        .height
        .unwrap_or(if is_strip(kind) { 30.0 } else { args.width });
    let size = ringlet::Size::new(args.width, height);
    let geometry = ringlet::Widget { kind, style }
        .build(args.progress, size)
        .with_context(|| format!("build {kind}"))?;
    Ok((geometry, size))
}

fn cmd_geometry(args: GeometryArgs) -> anyhow::Result<()> {
    let (geometry, _) = build_shape(&args.shape)?;
    let stdout = std::io::stdout().lock();
    let written = if args.layers {
        serde_json::to_writer_pretty(stdout, &geometry.layers())
    } else {
        serde_json::to_writer_pretty(stdout, &geometry)
    };
    written.with_context(|| "write geometry JSON")?;
    println!();
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (geometry, size) = build_shape(&args.shape)?;
    let mut raster = ringlet::CpuRasterizer::default();
    let frame = raster.render(
        &geometry,
        size.width.ceil() as u32,
        size.height.ceil() as u32,
    )?;
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut raster = ringlet::CpuRasterizer::default();
    for kind in ringlet::ShapeKind::ALL {
        let height = if is_strip(kind) { 30 } else { args.size };
        let size = ringlet::Size::new(f64::from(args.size), f64::from(height));
        let geometry = ringlet::Widget::new(kind)
            .build(args.progress, size)
            .with_context(|| format!("build {kind}"))?;
        let frame = raster.render(&geometry, args.size, height)?;
        let out = args.out_dir.join(format!("{kind}.png"));
        write_png(&out, &frame)?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn write_png(out: &Path, frame: &ringlet::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}
