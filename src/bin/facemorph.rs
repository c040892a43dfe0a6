use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "facemorph", version)]
struct Cli {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Log per-frame progress.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog entries.
    List,
    /// Generate one sequence between two expressions.
    Sequence(SequenceArgs),
    /// Generate sequences for every ordered pair plus a summary report.
    All(AllArgs),
    /// Print the active catalog as JSON.
    DumpCatalog,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Catalog JSON file (defaults to the built-in line catalog).
    #[arg(long, global = true, conflicts_with = "swatches")]
    catalog: Option<PathBuf>,

    /// Use the built-in emoji swatch catalog.
    #[arg(long, global = true)]
    swatches: bool,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Intervals per sequence (frames = steps + 1).
    #[arg(long, default_value_t = facemorph::DEFAULT_STEPS)]
    steps: u32,

    /// Output directory.
    #[arg(long, default_value = "expression_interpolations")]
    out: PathBuf,

    /// Write metadata only, skip PNG rendering.
    #[arg(long)]
    no_render: bool,

    /// Output image edge length in pixels.
    #[arg(long, default_value_t = facemorph::CANVAS_SIZE)]
    size: u32,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    /// Source expression name.
    #[arg(long)]
    from: String,

    /// Target expression name.
    #[arg(long)]
    to: String,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct AllArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// Generate pairs on a worker pool.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count (implies --parallel).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = load_catalog(&cli.catalog)?;
    match cli.cmd {
        Command::List => cmd_list(&catalog),
        Command::Sequence(args) => cmd_sequence(&catalog, args),
        Command::All(args) => cmd_all(&catalog, args),
        Command::DumpCatalog => {
            println!("{}", catalog.to_json_pretty()?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(args: &CatalogArgs) -> anyhow::Result<facemorph::Catalog> {
    if args.swatches {
        return Ok(facemorph::Catalog::builtin_swatches());
    }
    let Some(path) = &args.catalog else {
        return Ok(facemorph::Catalog::builtin());
    };
    let f = File::open(path).with_context(|| format!("open catalog '{}'", path.display()))?;
    facemorph::Catalog::from_json_reader(BufReader::new(f))
        .with_context(|| format!("load catalog '{}'", path.display()))
}

type Renderer = Box<dyn facemorph::FrameRenderer>;

fn make_renderer(output: &OutputArgs) -> anyhow::Result<Option<Renderer>> {
    if output.no_render {
        return Ok(None);
    }
    let settings = facemorph::RenderSettings {
        canvas: facemorph::Canvas::new(output.size, output.size)?,
    };
    let renderer = facemorph::create_renderer(facemorph::BackendKind::Cpu, &settings)
        .context("create cpu renderer")?;
    Ok(Some(renderer))
}

fn write_one(
    out: &Path,
    seq: &facemorph::Sequence,
    renderer: &mut Option<Renderer>,
) -> anyhow::Result<PathBuf> {
    let renderer = renderer
        .as_deref_mut()
        .map(|r| r as &mut dyn facemorph::FrameRenderer);
    Ok(facemorph::export::write_sequence(out, seq, renderer)?)
}

fn cmd_list(catalog: &facemorph::Catalog) -> anyhow::Result<()> {
    for (i, entry) in catalog.entries().iter().enumerate() {
        let emoji = entry
            .expression
            .swatch
            .as_ref()
            .map(|s| format!(" {}", s.emoji))
            .unwrap_or_default();
        println!(
            "{:>2}. {} ({}){emoji}",
            i + 1,
            entry.name,
            entry.expression.label
        );
    }
    let n = catalog.len();
    println!("{n} x {} = {} sequences", n.saturating_sub(1), n * n.saturating_sub(1));
    Ok(())
}

fn cmd_sequence(catalog: &facemorph::Catalog, args: SequenceArgs) -> anyhow::Result<()> {
    let seq = facemorph::generate_sequence(catalog, &args.from, &args.to, args.output.steps)?;
    let mut renderer = make_renderer(&args.output)?;
    let dir = write_one(&args.output.out, &seq, &mut renderer)?;
    eprintln!("wrote {}", dir.display());
    Ok(())
}

fn cmd_all(catalog: &facemorph::Catalog, args: AllArgs) -> anyhow::Result<()> {
    let config = facemorph::GeneratorConfig {
        steps: args.output.steps,
        threading: facemorph::PairThreading {
            parallel: args.parallel || args.threads.is_some(),
            threads: args.threads,
        },
    };
    let generator = facemorph::SequenceGenerator::new(catalog, config)?;
    let pairs = generator.generate_all_pairs()?;

    let mut renderer = make_renderer(&args.output)?;
    for seq in pairs.iter() {
        write_one(&args.output.out, seq, &mut renderer)?;
    }

    let canvas = facemorph::Canvas::new(args.output.size, args.output.size)?;
    let report = facemorph::GenerationReport::new(catalog, &pairs, args.output.steps, canvas);
    let path = facemorph::export::write_report(&args.output.out, &report)?;

    eprintln!(
        "wrote {} sequences ({} frames), report {}",
        pairs.len(),
        pairs.total_frames(),
        path.display()
    );
    Ok(())
}
