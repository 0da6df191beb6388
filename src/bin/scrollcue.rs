use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollcue::{
    Document, FixedMetricsLayout, FrameInput, Markup, NodeId, Runtime, RuntimeConfig, ScopeHandle,
    Selector, Viewport,
};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollcue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a markup document and print declarations, diagnostics and timelines as JSON.
    Scan(ScanArgs),
    /// Scan, replay a sequence of scroll positions and print the resulting inline styles.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Input markup JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Runtime settings JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scan root selector; the markup root is used when omitted.
    #[arg(long)]
    root: Option<String>,

    /// Viewport width in px.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in px.
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Report a coarse (touch) pointer.
    #[arg(long)]
    coarse: bool,

    /// Report a reduced-motion preference.
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Parser, Debug)]
struct ScanArgs {
    #[command(flatten)]
    page: PageArgs,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Scroll offsets visited in order, one frame each.
    #[arg(long = "scroll", required = true, num_args = 1.., allow_negative_numbers = true)]
    scroll: Vec<f64>,

    /// Seconds between frames.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Extra seconds to run at the last offset so running timelines settle.
    #[arg(long, default_value_t = 5.0)]
    settle: f64,

    /// Add the `loaded` class to the document root before the first frame.
    #[arg(long)]
    loaded: bool,
}

struct Page {
    runtime: Runtime,
    doc: Document,
    layout: FixedMetricsLayout,
    scope: ScopeHandle,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Scan(args) => cmd_scan(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_markup(path: &Path) -> anyhow::Result<Markup> {
    let f = File::open(path).with_context(|| format!("open markup '{}'", path.display()))?;
    let markup: Markup =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse markup JSON")?;
    Ok(markup)
}

fn read_config(path: Option<&Path>) -> anyhow::Result<RuntimeConfig> {
    let Some(path) = path else {
        return Ok(RuntimeConfig::default());
    };
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    Ok(RuntimeConfig::from_json(&src)?)
}

fn open_page(args: &PageArgs) -> anyhow::Result<Page> {
    let markup = read_markup(&args.in_path)?;
    let settings = read_config(args.config.as_deref())?;
    let loaded = markup.load()?;
    let mut doc = loaded.doc;
    let layout = FixedMetricsLayout::new(args.width).with_rects(loaded.rects);
    let viewport = Viewport::new(args.width, args.height)
        .with_coarse_pointer(args.coarse)
        .with_reduced_motion(args.reduced_motion);

    let root = match &args.root {
        Some(sel) => {
            let selector = Selector::parse(sel)?;
            let top = doc.root();
            doc.query(top, &selector)
                .with_context(|| format!("no element matches '{sel}'"))?
        }
        None => loaded.top,
    };

    let mut runtime = Runtime::new(settings)?;
    let scope = runtime.initialize(&mut doc, &layout, viewport, root)?;
    Ok(Page {
        runtime,
        doc,
        layout,
        scope,
    })
}

fn describe(doc: &Document, node: NodeId) -> Value {
    json!({
        "node": node,
        "tag": doc.tag(node),
        "class": doc.element(node).map(|el| el.classes.join(" ")),
    })
}

fn cmd_scan(args: ScanArgs) -> anyhow::Result<()> {
    let page = open_page(&args.page)?;
    let scope = page
        .runtime
        .scope(page.scope)
        .context("scan scope disappeared")?;

    let declarations: Vec<Value> = scope
        .declarations()
        .iter()
        .map(|d| {
            json!({
                "element": describe(&page.doc, d.node),
                "config": d.config,
                "timelines": d.handle.timelines,
            })
        })
        .collect();
    let timelines: Vec<Value> = scope
        .scheduled()
        .iter()
        .map(|s| {
            json!({
                "owner": s.owner,
                "duration": s.def.duration,
                "repeat": s.def.repeat,
                "tweens": s.def.tweens.len(),
                "labels": s.def.labels,
                "trigger": s.trigger,
            })
        })
        .collect();

    let out = json!({
        "declarations": declarations,
        "diagnostics": scope.diagnostics(),
        "timelines": timelines,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.dt.is_finite() && args.dt > 0.0,
        "--dt must be a positive number of seconds"
    );
    let mut page = open_page(&args.page)?;
    if args.loaded {
        let root = page.doc.root();
        page.doc.add_class(root, scrollcue::LOADED_CLASS)?;
    }

    let mut last = 0.0;
    for &scroll_y in &args.scroll {
        last = scroll_y;
        page.runtime.tick(
            &mut page.doc,
            &page.layout,
            FrameInput {
                scroll_y,
                dt: args.dt,
            },
        );
    }
    let mut remaining = args.settle.max(0.0);
    while remaining > 0.0 {
        let dt = remaining.min(args.dt);
        remaining -= dt;
        page.runtime.tick(
            &mut page.doc,
            &page.layout,
            FrameInput { scroll_y: last, dt },
        );
    }

    let root = page
        .runtime
        .scope(page.scope)
        .map(|s| s.root)
        .context("scan scope disappeared")?;
    let styled: Vec<Value> = std::iter::once(root)
        .chain(page.doc.descendants(root))
        .filter_map(|node| {
            let style = page.doc.style(node)?;
            if style.is_empty() {
                return None;
            }
            let mut entry = describe(&page.doc, node);
            entry["style"] = json!(style);
            Some(entry)
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&styled)?);
    Ok(())
}
