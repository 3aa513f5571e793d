use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use layoutkit::{
    find_route, init_logging, validate_network, Config, ConstrainedDragService, EntityKind,
    LayoutDocument, Point, TransportPathService, BUILD_DATE, VERSION,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "layoutkit")]
#[command(about = "Constrained drags and transport routing for factory layouts")]
#[command(version)]
struct Cli {
    /// Settings file (TOML or JSON); defaults to the platform config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the transport network for structural issues
    Validate {
        /// Layout document (JSON)
        document: PathBuf,
    },

    /// Shortest route between two stations or waypoints
    Route {
        document: PathBuf,
        from: String,
        to: String,
    },

    /// Rebuild the closed loop for a station group
    Loop {
        document: PathBuf,
        group: String,

        /// Write the result here instead of overwriting the document
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Plan a constrained drag of an entity to (x, y)
    Drag {
        document: PathBuf,

        /// eot_crane, jib_crane, conveyor, zone or agv_path
        kind: EntityKind,
        id: String,

        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// SVG path data for an entity's constraint guide
    Guide {
        document: PathBuf,
        kind: EntityKind,
        id: String,
    },

    /// Print version and build date
    Version,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn load_document(path: &Path) -> anyhow::Result<LayoutDocument> {
    LayoutDocument::load(path).with_context(|| format!("reading {}", path.display()))
}

fn run_validate(document: &Path) -> anyhow::Result<()> {
    let document = load_document(document)?;
    let issues = validate_network(&document.network);
    for issue in &issues {
        if issue.is_error() {
            warn!("{}", issue.message);
        }
        println!("{issue}");
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("network has {} issue(s)", issues.len());
    }
    info!("Network '{}' checked, {} issue(s)", document.network.name, issues.len());
    Ok(())
}

fn run_route(document: &Path, from: &str, to: &str) -> anyhow::Result<()> {
    let document = load_document(document)?;
    let network = &document.network;

    let route = find_route(network, from, to).ok_or_else(|| anyhow!("no route from {from} to {to}"))?;
    for id in &route.points {
        let name = network.point_name(id).unwrap_or_default();
        println!("{id}\t{name}");
    }
    println!("distance\t{:.3}", route.distance);
    Ok(())
}

fn run_loop(
    path: &Path,
    group: &str,
    output: Option<PathBuf>,
    config: &Config,
) -> anyhow::Result<()> {
    let mut document = load_document(path)?;

    let tracks = TransportPathService::new(&mut document.network, config.network.clone())
        .recreate_loop(group)?;
    if tracks.is_empty() {
        bail!("group '{group}' has no stations");
    }

    let target = output.unwrap_or_else(|| path.to_path_buf());
    document.save(&target)?;
    println!("{} track(s) written to {}", tracks.len(), target.display());
    Ok(())
}

fn run_drag(
    document: &Path,
    kind: EntityKind,
    id: &str,
    target: Point,
    config: &Config,
) -> anyhow::Result<()> {
    let document = load_document(document)?;
    let layout = &document.layout;
    let entity = layout
        .entity(kind, id)
        .ok_or_else(|| anyhow!("{kind} {id} not found in layout"))?;
    let service = ConstrainedDragService::new(layout, config.collision.clone());

    for warning in service.collision_warnings(entity, target) {
        println!("warning\t{warning}");
    }
    let update = service.plan_move(entity, target)?;
    println!("{}", serde_json::to_string(&update)?);
    Ok(())
}

fn run_guide(document: &Path, kind: EntityKind, id: &str) -> anyhow::Result<()> {
    let document = load_document(document)?;
    let layout = &document.layout;
    let entity = layout
        .entity(kind, id)
        .ok_or_else(|| anyhow!("{kind} {id} not found in layout"))?;
    let guide = ConstrainedDragService::with_defaults(layout)
        .constraint_guide(entity)
        .ok_or_else(|| anyhow!("{kind} {id} has no resolvable constraint"))?;
    println!("{}", guide.to_svg_path());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    match cli.command {
        Commands::Validate { document } => run_validate(&document),
        Commands::Route { document, from, to } => run_route(&document, &from, &to),
        Commands::Loop {
            document,
            group,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            run_loop(&document, &group, output, &config)
        }
        Commands::Drag {
            document,
            kind,
            id,
            x,
            y,
        } => {
            let config = load_config(cli.config.as_deref())?;
            run_drag(&document, kind, &id, Point::new(x, y), &config)
        }
        Commands::Guide { document, kind, id } => run_guide(&document, kind, &id),
        Commands::Version => {
            println!("layoutkit {VERSION} (built {BUILD_DATE})");
            Ok(())
        }
    }
}
