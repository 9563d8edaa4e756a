use anyhow::{Context, Result};
use argh::FromArgs;
use kukaku::persist::{load_layout, StderrNotifier};
use kukaku::{CanvasLayout, LayoutModel, Settings, Size, ZoneRect};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Edit canvas zone layouts and hand them to the tiling engine.
struct Args {
    /// settings file (default: <config dir>/kukaku/settings.json)
    #[argh(option)]
    config: Option<PathBuf>,

    /// current work area, e.g. 2560x1400
    #[argh(option)]
    work_area: Option<Size>,

    /// resolution of the screen hosting the work area, e.g. 2560x1440
    #[argh(option)]
    screen: Option<Size>,

    /// where the applied layout is written
    #[argh(option)]
    output: Option<PathBuf>,

    #[argh(subcommand)]
    command: SubCommand,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    New(NewCommand),
    Show(ShowCommand),
    AddZone(AddZoneCommand),
    RemoveZone(RemoveZoneCommand),
    Rescale(RescaleCommand),
}

#[derive(FromArgs)]
/// Create an empty canvas layout and save it.
#[argh(subcommand, name = "new")]
struct NewCommand {
    /// layout name
    #[argh(positional)]
    name: String,
}

#[derive(FromArgs)]
/// Print a layout as it appears on the current work area.
#[argh(subcommand, name = "show")]
struct ShowCommand {
    /// layout file
    #[argh(positional)]
    file: PathBuf,
}

#[derive(FromArgs)]
/// Append a zone to a layout and save it.
#[argh(subcommand, name = "add-zone")]
struct AddZoneCommand {
    /// layout file
    #[argh(positional)]
    file: PathBuf,
    /// left edge
    #[argh(positional)]
    x: i32,
    /// top edge
    #[argh(positional)]
    y: i32,
    /// zone width
    #[argh(positional)]
    width: i32,
    /// zone height
    #[argh(positional)]
    height: i32,
}

#[derive(FromArgs)]
/// Remove the zone at an index and save the layout.
#[argh(subcommand, name = "remove-zone")]
struct RemoveZoneCommand {
    /// layout file
    #[argh(positional)]
    file: PathBuf,
    /// zone index, starting at 0
    #[argh(positional)]
    index: usize,
}

#[derive(FromArgs)]
/// Fit a layout to the current work area and save it.
#[argh(subcommand, name = "rescale")]
struct RescaleCommand {
    /// layout file
    #[argh(positional)]
    file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Args = argh::from_env();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    }
    .with_overrides(args.work_area, args.screen, args.output);

    tracing::debug!("Settings: {:?}", settings);

    run(args.command, &settings)
}

fn run(command: SubCommand, settings: &Settings) -> Result<()> {
    match command {
        SubCommand::New(cmd) => {
            let layout = CanvasLayout::new(cmd.name, settings.work_area);
            save(&layout, settings)?;
            println!("{}", kukaku_ipc::format_guid(&layout.id()));
        }
        SubCommand::Show(cmd) => {
            let layout = open(&cmd.file, settings)?;
            print_layout(&layout);
        }
        SubCommand::AddZone(cmd) => {
            let mut layout = open(&cmd.file, settings)?;
            layout.add_zone(ZoneRect::new(cmd.x, cmd.y, cmd.width, cmd.height));
            save(&layout, settings)?;
        }
        SubCommand::RemoveZone(cmd) => {
            let mut layout = open(&cmd.file, settings)?;
            layout.remove_zone_at(cmd.index)?;
            save(&layout, settings)?;
        }
        SubCommand::Rescale(cmd) => {
            let layout = open(&cmd.file, settings)?;
            if !layout.is_scaled() {
                tracing::info!("Layout '{}' already fits {}", layout.name(), settings.work_area);
            }
            save(&layout, settings)?;
        }
    }
    Ok(())
}

fn open(path: &std::path::Path, settings: &Settings) -> Result<CanvasLayout> {
    load_layout(path, settings.work_area)
        .with_context(|| format!("Failed to load layout: {}", path.display()))
}

fn save(layout: &CanvasLayout, settings: &Settings) -> Result<()> {
    if !layout.persist(settings, &settings.screen_info(), &StderrNotifier) {
        anyhow::bail!("layout was not saved");
    }
    Ok(())
}

fn print_layout(layout: &CanvasLayout) {
    println!("{} {}", kukaku_ipc::format_guid(&layout.id()), layout.name());
    println!("  type: {}", layout.layout_type().as_str());
    println!("  work area: {}", layout.reference_work_area());
    let screen_info = layout.screen_info();
    if !screen_info.is_empty() {
        println!("  {}", screen_info);
    }
    if layout.is_scaled() {
        println!("  scaled to the current work area");
    }
    for (i, zone) in layout.zones().iter().enumerate() {
        println!(
            "  [{}] x={} y={} width={} height={}",
            i, zone.x, zone.y, zone.width, zone.height
        );
    }
}
