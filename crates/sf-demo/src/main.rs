// ABOUTME: Demo entry point for the splitframe layout engine.
// ABOUTME: Builds a nine-region frame, exercises dividers and prints the resulting bounds as JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use sf_core::{FrameConfig, Orientation, Point, Rect};
use sf_layout::{BorderSplitPane, Component, ComponentId, Level, Orientable, Region, Row};

/// Stand-in for a tool window; remembers what the frame told it
#[derive(Debug, Serialize)]
struct DemoPanel {
    #[serde(skip)]
    id: ComponentId,
    name: String,
    bounds: Rect,
    orientation: Option<Orientation>,
}

impl DemoPanel {
    fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ComponentId(id),
            name: name.into(),
            bounds: Rect::default(),
            orientation: None,
        }
    }
}

impl Component for DemoPanel {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn as_orientable(&mut self) -> Option<&mut dyn Orientable> {
        Some(self)
    }
}

impl Orientable for DemoPanel {
    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = Some(orientation);
    }
}

#[derive(Debug, Serialize)]
struct RegionReport<'a> {
    region: String,
    panel: &'a str,
    frame_bounds: Option<Rect>,
    orientation: Option<Orientation>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    width: i32,
    height: i32,
    regions: Vec<RegionReport<'a>>,
}

fn report(frame: &BorderSplitPane<DemoPanel>) -> Report<'_> {
    let regions = Region::ALL
        .into_iter()
        .filter_map(|region| {
            let panel = frame.component(region)?;
            Some(RegionReport {
                region: region.to_string(),
                panel: &panel.name,
                frame_bounds: frame.region_bounds(region),
                orientation: panel.orientation,
            })
        })
        .collect();

    Report {
        width: frame.bounds().width,
        height: frame.bounds().height,
        regions,
    }
}

fn print_report(label: &str, frame: &BorderSplitPane<DemoPanel>) -> Result<()> {
    let json = serde_json::to_string_pretty(&report(frame)).context("Failed to serialize report")?;
    println!("# {label}\n{json}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting splitframe demo");

    let config = FrameConfig::load_or_default();
    tracing::info!(
        "Loaded config: {}x{}, dividers {}px",
        config.window_width,
        config.window_height,
        config.divider_thickness
    );

    let mut frame = BorderSplitPane::with_config(&config);
    let width = i32::try_from(config.window_width).context("Window width too large")?;
    let height = i32::try_from(config.window_height).context("Window height too large")?;
    frame.set_bounds(Rect::new(0, 0, width, height));

    let placements = [
        (Region::Center, "editor"),
        (Region::West, "project"),
        (Region::East, "structure"),
        (Region::North, "toolbar"),
        (Region::South, "console"),
        (Region::NorthWest, "bookmarks"),
        (Region::NorthEast, "notifications"),
        (Region::SouthWest, "problems"),
        (Region::SouthEast, "terminal"),
    ];
    for (id, (region, name)) in (1..).zip(placements) {
        if let Some(previous) = frame.add(DemoPanel::new(id, name), region) {
            tracing::warn!("{} replaced {} in {}", name, previous.name, region);
        }
    }
    tracing::info!("Placed {} panels", placements.len());
    print_report("initial layout", &frame)?;

    // Widen the project panel by dragging its divider 60px to the right.
    let west = frame
        .region_bounds(Region::West)
        .context("West region has no bounds")?;
    let grab = Point::new(west.right() + 1, west.y + west.height / 2);
    match frame.divider_at(grab) {
        Some((level, index)) => {
            frame.press_divider(level, index, grab)?;
            frame.drag_divider(level, index, Point::new(grab.x + 60, grab.y))?;
            frame.release_divider(level, index)?;
            tracing::info!("Dragged {:?} divider {} by 60px", level, index);
        }
        None => tracing::warn!("No divider found at {:?}", grab),
    }

    // Collapse the bottom row with the outer quick-hide divider.
    let outer_dividers = frame.outer().divider_count();
    if let Some(last) = outer_dividers.checked_sub(1) {
        let collapsed = frame.click_divider(Level::Outer, last)?;
        tracing::info!("Bottom row quick-hide: {:?}", collapsed);
    }
    print_report("after drag and quick-hide", &frame)?;

    if let Some(panel) = frame.remove(ComponentId(3)) {
        tracing::info!("Removed {}", panel.name);
    }
    let middle = frame
        .row(Row::Middle)
        .context("Middle row missing from frame")?;
    tracing::info!(
        "Middle row still has {} slots and {} dividers",
        middle.pane_count(),
        middle.divider_count()
    );
    print_report("after removing structure panel", &frame)?;

    Ok(())
}
