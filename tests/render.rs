use cairo::{Context, Format, ImageSurface};
use stampboard::Config;
use stampboard::draw::StampCache;
use stampboard::input::{DrawingSession, Tool};
use stampboard::output::render_surface;
use stampboard::ui::{ControlLayout, render_controls};

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// Returns (r, g, b, a) at `(x, y)` of an ARGB32 surface.
fn rgba_at(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let px = u32::from_ne_bytes([
        data[y * stride + x * 4],
        data[y * stride + x * 4 + 1],
        data[y * stride + x * 4 + 2],
        data[y * stride + x * 4 + 3],
    ]);
    (
        (px >> 16) as u8,
        (px >> 8) as u8,
        px as u8,
        (px >> 24) as u8,
    )
}

fn small_config() -> Config {
    let mut config = Config::default();
    config.canvas.width = 200;
    config.canvas.height = 225;
    config
}

#[test]
fn render_controls_draws_for_open_and_closed_palette() {
    let mut session = DrawingSession::default();
    for _ in 0..2 {
        let (mut surface, ctx) = surface_with_context(390, 450);
        let layout = ControlLayout::new(390.0, 450.0);
        render_controls(&ctx, &session, &layout);
        drop(ctx);
        assert!(surface_has_pixels(&mut surface));
        session.toggle_palette();
    }
}

#[test]
fn open_palette_draws_entries_above_strip() {
    let mut session = DrawingSession::default();
    let layout = ControlLayout::new(390.0, 450.0);
    let (x, y) = layout.palette_centers(4)[0];

    let (mut closed, ctx) = surface_with_context(390, 450);
    render_controls(&ctx, &session, &layout);
    drop(ctx);
    assert_eq!(rgba_at(&mut closed, x as usize, y as usize).3, 0);

    session.toggle_palette();
    let (mut open, ctx) = surface_with_context(390, 450);
    render_controls(&ctx, &session, &layout);
    drop(ctx);
    assert_eq!(rgba_at(&mut open, x as usize, y as usize), (255, 0, 0, 255));
}

#[test]
fn render_surface_draws_strokes_and_stamps() {
    let config = small_config();
    let mut session = config.session().unwrap();
    session.on_pan_start(10.0, 20.0);
    session.on_pan_move(150.0, 20.0);
    session.on_pan_end();
    session.set_tool(Tool::Stamp);
    session.select_palette_color(2).unwrap();
    session.on_tap(100.0, 100.0);

    let (mut surface, skipped) =
        render_surface(&session, &config, &mut StampCache::new()).unwrap();
    assert_eq!(skipped, 0);
    assert_eq!(rgba_at(&mut surface, 80, 20), (255, 0, 0, 255));
    assert_eq!(rgba_at(&mut surface, 100, 100), (0, 0, 255, 255));
    // Background elsewhere on the canvas.
    assert_eq!(rgba_at(&mut surface, 5, 150), (255, 255, 255, 255));
}

#[test]
fn canvas_objects_are_clipped_above_the_strip() {
    let mut config = small_config();
    config.canvas.show_controls = true;
    let mut session = config.session().unwrap();
    session.on_pan_start(100.0, 150.0);
    session.on_pan_move(100.0, 400.0);
    session.on_pan_end();

    let (mut surface, _) = render_surface(&session, &config, &mut StampCache::new()).unwrap();
    // Canvas is 200 px tall; the strip below keeps its own background.
    assert_eq!(rgba_at(&mut surface, 100, 190), (255, 0, 0, 255));
    assert_eq!(rgba_at(&mut surface, 5, 220), (237, 237, 233, 255));
}
