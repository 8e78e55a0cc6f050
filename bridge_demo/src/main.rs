//! Headless bridge demo
//!
//! Drives a bridge over the in-memory host for a few frames. A tiny panel
//! with a text field stands in for the UI library: it reads the input the
//! bridge translated, asks for cursors and publishes draw data.
//!
//! Usage: `bridge_demo [config.toml|config.ron]`

use std::time::Duration;

use ui_bridge::prelude::*;
use ui_bridge::ui::col32;

const PANEL: [f32; 4] = [20.0, 20.0, 220.0, 140.0];
const TEXT_FIELD: [f32; 4] = [40.0, 60.0, 200.0, 84.0];

/// Stand-in for the UI library's frame building
struct DemoPanel {
    text: String,
}

impl DemoPanel {
    fn new() -> Self {
        Self { text: String::new() }
    }

    /// Read input, request a cursor and publish this frame's draw data
    fn build_frame(&mut self, context: &mut Context) {
        let font_texture = context.fonts().tex_id;
        let io = context.io_mut();

        let mouse = io.mouse_pos;
        let over_panel = contains(PANEL, mouse);
        let over_field = contains(TEXT_FIELD, mouse);
        io.want_capture_mouse = over_panel;
        io.want_capture_keyboard = over_field;

        if over_field {
            self.text.extend(io.drain_input_characters());
        } else {
            io.drain_input_characters();
        }
        let display_size = io.display_size;
        let framebuffer_scale = io.display_framebuffer_scale;
        io.end_frame();

        let cursor = if over_field {
            MouseCursor::TextInput
        } else {
            MouseCursor::Arrow
        };
        context.set_mouse_cursor(cursor);

        let mut list = DrawList::new();
        push_rect(&mut list, PANEL, col32(40, 40, 48, 230), PANEL, font_texture);
        let field_color = if over_field {
            col32(90, 90, 120, 255)
        } else {
            col32(70, 70, 80, 255)
        };
        push_rect(&mut list, TEXT_FIELD, field_color, TEXT_FIELD, font_texture);

        context.set_draw_data(DrawData {
            display_pos: Vec2::zeros(),
            display_size,
            framebuffer_scale,
            draw_lists: vec![list],
        });
    }
}

fn contains(rect: [f32; 4], point: Vec2) -> bool {
    point.x >= rect[0] && point.x < rect[2] && point.y >= rect[1] && point.y < rect[3]
}

fn push_rect(list: &mut DrawList, rect: [f32; 4], col: u32, clip_rect: [f32; 4], texture_id: TextureId) {
    let [x0, y0, x1, y1] = rect;
    let vertices = [
        DrawVert::new([x0, y0], [0.0, 0.0], col),
        DrawVert::new([x1, y0], [0.0, 0.0], col),
        DrawVert::new([x1, y1], [0.0, 0.0], col),
        DrawVert::new([x0, y1], [0.0, 0.0], col),
    ];
    list.push_primitive(&vertices, &[0, 1, 2, 0, 2, 3], DrawCmdParams { clip_rect, texture_id });
}

/// Host events delivered before each frame
fn scripted_events(frame: u64) -> Vec<Event> {
    match frame {
        0 => vec![Event::MouseMoved {
            coords: Vec2::new(300.0, 200.0),
        }],
        1 => vec![
            Event::MouseMoved {
                coords: Vec2::new(60.0, 70.0),
            },
            Event::MouseButtonPressed {
                button: MouseButton::Left,
                coords: Vec2::new(60.0, 70.0),
            },
        ],
        2 => "hi!"
            .chars()
            .map(|rune| Event::TextEntered { rune })
            .chain([Event::key_pressed(Keycode::Backspace, Modifiers::empty())])
            .collect(),
        3 => vec![Event::MouseButtonReleased {
            button: MouseButton::Left,
            coords: Vec2::new(60.0, 70.0),
        }],
        _ => vec![Event::Closed],
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading bridge config from {}", path);
            BridgeConfig::load_from_file(&path)?
        }
        None => BridgeConfig::default(),
    };

    let fonts = FontAtlas::from_rgba32(1, 1, vec![255; 4])?;
    let window = HeadlessWindow::with_framebuffer(Vec2::new(640.0, 480.0), Vec2::new(1280.0, 960.0));
    let renderer = HeadlessRenderer::new(1280, 960);
    let mut bridge = Bridge::init(Context::new(fonts), window, renderer, HeadlessClipboard::new(), config)?;

    let mut panel = DemoPanel::new();
    let mut timer = Timer::new();
    let mut running = true;

    while running {
        for event in scripted_events(timer.frame_count()) {
            if event == Event::Closed {
                running = false;
            }
            let consumed = bridge.process_event(&event);
            log::info!("{:?} -> consumed by UI: {}", event, consumed);
        }

        let delta = timer.tick();
        bridge.update(delta.max(Duration::from_micros(1)));
        panel.build_frame(bridge.context_mut());
        let stats = bridge.render_draw_data();
        log::info!(
            "Frame {}: {} draw calls, {} indices, cursor {:?}",
            timer.frame_count(),
            stats.draw_calls,
            stats.indices,
            bridge.window().cursor()
        );
        bridge.renderer_mut().clear_draws();
    }

    log::info!("Typed text: {:?}", panel.text);
    bridge.shutdown()?;
    Ok(())
}
