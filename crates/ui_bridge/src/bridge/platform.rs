//! Frame lifecycle
//!
//! [`Bridge`] owns the UI [`Context`] together with the host window and
//! renderer it was initialised with, and sequences the per-frame calls:
//!
//! ```text
//! Bridge::init            -> Ready
//! process_event  (0..n)   -> AcceptingEvents
//! update         (once)   -> Updated
//!   ... the UI library builds its draw data ...
//! render_draw_data (once) -> Rendered
//! ... next frame ...
//! shutdown                -> (bridge consumed)
//! ```
//!
//! Calls out of order are logged but still carried out. Everything runs on
//! the host's game-loop thread; neither the bridge nor the context is shared
//! between threads.

use std::time::Duration;

use thiserror::Error;

use super::clipboard::ClipboardBridge;
use super::cursor::{update_mouse_cursor, CursorState};
use super::font::FontTexture;
use super::input;
use super::render::{DrawListRenderer, RenderStats};
use crate::config::{BridgeConfig, ConfigError};
use crate::host::clipboard::HostClipboard;
use crate::host::event::Event;
use crate::host::renderer::{HostRenderer, RenderError};
use crate::host::window::HostWindow;
use crate::ui::context::Context;
use crate::ui::draw::{DrawData, TextureId};
use crate::ui::fonts::FontError;
use crate::ui::io::{BackendFlags, ConfigFlags, Io};

/// Errors raised by the bridge lifecycle
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The host renderer rejected the font atlas upload
    #[error("Font atlas upload failed: {0}")]
    FontUpload(#[source] RenderError),

    /// The host renderer failed to release the font atlas texture
    #[error("Font atlas release failed: {0}")]
    FontRelease(#[source] RenderError),

    /// The font atlas record was malformed
    #[error("Font atlas error: {0}")]
    Font(#[from] FontError),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Font atlas release failure at shutdown, carrying the bridge's parts
#[derive(Error)]
#[error("Font atlas release failed: {error}")]
pub struct ShutdownError<W, R> {
    #[source]
    error: RenderError,
    parts: (Context, W, R),
}

impl<W, R> ShutdownError<W, R> {
    /// The renderer's error
    pub const fn error(&self) -> &RenderError {
        &self.error
    }

    /// Recover the context and host objects
    pub fn into_parts(self) -> (Context, W, R) {
        self.parts
    }
}

impl<W, R> std::fmt::Debug for ShutdownError<W, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShutdownError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<W, R> From<ShutdownError<W, R>> for BridgeError {
    fn from(err: ShutdownError<W, R>) -> Self {
        Self::FontRelease(err.error)
    }
}

/// Where the bridge is within the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// Initialised, no frame started yet
    Ready,
    /// Taking host events for the coming frame
    AcceptingEvents,
    /// Display metrics and cursor updated; the UI library may build its frame
    Updated,
    /// The frame's draw data has been issued
    Rendered,
}

/// The integration between one UI context and one host window/renderer pair
pub struct Bridge<W, R> {
    context: Context,
    window: W,
    renderer: R,
    config: BridgeConfig,
    font_texture: Option<FontTexture>,
    cursor: Option<CursorState>,
    draw_lists: DrawListRenderer,
    state: FrameState,
}

impl<W: HostWindow, R: HostRenderer> Bridge<W, R> {
    /// Set up the context for this host and upload the font atlas
    ///
    /// Declares the backend capabilities, installs the clipboard forwarding
    /// and stamps the atlas texture id into the context's font atlas.
    pub fn init<C: HostClipboard + 'static>(
        mut context: Context,
        window: W,
        mut renderer: R,
        clipboard: C,
        config: BridgeConfig,
    ) -> Result<Self, BridgeError> {
        configure_io(context.io_mut(), &config);
        context
            .io_mut()
            .set_clipboard_backend(Box::new(ClipboardBridge::new(clipboard)));

        let font_texture =
            FontTexture::create(&mut renderer, context.fonts_mut()).map_err(BridgeError::FontUpload)?;

        log::info!(
            "UI bridge initialized (platform: {}, renderer: {}, gamepad: {}, cursor changes: {})",
            config.platform_name,
            config.renderer_name,
            config.nav_enable_gamepad,
            config.mouse_cursor_changes
        );

        Ok(Self {
            context,
            window,
            renderer,
            draw_lists: DrawListRenderer::new(config.vertex_upload),
            config,
            font_texture: Some(font_texture),
            cursor: None,
            state: FrameState::Ready,
        })
    }

    /// Feed one host event to the UI library
    ///
    /// Returns true when the host game should not act on the event.
    pub fn process_event(&mut self, event: &Event) -> bool {
        match self.state {
            FrameState::Ready | FrameState::Rendered => self.state = FrameState::AcceptingEvents,
            FrameState::AcceptingEvents => {}
            FrameState::Updated => {
                log::warn!("Event {:?} delivered between update and render", event);
            }
        }

        let consumed = input::process_event(self.context.io_mut(), event, self.config.gamepad_dead_zone);
        log::trace!("Event {:?} consumed: {}", event, consumed);
        consumed
    }

    /// Prepare the UI library for a new frame
    ///
    /// Refreshes display size, framebuffer scale and frame time, then
    /// applies the cursor shape the UI library asked for.
    pub fn update(&mut self, delta: Duration) {
        if self.state == FrameState::Updated {
            log::warn!("Update called twice without rendering in between");
        }

        let io = self.context.io_mut();
        let size = self.window.size();
        io.display_size = size;
        if size.x > 0.0 && size.y > 0.0 {
            io.display_framebuffer_scale = self.window.framebuffer_size().component_div(&size);
        }
        io.delta_time = delta.as_secs_f32();

        update_mouse_cursor(
            &mut self.cursor,
            self.context.io(),
            self.context.mouse_cursor(),
            &mut self.window,
        );
        self.state = FrameState::Updated;
    }

    /// Issue the draw data the UI library published for this frame
    pub fn render_draw_data(&mut self) -> RenderStats {
        self.check_render_order();
        let stats = match self.context.draw_data() {
            Some(draw_data) => self.draw_lists.render(&mut self.renderer, draw_data),
            None => {
                log::debug!("No draw data published this frame");
                RenderStats::default()
            }
        };
        self.state = FrameState::Rendered;
        stats
    }

    /// Issue draw data produced outside the context
    pub fn render(&mut self, draw_data: &DrawData) -> RenderStats {
        self.check_render_order();
        let stats = self.draw_lists.render(&mut self.renderer, draw_data);
        self.state = FrameState::Rendered;
        stats
    }

    /// Release the font atlas texture and hand back the context and host objects
    ///
    /// The parts are returned on failure too, inside the [`ShutdownError`].
    pub fn shutdown(mut self) -> Result<(Context, W, R), ShutdownError<W, R>> {
        let released = self
            .font_texture
            .take()
            .map_or(Ok(()), |texture| texture.destroy(&mut self.renderer));
        self.context.fonts_mut().tex_id = TextureId::default();

        let parts = (self.context, self.window, self.renderer);
        match released {
            Ok(()) => {
                log::info!("UI bridge shut down");
                Ok(parts)
            }
            Err(error) => {
                log::error!("UI bridge shut down with an error: {}", error);
                Err(ShutdownError { error, parts })
            }
        }
    }

    fn check_render_order(&self) {
        if self.state != FrameState::Updated {
            log::warn!("Render called in state {:?}, expected Updated", self.state);
        }
    }
}

impl<W, R> Bridge<W, R> {
    /// The UI context
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// The UI context, for building the frame and publishing its draw data
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// The UI input record
    pub const fn io(&self) -> &Io {
        self.context.io()
    }

    /// Host window
    pub const fn window(&self) -> &W {
        &self.window
    }

    /// Mutable host window
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Host renderer
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable host renderer
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Configuration the bridge was initialised with
    pub const fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Current position in the frame cycle
    pub const fn frame_state(&self) -> FrameState {
        self.state
    }

    /// The uploaded font atlas
    pub const fn font_texture(&self) -> Option<&FontTexture> {
        self.font_texture.as_ref()
    }

    /// Cursor last applied to the host, `None` until the first change
    pub const fn cursor_state(&self) -> Option<CursorState> {
        self.cursor
    }
}

/// Declare backend capabilities and apply the configured behaviours
fn configure_io(io: &mut Io, config: &BridgeConfig) {
    io.backend_flags |= BackendFlags::HAS_MOUSE_CURSORS;
    if config.nav_enable_gamepad {
        io.config_flags |= ConfigFlags::NAV_ENABLE_GAMEPAD;
    }
    if io.config_flags.contains(ConfigFlags::NAV_ENABLE_GAMEPAD) {
        io.backend_flags |= BackendFlags::HAS_GAMEPAD;
    }
    if !config.mouse_cursor_changes {
        io.config_flags |= ConfigFlags::NO_MOUSE_CURSOR_CHANGE;
    }
    io.mouse_draw_cursor = config.mouse_draw_cursor;
    io.backend_platform_name = Some(config.platform_name.clone());
    io.backend_renderer_name = Some(config.renderer_name.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::host::headless::{HeadlessClipboard, HeadlessRenderer, HeadlessWindow};
    use crate::ui::fonts::FontAtlas;
    use approx::assert_relative_eq;

    fn bridge(config: BridgeConfig) -> Bridge<HeadlessWindow, HeadlessRenderer> {
        let fonts = FontAtlas::from_rgba32(4, 4, vec![255; 64]).unwrap();
        Bridge::init(
            Context::new(fonts),
            HeadlessWindow::with_framebuffer(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0)),
            HeadlessRenderer::new(800, 600),
            HeadlessClipboard::new(),
            config,
        )
        .unwrap()
    }

    #[test]
    fn test_init_declares_capabilities() {
        let bridge = bridge(BridgeConfig::new().with_gamepad(true).with_cursor_changes(false));
        let io = bridge.io();
        assert!(io.backend_flags.contains(BackendFlags::HAS_MOUSE_CURSORS | BackendFlags::HAS_GAMEPAD));
        assert!(io.config_flags.contains(ConfigFlags::NAV_ENABLE_GAMEPAD | ConfigFlags::NO_MOUSE_CURSOR_CHANGE));
        assert_eq!(io.backend_platform_name.as_deref(), Some("ui_bridge"));
        assert_eq!(bridge.frame_state(), FrameState::Ready);
        assert_eq!(bridge.renderer().texture_count(), 1);
    }

    #[test]
    fn test_init_without_gamepad() {
        let bridge = bridge(BridgeConfig::new());
        assert!(!bridge.io().backend_flags.contains(BackendFlags::HAS_GAMEPAD));
    }

    #[test]
    fn test_update_computes_display_metrics() {
        let mut bridge = bridge(BridgeConfig::new());
        bridge.update(Duration::from_millis(16));

        let io = bridge.io();
        assert_eq!(io.display_size, Vec2::new(400.0, 300.0));
        assert_relative_eq!(io.display_framebuffer_scale.x, 2.0);
        assert_relative_eq!(io.display_framebuffer_scale.y, 2.0);
        assert_relative_eq!(io.delta_time, 0.016, epsilon = 1e-6);
        assert_eq!(bridge.frame_state(), FrameState::Updated);
    }

    #[test]
    fn test_degenerate_size_keeps_scale() {
        let mut bridge = bridge(BridgeConfig::new());
        bridge.update(Duration::from_millis(16));
        bridge.render_draw_data();

        bridge
            .window_mut()
            .resize(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0));
        bridge.update(Duration::from_millis(16));

        let io = bridge.io();
        assert_eq!(io.display_size, Vec2::zeros());
        assert_relative_eq!(io.display_framebuffer_scale.x, 2.0);
        assert_relative_eq!(io.display_framebuffer_scale.y, 2.0);
    }

    #[test]
    fn test_frame_state_cycle() {
        let mut bridge = bridge(BridgeConfig::new());
        bridge.process_event(&Event::Closed);
        assert_eq!(bridge.frame_state(), FrameState::AcceptingEvents);
        bridge.update(Duration::ZERO);
        assert_eq!(bridge.frame_state(), FrameState::Updated);
        bridge.render_draw_data();
        assert_eq!(bridge.frame_state(), FrameState::Rendered);
        bridge.process_event(&Event::Closed);
        assert_eq!(bridge.frame_state(), FrameState::AcceptingEvents);
    }

    #[test]
    fn test_failed_shutdown_returns_parts() {
        let mut bridge = bridge(BridgeConfig::new());
        let handle = bridge.font_texture().and_then(FontTexture::handle).unwrap();
        bridge.renderer_mut().destroy_texture(handle).unwrap();

        let err = bridge.shutdown().unwrap_err();
        assert!(matches!(err.error(), RenderError::UnknownTexture(h) if *h == handle));

        let (context, window, renderer) = err.into_parts();
        assert_eq!(context.fonts().tex_id, TextureId::default());
        assert_eq!(window.size(), Vec2::new(400.0, 300.0));
        assert_eq!(renderer.destroyed(), &[handle]);
    }

    #[test]
    fn test_shutdown_releases_font_texture_once() {
        let bridge = bridge(BridgeConfig::new());
        let handle = bridge.font_texture().and_then(FontTexture::handle).unwrap();

        let (context, _window, renderer) = bridge.shutdown().unwrap();
        assert_eq!(renderer.destroyed(), &[handle]);
        assert_eq!(renderer.texture_count(), 0);
        assert_eq!(context.fonts().tex_id, TextureId::default());
    }
}
