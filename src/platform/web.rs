//! Browser runner: canvas surface, keyboard listeners, requestAnimationFrame loop

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

use super::input::{Action, action_for_code};
use crate::renderer::{RenderState, build_scene};
use crate::session::{Session, SessionStatus};
use crate::settings::Settings;

/// Game instance shared between the frame loop and event listeners
struct Game {
    session: Session,
    render_state: Option<RenderState>,
    last_time: f64,
}

impl Game {
    fn new(session: Session) -> Self {
        Self {
            session,
            render_state: None,
            last_time: 0.0,
        }
    }

    fn render(&mut self) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        let vertices = build_scene(&self.session.world, self.session.settings.grace_blink);
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure()
            }
            Err(wgpu::SurfaceError::OutOfMemory) => log::error!("Out of memory!"),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn set_hidden(id: &str, hidden: bool) {
    if let Some(el) = document().ok().and_then(|d| d.get_element_by_id(id)) {
        let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
    }
}

pub async fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Platformer starting...");

    let window = web_sys::window().ok_or("no window")?;
    let document = document()?;
    set_hidden("loading", true);

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or("no canvas")?
        .dyn_into()?;

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(super::time_seed);

    // Size the backing store from the configured scale
    let dpr = window.device_pixel_ratio();
    let scale = settings.window_scale as f64;
    let css_w = crate::consts::WIDTH as f64 * scale;
    let css_h = crate::consts::HEIGHT as f64 * scale;
    let _ = canvas.set_attribute("style", &format!("width:{}px;height:{}px", css_w, css_h));
    let width = (css_w * dpr) as u32;
    let height = (css_h * dpr) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let game = Rc::new(RefCell::new(Game::new(Session::new(settings, seed))));

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(|e| JsValue::from_str(&format!("failed to create surface: {e}")))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .map_err(|e| JsValue::from_str(&format!("no compatible GPU adapter: {e}")))?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let render_state = RenderState::new(surface, &adapter, width, height)
        .await
        .map_err(|e| JsValue::from_str(&format!("failed to create GPU device: {e}")))?;
    game.borrow_mut().render_state = Some(render_state);

    setup_input_handlers(&window, game.clone());
    set_hidden("game-over", true);

    request_animation_frame(game);

    log::info!("Platformer running!");
    Ok(())
}

fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
    // Key down
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(action) = action_for_code(&event.code()) else {
                return;
            };
            event.prevent_default();
            // Quit has no meaning inside a page
            if action != Action::Quit {
                game.borrow_mut().session.input.press(action);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Key up
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(action) = action_for_code(&event.code()) {
                game.borrow_mut().session.input.release(action);
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Window blur: keyups may never arrive
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            game.borrow_mut().session.input.clear();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(game, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
    let status = {
        let mut g = game.borrow_mut();

        let dt = if g.last_time > 0.0 {
            ((time - g.last_time) / 1000.0) as f32
        } else {
            0.0
        };
        g.last_time = time;

        let status = g.session.advance(dt);
        g.render();
        status
    };

    if status == SessionStatus::Over {
        show_game_over(&game.borrow().session);
        return;
    }
    request_animation_frame(game);
}

fn show_game_over(session: &Session) {
    let summary = session.summary();
    log::info!("{}", summary);
    if let Some(el) = document().ok().and_then(|d| d.get_element_by_id("game-over")) {
        el.set_text_content(Some(&summary));
        let _ = el.set_attribute("class", "");
    }
}
