//! Platformer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    platformer::platform::web::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Platformer (native) starting...");

    let settings = platformer::Settings::load();
    let seed = settings.seed.unwrap_or_else(platformer::platform::time_seed);
    let session = platformer::Session::new(settings, seed);

    match platformer::platform::native::run(session) {
        Ok(session) if session.status() == platformer::SessionStatus::Over => {
            println!("{}", session.summary());
        }
        Ok(_) => log::info!("Window closed"),
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
