/// traincurve viewer
///
/// Serves the rendered curve charts for one training history in the browser,
/// from a synchronous tiny_http server; no JavaScript required.
///
/// Run with:
///   cargo run --bin viewer -- history.json
/// Then open http://127.0.0.1:7878

mod render;
mod routes;
mod state;

use std::env;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tiny_http::Server;

use state::ViewerState;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut history_path = String::from("history.json");
    let mut port = 7878u16;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                port = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(port);
                i += 2;
            }
            "--help" => {
                println!("Usage: viewer [HISTORY_JSON] [--port N]");
                return Ok(());
            }
            other => {
                if !other.starts_with('-') {
                    history_path = other.to_owned();
                }
                i += 1;
            }
        }
    }

    let state = Arc::new(
        ViewerState::load(&history_path)
            .with_context(|| format!("failed to prepare charts for {}", history_path))?,
    );

    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr).map_err(|e| anyhow!("failed to bind {}: {}", addr, e))?;

    println!("╔══════════════════════════════════════════════╗");
    println!("║          traincurve viewer                   ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Serving: {:<34} ║", truncate(&history_path, 34));
    println!("║  Open in your browser:                       ║");
    println!("║  http://{:<36} ║", addr);
    println!("╚══════════════════════════════════════════════╝");

    // Charts are rendered once at startup and the state is immutable, so each
    // request can be served on its own thread without locking.
    for request in server.incoming_requests() {
        let state_clone = state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        s.to_owned()
    } else {
        let tail: String = s.chars().skip(count - (max - 1)).collect();
        format!("…{}", tail)
    }
}
