//! QR Baghdad — offline-first QR code generator with bounded history.
//!
//! Entry point: an interactive console front end over the App core, plus
//! lifecycle commands for the offline cache controller.

use std::io::{self, BufRead, Write};
use std::path::Path;

use qr_baghdad::app::App;
use qr_baghdad::cache::{default_manifest, BucketStore, CacheController, HttpFetcher, APP_ORIGIN};
use qr_baghdad::platform;
use qr_baghdad::services::settings_engine::SettingsEngineTrait;
use qr_baghdad::types::cache::{ControllerMessage, ServeSource};

#[tokio::main]
async fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════╗");
    println!("║ {:^44} ║", format!("QR Baghdad v{}", env!("CARGO_PKG_VERSION")));
    println!("║ {:^44} ║", "Offline-first QR generator with history");
    println!("╚══════════════════════════════════════════════╝");
    println!();

    let data_dir = platform::get_data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("❌ Cannot create data directory: {}", e);
        std::process::exit(1);
    }
    let db_path = data_dir.join("qr-baghdad.db");

    let mut app = match App::new(&db_path.to_string_lossy()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("❌ Startup failed: {}", e);
            std::process::exit(1);
        }
    };

    let bucket_root = platform::get_cache_dir().join("buckets");
    let mut controller = CacheController::new(
        default_manifest(),
        APP_ORIGIN,
        BucketStore::new(bucket_root.clone()),
        Box::new(HttpFetcher::new()),
    );

    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "generate" => {
                app.generate(rest);
            }
            "download" => {
                if let Some(path) = app.download(Path::new(".")) {
                    println!("  Saved to {}", path.display());
                }
            }
            "history" => print_history(&app),
            "recall" => match rest.parse::<i64>() {
                Ok(id) => {
                    if !app.recall(id) {
                        println!("  No history item with id {}", id);
                    }
                }
                Err(_) => println!("  Usage: recall <id>"),
            },
            "remove" => match rest.parse::<i64>() {
                Ok(id) => app.remove(id),
                Err(_) => println!("  Usage: remove <id>"),
            },
            "clear" => {
                let confirmed = if app.history().is_empty() {
                    false
                } else {
                    confirm("Delete all history? [y/N] ", &stdin)
                };
                app.clear_history(confirmed);
            }
            "settings" => {
                if rest.is_empty() {
                    let s = app.settings_engine.get();
                    println!("  size: {}px", s.size);
                    println!("  dark: {}", s.dark_color);
                    println!("  light: {}", s.light_color);
                } else {
                    let parts: Vec<&str> = rest.split_whitespace().collect();
                    match (parts.first().and_then(|p| p.parse::<u32>().ok()), parts.get(1), parts.get(2)) {
                        (Some(size), Some(dark), Some(light)) => {
                            app.update_settings(size, dark, light);
                        }
                        _ => println!("  Usage: settings <size> <dark> <light>"),
                    }
                }
            }
            "scan" => {
                // No camera on the console; reports scanning as unsupported.
                let frame = image::RgbaImage::new(1, 1);
                app.scan(None, &frame);
            }
            "cache" => handle_cache_command(rest, &mut controller, &bucket_root).await,
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("  Unknown command: {} (try 'help')", other),
        }
    }

    println!("Goodbye!");
}

fn print_help() {
    println!("Commands:");
    println!("  generate <text>              create a QR code and record it");
    println!("  download                     save the current QR as a PNG");
    println!("  history                      list recorded texts");
    println!("  recall <id>                  regenerate from a history item");
    println!("  remove <id>                  delete one history item");
    println!("  clear                        clear the whole history");
    println!("  settings [size dark light]   show or update settings");
    println!("  scan                         scan a QR code (if supported)");
    println!("  cache install|activate|update|status|fetch <url>");
    println!("  quit");
    println!();
}

fn print_history(app: &App) {
    let items = app.history();
    if items.is_empty() {
        println!("  📋 No history yet — generate your first QR code");
        return;
    }
    for item in items {
        println!("  [{}] {} ({})", item.id, item.text, item.timestamp);
    }
}

fn confirm(prompt: &str, stdin: &io::Stdin) -> bool {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if stdin.lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

async fn handle_cache_command(
    rest: &str,
    controller: &mut CacheController,
    bucket_root: &Path,
) {
    let (sub, arg) = match rest.split_once(' ') {
        Some((s, a)) => (s, a.trim()),
        None => (rest, ""),
    };
    match sub {
        "install" => match controller.install().await {
            Ok(()) => println!("  ✅ Installed bucket {}", controller.version()),
            Err(e) => println!("  ❌ {}", e),
        },
        "activate" => match controller.activate() {
            Ok(()) => println!("  ✅ Controller active for {}", controller.version()),
            Err(e) => println!("  ❌ {}", e),
        },
        // Force an update: install the current version, then skip waiting.
        "update" => {
            match controller.install().await {
                Ok(()) => match controller.handle_message(ControllerMessage::SkipWaiting) {
                    Ok(()) => println!("  ✅ Updated and activated {}", controller.version()),
                    Err(e) => println!("  ❌ {}", e),
                },
                Err(e) => println!("  ❌ {}", e),
            }
        }
        "status" => {
            println!("  state: {:?}", controller.state());
            println!("  version: {}", controller.version());
            let store = BucketStore::new(bucket_root.to_path_buf());
            match store.list_buckets() {
                Ok(buckets) => {
                    for bucket in buckets {
                        let count = store.entry_count(&bucket).unwrap_or(0);
                        println!("  bucket {} ({} assets)", bucket, count);
                    }
                }
                Err(e) => println!("  ❌ {}", e),
            }
        }
        "fetch" => {
            if arg.is_empty() {
                println!("  Usage: cache fetch <url>");
                return;
            }
            match controller.handle_request(arg).await {
                Ok(response) => {
                    let source = match response.source {
                        ServeSource::Cache => "cache",
                        ServeSource::Network => "network",
                        ServeSource::OfflineShell => "offline shell",
                    };
                    println!(
                        "  {} {} ({} bytes, from {})",
                        response.status,
                        response.url,
                        response.body.len(),
                        source
                    );
                }
                Err(e) => println!("  ❌ {}", e),
            }
        }
        _ => println!("  Usage: cache install|activate|update|status|fetch <url>"),
    }
}
