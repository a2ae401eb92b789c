//! Startup banner

use super::config::{StoreBackend, is_all_interfaces};
use super::constants::APP_NAME;

/// Print the startup banner with the API URL and store location
pub fn print_banner(host: &str, port: u16, backend: StoreBackend, data_dir: &str) {
    let display_host = if is_all_interfaces(host) {
        "localhost"
    } else {
        host
    };

    const W: usize = 10;

    println!();
    println!(
        "  \x1b[1m\x1b[36m{}\x1b[0m \x1b[90mv{}\x1b[0m",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!(
        "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}/rest/players",
        "Players:", display_host, port
    );
    println!(
        "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}/api/v1/openapi.json",
        "OpenAPI:", display_host, port
    );

    if host == "127.0.0.1" || host == "localhost" {
        println!(
            "  \x1b[90m➜  {:<W$} use --host 0.0.0.0 to expose\x1b[0m",
            "Network:"
        );
    }

    match backend {
        StoreBackend::Sqlite => {
            println!("  \x1b[90m➜  {:<W$} {}\x1b[0m", "Data:", data_dir);
        }
        StoreBackend::Memory => {
            println!(
                "  \x1b[33m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m in-memory (not persisted)",
                "Data:"
            );
        }
    }
    println!();
}
