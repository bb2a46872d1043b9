//! Startup banner and URL display

use super::config::{StorageBackend, is_all_interfaces};
use super::constants::APP_NAME;

/// Print the startup banner with URLs
pub fn print_banner(host: &str, port: u16, backend: StorageBackend, data_path: &str) {
    // Use localhost for display when binding to all interfaces
    let display_host = if is_all_interfaces(host) {
        "localhost"
    } else {
        host
    };
    let base_url = format!("http://{}:{}", display_host, port);

    // Label width: "Natural language:" is 17 chars, pad to 19 for alignment
    const W: usize = 19;

    println!();
    println!(
        "  \x1b[1m\x1b[36m{}\x1b[0m \x1b[90mv{}\x1b[0m",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!(
        "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {}/strings",
        "Strings API:", base_url
    );
    println!(
        "  \x1b[33m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {}/strings/filter-by-natural-language?query=",
        "Natural language:", base_url
    );
    println!(
        "  \x1b[35m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {}/api/openapi.json",
        "OpenAPI:", base_url
    );

    if host == "127.0.0.1" || host == "localhost" {
        println!(
            "  \x1b[90m➜  {:<W$} use --host 0.0.0.0 to expose\x1b[0m",
            "Network:"
        );
    }

    match backend {
        StorageBackend::Json => {
            println!("  \x1b[90m➜  {:<W$} {}\x1b[0m", "Data:", data_path);
        }
        StorageBackend::Memory => {
            println!(
                "  \x1b[90m➜  {:<W$} in memory (not persisted)\x1b[0m",
                "Data:"
            );
        }
    }

    println!();
}
