//! Development server for the lab pages
//!
//! A minimal static file server over `www/`. No dependencies beyond
//! tiny_http. Build the WASM package into `www/pkg` first.

use std::fs;
use std::path::{Path, PathBuf};
use tiny_http::{Header, Response, Server};

const DEFAULT_PORT: u16 = 8080;
const WEB_ROOT: &str = "www";

fn main() {
    let port = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = format!("0.0.0.0:{}", port);
    let server = match Server::http(&addr) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to start server on {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("labterm dev server on http://localhost:{}", port);

    for request in server.incoming_requests() {
        let response = match resolve(request.url()) {
            Some(path) => serve_file(&path),
            None => not_found(),
        };
        let _ = request.respond(response);
    }
}

/// Map a request URL to a file under the web root
fn resolve(url: &str) -> Option<PathBuf> {
    let url_path = url.split('?').next().unwrap_or("");
    let relative = url_path.trim_start_matches('/');
    let relative = if relative.is_empty() { "index.html" } else { relative };

    // Stay inside the web root
    if relative.split('/').any(|seg| seg == "..") {
        return None;
    }
    Some(Path::new(WEB_ROOT).join(relative))
}

fn serve_file(path: &Path) -> Response<std::io::Cursor<Vec<u8>>> {
    match fs::read(path) {
        Ok(contents) => match Header::from_bytes("Content-Type", mime_type(path)) {
            Ok(header) => Response::from_data(contents).with_header(header),
            Err(()) => Response::from_data(contents),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> Response<std::io::Cursor<Vec<u8>>> {
    let response = Response::from_string("404 Not Found").with_status_code(404);
    match Header::from_bytes("Content-Type", "text/plain") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

fn mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_index() {
        assert_eq!(resolve("/"), Some(PathBuf::from("www/index.html")));
        assert_eq!(resolve("/?lab=2"), Some(PathBuf::from("www/index.html")));
    }

    #[test]
    fn test_resolve_nested() {
        assert_eq!(
            resolve("/pkg/labterm.js"),
            Some(PathBuf::from("www/pkg/labterm.js"))
        );
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        assert_eq!(resolve("/../Cargo.toml"), None);
        assert_eq!(resolve("/pkg/../../secret"), None);
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type(Path::new("a.wasm")), "application/wasm");
        assert_eq!(mime_type(Path::new("README")), "application/octet-stream");
    }
}
