//! Console sink for operator-facing log lines.
//!
//! In the browser lines go to `console.log` / `console.error`. Native builds
//! (tests, tooling) have no JS host, so the same lines go to stderr.

/// Log an informational line
pub fn info(line: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&line.into());

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", line);
}

/// Log a line for work that was aborted
pub fn error(line: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&line.into());

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("ERROR {}", line);
}
