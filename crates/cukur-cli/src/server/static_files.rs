use std::path::Path;

use tower_http::services::ServeDir;

/// Serve files from `dir`, answering 404 for anything missing
pub fn serve_static(dir: impl AsRef<Path>) -> ServeDir {
    ServeDir::new(dir).append_index_html_on_directories(false)
}
