use once_cell::sync::OnceCell;
use std::env;

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the env file exactly once and returns its path (argv[1], default
/// `.env`). A missing file is fine; the real environment still applies.
pub fn ensure_dotenv_loaded() -> String {
    let path = env::args().nth(1).unwrap_or_else(|| ".env".to_string());
    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&path).ok();
    });
    path
}
