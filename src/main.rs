mod app;
mod args;
mod config;
mod entry;
mod logger;
mod shutdown;
mod ui;

use wakeline::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
