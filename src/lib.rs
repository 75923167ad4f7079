pub mod app;
pub mod config;
pub mod errors;
pub mod events;
pub mod favorites;
pub mod models;
pub mod posts;
pub mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;

pub fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    log::info!(
        "Starting with endpoint {} and data dir {:?}",
        config.endpoint,
        config.data_dir
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut terminal = ratatui::init();
        let mut app = App::new();
        let result = events::run_app(&mut terminal, &mut app, &config).await;
        ratatui::restore();
        result
    })
}
