use crate::app::App;
use crate::config::AppConfig;
use crate::errors::{FetchError, StorageError};
use crate::favorites::FavoritesStore;
use crate::models::Post;
use crate::posts::PostClient;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Everything the event loop reacts to: results of the async operations and
/// terminal input, multiplexed over one channel.
pub enum AppEvent {
    PostsFetched(Result<Vec<Post>, FetchError>),
    FavoritesLoaded(Result<BTreeSet<u64>, StorageError>),
    FavoritesSaved(Result<(), StorageError>),
    Input(KeyEvent),
    InputClosed,
}

pub async fn run_app(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    config: &AppConfig,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (save_tx, save_rx) = mpsc::unbounded_channel();
    let store = Arc::new(FavoritesStore::new(&config.data_dir));

    // Both startup operations are issued immediately and independently;
    // their results arrive on the channel in whatever order they resolve.
    let fetch_tx = tx.clone();
    let client = PostClient::new(config.endpoint.clone());
    tokio::spawn(async move {
        let _ = fetch_tx.send(AppEvent::PostsFetched(client.fetch().await));
    });

    let load_tx = tx.clone();
    let load_store = store.clone();
    tokio::task::spawn_blocking(move || {
        let _ = load_tx.send(AppEvent::FavoritesLoaded(load_store.load()));
    });

    let writer_tx = tx.clone();
    tokio::task::spawn_blocking(move || run_save_writer(store, save_rx, writer_tx));

    let input_tx = tx.clone();
    tokio::task::spawn_blocking(move || loop {
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => {
                if let Ok(Event::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press
                        && input_tx.send(AppEvent::Input(key)).is_err()
                    {
                        break;
                    }
                }
            }
            Ok(false) => {
                if input_tx.is_closed() {
                    break;
                }
            }
            Err(err) => {
                // Without input the session is unrecoverable; quit rather
                // than leave a live screen that ignores every key.
                log::warn!("Terminal input failed: {err}");
                let _ = input_tx.send(AppEvent::InputClosed);
                break;
            }
        }
    });

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let Some(event) = rx.recv().await else { break };
        apply_event(app, event, &save_tx);
    }

    Ok(())
}

fn apply_event(app: &mut App, event: AppEvent, save_tx: &mpsc::UnboundedSender<BTreeSet<u64>>) {
    match event {
        AppEvent::PostsFetched(result) => app.on_posts_fetched(result),
        AppEvent::FavoritesLoaded(result) => app.on_favorites_loaded(result),
        AppEvent::FavoritesSaved(result) => app.on_favorites_saved(result),
        AppEvent::Input(key) => handle_key(app, key, save_tx),
        AppEvent::InputClosed => app.should_quit = true,
    }
}

fn handle_key(app: &mut App, key: KeyEvent, save_tx: &mpsc::UnboundedSender<BTreeSet<u64>>) {
    // An open notification captures the next keypress.
    if app.dismiss_notice() {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Char(' ') | KeyCode::Enter => {
            // Memory updates synchronously; the slot rewrite is queued to the
            // writer so input handling never blocks on storage I/O.
            if let Some(set) = app.toggle_selected() {
                let _ = save_tx.send(set);
            }
        }
        _ => {}
    }
}

/// Dedicated persistence writer: saves queued sets one at a time in arrival
/// order. The slot's temp-file rename and the newest-set-wins outcome both
/// depend on there being exactly one writer.
fn run_save_writer(
    store: Arc<FavoritesStore>,
    mut requests: mpsc::UnboundedReceiver<BTreeSet<u64>>,
    results: mpsc::UnboundedSender<AppEvent>,
) {
    while let Some(set) = requests.blocking_recv() {
        if results
            .send(AppEvent::FavoritesSaved(store.save(&set)))
            .is_err()
        {
            break;
        }
    }
}
