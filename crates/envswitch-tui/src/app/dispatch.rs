//! Post-confirmation routing and background effects.

use std::io;
use std::path::PathBuf;

use tokio::sync::mpsc;

use envswitch_catalog::Catalog;
use envswitch_core::{CatalogConfig, Command, SwitchError};

use super::state::AppEvent;

/// What happens after the selected file has been copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// No commands: the switch is complete.
    Finish,
    /// Exactly one command: run it without asking.
    Run(Command),
    /// Several commands: let the user choose.
    Choose,
}

/// Decide the route for a command list.
pub fn route(commands: &[Command]) -> Route {
    match commands {
        [] => Route::Finish,
        [only] => Route::Run(only.clone()),
        _ => Route::Choose,
    }
}

/// Load the catalog on the blocking pool.
///
/// The result is delivered as [`AppEvent::CatalogLoaded`].
pub fn start_catalog(config: CatalogConfig, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let directory = config.directory.clone();
        let result = tokio::task::spawn_blocking(move || Catalog::load(&config))
            .await
            .unwrap_or_else(|e| {
                Err(SwitchError::CatalogRead {
                    path: directory,
                    source: io::Error::other(e.to_string()),
                })
            });

        let _ = tx.send(AppEvent::CatalogLoaded(result)).await;
    });
}

/// Copy the selected file on the blocking pool.
///
/// The result is delivered as [`AppEvent::CopyFinished`].
pub fn start_copy(source: PathBuf, destination: PathBuf, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let (from, to) = (source.clone(), destination.clone());
        let result =
            tokio::task::spawn_blocking(move || envswitch_ops::copy_env_file(&from, &to))
                .await
                .unwrap_or_else(|e| {
                    Err(SwitchError::Copy {
                        source_path: source,
                        destination,
                        source: io::Error::other(e.to_string()),
                    })
                });

        let _ = tx.send(AppEvent::CopyFinished(result)).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn command(name: &str) -> Command {
        Command::new(name, format!("npm run {name}"))
    }

    #[test]
    fn test_route_by_command_count() {
        assert_eq!(route(&[]), Route::Finish);
        assert_eq!(route(&[command("dev")]), Route::Run(command("dev")));
        assert_eq!(route(&[command("build"), command("test")]), Route::Choose);
    }

    #[tokio::test]
    async fn test_start_copy_reports_result() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join(".env.dev");
        std::fs::write(&source, "A=1\n").unwrap();

        let (tx, mut rx) = mpsc::channel(1);
        start_copy(source, dir.path().join(".env"), tx);

        match rx.recv().await {
            Some(AppEvent::CopyFinished(Ok(bytes))) => assert_eq!(bytes, 4),
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(std::fs::read_to_string(dir.path().join(".env")).unwrap(), "A=1\n");
    }

    #[tokio::test]
    async fn test_start_catalog_reports_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".env.prod"), "").unwrap();
        std::fs::write(dir.path().join(".env.dev"), "").unwrap();

        let mut config = CatalogConfig::new(dir.path());
        config.search_user_config = false;

        let (tx, mut rx) = mpsc::channel(1);
        start_catalog(config, tx);

        match rx.recv().await {
            Some(AppEvent::CatalogLoaded(Ok(catalog))) => {
                let names: Vec<_> = catalog.files.iter().map(|f| f.name.as_str()).collect();
                assert_eq!(names, [".env.dev", ".env.prod"]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
