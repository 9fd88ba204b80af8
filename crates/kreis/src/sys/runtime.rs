use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::time::{self, MissedTickBehavior};

pub const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

pub fn start_background_services(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    run_clock(tx).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::watcher::run_async_watcher(tx).await;
                });
            }

            std::future::pending::<()>().await;
        });
    });
}

/// Nudges the UI once per interval; the UI reads the wall clock itself.
async fn run_clock(tx: Sender<AppEvent>) {
    let mut interval = time::interval(CLOCK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        if tx.send(AppEvent::Tick).await.is_err() {
            break;
        }
    }
}
