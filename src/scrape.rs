// src/scrape.rs
use std::{
    thread,
    sync::{mpsc, atomic::{AtomicUsize, Ordering}},
};

use crate::{
    config::options::ExtractOptions,
    core::net::{HttpSource, PageSource, ScrapeError},
    pipeline::RawRecord,
    progress::Progress,
    specs::{career, roster::{self, Player}},
};

/// Fetch one player's page and pull out its raw goal rows.
pub fn fetch_player<S: PageSource + ?Sized>(
    source: &S,
    player: &Player,
) -> Result<Vec<RawRecord>, ScrapeError> {
    let html = source.fetch(&player.url)?;
    Ok(career::extract_records(&html, &player.name))
}

/// Scrape the default roster over HTTPS.
pub fn collect_active_players(
    opts: &ExtractOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<RawRecord>, ScrapeError> {
    let source = HttpSource::new(opts.timeout)?;
    Ok(collect_roster(&source, &roster::active_players(), opts, progress))
}

/// Union of every player's raw rows.
///
/// Players are fetched by up to `opts.workers` threads. A failure for one player is
/// logged, reported to `progress` and leaves that player out; it never aborts the
/// batch. Output is ordered by roster position, then page order.
pub fn collect_roster<S: PageSource + Sync>(
    source: &S,
    players: &[Player],
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<RawRecord> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(players.len());
    }

    type Outcome = (usize, Result<Vec<RawRecord>, String>);

    let next = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<Outcome>();
    let workers = opts.workers.min(players.len()).max(1);
    let mut per_player: Vec<(usize, Vec<RawRecord>)> = Vec::with_capacity(players.len());

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let next = &next;
            scope.spawn(move || {
                loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    let Some(player) = players.get(i) else { break };
                    let outcome = fetch_player(source, player).map_err(|e| e.to_string());
                    if tx.send((i, outcome)).is_err() {
                        break;
                    }
                    if i + 1 < players.len() && !opts.request_pause.is_zero() {
                        thread::sleep(opts.request_pause); // be polite
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        for (i, outcome) in res_rx.iter() {
            let name = players[i].name.as_str();
            match outcome {
                Ok(records) => {
                    logf!("{name}: {} rows", records.len());
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(name, records.len());
                    }
                    per_player.push((i, records));
                }
                Err(msg) => {
                    loge!("{name}: {msg}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(name, &msg);
                    }
                }
            }
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} of {} players scraped", per_player.len(), players.len()));
        p.finish();
    }

    per_player.sort_by_key(|(i, _)| *i);
    per_player.into_iter().flat_map(|(_, rows)| rows).collect()
}
