use std::sync::Arc;

use tokio::{sync::Semaphore, task::JoinSet};
use tracing::{Instrument, info, info_span, warn};

use crate::character::{CharacterClient, CharacterError};
use crate::extractor::Character;
use crate::fetcher::FetchError;

pub type HarvestResult = (String, Result<Character, CharacterError>);

/// Extract every name with at most `concurrency` fetches in flight. Results
/// come back in input order; one failure never affects the others.
pub async fn harvest(
    client: &CharacterClient,
    names: Vec<String>,
    concurrency: usize,
) -> Vec<HarvestResult> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (idx, name) in names.iter().cloned().enumerate() {
        let client = client.clone();
        let semaphore = Arc::clone(&semaphore);
        let span = info_span!("harvest", name = %name);

        tasks.spawn(
            async move {
                // The semaphore is never closed, so acquire only fails on a bug.
                let _permit = semaphore.acquire_owned().await.ok();
                let result = client.character(&name).await;
                (idx, name, result)
            }
            .instrument(span),
        );
    }

    let mut slots: Vec<Option<HarvestResult>> = names.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((idx, name, result)) => {
                if let Err(err) = &result {
                    warn!(name = %name, error = %err, "character failed");
                }
                slots[idx] = Some((name, result));
            }
            Err(err) => warn!(error = %err, "harvest task panicked"),
        }
    }

    let results: Vec<HarvestResult> = slots
        .into_iter()
        .zip(names)
        .map(|(slot, name)| {
            slot.unwrap_or_else(|| {
                let err = FetchError::Unknown("extraction task aborted".to_string());
                (name, Err(CharacterError::Fetch(err)))
            })
        })
        .collect();

    let ok = results.iter().filter(|(_, r)| r.is_ok()).count();
    info!(total = results.len(), ok, errors = results.len() - ok, "harvest finished");
    results
}
