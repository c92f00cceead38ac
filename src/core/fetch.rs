//! Concurrent part rendering with positional collection.

use crate::core::config::PartSpec;
use crate::core::render::{render, Row};
use crate::core::system_info::FactsProvider;
use futures_util::future::join_all;
use log::warn;
use std::sync::Arc;

/// Render every part on its own blocking task.
///
/// Results are collected by position, so the returned rows follow the order
/// of `parts` no matter which fetch finishes first. A task that panics is
/// treated like a part with no data.
pub async fn render_parts(parts: &[PartSpec], facts: Arc<dyn FactsProvider>) -> Vec<Row> {
    let handles: Vec<_> = parts
        .iter()
        .copied()
        .map(|part| {
            let facts = Arc::clone(&facts);
            tokio::task::spawn_blocking(move || render(&part, facts.as_ref()))
        })
        .collect();

    join_all(handles)
        .await
        .into_iter()
        .zip(parts)
        .filter_map(|(joined, part)| match joined {
            Ok(row) => row,
            Err(e) => {
                warn!("Part '{}' task failed: {}", part.kind.name(), e);
                None
            }
        })
        .collect()
}

/// Render parts one after another on the current thread
pub fn render_parts_sequential(parts: &[PartSpec], facts: &dyn FactsProvider) -> Vec<Row> {
    parts.iter().filter_map(|part| render(part, facts)).collect()
}
