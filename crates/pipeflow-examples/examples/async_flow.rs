//! Async stages composed with `.pipe()`.
//!
//! ```bash
//! cargo run --example async_flow
//! ```

use std::time::Duration;

use futures::StreamExt;
use pipeflow_chain::prelude::*;
use pipeflow_core::error::{FlowError, Result};
use pipeflow_core::runnable::{Runnable, RunnableExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "async_flow=info".into()),
        )
        .init();

    let fetch = AsyncLambda::new(|id: u32| async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        if id == 0 {
            Err(FlowError::Step("no record with id 0".into()))
        } else {
            Ok(format!("record-{id}"))
        }
    });
    let shout = AsyncLambda::from_fn(|s: String| Ok(s.to_uppercase()));
    let measure = AsyncLambda::from_fn(|s: String| Ok(s.len()));

    let pipeline = fetch.pipe(shout).pipe(measure);

    tracing::info!(len = pipeline.invoke(7).await?, "invoke");
    tracing::info!(lens = ?pipeline.batch(vec![1, 22, 333]).await?, "batch");

    let mut chunks = pipeline.stream(42).await?;
    while let Some(chunk) = chunks.next().await {
        tracing::info!(chunk = chunk?, "stream");
    }

    match pipeline.invoke(0).await {
        Err(err) => tracing::info!(%err, "stopped at first stage"),
        Ok(len) => tracing::info!(len, "unexpected success"),
    }

    Ok(())
}
