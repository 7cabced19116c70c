use std::error::Error;
use std::future;

/// Resolves once the OS asks the process to stop.
///
/// Used for graceful shutdown: in-flight requests are allowed to finish, new
/// connections are refused.
pub(crate) async fn shutdown()
{
	let signal = tokio::select! {
		() = interrupt() => "SIGINT",
		() = terminate() => "SIGTERM",
	};

	tracing::warn!(signal, "received shutdown signal");
}

async fn interrupt()
{
	if let Err(err) = tokio::signal::ctrl_c().await {
		tracing::error!(error = &err as &dyn Error, "failed listening for SIGINT");
		future::pending::<()>().await;
	}
}

#[cfg(unix)]
async fn terminate()
{
	use tokio::signal::unix::{SignalKind, signal};

	let mut signal = match signal(SignalKind::terminate()) {
		Ok(signal) => signal,
		Err(err) => {
			tracing::error!(error = &err as &dyn Error, "failed listening for SIGTERM");
			return future::pending().await;
		},
	};

	if signal.recv().await.is_none() {
		tracing::warn!("cannot receive more SIGTERM signals");
		future::pending::<()>().await;
	}
}

#[cfg(not(unix))]
async fn terminate()
{
	future::pending().await
}
