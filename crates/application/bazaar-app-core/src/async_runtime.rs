use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};

const HTTP_THREAD_NAME: &str = "bazaar-http";

// Fetches are serialized by request id, so one worker is enough.
static HTTP_RUNTIME: OnceLock<Result<Runtime, String>> = OnceLock::new();

/// Runtime the blocking dashboard source drives reqwest on. Built on first use.
pub(crate) fn http_runtime() -> anyhow::Result<&'static Runtime> {
    let built = HTTP_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name(HTTP_THREAD_NAME)
            .enable_all()
            .build()
            .map_err(|e| format!("failed to build HTTP runtime: {e}"))
    });
    built.as_ref().map_err(|msg| anyhow::anyhow!("{msg}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_is_shared_and_runs_on_named_workers() {
        let a = http_runtime().unwrap();
        let b = http_runtime().unwrap();
        assert!(std::ptr::eq(a, b));

        let name = a
            .block_on(async {
                tokio::spawn(async { std::thread::current().name().map(str::to_owned) }).await
            })
            .unwrap();
        assert_eq!(name.as_deref(), Some(HTTP_THREAD_NAME));
    }
}
