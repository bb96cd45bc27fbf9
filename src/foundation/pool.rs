use crate::foundation::error::{EpicycleError, EpicycleResult};

/// Worker-pool settings for the embarrassingly parallel loops (coefficients, frames).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Threading {
    /// Run on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Fixed worker count; `None` lets rayon pick.
    pub threads: Option<usize>,
}

impl Threading {
    /// Parallel threading with rayon's default worker count.
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }

    /// Reject `threads == Some(0)`.
    pub fn validate(&self) -> EpicycleResult<()> {
        validate_threads(self.threads)
    }
}

fn validate_threads(threads: Option<usize>) -> EpicycleResult<()> {
    if threads == Some(0) {
        return Err(EpicycleError::validation(
            "threading 'threads' must be >= 1 when set",
        ));
    }
    Ok(())
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> EpicycleResult<rayon::ThreadPool> {
    validate_threads(threads)?;

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| EpicycleError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/pool.rs"]
mod tests;
