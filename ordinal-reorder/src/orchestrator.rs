//! The reorder pipeline: resolve, bisect, generate a key, commit once.

use crate::bisector::bisect;
use crate::config::ReorderConfig;
use crate::resolver::resolve_neighbors;
use crate::store::SortKeyStore;
use ordinal_keys::{Keyspace, SortKeyProvider};
use ordinal_types::{EntityId, Error, Ordered, ReorderRequest, Result, SortKey, ensure_ascending};
use tracing::{debug, warn};

/// Errors from [`Reorderer::reorder`].
#[derive(Debug, thiserror::Error)]
pub enum ReorderError<E> {
    /// Validation or key generation failed; nothing was committed.
    #[error(transparent)]
    Ordering(#[from] Error),

    /// The store rejected the write. Carries the store's error as-is.
    #[error(transparent)]
    Commit(E),
}

impl<E> ReorderError<E> {
    /// The ordering error, if the pipeline failed before the commit.
    #[must_use]
    pub fn as_ordering(&self) -> Option<&Error> {
        match self {
            Self::Ordering(err) => Some(err),
            Self::Commit(_) => None,
        }
    }

    /// The store's error, if the commit itself failed.
    #[must_use]
    pub fn into_commit(self) -> Option<E> {
        match self {
            Self::Ordering(_) => None,
            Self::Commit(err) => Some(err),
        }
    }
}

/// Everything the pipeline decided, short of writing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderPlan {
    pub target_id: EntityId,
    /// Position of the target once the new key is applied.
    pub target_index: usize,
    pub previous_key: SortKey,
    pub new_key: SortKey,
}

/// Runs reorders against collections that share one keyspace.
#[derive(Debug, Clone)]
pub struct Reorderer<P> {
    provider: P,
    verify_snapshot: bool,
}

impl Reorderer<Keyspace> {
    /// Builds a reorderer from configuration.
    pub fn from_config(config: &ReorderConfig) -> Result<Self> {
        Ok(Self::new(config.keyspace.build()?).with_snapshot_verification(config.verify_snapshot))
    }
}

impl<P: SortKeyProvider> Reorderer<P> {
    /// Creates a reorderer that verifies snapshot order before every run.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            verify_snapshot: true,
        }
    }

    /// Turns snapshot order verification on or off.
    #[must_use]
    pub fn with_snapshot_verification(mut self, verify: bool) -> Self {
        self.verify_snapshot = verify;
        self
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolves, bisects and generates the new key without committing.
    pub fn plan<T: Ordered>(&self, entities: &[T], request: &ReorderRequest) -> Result<ReorderPlan> {
        if self.verify_snapshot {
            ensure_ascending(entities)?;
        }

        let neighbors = resolve_neighbors(entities, request)?;
        let bisection = bisect(entities, &neighbors)?;

        let lower = bisection.lower_bound();
        let upper = bisection.upper_bound();
        let new_key = self.provider.key_between(lower, upper).inspect_err(|err| {
            if err.is_keyspace_exhausted() {
                warn!(
                    target_id = %request.target_id,
                    keyspace = %self.provider.kind(),
                    ?lower,
                    ?upper,
                    "no key left between neighbors; the collection needs renumbering"
                );
            }
        })?;

        Ok(ReorderPlan {
            target_id: request.target_id.clone(),
            target_index: bisection.target_index,
            previous_key: bisection.target.sort_key().clone(),
            new_key,
        })
    }

    /// Plans the move and commits the target's new key.
    ///
    /// On success exactly one key was written: the target's. On any error
    /// before the commit, `store` was never called.
    pub fn reorder<T, S>(
        &self,
        entities: &[T],
        request: &ReorderRequest,
        store: &mut S,
    ) -> std::result::Result<ReorderPlan, ReorderError<S::Error>>
    where
        T: Ordered,
        S: SortKeyStore + ?Sized,
    {
        let plan = self.plan(entities, request)?;

        if let Err(err) = store.commit_sort_key(&plan.target_id, &plan.new_key) {
            warn!(target_id = %plan.target_id, new_key = %plan.new_key, error = %err, "sort key commit failed");
            return Err(ReorderError::Commit(err));
        }

        debug!(
            target_id = %plan.target_id,
            target_index = plan.target_index,
            previous_key = %plan.previous_key,
            new_key = %plan.new_key,
            "reorder committed"
        );
        Ok(plan)
    }
}

/// One-shot reorder with an explicit provider and store. Returns the new key.
pub fn reorder<T, P, S>(
    entities: &[T],
    request: &ReorderRequest,
    provider: &P,
    store: &mut S,
) -> std::result::Result<SortKey, ReorderError<S::Error>>
where
    T: Ordered,
    P: SortKeyProvider + ?Sized,
    S: SortKeyStore + ?Sized,
{
    Reorderer::new(provider)
        .reorder(entities, request, store)
        .map(|plan| plan.new_key)
}
