use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A thread-safe, reference-counted resource container with read-write locking.
///
/// `MtResource` wraps an `Arc<RwLock<T>>` so a value produced on one thread can be
/// read from another. The chunk uses it to publish finished mesh buffers: the
/// writer swaps a whole new value in under the write lock, readers only ever see
/// the previous value or the next one.
///
/// A poisoned lock is recovered rather than propagated; the stored value is
/// always replaced wholesale, so a panic mid-write cannot leave it half updated.
///
/// # Examples
///
/// ```
/// use voxel_terrain::core::MtResource;
///
/// let counter = MtResource::new(0);
/// let reader = counter.clone();
///
/// counter.replace(1);
/// assert_eq!(*reader.get(), 1);
/// ```
pub struct MtResource<T: Send + Sync> {
    resource: Arc<RwLock<T>>,
}

impl<T: Send + Sync> MtResource<T> {
    /// Creates a new `MtResource` containing the given value.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Arc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read guard over the contained value.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a write guard over the contained value.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Swaps in a new value, returning the one it replaced.
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.get_mut(), value)
    }
}

impl<T: Send + Sync + Clone> MtResource<T> {
    /// Clones the current value out of the lock.
    ///
    /// With `T = Arc<_>` this is a cheap snapshot that stays valid after later swaps.
    pub fn snapshot(&self) -> T {
        self.get().clone()
    }
}

impl<T: Send + Sync> Clone for MtResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}
