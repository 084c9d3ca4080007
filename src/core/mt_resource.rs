use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A thread-safe, reference-counted handle with read-write locking.
///
/// `MtResource` lets several owners share one value across threads. Readers
/// proceed concurrently; a writer waits until every reader is gone. For a
/// shared `World` this is what keeps chunk loading and unloading from
/// interleaving with a meshing pass that reads neighbor chunks.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use cgmath::Point3;
/// use voxel_mesher::core::MtResource;
/// use voxel_mesher::voxels::{chunk::Chunk, world::World};
///
/// let world = MtResource::new(World::new());
/// let loader = world.clone();
///
/// thread::spawn(move || {
///     loader.get_mut().load(Chunk::empty(Point3::new(0, 0, 0))).unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(world.get().len(), 1);
/// ```
///
/// # Lock Poisoning
/// A panic while a guard is held poisons the lock. `get` and `get_mut` recover
/// the guard anyway: world mutations are single map operations and never
/// leave the value half-written.
pub struct MtResource<T: Send + Sync> {
    resource: Arc<RwLock<T>>,
}

impl<T: Send + Sync> MtResource<T> {
    /// Creates a new `MtResource` owning `resource`.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Arc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read guard. Blocks while a writer holds the lock.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a write guard. Blocks until every other guard is released.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Send + Sync> Clone for MtResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: Arc::clone(&self.resource),
        }
    }
}
