use core::fmt;

/// Stable handle to a follower inside one [`FollowerRegistry`].
///
/// Ids grow monotonically and are never reused by the same registry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FollowerId(u64);

impl FollowerId {
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FollowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Entry<F> {
    id: FollowerId,
    follower: F,
}

/// Followers subscribed to one sorting field, in registration order.
///
/// Performance characteristics:
/// - `register()` is O(1)
/// - lookups by id are O(log n) (entries stay sorted by id)
/// - `remove()` is O(n) to preserve order
#[derive(Debug, Clone)]
pub struct FollowerRegistry<F> {
    entries: Vec<Entry<F>>,
    next_id: u64,
}

impl<F> Default for FollowerRegistry<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<F> FollowerRegistry<F> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a follower; it is visible to the next resolution immediately.
    pub fn register(&mut self, follower: F) -> FollowerId {
        // 64-bit ids cannot be exhausted; they stay ascending for binary search.
        let id = FollowerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, follower });
        id
    }

    pub fn remove(&mut self, id: FollowerId) -> Option<F> {
        let index = self.index_of(id)?;
        Some(self.entries.remove(index).follower)
    }

    /// Replaces the whole set with a fresh snapshot from the host.
    ///
    /// Previously issued ids become stale.
    pub fn refresh<I>(&mut self, followers: I) -> Vec<FollowerId>
    where
        I: IntoIterator<Item = F>,
    {
        self.entries.clear();
        let ids: Vec<FollowerId> = followers.into_iter().map(|f| self.register(f)).collect();
        log::debug!("follower registry refreshed: {} followers", ids.len());
        ids
    }

    pub fn get(&self, id: FollowerId) -> Option<&F> {
        self.index_of(id).map(|i| &self.entries[i].follower)
    }

    pub fn get_mut(&mut self, id: FollowerId) -> Option<&mut F> {
        self.index_of(id).map(move |i| &mut self.entries[i].follower)
    }

    pub fn contains(&self, id: FollowerId) -> bool {
        self.index_of(id).is_some()
    }

    /// Iterates followers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (FollowerId, &F)> {
        self.entries.iter().map(|e| (e.id, &e.follower))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FollowerId, &mut F)> {
        self.entries.iter_mut().map(|e| (e.id, &mut e.follower))
    }

    fn index_of(&self, id: FollowerId) -> Option<usize> {
        self.entries.binary_search_by_key(&id, |e| e.id).ok()
    }
}
