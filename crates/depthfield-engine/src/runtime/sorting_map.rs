use crate::field::SortingField;
use crate::follower::{FieldFollower, FollowerId, FollowerRegistry};
use crate::tiebreak::{Resolution, ScreenProjector, TieBreakResolver};

/// Counters from one [`SortingMap::update`] pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameReport {
    /// Participating followers that were rescaled.
    pub scaled: usize,
    /// Followers whose render bucket changed this frame.
    pub bucket_changes: usize,
    /// Tie-break passes that wrote offsets.
    pub resolutions: usize,
}

/// A sorting field together with its followers.
#[derive(Debug, Clone)]
pub struct SortingMap<F> {
    field: SortingField,
    followers: FollowerRegistry<F>,
    resolver: TieBreakResolver,
    changed: Vec<FollowerId>,
}

impl<F: FieldFollower> SortingMap<F> {
    pub fn new(field: SortingField) -> Self {
        Self {
            field,
            followers: FollowerRegistry::new(),
            resolver: TieBreakResolver::default(),
            changed: Vec::new(),
        }
    }

    pub fn with_resolver(mut self, resolver: TieBreakResolver) -> Self {
        self.resolver = resolver;
        self
    }

    #[inline]
    pub fn field(&self) -> &SortingField {
        &self.field
    }

    #[inline]
    pub fn field_mut(&mut self) -> &mut SortingField {
        &mut self.field
    }

    #[inline]
    pub fn followers(&self) -> &FollowerRegistry<F> {
        &self.followers
    }

    #[inline]
    pub fn followers_mut(&mut self) -> &mut FollowerRegistry<F> {
        &mut self.followers
    }

    #[inline]
    pub fn follower(&self, id: FollowerId) -> Option<&F> {
        self.followers.get(id)
    }

    pub fn register(&mut self, follower: F) -> FollowerId {
        self.followers.register(follower)
    }

    pub fn remove(&mut self, id: FollowerId) -> Option<F> {
        self.followers.remove(id)
    }

    /// Runs a tie-break pass for `id` outside the frame loop, e.g. right after
    /// the host placed a new follower.
    pub fn resolve<P>(&mut self, id: FollowerId, projector: &P) -> Resolution
    where
        P: ScreenProjector + ?Sized,
    {
        self.resolver.resolve(&mut self.followers, id, projector)
    }

    /// Rescales every participating follower, moves it into the bucket of the
    /// area it stands in, and re-resolves each bucket change in registry order.
    pub fn update<P>(&mut self, projector: &P) -> FrameReport
    where
        P: ScreenProjector + ?Sized,
    {
        let mut report = FrameReport::default();
        self.changed.clear();

        for (id, follower) in self.followers.iter_mut() {
            if !follower.participates() {
                continue;
            }

            let position = follower.position();
            follower.set_scale(self.field.scale_factor_at(position));
            report.scaled += 1;

            let next = self.field.bucket_at(position, follower.bucket());
            if next != *follower.bucket() {
                log::trace!("follower {id} moved {} -> {next}", follower.bucket());
                follower.set_bucket(next);
                self.changed.push(id);
            }
        }

        report.bucket_changes = self.changed.len();

        for &id in &self.changed {
            match self.resolver.resolve(&mut self.followers, id, projector) {
                Resolution::Skipped(_) => {}
                Resolution::Isolated | Resolution::Grouped { .. } => report.resolutions += 1,
            }
        }

        report
    }
}
