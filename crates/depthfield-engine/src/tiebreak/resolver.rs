use crate::follower::{Follower, FollowerId, FollowerRegistry};

use super::ScreenProjector;

/// Depth step between consecutive members of a tie-break group.
pub const DEPTH_EPSILON: f32 = 0.001;

/// Why a resolution pass did nothing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SkipReason {
    /// The registry holds at most one follower.
    RegistryTooSmall,
    /// The trigger id is not in the registry.
    UnknownTrigger,
    /// The trigger does not track the field.
    NotParticipating,
    /// The trigger's sorting is locked.
    Locked,
}

/// Outcome of one resolution pass.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Resolution {
    Skipped(SkipReason),
    /// No other follower shares the bucket; the trigger's offset was reset to 0.
    Isolated,
    /// `members` followers (trigger included) received fresh offsets.
    Grouped { members: usize },
}

/// Assigns continuous depth offsets to followers that share a render bucket.
///
/// Every pass recomputes the whole group from the registry; nothing is cached
/// between passes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TieBreakResolver {
    epsilon: f32,
}

impl Default for TieBreakResolver {
    fn default() -> Self {
        Self { epsilon: DEPTH_EPSILON }
    }
}

impl TieBreakResolver {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with a custom depth step.
    #[inline]
    pub fn with_epsilon(epsilon: f32) -> Self {
        Self { epsilon }
    }

    #[inline]
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Regroups every follower sharing `trigger`'s bucket and rewrites their offsets.
    ///
    /// Group members are ordered by ascending `screen_y`; the member at sorted
    /// index `k` gets `k * epsilon`. Equal `screen_y` keeps registry order, with
    /// the trigger last. Locked and non-participating followers are never written.
    pub fn resolve<F, P>(
        &self,
        registry: &mut FollowerRegistry<F>,
        trigger: FollowerId,
        projector: &P,
    ) -> Resolution
    where
        F: Follower,
        P: ScreenProjector + ?Sized,
    {
        if registry.len() <= 1 {
            return skip(trigger, SkipReason::RegistryTooSmall);
        }

        let Some(source) = registry.get(trigger) else {
            return skip(trigger, SkipReason::UnknownTrigger);
        };
        if !source.participates() {
            return skip(trigger, SkipReason::NotParticipating);
        }
        if source.sorting_locked() {
            return skip(trigger, SkipReason::Locked);
        }

        let key = source.bucket().clone();
        let trigger_y = projector.screen_y(source.position());

        let mut group: Vec<(FollowerId, f32)> = registry
            .iter()
            .filter(|(id, f)| {
                *id != trigger && f.participates() && !f.sorting_locked() && *f.bucket() == key
            })
            .map(|(id, f)| (id, projector.screen_y(f.position())))
            .collect();

        if group.is_empty() {
            if let Some(source) = registry.get_mut(trigger) {
                source.set_depth_offset(0.0);
            }
            log::trace!("follower {trigger} alone in bucket {key}");
            return Resolution::Isolated;
        }

        group.push((trigger, trigger_y));

        // Bottom of the screen first.
        group.sort_by(|a, b| a.1.total_cmp(&b.1));

        for (k, (id, _)) in group.iter().enumerate() {
            if let Some(member) = registry.get_mut(*id) {
                member.set_depth_offset(k as f32 * self.epsilon);
            }
        }

        log::debug!(
            "follower {trigger} regrouped bucket {key}: {} members",
            group.len()
        );
        Resolution::Grouped { members: group.len() }
    }
}

fn skip(trigger: FollowerId, reason: SkipReason) -> Resolution {
    log::trace!("tie-break for follower {trigger} skipped: {reason:?}");
    Resolution::Skipped(reason)
}
