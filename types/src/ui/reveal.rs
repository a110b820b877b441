//! Staggered entrance animation for listing items.
//!
//! Each item owns a [`RevealTrack`]. The first time enough of the item is on
//! screen the track arms a one-shot delay of `index * step`; once the delay
//! runs out the item transitions to fully shown. The pending timer is plain
//! state inside the track, so dropping or resetting the track cancels it.
//!
//! Reveal state is cosmetic: it never gates selection.

use std::time::Duration;

use super::animation::EffectTimer;

/// Timing for one kind of listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerProfile {
    /// Added delay per position in the list.
    pub step: Duration,
    /// Fraction of the item that must be visible to arm the reveal.
    pub threshold: f32,
    /// Length of the transition once the delay has elapsed.
    pub transition: Duration,
}

impl StaggerProfile {
    pub const TIMELINE: Self = Self {
        step: Duration::from_millis(200),
        threshold: 0.1,
        transition: Duration::from_millis(1000),
    };

    pub const CARDS: Self = Self {
        step: Duration::from_millis(250),
        threshold: 0.2,
        transition: Duration::from_millis(1000),
    };

    pub const CONCLUSIONS: Self = Self {
        step: Duration::from_millis(150),
        threshold: 0.2,
        transition: Duration::from_millis(700),
    };

    #[must_use]
    pub fn delay_for(&self, index: usize) -> Duration {
        self.step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

/// What a renderer needs to know about an item's entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPhase {
    /// Never observed on screen.
    Hidden,
    /// Observed; waiting for its stagger delay.
    Pending,
    Revealing { progress: f32 },
    Shown,
}

#[derive(Debug, Clone)]
enum TrackState {
    Hidden,
    Pending { remaining: Duration },
    Revealing(EffectTimer),
    Shown,
}

#[derive(Debug, Clone)]
pub struct RevealTrack {
    profile: StaggerProfile,
    index: usize,
    state: TrackState,
}

impl RevealTrack {
    #[must_use]
    pub fn new(profile: StaggerProfile, index: usize) -> Self {
        Self {
            profile,
            index,
            state: TrackState::Hidden,
        }
    }

    /// Report how much of the item is currently on screen (0.0 to 1.0).
    ///
    /// Arms the reveal the first time the fraction reaches the profile
    /// threshold and returns `true` in that case. Later calls are ignored.
    pub fn observe(&mut self, visible_fraction: f32) -> bool {
        if !matches!(self.state, TrackState::Hidden) {
            return false;
        }
        if visible_fraction <= 0.0 || visible_fraction < self.profile.threshold {
            return false;
        }
        let delay = self.profile.delay_for(self.index);
        self.state = if delay.is_zero() {
            TrackState::Revealing(EffectTimer::new(self.profile.transition))
        } else {
            TrackState::Pending { remaining: delay }
        };
        true
    }

    pub fn advance(&mut self, delta: Duration) {
        match &mut self.state {
            TrackState::Hidden | TrackState::Shown => {}
            TrackState::Pending { remaining } => {
                if delta < *remaining {
                    *remaining -= delta;
                    return;
                }
                let carry = delta - *remaining;
                let mut timer = EffectTimer::new(self.profile.transition);
                timer.advance(carry);
                self.state = if timer.is_finished() {
                    TrackState::Shown
                } else {
                    TrackState::Revealing(timer)
                };
            }
            TrackState::Revealing(timer) => {
                timer.advance(delta);
                if timer.is_finished() {
                    self.state = TrackState::Shown;
                }
            }
        }
    }

    /// Skip straight to the final state.
    pub fn show_now(&mut self) {
        self.state = TrackState::Shown;
    }

    /// Forget any observation and pending timer.
    pub fn reset(&mut self) {
        self.state = TrackState::Hidden;
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        match &self.state {
            TrackState::Hidden => RevealPhase::Hidden,
            TrackState::Pending { .. } => RevealPhase::Pending,
            TrackState::Revealing(timer) if timer.is_finished() => RevealPhase::Shown,
            TrackState::Revealing(timer) => RevealPhase::Revealing {
                progress: timer.progress(),
            },
            TrackState::Shown => RevealPhase::Shown,
        }
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        matches!(self.phase(), RevealPhase::Shown)
    }

    /// Whether the track still has a timer running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(
            self.state,
            TrackState::Pending { .. } | TrackState::Revealing(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealPhase, RevealTrack, StaggerProfile};
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_until_shown(track: &mut RevealTrack) -> Duration {
        let mut elapsed = Duration::ZERO;
        while !track.is_shown() {
            track.advance(FRAME);
            elapsed += FRAME;
            assert!(elapsed < Duration::from_secs(10), "reveal never finished");
        }
        elapsed
    }

    #[test]
    fn delay_scales_with_index() {
        assert_eq!(StaggerProfile::TIMELINE.delay_for(3), Duration::from_millis(600));
        assert_eq!(StaggerProfile::CARDS.delay_for(2), Duration::from_millis(500));
        assert_eq!(StaggerProfile::CONCLUSIONS.delay_for(0), Duration::ZERO);
    }

    #[test]
    fn unobserved_item_stays_hidden() {
        let mut track = RevealTrack::new(StaggerProfile::CARDS, 0);
        track.advance(Duration::from_secs(5));
        assert_eq!(track.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn below_threshold_does_not_arm() {
        let mut track = RevealTrack::new(StaggerProfile::CARDS, 1);
        assert!(!track.observe(0.1));
        assert_eq!(track.phase(), RevealPhase::Hidden);
        assert!(track.observe(0.2));
        assert_eq!(track.phase(), RevealPhase::Pending);
    }

    #[test]
    fn observed_item_is_eventually_shown() {
        let mut track = RevealTrack::new(StaggerProfile::TIMELINE, 2);
        assert!(track.observe(1.0));
        let elapsed = run_until_shown(&mut track);
        assert!(elapsed >= Duration::from_millis(1400));
    }

    #[test]
    fn waits_for_its_stagger_before_revealing() {
        let mut track = RevealTrack::new(StaggerProfile::CARDS, 2);
        track.observe(1.0);
        track.advance(Duration::from_millis(499));
        assert_eq!(track.phase(), RevealPhase::Pending);
        track.advance(Duration::from_millis(101));
        assert!(matches!(track.phase(), RevealPhase::Revealing { progress } if progress > 0.05));
    }

    #[test]
    fn first_item_starts_revealing_immediately() {
        let mut track = RevealTrack::new(StaggerProfile::CONCLUSIONS, 0);
        track.observe(0.5);
        assert!(matches!(track.phase(), RevealPhase::Revealing { .. }));
    }

    #[test]
    fn triggers_once() {
        let mut track = RevealTrack::new(StaggerProfile::CARDS, 1);
        assert!(track.observe(1.0));
        track.advance(Duration::from_millis(100));
        assert!(!track.observe(1.0));
        track.advance(Duration::from_millis(150));
        assert!(matches!(track.phase(), RevealPhase::Revealing { .. }));
    }

    #[test]
    fn large_step_skips_straight_to_shown() {
        let mut track = RevealTrack::new(StaggerProfile::CARDS, 1);
        track.observe(1.0);
        track.advance(Duration::from_secs(3));
        assert_eq!(track.phase(), RevealPhase::Shown);
        assert!(!track.is_animating());
    }

    #[test]
    fn reset_cancels_pending_timer() {
        let mut track = RevealTrack::new(StaggerProfile::TIMELINE, 3);
        track.observe(1.0);
        assert!(track.is_animating());
        track.reset();
        track.advance(Duration::from_secs(5));
        assert_eq!(track.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn show_now_skips_animation() {
        let mut track = RevealTrack::new(StaggerProfile::TIMELINE, 3);
        track.show_now();
        assert!(track.is_shown());
        assert!(!track.observe(1.0));
    }
}
