//! One-shot reveal and chat-panel sequencing.
//!
//! Everything here is generic over [`Stage`] so the timing can be exercised
//! against a virtual clock; `dom.rs` plugs in real elements and observers.

use crate::config;
use crate::schedule::Scheduler;

pub const REVEALED_CLASS: &str = "revealed";
pub const VISIBLE_CLASS: &str = "visible";

/// A page element whose look is driven by CSS class flags.
pub trait Stage {
    fn toggle_class(&self, class: &'static str, on: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unobserved,
    Watching,
    Revealed,
}

/// `Unobserved -> Watching -> Revealed`, with `Revealed` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    state: RevealState,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self {
            state: RevealState::Unobserved,
        }
    }
}

impl RevealLatch {
    pub fn watching() -> Self {
        Self {
            state: RevealState::Watching,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn watch(&mut self) -> bool {
        if self.state == RevealState::Unobserved {
            self.state = RevealState::Watching;
            true
        } else {
            false
        }
    }

    /// True exactly once, on the first hit while watching.
    pub fn fire(&mut self) -> bool {
        if self.state == RevealState::Watching {
            self.state = RevealState::Revealed;
            true
        } else {
            false
        }
    }
}

/// Reveal targets sharing one observer.
pub struct RevealSet<E> {
    targets: Vec<(E, RevealLatch)>,
}

impl<E> Default for RevealSet<E> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
        }
    }
}

impl<E: Stage + PartialEq> RevealSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching `target`. Registering the same element twice is ignored.
    pub fn register(&mut self, target: E) -> bool {
        if self.targets.iter().any(|(known, _)| *known == target) {
            return false;
        }
        let mut latch = RevealLatch::default();
        latch.watch();
        self.targets.push((target, latch));
        true
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn state_of(&self, target: &E) -> Option<RevealState> {
        self.targets
            .iter()
            .find(|(known, _)| known == target)
            .map(|(_, latch)| latch.state())
    }

    /// Applies the `revealed` flag on the first intersecting hit only.
    pub fn on_intersect(&mut self, target: &E, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.targets.iter_mut().find(|(known, _)| known == target) {
            Some((element, latch)) => {
                if !latch.fire() {
                    return false;
                }
                element.toggle_class(REVEALED_CLASS, true);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Message(usize),
    Waiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStep {
    pub at_ms: u32,
    pub cue: Cue,
    pub visible: bool,
}

/// Configured delay for the `index`th message, or `index * 1200` once the list runs out.
pub fn message_delay(delays: &[u32], index: usize) -> u32 {
    delays
        .get(index)
        .copied()
        .unwrap_or_else(|| (index as u32).saturating_mul(config::FALLBACK_STEP_MS))
}

pub fn plan(message_count: usize, delays: &[u32], has_waiting: bool) -> Vec<AnimationStep> {
    let mut steps: Vec<AnimationStep> = (0..message_count)
        .map(|index| AnimationStep {
            at_ms: message_delay(delays, index),
            cue: Cue::Message(index),
            visible: true,
        })
        .collect();

    if has_waiting {
        steps.push(AnimationStep {
            at_ms: config::WAITING_SHOW_MS,
            cue: Cue::Waiting,
            visible: true,
        });
        steps.push(AnimationStep {
            at_ms: config::WAITING_HIDE_MS,
            cue: Cue::Waiting,
            visible: false,
        });
    }
    steps
}

/// A chat panel: messages in document order plus an optional waiting indicator.
pub struct Panel<E> {
    messages: Vec<E>,
    waiting: Option<E>,
    delays: Vec<u32>,
    latch: RevealLatch,
}

impl<E: Stage + Clone + 'static> Panel<E> {
    pub fn new(messages: Vec<E>, waiting: Option<E>, delays: &[u32]) -> Self {
        Self {
            messages,
            waiting,
            delays: delays.to_vec(),
            latch: RevealLatch::watching(),
        }
    }

    pub fn state(&self) -> RevealState {
        self.latch.state()
    }

    pub fn plan(&self) -> Vec<AnimationStep> {
        plan(self.messages.len(), &self.delays, self.waiting.is_some())
    }

    /// Schedules the whole sequence. Later calls do nothing, even if the
    /// observer delivers another hit before it is disconnected.
    pub fn play(&mut self, scheduler: &dyn Scheduler) -> bool {
        if !self.latch.fire() {
            return false;
        }
        for step in self.plan() {
            let target = match step.cue {
                Cue::Message(index) => self.messages.get(index),
                Cue::Waiting => self.waiting.as_ref(),
            };
            let Some(target) = target.cloned() else {
                continue;
            };
            scheduler.schedule(
                step.at_ms,
                Box::new(move || target.toggle_class(VISIBLE_CLASS, step.visible)),
            );
        }
        true
    }
}

/// Panels that start together when their shared trigger comes into view.
pub struct PanelGroup<E> {
    panels: Vec<Panel<E>>,
}

impl<E: Stage + Clone + 'static> PanelGroup<E> {
    pub fn new(panels: Vec<Panel<E>>) -> Self {
        Self { panels }
    }

    pub fn panels(&self) -> &[Panel<E>] {
        &self.panels
    }

    pub fn on_intersect(&mut self, intersecting: bool, scheduler: &dyn Scheduler) -> bool {
        if !intersecting {
            return false;
        }
        let mut started = false;
        for panel in &mut self.panels {
            started |= panel.play(scheduler);
        }
        started
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{ClassLog, Marker};
    use super::*;
    use crate::schedule::VirtualClock;

    fn markers(ids: std::ops::Range<usize>, clock: &VirtualClock, log: &ClassLog) -> Vec<Marker> {
        ids.map(|id| Marker::new(id, clock, log)).collect()
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.fire());
        assert!(latch.watch());
        assert!(!latch.watch());
        assert!(latch.fire());
        assert!(!latch.fire());
        assert_eq!(latch.state(), RevealState::Revealed);
    }

    #[test]
    fn reveal_applies_once_under_repeated_hits() {
        let clock = VirtualClock::new();
        let log = ClassLog::default();
        let mut set = RevealSet::new();
        let card = Marker::new(1, &clock, &log);
        assert!(set.register(card.clone()));
        assert!(!set.register(card.clone()));

        assert!(!set.on_intersect(&card, false));
        assert_eq!(set.state_of(&card), Some(RevealState::Watching));
        assert!(set.on_intersect(&card, true));
        assert!(!set.on_intersect(&card, true));
        assert!(!set.on_intersect(&card, true));

        assert_eq!(*log.borrow(), vec![(0, 1, REVEALED_CLASS, true)]);
        assert_eq!(set.state_of(&card), Some(RevealState::Revealed));
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let clock = VirtualClock::new();
        let log = ClassLog::default();
        let mut set = RevealSet::new();
        set.register(Marker::new(1, &clock, &log));
        assert!(!set.on_intersect(&Marker::new(2, &clock, &log), true));
        assert!(log.borrow().is_empty());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn messages_show_at_their_delays() {
        let clock = VirtualClock::new();
        let log = ClassLog::default();
        let mut panel = Panel::new(markers(0..3, &clock, &log), None, &[300, 900, 2000]);

        assert!(panel.play(&clock));
        clock.advance(299);
        assert!(log.borrow().is_empty());
        clock.advance(10_000);

        assert_eq!(
            *log.borrow(),
            vec![
                (300, 0, VISIBLE_CLASS, true),
                (900, 1, VISIBLE_CLASS, true),
                (2000, 2, VISIBLE_CLASS, true),
            ]
        );
    }

    #[test]
    fn missing_delays_fall_back_to_index_steps() {
        assert_eq!(message_delay(&[300, 900, 2000], 3), 3600);
        assert_eq!(message_delay(&[], 0), 0);

        let clock = VirtualClock::new();
        let log = ClassLog::default();
        let mut panel = Panel::new(markers(0..4, &clock, &log), None, &[300, 900, 2000]);
        panel.play(&clock);
        clock.advance(3599);
        assert_eq!(log.borrow().len(), 3);
        clock.advance(1);
        assert_eq!(log.borrow().last(), Some(&(3600, 3, VISIBLE_CLASS, true)));
    }

    #[test]
    fn waiting_indicator_blinks_between_messages() {
        let clock = VirtualClock::new();
        let log = ClassLog::default();
        let waiting = Marker::new(99, &clock, &log);
        let mut panel = Panel::new(markers(0..2, &clock, &log), Some(waiting), &[300, 900]);
        panel.play(&clock);
        clock.advance(5000);

        let waiting_changes: Vec<_> = log
            .borrow()
            .iter()
            .filter(|(_, id, _, _)| *id == 99)
            .map(|(at, _, _, on)| (*at, *on))
            .collect();
        assert_eq!(waiting_changes, vec![(1400, true), (3600, false)]);
    }

    #[test]
    fn panel_never_schedules_twice() {
        let clock = VirtualClock::new();
        let log = ClassLog::default();
        let mut panel = Panel::new(markers(0..3, &clock, &log), None, &[300, 900, 2000]);
        assert!(panel.play(&clock));
        assert!(!panel.play(&clock));
        assert_eq!(clock.pending(), 3);
        assert_eq!(panel.state(), RevealState::Revealed);
    }

    #[test]
    fn group_starts_every_panel_from_one_trigger() {
        let clock = VirtualClock::new();
        let log = ClassLog::default();
        let wrong = Panel::new(
            markers(0..7, &clock, &log),
            Some(Marker::new(50, &clock, &log)),
            &config::WRONG_PANEL_DELAYS,
        );
        let right = Panel::new(markers(10..12, &clock, &log), None, &config::RIGHT_PANEL_DELAYS);
        let mut group = PanelGroup::new(vec![wrong, right]);

        assert!(!group.on_intersect(false, &clock));
        assert_eq!(clock.pending(), 0);
        assert!(group.on_intersect(true, &clock));
        assert!(!group.on_intersect(true, &clock));
        assert_eq!(clock.pending(), 7 + 2 + 2);

        clock.advance(7400);
        let right_times: Vec<_> = log
            .borrow()
            .iter()
            .filter(|(_, id, _, _)| *id >= 10 && *id < 50)
            .map(|(at, _, _, _)| *at)
            .collect();
        assert_eq!(right_times, vec![300, 1500]);
        assert!(group
            .panels()
            .iter()
            .all(|panel| panel.state() == RevealState::Revealed));
    }

    #[test]
    fn group_without_messages_schedules_nothing() {
        let clock = VirtualClock::new();
        let mut empty: PanelGroup<Marker> = PanelGroup::new(Vec::new());
        assert!(!empty.on_intersect(true, &clock));

        let mut bare = PanelGroup::new(vec![Panel::<Marker>::new(Vec::new(), None, &[300, 900])]);
        bare.on_intersect(true, &clock);
        assert_eq!(clock.pending(), 0);
        clock.advance(10_000);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn empty_panel_plans_nothing() {
        assert!(plan(0, &[300], false).is_empty());
        assert_eq!(plan(0, &[], true).len(), 2);
    }
}
