//! Scroll progress source: trigger registration and per-tick sampling.
//!
//! Triggers are polled, not called back: the page evaluator drains
//! [`TriggerSet::advance`] once per tick, so every mapper observes the same
//! scroll snapshot. A trigger whose element is detached is inert, which is a
//! valid state and not an error. Every registration must be released (or the
//! whole set dropped) when its owning section is torn down.

use std::collections::BTreeMap;

use crate::{
    core::{approach, ScrollRange, ScrollSample},
    error::{ScrollkitError, ScrollkitResult},
};

/// Exponential decay applied to raw velocity samples to kill scroll jitter.
const VELOCITY_SMOOTHING: f64 = 0.2;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TriggerId(u64);

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct TriggerSpec {
    pub range: ScrollRange,
    /// Hold the element fixed relative to the viewport while in range.
    pub pin: bool,
    /// Scrub catch-up time in seconds. 0 couples progress rigidly to scroll;
    /// larger values ease displayed progress toward the raw value.
    pub scrub: f64,
    /// One-shot: fire a single `entered` event, then go inert. Never re-armed.
    pub once: bool,
}

impl TriggerSpec {
    pub fn scrubbed(range: ScrollRange, scrub: f64) -> Self {
        Self {
            range,
            pin: false,
            scrub,
            once: false,
        }
    }

    pub fn pinned(range: ScrollRange, scrub: f64) -> Self {
        Self {
            range,
            pin: true,
            scrub,
            once: false,
        }
    }

    pub fn once(range: ScrollRange) -> Self {
        Self {
            range,
            pin: false,
            scrub: 0.0,
            once: true,
        }
    }
}

/// Armed/fired tag for one-shot triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OneShot {
    Armed,
    Fired,
}

#[derive(Debug)]
struct Registration {
    spec: TriggerSpec,
    attached: bool,
    one_shot: OneShot,
    displayed_progress: f64,
    velocity: f64,
    last: ScrollSample,
}

/// Event emitted for one trigger during one [`TriggerSet::advance`].
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct TriggerEvent {
    pub id: TriggerId,
    pub sample: ScrollSample,
    /// True exactly once per `once` trigger, on the tick it fires.
    pub entered: bool,
    /// Layout offset holding a pinned element fixed while its range is
    /// active. `None` when unpinned or out of range.
    pub pin_offset: Option<f64>,
}

/// Registry of scroll triggers, advanced once per render tick.
#[derive(Debug, Default)]
pub struct TriggerSet {
    next_id: u64,
    regs: BTreeMap<TriggerId, Registration>,
}

impl TriggerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spec: TriggerSpec) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.regs.insert(
            id,
            Registration {
                spec,
                attached: true,
                one_shot: OneShot::Armed,
                displayed_progress: 0.0,
                velocity: 0.0,
                last: ScrollSample::rest(),
            },
        );
        tracing::debug!(?id, ?spec, "trigger registered");
        id
    }

    /// Release a registration. Required on section teardown; a released id
    /// never fires again.
    pub fn release(&mut self, id: TriggerId) -> ScrollkitResult<()> {
        self.regs
            .remove(&id)
            .map(|_| tracing::debug!(?id, "trigger released"))
            .ok_or_else(|| ScrollkitError::trigger(format!("release of unknown trigger {id:?}")))
    }

    /// Mark the trigger's element attached/detached. Detached triggers emit
    /// nothing and keep their state frozen.
    pub fn set_attached(&mut self, id: TriggerId, attached: bool) -> ScrollkitResult<()> {
        let reg = self
            .regs
            .get_mut(&id)
            .ok_or_else(|| ScrollkitError::trigger(format!("unknown trigger {id:?}")))?;
        reg.attached = attached;
        Ok(())
    }

    /// Latest sample emitted for `id`, if any.
    pub fn sample(&self, id: TriggerId) -> Option<ScrollSample> {
        self.regs.get(&id).map(|r| r.last)
    }

    pub fn len(&self) -> usize {
        self.regs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Advance every live trigger against one consistent `scroll_y` snapshot.
    ///
    /// `dt` is elapsed seconds since the previous tick; `dt <= 0` keeps the
    /// previous velocity instead of dividing by it.
    pub fn advance(&mut self, scroll_y: f64, dt: f64) -> Vec<TriggerEvent> {
        let mut events = Vec::with_capacity(self.regs.len());

        for (&id, reg) in self.regs.iter_mut() {
            if !reg.attached {
                continue;
            }

            let raw = reg.spec.range.progress_at(scroll_y);

            match reg.one_shot {
                OneShot::Fired if reg.spec.once => continue,
                _ => {}
            }

            if reg.spec.once {
                if raw <= 0.0 {
                    continue;
                }
                reg.one_shot = OneShot::Fired;
                reg.last = ScrollSample {
                    progress: raw,
                    velocity: 0.0,
                };
                tracing::trace!(?id, "one-shot trigger fired");
                events.push(TriggerEvent {
                    id,
                    sample: reg.last,
                    entered: true,
                    pin_offset: None,
                });
                continue;
            }

            let progress = if reg.spec.scrub > 0.0 && dt > 0.0 {
                approach(reg.displayed_progress, raw, (dt / reg.spec.scrub).min(1.0))
            } else {
                raw
            };

            if dt > 0.0 {
                // Velocity is reported in document px/s, not progress units,
                // so velocity-driven cosmetics see comparable magnitudes
                // whatever the range length.
                let raw_velocity =
                    (progress - reg.displayed_progress) / dt * reg.spec.range.len_px();
                reg.velocity = approach(reg.velocity, raw_velocity, VELOCITY_SMOOTHING);
            }
            reg.displayed_progress = progress;

            reg.last = ScrollSample {
                progress,
                velocity: reg.velocity,
            };

            let pin_offset = (reg.spec.pin && reg.spec.range.contains(scroll_y))
                .then(|| (scroll_y - reg.spec.range.start).clamp(0.0, reg.spec.range.len_px()));

            events.push(TriggerEvent {
                id,
                sample: reg.last,
                entered: false,
                pin_offset,
            });
        }

        events
    }
}
