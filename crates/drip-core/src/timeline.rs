//! Periodic ticking and the per-tick sampling display built on it.

use std::fmt;

use rand::Rng;

use crate::sample::Sampler;

/// One firing of a periodic ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Number of whole periods since the ticker was mounted.
    pub index: u64,
    /// Clock time at which this tick was due.
    pub scheduled_ms: u64,
}

/// Lifecycle of a [`Ticker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    Inactive,
    Active {
        started_ms: u64,
        last_index: Option<u64>,
    },
}

/// Fires on a fixed period once mounted. Cadence is best effort: a poll
/// that arrives late reports only the most recent period boundary.
#[derive(Debug, Clone)]
pub struct Ticker {
    period_ms: u64,
    state: TickerState,
}

impl Ticker {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            state: TickerState::Inactive,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn state(&self) -> TickerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TickerState::Active { .. })
    }

    /// Start ticking from `now_ms`. The first poll fires immediately.
    /// Mounting an active ticker does nothing.
    pub fn mount(&mut self, now_ms: u64) {
        if !self.is_active() {
            self.state = TickerState::Active {
                started_ms: now_ms,
                last_index: None,
            };
        }
    }

    /// Stop ticking.
    pub fn unmount(&mut self) {
        self.state = TickerState::Inactive;
    }

    /// Return the latest tick due at `now_ms` that has not been reported.
    pub fn poll(&mut self, now_ms: u64) -> Option<Tick> {
        let TickerState::Active {
            started_ms,
            last_index,
        } = &mut self.state
        else {
            return None;
        };
        let index = now_ms.saturating_sub(*started_ms) / self.period_ms;
        if last_index.is_some_and(|last| last >= index) {
            return None;
        }
        *last_index = Some(index);
        Some(Tick {
            index,
            scheduled_ms: *started_ms + index * self.period_ms,
        })
    }

    /// Milliseconds until the next tick is due, `None` when inactive.
    pub fn until_next_tick(&self, now_ms: u64) -> Option<u64> {
        match self.state {
            TickerState::Inactive => None,
            TickerState::Active {
                last_index: None, ..
            } => Some(0),
            TickerState::Active {
                started_ms,
                last_index: Some(last),
            } => Some((started_ms + (last + 1) * self.period_ms).saturating_sub(now_ms)),
        }
    }
}

/// A value sampled for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSample<T> {
    pub tick: Tick,
    pub value: T,
}

/// Draws a fresh sample on every tick and keeps only the latest one.
pub struct PeriodicDisplay<S: Sampler> {
    ticker: Ticker,
    sampler: S,
    current: Option<TickSample<S::Output>>,
}

impl<S> fmt::Debug for PeriodicDisplay<S>
where
    S: Sampler + fmt::Debug,
    S::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeriodicDisplay")
            .field("ticker", &self.ticker)
            .field("sampler", &self.sampler)
            .field("current", &self.current)
            .finish()
    }
}

impl<S: Sampler> PeriodicDisplay<S> {
    pub fn new(period_ms: u64, sampler: S) -> Self {
        Self {
            ticker: Ticker::new(period_ms),
            sampler,
            current: None,
        }
    }

    pub fn mount(&mut self, now_ms: u64) {
        self.ticker.mount(now_ms);
    }

    /// Stop ticking and drop the current sample.
    pub fn unmount(&mut self) {
        self.ticker.unmount();
        self.current = None;
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn current(&self) -> Option<&TickSample<S::Output>> {
        self.current.as_ref()
    }

    /// Advance to `now_ms`, drawing a new sample if a tick is due.
    /// Returns the new sample when one was drawn.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        rng: &mut R,
    ) -> Option<&TickSample<S::Output>> {
        let tick = self.ticker.poll(now_ms)?;
        let value = self.sampler.sample(rng);
        self.current = Some(TickSample { tick, value });
        self.current.as_ref()
    }
}
