use std::future::Future;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Running,
    Done,
}

pub trait Sequence {
    type Step;

    fn phase(&self) -> Phase;

    fn next_delay_ms(&self) -> Option<u32>;

    /// Moves the sequence forward by one step. Implementations must make
    /// progress towards [`Phase::Done`] on every call.
    fn advance(&mut self) -> Option<Self::Step>;
}

pub trait Clock {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct TimerClock;

#[cfg(target_arch = "wasm32")]
impl Clock for TimerClock {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        gloo_timers::future::TimeoutFuture::new(ms)
    }
}

pub async fn drive<S, C, F>(mut sequence: S, clock: &C, mut apply: F)
where
    S: Sequence,
    C: Clock,
    F: FnMut(S::Step),
{
    while let Some(delay) = sequence.next_delay_ms() {
        clock.sleep(delay).await;
        if let Some(step) = sequence.advance() {
            apply(step);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Delayed<T> {
    delay_ms: u32,
    step: Option<T>,
}

impl<T> Delayed<T> {
    pub fn new(delay_ms: u32, step: T) -> Self {
        Self {
            delay_ms,
            step: Some(step),
        }
    }
}

impl<T> Sequence for Delayed<T> {
    type Step = T;

    fn phase(&self) -> Phase {
        if self.step.is_some() {
            Phase::Pending
        } else {
            Phase::Done
        }
    }

    fn next_delay_ms(&self) -> Option<u32> {
        self.step.as_ref().map(|_| self.delay_ms)
    }

    fn advance(&mut self) -> Option<T> {
        self.step.take()
    }
}
