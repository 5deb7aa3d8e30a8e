use std::cell::{Cell, RefCell};
use std::rc::Rc;
use time::{Duration, OffsetDateTime};
use tracing::debug;
use crate::{
    arena::ArenaAction,
    artwork::ArtworkId,
    config::ArenaConfig,
    feed::SimulatedFeed,
    random::RandomSource,
};

/// Timer backend. Dropping a returned task cancels it.
pub trait Scheduler {
    type Task: 'static;

    fn now(&self) -> OffsetDateTime;

    fn every<F: FnMut() + 'static>(&self, label: &'static str, period: Duration, callback: F) -> Self::Task;

    fn after<F: FnOnce() + 'static>(&self, label: &'static str, delay: Duration, callback: F) -> Self::Task;
}

pub type Dispatch = Rc<dyn Fn(ArenaAction)>;
pub type SharedRandom = Rc<RefCell<dyn RandomSource>>;

struct FeedLoop<S: Scheduler> {
    scheduler: Rc<S>,
    feed: SimulatedFeed,
    rng: SharedRandom,
    dispatch: Dispatch,
    live: Cell<bool>,
    pending: RefCell<Option<S::Task>>,
}

impl<S: Scheduler + 'static> FeedLoop<S> {
    // Each firing draws a fresh delay and replaces its own task.
    fn arm(this: &Rc<Self>) {
        if !this.live.get() {
            return;
        }
        let delay = this.feed.next_delay(&mut *this.rng.borrow_mut());
        let next = Rc::clone(this);
        let task = this.scheduler.after("voter-feed", delay, move || {
            let action = next.feed.next_vote(&mut *next.rng.borrow_mut(), next.scheduler.now());
            (next.dispatch)(action);
            FeedLoop::arm(&next);
        });
        let fired = this.pending.borrow_mut().replace(task);
        drop(fired);
    }
}

impl<S: Scheduler> FeedLoop<S> {
    // The pending task's closure holds an `Rc` back to this loop; taking it
    // breaks the cycle.
    fn stop(&self) {
        self.live.set(false);
        let task = self.pending.borrow_mut().take();
        drop(task);
    }
}

struct VoteDelay<T> {
    _task: T,
    fired: Rc<Cell<bool>>,
}

/// Owns every timer driving an arena: the round clock, the simulated feed and
/// the artificial vote delay. Dropping it cancels all of them.
pub struct ArenaTimers<S: Scheduler> {
    scheduler: Rc<S>,
    config: ArenaConfig,
    dispatch: Dispatch,
    _clock: S::Task,
    feed: Rc<FeedLoop<S>>,
    vote: RefCell<Option<VoteDelay<S::Task>>>,
}

impl<S: Scheduler + 'static> ArenaTimers<S> {
    pub fn start(scheduler: S, config: ArenaConfig, rng: SharedRandom, dispatch: Dispatch) -> Self {
        let scheduler = Rc::new(scheduler);

        let clock = {
            let clock_scheduler = Rc::clone(&scheduler);
            let dispatch = Rc::clone(&dispatch);
            scheduler.every("round-clock", config.tick, move || {
                dispatch(ArenaAction::Tick { at: clock_scheduler.now() });
            })
        };

        let feed = Rc::new(FeedLoop {
            scheduler: Rc::clone(&scheduler),
            feed: SimulatedFeed::new(&config),
            rng,
            dispatch: Rc::clone(&dispatch),
            live: Cell::new(true),
            pending: RefCell::new(None),
        });
        FeedLoop::arm(&feed);
        debug!("arena timers started");

        Self {
            scheduler,
            config,
            dispatch,
            _clock: clock,
            feed,
            vote: RefCell::new(None),
        }
    }

    /// Keeps the vote delay in step with the arena's in-flight vote: arms it
    /// when a vote is pending and none is armed, releases it once nothing is pending.
    pub fn track_vote(&self, pending: Option<ArtworkId>) {
        let mut vote = self.vote.borrow_mut();
        let armed = vote.as_ref().is_some_and(|delay| !delay.fired.get());
        match pending {
            Some(artwork) if !armed => {
                debug!(artwork = %artwork, "awaiting vote confirmation");
                let fired = Rc::new(Cell::new(false));
                let task = {
                    let fired = Rc::clone(&fired);
                    let scheduler = Rc::clone(&self.scheduler);
                    let dispatch = Rc::clone(&self.dispatch);
                    self.scheduler.after("vote-delay", self.config.vote_delay, move || {
                        fired.set(true);
                        dispatch(ArenaAction::CompleteVote { at: scheduler.now() });
                    })
                };
                let previous = vote.replace(VoteDelay { _task: task, fired });
                drop(previous);
            }
            Some(_) => {}
            None => {
                let previous = vote.take();
                drop(previous);
            }
        }
    }
}

impl<S: Scheduler> Drop for ArenaTimers<S> {
    fn drop(&mut self) {
        self.feed.stop();
        debug!("arena timers stopped");
    }
}
