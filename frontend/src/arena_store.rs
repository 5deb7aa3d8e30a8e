use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;
use time::OffsetDateTime;
use yew::functional::hook;
use yew::prelude::*;
use shared::{Arena, ArenaAction, ArenaConfig, ArenaTimers, ArtworkId, Dispatch, RngSource, SharedRandom, Transition};
use crate::tasks::BrowserScheduler;

#[derive(Clone, PartialEq)]
pub struct ArenaStore {
    arena: Arena,
}

impl ArenaStore {
    pub fn new(config: ArenaConfig) -> Self {
        Self { arena: Arena::new(config, OffsetDateTime::now_utc()) }
    }
}

impl Deref for ArenaStore {
    type Target = Arena;

    fn deref(&self) -> &Arena {
        &self.arena
    }
}

impl Reducible for ArenaStore {
    type Action = ArenaAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.arena.apply(action) {
            Transition::Ignored => self,
            _ => Rc::new(next),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ArenaHandle {
    pub state: UseReducerHandle<ArenaStore>,
    pub vote: Callback<ArtworkId>,
}

/// Owns the arena state and the [`ArenaTimers`] driving it. The timers are
/// started on mount and dropped on unmount, which cancels the round clock,
/// the simulated feed and any pending vote delay.
#[hook]
pub fn use_arena(config: ArenaConfig) -> ArenaHandle {
    let state = use_reducer(move || ArenaStore::new(config));
    let timers = use_mut_ref(|| None::<ArenaTimers<BrowserScheduler>>);

    {
        let timers = timers.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(move |_| {
            let rng: SharedRandom = Rc::new(RefCell::new(RngSource::from_entropy()));
            let dispatch: Dispatch = Rc::new(move |action: ArenaAction| dispatcher.dispatch(action));
            *timers.borrow_mut() = Some(ArenaTimers::start(BrowserScheduler, config, rng, dispatch));
            move || {
                let stopped = timers.borrow_mut().take();
                drop(stopped);
            }
        }, ());
    }

    {
        let timers = timers.clone();
        use_effect_with_deps(move |pending: &Option<ArtworkId>| {
            if let Some(timers) = timers.borrow().as_ref() {
                timers.track_vote(*pending);
            }
            || ()
        }, state.pending_vote());
    }

    let vote = {
        let state = state.clone();
        Callback::from(move |artwork: ArtworkId| {
            state.dispatch(ArenaAction::BeginVote { artwork });
        })
    };

    ArenaHandle { state, vote }
}
