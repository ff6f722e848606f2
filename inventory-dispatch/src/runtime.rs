//! The event/action/render loop
//!
//! [`EffectRuntime`] owns the store, the action channel and the task
//! manager. Each loop iteration renders if the last action changed state,
//! then waits on whichever comes first: terminal input, a tick, or an
//! action (from input mapping or a finished task).

use std::future;
use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use crate::store::{EffectReducer, Middleware, StoreWithMiddleware};
use crate::tasks::TaskManager;
use crate::Action;

/// Timings for the terminal event poller
#[derive(Debug, Clone, Copy)]
struct PollerConfig {
    /// Timeout passed to each `crossterm::event::poll` call
    poll_timeout: Duration,
    /// Sleep between poll cycles
    loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Result of mapping an event: actions to enqueue plus a render hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    pub actions: Vec<A>,
    /// Force a re-render even if no action changes state
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    pub fn needs_render() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: true,
        }
    }

    pub fn action(action: A) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }

    /// Collect from any iterator, e.g. a `Component::handle_event` result
    pub fn from_actions(iter: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }

    pub fn is_ignored(&self) -> bool {
        self.actions.is_empty() && !self.needs_render
    }
}

impl<A> Default for EventOutcome<A> {
    fn default() -> Self {
        Self::ignored()
    }
}

impl<A> From<Option<A>> for EventOutcome<A> {
    fn from(action: Option<A>) -> Self {
        match action {
            Some(action) => Self::action(action),
            None => Self::ignored(),
        }
    }
}

impl<A> From<Vec<A>> for EventOutcome<A> {
    fn from(actions: Vec<A>) -> Self {
        Self::from_actions(actions)
    }
}

/// What an effect handler gets to work with
pub struct EffectContext<'a, A: Action> {
    tasks: &'a mut TaskManager<A>,
}

impl<'a, A: Action> EffectContext<'a, A> {
    pub fn new(tasks: &'a mut TaskManager<A>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        self.tasks
    }
}

/// Runtime for effect-based stores
pub struct EffectRuntime<S, A: Action, E, M: Middleware<A>> {
    store: StoreWithMiddleware<S, A, E, M>,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    tasks: TaskManager<A>,
    poller: Option<PollerConfig>,
    tick_rate: Option<Duration>,
    should_render: bool,
}

impl<S, A: Action, E, M: Middleware<A>> EffectRuntime<S, A, E, M> {
    pub fn new(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());

        Self {
            store: StoreWithMiddleware::new(state, reducer, middleware),
            action_tx,
            action_rx,
            tasks,
            poller: Some(PollerConfig::default()),
            tick_rate: None,
            should_render: true,
        }
    }

    /// Run without reading the terminal; input arrives only via `enqueue`
    pub fn without_event_poller(mut self) -> Self {
        self.poller = None;
        self
    }

    /// Deliver [`EventKind::Tick`] to `map_event` at this interval
    pub fn with_tick_rate(mut self, rate: Duration) -> Self {
        self.tick_rate = Some(rate);
        self
    }

    /// Send an action into the runtime queue
    pub fn enqueue(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    pub fn action_tx(&self) -> mpsc::UnboundedSender<A> {
        self.action_tx.clone()
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Dispatch one action and hand its effects to `handle_effect`
    ///
    /// Returns whether the state changed.
    pub fn dispatch<FEffect>(&mut self, action: A, handle_effect: &mut FEffect) -> bool
    where
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let result = self.store.dispatch(action);
        if result.has_effects() {
            let mut ctx = EffectContext::new(&mut self.tasks);
            for effect in result.effects {
                handle_effect(effect, &mut ctx);
            }
        }
        result.changed
    }

    /// Run the event/action loop until `should_quit` accepts an action
    pub async fn run<B, FRender, FEvent, FQuit, FEffect, R>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> R,
        R: Into<EventOutcome<A>>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = self.poller.map(|config| {
            spawn_event_poller(
                event_tx,
                config.poll_timeout,
                config.loop_sleep,
                cancel_token.clone(),
            )
        });

        let mut ticker = self.tick_rate.map(|rate| {
            let mut interval = tokio::time::interval(rate);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| {
                    let area = frame.area();
                    render(frame, area, state);
                })?;
                self.should_render = false;
            }

            let event = tokio::select! {
                Some(raw_event) = event_rx.recv() => Some(process_raw_event(raw_event)),

                _ = next_tick(&mut ticker) => Some(EventKind::Tick),

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        debug!(action = action.name(), "Quit requested");
                        break;
                    }
                    if self.dispatch(action, &mut handle_effect) {
                        self.should_render = true;
                    }
                    None
                }

                else => break,
            };

            if let Some(event) = event {
                let outcome: EventOutcome<A> = map_event(&event, self.store.state()).into();
                if outcome.needs_render || matches!(event, EventKind::Resize(..)) {
                    self.should_render = true;
                }
                for action in outcome.actions {
                    let _ = self.action_tx.send(action);
                }
            }
        }

        cancel_token.cancel();
        self.tasks.cancel_all();
        Ok(())
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DispatchResult, NoopMiddleware};
    use ratatui::backend::TestBackend;
    use ratatui::widgets::Paragraph;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Add(i32),
        Load,
        DidLoad(i32),
        Tick,
        Quit,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Add(_) => "Add",
                TestAction::Load => "Load",
                TestAction::DidLoad(_) => "DidLoad",
                TestAction::Tick => "Tick",
                TestAction::Quit => "Quit",
            }
        }
    }

    enum TestEffect {
        Fetch,
    }

    #[derive(Default)]
    struct TestState {
        total: i32,
        ticks: u32,
    }

    fn reducer(state: &mut TestState, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Add(n) | TestAction::DidLoad(n) => {
                state.total += n;
                DispatchResult::changed()
            }
            TestAction::Load => DispatchResult::effect(TestEffect::Fetch),
            TestAction::Tick => {
                state.ticks += 1;
                DispatchResult::changed()
            }
            TestAction::Quit => DispatchResult::unchanged(),
        }
    }

    fn spawn_fetch(effect: TestEffect, ctx: &mut EffectContext<TestAction>) {
        match effect {
            TestEffect::Fetch => {
                ctx.tasks().spawn("fetch", async { TestAction::DidLoad(5) });
            }
        }
    }

    #[test]
    fn test_event_outcome_conversions() {
        let outcome: EventOutcome<TestAction> = None.into();
        assert!(outcome.is_ignored());

        let outcome: EventOutcome<TestAction> = Some(TestAction::Quit).into();
        assert_eq!(outcome.actions, vec![TestAction::Quit]);

        let outcome = EventOutcome::<TestAction>::needs_render();
        assert!(!outcome.is_ignored());
    }

    #[tokio::test]
    async fn test_dispatch_runs_effects() {
        let mut runtime = EffectRuntime::new(TestState::default(), reducer, NoopMiddleware);

        let changed = runtime.dispatch(TestAction::Load, &mut spawn_fetch);
        assert!(!changed);

        let action = tokio::time::timeout(Duration::from_millis(200), runtime.action_rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");
        assert_eq!(action, TestAction::DidLoad(5));
    }

    #[tokio::test]
    async fn test_run_processes_queue_until_quit() {
        let mut runtime = EffectRuntime::new(TestState::default(), reducer, NoopMiddleware)
            .without_event_poller();
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();

        runtime.enqueue(TestAction::Add(2));
        runtime.enqueue(TestAction::Load);

        let tx = runtime.action_tx();
        let result = runtime
            .run(
                &mut terminal,
                |frame, area, state| {
                    frame.render_widget(Paragraph::new(format!("total {}", state.total)), area);
                },
                |_event, _state| None::<TestAction>,
                |action| *action == TestAction::Quit,
                |effect, ctx| {
                    spawn_fetch(effect, ctx);
                    let _ = tx.send(TestAction::Quit);
                },
            )
            .await;

        assert!(result.is_ok());
        assert_eq!(runtime.state().total, 2);
    }

    #[tokio::test]
    async fn test_ticks_reach_map_event() {
        let mut runtime = EffectRuntime::new(TestState::default(), reducer, NoopMiddleware)
            .without_event_poller()
            .with_tick_rate(Duration::from_millis(5));
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();

        runtime
            .run(
                &mut terminal,
                |_frame, _area, _state| {},
                |event, state| match event {
                    EventKind::Tick if state.ticks >= 3 => Some(TestAction::Quit),
                    EventKind::Tick => Some(TestAction::Tick),
                    _ => None,
                },
                |action| *action == TestAction::Quit,
                |_effect, _ctx| {},
            )
            .await
            .unwrap();

        assert_eq!(runtime.state().ticks, 3);
    }
}
