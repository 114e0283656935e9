//! Countdown controller: owns the input and timer state and drives the ticker

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::{runtime::Handle, sync::{broadcast, watch}, task::JoinHandle};
use tracing::{debug, error, info, warn};

use super::{DisplayState, TimerInput, TimerPhase, TimerState};
use crate::tasks::countdown_ticker_task;

/// Notifications published by the controller, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    Started { total_seconds: u64 },
    Tick { remaining_seconds: u64 },
    Paused { remaining_seconds: u64 },
    Stopped,
    /// Emitted once per countdown run when it reaches zero
    Finished,
}

#[derive(Debug)]
struct Inner {
    input: TimerInput,
    timer: TimerState,
    time: String,
    show_countdown: bool,
    /// Identifies the current ticker run; ticks from older runs are dropped
    generation: u64,
    ticker: Option<JoinHandle<()>>,
}

impl Inner {
    fn display(&self) -> DisplayState {
        DisplayState::project(&self.input, &self.timer, self.time.clone(), self.show_countdown)
    }

    /// Stop the active ticker and invalidate any tick it still has in flight
    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        self.generation += 1;
    }
}

#[derive(Debug)]
struct Shared {
    inner: Mutex<Inner>,
    display_tx: watch::Sender<DisplayState>,
    event_tx: broadcast::Sender<TimerEvent>,
}

/// Handle to the countdown state machine
///
/// Cloning yields another handle to the same controller. All observers read
/// through [`subscribe_display`](Self::subscribe_display) and
/// [`subscribe_events`](Self::subscribe_events).
#[derive(Debug, Clone)]
pub struct CountdownController {
    shared: Arc<Shared>,
}

impl CountdownController {
    /// Create an idle controller with the default input values
    pub fn new() -> Self {
        let inner = Inner {
            input: TimerInput::new(),
            timer: TimerState::new(),
            time: DisplayState::new().time,
            show_countdown: false,
            generation: 0,
            ticker: None,
        };
        let (display_tx, _) = watch::channel(inner.display());
        let (event_tx, _) = broadcast::channel(64);

        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(inner),
                display_tx,
                event_tx,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.shared.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Published while the lock is held so observers see changes in order
    fn publish(&self, inner: &Inner) {
        self.shared.display_tx.send_replace(inner.display());
    }

    fn emit(&self, event: TimerEvent) {
        if let Err(e) = self.shared.event_tx.send(event) {
            debug!("No event subscribers for {:?}", e.0);
        }
    }

    /// Edit the minutes field; invalid keystrokes are ignored
    pub fn set_minutes_text(&self, text: &str) {
        let mut inner = self.lock();
        if !inner.input.set_minutes_text(text) {
            debug!("Ignoring minutes edit {:?}, keeping {:?}", text, inner.input.minutes_text);
        }
        self.publish(&inner);
    }

    /// Edit the seconds field; invalid keystrokes are ignored
    pub fn set_seconds_text(&self, text: &str) {
        let mut inner = self.lock();
        if !inner.input.set_seconds_text(text) {
            debug!("Ignoring seconds edit {:?}, keeping {:?}", text, inner.input.seconds_text);
        }
        self.publish(&inner);
    }

    /// Parsed minutes field, 0 when empty or unparseable
    pub fn minutes(&self) -> u32 {
        self.lock().input.minutes()
    }

    /// Parsed seconds field, 0 when empty or unparseable
    pub fn seconds(&self) -> u32 {
        self.lock().input.seconds()
    }

    /// Start counting down from the current input fields
    ///
    /// Callers must reject a zero-length countdown before calling this.
    /// Any countdown already in progress is cancelled first.
    pub fn start(&self) {
        let mut inner = self.lock();
        self.start_locked(&mut inner);
    }

    fn start_locked(&self, inner: &mut Inner) {
        inner.cancel_ticker();

        let total_seconds = inner.input.total_seconds();
        if total_seconds == 0 {
            warn!("Starting a zero-length countdown");
        }

        inner.timer.begin(total_seconds);
        inner.show_countdown = true;
        info!("Countdown started: {}s", total_seconds);

        self.emit(TimerEvent::Started { total_seconds });
        self.publish(inner);

        let generation = inner.generation;
        match Handle::try_current() {
            Ok(runtime) => {
                let controller = self.clone();
                inner.ticker = Some(runtime.spawn(async move {
                    countdown_ticker_task(controller, generation, total_seconds).await;
                }));
            }
            Err(e) => error!("No async runtime to drive the countdown: {}", e),
        }
    }

    /// Toggle between running and paused
    ///
    /// Resuming restarts the countdown from the frozen minute and second fields.
    pub fn pause(&self) {
        let mut inner = self.lock();
        let phase = inner.timer.phase;
        match phase {
            TimerPhase::Paused => {
                info!("Resuming countdown at {}s", inner.timer.remaining_seconds);
                self.start_locked(&mut inner);
            }
            TimerPhase::Running => {
                inner.cancel_ticker();
                inner.timer.pause();
                let remaining_seconds = inner.timer.remaining_seconds;
                info!("Countdown paused at {}s", remaining_seconds);

                self.emit(TimerEvent::Paused { remaining_seconds });
                self.publish(&inner);
            }
            phase => debug!("Ignoring pause while {:?}", phase),
        }
    }

    /// Cancel any countdown and return to the input form
    pub fn stop(&self) {
        let mut inner = self.lock();
        inner.cancel_ticker();
        inner.show_countdown = false;
        inner.input.reset();
        inner.timer.reset();
        info!("Countdown stopped");

        self.emit(TimerEvent::Stopped);
        self.publish(&inner);
    }

    /// Cancel any active ticker for teardown
    pub fn dispose(&self) {
        let mut inner = self.lock();
        inner.cancel_ticker();
        info!("Countdown controller disposed");
    }

    /// Apply one tick from the ticker run identified by `generation`
    ///
    /// Returns false once the run is no longer current.
    pub(crate) fn apply_tick(&self, generation: u64, remaining_seconds: u64) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation || !inner.timer.is_running() {
            debug!("Dropping stale tick {}s from run {}", remaining_seconds, generation);
            return false;
        }

        inner.input.show_remaining(remaining_seconds);
        inner.timer.tick(remaining_seconds);
        inner.time = DisplayState::time_for(&inner.input);
        debug!("Tick: {}", inner.time);
        self.emit(TimerEvent::Tick { remaining_seconds });

        let finished = inner.timer.phase == TimerPhase::Finished && inner.show_countdown;
        if finished {
            // The run is over; the task exits on its own
            inner.ticker = None;
            info!("Countdown finished");
            self.emit(TimerEvent::Finished);
        }

        self.publish(&inner);
        !finished
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Current observed values
    pub fn display_state(&self) -> DisplayState {
        self.shared.display_tx.borrow().clone()
    }

    pub fn timer_state(&self) -> TimerState {
        self.lock().timer.clone()
    }

    pub fn input(&self) -> TimerInput {
        self.lock().input.clone()
    }

    /// Follow the latest observed values
    pub fn subscribe_display(&self) -> watch::Receiver<DisplayState> {
        self.shared.display_tx.subscribe()
    }

    /// Receive every transition, tick and the finished signal
    pub fn subscribe_events(&self) -> broadcast::Receiver<TimerEvent> {
        self.shared.event_tx.subscribe()
    }
}

impl Default for CountdownController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::{sync::broadcast::error::TryRecvError, time::{sleep, Instant}};

    async fn wait_for_tick(events: &mut broadcast::Receiver<TimerEvent>, remaining: u64) {
        loop {
            if let TimerEvent::Tick { remaining_seconds } = events.recv().await.unwrap() {
                if remaining_seconds == remaining {
                    return;
                }
            }
        }
    }

    /// Collect tick values until the finished signal
    async fn ticks_until_finished(events: &mut broadcast::Receiver<TimerEvent>) -> Vec<u64> {
        let mut ticks = Vec::new();
        loop {
            match events.recv().await.unwrap() {
                TimerEvent::Tick { remaining_seconds } => ticks.push(remaining_seconds),
                TimerEvent::Finished => return ticks,
                _ => {}
            }
        }
    }

    #[test]
    fn edits_follow_keystroke_policy() {
        let controller = CountdownController::new();

        controller.set_minutes_text("12");
        assert_eq!(controller.minutes(), 12);
        controller.set_minutes_text("75");
        assert_eq!(controller.minutes(), 12);
        controller.set_minutes_text("x");
        assert_eq!(controller.minutes(), 12);

        controller.set_minutes_text("");
        assert_eq!(controller.minutes(), 0);
        assert_eq!(controller.display_state().minutes_text, "");
    }

    #[test]
    fn edits_are_published() {
        let controller = CountdownController::new();
        let display = controller.subscribe_display();

        controller.set_seconds_text("42");
        assert_eq!(display.borrow().seconds_text, "42");
        assert!(!display.borrow().show_countdown);
    }

    #[test]
    fn ignored_edit_still_publishes_kept_value() {
        let controller = CountdownController::new();
        controller.set_seconds_text("30");
        let mut display = controller.subscribe_display();

        controller.set_seconds_text("61");
        assert!(display.has_changed().unwrap());
        assert_eq!(display.borrow_and_update().seconds_text, "30");
        assert_eq!(controller.seconds(), 30);
    }

    #[tokio::test(start_paused = true)]
    async fn counts_down_ten_seconds_and_finishes_once() {
        let controller = CountdownController::new();
        let mut events = controller.subscribe_events();
        controller.set_minutes_text("");
        controller.set_seconds_text("10");

        let began = Instant::now();
        controller.start();
        assert_eq!(events.recv().await.unwrap(), TimerEvent::Started { total_seconds: 10 });
        assert_eq!(controller.timer_state().total_seconds, 10);
        assert!(controller.display_state().show_countdown);

        let mut ticks = Vec::new();
        loop {
            match events.recv().await.unwrap() {
                TimerEvent::Tick { remaining_seconds } => {
                    assert_eq!(
                        controller.display_state().time,
                        crate::utils::format_remaining(remaining_seconds)
                    );
                    ticks.push(remaining_seconds);
                }
                TimerEvent::Finished => break,
                other => panic!("unexpected event {:?}", other),
            }
        }

        assert_eq!(ticks, (0..=10).rev().collect::<Vec<_>>());
        assert!(began.elapsed() >= Duration::from_secs(10));
        assert!(began.elapsed() < Duration::from_secs(11));

        let display = controller.display_state();
        assert_eq!(display.time, "00:00:00");
        assert!(display.show_countdown);
        assert_eq!(controller.timer_state().phase, TimerPhase::Finished);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_shows_full_length() {
        let controller = CountdownController::new();
        let mut events = controller.subscribe_events();
        controller.set_minutes_text("2");
        controller.set_seconds_text("5");

        controller.start();
        wait_for_tick(&mut events, 125).await;

        let display = controller.display_state();
        assert_eq!(display.time, "02:05:00");
        assert_eq!(display.minutes_text, "2");
        assert_eq!(display.seconds_text, "5");
    }

    #[tokio::test(start_paused = true)]
    async fn pause_freezes_and_resume_continues_from_frozen_value() {
        let controller = CountdownController::new();
        let mut events = controller.subscribe_events();
        controller.start();
        wait_for_tick(&mut events, 7).await;

        controller.pause();
        let display = controller.display_state();
        assert_eq!(display.time, "00:07:00");
        assert!(display.is_pausing);
        assert_eq!(controller.timer_state().phase, TimerPhase::Paused);
        assert_eq!(events.recv().await.unwrap(), TimerEvent::Paused { remaining_seconds: 7 });

        sleep(Duration::from_secs(5)).await;
        assert_eq!(controller.display_state().time, "00:07:00");
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));

        controller.pause();
        assert!(!controller.display_state().is_pausing);
        let timer = controller.timer_state();
        assert_eq!(timer.phase, TimerPhase::Running);
        assert_eq!(timer.total_seconds, 7);
        assert_eq!(events.recv().await.unwrap(), TimerEvent::Started { total_seconds: 7 });

        let ticks = ticks_until_finished(&mut events).await;
        assert_eq!(ticks, (0..=7).rev().collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn pause_is_ignored_when_idle_or_finished() {
        let controller = CountdownController::new();
        controller.pause();
        assert_eq!(controller.timer_state().phase, TimerPhase::Idle);
        assert!(!controller.display_state().is_pausing);

        let mut events = controller.subscribe_events();
        controller.set_seconds_text("1");
        controller.start();
        ticks_until_finished(&mut events).await;

        controller.pause();
        assert_eq!(controller.timer_state().phase, TimerPhase::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_resets_from_any_state() {
        let controller = CountdownController::new();
        let mut events = controller.subscribe_events();
        controller.set_minutes_text("3");
        controller.start();
        wait_for_tick(&mut events, 178).await;

        controller.stop();
        let stopped = controller.display_state();
        assert!(!stopped.show_countdown);
        assert!(!stopped.is_pausing);
        assert_eq!(stopped.minutes_text, "");
        assert_eq!(stopped.seconds_text, "10");
        assert_eq!(controller.timer_state().phase, TimerPhase::Idle);

        // No tick lands after a stop
        sleep(Duration::from_secs(3)).await;
        assert_eq!(controller.display_state(), stopped);

        controller.stop();
        assert_eq!(controller.display_state(), stopped);
        assert_eq!(controller.timer_state().phase, TimerPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_while_paused_clears_pause_flag() {
        let controller = CountdownController::new();
        let mut events = controller.subscribe_events();
        controller.start();
        wait_for_tick(&mut events, 9).await;
        controller.pause();
        controller.stop();

        let display = controller.display_state();
        assert!(!display.is_pausing);
        assert!(!display.show_countdown);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_active_countdown() {
        let controller = CountdownController::new();
        let mut events = controller.subscribe_events();
        controller.start();
        wait_for_tick(&mut events, 8).await;

        // Restarting re-derives the total from the live fields
        controller.start();
        assert_eq!(events.recv().await.unwrap(), TimerEvent::Started { total_seconds: 8 });

        let ticks = ticks_until_finished(&mut events).await;
        assert_eq!(ticks, (0..=8).rev().collect::<Vec<_>>());

        sleep(Duration::from_secs(3)).await;
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticks_are_dropped() {
        let controller = CountdownController::new();
        let mut events = controller.subscribe_events();
        controller.start();
        wait_for_tick(&mut events, 10).await;

        let old_generation = controller.generation();
        controller.start();
        assert!(!controller.apply_tick(old_generation, 0));
        assert_eq!(controller.timer_state().phase, TimerPhase::Running);
        assert_ne!(controller.display_state().time, "00:00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_cancels_the_ticker() {
        let controller = CountdownController::new();
        let mut events = controller.subscribe_events();
        controller.start();
        wait_for_tick(&mut events, 9).await;

        controller.dispose();
        sleep(Duration::from_secs(20)).await;
        assert_eq!(controller.display_state().time, "00:09:00");
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }
}
