//! Event dispatch: validation, hooks, and commit or deferral.

use super::error::{ErrorPolicy, TransitionError, TransitionFailure};
use super::pending::{InFlight, PendingTransition};
use crate::core::{ErrorCode, State, Terminal, TransitionMap, TransitionResult};
use crate::hooks::{HookBus, HookContext, HookKey, HookOutcome};
use parking_lot::Mutex;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};
use uuid::Uuid;

/// Mutable part of a machine.
struct Cell {
    current: State,
    pending: Option<Arc<InFlight>>,
}

impl Cell {
    fn holds(&self, id: Uuid) -> bool {
        self.pending.as_ref().is_some_and(|pending| pending.id == id)
    }
}

struct Shared {
    map: TransitionMap,
    terminal: Option<Terminal>,
    bus: Arc<dyn HookBus>,
    policy: ErrorPolicy,
    cell: Mutex<Cell>,
}

/// A running state machine.
///
/// `StateMachine` is a cheap handle: clones share the same state. Hooks
/// receive the machine through [`HookContext::machine`] and may fire events
/// on it re-entrantly; the state lock is never held while a hook runs.
///
/// Build one with [`StateMachineBuilder`](crate::builder::StateMachineBuilder).
#[derive(Clone)]
pub struct StateMachine {
    shared: Arc<Shared>,
}

impl StateMachine {
    /// Create a machine in the reserved `none` state.
    pub(crate) fn new(
        map: TransitionMap,
        terminal: Option<Terminal>,
        bus: Arc<dyn HookBus>,
        policy: ErrorPolicy,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                map,
                terminal,
                bus,
                policy,
                cell: Mutex::new(Cell {
                    current: State::NONE,
                    pending: None,
                }),
            }),
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> State {
        self.shared.cell.lock().current.clone()
    }

    /// Whether `event` could fire now: nothing is pending and the event has
    /// an exact or wildcard entry for the current state.
    pub fn can(&self, event: &str) -> bool {
        let cell = self.shared.cell.lock();
        cell.pending.is_none() && self.shared.map.has_mapping(event, &cell.current)
    }

    pub fn cannot(&self, event: &str) -> bool {
        !self.can(event)
    }

    /// Whether the current state is terminal. Always false without a
    /// configured terminal.
    pub fn is_finished(&self) -> bool {
        let current = self.state();
        self.shared
            .terminal
            .as_ref()
            .is_some_and(|terminal| terminal.contains(&current))
    }

    pub fn terminal(&self) -> Option<&Terminal> {
        self.shared.terminal.as_ref()
    }

    /// Declared event names, in declaration order.
    pub fn event_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.shared.map.event_names()
    }

    pub fn transition_map(&self) -> &TransitionMap {
        &self.shared.map
    }

    /// The outstanding deferred transition, if any.
    pub fn pending_transition(&self) -> Option<PendingTransition> {
        let pending = self.shared.cell.lock().pending.clone();
        pending.map(|inner| PendingTransition::new(self.clone(), inner))
    }

    pub fn is_pending(&self) -> bool {
        self.shared.cell.lock().pending.is_some()
    }

    /// Fire `event` without arguments.
    pub fn fire(&self, event: &str) -> Result<TransitionResult, TransitionError> {
        self.fire_with(event, Vec::new())
    }

    /// Fire `event`, passing `args` through to every hook.
    ///
    /// Illegal calls (an outstanding deferred transition, or no entry for
    /// the current state) go to the error policy. Everything else returns
    /// one of the [`TransitionResult`] outcomes.
    pub fn fire_with(
        &self,
        event: &str,
        args: Vec<Value>,
    ) -> Result<TransitionResult, TransitionError> {
        let (from, to, busy, mapped) = {
            let cell = self.shared.cell.lock();
            let from = cell.current.clone();
            let to = self.shared.map.resolve(event, &from);
            let mapped = self.shared.map.has_mapping(event, &from);
            (from, to, cell.pending.is_some(), mapped)
        };

        if busy {
            let message =
                format!("event {event} inappropriate because previous transition did not complete");
            return self.reject(ErrorCode::PendingTransition, event, from, to, args, message);
        }

        if !mapped {
            let message = if self.shared.map.contains_event(event) {
                format!("event {event} inappropriate in current state {from}")
            } else {
                format!("event {event} is not declared")
            };
            return self.reject(ErrorCode::InvalidTransition, event, from, to, args, message);
        }

        let ctx = HookContext::new(self, event, &from, &to, &args);

        if self.before_event(&ctx).is_veto() {
            debug!(event, from = %from, to = %to, "Transition vetoed before event");
            return Ok(TransitionResult::Cancelled);
        }

        if from == to {
            self.after_event(&ctx);
            debug!(event, state = %from, "Event fired without state change");
            return Ok(TransitionResult::NoTransition);
        }

        let inflight = Arc::new(InFlight::new(event, from.clone(), to.clone(), args.clone()));
        {
            let mut cell = self.shared.cell.lock();
            // A before hook may have deferred another transition re-entrantly.
            if cell.pending.is_some() {
                drop(cell);
                let message = format!(
                    "event {event} inappropriate because previous transition did not complete"
                );
                return self.reject(ErrorCode::PendingTransition, event, from, to, args, message);
            }
            cell.pending = Some(Arc::clone(&inflight));
        }

        match self.leave_state(&ctx) {
            HookOutcome::Veto => {
                self.release(&inflight, TransitionResult::Cancelled);
                debug!(event, from = %from, to = %to, "Transition vetoed while leaving state");
                Ok(TransitionResult::Cancelled)
            }
            HookOutcome::Defer => {
                debug!(
                    event,
                    from = %from,
                    to = %to,
                    id = %inflight.id,
                    "Transition deferred"
                );
                Ok(TransitionResult::Pending)
            }
            HookOutcome::Continue(_) => {
                if self.holds(inflight.id) {
                    self.commit_in_flight(&inflight)
                } else {
                    // A leave hook already committed or cancelled it.
                    Ok(inflight
                        .resolution()
                        .unwrap_or(TransitionResult::Cancelled))
                }
            }
        }
    }

    pub(crate) fn holds(&self, id: Uuid) -> bool {
        self.shared.cell.lock().holds(id)
    }

    pub(crate) fn commit_in_flight(
        &self,
        inflight: &InFlight,
    ) -> Result<TransitionResult, TransitionError> {
        {
            let mut cell = self.shared.cell.lock();
            if !cell.holds(inflight.id) {
                return Err(inflight.stale());
            }
            cell.pending = None;
            cell.current = inflight.to.clone();
        }
        inflight.resolve(TransitionResult::Succeeded);

        debug!(
            event = %inflight.event,
            from = %inflight.from,
            to = %inflight.to,
            "Transition committed"
        );

        let ctx = HookContext::new(
            self,
            &inflight.event,
            &inflight.from,
            &inflight.to,
            &inflight.args,
        );
        self.publish(&HookKey::event(inflight.event.as_str()), &ctx);
        self.enter_state(&ctx);
        self.publish(&HookKey::ChangeState, &ctx);
        self.after_event(&ctx);

        Ok(TransitionResult::Succeeded)
    }

    pub(crate) fn cancel_in_flight(
        &self,
        inflight: &InFlight,
    ) -> Result<TransitionResult, TransitionError> {
        if !self.release(inflight, TransitionResult::Cancelled) {
            return Err(inflight.stale());
        }

        debug!(
            event = %inflight.event,
            from = %inflight.from,
            to = %inflight.to,
            "Pending transition cancelled"
        );

        let ctx = HookContext::new(
            self,
            &inflight.event,
            &inflight.from,
            &inflight.to,
            &inflight.args,
        );
        self.after_event(&ctx);

        Ok(TransitionResult::Cancelled)
    }

    /// Clear the slot if it still holds `inflight`.
    fn release(&self, inflight: &InFlight, result: TransitionResult) -> bool {
        {
            let mut cell = self.shared.cell.lock();
            if !cell.holds(inflight.id) {
                return false;
            }
            cell.pending = None;
        }
        inflight.resolve(result);
        true
    }

    fn reject(
        &self,
        code: ErrorCode,
        event: &str,
        from: State,
        to: State,
        args: Vec<Value>,
        message: String,
    ) -> Result<TransitionResult, TransitionError> {
        debug!(event, from = %from, to = %to, code = code.code(), "{}", message);
        self.shared.policy.handle(TransitionFailure {
            event: event.to_string(),
            from,
            to,
            args,
            code,
            message,
        })
    }

    fn publish(&self, key: &HookKey, ctx: &HookContext<'_>) -> HookOutcome {
        trace!(hook = %key, event = ctx.event(), "Publishing hook");
        self.shared.bus.publish(key, ctx)
    }

    /// The generic hook is skipped once the specific one vetoes.
    fn before_event(&self, ctx: &HookContext<'_>) -> HookOutcome {
        let specific = self.publish(&HookKey::before(ctx.event()), ctx);
        if specific.is_veto() {
            return specific;
        }
        self.publish(&HookKey::BeforeEvent, ctx)
    }

    /// Both hooks always fire; a veto outranks a defer.
    fn leave_state(&self, ctx: &HookContext<'_>) -> HookOutcome {
        let specific = self.publish(&HookKey::leave(ctx.from()), ctx);
        let general = self.publish(&HookKey::LeaveState, ctx);

        if specific.is_veto() || general.is_veto() {
            HookOutcome::Veto
        } else if specific.is_defer() || general.is_defer() {
            HookOutcome::Defer
        } else {
            HookOutcome::proceed()
        }
    }

    fn enter_state(&self, ctx: &HookContext<'_>) {
        self.publish(&HookKey::enter(ctx.to()), ctx);
        self.publish(&HookKey::EnterState, ctx);
    }

    fn after_event(&self, ctx: &HookContext<'_>) {
        self.publish(&HookKey::after(ctx.event()), ctx);
        self.publish(&HookKey::AfterEvent, ctx);
    }
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = self.shared.cell.lock();
        f.debug_struct("StateMachine")
            .field("current", &cell.current)
            .field("pending", &cell.pending.as_ref().map(|p| p.id))
            .field("terminal", &self.shared.terminal)
            .field("events", &self.shared.map.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateMachineBuilder;
    use crate::core::EventDecl;
    use crate::hooks::EventBus;
    use parking_lot::Mutex as Log;
    use serde_json::json;

    fn turnstile(bus: Arc<EventBus>) -> StateMachine {
        StateMachineBuilder::new()
            .initial("locked")
            .event(EventDecl::new("unlock").from("locked").to("unlocked"))
            .event(EventDecl::new("lock").from("unlocked").to("locked"))
            .bus(bus)
            .build()
            .unwrap()
    }

    /// Record every hook key in the order it is published.
    fn record_all(bus: &EventBus, keys: &[HookKey], log: &Arc<Log<Vec<String>>>) {
        for key in keys {
            let log = Arc::clone(log);
            let name = key.to_string();
            bus.on(key.clone(), move |_| {
                log.lock().push(name.clone());
                HookOutcome::proceed()
            });
        }
    }

    fn lifecycle_keys(event: &str, from: &str, to: &str) -> Vec<HookKey> {
        vec![
            HookKey::before(event.to_string()),
            HookKey::BeforeEvent,
            HookKey::leave(from.to_string()),
            HookKey::LeaveState,
            HookKey::event(event.to_string()),
            HookKey::enter(to.to_string()),
            HookKey::EnterState,
            HookKey::ChangeState,
            HookKey::after(event.to_string()),
            HookKey::AfterEvent,
        ]
    }

    #[test]
    fn machine_boots_into_initial_state() {
        let machine = turnstile(Arc::new(EventBus::new()));
        assert_eq!(machine.state(), "locked");
        assert!(!machine.is_pending());
    }

    #[test]
    fn legal_event_moves_to_destination() {
        let machine = turnstile(Arc::new(EventBus::new()));

        assert_eq!(machine.fire("unlock"), Ok(TransitionResult::Succeeded));
        assert_eq!(machine.state(), "unlocked");
    }

    #[test]
    fn illegal_event_raises_invalid_transition() {
        let machine = turnstile(Arc::new(EventBus::new()));
        machine.fire("unlock").unwrap();

        let err = machine.fire("unlock").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::InvalidTransition));
        assert_eq!(
            err.to_string(),
            "event unlock inappropriate in current state unlocked"
        );
        assert_eq!(machine.state(), "unlocked");
    }

    #[test]
    fn undeclared_event_raises_invalid_transition() {
        let machine = turnstile(Arc::new(EventBus::new()));

        let err = machine.fire("explode").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::InvalidTransition));
        assert!(machine.cannot("explode"));
    }

    #[test]
    fn hooks_fire_in_lifecycle_order() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        let log = Arc::new(Log::new(Vec::new()));
        let keys = lifecycle_keys("unlock", "locked", "unlocked");
        record_all(&bus, &keys, &log);

        machine.fire("unlock").unwrap();

        let expected: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(*log.lock(), expected);
    }

    #[test]
    fn noop_event_skips_leave_and_enter_hooks() {
        let bus = Arc::new(EventBus::new());
        let machine = StateMachineBuilder::new()
            .initial("idle")
            .event(EventDecl::new("poke").from("idle"))
            .bus(Arc::clone(&bus))
            .build()
            .unwrap();
        let log = Arc::new(Log::new(Vec::new()));
        record_all(&bus, &lifecycle_keys("poke", "idle", "idle"), &log);

        assert_eq!(machine.fire("poke"), Ok(TransitionResult::NoTransition));
        assert_eq!(
            *log.lock(),
            vec!["before:poke", "beforeEvent", "after:poke", "afterEvent"]
        );
    }

    #[test]
    fn specific_before_veto_skips_generic_before() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        let log = Arc::new(Log::new(Vec::new()));
        bus.on(HookKey::before("unlock"), |_| HookOutcome::Veto);
        record_all(&bus, &lifecycle_keys("unlock", "locked", "unlocked"), &log);

        assert_eq!(machine.fire("unlock"), Ok(TransitionResult::Cancelled));
        assert_eq!(machine.state(), "locked");
        assert_eq!(*log.lock(), vec!["before:unlock"]);
    }

    #[test]
    fn generic_before_veto_cancels_without_after_hooks() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        let log = Arc::new(Log::new(Vec::new()));
        bus.on(HookKey::BeforeEvent, |_| HookOutcome::Veto);
        record_all(&bus, &lifecycle_keys("unlock", "locked", "unlocked"), &log);

        assert_eq!(machine.fire("unlock"), Ok(TransitionResult::Cancelled));
        assert_eq!(*log.lock(), vec!["before:unlock", "beforeEvent"]);
    }

    #[test]
    fn leave_veto_cancels_and_frees_slot() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        let log = Arc::new(Log::new(Vec::new()));
        bus.on(HookKey::leave("locked"), |_| HookOutcome::Veto);
        record_all(&bus, &lifecycle_keys("unlock", "locked", "unlocked"), &log);

        assert_eq!(machine.fire("unlock"), Ok(TransitionResult::Cancelled));
        assert_eq!(machine.state(), "locked");
        assert!(!machine.is_pending());
        assert_eq!(
            *log.lock(),
            vec!["before:unlock", "beforeEvent", "leave:locked", "leaveState"]
        );
    }

    #[test]
    fn leave_veto_outranks_defer() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        bus.on(HookKey::leave("locked"), |_| HookOutcome::Defer);
        bus.on(HookKey::LeaveState, |_| HookOutcome::Veto);

        assert_eq!(machine.fire("unlock"), Ok(TransitionResult::Cancelled));
        assert!(!machine.is_pending());
    }

    #[test]
    fn deferred_transition_blocks_every_event() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        bus.on(HookKey::LeaveState, |_| HookOutcome::Defer);

        assert_eq!(machine.fire("unlock"), Ok(TransitionResult::Pending));
        assert_eq!(machine.state(), "locked");
        assert!(machine.cannot("unlock"));
        assert!(machine.cannot("lock"));

        let pending = machine.pending_transition().unwrap();
        for event in ["unlock", "lock"] {
            let err = machine.fire(event).unwrap_err();
            assert_eq!(err.code(), Some(ErrorCode::PendingTransition));
        }
        assert_eq!(machine.pending_transition().unwrap().id(), pending.id());
        assert_eq!(machine.state(), "locked");
    }

    #[test]
    fn commit_publishes_remaining_hooks_once() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        let log = Arc::new(Log::new(Vec::new()));
        bus.on(HookKey::leave("locked"), |_| HookOutcome::Defer);
        record_all(&bus, &lifecycle_keys("unlock", "locked", "unlocked"), &log);

        machine.fire("unlock").unwrap();
        log.lock().clear();

        let pending = machine.pending_transition().unwrap();
        assert_eq!(pending.commit(), Ok(TransitionResult::Succeeded));
        assert_eq!(machine.state(), "unlocked");
        assert_eq!(
            *log.lock(),
            vec![
                "unlock",
                "enter:unlocked",
                "enterState",
                "changeState",
                "after:unlock",
                "afterEvent"
            ]
        );

        assert_eq!(machine.fire("lock"), Ok(TransitionResult::Succeeded));
    }

    #[test]
    fn cancel_runs_only_after_hooks() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        let log = Arc::new(Log::new(Vec::new()));
        bus.on(HookKey::LeaveState, |_| HookOutcome::Defer);
        record_all(&bus, &lifecycle_keys("unlock", "locked", "unlocked"), &log);

        machine.fire("unlock").unwrap();
        log.lock().clear();

        let pending = machine.pending_transition().unwrap();
        assert_eq!(pending.cancel(), Ok(TransitionResult::Cancelled));
        assert_eq!(machine.state(), "locked");
        assert_eq!(*log.lock(), vec!["after:unlock", "afterEvent"]);
        assert!(machine.can("unlock"));
    }

    #[test]
    fn leave_hook_may_commit_synchronously() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        let commits = Arc::new(Log::new(0usize));
        {
            let commits = Arc::clone(&commits);
            bus.on(HookKey::ChangeState, move |_| {
                *commits.lock() += 1;
                HookOutcome::proceed()
            });
        }
        bus.on(HookKey::leave("locked"), |ctx| {
            let pending = ctx.pending().expect("transition is installed");
            pending.commit().expect("commit succeeds");
            HookOutcome::proceed()
        });

        assert_eq!(machine.fire("unlock"), Ok(TransitionResult::Succeeded));
        assert_eq!(machine.state(), "unlocked");
        assert_eq!(*commits.lock(), 1);
    }

    #[test]
    fn leave_hook_may_cancel_synchronously() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        bus.on(HookKey::leave("locked"), |ctx| {
            ctx.pending().unwrap().cancel().unwrap();
            HookOutcome::proceed()
        });

        assert_eq!(machine.fire("unlock"), Ok(TransitionResult::Cancelled));
        assert_eq!(machine.state(), "locked");
        assert!(!machine.is_pending());
    }

    #[test]
    fn hooks_see_partially_transitioned_state() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        let seen = Arc::new(Log::new(Vec::new()));
        for key in [HookKey::before("unlock"), HookKey::LeaveState, HookKey::EnterState] {
            let seen = Arc::clone(&seen);
            bus.on(key, move |ctx| {
                let machine = ctx.machine();
                seen.lock()
                    .push((machine.state().to_string(), machine.is_pending()));
                HookOutcome::proceed()
            });
        }

        machine.fire("unlock").unwrap();

        assert_eq!(
            *seen.lock(),
            vec![
                ("locked".to_string(), false),
                ("locked".to_string(), true),
                ("unlocked".to_string(), false),
            ]
        );
    }

    #[test]
    fn reentrant_fire_from_enter_hook() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        bus.on(HookKey::enter("unlocked"), |ctx| {
            let result = ctx.machine().fire("lock");
            assert_eq!(result, Ok(TransitionResult::Succeeded));
            HookOutcome::proceed()
        });

        assert_eq!(machine.fire("unlock"), Ok(TransitionResult::Succeeded));
        assert_eq!(machine.state(), "locked");
    }

    #[test]
    fn reentrant_fire_while_leaving_is_rejected() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        let codes = Arc::new(Log::new(Vec::new()));
        {
            let codes = Arc::clone(&codes);
            bus.on(HookKey::LeaveState, move |ctx| {
                let err = ctx.machine().fire("lock").unwrap_err();
                codes.lock().push(err.code());
                HookOutcome::proceed()
            });
        }

        assert_eq!(machine.fire("unlock"), Ok(TransitionResult::Succeeded));
        assert_eq!(*codes.lock(), vec![Some(ErrorCode::PendingTransition)]);
    }

    #[test]
    fn args_reach_every_hook() {
        let bus = Arc::new(EventBus::new());
        let machine = turnstile(Arc::clone(&bus));
        let seen = Arc::new(Log::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            bus.on(HookKey::AfterEvent, move |ctx| {
                seen.lock().extend(ctx.args().iter().cloned());
                HookOutcome::proceed()
            });
        }

        machine
            .fire_with("unlock", vec![json!("coin"), json!(25)])
            .unwrap();

        assert_eq!(*seen.lock(), vec![json!("coin"), json!(25)]);
    }

    #[test]
    fn error_policy_receives_rejections() {
        let failures = Arc::new(Log::new(Vec::new()));
        let policy = {
            let failures = Arc::clone(&failures);
            ErrorPolicy::new(move |failure| {
                failures.lock().push(failure);
                Ok(TransitionResult::NoTransition)
            })
        };
        let machine = StateMachineBuilder::new()
            .initial("locked")
            .event(EventDecl::new("unlock").from("locked").to("unlocked"))
            .error_policy(policy)
            .build()
            .unwrap();
        machine.fire("unlock").unwrap();

        let result = machine.fire_with("unlock", vec![json!(1)]);
        assert_eq!(result, Ok(TransitionResult::NoTransition));

        let failures = failures.lock();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].event, "unlock");
        assert_eq!(failures[0].from, "unlocked");
        assert_eq!(failures[0].to, "unlocked");
        assert_eq!(failures[0].args, vec![json!(1)]);
        assert_eq!(failures[0].code, ErrorCode::InvalidTransition);
    }

    #[test]
    fn wildcard_event_fires_from_any_state() {
        let machine = StateMachineBuilder::new()
            .initial("a")
            .event(EventDecl::new("next").from("a").to("b"))
            .event(EventDecl::new("reset").to("a"))
            .build()
            .unwrap();

        machine.fire("next").unwrap();
        assert!(machine.can("reset"));
        assert_eq!(machine.fire("reset"), Ok(TransitionResult::Succeeded));
        assert_eq!(machine.state(), "a");
        assert_eq!(machine.fire("reset"), Ok(TransitionResult::NoTransition));
    }

    #[test]
    fn finished_reflects_terminal_set() {
        let machine = StateMachineBuilder::new()
            .initial("running")
            .event(EventDecl::new("succeed").from("running").to("done"))
            .event(EventDecl::new("fail").from("running").to("failed"))
            .terminal(["done", "failed"])
            .build()
            .unwrap();

        assert!(!machine.is_finished());
        machine.fire("fail").unwrap();
        assert!(machine.is_finished());
    }

    #[test]
    fn without_terminal_machine_never_finishes() {
        let machine = turnstile(Arc::new(EventBus::new()));
        machine.fire("unlock").unwrap();
        machine.fire("lock").unwrap();

        assert!(!machine.is_finished());
        assert!(machine.terminal().is_none());
    }
}
