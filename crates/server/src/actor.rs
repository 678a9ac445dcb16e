//! Serializing calculation actor.
//!
//! A single task owns the [`HistoryStore`] and drains a bounded mailbox. Each
//! command runs to completion before the next is taken, so history order is the
//! order in which requests reached the mailbox, whatever the callers' timing.
//! Callers talk to the task through a cloneable [`CalculatorHandle`].

use fuel_config::ServiceConfig;
use fuel_propulsion::{FuelError, Route, calculate};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::history::{CallInput, CallRecord, CallerId, HistoryStore};

/// Errors surfaced to callers of the handle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActorError {
    #[error(transparent)]
    Fuel(#[from] FuelError),
    #[error("calculation actor is not running")]
    Unavailable,
}

enum Command {
    Compute {
        caller: CallerId,
        mass: i64,
        route: Route,
        reply: oneshot::Sender<Result<u64, FuelError>>,
    },
    History {
        reply: oneshot::Sender<Vec<CallRecord>>,
    },
}

struct CalculationActor {
    mailbox: mpsc::Receiver<Command>,
    history: HistoryStore,
    clock: Box<dyn Clock>,
}

impl CalculationActor {
    async fn run(mut self) {
        debug!("calculation actor started");
        while let Some(command) = self.mailbox.recv().await {
            self.handle(command);
        }
        debug!(records = self.history.len(), "calculation actor stopped");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Compute {
                caller,
                mass,
                route,
                reply,
            } => {
                let result = self.compute(caller, mass, route);
                // A caller that gave up waiting still gets its call recorded.
                let _ = reply.send(result);
            }
            Command::History { reply } => {
                let _ = reply.send(self.history.snapshot());
            }
        }
    }

    fn compute(&mut self, caller: CallerId, mass: i64, route: Route) -> Result<u64, FuelError> {
        match calculate(mass, &route) {
            Ok(fuel) => {
                info!(caller = %caller, mass, legs = route.len(), fuel, "recorded calculation");
                self.history.append(CallRecord {
                    caller,
                    timestamp: self.clock.now_seconds(),
                    input: CallInput { mass, route },
                    output: fuel,
                });
                Ok(fuel)
            }
            Err(err) => {
                warn!(caller = %caller, mass, error = %err, "rejected calculation");
                Err(err)
            }
        }
    }
}

/// Client side of the actor. Clones share the same mailbox.
#[derive(Debug, Clone)]
pub struct CalculatorHandle {
    sender: mpsc::Sender<Command>,
}

impl CalculatorHandle {
    /// Price `route` for `mass` and record the call on success.
    pub async fn compute(
        &self,
        caller: impl Into<CallerId>,
        mass: i64,
        route: Route,
    ) -> Result<u64, ActorError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Command::Compute {
                caller: caller.into(),
                mass,
                route,
                reply,
            })
            .await
            .map_err(|_| ActorError::Unavailable)?;
        Ok(response.await.map_err(|_| ActorError::Unavailable)??)
    }

    /// Every recorded call, in acceptance order.
    pub async fn history(&self) -> Result<Vec<CallRecord>, ActorError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Command::History { reply })
            .await
            .map_err(|_| ActorError::Unavailable)?;
        response.await.map_err(|_| ActorError::Unavailable)
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Compute { caller, mass, .. } => f
                .debug_struct("Compute")
                .field("caller", caller)
                .field("mass", mass)
                .finish_non_exhaustive(),
            Command::History { .. } => f.write_str("History"),
        }
    }
}

/// Start the actor on the current tokio runtime using the wall clock.
pub fn spawn(config: &ServiceConfig) -> CalculatorHandle {
    spawn_with_clock(config, SystemClock)
}

/// Start the actor with a custom timestamp source.
///
/// The task stops once every handle has been dropped.
pub fn spawn_with_clock(config: &ServiceConfig, clock: impl Clock) -> CalculatorHandle {
    let (sender, mailbox) = mpsc::channel(config.mailbox_capacity.max(1));
    let actor = CalculationActor {
        mailbox,
        history: HistoryStore::new(),
        clock: Box::new(clock),
    };
    tokio::spawn(actor.run());
    CalculatorHandle { sender }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuel_core::Body;
    use fuel_propulsion::Maneuver;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};

    fn apollo_route() -> Route {
        Route::new(vec![
            Maneuver::launch(Body::Earth),
            Maneuver::land(Body::Moon),
            Maneuver::launch(Body::Moon),
            Maneuver::land(Body::Earth),
        ])
    }

    #[tokio::test]
    async fn compute_records_history_with_clock_timestamp() {
        let handle = spawn_with_clock(&ServiceConfig::default(), || 1_700_000_000_i64);
        let fuel = handle
            .compute("apollo-11", 28_801, apollo_route())
            .await
            .unwrap();
        assert_eq!(fuel, 51_951);

        let history = handle.history().await.unwrap();
        assert_eq!(history.len(), 1);
        let record = &history[0];
        assert_eq!(record.caller, CallerId::new("apollo-11"));
        assert_eq!(record.timestamp, 1_700_000_000);
        assert_eq!(record.input.mass, 28_801);
        assert_eq!(record.input.route, apollo_route());
        assert_eq!(record.output, 51_951);
    }

    #[tokio::test]
    async fn failed_compute_leaves_history_untouched() {
        let handle = spawn(&ServiceConfig::default());
        handle
            .compute("first", 28_801, Route::new(vec![Maneuver::land(Body::Earth)]))
            .await
            .unwrap();
        let before = handle.history().await.unwrap();

        let err = handle.compute("bad", 0, apollo_route()).await.unwrap_err();
        assert_eq!(err, ActorError::Fuel(FuelError::InvalidMass(0)));
        let err = handle.compute("bad", 10, Route::default()).await.unwrap_err();
        assert_eq!(err, ActorError::Fuel(FuelError::EmptyRoute));

        assert_eq!(handle.history().await.unwrap(), before);
    }

    #[tokio::test]
    async fn timestamps_are_taken_per_call() {
        let tick = Arc::new(AtomicI64::new(100));
        let source = Arc::clone(&tick);
        let handle = spawn_with_clock(&ServiceConfig::default(), move || {
            source.fetch_add(1, Ordering::SeqCst)
        });
        for _ in 0..3 {
            handle
                .compute("c", 1_000, Route::new(vec![Maneuver::launch(Body::Mars)]))
                .await
                .unwrap();
        }
        let stamps: Vec<i64> = handle
            .history()
            .await
            .unwrap()
            .iter()
            .map(|r| r.timestamp)
            .collect();
        assert_eq!(stamps, vec![100, 101, 102]);
    }

    #[tokio::test]
    async fn abandoned_reply_is_still_recorded() {
        let handle = spawn(&ServiceConfig::default());
        let (reply, response) = oneshot::channel();
        drop(response);
        handle
            .sender
            .send(Command::Compute {
                caller: "gone".into(),
                mass: 28_801,
                route: Route::new(vec![Maneuver::land(Body::Earth)]),
                reply,
            })
            .await
            .unwrap();

        let history = handle.history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].output, 13_447);
    }

    #[tokio::test]
    async fn handle_reports_stopped_actor() {
        let (sender, mailbox) = mpsc::channel(1);
        drop(mailbox);
        let handle = CalculatorHandle { sender };
        assert_eq!(handle.history().await, Err(ActorError::Unavailable));
        assert_eq!(
            handle.compute("late", 1, apollo_route()).await,
            Err(ActorError::Unavailable)
        );
    }
}
