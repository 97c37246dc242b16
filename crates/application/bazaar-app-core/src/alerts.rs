use std::collections::HashMap;
use std::time::{Duration, Instant};

use bazaar_core::{AlertId, AlertRecord, AlertRequest};

/// Ordered collection of live alerts. Knows nothing about time.
#[derive(Debug, Default, Clone)]
pub struct AlertQueue {
    records: Vec<AlertRecord>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new alert. A caller-supplied id that is already queued
    /// replaces that record in place instead.
    pub fn push(&mut self, req: AlertRequest) -> AlertId {
        let id = req.id.unwrap_or_else(uuid::Uuid::new_v4);
        let rec = AlertRecord::from_request(id, req);
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(slot) => *slot = rec,
            None => self.records.push(rec),
        }
        id
    }

    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: AlertId) {
        self.records.retain(|r| r.id != id);
    }

    /// Swaps the content of an existing alert in place, keeping its id and
    /// position. Returns false if the alert is gone.
    pub fn replace(&mut self, id: AlertId, req: AlertRequest) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = AlertRecord::from_request(id, req);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: AlertId) -> Option<&AlertRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: AlertId) -> Option<&mut AlertRecord> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlertRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Countdown { due: Instant },
    Exiting { remove_at: Instant },
}

impl Timer {
    fn due(self) -> Instant {
        match self {
            Timer::Countdown { due } => due,
            Timer::Exiting { remove_at } => remove_at,
        }
    }
}

/// Drives the visible lifecycle of queued alerts: countdown, exit phase,
/// removal. The UI feeds it the current time every frame.
#[derive(Debug)]
pub struct AlertPresenter {
    queue: AlertQueue,
    timers: HashMap<AlertId, Timer>,
    grace: Duration,
}

impl Default for AlertPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertPresenter {
    pub fn new() -> Self {
        Self::with_grace(Duration::from_millis(bazaar_config::ALERT_EXIT_GRACE_MS))
    }

    pub fn with_grace(grace: Duration) -> Self {
        Self {
            queue: AlertQueue::new(),
            timers: HashMap::new(),
            grace,
        }
    }

    pub fn queue(&self) -> &AlertQueue {
        &self.queue
    }

    pub fn notify(&mut self, req: AlertRequest, now: Instant) -> AlertId {
        let id = self.queue.push(req);
        self.timers.remove(&id);
        self.schedule(id, now);
        id
    }

    /// Re-targets an alert (typically a loading one) and restarts its timer.
    pub fn replace(&mut self, id: AlertId, req: AlertRequest, now: Instant) -> bool {
        if !self.queue.replace(id, req) {
            return false;
        }
        self.timers.remove(&id);
        self.schedule(id, now);
        true
    }

    /// First phase of dismissal. The record stays in the queue, flagged as
    /// exiting, until the grace period runs out.
    pub fn dismiss(&mut self, id: AlertId, now: Instant) {
        let Some(rec) = self.queue.get_mut(id) else {
            return;
        };
        if rec.exiting {
            return;
        }
        rec.exiting = true;
        self.timers.insert(
            id,
            Timer::Exiting {
                remove_at: now + self.grace,
            },
        );
    }

    /// Immediate removal, bypassing the exit phase. Pending timers for the
    /// id are dropped.
    pub fn remove(&mut self, id: AlertId) {
        self.queue.remove(id);
        self.timers.remove(&id);
    }

    /// Advances every timer that is due. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due: Vec<(AlertId, Timer)> = self
            .timers
            .iter()
            .filter(|(_, t)| t.due() <= now)
            .map(|(id, t)| (*id, *t))
            .collect();

        let mut changed = false;
        for (id, timer) in due {
            if self.queue.get(id).is_none() {
                self.timers.remove(&id);
                continue;
            }
            match timer {
                Timer::Countdown { .. } => {
                    tracing::trace!(%id, "alert expired");
                    self.dismiss(id, now);
                }
                Timer::Exiting { .. } => {
                    self.remove(id);
                }
            }
            changed = true;
        }
        changed
    }

    /// Earliest pending deadline, for scheduling the next repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|t| t.due()).min()
    }

    fn schedule(&mut self, id: AlertId, now: Instant) {
        if let Some(rec) = self.queue.get(id) {
            if rec.expires() {
                self.timers.insert(
                    id,
                    Timer::Countdown {
                        due: now + Duration::from_millis(rec.duration_ms),
                    },
                );
            }
        }
    }
}
