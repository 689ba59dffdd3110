//! Cancelable delayed and periodic tasks on a virtual monotonic clock.
//!
//! The scheduler never sleeps. The host advances it with the current
//! monotonic time (e.g. `performance.now()` from an animation timer) and
//! receives the payloads of every task that came due, in deadline order.
//! Tearing a session down is a [`Scheduler::cancel_all`] away.

/// Handle of a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TaskId,
    due: u64,
    period: Option<u64>,
    task: T,
}

/// A task that came due during [`Scheduler::advance_to`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TaskId,
    pub task: T,
    /// Periods elapsed since the last report, always `1` for one-shot tasks.
    pub runs: u64,
}

/// Timer queue keyed by deadline, then insertion order.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: u64,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Run `task` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, task: T) -> TaskId {
        self.insert(delay_ms, None, task)
    }

    /// Run `task` every `period_ms`, first time one period from now.
    ///
    /// A zero period is treated as one millisecond.
    pub fn schedule_repeating(&mut self, period_ms: u64, task: T) -> TaskId {
        let period = period_ms.max(1);
        self.insert(period, Some(period), task)
    }

    /// Cancel a task. Returns `false` if it already ran or was canceled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every pending task whose payload matches `predicate`.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !predicate(&e.task));
        before - self.entries.len()
    }

    /// Cancel everything.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Move the clock to `now` and collect due tasks.
    ///
    /// Times earlier than the current clock are ignored. Each due task is
    /// reported once, ordered by deadline then insertion. A repeating task
    /// that missed several periods reports them as [`Fired::runs`] and is
    /// re-armed for its next period after `now`.
    pub fn advance_to(&mut self, now: u64) -> Vec<Fired<T>> {
        self.now = self.now.max(now);
        let now = self.now;

        let mut fired = Vec::new();
        self.entries.retain_mut(|entry| {
            if entry.due > now {
                return true;
            }
            let first_due = entry.due;
            let (runs, keep) = match entry.period {
                Some(period) => {
                    let runs = (now - entry.due) / period + 1;
                    entry.due += runs * period;
                    (runs, true)
                }
                None => (1, false),
            };
            fired.push((
                first_due,
                Fired {
                    id: entry.id,
                    task: entry.task.clone(),
                    runs,
                },
            ));
            keep
        });

        fired.sort_by_key(|(due, f)| (*due, f.id));
        fired.into_iter().map(|(_, f)| f).collect()
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due).min()
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, delay_ms: u64, period: Option<u64>, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now.saturating_add(delay_ms),
            period,
            task,
        });
        id
    }

}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
