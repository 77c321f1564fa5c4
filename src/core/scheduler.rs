// Keyed, cancellable scheduled tasks driven from the single frame tick.
//
// Every recurring concern of the scene (idle detection deadline, explosion
// retrigger, automatic glitch draw) is registered here instead of owning a
// raw interval. The registry is polled once per animation frame and cleared
// wholesale on teardown, so a cancelled scene cannot leave a timer behind.

pub type TaskId = u32;

#[derive(Clone, Copy, Debug)]
enum Repeat {
    Every(f64),
    Once,
}

struct Task {
    id: TaskId,
    repeat: Repeat,
    due_ms: f64,
    armed: bool,
}

pub struct Scheduler {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a recurring task. `first_due_ms` may equal the current time
    /// to fire on the next poll.
    pub fn every(&mut self, period_ms: f64, first_due_ms: f64) -> TaskId {
        self.insert(Repeat::Every(period_ms), first_due_ms)
    }

    /// Register a one-shot deadline. After firing it stays registered but
    /// disarmed, so it can be pushed back with `rearm`.
    pub fn once(&mut self, due_ms: f64) -> TaskId {
        self.insert(Repeat::Once, due_ms)
    }

    fn insert(&mut self, repeat: Repeat, due_ms: f64) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            repeat,
            due_ms,
            armed: true,
        });
        id
    }

    /// Move a task's deadline. Re-arms a one-shot that already fired.
    pub fn rearm(&mut self, id: TaskId, due_ms: f64) {
        if let Some(t) = self.tasks.iter_mut().find(|t| t.id == id) {
            t.due_ms = due_ms;
            t.armed = true;
        }
    }

    /// Remove a single task without firing it.
    pub fn cancel(&mut self, id: TaskId) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id && t.armed)
    }

    /// Drop every task. Called on unmount; nothing fires afterwards.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Collect the ids of tasks due at `now_ms` into `due`, advancing
    /// recurring deadlines and disarming one-shots. At most one firing per
    /// task per poll, so a stalled tab does not burst-fire on resume.
    pub fn poll(&mut self, now_ms: f64, due: &mut Vec<TaskId>) {
        for t in &mut self.tasks {
            if !t.armed || now_ms < t.due_ms {
                continue;
            }
            due.push(t.id);
            match t.repeat {
                Repeat::Every(period) => {
                    t.due_ms += period;
                    if t.due_ms <= now_ms {
                        // catch up after a long stall instead of replaying
                        t.due_ms = now_ms + period;
                    }
                }
                Repeat::Once => t.armed = false,
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
