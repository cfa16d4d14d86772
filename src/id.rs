use jiff::Timestamp;

/// Issues unique, strictly increasing integer identifiers.
///
/// Ids are derived from the current wall clock in milliseconds, but a raw
/// timestamp collides when two entities are created within the same
/// millisecond. `next` bumps past the last issued id whenever the clock
/// hasn't moved, so ids stay strictly increasing within a process. Seeding
/// from the largest persisted id keeps the guarantee across restarts.
#[derive(Debug)]
pub struct IdGen {
    last: i64,
}

impl IdGen {
    pub fn seeded(last: i64) -> Self {
        Self { last }
    }

    pub fn next(&mut self) -> i64 {
        let now = Timestamp::now().as_millisecond();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }
}
