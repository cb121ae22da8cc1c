#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

/// Represents a time in minutes from the reference epoch.
pub type Timestamp = i64;

/// Represents a time duration in minutes.
pub type Duration = i64;

/// Represents a distance in distance units.
pub type Distance = i64;

/// Represents a time window with inclusive bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    /// Start of the window.
    pub start: Timestamp,
    /// End of the window.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns true if window has no time points.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Checks whether the time point belongs to the window.
    pub fn contains(&self, time: Timestamp) -> bool {
        self.start <= time && time <= self.end
    }

    /// Checks whether time window has intersection with another one.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// A time domain: a base window with a set of removed sub intervals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeDomain {
    /// A base window.
    pub window: TimeWindow,
    /// Intervals removed from the base window.
    pub excluded: Vec<TimeWindow>,
}

impl TimeDomain {
    /// Creates a domain without exclusions.
    pub fn new(window: TimeWindow) -> Self {
        Self { window, excluded: vec![] }
    }

    /// Removes given interval from the domain. Empty intervals are ignored.
    pub fn exclude(&mut self, interval: TimeWindow) {
        if !interval.is_empty() {
            self.excluded.push(interval);
        }
    }

    /// Checks whether the time point is admissible.
    pub fn contains(&self, time: Timestamp) -> bool {
        self.window.contains(time) && !self.excluded.iter().any(|excluded| excluded.contains(time))
    }

    /// Returns the earliest admissible time point which is not earlier than given one.
    pub fn earliest_from(&self, time: Timestamp) -> Option<Timestamp> {
        let mut time = time.max(self.window.start);

        loop {
            if time > self.window.end {
                return None;
            }

            match self.excluded.iter().filter(|excluded| excluded.contains(time)).map(|excluded| excluded.end).max() {
                Some(end) => time = end + 1,
                None => return Some(time),
            }
        }
    }
}
