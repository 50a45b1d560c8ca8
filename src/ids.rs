use chrono::Utc;

/// Hands out fresh record ids.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Millisecond-timestamp ids. Two ids in the same millisecond are bumped apart, so ids from
/// one source are strictly increasing; ids are not unique across sources.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: i64,
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let id = if now > self.last { now } else { self.last + 1 };
        self.last = id;
        id.to_string()
    }
}

/// Predictable ids, counting up from a starting value.
#[derive(Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        SequentialIds { next }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_ids_strictly_increase() {
        let mut ids = ClockIds::default();
        let mut prev: i64 = ids.next_id().parse().unwrap();
        for _ in 0..1000 {
            let id: i64 = ids.next_id().parse().unwrap();
            assert!(id > prev);
            prev = id;
        }
    }

    #[test]
    fn test_clock_ids_look_like_timestamps() {
        let mut ids = ClockIds::default();
        let before = Utc::now().timestamp_millis();
        let id: i64 = ids.next_id().parse().unwrap();
        assert!(id >= before);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::starting_at(100);
        assert_eq!(ids.next_id(), "100");
        assert_eq!(ids.next_id(), "101");
    }
}
