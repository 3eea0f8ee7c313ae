use std::time::Instant;

/// Millisecond stopwatch for stage timings.
pub struct Timer{
    time: Instant,
    prev: u128,
}

impl Timer{
    pub fn new() -> Self{
        Self{ time: Instant::now(), prev: 0 }
    }

    /// Milliseconds since the previous lap (or since creation), then restarts the lap.
    pub fn lap(&mut self) -> u128{
        let now = self.time.elapsed().as_millis();
        let lap = now - self.prev;
        self.prev = now;
        lap
    }

    pub fn total(&self) -> u128{
        self.time.elapsed().as_millis()
    }
}

#[cfg(test)]
mod tests{

    use super::*;

    #[test]
    fn test_laps_add_up(){
        let mut timer = Timer::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let a = timer.lap();
        let b = timer.lap();
        assert!(a >= 5);
        assert!(a + b <= timer.total());
    }
}
