use std::{
    fmt::Display,
    time::{Duration, Instant},
};

#[derive(Debug, Default)]
pub struct SearchStats {
    /// Relaxation passes over the full edge list, not counting the final cycle check
    pub passes: usize,
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.passes = 0;
        self.edges_relaxed = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} passes, {} edges relaxed in {:?}",
            self.passes, self.edges_relaxed, self.duration
        )
    }
}
