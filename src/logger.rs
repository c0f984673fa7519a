use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Progress logger. Writes to stderr, leaving stdout to the conversion results.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn format(&self, value: impl Display) -> String {
        format!("{} ({} elapsed)", value, self.chronometer.elapsed())
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{}", self.format(value));
        }
    }
}

/// Logs only every `interval`-th call.
#[derive(Clone, Copy)]
pub struct PartialLogger<'a> {
    index: usize,
    interval: usize,
    logger: &'a Logger,
}

impl<'a> PartialLogger<'a> {
    pub fn new(interval: usize, logger: &'a Logger) -> Self {
        Self {
            index: 0,
            interval: interval.max(1),
            logger,
        }
    }

    pub fn log<D: Display>(&mut self, f: impl FnOnce(usize) -> D) {
        if self.logger.enabled() && self.index % self.interval == 0 {
            self.logger.log(f(self.index));
        }
        self.index += 1;
    }

    pub fn count(&self) -> usize {
        self.index
    }
}
