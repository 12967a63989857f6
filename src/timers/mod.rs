//! Nested wall-clock timers for the phases of a solve.

use std::io::{Result, Write};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct PhaseTimer {
    start: Option<Instant>,
    elapsed: Duration,
    children: PhaseList,
}

impl PhaseTimer {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }

    fn suspend(&mut self) {
        if let Some(instant) = self.start {
            self.elapsed += instant.elapsed();
            self.children.suspend();
        }
    }

    fn resume(&mut self) {
        if self.start.is_some() {
            self.start = Some(Instant::now());
            self.children.resume();
        }
    }
}

// phases are kept in the order they were first started so that
// printed reports are stable from run to run
#[derive(Debug, Default)]
struct PhaseList(Vec<(&'static str, PhaseTimer)>);

impl PhaseList {
    fn entry(&mut self, key: &'static str) -> &mut PhaseTimer {
        let pos = match self.0.iter().position(|(k, _)| *k == key) {
            Some(pos) => pos,
            None => {
                self.0.push((key, PhaseTimer::default()));
                self.0.len() - 1
            }
        };
        &mut self.0[pos].1
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut PhaseTimer> {
        self.0.iter_mut().find(|(k, _)| *k == key).map(|(_, t)| t)
    }

    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&PhaseTimer> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, t)| t)
    }

    fn suspend(&mut self) {
        self.0.iter_mut().for_each(|(_, t)| t.suspend());
    }

    fn resume(&mut self) {
        self.0.iter_mut().for_each(|(_, t)| t.resume());
    }

    fn total_time(&self) -> Duration {
        self.0.iter().map(|(_, t)| t.elapsed).sum()
    }

    fn print(&self, out: &mut dyn Write, depth: usize) -> Result<()> {
        for (key, timer) in self.0.iter() {
            let tabs = format!("{: <1$}", "", 4 * depth);
            writeln!(out, "{}{} : {:?}", tabs, key, timer.elapsed)?;
            timer.children.print(out, depth + 1)?;
        }
        Ok(())
    }
}

/// A stack of named timers.  Starting a timer while another is
/// running makes the new one a child of the running one.
#[derive(Debug, Default)]
pub(crate) struct Timers {
    stack: Vec<&'static str>,
    phases: PhaseList,
}

impl Timers {
    fn active_timer(&mut self) -> Option<&mut PhaseTimer> {
        let (first, rest) = self.stack.split_first()?;
        let mut active = self.phases.get_mut(first)?;
        for key in rest {
            active = active.children.get_mut(key)?;
        }
        Some(active)
    }

    /// Zeroes a top level phase and discards its children.  Any
    /// partially timed phases left on the stack are abandoned.
    pub fn reset_timer(&mut self, key: &'static str) {
        self.stack.clear();
        *self.phases.entry(key) = PhaseTimer::default();
    }

    pub fn start_as_current(&mut self, key: &'static str) {
        match self.active_timer() {
            Some(active) => active.children.entry(key).start(),
            None => self.phases.entry(key).start(),
        }
        self.stack.push(key);
    }

    pub fn stop_current(&mut self) {
        if let Some(active) = self.active_timer() {
            active.stop();
        }
        self.stack.pop();
    }

    // Used by notimeit!
    pub fn suspend(&mut self) {
        self.phases.suspend();
    }

    pub fn resume(&mut self) {
        self.phases.resume();
    }

    /// Sum of the top level phases.
    pub fn total_time(&self) -> Duration {
        self.phases.total_time()
    }

    /// Elapsed time of a top level phase.
    #[cfg(test)]
    pub fn elapsed(&self, key: &str) -> Option<Duration> {
        self.phases.get(key).map(|t| t.elapsed)
    }

    pub fn print(&self, out: &mut dyn Write) -> Result<()> {
        self.phases.print(out, 0)
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {
        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

macro_rules! notimeit {
    ($timer:ident; $($tt:tt)+) => {
        $timer.suspend();
        $(
            $tt
        )+
        $timer.resume();
    }
}
pub(crate) use notimeit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_phases() {
        let mut timers = Timers::default();
        timeit! {timers => "outer";
            timeit! {timers => "inner"; std::thread::sleep(Duration::from_millis(2)); }
            timeit! {timers => "second"; {} }
        }
        assert!(timers.elapsed("outer").unwrap() >= Duration::from_millis(2));
        assert!(timers.elapsed("inner").is_none());
        assert_eq!(timers.total_time(), timers.elapsed("outer").unwrap());

        let mut out = Vec::new();
        timers.print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("outer : "));
        assert!(lines[1].starts_with("    inner : "));
        assert!(lines[2].starts_with("    second : "));

        timers.reset_timer("outer");
        assert_eq!(timers.total_time(), Duration::ZERO);
    }

    #[test]
    fn test_suspended_time_not_counted() {
        let mut timers = Timers::default();
        timeit! {timers => "work";
            notimeit! {timers; std::thread::sleep(Duration::from_millis(20)); }
        }
        assert!(timers.elapsed("work").unwrap() < Duration::from_millis(20));
    }
}
