use instant::Instant;

pub fn elapsed_seconds(since: Instant) -> f64 {
    let dt = since.elapsed();
    (dt.as_secs() as f64) + (f64::from(dt.subsec_nanos()) * 1e-9)
}

struct TimerSpan {
    name: String,
    started_at: Instant,
    nested_results: Vec<String>,
}

/// Hierarchial timing of the phases of a batch job. Notes are logged at info level as they
/// happen. Span starts and the breakdown of how long each span took (logged when the Timer is
/// dropped) only show up at debug level.
pub struct Timer {
    results: Vec<String>,
    stack: Vec<TimerSpan>,
    outermost_name: String,
    notes: Vec<String>,
    quiet: bool,
}

impl Timer {
    pub fn new<S: Into<String>>(raw_name: S) -> Timer {
        Timer::new_with_quiet(raw_name.into(), false)
    }

    /// Don't log anything. Useful for tests and library callers that don't care.
    pub fn throwaway() -> Timer {
        Timer::new_with_quiet("throwaway".to_string(), true)
    }

    fn new_with_quiet(name: String, quiet: bool) -> Timer {
        let mut t = Timer {
            results: Vec::new(),
            stack: Vec::new(),
            outermost_name: name.clone(),
            notes: Vec::new(),
            quiet,
        };
        t.start(name);
        t
    }

    fn println(&self, line: String) {
        if !self.quiet {
            info!("{}", line);
        }
    }

    fn debug_println(&self, line: String) {
        if !self.quiet {
            debug!("{}", line);
        }
    }

    /// Log something immediately, and remember it so callers can inspect it later.
    pub fn note<S: Into<String>>(&mut self, raw_line: S) {
        let line = raw_line.into();
        self.println(line.clone());
        self.notes.push(line);
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn start<S: Into<String>>(&mut self, raw_name: S) {
        let name = raw_name.into();
        self.debug_println(format!("{}...", name));
        self.stack.push(TimerSpan {
            name,
            started_at: Instant::now(),
            nested_results: Vec::new(),
        });
    }

    pub fn stop<S: Into<String>>(&mut self, raw_name: S) {
        let name = raw_name.into();
        let span = match self.stack.pop() {
            Some(span) => span,
            None => panic!("Timer::stop({}) called with nothing started", name),
        };
        if span.name != name {
            panic!("Timer::stop({}) called while {} is running", name, span.name);
        }

        let padding = "  ".repeat(self.stack.len());
        let line = format!(
            "{}- {} took {}",
            padding,
            span.name,
            prettyprint_time(elapsed_seconds(span.started_at))
        );
        let mut lines = vec![line];
        lines.extend(span.nested_results);
        match self.stack.last_mut() {
            Some(parent) => parent.nested_results.extend(lines),
            None => self.results.extend(lines),
        }
    }
}

impl std::ops::Drop for Timer {
    fn drop(&mut self) {
        // If we're in the middle of unwinding a panic, don't further blow up.
        if std::thread::panicking() {
            return;
        }
        if self.stack.len() != 1 || self.stack[0].name != self.outermost_name {
            warn!(
                "Timer {} dropped with unfinished spans: {:?}",
                self.outermost_name,
                self.stack.iter().map(|s| &s.name).collect::<Vec<_>>()
            );
            return;
        }

        let stop_name = self.outermost_name.clone();
        self.stop(stop_name);
        for line in &self.results {
            self.debug_println(line.to_string());
        }
    }
}

pub fn prettyprint_usize(x: usize) -> String {
    let num = format!("{}", x);
    let mut result = String::new();
    let mut i = num.len();
    for c in num.chars() {
        result.push(c);
        i -= 1;
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
    }
    result
}

pub fn prettyprint_time(seconds: f64) -> String {
    format!("{:.4}s", seconds)
}
