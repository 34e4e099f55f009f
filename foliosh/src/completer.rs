use foliosh::{Direction, Terminal};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Context, Event, EventContext, Helper, Movement, RepeatCount,
};
use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Callbacks run inside `readline` on the REPL thread, so the lock never
/// contends. A poisoned lock still holds a usable session.
pub fn lock(terminal: &Mutex<Terminal>) -> MutexGuard<'_, Terminal> {
    terminal.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct FolioHelper {
    pub terminal: Arc<Mutex<Terminal>>,
}

impl FolioHelper {
    pub const fn new(terminal: Arc<Mutex<Terminal>>) -> Self {
        Self { terminal }
    }
}

impl Completer for FolioHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];
        let completed = lock(&self.terminal).request_completion(line_to_cursor);
        if completed == line_to_cursor {
            return Ok((pos, vec![]));
        }

        // the whole line up to the cursor is rebuilt, not just the last word
        Ok((
            0,
            vec![Pair {
                display: completed.clone(),
                replacement: completed,
            }],
        ))
    }
}

impl Hinter for FolioHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for FolioHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Borrowed(hint)
    }
}

impl Validator for FolioHelper {}

impl Helper for FolioHelper {}

/// Up/Down bound to the session's own history instead of rustyline's.
pub struct HistoryKey {
    terminal: Arc<Mutex<Terminal>>,
    direction: Direction,
}

impl HistoryKey {
    pub const fn new(terminal: Arc<Mutex<Terminal>>, direction: Direction) -> Self {
        Self {
            terminal,
            direction,
        }
    }
}

impl ConditionalEventHandler for HistoryKey {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        _ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        let line = lock(&self.terminal).navigate_history(self.direction);
        Some(line.map_or(Cmd::Noop, |line| {
            Cmd::Replace(Movement::WholeBuffer, Some(line))
        }))
    }
}
