//! Key-driven calculator state: one input buffer plus one step ledger.
//!
//! Every key is handled synchronously. Only `=` has an effect outside the
//! session: it returns the `HistoryEntry` the caller is expected to store.

use super::buffer::InputBuffer;
use super::evaluator;
use super::ledger::StepLedger;
use crate::errors::AppResult;
use crate::models::color_tag::ColorTag;
use crate::models::history_entry::HistoryEntry;
use crate::models::key::Key;
use crate::models::operator::Operator;
use crate::models::step::CalculationStep;

/// What the buffer currently holds relative to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum BufferOrigin {
    /// An operand being typed.
    #[default]
    Typed,
    /// The untouched result of the last `=`.
    Result,
    /// The result of the last `=`, changed by `⌫` or `%`.
    EditedResult,
    /// The value of the last step of a restored ledger, pending or not.
    RestoredTail,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationSession {
    buffer: InputBuffer,
    ledger: StepLedger,
    origin: BufferOrigin,
    color: ColorTag,
}

/// Pure form of [`CalculationSession::handle_key`] for callers that keep the
/// state themselves.
pub fn transition(
    mut state: CalculationSession,
    key: Key,
) -> (CalculationSession, Option<HistoryEntry>) {
    let effect = state.handle_key(key);
    (state, effect)
}

impl CalculationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose emitted entries carry `color`.
    pub fn with_color(color: ColorTag) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn ledger(&self) -> &StepLedger {
        &self.ledger
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }

    /// `HH:MM:SS` of the buffer.
    pub fn current_display(&self) -> String {
        self.buffer.display()
    }

    pub fn running_trace(&self) -> String {
        self.ledger.trace()
    }

    /// Handle a keypad symbol. Symbols outside the keypad set are ignored.
    pub fn handle_symbol(&mut self, symbol: &str) -> Option<HistoryEntry> {
        Key::from_symbol(symbol).and_then(|key| self.handle_key(key))
    }

    pub fn handle_key(&mut self, key: Key) -> Option<HistoryEntry> {
        match key {
            Key::Digit(d) => {
                self.edit_buffer(|b| b.append_digit(d));
                None
            }
            Key::Backspace => {
                self.edit_buffer(InputBuffer::backspace);
                None
            }
            Key::Percent => {
                self.edit_buffer(InputBuffer::percent);
                None
            }
            Key::Operator(op) => {
                self.commit_operator(op);
                None
            }
            Key::Clear => {
                self.ledger.clear();
                self.buffer.clear();
                self.origin = BufferOrigin::Typed;
                None
            }
            Key::Evaluate => Some(self.evaluate()),
        }
    }

    fn edit_buffer(&mut self, edit: impl FnOnce(&mut InputBuffer)) {
        let before = self.buffer.clone();
        edit(&mut self.buffer);
        if self.origin == BufferOrigin::Result && self.buffer != before {
            self.origin = BufferOrigin::EditedResult;
        }
    }

    fn commit_operator(&mut self, op: Operator) {
        let value = self.buffer.seconds();
        match self.origin {
            BufferOrigin::Result => {
                if !self.ledger.reopen(op) {
                    self.ledger.commit_value(value, Some(op));
                }
            }
            BufferOrigin::EditedResult => {
                self.ledger.reopen(Operator::Add);
                self.ledger.commit_value(value, Some(op));
            }
            BufferOrigin::Typed => {
                if !self.ledger.rewrite_pending(value, Some(op)) {
                    self.ledger.commit_value(value, Some(op));
                }
            }
            BufferOrigin::RestoredTail => {
                if !self.ledger.rewrite_last(value, Some(op)) {
                    self.ledger.commit_value(value, Some(op));
                }
            }
        }
        self.buffer.clear();
        self.origin = BufferOrigin::Typed;
    }

    fn evaluate(&mut self) -> HistoryEntry {
        let value = self.buffer.seconds();
        match self.origin {
            BufferOrigin::Result => {}
            BufferOrigin::EditedResult => {
                self.ledger.reopen(Operator::Add);
                self.ledger.commit_value(value, None);
            }
            BufferOrigin::Typed => {
                if !self.ledger.rewrite_pending(value, None) {
                    self.ledger.commit_value(value, None);
                }
            }
            BufferOrigin::RestoredTail => {
                if !self.ledger.rewrite_last(value, None) {
                    self.ledger.commit_value(value, None);
                }
            }
        }

        let result = evaluator::fold(&self.ledger);
        self.buffer.load(result);
        self.origin = BufferOrigin::Result;

        HistoryEntry::new(self.ledger.clone(), result, self.color)
    }

    /// Drop one committed step. When the ledger still ends with a pending
    /// step the buffer is re-synced to it. An operand being typed is kept;
    /// a displayed result is cleared.
    pub fn remove_step(&mut self, index: usize) -> Option<CalculationStep> {
        let removed = self.ledger.remove_at(index)?;
        match (self.ledger.last(), self.origin) {
            (Some(step), _) if step.is_pending() => {
                self.buffer.load(step.value);
                self.origin = BufferOrigin::Typed;
            }
            (Some(step), BufferOrigin::RestoredTail) => self.buffer.load(step.value),
            (_, BufferOrigin::Typed) => {}
            _ => {
                self.buffer.clear();
                self.origin = BufferOrigin::Typed;
            }
        }
        Some(removed)
    }

    /// Replace the session state with a stored ledger. The buffer shows the
    /// last step's value so it can be edited or re-evaluated, and the next
    /// operator or `=` rewrites that step rather than appending a copy. The
    /// stored result is not recomputed here.
    pub fn restore(&mut self, ledger: StepLedger) {
        match ledger.last() {
            Some(step) => {
                self.buffer.load(step.value);
                self.origin = BufferOrigin::RestoredTail;
            }
            None => {
                self.buffer.clear();
                self.origin = BufferOrigin::Typed;
            }
        }
        self.ledger = ledger;
    }

    /// Restore from the JSON text stored with a history entry. On a decode
    /// error the session is reset and `RestoreFailure` is returned.
    pub fn restore_encoded(&mut self, raw: &str) -> AppResult<()> {
        match StepLedger::decode(raw) {
            Ok(ledger) => {
                self.restore(ledger);
                Ok(())
            }
            Err(e) => {
                self.restore(StepLedger::new());
                Err(e)
            }
        }
    }
}
