//! Call-depth tracking for the interpreter.

use tracing::trace;

use crate::errors::{recursion_limit_exceeded, EvalError};

/// A single frame in the live call stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Name of the called function.
    pub name: String,
}

impl CallFrame {
    pub fn new(name: impl Into<String>) -> Self {
        CallFrame { name: name.into() }
    }
}

/// Live call stack.
///
/// Each function call pushes a frame and pops it on return. The depth limit
/// is checked in [`push`](CallStack::push).
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame. On overflow the frame is not pushed.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        trace!(function = %frame.name, depth = self.frames.len(), "call");
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Function names, innermost call first.
    pub fn backtrace(&self) -> Vec<&str> {
        self.frames.iter().rev().map(|f| f.name.as_str()).collect()
    }
}
