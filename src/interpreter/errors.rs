//! Runtime error types for the interpreter
//!
//! This module defines [`RuntimeError`], which represents all faults that
//! can occur during program execution. Every variant carries the grid
//! position of the instruction that faulted.
//!
//! All runtime errors are fatal — execution halts and the error propagates
//! to the run boundary; there is no recovery or resumption.

use std::fmt;

/// Fatal faults raised while executing a program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A code point outside the instruction set was dispatched
    UnknownInstruction { code: i64, at: (i64, i64) },

    /// An instruction needed more values than the stack holds
    StackUnderflow { at: (i64, i64) },

    /// `]` was executed with no enclosing stack to return to
    SubStackUnderflow { at: (i64, i64) },

    /// `,` or `%` with a zero divisor
    DivisionByZero { at: (i64, i64) },

    /// An operand was not the integer coordinate, count, or code point
    /// the instruction requires
    InvalidOperand { message: String, at: (i64, i64) },
}

impl RuntimeError {
    /// Grid position of the faulting instruction
    pub fn position(&self) -> (i64, i64) {
        match self {
            RuntimeError::UnknownInstruction { at, .. } => *at,
            RuntimeError::StackUnderflow { at } => *at,
            RuntimeError::SubStackUnderflow { at } => *at,
            RuntimeError::DivisionByZero { at } => *at,
            RuntimeError::InvalidOperand { at, .. } => *at,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UnknownInstruction { code, at } => {
                match u32::try_from(*code).ok().and_then(char::from_u32) {
                    Some(ch) if !ch.is_control() => write!(
                        f,
                        "Unknown instruction '{}' (code {}) at ({}, {})",
                        ch, code, at.0, at.1
                    ),
                    _ => write!(f, "Unknown instruction code {} at ({}, {})", code, at.0, at.1),
                }
            }
            RuntimeError::StackUnderflow { at } => {
                write!(f, "Stack underflow at ({}, {})", at.0, at.1)
            }
            RuntimeError::SubStackUnderflow { at } => {
                write!(f, "No enclosing stack to return to at ({}, {})", at.0, at.1)
            }
            RuntimeError::DivisionByZero { at } => {
                write!(f, "Division by zero at ({}, {})", at.0, at.1)
            }
            RuntimeError::InvalidOperand { message, at } => {
                write!(f, "Invalid operand at ({}, {}): {}", at.0, at.1, message)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
