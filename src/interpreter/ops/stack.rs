//! Stack manipulation instructions
//!
//! Most of the work lives in [`crate::memory::stack::Stack`]; this file
//! dispatches to it and attaches the faulting grid position to any
//! underflow. `[` and `]` manage the sub-stack hierarchy: `[` carves the
//! top `n` values into a fresh scope (saving the old stack and register),
//! `]` merges the scope back into its parent.

use crate::console::{ByteSource, TextSink};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;

impl<S: ByteSource, K: TextSink> Interpreter<S, K> {
    pub(crate) fn exec_stack_op(&mut self, code: i64) -> Result<(), RuntimeError> {
        match code as u8 {
            b'$' => self.underflow_check(|stack| stack.swap())?,
            b':' => self.underflow_check(|stack| stack.dup())?,
            b'@' => self.underflow_check(|stack| stack.rotate_three())?,
            b'[' => {
                let n = self.pop_index("sub-stack size")?;
                let n = usize::try_from(n).map_err(|_| RuntimeError::InvalidOperand {
                    message: format!("sub-stack size must be non-negative, got {}", n),
                    at: self.pc,
                })?;
                self.stack
                    .push_frame(n)
                    .map_err(|_| RuntimeError::StackUnderflow { at: self.pc })?;
            }
            b']' => {
                self.stack
                    .pop_frame()
                    .map_err(|_| RuntimeError::SubStackUnderflow { at: self.pc })?;
            }
            b'l' => {
                let len = self.stack.len();
                self.stack.push(Value::from(len as i64));
            }
            b'r' => self.stack.reverse(),
            b'{' => self.stack.rotate_left(),
            b'}' => self.stack.rotate_right(),
            b'~' => self.underflow_check(|stack| stack.discard())?,
            _ => unreachable!("non-stack code point {} dispatched as stack op", code),
        }
        Ok(())
    }

    fn underflow_check(
        &mut self,
        op: impl FnOnce(&mut crate::memory::stack::Stack) -> Result<(), String>,
    ) -> Result<(), RuntimeError> {
        op(&mut self.stack).map_err(|_| RuntimeError::StackUnderflow { at: self.pc })
    }
}
