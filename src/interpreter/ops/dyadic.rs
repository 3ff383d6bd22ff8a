//! Binary arithmetic and comparison instructions
//!
//! Operand order is fixed for the whole category: with `a` popped first
//! (the top) and `b` second, every operator computes `b OP a` — the deeper
//! value is the left operand. `2 3 -` therefore leaves `-1`, not `1`.

use std::cmp::Ordering;

use crate::console::{ByteSource, TextSink};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;

impl<S: ByteSource, K: TextSink> Interpreter<S, K> {
    pub(crate) fn exec_dyadic(&mut self, code: i64) -> Result<(), RuntimeError> {
        let a = self.pop()?;
        let b = self.pop()?;

        let result = match code as u8 {
            b'%' => b
                .rem(a)
                .map_err(|_| RuntimeError::DivisionByZero { at: self.pc })?,
            b'*' => b.mul(a),
            b'+' => b.add(a),
            b',' => b
                .div(a)
                .map_err(|_| RuntimeError::DivisionByZero { at: self.pc })?,
            b'-' => b.sub(a),
            b'(' => Value::truth(b.compare(&a) == Ordering::Less),
            b')' => Value::truth(b.compare(&a) == Ordering::Greater),
            b'=' => Value::truth(b.compare(&a) == Ordering::Equal),
            _ => unreachable!("non-dyadic code point {} dispatched as dyadic", code),
        };

        self.stack.push(result);
        Ok(())
    }
}
