//! Control, register, grid access, and I/O instructions
//!
//! The grab bag of the instruction set: skip and conditional skip, the
//! register toggle, the absolute jump, termination, reflective grid reads
//! and writes (`g` / `p`), and the three I/O instructions (`i` / `n` / `o`)
//! that talk to the console collaborators. Code point 0 and space are
//! no-ops so that unpopulated cells and padding can be executed freely.

use crate::console::{ByteSource, TextSink};
use crate::interpreter::engine::{Interpreter, Mode};
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;

impl<S: ByteSource, K: TextSink> Interpreter<S, K> {
    pub(crate) fn exec_control(&mut self, code: i64) -> Result<(), RuntimeError> {
        match code as u8 {
            0 | b' ' => {}
            b'!' => self.mode = Mode::Skipping,
            b'&' => {
                self.stack
                    .toggle_register()
                    .map_err(|_| RuntimeError::StackUnderflow { at: self.pc })?;
            }
            b'.' => {
                let y = self.pop_index("jump row")?;
                let x = self.pop_index("jump column")?;
                self.pc = (x, y);
                // the landing cell executes next; no advance this cycle
                self.jumped = true;
            }
            b';' => self.finished = true,
            b'?' => {
                if self.pop()?.is_zero() {
                    self.mode = Mode::Skipping;
                }
            }
            b'g' => {
                let y = self.pop_index("read row")?;
                let x = self.pop_index("read column")?;
                let cell = self.grid.get(x, y);
                self.stack.push(Value::from(cell));
            }
            b'i' => {
                let value = match self.input.read_byte() {
                    Some(byte) => i64::from(byte),
                    None => -1,
                };
                self.stack.push(Value::from(value));
            }
            b'n' => {
                let value = self.pop()?;
                self.output.write_text(&value.to_string());
            }
            b'o' => {
                let value = self.pop()?;
                let ch = value
                    .as_code_point()
                    .ok_or_else(|| RuntimeError::InvalidOperand {
                        message: format!("{} is not a valid code point", value),
                        at: self.pc,
                    })?;
                self.output.write_char(ch);
            }
            b'p' => {
                let y = self.pop_index("write row")?;
                let x = self.pop_index("write column")?;
                let v = self.pop_index("cell value")?;
                self.grid.set(x, y, v);
            }
            _ => unreachable!("non-control code point {} dispatched as control", code),
        }
        Ok(())
    }
}
