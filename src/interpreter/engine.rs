// Execution engine: the fetch-execute-advance loop

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::console::{ByteSource, TextSink};
use crate::interpreter::errors::RuntimeError;
use crate::memory::stack::Stack;
use crate::memory::value::Value;
use crate::parser::grid::Grid;
use crate::parser::symbols::{kind_of, noun_value, Kind};

/// What the engine does with the next fetched cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Classify and dispatch normally
    Normal,
    /// Consume one instruction with no effect (set by `!` and falsy `?`)
    Skipping,
    /// Push every code point verbatim until the delimiter reappears
    Quoting(i64),
}

/// The interpreter for one program run
///
/// Owns every piece of execution state: the (self-modifiable) grid, the
/// program counter and direction vector, the stack hierarchy with its
/// register, the execution mode, and the two I/O collaborators.
pub struct Interpreter<S: ByteSource, K: TextSink> {
    /// Program grid; `p` mutates it in place
    pub(crate) grid: Grid,

    /// Program counter: (column, row)
    pub(crate) pc: (i64, i64),

    /// Direction vector; components in {-1, 0, 1}, never both zero
    pub(crate) dx: i64,
    pub(crate) dy: i64,

    /// Value stack, saved frames, and register
    pub(crate) stack: Stack,

    /// Normal, skipping, or quoting
    pub(crate) mode: Mode,

    /// Input collaborator for `i`
    pub(crate) input: S,

    /// Output collaborator for `n` and `o`
    pub(crate) output: K,

    /// Direction source for `x`
    pub(crate) rng: StdRng,

    /// Set by `;`
    pub(crate) finished: bool,

    /// Set by `.` to suppress the advance for the current step
    pub(crate) jumped: bool,
}

impl<S: ByteSource, K: TextSink> Interpreter<S, K> {
    /// Create an interpreter at (0, 0) heading right
    pub fn new(grid: Grid, input: S, output: K) -> Self {
        Interpreter {
            grid,
            pc: (0, 0),
            dx: 1,
            dy: 0,
            stack: Stack::new(),
            mode: Mode::Normal,
            input,
            output,
            rng: StdRng::from_entropy(),
            finished: false,
            jumped: false,
        }
    }

    /// Replace the RNG with a seeded one, for deterministic `x` behavior
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Run until `;` or a fatal error
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while !self.finished {
            self.step()?;
        }
        Ok(())
    }

    /// Execute one fetch-execute-advance cycle
    pub fn step(&mut self) -> Result<(), RuntimeError> {
        let code = self.grid.get(self.pc.0, self.pc.1);
        self.jumped = false;

        match self.mode {
            Mode::Skipping => {
                self.mode = Mode::Normal;
            }
            Mode::Quoting(delimiter) => {
                if code == delimiter {
                    self.mode = Mode::Normal;
                } else {
                    self.stack.push(Value::from(code));
                }
            }
            Mode::Normal => match kind_of(code) {
                Kind::Noun => self.stack.push(Value::from(noun_value(code))),
                Kind::Dyadic => self.exec_dyadic(code)?,
                Kind::StackOp => self.exec_stack_op(code)?,
                Kind::Mirror => self.exec_mirror(code),
                Kind::Control => self.exec_control(code)?,
                Kind::Quote => self.mode = Mode::Quoting(code),
                Kind::Other => {
                    return Err(RuntimeError::UnknownInstruction { code, at: self.pc });
                }
            },
        }

        if !self.finished && !self.jumped {
            self.advance();
        }
        Ok(())
    }

    /// Move the pc one step, wrapping each axis at the current extents
    ///
    /// Bounds are looked up against the pre-advance row and column. An axis
    /// whose direction component is zero is left alone even when the
    /// coordinate sits outside the extent (possible after a jump).
    fn advance(&mut self) {
        let (px, py) = self.pc;

        let mut x = px + self.dx;
        if x < 0 || x > self.grid.row_extent(py) {
            if self.dx < 0 {
                x = self.grid.row_extent(py);
            } else if self.dx > 0 {
                x = 0;
            }
        }

        let mut y = py + self.dy;
        if y < 0 || y > self.grid.col_extent(px) {
            if self.dy < 0 {
                y = self.grid.col_extent(px);
            } else if self.dy > 0 {
                y = 0;
            }
        }

        self.pc = (x, y);
    }

    /// Pop the top of stack or fault at the current position
    pub(crate) fn pop(&mut self) -> Result<Value, RuntimeError> {
        self.stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow { at: self.pc })
    }

    /// Pop a value that must be an in-range integer (coordinate, count, …)
    pub(crate) fn pop_index(&mut self, what: &str) -> Result<i64, RuntimeError> {
        let value = self.pop()?;
        value.as_index().ok_or_else(|| RuntimeError::InvalidOperand {
            message: format!("{} must be an integer, got {}", what, value),
            at: self.pc,
        })
    }

    pub fn pc(&self) -> (i64, i64) {
        self.pc
    }

    pub fn direction(&self) -> (i64, i64) {
        (self.dx, self.dy)
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn output(&self) -> &K {
        &self.output
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
