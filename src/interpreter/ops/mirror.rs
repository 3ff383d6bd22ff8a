//! Direction-changing instructions
//!
//! Mirrors rewrite the direction vector as a pure function of its current
//! value, except `x`, which draws one of the four cardinal unit vectors
//! from the engine's RNG. Every rewrite maps a nonzero vector to a nonzero
//! vector, so the pc can never stall.

use rand::Rng;

use crate::console::{ByteSource, TextSink};
use crate::interpreter::engine::Interpreter;

const CARDINALS: [(i64, i64); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

impl<S: ByteSource, K: TextSink> Interpreter<S, K> {
    pub(crate) fn exec_mirror(&mut self, code: i64) {
        let (dx, dy) = (self.dx, self.dy);

        let (dx, dy) = match code as u8 {
            b'#' => (-dx, -dy),
            b'/' => (-dy, -dx),
            b'<' => (-1, 0),
            b'>' => (1, 0),
            b'\\' => (dy, dx),
            b'^' => (0, -1),
            b'_' => (dx, -dy),
            b'v' => (0, 1),
            b'x' => CARDINALS[self.rng.gen_range(0..CARDINALS.len())],
            b'|' => (-dx, dy),
            _ => unreachable!("non-mirror code point {} dispatched as mirror", code),
        };

        self.dx = dx;
        self.dy = dy;
    }
}
