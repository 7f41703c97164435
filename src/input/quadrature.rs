/// Quarter-step increments indexed by `(previous AB << 2) | current AB`.
///
/// Gray-code neighbours give ±1; no change and the impossible
/// double transitions (both pins flipping at once) give 0.
const TRANSITIONS: [i8; 16] = [
    0, -1, 1, 0, //
    1, 0, 0, -1, //
    -1, 0, 0, 1, //
    0, 1, -1, 0,
];

/// Quadrature decoder for an A/B incremental encoder.
///
/// Counts every edge, so a typical detented knob yields 4 steps per click.
#[derive(Clone, Copy, Debug)]
pub struct QuadratureDecoder {
    state: u8,
}

impl QuadratureDecoder {
    /// Start from the current pin levels.
    pub fn new(a: bool, b: bool) -> Self {
        Self {
            state: Self::levels(a, b),
        }
    }

    fn levels(a: bool, b: bool) -> u8 {
        (u8::from(a) << 1) | u8::from(b)
    }

    /// Feed new pin levels; returns the signed quarter-step they represent.
    pub fn step(&mut self, a: bool, b: bool) -> i8 {
        let next = Self::levels(a, b);
        let idx = (self.state << 2) | next;
        self.state = next;
        TRANSITIONS[idx as usize]
    }
}
