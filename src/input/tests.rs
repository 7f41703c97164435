//! Unit tests for pot averaging, encoder settling and quadrature decoding.
//!
//! These tests run on the host (not embedded) and drive the inputs
//! through scripted raw sources.

use super::encoder::{EncoderConfig, QuadratureCounter, SizeEncoder};
use super::pots::{ColorPots, PotConfig, PotSource};
use super::quadrature::QuadratureDecoder;
use crate::clock::Millis;
use smart_leds::RGB8;
use std::collections::VecDeque;

/// Replays raw pot readings, repeating the last one when the script runs out.
struct ScriptedPots {
    script: VecDeque<[u16; 3]>,
    last: [u16; 3],
}

impl ScriptedPots {
    fn new(script: &[[u16; 3]]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            last: [0; 3],
        }
    }

    fn steady(raw: [u16; 3]) -> Self {
        Self::new(&[raw])
    }
}

impl PotSource for ScriptedPots {
    fn sample(&mut self) -> [u16; 3] {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last
    }
}

/// Replays raw encoder counts and records every reset.
struct ScriptedCounter {
    script: VecDeque<i32>,
    value: i32,
    writes: Vec<i32>,
}

impl ScriptedCounter {
    fn new(script: &[i32]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            value: 0,
            writes: Vec::new(),
        }
    }
}

impl QuadratureCounter for ScriptedCounter {
    fn read(&mut self) -> i32 {
        if let Some(next) = self.script.pop_front() {
            self.value = next;
        }
        self.value
    }

    fn write(&mut self, value: i32) {
        self.value = value;
        self.writes.push(value);
    }
}

/// 8-bit readings straight through: no shift, no averaging.
fn plain_pots() -> PotConfig {
    PotConfig {
        samples: 1,
        adc_shift: 0,
        upper_bound: 253,
        lower_bound: 0,
    }
}

/// Detents map 1:1 to raw counts; 15 ms settle.
fn plain_encoder() -> EncoderConfig {
    EncoderConfig {
        settle_ms: 15,
        step_shift: 0,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Pot Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn pots_average_and_round_to_nearest() {
    let config = PotConfig {
        samples: 4,
        ..plain_pots()
    };
    // Red: (10 + 11 + 11 + 11) / 4 = 10.75 → 11
    // Green: (100 + 101 + 100 + 101) / 4 = 100.5 → 101 (half rounds up)
    // Blue: (40 + 40 + 41 + 40) / 4 = 40.25 → 40
    let raw = [[10, 100, 40], [11, 101, 40], [11, 100, 41], [11, 101, 40]];
    let mut pots = ColorPots::new(ScriptedPots::new(&raw), config, Millis::ZERO);
    assert_eq!(pots.rgb(), RGB8::new(11, 101, 40));
    // The script is used up, so the last reading repeats.
    assert_eq!(pots.sample(), RGB8::new(11, 101, 40));
}

#[test]
fn pots_saturate_at_both_rails() {
    let mut pots = ColorPots::new(
        ScriptedPots::steady([253, 254, 252]),
        plain_pots(),
        Millis::ZERO,
    );
    assert_eq!(pots.rgb(), RGB8::new(255, 255, 252));

    let config = PotConfig {
        lower_bound: 3,
        ..plain_pots()
    };
    pots = ColorPots::new(ScriptedPots::steady([3, 4, 0]), config, Millis::ZERO);
    assert_eq!(pots.rgb(), RGB8::new(0, 4, 0));
}

#[test]
fn pots_scale_raw_adc_counts_to_8_bits() {
    // 12-bit counts shifted by 4.
    let config = PotConfig {
        adc_shift: 4,
        ..plain_pots()
    };
    let pots = ColorPots::new(
        ScriptedPots::steady([4095, 0x800, 15]),
        config,
        Millis::ZERO,
    );
    assert_eq!(pots.rgb(), RGB8::new(255, 128, 0));
}

#[test]
fn pots_oversized_adc_shift_reads_zero() {
    for adc_shift in [16, 200] {
        let config = PotConfig {
            adc_shift,
            ..plain_pots()
        };
        let pots = ColorPots::new(
            ScriptedPots::steady([u16::MAX, 4095, 1]),
            config,
            Millis::ZERO,
        );
        assert!(pots.zeroed());
    }
}

#[test]
fn pots_clamp_oversized_readings() {
    // A raw value too wide for the shift still lands in 0..=255.
    let pots = ColorPots::new(
        ScriptedPots::steady([u16::MAX, 1000, 300]),
        plain_pots(),
        Millis::ZERO,
    );
    assert_eq!(pots.rgb(), RGB8::new(255, 255, 255));
}

#[test]
fn pots_channels_stay_in_range_for_any_input() {
    let config = PotConfig {
        samples: 3,
        adc_shift: 2,
        upper_bound: 250,
        lower_bound: 5,
    };
    let mut raw = Vec::new();
    for i in 0u32..600 {
        let v = (i * 7919 % 1024) as u16;
        raw.push([v, 1023 - v, v / 2]);
    }
    let mut pots = ColorPots::new(ScriptedPots::new(&raw), config, Millis::ZERO);
    for _ in 0..150 {
        let rgb = pots.sample();
        for channel in [rgb.r, rgb.g, rgb.b] {
            assert!(channel == 0 || channel == 255 || (6..250).contains(&channel));
        }
    }
}

#[test]
fn pots_zero_samples_reads_once() {
    let config = PotConfig {
        samples: 0,
        ..plain_pots()
    };
    let pots = ColorPots::new(ScriptedPots::steady([9, 8, 7]), config, Millis::ZERO);
    assert_eq!(pots.rgb(), RGB8::new(9, 8, 7));
}

#[test]
fn pots_update_reports_change_and_stamps_time() {
    let raw = [[10, 10, 10], [10, 10, 10], [10, 12, 10]];
    let mut pots = ColorPots::new(ScriptedPots::new(&raw), plain_pots(), Millis(100));

    assert!(!pots.update(Millis(250)));
    assert_eq!(pots.time_since_change(Millis(300)), 200);

    assert!(pots.update(Millis(400)));
    assert_eq!(pots.rgb(), RGB8::new(10, 12, 10));
    assert_eq!(pots.time_since_change(Millis(450)), 50);
}

#[test]
fn pots_zeroed_needs_all_three_channels_at_zero() {
    let raw = [[0, 0, 0], [0, 0, 1]];
    let mut pots = ColorPots::new(ScriptedPots::new(&raw), plain_pots(), Millis::ZERO);
    assert!(pots.zeroed());
    pots.update(Millis(1));
    assert!(!pots.zeroed());
}

// ═══════════════════════════════════════════════════════════════════════════
// Encoder Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn encoder_starts_unready_at_initial_position() {
    let enc = SizeEncoder::new(ScriptedCounter::new(&[12]), plain_encoder(), Millis::ZERO);
    assert!(!enc.ready());
    assert_eq!(enc.ready_pos(), 12);
    assert_eq!(enc.position(), 12);
}

#[test]
fn encoder_becomes_ready_after_settle_window() {
    let mut enc = SizeEncoder::new(ScriptedCounter::new(&[3]), plain_encoder(), Millis::ZERO);
    for t in 1..15 {
        assert!(!enc.update(Millis(t)));
        assert!(!enc.ready(), "ready too early at {t} ms");
    }
    assert!(!enc.update(Millis(15)));
    assert!(enc.ready());
    assert_eq!(enc.ready_pos(), 3);
}

#[test]
fn encoder_settle_sequence_holds_old_ready_pos() {
    // One raw read per tick, 1 ms per tick, settle covers 15 ticks.
    let mut script = vec![5, 5, 5];
    script.extend(std::iter::repeat(7).take(18));
    let mut enc = SizeEncoder::new(ScriptedCounter::new(&script), plain_encoder(), Millis(0));

    // Tick 0 was the constructor read. Ticks 1-2 hold at 5, tick 3 moves to 7.
    assert!(!enc.update(Millis(1)));
    assert!(!enc.update(Millis(2)));
    assert!(enc.update(Millis(3)));
    assert_eq!(enc.position(), 7);

    for t in 4..18 {
        assert!(!enc.update(Millis(t)));
        assert!(!enc.ready(), "ready too early at tick {t}");
        assert_eq!(enc.ready_pos(), 5);
    }

    // 15 ticks after the change.
    assert!(!enc.update(Millis(18)));
    assert!(enc.ready());
    assert_eq!(enc.ready_pos(), 7);
}

#[test]
fn encoder_change_mid_settle_restarts_window() {
    let script = [0, 1, 1, 2, 2, 2];
    let mut enc = SizeEncoder::new(ScriptedCounter::new(&script), plain_encoder(), Millis(0));

    assert!(enc.update(Millis(10))); // → 1, ready at 25
    assert!(!enc.update(Millis(20)));
    assert!(enc.update(Millis(24))); // → 2, ready at 39
    assert!(!enc.update(Millis(30)));
    assert!(!enc.ready());
    assert_eq!(enc.ready_pos(), 0);

    assert!(!enc.update(Millis(39)));
    assert!(enc.ready());
    assert_eq!(enc.ready_pos(), 2);
}

#[test]
fn encoder_change_clears_ready() {
    let script = [4, 4, 5];
    let mut enc = SizeEncoder::new(ScriptedCounter::new(&script), plain_encoder(), Millis(0));
    enc.update(Millis(20));
    assert!(enc.ready());

    assert!(enc.update(Millis(21)));
    assert!(!enc.ready());
    assert_eq!(enc.ready_pos(), 4);
    assert_eq!(enc.time_since_change(Millis(31)), 10);
}

#[test]
fn encoder_negative_count_clamps_and_resets_counter() {
    let script = [2, -3];
    let mut enc = SizeEncoder::new(ScriptedCounter::new(&script), plain_encoder(), Millis(0));

    assert!(enc.update(Millis(1)));
    assert_eq!(enc.position(), 0);
    assert_eq!(enc.counter().writes, vec![0]);
    assert_eq!(enc.counter().value, 0);
}

#[test]
fn encoder_step_shift_divides_quarter_steps() {
    let config = EncoderConfig {
        settle_ms: 15,
        step_shift: 2,
    };
    let script = [0, 3, 4, 11, -1];
    let mut enc = SizeEncoder::new(ScriptedCounter::new(&script), config, Millis(0));

    assert!(!enc.update(Millis(1))); // 3 >> 2 = 0
    assert!(enc.update(Millis(2))); // 4 >> 2 = 1
    assert!(enc.update(Millis(3))); // 11 >> 2 = 2
    assert_eq!(enc.position(), 2);

    // -1 >> 2 is still negative.
    assert!(enc.update(Millis(4)));
    assert_eq!(enc.position(), 0);
    assert_eq!(enc.counter().writes, vec![0]);
}

#[test]
fn encoder_oversized_step_shift_reads_zero() {
    let config = EncoderConfig {
        settle_ms: 15,
        step_shift: 40,
    };
    let script = [12, 100, -7];
    let mut enc = SizeEncoder::new(ScriptedCounter::new(&script), config, Millis(0));
    assert_eq!(enc.position(), 0);

    assert!(!enc.update(Millis(1)));
    assert!(!enc.update(Millis(2)));
    assert_eq!(enc.position(), 0);
    assert!(enc.counter().writes.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// Quadrature Decoder Tests
// ═══════════════════════════════════════════════════════════════════════════

/// Feed `(a, b)` levels and sum the resulting steps.
fn decode(start: (bool, bool), levels: &[(bool, bool)]) -> i32 {
    let mut decoder = QuadratureDecoder::new(start.0, start.1);
    levels
        .iter()
        .map(|&(a, b)| i32::from(decoder.step(a, b)))
        .sum()
}

#[test]
fn quadrature_a_leading_counts_up_one_detent() {
    let cycle = [(true, false), (true, true), (false, true), (false, false)];
    assert_eq!(decode((false, false), &cycle), 4);
}

#[test]
fn quadrature_b_leading_counts_down_one_detent() {
    let cycle = [(false, true), (true, true), (true, false), (false, false)];
    assert_eq!(decode((false, false), &cycle), -4);
}

#[test]
fn quadrature_ignores_repeats_and_double_transitions() {
    let noise = [(false, false), (true, true), (true, true), (false, false)];
    assert_eq!(decode((false, false), &noise), 0);
}

#[test]
fn quadrature_bounce_cancels_out() {
    let bounce = [(true, false), (false, false), (true, false), (false, false)];
    assert_eq!(decode((false, false), &bounce), 0);
}
