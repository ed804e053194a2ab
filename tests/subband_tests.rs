//! Subband analysis filterbank tests
//!
//! Checks the lane/half history implementation against a direct-form
//! polyphase filterbank, plus the state cycling and determinism guarantees
//! the encoder loop relies on.

use proptest::prelude::*;
use sha2::{Digest, Sha256};
use std::f64::consts::PI;
use twolame_rs::subband::{AnalysisWindow, CoefficientMatrix, FilterbankState, SubbandAnalyzer};
use twolame_rs::tables::ENWINDOW;
use twolame_rs::types::{SAMPLES_PER_FRAME, SBLIMIT, SCALE_BLOCK, SCALE_BLOCK_COUNT};

/// Subband output of the first and twentieth hop for [`lcg_pcm`] input,
/// computed with the nine-decimal window
const FIRST_HOP: [f64; SBLIMIT] = [
    1.8042776253592837e-06, -6.035823094110182e-07, -9.71935095248046e-06, -1.6440005740692086e-05,
    -6.554028024160066e-06, 1.0174786656236173e-05, 6.7993949180067975e-06, -1.6579571185253567e-05,
    -2.427399218615397e-05, 2.5616284931901175e-06, 3.1642843095339886e-05, 2.3577394085310183e-05,
    -9.693136226987285e-06, -2.3057434664115474e-05, -4.616643891091652e-06, 1.2040391749714843e-05,
    3.0756852870077416e-06, -1.303913288433198e-05, -1.0743188847437978e-05, 3.561060838898563e-06,
    8.234164057746213e-06, 2.628833631022918e-06, 2.730647396248408e-06, 1.0816942505828458e-05,
    1.2602475674683789e-05, 2.250568770909527e-06, -8.940684580398934e-06, -1.079981197381062e-05,
    -6.677913376841377e-06, -4.190669441629266e-06, -4.628593515057069e-06, -5.444511235650112e-06,
];

const TWENTIETH_HOP: [f64; SBLIMIT] = [
    0.1428233109908935, 0.05360116236529307, -0.00711585688945425, 0.1183651019439925,
    -0.10198507324756662, 0.12390242230095289, 0.02712627980890029, -0.09215540674769462,
    0.08064087915955699, -0.031088866735645752, -0.036838360499861576, -0.08806407059118336,
    0.08813790293937367, -0.08787511100502562, 0.1503864600391026, 0.03458195432380342,
    0.027132878797033466, -0.003934567920996251, -0.28950143904873016, -0.12568596744972643,
    -0.06856476323609471, -0.03554039986934305, -0.07025088535220153, -0.10625088322039523,
    0.07930636193337517, 0.097523853461923, -0.18103810757210098, 0.02577743398769613,
    -0.06440151456168608, 0.19045074049326527, -0.08009459352243332, -0.14319150094709274,
];

/// 16-bit PCM from a fixed linear congruential generator
fn lcg_pcm(len: usize) -> Vec<i16> {
    let mut seed = 0x0246_8aceu32;
    (0..len)
        .map(|_| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345) & 0x7fff_ffff;
            ((seed >> 15) & 0xffff) as u16 as i16
        })
        .collect()
}

/// Straightforward polyphase analysis: shift, window, matrix over 64 terms
struct DirectFilterbank {
    x: [f64; 512],
}

impl DirectFilterbank {
    fn new() -> Self {
        Self { x: [0.0; 512] }
    }

    fn analyze(&mut self, samples: &[f64; SBLIMIT]) -> [f64; SBLIMIT] {
        self.x.copy_within(0..480, 32);
        for i in 0..SBLIMIT {
            self.x[i] = samples[SBLIMIT - 1 - i];
        }

        let mut y = [0.0; 64];
        for (i, out) in y.iter_mut().enumerate() {
            for j in 0..8 {
                *out += ENWINDOW[i + 64 * j] * self.x[i + 64 * j];
            }
        }

        let mut s = [0.0; SBLIMIT];
        for (i, out) in s.iter_mut().enumerate() {
            for (k, &yk) in y.iter().enumerate() {
                let angle = (2 * i + 1) as f64 * (k as f64 - 16.0) * PI / 64.0;
                *out += angle.cos() * yk;
            }
        }
        s
    }
}

fn to_blocks(samples: &[f64]) -> Vec<[f64; SBLIMIT]> {
    samples
        .chunks_exact(SBLIMIT)
        .map(|chunk| {
            let mut block = [0.0; SBLIMIT];
            block.copy_from_slice(chunk);
            block
        })
        .collect()
}

fn fingerprint(state: &mut FilterbankState, blocks: &[[f64; SBLIMIT]]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    for block in blocks {
        for value in state.analyze(block) {
            hasher.update(value.to_bits().to_le_bytes());
        }
    }
    hasher.finalize().to_vec()
}

fn sine_blocks(band: usize, hops: usize, amplitude: f64) -> Vec<[f64; SBLIMIT]> {
    let freq = (2 * band + 1) as f64 / 128.0;
    let samples: Vec<f64> = (0..hops * SBLIMIT)
        .map(|n| amplitude * (2.0 * PI * freq * n as f64).sin())
        .collect();
    to_blocks(&samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn setup() {
        INIT.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });
    }

    #[test]
    fn test_fresh_state() {
        setup();
        let state = FilterbankState::new();
        assert_eq!(state.lane_offset(), 0);
        assert_eq!(state.half_selector(), 0);
        assert!(state.is_silent());
    }

    #[test]
    fn test_window_table_values() {
        setup();
        assert_eq!(ENWINDOW[0], 0.0);
        assert_eq!(ENWINDOW[1], -0.000000477);
        assert_eq!(ENWINDOW[7], -0.000000954);
        assert_eq!(ENWINDOW[256], 0.035780907);
        assert_eq!(ENWINDOW[511], 0.000000477);
        assert_eq!(ENWINDOW.iter().filter(|&&c| c == 0.0).count(), 1);

        for i in 1..256 {
            if i % 64 == 0 {
                assert_eq!(ENWINDOW[512 - i], ENWINDOW[i], "C[{}]", i);
            } else {
                assert_eq!(ENWINDOW[512 - i], -ENWINDOW[i], "C[{}]", i);
            }
        }
    }

    #[test]
    fn test_golden_vectors() {
        setup();
        let pcm = lcg_pcm(SBLIMIT * 20);
        assert_eq!(pcm[..4], [16208i16, 18765, -20781, -32375]);

        let mut analyzer = SubbandAnalyzer::new(1).unwrap();
        let mut outputs = Vec::new();
        for block in pcm.chunks_exact(SBLIMIT) {
            outputs.push(analyzer.filter_block(0, block).unwrap());
        }

        for (hop, expected) in [(0, &FIRST_HOP), (19, &TWENTIETH_HOP)] {
            for sb in 0..SBLIMIT {
                let actual = outputs[hop][sb];
                assert!(
                    (actual - expected[sb]).abs() <= 1e-12 * expected[sb].abs().max(1e-3),
                    "hop {} subband {}: {} vs {}",
                    hop,
                    sb,
                    actual,
                    expected[sb]
                );
            }
        }
    }

    #[test]
    fn test_matches_direct_form() {
        setup();
        let mut state = FilterbankState::new();
        let mut direct = DirectFilterbank::new();

        // Deterministic pseudo-random input, several full history turnovers
        let mut seed = 0x1234_5678u32;
        for _ in 0..48 {
            let mut block = [0.0; SBLIMIT];
            for sample in block.iter_mut() {
                seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                *sample = (seed >> 8) as f64 / (1u32 << 23) as f64 - 1.0;
            }
            let fast = state.analyze(&block);
            let reference = direct.analyze(&block);
            for sb in 0..SBLIMIT {
                assert!(
                    (fast[sb] - reference[sb]).abs() < 1e-7,
                    "subband {} differs: {} vs {}",
                    sb,
                    fast[sb],
                    reference[sb]
                );
            }
        }
    }

    #[test]
    fn test_state_cycling() {
        setup();
        let mut state = FilterbankState::new();
        let mut halves = Vec::new();
        let mut offsets = Vec::new();
        for _ in 0..32 {
            state.analyze(&[0.0; SBLIMIT]);
            halves.push(state.half_selector());
            offsets.push(state.lane_offset());
        }

        // half_selector has period 2
        for pair in halves.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        // lane_offset steps back by one every second call
        assert_eq!(&offsets[..6], &[7, 7, 6, 6, 5, 5]);
        // and returns to its start after 16 calls
        assert_eq!(offsets[15], 0);
        assert_eq!(offsets[16..], offsets[..16]);
        assert_eq!(state.lane_offset(), 0);
        assert_eq!(state.half_selector(), 0);
    }

    #[test]
    fn test_zero_input_flushes_history() {
        setup();
        let mut state = FilterbankState::new();
        for block in sine_blocks(3, 20, 0.8) {
            state.analyze(&block);
        }
        assert!(!state.is_silent());

        let mut last = [1.0; SBLIMIT];
        for call in 1..=16 {
            last = state.analyze(&[0.0; SBLIMIT]);
            if call < 16 {
                assert!(!state.is_silent(), "history cleared too early at call {}", call);
            }
        }
        assert!(state.is_silent());
        assert!(last.iter().all(|&v| v == 0.0));

        // and stays zero
        assert!(state.analyze(&[0.0; SBLIMIT]).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_sine_lands_in_its_subband() {
        setup();
        for band in [0usize, 5, 17, 30] {
            let mut state = FilterbankState::new();
            let mut energy = [0.0; SBLIMIT];
            for (hop, block) in sine_blocks(band, 48, 0.5).iter().enumerate() {
                let out = state.analyze(block);
                if hop >= 16 {
                    for (e, v) in energy.iter_mut().zip(out) {
                        *e += v * v;
                    }
                }
            }
            let total: f64 = energy.iter().sum();
            assert!(
                energy[band] > 0.99 * total,
                "band {} holds only {} of {}",
                band,
                energy[band],
                total
            );
        }
    }

    #[test]
    fn test_fingerprints_are_reproducible() {
        setup();
        let blocks = sine_blocks(7, 64, 0.3);
        let first = fingerprint(&mut FilterbankState::new(), &blocks);
        let second = fingerprint(&mut FilterbankState::new(), &blocks);
        assert_eq!(first, second);

        let other = fingerprint(&mut FilterbankState::new(), &sine_blocks(8, 64, 0.3));
        assert_ne!(first, other);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        setup();
        let mut state = FilterbankState::new();
        for block in sine_blocks(2, 5, 0.9) {
            state.analyze(&block);
        }
        state.reset();
        assert_eq!(state, FilterbankState::new());
    }

    #[test]
    fn test_coefficient_matrix_properties() {
        setup();
        let first = CoefficientMatrix::new();
        let second = CoefficientMatrix::new();
        assert_eq!(first, second);
        assert_eq!(&first, CoefficientMatrix::shared());

        for row in 0..16 {
            for column in 0..SBLIMIT {
                let value = first.get(row, column);
                assert!((-1.0..=1.0).contains(&value));
                let exact = ((2 * row + 1) * column) as f64 * PI / 64.0;
                assert!((value - exact.cos()).abs() <= 0.5e-9 + 1e-15);
                // nine decimals exactly
                let scaled = value * 1e9;
                assert!((scaled - scaled.round()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_explicit_window_matches_shared() {
        setup();
        let window = AnalysisWindow::new(ENWINDOW);
        let matrix = CoefficientMatrix::new();
        let mut shared = FilterbankState::new();
        let mut explicit = FilterbankState::new();
        for block in sine_blocks(11, 20, 0.6) {
            assert_eq!(
                shared.analyze(&block),
                explicit.analyze_with(&window, &matrix, &block)
            );
        }
    }

    #[test]
    fn test_analyzer_frame_layout() {
        setup();
        let mut analyzer = SubbandAnalyzer::new(2).unwrap();
        let left: Vec<i16> = (0..SAMPLES_PER_FRAME)
            .map(|n| ((n as f64 * 0.05).sin() * 12000.0) as i16)
            .collect();
        let right: Vec<i16> = left.iter().map(|&s| s / 2).collect();
        let frame = analyzer.filter_frame(&[left.clone(), right]).unwrap();

        assert_eq!(frame.len(), 2);

        // Channel 0 must match a standalone state fed the same blocks
        let mut reference = FilterbankState::new();
        for block in 0..SCALE_BLOCK_COUNT {
            for slot in 0..SCALE_BLOCK {
                let start = (block * SCALE_BLOCK + slot) * SBLIMIT;
                let scaled = twolame_rs::pcm_utils::scale_block(&left[start..start + SBLIMIT])
                    .unwrap();
                assert_eq!(frame[0][block][slot], reference.analyze(&scaled));
            }
        }
    }

    #[test]
    fn test_analyzer_interleaved_matches_planar() {
        setup();
        let left: Vec<i16> = (0..SAMPLES_PER_FRAME).map(|n| (n % 200) as i16 * 50).collect();
        let right: Vec<i16> = (0..SAMPLES_PER_FRAME).map(|n| -((n % 90) as i16) * 80).collect();
        let interleaved: Vec<i16> = left
            .iter()
            .zip(&right)
            .flat_map(|(&l, &r)| [l, r])
            .collect();

        let mut planar = SubbandAnalyzer::new(2).unwrap();
        let mut packed = SubbandAnalyzer::new(2).unwrap();
        let a = planar.filter_frame(&[left, right]).unwrap();
        let b = packed.filter_frame_interleaved(&interleaved).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_analyzer_single_buffer_planar_matches_split() {
        setup();
        let left: Vec<i16> = (0..SAMPLES_PER_FRAME).map(|n| (n as i16 % 321) * 40).collect();
        let right: Vec<i16> = (0..SAMPLES_PER_FRAME).map(|n| 7000 - (n as i16 % 77) * 90).collect();
        let joined: Vec<i16> = left.iter().chain(&right).copied().collect();

        let mut split = SubbandAnalyzer::new(2).unwrap();
        let mut single = SubbandAnalyzer::new(2).unwrap();
        let a = split.filter_frame(&[left, right]).unwrap();
        let b = single.filter_frame_planar(&joined).unwrap();
        assert_eq!(a, b);

        assert!(single.filter_frame_planar(&joined[..SAMPLES_PER_FRAME]).is_err());
    }

    #[test]
    fn test_analyzer_rejects_short_frame() {
        setup();
        let mut analyzer = SubbandAnalyzer::new(1).unwrap();
        assert!(analyzer.filter_frame(&[vec![0; 1000]]).is_err());
        assert!(analyzer.filter_frame_interleaved(&[0; 2304]).is_err());
        // A rejected frame leaves the state untouched
        assert_eq!(analyzer.state(0), Some(&FilterbankState::new()));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 32,
            failure_persistence: None,
            ..ProptestConfig::default()
        })]

        #[test]
        fn test_independent_states_agree(samples in prop::collection::vec(-1.0f64..1.0, SBLIMIT * 24)) {
            let blocks = to_blocks(&samples);
            let mut a = FilterbankState::new();
            let mut b = FilterbankState::new();
            for block in &blocks {
                let out_a = a.analyze(block);
                let out_b = b.analyze(block);
                for (x, y) in out_a.iter().zip(out_b.iter()) {
                    prop_assert_eq!(x.to_bits(), y.to_bits());
                }
            }
        }

        #[test]
        fn test_linear_in_input(samples in prop::collection::vec(-0.5f64..0.5, SBLIMIT * 8)) {
            let blocks = to_blocks(&samples);
            let mut plain = FilterbankState::new();
            let mut doubled = FilterbankState::new();
            for block in &blocks {
                let mut twice = *block;
                twice.iter_mut().for_each(|v| *v *= 2.0);
                let out = plain.analyze(block);
                let out2 = doubled.analyze(&twice);
                for (x, y) in out.iter().zip(out2.iter()) {
                    prop_assert!((2.0 * x - y).abs() < 1e-12);
                }
            }
        }
    }
}
