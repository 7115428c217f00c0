mod test_signals;

use approx::assert_abs_diff_eq;
use pcm_bandpass::signal_processing::BANDPASS_5KHZ_44100;
use pcm_bandpass::{Coefficients, FilterError, StreamingFir};
use test_signals::{naive_convolve, run_in_chunks};

fn preset_engine(max_chunk: usize) -> StreamingFir {
    StreamingFir::new(Coefficients::bandpass_5khz(), max_chunk).unwrap()
}

fn test_signal(len: usize) -> Vec<f64> {
    // Deterministic, non-periodic content with both signs.
    (0..len)
        .map(|i| ((i * 7919) % 2001) as f64 - 1000.0)
        .collect()
}

#[test]
fn test_chunking_invariance() {
    let signal = test_signal(500);

    let mut fir = preset_engine(signal.len());
    let whole = run_in_chunks(&mut fir, &signal, &[signal.len()]);

    let plans: [&[usize]; 4] = [&[1], &[7], &[50], &[3, 1, 62, 63, 64, 100]];
    for sizes in plans {
        let max = *sizes.iter().max().unwrap();
        let mut fir = preset_engine(max);
        let chunked = run_in_chunks(&mut fir, &signal, sizes);
        assert_eq!(chunked, whole, "chunk sizes {:?} changed output", sizes);
    }
}

#[test]
fn test_matches_whole_signal_convolution() {
    let signal = test_signal(300);
    let mut fir = preset_engine(100);
    let output = run_in_chunks(&mut fir, &signal, &[100]);
    let expected = naive_convolve(&BANDPASS_5KHZ_44100, &signal);

    assert_eq!(output.len(), expected.len());
    for (got, want) in output.iter().zip(&expected) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
    }
}

#[test]
fn test_zero_input_gives_zero_output() {
    let mut fir = preset_engine(100);
    let output = fir.process_chunk(&[0.0; 100]).unwrap();
    assert!(output.iter().all(|&y| y == 0.0));
}

#[test]
fn test_impulse_response_is_coefficients() {
    let mut fir = preset_engine(100);
    let mut impulse = vec![0.0; 100];
    impulse[0] = 1.0;

    let output = fir.process_chunk(&impulse).unwrap();
    assert_eq!(&output[..63], &BANDPASS_5KHZ_44100[..]);
    assert!(output[63..].iter().all(|&y| y == 0.0));
}

#[test]
fn test_impulse_split_across_chunks() {
    let mut fir = preset_engine(10);
    let mut impulse = vec![0.0; 80];
    impulse[0] = 1.0;

    let output = run_in_chunks(&mut fir, &impulse, &[10]);
    assert_eq!(&output[..63], &BANDPASS_5KHZ_44100[..]);
    assert!(output[63..].iter().all(|&y| y == 0.0));
}

#[test]
fn test_reset_is_idempotent() {
    let signal = test_signal(230);
    let mut fir = preset_engine(40);

    fir.reset();
    let first = run_in_chunks(&mut fir, &signal, &[40, 13]);
    fir.reset();
    let second = run_in_chunks(&mut fir, &signal, &[40, 13]);

    assert_eq!(first, second);
}

#[test]
fn test_sawtooth_in_three_sample_chunks() {
    let signal = test_signals::sawtooth(10);
    let mut fir = preset_engine(3);

    let chunked = run_in_chunks(&mut fir, &signal, &[3]);
    let expected = naive_convolve(&BANDPASS_5KHZ_44100, &signal);

    let mut single = preset_engine(10);
    let whole = single.process_chunk(&signal).unwrap();

    assert_eq!(chunked, whole);
    for (got, want) in chunked.iter().zip(&expected) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
    }
}

#[test]
fn test_independent_engines_do_not_share_history() {
    let mut a = preset_engine(50);
    let mut b = preset_engine(50);
    let loud = vec![1000.0; 50];
    let quiet = test_signal(50);

    a.process_chunk(&loud).unwrap();
    let from_b = b.process_chunk(&quiet).unwrap();

    let mut fresh = preset_engine(50);
    assert_eq!(from_b, fresh.process_chunk(&quiet).unwrap());
}

#[test]
fn test_oversized_chunk_is_an_error() {
    let mut fir = preset_engine(100);
    let err = fir.process_chunk(&[0.0; 101]).unwrap_err();
    assert!(matches!(err, FilterError::ChunkTooLong { len: 101, max: 100 }));
}
