use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use streamrng::rng::{Key, StreamRng, generate, generate_bytes};

const SEED: [u8; 32] = [0x42u8; 32];

#[test]
fn test_words_follow_blocks_in_order() {
    let key = Key::from(SEED);
    let mut rng = StreamRng::new(key.clone(), 9);

    let mut expected = Vec::new();
    expected.extend_from_slice(&generate(&key, 9, 0));
    expected.extend_from_slice(&generate(&key, 9, 1));

    let actual: Vec<u32> = (0..32).map(|_| rng.next_u32()).collect();

    assert_eq!(actual, expected);
    assert_eq!(rng.block_position(), 2);
    assert_eq!(rng.word_position(), 32);
}

#[test]
fn test_fill_bytes_from_block_boundary_equals_generate_bytes() {
    let key = Key::from(SEED);
    let mut rng = StreamRng::new(key.clone(), 3);
    rng.seek(100);

    let mut out = [0u8; 128];
    rng.fill_bytes(&mut out);

    assert_eq!(&out[..64], &generate_bytes(&key, 3, 100)[..]);
    assert_eq!(&out[64..], &generate_bytes(&key, 3, 101)[..]);
}

#[test]
fn test_fill_bytes_discards_partial_words() {
    let key = Key::from(SEED);
    let mut rng = StreamRng::new(key.clone(), 0);

    let mut out = [0u8; 5];
    rng.fill_bytes(&mut out);

    // 5 bytes consume two whole words
    assert_eq!(rng.word_position(), 2);
    assert_eq!(rng.next_u32(), generate(&key, 0, 0)[2]);
}

#[test]
fn test_next_u64_is_low_word_first() {
    let key = Key::from(SEED);
    let block = generate(&key, 1, 0);
    let mut rng = StreamRng::new(key, 1);

    let value = rng.next_u64();

    assert_eq!(value, (u64::from(block[1]) << 32) | u64::from(block[0]));
}

#[test]
fn test_seek_is_random_access() {
    let key = Key::from(SEED);
    let mut sequential = StreamRng::new(key.clone(), 11);
    for _ in 0..(16 * 5 + 3) {
        sequential.next_u32();
    }

    let mut jumped = StreamRng::new(key.clone(), 11);
    jumped.set_word_position(16 * 5 + 3);

    assert_eq!(sequential.word_position(), jumped.word_position());
    assert_eq!(sequential.next_u64(), jumped.next_u64());

    let mut resumed = StreamRng::with_position(key, 11, 5, 5);
    assert_eq!(resumed.next_u32(), jumped.next_u32());
}

#[test]
fn test_seek_resets_word_offset() {
    let key = Key::from(SEED);
    let mut rng = StreamRng::new(key.clone(), 2);
    rng.next_u32();

    rng.seek(7);

    assert_eq!(rng.word_position(), 7 * 16);
    assert_eq!(rng.next_u32(), generate(&key, 2, 7)[0]);
}

#[test]
fn test_block_position_wraps_at_end_of_stream() {
    let key = Key::from(SEED);
    let mut rng = StreamRng::new(key.clone(), 4);
    rng.seek(u64::MAX);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert_eq!(rng.block_position(), 0);
    assert_eq!(rng.next_u32(), generate(&key, 4, 0)[0]);

    rng.set_word_position((1u128 << 68) + 17);
    assert_eq!(rng.word_position(), 17);
}

#[test]
fn test_streams_are_independent() {
    let key = Key::from(SEED);
    let mut a = StreamRng::new(key.clone(), 1);
    let mut b = StreamRng::new(key, 2);

    let mut out_a = [0u8; 256];
    let mut out_b = [0u8; 256];
    a.fill_bytes(&mut out_a);
    b.fill_bytes(&mut out_b);

    assert_ne!(out_a, out_b);
}

#[test]
fn test_matches_rand_chacha_stream() {
    let mut reference = ChaCha8Rng::from_seed(SEED);
    reference.set_stream(0xC0FFEE);
    reference.set_word_pos(1000);

    let mut rng = StreamRng::new(Key::from(SEED), 0xC0FFEE);
    rng.set_word_position(1000);

    let mut a = [0u8; 301];
    let mut b = [0u8; 301];
    reference.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);
    assert_eq!(a, b);

    for _ in 0..100 {
        assert_eq!(reference.next_u64(), rng.next_u64());
    }
    assert_eq!(reference.get_word_pos(), rng.word_position());
}

#[test]
fn test_next_u64_across_block_boundary_matches_rand_chacha() {
    let mut reference = ChaCha8Rng::from_seed(SEED);
    reference.set_stream(17);
    reference.set_word_pos(15);

    let mut rng = StreamRng::new(Key::from(SEED), 17);
    rng.set_word_position(15);

    let key = Key::from(SEED);
    let expected = (u64::from(generate(&key, 17, 1)[0]) << 32) | u64::from(generate(&key, 17, 0)[15]);

    let value = rng.next_u64();
    assert_eq!(value, expected);
    assert_eq!(value, reference.next_u64());
    assert_eq!(rng.word_position(), 17);
    assert_eq!(reference.get_word_pos(), 17);
}

#[test]
fn test_debug_shows_position_only() {
    let rng = StreamRng::with_position(Key::from(SEED), 5, 6, 7);
    let rendered = format!("{rng:?}");

    assert!(rendered.contains("stream_id: 5"));
    assert!(rendered.contains("block: 6"));
    assert!(!rendered.contains("key"));
}
