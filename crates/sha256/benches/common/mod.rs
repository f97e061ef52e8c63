use core::hint::black_box;

/// Deterministic splitmix-style generator for benchmark payloads.
///
/// Not cryptographically secure; it only keeps the inputs from being
/// all-zero or otherwise unrealistically structured.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
  *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
  let mut z = *state;
  z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
  z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
  z ^ (z >> 31)
}

pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut state = seed ^ (len as u64);
  let mut out = vec![0u8; len];
  for b in &mut out {
    *b = (splitmix64(&mut state) >> 56) as u8;
  }
  // Keep the compiler from assuming anything about the contents.
  black_box(&out);
  out
}

pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  // Padding edge cases plus a spread of realistic payload sizes.
  let sizes = [0usize, 1, 55, 56, 64, 65, 128, 1024, 16 * 1024, 1024 * 1024];
  sizes
    .into_iter()
    .map(|len| (len, pseudo_random_bytes(len, 0x00C0_FFEE_D00D_5EED)))
    .collect()
}

pub fn set_throughput(group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>, len: usize) {
  if len == 0 {
    group.throughput(criterion::Throughput::Elements(1));
  } else {
    group.throughput(criterion::Throughput::Bytes(len as u64));
  }
}
