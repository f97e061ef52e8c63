#![no_main]

use libfuzzer_sys::fuzz_target;
use sha256::pad;

fuzz_target!(|data: &[u8]| {
  let padded = pad::pad(data);

  // Length framing invariants.
  assert_eq!(padded.len() % 64, 0);
  assert!(padded.len() >= data.len() + 9);
  assert_eq!(&padded[..data.len()], data);
  assert_eq!(padded[data.len()], 0x80);

  let trailer: [u8; 8] = padded[padded.len() - 8..].try_into().unwrap();
  assert_eq!(u64::from_be_bytes(trailer), (data.len() as u64) * 8);
});
