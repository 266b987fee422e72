//! Random Identifiers

use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Short lowercase base-36 identifier, e.g. `"k3x9a0q"`
///
/// Not a secret: it only separates anonymous players sharing a machine.
pub fn random_base36(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect()
}
