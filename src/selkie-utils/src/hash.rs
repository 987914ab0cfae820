//! String hashing for derived variant tags.

/// Implementation of the [DJB2] hash function.
///
/// This is used to derive compact, stable tags from variant
/// names. The function is not injective over arbitrary inputs;
/// collisions within one variant set are caught when the
/// registry for that set is built.
///
/// [DJB2]: https://theartincode.stanis.me/008-djb2/
#[inline]
pub const fn djb2(input: &str) -> u32 {
    let bytes = input.as_bytes();
    let mut state: u32 = 5381;

    let mut i = 0;
    while i < bytes.len() {
        // state * 33 + bytes[i]
        state = (state << 5)
            .wrapping_add(state)
            .wrapping_add(bytes[i] as u32);

        i += 1;
    }

    state
}
