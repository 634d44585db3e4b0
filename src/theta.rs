//! θ step variants.
//!
//! All seven variants compute a column-parity vector `C[0..4]`, derive a
//! diffusion vector `D[0..4]`, and XOR `D[x]` into every lane of column `x`,
//! except `theta_v2`, which additionally folds in row parities.
#![allow(non_snake_case)]
use crate::state::{rol64, State};

fn apply_column_diffusion(a: &mut State, d: [u64; 5]) {
    for i in 0..25 {
        a[i] ^= d[i % 5];
    }
}

fn column_parity(a: &State) -> [u64; 5] {
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    c
}

/// Canonical θ.
pub fn theta_v0(a: &mut State) {
    let C = column_parity(a);
    let mut D = [0u64; 5];
    for x in 0..5 {
        let (l, r) = ((x + 4) % 5, (x + 1) % 5);
        D[x] = C[l] ^ rol64(C[r], 1);
    }
    apply_column_diffusion(a, D);
}

/// v8-weighted θ: column parity weights lanes `y=1,2,4` with extra rotation.
pub fn theta_v1(a: &mut State) {
    let mut C = [0u64; 5];
    for x in 0..5 {
        C[x] = a[x] ^ rol64(a[x + 5], 7) ^ rol64(a[x + 10], 13) ^ a[x + 15] ^ rol64(a[x + 20], 19);
    }
    let mut D = [0u64; 5];
    for x in 0..5 {
        let (l, r) = ((x + 4) % 5, (x + 1) % 5);
        D[x] = C[l] ^ rol64(C[r], 1);
    }
    apply_column_diffusion(a, D);
}

/// v18-rowcol θ: folds row parity into the column diffusion term.
///
/// The geometric meaning of mixing a row-parity term into a column-indexed
/// diffusion is unclear; reproduced exactly as specified rather than fixed.
pub fn theta_v2(a: &mut State) {
    let C = column_parity(a);
    let mut R = [0u64; 5];
    for y in 0..5 {
        R[y] = a[y * 5] ^ a[y * 5 + 1] ^ a[y * 5 + 2] ^ a[y * 5 + 3] ^ a[y * 5 + 4];
    }
    for x in 0..5 {
        let dx = C[(x + 4) % 5] ^ rol64(C[(x + 1) % 5], 1);
        for y in 0..5 {
            a[x + 5 * y] ^= dx ^ rol64(R[(y + 1) % 5], 1);
        }
    }
}

/// v1-rot2 θ: like `theta_v0` but rotates the right-neighbor parity by 2.
pub fn theta_v3(a: &mut State) {
    let C = column_parity(a);
    let mut D = [0u64; 5];
    for x in 0..5 {
        let (l, r) = ((x + 4) % 5, (x + 1) % 5);
        D[x] = C[l] ^ rol64(C[r], 2);
    }
    apply_column_diffusion(a, D);
}

/// v2-rot3 θ: like `theta_v0` but rotates the right-neighbor parity by 3.
pub fn theta_v4(a: &mut State) {
    let C = column_parity(a);
    let mut D = [0u64; 5];
    for x in 0..5 {
        let (l, r) = ((x + 4) % 5, (x + 1) % 5);
        D[x] = C[l] ^ rol64(C[r], 3);
    }
    apply_column_diffusion(a, D);
}

/// v3-dual-rot θ: rotates both the left- and right-neighbor parity by 1.
pub fn theta_v5(a: &mut State) {
    let C = column_parity(a);
    let mut D = [0u64; 5];
    for x in 0..5 {
        let (l, r) = ((x + 4) % 5, (x + 1) % 5);
        D[x] = rol64(C[l], 1) ^ rol64(C[r], 1);
    }
    apply_column_diffusion(a, D);
}

/// v7-enhanced θ: weighted column parity (as `theta_v1`) plus a third,
/// further-rotated term.
pub fn theta_v6(a: &mut State) {
    let mut C = [0u64; 5];
    for x in 0..5 {
        C[x] = a[x] ^ rol64(a[x + 5], 7) ^ rol64(a[x + 10], 13) ^ a[x + 15] ^ rol64(a[x + 20], 19);
    }
    let mut D = [0u64; 5];
    for x in 0..5 {
        let (l, r) = ((x + 4) % 5, (x + 1) % 5);
        D[x] = C[l] ^ rol64(C[r], 1) ^ rol64(C[(x + 2) % 5], 5);
    }
    apply_column_diffusion(a, D);
}
