//! A variant-family exploration harness for the Keccak-f[1600] permutation.
//!
//! For each of Keccak's four round steps (θ, ρπ, χ, ι) this crate provides
//! seven drop-in variant implementations (see [`theta_v0`]..[`theta_v6`] and
//! the `rhopi_v*`/`chi_v*`/`iota_v*` families). Given a message, binary
//! blob, or key, the schedule generator derives a deterministic per-round
//! plan choosing, for each of the 24 rounds, the θ/ρπ ordering and the
//! variant run for each step, see [`generate_schedule_from_plaintext`],
//! [`generate_schedule_from_binary`], and [`generate_schedule_from_key`].
//!
//! Seed derivation (domain-separated [`sha256`] into a 32-byte seed, expanded
//! via [`AesCtrPrng`]) and SHA-3-style message absorption
//! ([`apply_sha3_padding`], [`init_state_from_message`]) are exposed for
//! callers that want to build their own driver around the permutation
//! variants rather than use the bundled schedule types directly.
//!
//! This crate makes no cryptographic soundness claim about the variants: it
//! is a research and cryptanalysis exploration harness, not a hash function.
#![forbid(unsafe_code)]

mod aes;
mod chi;
mod error;
mod iota;
mod padding;
mod report;
mod rhopi;
mod schedule;
mod sha256;
mod state;
mod theta;

pub use aes::{aes_ctr_init, aes_ctr_next, AesCtrPrng};
pub use chi::{chi_v0, chi_v1, chi_v2, chi_v3, chi_v4, chi_v5, chi_v6};
pub use error::Error;
pub use iota::{iota_v0, iota_v1, iota_v2, iota_v3, iota_v4, iota_v5, iota_v6};
pub use padding::{apply_sha3_padding, init_state_from_message, init_state_from_plaintext};
pub use rhopi::{rhopi_v0, rhopi_v1, rhopi_v2, rhopi_v3, rhopi_v4, rhopi_v5, rhopi_v6};
pub use schedule::{
    generate_schedule_from_binary, generate_schedule_from_key, generate_schedule_from_plaintext,
    KeccakSchedule, Mode, RoundSchedule, Step,
};
pub use sha256::sha256;
pub use state::State;
pub use theta::{theta_v0, theta_v1, theta_v2, theta_v3, theta_v4, theta_v5, theta_v6};
