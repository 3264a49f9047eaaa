use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::Cell;
use std::sync::Mutex;

static RNG: Mutex<Option<ChaCha20Rng>> = Mutex::new(None);
thread_local! {
	pub static UUID_SEED: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Seed the id generator before the first id is minted. Without a seed a fixed fallback is used,
/// which keeps ids unique within the process but repeatable across runs (useful for tests).
pub fn set_uuid_seed(random_seed: u64) {
	UUID_SEED.with(|seed| seed.set(Some(random_seed)))
}

/// Mint an id that will not collide with any other id minted by this process.
pub fn generate_uuid() -> u64 {
	let Ok(mut lock) = RNG.lock() else { panic!("UUID mutex poisoned") };
	if lock.is_none() {
		UUID_SEED.with(|seed| {
			let random_seed = seed.get().unwrap_or(42);
			*lock = Some(ChaCha20Rng::seed_from_u64(random_seed));
		})
	}
	lock.as_mut().map(ChaCha20Rng::next_u64).expect("UUID mutex poisoned")
}
