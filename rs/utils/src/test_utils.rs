use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Generate a random vector with a given dimension, values in [0, 1)
pub fn generate_random_vector(dimension: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut vector = vec![];
    for _ in 0..dimension {
        vector.push(rng.gen::<f64>());
    }
    vector
}

// Generate `count` random 0/1 vectors, each bit set with probability `density`
pub fn generate_random_binary_vectors(
    count: usize,
    dimension: usize,
    density: f64,
    seed: u64,
) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (0..dimension)
                .map(|_| if rng.gen_bool(density) { 1.0 } else { 0.0 })
                .collect()
        })
        .collect()
}
