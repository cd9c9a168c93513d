use rand::Rng;

/// Overwrite `buf` with uniform `[0, 1)` samples.
pub fn fill_uniform<R: Rng + ?Sized>(buf: &mut [f64], rng: &mut R) {
    for v in buf.iter_mut() {
        *v = rng.r#gen::<f64>();
    }
}

/// A vector of `len` uniform `[0, 1)` samples.
pub fn random_vector<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f64> {
    let mut v = vec![0.0; len];
    fill_uniform(&mut v, rng);
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let v = random_vector(1000, &mut rng);
        assert!(v.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn same_seed_same_values() {
        let a = random_vector(16, &mut StdRng::seed_from_u64(42));
        let b = random_vector(16, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
