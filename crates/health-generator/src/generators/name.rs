//! Person name generator.

use crate::generators::sample::pick;
use crate::pools::{DataPools, NameStyle};
use health_core::Gender;
use rand::Rng;

/// Build a full name from the pools, using the given-name pool of `gender`.
pub fn generate_name<R: Rng>(rng: &mut R, pools: &DataPools, gender: Gender) -> String {
    let given_pool = match gender {
        Gender::Male => &pools.male_given_names,
        Gender::Female => &pools.female_given_names,
    };
    let surname = pick(rng, &pools.surnames);

    match pools.name_style {
        NameStyle::FamilyFirst { max_given_parts } => {
            let parts = rng.random_range(1..=max_given_parts.max(1));
            let given: String = (0..parts).map(|_| pick(rng, given_pool)).collect();
            format!("{surname}{given}")
        }
        NameStyle::GivenFirst => format!("{} {surname}", pick(rng, given_pool)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_family_first_name() {
        let mut rng = StdRng::seed_from_u64(42);
        let pools = DataPools::zh_tw();

        for _ in 0..50 {
            let name = generate_name(&mut rng, &pools, Gender::Female);
            let chars: Vec<char> = name.chars().collect();
            // Surname plus one or two given characters
            assert!((2..=3).contains(&chars.len()), "unexpected name {name}");
            assert!(pools.surnames.contains(&chars[0].to_string()));
            for c in &chars[1..] {
                assert!(pools.female_given_names.contains(&c.to_string()));
            }
        }
    }

    #[test]
    fn test_given_first_name() {
        let mut rng = StdRng::seed_from_u64(42);
        let pools = DataPools::en_us();

        let name = generate_name(&mut rng, &pools, Gender::Male);
        let (given, surname) = name.split_once(' ').unwrap();
        assert!(pools.male_given_names.contains(&given.to_string()));
        assert!(pools.surnames.contains(&surname.to_string()));
    }
}
