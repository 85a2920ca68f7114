use arcshape::api::{chain_nearest, generate_with, GenCfg, Status};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(2024);
    let target = 12;
    let generation = match generate_with(target, &GenCfg::default(), &mut rng) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    if generation.status == Status::Exhausted {
        println!(
            "exhausted after {} of {} triplets",
            generation.triplets.len(),
            target
        );
    }
    for (i, t) in chain_nearest(&generation.triplets).iter().enumerate() {
        println!(
            "{i:2}: left=({:+.4}, {:+.4}) center=({:+.4}, {:+.4}) right=({:+.4}, {:+.4}){}",
            t.left.x,
            t.left.y,
            t.center.x,
            t.center.y,
            t.right.x,
            t.right.y,
            if t.is_fallback() { "  [origin]" } else { "" }
        );
    }
}
