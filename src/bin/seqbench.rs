//!
//! Measurement harness: build a container to a target size by repeated
//! push_back, then time one insert-near-middle or pop_front call.
//!
//! The container is treated purely as an opaque sequence behind the
//! `Store` contract, so the same driver runs against both stores.
//!
use clap::Parser;
use dualseq::utils::timer_us;
use dualseq::{ArrayStore, LinkedStore, Sequence, Store};
use itertools::Itertools;
use log::info;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    /// Container sizes to measure
    #[clap(long, multiple_values = true)]
    sizes: Vec<usize>,
    /// Number of measurement rounds
    #[clap(short, long, default_value_t = 1)]
    repeat: usize,
    /// Seed of the element generator
    #[clap(long, default_value = "0")]
    seed: u64,
}

fn fill<S: Store<Item = u64>>(n: usize, seed: u64) -> Sequence<S> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut seq = Sequence::new();
    for _ in 0..n {
        seq.push_back(rng.gen());
    }
    seq
}

/// Time a single pop_front on a container of n elements.
fn time_pop_front<S: Store<Item = u64>>(n: usize, seed: u64) -> u128 {
    let mut seq = fill::<S>(n, seed);
    let (ret, t) = timer_us(|| seq.pop_front());
    ret.expect("non-empty container");
    t
}

/// Time a single insert just before the middle element. Finding the
/// middle position is not part of the measured section.
fn time_insert_middle<S: Store<Item = u64>>(n: usize, seed: u64) -> u128 {
    let mut seq = fill::<S>(n, seed);
    let middle = {
        let mut c = seq.cursor_begin();
        c.seek((n / 2) as isize).expect("middle position");
        c.position()
    };
    let (ret, t) = timer_us(|| seq.insert(middle, 24));
    ret.expect("valid insert position");
    t
}

fn run<S: Store<Item = u64>>(label: &str, sizes: &[usize], repeat: usize, seed: u64) {
    for &n in sizes {
        for round in 0..repeat {
            info!("{} n={} round={}", label, n, round);
            let t_insert = time_insert_middle::<S>(n, seed);
            let t_pop = time_pop_front::<S>(n, seed);
            println!(
                "{}\tn={}\tinsert_middle={}us\tpop_front={}us",
                label, n, t_insert, t_pop
            );
        }
    }
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    let sizes = if opts.sizes.is_empty() {
        vec![100, 5_000, 50_000, 500_000]
    } else {
        opts.sizes
    };
    info!(
        "measuring sizes [{}] repeat={} seed={}",
        sizes.iter().join(", "),
        opts.repeat,
        opts.seed
    );
    run::<ArrayStore<u64>>("array", &sizes, opts.repeat, opts.seed);
    run::<LinkedStore<u64>>("linked", &sizes, opts.repeat, opts.seed);
}
