use num_traits::{Bounded, FromPrimitive, PrimInt};
use rand::{
    distributions::{uniform::SampleUniform, Uniform},
    thread_rng, Rng,
};

const ARRAY_LEN: usize = 5;
pub const DISTRIBUTIONS: [&dyn Fn(usize) -> Vec<i32>; ARRAY_LEN] =
    [&uniform, &sorted, &reverse, &almost_sorted, &few_distinct];
pub const NAMES: [&str; ARRAY_LEN] = [
    "uniform",
    "sorted",
    "reverse",
    "almost_sorted",
    "few_distinct",
];

pub fn uniform<T>(len: usize) -> Vec<T>
where
    T: Bounded + SampleUniform,
{
    let uniform = Uniform::new_inclusive(T::min_value(), T::max_value());
    thread_rng().sample_iter(uniform).take(len).collect()
}

/// Best case: one comparison per element.
pub fn sorted<T>(len: usize) -> Vec<T>
where
    T: PrimInt + FromPrimitive,
{
    (0..len).filter_map(T::from_usize).collect()
}

/// Worst case: every element shifts to the front.
pub fn reverse<T>(len: usize) -> Vec<T>
where
    T: PrimInt + FromPrimitive,
{
    (0..len).rev().filter_map(T::from_usize).collect()
}

/// Sorted, with about `sqrt(len)` adjacent pairs swapped.
pub fn almost_sorted<T>(len: usize) -> Vec<T>
where
    T: PrimInt + FromPrimitive,
{
    let mut rng = thread_rng();
    let prob = (len as f64).sqrt() / len as f64;
    let mut v = sorted(len);
    for i in 0..v.len().saturating_sub(1) {
        if rng.gen_bool(prob) {
            v.swap(i, i + 1);
        }
    }
    v
}

/// Many equal keys, about `sqrt(len)` distinct values.
pub fn few_distinct<T>(len: usize) -> Vec<T>
where
    T: PrimInt + FromPrimitive + SampleUniform,
{
    let root = T::from_usize((len as f64).sqrt() as usize + 1).unwrap_or_else(T::one);
    let mut rng = thread_rng();
    (0..len).map(|_| rng.gen_range(T::zero()..root)).collect()
}
