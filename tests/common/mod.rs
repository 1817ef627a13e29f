#![allow(dead_code)]

use blockforge::{Instance, Layout};

/// Builder for small instances to keep tests readable.
pub struct InstanceBuilder {
    calls: Vec<Vec<f64>>,
    sizes: Vec<f64>,
}

impl InstanceBuilder {
    /// `n` blocks of size 1 and no calls.
    pub fn new(n: usize) -> Self {
        Self {
            calls: vec![vec![0.0; n]; n],
            sizes: vec![1.0; n],
        }
    }

    pub fn call(mut self, from: usize, to: usize, count: f64) -> Self {
        self.calls[from][to] = count;
        self
    }

    pub fn size(mut self, block: usize, size: f64) -> Self {
        self.sizes[block] = size;
        self
    }

    pub fn build(self) -> Instance {
        Instance::new(self.calls, self.sizes).expect("test instance must be valid")
    }
}

/// The 3-block cycle 0 -> 1 -> 2 -> 0 with unit sizes.
pub fn cycle3() -> Instance {
    InstanceBuilder::new(3)
        .call(0, 1, 1.0)
        .call(1, 2, 1.0)
        .call(2, 0, 1.0)
        .build()
}

/// A 5-block instance with uneven sizes and asymmetric calls.
pub fn uneven5() -> Instance {
    InstanceBuilder::new(5)
        .call(0, 1, 40.0)
        .call(1, 0, 2.0)
        .call(0, 3, 7.0)
        .call(1, 2, 15.0)
        .call(2, 4, 9.0)
        .call(3, 4, 30.0)
        .call(4, 1, 5.0)
        .call(2, 2, 100.0)
        .size(0, 3.0)
        .size(1, 12.0)
        .size(2, 5.0)
        .size(3, 1.0)
        .size(4, 8.0)
        .build()
}

pub fn layout(order: &[usize]) -> Layout {
    Layout::new(order.to_vec(), order.len()).expect("test layout must be valid")
}

/// Direct O(n^3) evaluation, summing every span block by block.
pub fn naive_fitness(inst: &Instance, order: &[usize]) -> f64 {
    let n = order.len();
    let mut f = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let a = order[i];
            let b = order[j];
            let span: f64 = order[i..=j].iter().map(|&k| inst.size(k)).sum();
            f += (inst.calls(a, b) + inst.calls(b, a)) * (inst.total_size() - span);
        }
    }
    f
}
