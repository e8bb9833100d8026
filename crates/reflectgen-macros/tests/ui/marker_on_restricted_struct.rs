use reflectgen_macros::reflect;

#[reflect]
pub(crate) struct Counter {
    pub hits: u64,
}

fn main() {
    let counter = Counter { hits: 1 };
    assert_eq!(counter.hits, 1);
}
