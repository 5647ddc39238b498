use super::*;
use crate::error::Error;
use rand::Rng;

const NUM_RANDOM_CASES: usize = 64;

fn random_pair(len: usize) -> (NumericVector, NumericVector) {
    let mut rng = rand::thread_rng();
    let a = (0..len).map(|_| rng.gen_range(-100f64, 100f64)).collect();
    let b = (0..len).map(|_| rng.gen_range(-100f64, 100f64)).collect();
    (a, b)
}

#[test]
fn zeros_has_fixed_length() {
    let v: NumericVector = NumericVector::zeros(4);
    assert_eq!(v.len(), 4);
    assert!(v.iter().all(|&x| x == 0f64));
}

#[test]
fn element_access_reads_and_writes() {
    let mut v = vector![1.0, 2.0, 3.0];
    v[1] = 7.5;
    assert_eq!(v[1], 7.5);
    assert_eq!(v.get(2), Some(&3.0));
    assert_eq!(v.get(3), None);
    if let Some(x) = v.get_mut(0) {
        *x = -1.0;
    }
    assert_eq!(v.to_vec(), vec![-1.0, 7.5, 3.0]);
}

#[test]
#[should_panic]
fn out_of_range_index_panics() {
    let v = vector![1.0, 2.0];
    let _elem = v[2];
}

#[test]
fn add_is_elementwise() {
    for len in 0..8 {
        for _ in 0..NUM_RANDOM_CASES / 8 {
            let (a, b) = random_pair(len);
            let sum = a.add(&b).unwrap();
            assert_eq!(sum.len(), a.len());
            for i in 0..len {
                assert_eq!(sum[i], a[i] + b[i]);
            }
        }
    }
}

#[test]
fn dot_is_commutative() {
    for _ in 0..NUM_RANDOM_CASES {
        let (a, b) = random_pair(5);
        assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
    }
}

#[test]
fn dot_sums_products() {
    let a = vector![1.0, 2.0, 3.0];
    let b = vector![4.0, -5.0, 6.0];
    assert_eq!(a.dot(&b), Ok(12.0));
}

#[test]
fn dot_of_empty_vectors_is_zero() {
    let a: NumericVector = vector![];
    let b: NumericVector = NumericVector::zeros(0);
    assert_eq!(a.dot(&b), Ok(0.0));
}

#[test]
fn mismatched_lengths_are_rejected() {
    let a = vector![1.0, 2.0];
    let b = vector![1.0, 2.0, 3.0];
    let expected = Error::DimensionMismatch {
        op: "dot product",
        expected: 2,
        actual: 3,
    };
    assert_eq!(a.dot(&b), Err(expected));
    match a.add(&b) {
        Err(Error::DimensionMismatch {
            expected, actual, ..
        }) => assert_eq!((expected, actual), (2, 3)),
        other => panic!("expected a dimension mismatch, got {:?}", other),
    }
}

#[test]
fn display_uses_shortest_decimal_form() {
    assert_eq!(vector![1.0, 2.5, -3.0].to_string(), "(1, 2.5, -3)");
    assert_eq!(vector![0.125f32].to_string(), "(0.125)");
    let empty: NumericVector = vector![];
    assert_eq!(empty.to_string(), "()");
}

#[test]
fn conversions_preserve_order() {
    let from_vec = NumericVector::from(vec![3.0, 1.0, 2.0]);
    let from_slice = NumericVector::from(&[3.0, 1.0, 2.0][..]);
    let collected: NumericVector = vec![3.0, 1.0, 2.0].into_iter().collect();
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec, collected);
}

#[test]
fn map_applies_activation_to_every_element() {
    let v = vector![-2.0, 0.0, 3.0];
    assert_eq!(v.map(relu), vector![0.0, 0.0, 3.0]);
    // source is left untouched
    assert_eq!(v, vector![-2.0, 0.0, 3.0]);
}

#[test]
fn relu_clamps_negatives() {
    for &x in &[0.0, 0.5, 3.0, 1e9] {
        assert_eq!(relu(x), x);
    }
    for &x in &[-0.5, -3.0, -1e9] {
        assert_eq!(relu(x), 0.0);
    }
    assert_eq!(relu(std::f64::NAN), 0.0);
}

#[test]
fn identity_returns_input() {
    let mut rng = rand::thread_rng();
    for _ in 0..NUM_RANDOM_CASES {
        let x: f64 = rng.gen_range(-1e6, 1e6);
        assert_eq!(identity(x), x);
        assert_eq!(Activation::Identity.apply(x), x);
    }
}

#[test]
fn activation_variants_dispatch() {
    assert_eq!(Activation::Relu.apply(-1.0), 0.0);
    assert_eq!(Activation::Sigmoid.apply(0.0), 0.5);
    assert_eq!(Activation::Tanh.apply(0.0), 0.0);
    assert!((Activation::Tanh.apply(1.0f64) - 1.0f64.tanh()).abs() < 1e-12);

    fn double(x: f64) -> f64 {
        2.0 * x
    }
    let custom = Activation::from(double as fn(f64) -> f64);
    assert_eq!(custom.apply(4.0), 8.0);
    assert_eq!(custom.name(), "custom");
    assert_eq!(Activation::<f64>::default().name(), "identity");
}
