use seesaw_math::{mat_vec_mul, neg_vec, Mat};

#[test]
fn test_mul_known_product() {
    // [1 2; 3 4] · [5 6; 7 8] = [19 22; 43 50]
    let a = Mat::from_row_major(2, 2, vec![1, 2, 3, 4]);
    let b = Mat::from_row_major(2, 2, vec![5, 6, 7, 8]);
    let ab = a.mul(&b);
    assert_eq!(ab, Mat::from_row_major(2, 2, vec![19, 22, 43, 50]));
}

#[test]
fn test_mul_rectangular_shapes() {
    let a = Mat::from_row_major(2, 3, vec![1, 0, 2, -1, 3, 1]);
    let b = Mat::column(vec![3, 2, 1]);
    let ab = a.mul(&b);
    assert_eq!(ab.rows(), 2);
    assert_eq!(ab.cols(), 1);
    assert_eq!(ab.as_slice(), &[5, 4]);
    // Matrix-by-column and matrix-by-vector agree.
    assert_eq!(ab.as_slice(), mat_vec_mul(&a, &[3, 2, 1]).as_slice());
}

#[test]
#[should_panic(expected = "matrix product shape mismatch")]
fn test_mul_shape_mismatch_panics() {
    let a = Mat::from_row_major(2, 3, vec![0; 6]);
    let b = Mat::from_row_major(2, 2, vec![0; 4]);
    let _ = a.mul(&b);
}

#[test]
fn test_identity_is_neutral() {
    let a = Mat::from_row_major(3, 3, vec![2, -1, 0, 4, 5, -6, 7, 0, 9]);
    let i = Mat::identity(3);
    assert_eq!(a.mul(&i), a);
    assert_eq!(i.mul(&a), a);
}

#[test]
fn test_transpose_swaps_entries() {
    let a = Mat::from_row_major(2, 3, vec![1, 2, 3, 4, 5, 6]);
    let t = a.transpose();
    assert_eq!(t.rows(), 3);
    assert_eq!(t.cols(), 2);
    assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    assert_eq!(t.transpose(), a);
}

#[test]
fn test_neg_is_elementwise() {
    let a = Mat::from_row_major(2, 2, vec![1, -2, 0, 7]);
    assert_eq!(a.neg().as_slice(), &[-1, 2, 0, -7]);
    assert_eq!(neg_vec(&[3, 0, -5]), vec![-3, 0, 5]);
}

#[test]
fn test_mat_vec_mul() {
    let a = Mat::from_row_major(2, 3, vec![1, 2, 3, 0, -1, 1]);
    assert_eq!(mat_vec_mul(&a, &[1, 1, 1]), vec![6, 0]);
}

#[test]
#[should_panic(expected = "matrix-vector shape mismatch")]
fn test_mat_vec_mul_shape_mismatch_panics() {
    let a = Mat::from_row_major(2, 3, vec![0; 6]);
    let _ = mat_vec_mul(&a, &[1, 2]);
}

#[test]
fn test_empty_matrix_keeps_shape() {
    // Zero rows, three columns: the shape survives even with no data.
    let a: Mat<i64> = Mat::from_row_major(0, 3, vec![]);
    assert_eq!(a.rows(), 0);
    assert_eq!(a.cols(), 3);
}
