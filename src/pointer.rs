//! In-place mutation through exclusive references

/// Add 10 to the referenced integer
pub fn add_ten(value: &mut i64) {
    *value += 10;
}

/// Double every element in place, keeping order and length
pub fn double_all(values: &mut [i64]) {
    for value in values.iter_mut() {
        *value *= 2;
    }
}
