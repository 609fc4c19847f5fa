/// Rounds `x` to `digits` decimal places.
///
/// The scale factor is split in two so that very large digit counts cannot
/// overflow the intermediate power of ten.
pub fn round(x: f64, digits: u32) -> f64 {
    let (pow1, pow2) = if digits > 22 {
        ((10.0_f64).powi((digits - 22) as i32), 1e22)
    } else {
        ((10.0_f64).powi(digits as i32), 1.0)
    };

    let scaled = (x * pow1) * pow2;
    let mut nearest = scaled.round();
    if (scaled - nearest).abs() == 0.5 {
        // exact tie, resolve to even
        nearest = 2.0 * (scaled / 2.0).round();
    }

    (nearest / pow2) / pow1
}
