use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Scientific formatting with a signed, padded exponent
    ///
    /// Works for anything implementing `LowerExp`, which is pretty much every
    /// numerical primitive.
    ///
    /// ```rust
    /// # use chemtools_utils::ValueExt;
    /// assert_eq!((-0.2567).sci(4, 2), "-2.5670e-01".to_string());
    /// assert_eq!((1.5).sci(3, 2), "1.500e+00".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let num = f!("{:.precision$e}", &self, precision = precision);
        // `LowerExp` always writes an 'e'
        let (mantissa, exp) = match num.split_once('e') {
            Some(parts) => parts,
            None => return num,
        };
        let (sign, exp) = match exp.strip_prefix('-') {
            Some(exp) => ('-', exp),
            None => ('+', exp),
        };
        f!("{mantissa}e{sign}{exp:0>exp_pad$}")
    }
}
