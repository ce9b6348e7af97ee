pub trait FloatExt: Sized {
    /// `self` if it is finite, `default` otherwise.
    fn finite_or(self, default: Self) -> Self;
}

impl FloatExt for f64 {
    fn finite_or(self, default: Self) -> Self {
        if self.is_finite() {
            self
        } else {
            default
        }
    }
}
