//! Boolean and integer helpers

use std::ops::Range;

pub trait BoolExt {
    /// Flip the value in place
    fn toggle(&mut self);
}

impl BoolExt for bool {
    fn toggle(&mut self) {
        *self = !*self;
    }
}

pub trait IntExt: Sized {
    /// `0..self`; empty when `self` is zero or negative
    fn range(self) -> Range<Self>;

    /// Run `action` `self` times
    fn times<F: FnMut()>(self, action: F);
}

macro_rules! impl_int_ext {
    ($($t:ty),*) => {
        $(
            impl IntExt for $t {
                fn range(self) -> Range<Self> {
                    0..self
                }

                fn times<F: FnMut()>(self, mut action: F) {
                    for _ in self.range() {
                        action();
                    }
                }
            }
        )*
    };
}

impl_int_ext!(i32, i64, u32, u64, usize);
