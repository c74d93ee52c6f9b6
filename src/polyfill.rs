#![allow(unused_imports)]
#![cfg_attr(not(test), allow(dead_code))]

#[allow(unstable_name_collisions)]
mod definitions {
    use cfg_if::cfg_if;

    cfg_if! {
        if #[cfg(feature = "exact_size_is_empty")] {
            pub trait ExactSizeIsEmpty: ExactSizeIterator {}
        } else {
            pub trait ExactSizeIsEmpty: ExactSizeIterator {
                fn is_empty(&self) -> bool {
                    self.len() == 0
                }
            }

            impl<I: ExactSizeIterator> ExactSizeIsEmpty for I {}
        }
    }
}

#[cfg(test)]
pub(crate) use definitions::ExactSizeIsEmpty as _;
