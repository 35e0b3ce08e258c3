use std::ops::{AddAssign, Mul};
use num::{One, Zero};

pub fn convolve<C>(x: &[C], y: &[C]) -> Vec<C>
where
    C: Clone + Zero + AddAssign<C> + Mul<C, Output=C>,
{
    if x.is_empty() || y.is_empty() {
        return vec![];
    }

    let mut out = vec![C::zero(); x.len() + y.len() - 1];
    for (i, a) in x.iter().enumerate() {
        for (j, b) in y.iter().enumerate() {
            out[i + j] += a.clone() * b.clone();
        }
    }
    out
}

// the fold starts from [1], so no lists at all is the identity
pub fn cascade<'a, C, I>(lists: I) -> Vec<C>
where
    C: 'a + Clone + Zero + One + AddAssign<C> + Mul<C, Output=C>,
    I: IntoIterator<Item=&'a [C]>,
{
    lists.into_iter()
        .fold(vec![C::one()], |acc, list| convolve(&acc, list))
}
