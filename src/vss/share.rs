//! Share data model.

use std::sync::Arc;

use crate::backend::VssBackend;

/// One participant's share of a dealt secret.
///
/// A share carries the evaluations of both dealing polynomials at the
/// participant's index, plus a handle to the dealing's public commitment
/// vector. All `n` shares of one dealing reference the *same* vector
/// through an [`Arc`]: it is read-only after the dealing and sharing it
/// avoids duplicating the `t`-length vector `n` times.
///
/// # Fields
///
/// - `index`: participant index, `1..=n`
/// - `value1`: `f(index)` where `f(0)` is the secret
/// - `value2`: blinding evaluation at `index`
/// - `commitments`: the dealing's Pedersen commitment vector, length `t`
#[derive(Clone, Debug)]
pub struct Share<B: VssBackend> {
    pub index: usize,
    pub value1: B::Scalar,
    pub value2: B::Scalar,
    pub commitments: Arc<Vec<B::Point>>,
}

impl<B: VssBackend> Share<B> {
    /// The threshold of the dealing this share belongs to.
    pub fn threshold(&self) -> usize {
        self.commitments.len()
    }
}

impl<B: VssBackend> PartialEq for Share<B> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.value1 == other.value1
            && self.value2 == other.value2
            && *self.commitments == *other.commitments
    }
}

impl<B: VssBackend> Eq for Share<B> {}
