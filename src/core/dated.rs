use std::collections::VecDeque;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;

use crate::core::primitives::datetime_to_unix_seconds;

/// A value with an associated point in time.
///
/// Only the timestamp is read by the navigator; the rest of the item is
/// opaque payload owned by the host.
pub trait Dated {
    fn date(&self) -> DateTime<Utc>;
}

impl Dated for DateTime<Utc> {
    fn date(&self) -> DateTime<Utc> {
        *self
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn date(&self) -> DateTime<Utc> {
        (**self).date()
    }
}

/// Random-access, length-known, ordered collection of dated items.
///
/// Implementations must provide O(1) indexed access so nearest-item lookup
/// stays logarithmic. `date_at` is only called with `index < len()`; an
/// out-of-range index is an invariant violation and may panic the same way
/// slice indexing does.
pub trait DatedSequence {
    fn len(&self) -> usize;

    fn date_at(&self, index: usize) -> DateTime<Utc>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Timestamp at `index` as fractional unix seconds.
    fn time_at(&self, index: usize) -> f64 {
        datetime_to_unix_seconds(self.date_at(index))
    }
}

impl<T: Dated> DatedSequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        self[index].date()
    }
}

impl<T: Dated> DatedSequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        self[index].date()
    }
}

impl<T: Dated> DatedSequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        self[index].date()
    }
}

impl<T: Dated, S: BuildHasher> DatedSequence for IndexSet<T, S> {
    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        self[index].date()
    }
}

impl<Q: DatedSequence + ?Sized> DatedSequence for &Q {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        (**self).date_at(index)
    }
}

impl<Q: DatedSequence + ?Sized> DatedSequence for Arc<Q> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        (**self).date_at(index)
    }
}

impl<Q: DatedSequence + ?Sized> DatedSequence for Rc<Q> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn date_at(&self, index: usize) -> DateTime<Utc> {
        (**self).date_at(index)
    }
}
