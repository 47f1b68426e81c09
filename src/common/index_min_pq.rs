use std::cmp::Ordering;

use thiserror::Error;

/// A total order over priority queue keys.
///
/// Implemented for [`NaturalOrder`] and for any closure
/// `Fn(&K, &K) -> Ordering`.
pub trait Compare<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K, F> Compare<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self)(a, b)
    }
}

/// Orders keys by their [`PartialOrd`] implementation. Incomparable keys are
/// considered equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<K: PartialOrd> Compare<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// The error encountered during an [`IndexMinPq`] operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PqError {
    /// The index is already associated with a key.
    #[error("index {0} is already in the priority queue")]
    DuplicateIndex(usize),

    /// The index is not associated with any key.
    #[error("index {0} is not in the priority queue")]
    IndexNotFound(usize),

    /// The queue is empty.
    #[error("priority queue underflow")]
    Underflow,

    /// The index does not fit the capacity given at creation.
    #[error("index {index} is out of bounds for capacity {capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },
}

/// Indexed minimum priority queue.
///
/// Associates keys with client indices in `0..capacity` and supports
/// changing the key of an index already in the queue. Implemented as a binary
/// heap of indices together with its inverse permutation, so that every
/// operation but [`contains`](IndexMinPq::contains) and
/// [`key_of`](IndexMinPq::key_of) runs in logarithmic time; those two are
/// constant.
///
/// # Examples
///
/// ```
/// use algraf::common::IndexMinPq;
///
/// let mut pq = IndexMinPq::new(4);
/// pq.insert(0, 5.0).unwrap();
/// pq.insert(1, 3.0).unwrap();
/// pq.insert(2, 4.0).unwrap();
///
/// pq.decrease_key(0, 1.0).unwrap();
///
/// assert_eq!(pq.del_min(), Ok(0));
/// assert_eq!(pq.del_min(), Ok(1));
/// assert_eq!(pq.del_min(), Ok(2));
/// assert!(pq.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct IndexMinPq<K, C = NaturalOrder> {
    // Binary heap of client indices, 1-based. Position 0 is a placeholder.
    pq: Vec<usize>,
    // Inverse of `pq`: `qp[pq[k]] == Some(k)`, `None` for absent indices.
    qp: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
    cmp: C,
}

impl<K: PartialOrd> IndexMinPq<K, NaturalOrder> {
    pub fn new(capacity: usize) -> Self {
        Self::with_comparator(capacity, NaturalOrder)
    }
}

impl<K, C: Compare<K>> IndexMinPq<K, C> {
    pub fn with_comparator(capacity: usize, cmp: C) -> Self {
        let mut pq = Vec::with_capacity(capacity + 1);
        pq.push(0);

        Self {
            pq,
            qp: vec![None; capacity],
            keys: (0..capacity).map(|_| None).collect(),
            cmp,
        }
    }

    pub fn capacity(&self) -> usize {
        self.qp.len()
    }

    pub fn len(&self) -> usize {
        self.pq.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `index` is associated with a key. Out of bounds
    /// indices are never contained.
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.qp.get(index), Some(Some(_)))
    }

    pub fn insert(&mut self, index: usize, key: K) -> Result<(), PqError> {
        self.validate(index)?;

        if self.contains(index) {
            return Err(PqError::DuplicateIndex(index));
        }

        self.push(index, key);
        Ok(())
    }

    /// Returns the index associated with the minimum key.
    pub fn min_index(&self) -> Result<usize, PqError> {
        self.pq.get(1).copied().ok_or(PqError::Underflow)
    }

    pub fn min_key(&self) -> Result<&K, PqError> {
        let index = self.min_index()?;
        self.keys[index].as_ref().ok_or(PqError::Underflow)
    }

    /// Removes the minimum key and returns the index associated with it.
    pub fn del_min(&mut self) -> Result<usize, PqError> {
        let min = self.min_index()?;
        let last = self.len();

        self.exchange(1, last);
        self.pq.pop();
        self.sink(1);

        self.qp[min] = None;
        self.keys[min] = None;

        Ok(min)
    }

    pub fn key_of(&self, index: usize) -> Result<&K, PqError> {
        self.validate(index)?;
        self.keys[index]
            .as_ref()
            .ok_or(PqError::IndexNotFound(index))
    }

    /// Changes the key associated with `index`, in either direction.
    pub fn change_key(&mut self, index: usize, key: K) -> Result<(), PqError> {
        self.validate(index)?;
        let position = self.qp[index].ok_or(PqError::IndexNotFound(index))?;

        self.keys[index] = Some(key);
        self.repair(position);
        Ok(())
    }

    /// Changes the key associated with `index` to a smaller one.
    ///
    /// The heap is repaired in both directions, so a key that is in fact
    /// larger is handled correctly too.
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<(), PqError> {
        self.change_key(index, key)
    }

    /// Removes `index` from the queue and returns its key.
    pub fn delete(&mut self, index: usize) -> Result<K, PqError> {
        self.validate(index)?;
        let position = self.qp[index].ok_or(PqError::IndexNotFound(index))?;
        let last = self.len();

        self.exchange(position, last);
        self.pq.pop();

        if position < last {
            self.repair(position);
        }

        self.qp[index] = None;
        self.keys[index].take().ok_or(PqError::IndexNotFound(index))
    }

    /// Inserts `index` with `key`, or changes its key if already present.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the capacity.
    pub fn upsert(&mut self, index: usize, key: K) {
        match self.qp[index] {
            Some(position) => {
                self.keys[index] = Some(key);
                self.repair(position);
            }
            None => self.push(index, key),
        }
    }

    fn validate(&self, index: usize) -> Result<(), PqError> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(PqError::IndexOutOfBounds {
                index,
                capacity: self.capacity(),
            })
        }
    }

    fn push(&mut self, index: usize, key: K) {
        let position = self.pq.len();

        self.pq.push(index);
        self.qp[index] = Some(position);
        self.keys[index] = Some(key);
        self.swim(position);
    }

    // The new key may have moved either way relative to its parent and
    // children. At most one of the two passes moves the element.
    fn repair(&mut self, position: usize) {
        let position = self.swim(position);
        self.sink(position);
    }

    fn swim(&mut self, mut k: usize) -> usize {
        while k > 1 && self.greater(k / 2, k) {
            self.exchange(k, k / 2);
            k /= 2;
        }
        k
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.len();

        while 2 * k <= n {
            let mut j = 2 * k;
            if j < n && self.greater(j, j + 1) {
                j += 1;
            }

            if !self.greater(k, j) {
                break;
            }

            self.exchange(k, j);
            k = j;
        }
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.pq.swap(i, j);
        self.qp[self.pq[i]] = Some(i);
        self.qp[self.pq[j]] = Some(j);
    }

    fn greater(&self, i: usize, j: usize) -> bool {
        match (&self.keys[self.pq[i]], &self.keys[self.pq[j]]) {
            (Some(a), Some(b)) => self.cmp.compare(a, b) == Ordering::Greater,
            _ => false,
        }
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        for k in 1..=self.len() {
            assert_eq!(self.qp[self.pq[k]], Some(k), "qp is not inverse of pq");
            assert!(self.keys[self.pq[k]].is_some(), "heap entry without key");

            if k > 1 {
                assert!(!self.greater(k / 2, k), "heap order violated at {k}");
            }
        }

        let present = self.qp.iter().filter(|position| position.is_some()).count();
        assert_eq!(present, self.len(), "absent index has a heap position");
    }
}
