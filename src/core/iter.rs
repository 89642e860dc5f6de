//! Iterator untuk circular buffer.
//!
//! Isi buffer secara fisik adalah dua slice berurutan: bagian lama mulai
//! dari `start` sampai akhir penyimpanan, lalu bagian baru dari awal
//! penyimpanan. Iterator di sini menjahit keduanya jadi satu urutan logis
//! tertua ke terbaru, tanpa menyalin elemen.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

/// Iterator borrow, tertua ke terbaru.
pub struct Iter<'a, T> {
    older: slice::Iter<'a, T>,
    newer: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(older: &'a [T], newer: &'a [T]) -> Self {
        Self {
            older: older.iter(),
            newer: newer.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.older.next().or_else(|| self.newer.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.older.len() + self.newer.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.newer.next_back().or_else(|| self.older.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            older: self.older.clone(),
            newer: self.newer.clone(),
        }
    }
}

/// Iterator borrow mutable, urutan sama dengan [`Iter`].
pub struct IterMut<'a, T> {
    older: slice::IterMut<'a, T>,
    newer: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(older: &'a mut [T], newer: &'a mut [T]) -> Self {
        Self {
            older: older.iter_mut(),
            newer: newer.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.older.next().or_else(|| self.newer.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.older.len() + self.newer.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.newer.next_back().or_else(|| self.older.next_back())
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Iterator pemilik dari [`RingBuffer::into_iter`].
///
/// Penyimpanan sudah dirotasi waktu buffer dikonsumsi, jadi di sini cukup
/// delegasi ke iterator `Vec` biasa.
///
/// [`RingBuffer::into_iter`]: crate::core::RingBuffer#impl-IntoIterator-for-RingBuffer<T>
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: vec::IntoIter<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
