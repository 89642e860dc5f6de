//! Fixed-Capacity Circular Buffer dengan silent eviction.
//!
//! Buffer menampung maksimal `capacity` elemen. Push saat penuh menimpa
//! elemen tertua secara diam-diam. Satu alokasi saat konstruksi; tidak ada
//! realokasi di hot path.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::cursor::Cursor;
use crate::core::iter::{IntoIter, Iter, IterMut};
use crate::errors::RingError;

// Identitas process-unique per buffer. Cursor menyimpan id ini supaya
// tidak bisa di-replay pada buffer lain yang kebetulan punya generation sama.
static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// Circular buffer dengan kapasitas tetap.
///
/// Posisi logis `i` dalam `0..len()` dipetakan ke slot penyimpanan
/// `(start + i) % capacity`. Saat penuh, `push` menimpa slot di `start`
/// lalu menggeser `start` satu langkah; `len()` menetap di `capacity()`.
///
/// Buffer TIDAK disinkronisasi secara internal. Aturan `&`/`&mut` sudah
/// menegakkan satu penulis eksklusif dalam satu thread; lintas thread,
/// serialisasi eksternal adalah tanggung jawab caller. Generation counter
/// hanya deteksi misuse untuk cursor, bukan primitif sinkronisasi.
pub struct RingBuffer<T> {
    // Elemen live. Tumbuh sampai `capacity` lalu menetap; jumlah elemen
    // live selalu `storage.len()`, dan `start == 0` selama belum wrap.
    storage: Vec<T>,
    // Kapasitas tetap, >= 1. Tidak pernah berubah setelah konstruksi.
    capacity: usize,
    // Slot elemen tertua.
    start: usize,
    // Naik pada setiap mutasi struktural (push/clear) supaya cursor
    // yang stale ketahuan.
    generation: u64,
    // Identitas untuk validasi cursor.
    id: u64,
}

impl<T> RingBuffer<T> {
    /// Membuat buffer kosong dengan kapasitas tertentu.
    ///
    /// Alokasi hanya terjadi sekali di sini; `push` tidak pernah
    /// melakukan realokasi.
    ///
    /// # Errors
    /// `RingError::ZeroCapacity` jika `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        Ok(Self {
            storage: Vec::with_capacity(capacity),
            capacity,
            start: 0,
            generation: 0,
            id: NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed),
        })
    }

    /// Menambahkan elemen. Selalu berhasil dalam O(1), tidak pernah blocking.
    ///
    /// Saat buffer penuh, elemen tertua ditimpa dan langsung di-drop.
    /// Entry "no value" (mis. `None` pada `RingBuffer<Option<U>>`) disimpan
    /// seperti entry biasa.
    #[inline(always)]
    pub fn push(&mut self, value: T) {
        if self.storage.len() < self.capacity {
            // Belum pernah wrap: slot tulis (start + len) % capacity == len.
            debug_assert_eq!(self.start, 0);
            self.storage.push(value);
        } else {
            self.storage[self.start] = value;
            self.start = self.wrap_index(self.start, 1);
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Mengosongkan buffer tanpa mengubah kapasitas.
    ///
    /// Semua elemen di-drop. Generation tetap naik walau buffer sudah
    /// kosong, jadi semua cursor yang ada pasti ter-invalidasi.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.start = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Jumlah elemen dalam buffer.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Cek apakah buffer kosong.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Cek apakah buffer penuh (push berikutnya menimpa elemen tertua).
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.storage.len() == self.capacity
    }

    /// Kapasitas buffer.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cek apakah buffer mengandung elemen yang sama dengan `value`.
    ///
    /// Scan linear dari tertua ke terbaru, berhenti di match pertama.
    /// Entry "no value" yang tersimpan ikut dibandingkan seperti biasa,
    /// jadi query `&None` menemukan `None` yang pernah di-push.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Menyalin semua elemen (tertua dulu) ke `dst[offset..offset + len]`.
    ///
    /// Slot destination di luar rentang itu tidak disentuh, dan saat gagal
    /// destination tidak disentuh sama sekali.
    ///
    /// # Errors
    /// `RingError::DestinationTooSmall` jika `dst.len() < offset + len()`.
    pub fn copy_to(&self, dst: &mut [T], offset: usize) -> Result<(), RingError>
    where
        T: Clone,
    {
        let required = offset.saturating_add(self.storage.len());
        if dst.len() < required {
            return Err(RingError::DestinationTooSmall {
                required,
                available: dst.len(),
            });
        }
        for (slot, item) in dst[offset..required].iter_mut().zip(self.iter()) {
            slot.clone_from(item);
        }
        Ok(())
    }

    /// Mengembalikan semua elemen sebagai `Vec` baru, tertua ke terbaru.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Penghapusan elemen arbitrer TIDAK didukung.
    ///
    /// Buffer ini append/evict-only: menghapus di tengah akan merusak
    /// invariant indexing wrap-around.
    ///
    /// # Errors
    /// Selalu `RingError::RemoveNotSupported`, apa pun isi buffer.
    pub fn remove(&mut self, _value: &T) -> Result<(), RingError> {
        Err(RingError::RemoveNotSupported)
    }

    /// Akses elemen pada posisi logis (0 = tertua).
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.storage.len() {
            return None;
        }
        let slot = self.wrap_index(self.start, index as isize);
        self.storage.get(slot)
    }

    /// Elemen tertua.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Elemen terbaru (terakhir di-push).
    ///
    /// Dicari sebagai predecessor dari posisi tulis berikutnya: satu
    /// langkah mundur dengan index arithmetic negatif.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.storage.is_empty() {
            return None;
        }
        let write_pos = self.wrap_index(self.start, self.storage.len() as isize);
        self.storage.get(self.wrap_index(write_pos, -1))
    }

    /// Membuat cursor untuk traversal tertua ke terbaru.
    ///
    /// Tanpa efek samping. Cursor memotret identitas + generation saat ini;
    /// push/clear apa pun setelah ini membuat operasi cursor gagal. Beberapa
    /// cursor boleh hidup berdampingan di atas buffer yang tidak dimutasi.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.id, self.generation)
    }

    /// Iterasi borrow dari tertua ke terbaru.
    ///
    /// Validitas dijamin statis oleh aturan borrow; untuk traversal yang
    /// boleh diselingi mutasi (dan gagal dengan error), pakai [`cursor`].
    ///
    /// [`cursor`]: RingBuffer::cursor
    pub fn iter(&self) -> Iter<'_, T> {
        let (newer, older) = self.storage.split_at(self.start);
        Iter::new(older, newer)
    }

    /// Iterasi borrow mutable, urutan sama dengan [`iter`].
    ///
    /// Mutasi elemen bukan mutasi struktural: generation tidak naik dan
    /// cursor yang ada tetap valid.
    ///
    /// [`iter`]: RingBuffer::iter
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (newer, older) = self.storage.split_at_mut(self.start);
        IterMut::new(older, newer)
    }

    /// Index arithmetic wrap-around dua arah.
    ///
    /// Steps maju: `(base + steps) % capacity`. Steps mundur diselesaikan
    /// dengan Euclidean remainder supaya hasil selalu jatuh di
    /// `[0, capacity)`, tidak pernah negatif.
    #[inline(always)]
    fn wrap_index(&self, base: usize, steps: isize) -> usize {
        if steps < 0 {
            (base as isize + steps).rem_euclid(self.capacity as isize) as usize
        } else {
            (base + steps as usize) % self.capacity
        }
    }

    #[inline(always)]
    pub(crate) fn buffer_id(&self) -> u64 {
        self.id
    }

    #[inline(always)]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    /// Clone menghasilkan buffer independen dengan identitas baru;
    /// cursor dari buffer asal tidak valid untuk hasil clone-nya.
    fn clone(&self) -> Self {
        // Vec::clone hanya mengalokasikan sepanjang len; hasil clone harus
        // memegang jaminan bebas-realokasi yang sama dengan buffer baru,
        // jadi penyimpanannya dialokasikan penuh sampai kapasitas.
        let mut storage = Vec::with_capacity(self.capacity);
        storage.extend_from_slice(&self.storage);
        Self {
            storage,
            capacity: self.capacity,
            start: self.start,
            generation: self.generation,
            id: NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingBuffer<T> {
    /// Kesetaraan urutan logis; kapasitas dan layout fisik tidak ikut
    /// dibandingkan.
    fn eq(&self, other: &Self) -> bool {
        self.storage.len() == other.storage.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T> Extend<T> for RingBuffer<T> {
    /// Setiap elemen adalah satu `push`; eviction tetap berlaku per elemen.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Mengonsumsi buffer menjadi iterator urutan logis.
    fn into_iter(mut self) -> IntoIter<T> {
        // Putar supaya elemen tertua ada di depan, lalu serahkan ke Vec.
        let start = self.start;
        self.storage.rotate_left(start);
        IntoIter::new(self.storage.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
