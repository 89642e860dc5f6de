//! Cursor untuk traversal eksplisit dengan deteksi mutasi.
//!
//! Cursor tidak meminjam buffer. Dia hanya token kecil berisi identitas
//! buffer, generation saat dibuat, dan jumlah langkah. Setiap operasi
//! menerima `&RingBuffer<T>` lagi dan memvalidasi ulang token sebelum
//! menyentuh elemen, jadi mutasi di tengah traversal terdeteksi saat
//! runtime sebagai error, bukan sebagai hasil yang korup.

use crate::core::ring_buffer::RingBuffer;
use crate::errors::RingError;

/// Posisi traversal di atas satu [`RingBuffer`], tertua ke terbaru.
///
/// Mulai SEBELUM elemen pertama: panggil [`advance`] dulu, baru
/// [`current`]. Semua operasi memvalidasi identitas buffer lalu
/// generation; cursor yang stale selalu gagal dengan error, tidak
/// pernah mengembalikan elemen basi.
///
/// Validasi ini deteksi misuse dalam satu alur eksekusi, bukan
/// sinkronisasi antar thread.
///
/// [`advance`]: Cursor::advance
/// [`current`]: Cursor::current
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    // Identitas buffer asal, dicek sebelum generation.
    buffer_id: u64,
    // Generation buffer saat cursor dibuat.
    generation: u64,
    // Jumlah langkah yang sudah diambil; 0 = belum mulai,
    // len + 1 = sudah habis.
    steps: usize,
}

impl Cursor {
    pub(crate) fn new(buffer_id: u64, generation: u64) -> Self {
        Self {
            buffer_id,
            generation,
            steps: 0,
        }
    }

    /// Identitas dulu, baru generation: cursor dari buffer lain harus
    /// dilaporkan sebagai mismatch walau generation-nya kebetulan cocok.
    fn validate<T>(&self, buffer: &RingBuffer<T>) -> Result<(), RingError> {
        if self.buffer_id != buffer.buffer_id() {
            return Err(RingError::BufferMismatch);
        }
        if self.generation != buffer.generation() {
            return Err(RingError::BufferMutated);
        }
        Ok(())
    }

    /// Maju satu elemen.
    ///
    /// `Ok(true)` jika sekarang berdiri di elemen valid, `Ok(false)` jika
    /// traversal sudah habis. Setelah habis, panggilan berikutnya tetap
    /// `Ok(false)` selama buffer tidak dimutasi.
    ///
    /// # Errors
    /// `RingError::BufferMismatch` untuk buffer yang salah,
    /// `RingError::BufferMutated` jika ada push/clear sejak cursor dibuat.
    pub fn advance<T>(&mut self, buffer: &RingBuffer<T>) -> Result<bool, RingError> {
        self.validate(buffer)?;
        self.steps = self.steps.saturating_add(1);
        Ok(self.steps <= buffer.len())
    }

    /// Elemen di posisi cursor saat ini.
    ///
    /// # Errors
    /// `RingError::BufferMismatch` / `RingError::BufferMutated` seperti
    /// [`advance`], atau `RingError::NoCurrentElement` jika traversal
    /// belum dimulai atau sudah habis.
    ///
    /// [`advance`]: Cursor::advance
    pub fn current<'buf, T>(&self, buffer: &'buf RingBuffer<T>) -> Result<&'buf T, RingError> {
        self.validate(buffer)?;
        if self.steps == 0 || self.steps > buffer.len() {
            return Err(RingError::NoCurrentElement);
        }
        buffer.get(self.steps - 1).ok_or(RingError::NoCurrentElement)
    }

    /// Kembali ke posisi sebelum elemen pertama.
    ///
    /// Hanya boleh pada buffer yang belum dimutasi; cursor stale tidak
    /// bisa "dihidupkan lagi" lewat reset.
    ///
    /// # Errors
    /// `RingError::BufferMismatch` / `RingError::BufferMutated`.
    pub fn reset<T>(&mut self, buffer: &RingBuffer<T>) -> Result<(), RingError> {
        self.validate(buffer)?;
        self.steps = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: std::ops::RangeInclusive<i32>) -> RingBuffer<i32> {
        let mut buffer = RingBuffer::new(capacity).unwrap();
        for n in values {
            buffer.push(n);
        }
        buffer
    }

    #[test]
    fn test_cursor_walks_oldest_to_newest() {
        let buffer = filled(3, 1..=4);
        let mut cursor = buffer.cursor();

        let mut seen = Vec::new();
        while cursor.advance(&buffer).unwrap() {
            seen.push(*cursor.current(&buffer).unwrap());
        }
        assert_eq!(seen, vec![2, 3, 4]);
    }

    #[test]
    fn test_current_before_first_advance_fails() {
        let buffer = filled(3, 1..=3);
        let cursor = buffer.cursor();

        assert_eq!(cursor.current(&buffer), Err(RingError::NoCurrentElement));
    }

    #[test]
    fn test_current_after_exhaustion_fails() {
        let buffer = filled(3, 1..=3);
        let mut cursor = buffer.cursor();

        while cursor.advance(&buffer).unwrap() {}
        assert_eq!(cursor.current(&buffer), Err(RingError::NoCurrentElement));
    }

    #[test]
    fn test_advance_on_empty_buffer() {
        let buffer: RingBuffer<i32> = RingBuffer::new(3).unwrap();
        let mut cursor = buffer.cursor();

        assert_eq!(cursor.advance(&buffer), Ok(false));
        assert_eq!(cursor.current(&buffer), Err(RingError::NoCurrentElement));
    }

    #[test]
    fn test_advance_stays_exhausted() {
        let buffer = filled(3, 1..=2);
        let mut cursor = buffer.cursor();

        assert_eq!(cursor.advance(&buffer), Ok(true));
        assert_eq!(cursor.advance(&buffer), Ok(true));
        assert_eq!(cursor.advance(&buffer), Ok(false));
        assert_eq!(cursor.advance(&buffer), Ok(false));
        assert_eq!(cursor.advance(&buffer), Ok(false));
    }

    #[test]
    fn test_push_invalidates_cursor() {
        let mut buffer = filled(3, 1..=3);
        let mut cursor = buffer.cursor();

        buffer.push(4);
        assert_eq!(cursor.advance(&buffer), Err(RingError::BufferMutated));
        assert_eq!(cursor.current(&buffer), Err(RingError::BufferMutated));
    }

    #[test]
    fn test_clear_invalidates_cursor_even_when_empty() {
        let mut buffer: RingBuffer<i32> = RingBuffer::new(3).unwrap();
        let mut cursor = buffer.cursor();

        buffer.clear();
        assert_eq!(cursor.advance(&buffer), Err(RingError::BufferMutated));
    }

    #[test]
    fn test_exactly_one_error_when_mutating_mid_walk() {
        let mut buffer = filled(3, 1..=3);
        let mut cursor = buffer.cursor();

        let mut visited = 0;
        let mut errors = 0;
        loop {
            match cursor.advance(&buffer) {
                Ok(true) => {
                    visited += 1;
                    if visited == 2 {
                        buffer.push(99);
                    }
                }
                Ok(false) => break,
                Err(RingError::BufferMutated) => {
                    errors += 1;
                    break;
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(visited, 2);
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_reset_restarts_traversal() {
        let buffer = filled(5, 1..=3);
        let mut cursor = buffer.cursor();

        assert!(cursor.advance(&buffer).unwrap());
        assert!(cursor.advance(&buffer).unwrap());
        assert_eq!(cursor.current(&buffer), Ok(&2));

        cursor.reset(&buffer).unwrap();
        assert_eq!(cursor.current(&buffer), Err(RingError::NoCurrentElement));
        assert!(cursor.advance(&buffer).unwrap());
        assert_eq!(cursor.current(&buffer), Ok(&1));
    }

    #[test]
    fn test_reset_after_exhaustion() {
        let buffer = filled(3, 1..=3);
        let mut cursor = buffer.cursor();

        while cursor.advance(&buffer).unwrap() {}
        cursor.reset(&buffer).unwrap();

        assert!(cursor.advance(&buffer).unwrap());
        assert_eq!(cursor.current(&buffer), Ok(&1));
    }

    #[test]
    fn test_reset_on_stale_cursor_fails() {
        let mut buffer = filled(3, 1..=3);
        let mut cursor = buffer.cursor();

        buffer.push(4);
        assert_eq!(cursor.reset(&buffer), Err(RingError::BufferMutated));
    }

    #[test]
    fn test_cursor_from_other_buffer_rejected() {
        let first = filled(3, 1..=3);
        let second = filled(3, 1..=3);

        // Konten identik; identitas yang menentukan.
        let mut cursor = first.cursor();
        assert_eq!(cursor.advance(&second), Err(RingError::BufferMismatch));
        assert_eq!(cursor.current(&second), Err(RingError::BufferMismatch));
        assert_eq!(cursor.reset(&second), Err(RingError::BufferMismatch));

        // Di buffer asalnya tetap jalan.
        assert_eq!(cursor.advance(&first), Ok(true));
    }

    #[test]
    fn test_cursor_rejected_on_clone() {
        let original = filled(3, 1..=3);
        let copy = original.clone();

        let mut cursor = original.cursor();
        assert_eq!(cursor.advance(&copy), Err(RingError::BufferMismatch));
    }

    #[test]
    fn test_multiple_cursors_coexist() {
        let buffer = filled(3, 1..=3);
        let mut fast = buffer.cursor();
        let mut slow = buffer.cursor();

        fast.advance(&buffer).unwrap();
        fast.advance(&buffer).unwrap();
        slow.advance(&buffer).unwrap();

        assert_eq!(fast.current(&buffer), Ok(&2));
        assert_eq!(slow.current(&buffer), Ok(&1));
    }

    #[test]
    fn test_element_mutation_keeps_cursor_valid() {
        let mut buffer = filled(3, 1..=3);
        let mut cursor = buffer.cursor();

        // iter_mut mengubah elemen, bukan struktur; cursor tetap valid.
        for value in buffer.iter_mut() {
            *value *= 10;
        }

        assert!(cursor.advance(&buffer).unwrap());
        assert_eq!(cursor.current(&buffer), Ok(&10));
    }
}
