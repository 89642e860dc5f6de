//! Error types untuk operasi buffer dan cursor.
//!
//! Semua error dilaporkan secara sinkron sebagai `Err` di call site.
//! Tidak ada retry internal, tidak ada yang ditelan diam-diam, dan tidak
//! ada panic di kode library. Recovery sepenuhnya urusan caller: hindari
//! kondisi pemicunya, atau buat cursor baru setelah mutasi.

use thiserror::Error;

/// Error yang bisa muncul dari `RingBuffer` dan `Cursor`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// Buffer butuh minimal satu slot.
    #[error("capacity must be at least 1")]
    ZeroCapacity,

    /// Destination slice terlalu kecil untuk menampung semua elemen.
    #[error("destination too small: required {required} slots, available {available}")]
    DestinationTooSmall {
        /// Jumlah slot yang dibutuhkan (`offset + len`).
        required: usize,
        /// Panjang destination yang diberikan.
        available: usize,
    },

    /// Buffer bersifat append/evict-only; penghapusan elemen tidak didukung.
    #[error("removing elements is not supported")]
    RemoveNotSupported,

    /// Ada mutasi struktural (push/clear) setelah cursor dibuat.
    #[error("buffer was modified; traversal may not continue")]
    BufferMutated,

    /// Cursor dipakai pada buffer yang bukan pembuatnya.
    #[error("cursor was created by a different buffer")]
    BufferMismatch,

    /// Traversal belum mulai atau sudah selesai; tidak ada elemen current.
    #[error("traversal has either not started or already finished")]
    NoCurrentElement,
}
