//! Gelang: Fixed-Capacity Circular Buffer dengan silent eviction.
//!
//! Buffer berkapasitas tetap yang menimpa elemen tertua saat penuh.
//! Cocok untuk history jendela-geser: log terakhir, sample metrik,
//! event N terbaru.
//!
//! Prinsip desain:
//! - Push selalu berhasil dan O(1), tidak pernah blocking
//! - Satu alokasi saat konstruksi, tidak ada realokasi di hot path
//! - Traversal eksplisit lewat cursor yang gagal dengan error saat
//!   buffer dimutasi di tengah jalan
//!
//! # Contoh
//!
//! ```
//! use gelang::core::RingBuffer;
//!
//! let mut history = RingBuffer::new(3).unwrap();
//! for n in 1..=5 {
//!     history.push(n);
//! }
//!
//! // Hanya tiga elemen terakhir yang bertahan.
//! assert_eq!(history.to_vec(), vec![3, 4, 5]);
//!
//! // Cursor mendeteksi mutasi di tengah traversal.
//! let mut cursor = history.cursor();
//! assert!(cursor.advance(&history).unwrap());
//! history.push(6);
//! assert!(cursor.advance(&history).is_err());
//! ```

pub mod core;
pub mod errors;
