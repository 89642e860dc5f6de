//! Core module: Circular Buffer dengan eviction dan cursor tervalidasi.
//!
//! Prinsip desain:
//! - Bounded: kapasitas tetap, push saat penuh menimpa elemen tertua
//! - Single-Allocation: penyimpanan dialokasikan sekali saat konstruksi
//! - Fail-Loud: cursor mendeteksi mutasi lewat generation, tidak pernah
//!   mengembalikan elemen basi

mod cursor;
mod iter;
mod ring_buffer;

pub use cursor::Cursor;
pub use iter::{IntoIter, Iter, IterMut};
pub use ring_buffer::RingBuffer;
