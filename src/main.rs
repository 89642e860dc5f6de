//! Gelang - Fixed-Capacity Circular Buffer
//!
//! Arsitektur:
//! - Bounded: kapasitas tetap, elemen tertua ditimpa saat penuh
//! - Single-Allocation: satu Vec dialokasikan saat konstruksi
//! - Validated Traversal: cursor dengan generation check
//! - Two-Slice Iteration: urutan logis dijahit tanpa menyalin elemen

use gelang::core::RingBuffer;
use std::hint::black_box;
use std::time::Instant;

fn main() {
    println!("🔁 Gelang Circular Buffer - PoC v0.1");
    println!("====================================\n");

    benchmark_push();
    benchmark_traversal();
    benchmark_snapshot();

    println!("\n✅ All benchmarks complete!");
    println!("\nFor the full Criterion suite: cargo bench");
}

fn benchmark_push() {
    println!("📊 Push Benchmark (Silent Eviction)");
    println!("-----------------------------------");

    const ITERATIONS: usize = 1_000_000;
    const CAPACITY: usize = 65536;

    let mut buffer: RingBuffer<u64> = RingBuffer::new(CAPACITY).unwrap();

    // Warm up: isi sampai penuh supaya pengukuran murni jalur overwrite.
    for i in 0..CAPACITY as u64 {
        buffer.push(i);
    }

    let start = Instant::now();
    for i in 0..ITERATIONS {
        buffer.push(i as u64);
    }
    let push_duration = start.elapsed();
    black_box(&buffer);

    let push_ns = push_duration.as_nanos() as f64 / ITERATIONS as f64;

    println!("  Capacity: {}", CAPACITY);
    println!("  Operations: {}", ITERATIONS);
    println!(
        "  Push latency: {:.2} ns/op ({:.3} μs/op)",
        push_ns,
        push_ns / 1000.0
    );
    println!(
        "  Throughput:   {:.2} M ops/sec\n",
        ITERATIONS as f64 / push_duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_traversal() {
    println!("📊 Traversal Benchmark (Cursor vs Iterator)");
    println!("-------------------------------------------");

    const CAPACITY: usize = 65536;
    const ROUNDS: usize = 100;

    let mut buffer: RingBuffer<u64> = RingBuffer::new(CAPACITY).unwrap();
    // Dua kali kapasitas supaya layout fisik wrap dan dua slice aktif.
    for i in 0..(CAPACITY as u64 * 2) {
        buffer.push(i);
    }

    // Cursor: validasi generation pada setiap advance/current
    let start = Instant::now();
    let mut checksum = 0u64;
    for _ in 0..ROUNDS {
        let mut cursor = buffer.cursor();
        while cursor.advance(&buffer).unwrap() {
            checksum = checksum.wrapping_add(*cursor.current(&buffer).unwrap());
        }
    }
    let cursor_duration = start.elapsed();
    black_box(checksum);

    // Iterator borrow: validasi statis, tanpa check per elemen
    let start = Instant::now();
    let mut checksum = 0u64;
    for _ in 0..ROUNDS {
        checksum = checksum.wrapping_add(buffer.iter().sum::<u64>());
    }
    let iter_duration = start.elapsed();
    black_box(checksum);

    let total = (ROUNDS * CAPACITY) as f64;
    let cursor_ns = cursor_duration.as_nanos() as f64 / total;
    let iter_ns = iter_duration.as_nanos() as f64 / total;

    println!("  Elements: {} x {} rounds", CAPACITY, ROUNDS);
    println!(
        "  Cursor latency:   {:.2} ns/elem ({:.3} μs/elem)",
        cursor_ns,
        cursor_ns / 1000.0
    );
    println!(
        "  Iterator latency: {:.2} ns/elem ({:.3} μs/elem)\n",
        iter_ns,
        iter_ns / 1000.0
    );
}

fn benchmark_snapshot() {
    println!("📊 Snapshot Benchmark (to_vec / copy_to)");
    println!("----------------------------------------");

    const CAPACITY: usize = 65536;
    const ROUNDS: usize = 1000;

    let mut buffer: RingBuffer<u64> = RingBuffer::new(CAPACITY).unwrap();
    for i in 0..(CAPACITY as u64 + CAPACITY as u64 / 2) {
        buffer.push(i);
    }

    // to_vec: alokasi Vec baru tiap snapshot
    let start = Instant::now();
    for _ in 0..ROUNDS {
        black_box(buffer.to_vec());
    }
    let to_vec_duration = start.elapsed();

    // copy_to: destination pre-allocated, tanpa alokasi
    let mut dst = vec![0u64; CAPACITY];
    let start = Instant::now();
    for _ in 0..ROUNDS {
        buffer.copy_to(&mut dst, 0).unwrap();
    }
    let copy_duration = start.elapsed();
    black_box(&dst);

    let to_vec_us = to_vec_duration.as_micros() as f64 / ROUNDS as f64;
    let copy_us = copy_duration.as_micros() as f64 / ROUNDS as f64;

    println!("  Elements per snapshot: {}", CAPACITY);
    println!("  Rounds: {}", ROUNDS);
    println!("  to_vec latency:  {:.2} μs/snapshot", to_vec_us);
    println!("  copy_to latency: {:.2} μs/snapshot", copy_us);
    println!(
        "  copy_to throughput: {:.2} MB/sec",
        (ROUNDS * CAPACITY * std::mem::size_of::<u64>()) as f64
            / copy_duration.as_secs_f64()
            / 1_000_000.0
    );
}
