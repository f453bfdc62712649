use std::{
    fs,
    hash::{Hash, Hasher},
    path::PathBuf,
};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

/// Folder holding the dhat output files, one per test binary.
const OUTPUT_DIR: &str = "dhat-output/";

/// Name the dhat output file after a hash of the test source path, so that
/// test binaries running in parallel never share a file.
fn output_file(test_filename: &str) -> PathBuf {
    let mut output_path = PathBuf::from(OUTPUT_DIR);
    fs::create_dir_all(&output_path).expect("unable to create dhat output folder");

    let mut hasher = rustc_hash::FxHasher::default();
    test_filename.hash(&mut hasher);
    output_path.push(format!("heap-{:x}.json", hasher.finish()));

    output_path
}

/// Start a testing [`dhat::Profiler`] for the test in `file_name`.
///
/// Only one profiler can run per process, so each memory usage test lives in
/// its own test binary.
#[cfg_attr(miri, allow(dead_code))]
pub fn start_profiler(file_name: &str) -> dhat::Profiler {
    dhat::Profiler::builder()
        .testing()
        .file_name(output_file(file_name))
        .trim_backtraces(Some(8))
        .build()
}

/// Take a snapshot of the heap while `_profiler` is running.
#[cfg_attr(miri, allow(dead_code))]
pub fn heap_snapshot(_profiler: &dhat::Profiler) -> dhat::HeapStats {
    dhat::HeapStats::get()
}

/// Assert that every block allocated since the profiler started has been
/// freed again.
#[cfg_attr(miri, allow(dead_code))]
pub fn assert_all_freed(profiler: &dhat::Profiler) {
    let stats = heap_snapshot(profiler);

    dhat::assert_eq!(stats.curr_blocks, 0);
    dhat::assert_eq!(stats.curr_bytes, 0);
}

/// Print the peak heap usage, spread over `num_members` trie members.
#[cfg_attr(miri, allow(dead_code))]
pub fn report_peak(profiler: &dhat::Profiler, num_members: usize) {
    let stats = heap_snapshot(profiler);

    let mean_blocks_per_member = (stats.max_blocks as f64) / (num_members as f64);
    let mean_bytes_per_member = (stats.max_bytes as f64) / (num_members as f64);

    eprintln!(
        "Storing {num_members} members peaked at [{mean_blocks_per_member} mean blocks per \
         member] and [{mean_bytes_per_member} mean bytes per member]."
    );
}
