//! Performance benchmarks for arbor

use std::hint::black_box;
use std::path::Path;

use arbor::test_utils::TestDir;
use arbor::tree::compare_names;
use arbor::{MemoryFileSystem, Options, OsFileSystem, ResolvedConfig, TreeFormatter, TreeWalker};
use criterion::{Criterion, criterion_group, criterion_main};

fn memory_tree(width: usize, depth: usize) -> MemoryFileSystem {
    fn fill(fs: MemoryFileSystem, base: &str, width: usize, depth: usize) -> MemoryFileSystem {
        let mut fs = fs;
        for i in 0..width {
            fs = fs.with_file(&format!("{}file_{}.txt", base, i), "x");
        }
        if depth == 0 {
            return fs;
        }
        for i in 0..width {
            let sub = format!("{}dir_{}/", base, i);
            fs = fill(fs.with_dir(&sub), &sub, width, depth - 1);
        }
        fs
    }
    fill(MemoryFileSystem::new("/bench"), "", width, depth)
}

fn bench_walk_memory(c: &mut Criterion) {
    let fs = memory_tree(6, 3);
    let mut options = Options::new("/bench");
    options.exclude = Some("*_3.txt".to_string());
    let config = ResolvedConfig::resolve_in(&options, &fs, Path::new("/")).unwrap();

    c.bench_function("walk_memory_6x3", |b| {
        b.iter(|| {
            let walker = TreeWalker::new(&config, &fs);
            let mut formatter = TreeFormatter::plain();
            black_box(walker.walk(&mut formatter).unwrap())
        })
    });
}

fn bench_walk_disk(c: &mut Criterion) {
    let dir = TestDir::new();
    dir.populate(5, 3);
    dir.add_file(".gitignore", "dir_4/\n*_0.txt\n");
    let mut options = Options::new(dir.path());
    options.use_gitignore = true;
    let config = ResolvedConfig::resolve(&options, &OsFileSystem).unwrap();

    c.bench_function("walk_disk_5x3_gitignore", |b| {
        b.iter(|| {
            let walker = TreeWalker::new(&config, &OsFileSystem);
            let mut formatter = TreeFormatter::plain();
            black_box(walker.walk(&mut formatter).unwrap())
        })
    });
}

fn bench_compare_names(c: &mut Criterion) {
    let mut names: Vec<String> = (0..500)
        .map(|i| {
            if i % 3 == 0 {
                format!("File_{:03}.rs", 500 - i)
            } else {
                format!("file_{:03}.rs", i)
            }
        })
        .collect();

    c.bench_function("sort_500_names", |b| {
        b.iter(|| {
            names.sort_by(|a, b| compare_names(a, b));
            names.reverse();
            black_box(names.len())
        })
    });
}

criterion_group!(benches, bench_walk_memory, bench_walk_disk, bench_compare_names);
criterion_main!(benches);
