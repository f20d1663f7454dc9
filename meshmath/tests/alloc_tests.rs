use meshmath::mesh::*;
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

// Tracks the net number of live bytes allocated by the current thread, so
// tests running in parallel do not see each other's allocations.
struct CountingAllocator;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

fn track(delta: isize) {
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
}

fn live_bytes() -> isize {
    LIVE_BYTES.with(|live| live.get())
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            track(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        track(-(layout.size() as isize));
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            track(layout.size() as isize);
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            track(new_size as isize - layout.size() as isize);
        }
        new_ptr
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn mesh_file(vertex_count: u32, triangle_count: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&vertex_count.to_le_bytes());
        bytes.extend_from_slice(&triangle_count.to_le_bytes());
        bytes.resize(8 + vertex_count as usize * 24 + triangle_count as usize * 12, 0);
        bytes
    }

    #[test]
    fn truncated_reads_release_everything() {
        let file = mesh_file(64, 32);
        // cut inside the header, the vertex section and the triangle section
        let cuts = [6, 8 + 100, 8 + 64 * 24 + 5, file.len() - 1];

        for cut in cuts {
            let before = live_bytes();
            let failed = matches!(read_mesh(&file[..cut]), Err(MeshError::Truncated { .. }));
            assert_eq!(live_bytes(), before, "leak after cutting at {}", cut);
            assert!(failed, "cut at {} did not fail", cut);
        }
    }

    #[test]
    fn truncated_load_releases_everything() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/truncated.bin");
        let before = live_bytes();
        let failed = matches!(load_mesh(&path), Err(MeshError::Truncated { .. }));
        assert_eq!(live_bytes(), before);
        assert!(failed);
    }

    #[test]
    fn successful_read_owns_exactly_two_buffers() {
        let file = mesh_file(10, 4);
        let before = live_bytes();
        let mesh = read_mesh(file.as_slice());
        let during = live_bytes() - before;
        drop(mesh);
        assert_eq!(during, 10 * 24 + 4 * 12);
        assert_eq!(live_bytes(), before);
    }
}
