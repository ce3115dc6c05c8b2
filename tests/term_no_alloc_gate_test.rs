use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_snake::core::GameState;
use tui_snake::scores::ScoreEntry;
use tui_snake::term::{FrameBuffer, GameView, Hud, Viewport};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn snapshot_and_render_are_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let state = GameState::new(20, 1);
    let board = vec![ScoreEntry::new("ada", 120), ScoreEntry::new("bob", 40)];
    let hud = Hud {
        player: "ada",
        leaderboard: &board,
        status: Some("Saved!"),
    };

    // Warm-up sizes the snapshot and the framebuffer.
    let mut snap = state.snapshot();
    view.render_into(&snap, &hud, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, &hud, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
