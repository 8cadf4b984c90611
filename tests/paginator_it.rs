use std::num::NonZeroUsize;

use agt_dashboard::rewards::paginator::total_pages;
use agt_dashboard::rewards::{paginate, PageCursor};

fn size(n: usize) -> NonZeroUsize {
  NonZeroUsize::new(n).unwrap()
}

#[test]
fn empty_list_has_single_empty_page() {
  let items: Vec<u32> = Vec::new();

  for requested in [-3, 0, 1, 2, 99] {
    let page = paginate(&items, size(6), requested);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.visible.is_empty());
  }
}

#[test]
fn page_past_the_end_clamps_to_last_page() {
  let items: Vec<u32> = (0..13).collect();

  let page = paginate(&items, size(6), 99);

  assert_eq!(page.page, 3);
  assert_eq!(page.total_pages, 3);
  assert_eq!(page.visible, &items[12..13]);
}

#[test]
fn page_zero_clamps_to_first_page() {
  let items: Vec<u32> = (0..13).collect();

  let page = paginate(&items, size(6), 0);

  assert_eq!(page.page, 1);
  assert_eq!(page.visible, &items[0..6]);
}

#[test]
fn middle_page_is_a_full_slice() {
  let items: Vec<u32> = (0..13).collect();

  let page = paginate(&items, size(6), 2);

  assert_eq!(page.visible, &items[6..12]);
}

#[test]
fn exact_multiple_does_not_add_empty_page() {
  assert_eq!(total_pages(12, size(6)), 2);
  assert_eq!(total_pages(13, size(6)), 3);
  assert_eq!(total_pages(0, size(6)), 1);
  assert_eq!(total_pages(1, size(1)), 1);
}

#[test]
fn cursor_navigation_stays_in_bounds() {
  let mut cursor = PageCursor::new();
  assert_eq!(cursor.current(), 1);

  cursor.previous();
  assert_eq!(cursor.current(), 1);

  cursor.next(3);
  cursor.next(3);
  cursor.next(3);
  assert_eq!(cursor.current(), 3);

  cursor.previous();
  assert_eq!(cursor.current(), 2);

  cursor.jump(42, 3);
  assert_eq!(cursor.current(), 3);
  cursor.jump(-1, 3);
  assert_eq!(cursor.current(), 1);

  cursor.jump(3, 3);
  cursor.clamp_to(2);
  assert_eq!(cursor.current(), 2);

  cursor.reset();
  assert_eq!(cursor.current(), 1);
}
